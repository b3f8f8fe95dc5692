use shared_types::Company;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Malformed company data: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Parses a JSON array of company records.
pub fn parse_companies(content: &[u8]) -> Result<Vec<Company>, DatasetError> {
    let companies: Vec<Company> = serde_json::from_slice(content)?;
    Ok(companies)
}
