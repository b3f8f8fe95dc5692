use async_trait::async_trait;
use company_filters::{parse_companies, DatasetError};
use shared_types::Company;
use tracing::debug;

/// Shown to the user when the data source answers with a non-success status.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load companies. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Network request failed: {0}")]
    Transport(String),

    #[error("Company data request returned HTTP {0}")]
    Status(u16),

    #[error(transparent)]
    MalformedBody(#[from] DatasetError),
}

impl LoadError {
    /// Message surfaced in the session's error state.
    pub fn user_message(&self) -> String {
        match self {
            LoadError::Status(_) => LOAD_FAILED_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Anything that can produce the full company list.
#[async_trait]
pub trait CompanySource: Send + Sync {
    async fn fetch_companies(&self) -> Result<Vec<Company>, LoadError>;

    /// Human readable location of the data, used in logs.
    fn describe(&self) -> String;
}

/// Fetches the company list with a single GET request.
pub struct HttpCompanySource {
    client: reqwest::Client,
    url: String,
}

impl HttpCompanySource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl CompanySource for HttpCompanySource {
    async fn fetch_companies(&self) -> Result<Vec<Company>, LoadError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let companies = parse_companies(&body)?;
        debug!("Fetched {} companies from {}", companies.len(), self.url);

        Ok(companies)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
