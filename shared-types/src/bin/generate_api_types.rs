use shared_types::*;
use std::fs;
use std::path::PathBuf;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut types = Vec::new();

    // Company types
    types.push(clean_type(Company::export_to_string()?));

    // Filter types
    types.push(clean_type(SortKey::export_to_string()?));
    types.push(clean_type(FilterState::export_to_string()?));
    types.push(clean_type(FilterChange::export_to_string()?));
    types.push(clean_type(ActiveFilter::export_to_string()?));

    // Option types
    types.push(clean_type(CityOption::export_to_string()?));
    types.push(clean_type(LocationOptions::export_to_string()?));
    types.push(clean_type(FilterOptions::export_to_string()?));
    types.push(clean_type(DirectoryStats::export_to_string()?));

    // Pagination types
    types.push(clean_type(CompanyPage::export_to_string()?));
    types.push(clean_type(SetPageRequest::export_to_string()?));

    // Session types
    types.push(clean_type(LoadStatus::export_to_string()?));
    types.push(clean_type(ViewMode::export_to_string()?));
    types.push(clean_type(SetViewModeRequest::export_to_string()?));
    types.push(clean_type(SessionView::export_to_string()?));
    types.push(clean_type(ErrorResponse::export_to_string()?));

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("../web/src/api-types"));
    fs::create_dir_all(&output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

/// Strips per-type imports and banner comments so all definitions can share one file.
fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    let filtered: Vec<&str> = type_def
        .lines()
        .filter(|line| {
            let trimmed = line.trim();
            !trimmed.starts_with("import type")
                && !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
