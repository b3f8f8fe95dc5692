use shared_types::{Company, DirectoryStats};
use std::collections::HashSet;

pub fn directory_stats(companies: &[Company]) -> DirectoryStats {
    let industries: HashSet<&str> = companies
        .iter()
        .map(|company| company.industry.as_str())
        .filter(|industry| !industry.is_empty())
        .collect();

    DirectoryStats {
        company_count: companies.len(),
        industry_count: industries.len(),
        total_employees: companies
            .iter()
            .map(|company| u64::from(company.employee_count))
            .sum(),
    }
}
