use shared_types::{is_option_active, Company, FilterState, SortKey};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns true when the company passes every active predicate of `filters`.
pub fn matches_filters(company: &Company, filters: &FilterState) -> bool {
    let search_term = filters.search_term.to_lowercase();
    let city_query = filters.city.to_lowercase();
    matches_prepared(company, filters, &search_term, &city_query)
}

fn matches_prepared(
    company: &Company,
    filters: &FilterState,
    search_term: &str,
    city_query: &str,
) -> bool {
    if !search_term.is_empty() && !company.name.to_lowercase().contains(search_term) {
        return false;
    }

    if is_option_active(&filters.industry) && company.industry != filters.industry {
        return false;
    }

    if is_option_active(&filters.country) && company.country != filters.country {
        return false;
    }

    if is_option_active(&filters.state) && company.state != filters.state {
        return false;
    }

    if !city_query.is_empty()
        && !company.city.to_lowercase().contains(city_query)
        && !company.postal_code.to_lowercase().contains(city_query)
    {
        return false;
    }

    true
}

/// Applies all active predicates, then the selected sort.
pub fn filter_companies(companies: &[Company], filters: &FilterState) -> Vec<Company> {
    let search_term = filters.search_term.to_lowercase();
    let city_query = filters.city.to_lowercase();

    let mut output: Vec<Company> = companies
        .iter()
        .filter(|company| matches_prepared(company, filters, &search_term, &city_query))
        .cloned()
        .collect();

    sort_companies(&mut output, filters.sort_by);
    output
}

pub fn sort_companies(companies: &mut [Company], sort_by: SortKey) {
    match sort_by {
        SortKey::NameAsc => companies.sort_by(|a, b| compare_names(&a.name, &b.name)),
        SortKey::NameDesc => companies.sort_by(|a, b| compare_names(&b.name, &a.name)),
        SortKey::SizeAsc => companies.sort_by_key(|company| company.employee_count),
        SortKey::SizeDesc => {
            companies.sort_by(|a, b| b.employee_count.cmp(&a.employee_count))
        }
    }
}

/// Collation used for name sorting.
///
/// Names are compared by base letters first (accents and case ignored), then
/// with accents, then by raw value so that distinct names never compare equal.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| lowercase(a).cmp(lowercase(b)))
        .then_with(|| a.cmp(b))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    lowercase(name).filter(|c| !is_combining_mark(*c))
}

fn lowercase(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd().flat_map(char::to_lowercase)
}
