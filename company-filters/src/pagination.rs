use shared_types::{Company, CompanyPage};

/// Number of companies shown per page.
pub const PAGE_SIZE: usize = 6;

/// Number of pages needed for `len` results; never less than 1.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size.max(1)).max(1)
}

/// Returns the records of a 1-based page.
///
/// Page 0 is read as page 1. Pages past the end yield an empty slice and the
/// last page may be partial.
pub fn paginate(companies: &[Company], page: usize, page_size: usize) -> &[Company] {
    let page_size = page_size.max(1);
    let start = page.max(1).saturating_sub(1).saturating_mul(page_size);
    if start >= companies.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(companies.len());
    &companies[start..end]
}

/// Clamps a requested page into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Bundles the records of `page` with the navigation details a client renders.
pub fn page_window(companies: &[Company], page: usize, page_size: usize) -> CompanyPage {
    let page = page.max(1);
    let page_size = page_size.max(1);
    let total_pages = total_pages(companies.len(), page_size);

    CompanyPage {
        companies: paginate(companies, page, page_size).to_vec(),
        page,
        page_size,
        total_pages,
        total_results: companies.len(),
        has_previous: page > 1,
        has_next: page < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter_companies;
    use crate::test_support::{company, directory};
    use shared_types::{FilterChange, FilterState};

    fn seven() -> Vec<Company> {
        (1..=7).map(|n| company(n, &format!("C{}", n))).collect()
    }

    #[test]
    fn test_seven_companies_span_two_pages() {
        let sorted = filter_companies(&seven(), &FilterState::default());

        let first = paginate(&sorted, 1, PAGE_SIZE);
        let names: Vec<&str> = first.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2", "C3", "C4", "C5", "C6"]);

        let second = paginate(&sorted, 2, PAGE_SIZE);
        assert_eq!(second.len(), 1);
        assert_eq!(second[0].name, "C7");

        assert_eq!(total_pages(sorted.len(), PAGE_SIZE), 2);
    }

    #[test]
    fn test_empty_result_has_one_page() {
        let mut filters = FilterState::default();
        filters.apply(FilterChange::Industry("Fintech".to_string()));
        let filtered = filter_companies(&seven(), &filters);

        assert!(filtered.is_empty());
        assert_eq!(total_pages(filtered.len(), PAGE_SIZE), 1);
        assert!(paginate(&filtered, 1, PAGE_SIZE).is_empty());
    }

    #[test]
    fn test_pages_reconstruct_the_list() {
        let mut companies = directory();
        companies.extend(seven());
        let sorted = filter_companies(&companies, &FilterState::default());
        let pages = total_pages(sorted.len(), PAGE_SIZE);

        let mut rebuilt = Vec::new();
        for page in 1..=pages {
            let slice = paginate(&sorted, page, PAGE_SIZE);
            assert!(slice.len() <= PAGE_SIZE);
            rebuilt.extend_from_slice(slice);
        }

        assert_eq!(rebuilt, sorted);
    }

    #[test]
    fn test_out_of_range_pages() {
        let companies = seven();
        assert!(paginate(&companies, 3, PAGE_SIZE).is_empty());
        assert!(paginate(&companies, usize::MAX, PAGE_SIZE).is_empty());
        assert_eq!(paginate(&companies, 0, PAGE_SIZE), paginate(&companies, 1, PAGE_SIZE));
    }

    #[test]
    fn test_total_pages_boundaries() {
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
        assert_eq!(total_pages(6, PAGE_SIZE), 1);
        assert_eq!(total_pages(12, PAGE_SIZE), 2);
        assert_eq!(total_pages(13, PAGE_SIZE), 3);
        assert_eq!(total_pages(5, 0), 5);
    }

    #[test]
    fn test_clamp_page() {
        assert_eq!(clamp_page(0, 3), 1);
        assert_eq!(clamp_page(2, 3), 2);
        assert_eq!(clamp_page(9, 3), 3);
        assert_eq!(clamp_page(4, 0), 1);
    }

    #[test]
    fn test_page_window() {
        let companies = seven();

        let window = page_window(&companies, 1, PAGE_SIZE);
        assert_eq!(window.companies.len(), 6);
        assert_eq!(window.total_pages, 2);
        assert_eq!(window.total_results, 7);
        assert!(!window.has_previous);
        assert!(window.has_next);

        let window = page_window(&companies, 2, PAGE_SIZE);
        assert_eq!(window.companies.len(), 1);
        assert!(window.has_previous);
        assert!(!window.has_next);

        let window = page_window(&[], 1, PAGE_SIZE);
        assert!(window.companies.is_empty());
        assert_eq!(window.total_pages, 1);
        assert!(!window.has_next);
    }
}
