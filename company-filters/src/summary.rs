use shared_types::{
    is_option_active, ActiveFilter, FilterChange, FilterState, LocationOptions, ALL_OPTION,
};

/// Lists the filters that currently narrow the results, in form order.
///
/// The city chip carries the postal code of a known city name, looked up
/// case-insensitively.
pub fn active_filters(filters: &FilterState, locations: &LocationOptions) -> Vec<ActiveFilter> {
    let mut active = Vec::new();

    if !filters.search_term.is_empty() {
        active.push(ActiveFilter {
            label: format!("Name: \"{}\"", filters.search_term),
            reset: FilterChange::SearchTerm(String::new()),
        });
    }

    if is_option_active(&filters.industry) {
        active.push(ActiveFilter {
            label: format!("Industry: {}", filters.industry),
            reset: FilterChange::Industry(ALL_OPTION.to_string()),
        });
    }

    if is_option_active(&filters.country) {
        active.push(ActiveFilter {
            label: format!("Country: {}", filters.country),
            reset: FilterChange::Country(ALL_OPTION.to_string()),
        });
    }

    if is_option_active(&filters.state) {
        active.push(ActiveFilter {
            label: format!("State: {}", filters.state),
            reset: FilterChange::State(ALL_OPTION.to_string()),
        });
    }

    if !filters.city.is_empty() {
        let label = match locations.postal_code_for(&filters.city) {
            Some(postal_code) => format!("City/Village: {} ({})", filters.city, postal_code),
            None => format!("City/Village: {}", filters.city),
        };
        active.push(ActiveFilter {
            label,
            reset: FilterChange::City(String::new()),
        });
    }

    active
}
