use shared_types::{CityOption, Company, FilterOptions, LocationOptions};
use std::collections::{BTreeMap, BTreeSet};

/// Derives every filter option set from the full company list in one pass.
///
/// Empty industry, country, state or city values are skipped rather than
/// treated as errors. Within a state, a city name seen twice keeps the postal
/// code of its last occurrence, while the lowercase lookup keeps the first.
pub fn derive_options(companies: &[Company]) -> FilterOptions {
    let mut industries: BTreeSet<&str> = BTreeSet::new();
    let mut countries: BTreeSet<&str> = BTreeSet::new();
    let mut states_by_country: BTreeMap<&str, BTreeSet<&str>> = BTreeMap::new();
    let mut cities_by_state: BTreeMap<&str, BTreeMap<&str, &str>> = BTreeMap::new();
    let mut city_lookup: BTreeMap<String, String> = BTreeMap::new();

    for company in companies {
        if !company.industry.is_empty() {
            industries.insert(&company.industry);
        }

        if !company.country.is_empty() {
            countries.insert(&company.country);
            let states = states_by_country.entry(&company.country).or_default();
            if !company.state.is_empty() {
                states.insert(&company.state);
            }
        }

        if company.state.is_empty() {
            continue;
        }

        let cities = cities_by_state.entry(&company.state).or_default();
        if !company.city.is_empty() {
            cities.insert(&company.city, &company.postal_code);
            city_lookup
                .entry(company.city.to_lowercase())
                .or_insert_with(|| company.postal_code.clone());
        }
    }

    let locations = LocationOptions {
        countries: countries.into_iter().map(str::to_string).collect(),
        states: states_by_country
            .into_iter()
            .map(|(country, states)| {
                (
                    country.to_string(),
                    states.into_iter().map(str::to_string).collect(),
                )
            })
            .collect(),
        cities: cities_by_state
            .into_iter()
            .map(|(state, cities)| {
                let options = cities
                    .into_iter()
                    .map(|(name, postal_code)| CityOption {
                        name: name.to_string(),
                        postal_code: postal_code.to_string(),
                    })
                    .collect();
                (state.to_string(), options)
            })
            .collect(),
        city_lookup,
    };

    FilterOptions {
        industries: industries.into_iter().map(str::to_string).collect(),
        locations,
    }
}
