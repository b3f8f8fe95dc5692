use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use ts_rs::TS;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CityOption {
    pub name: String,
    pub postal_code: String,
}

/// Location values available for the country, state and city filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LocationOptions {
    pub countries: Vec<String>,
    /// Country -> states seen for that country.
    pub states: BTreeMap<String, Vec<String>>,
    /// State -> cities seen for that state, one entry per city name.
    pub cities: BTreeMap<String, Vec<CityOption>>,
    /// Lowercase city name -> postal code.
    pub city_lookup: BTreeMap<String, String>,
}

impl LocationOptions {
    pub fn states_for(&self, country: &str) -> &[String] {
        self.states.get(country).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn cities_for(&self, state: &str) -> &[CityOption] {
        self.cities.get(state).map(Vec::as_slice).unwrap_or_default()
    }

    /// Case-insensitive city name to postal code lookup.
    pub fn postal_code_for(&self, city: &str) -> Option<&str> {
        self.city_lookup
            .get(&city.to_lowercase())
            .map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterOptions {
    pub industries: Vec<String>,
    pub locations: LocationOptions,
}

/// Header figures for the whole dataset, independent of the active filters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DirectoryStats {
    pub company_count: usize,
    pub industry_count: usize,
    #[ts(type = "number")]
    pub total_employees: u64,
}
