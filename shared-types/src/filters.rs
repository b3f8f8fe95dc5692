use serde::{Deserialize, Deserializer, Serialize, Serializer};
use ts_rs::TS;

/// Select value meaning "no restriction" for industry, country and state.
pub const ALL_OPTION: &str = "all";

/// Returns true when a select or text filter value restricts the result set.
pub fn is_option_active(value: &str) -> bool {
    !value.is_empty() && value != ALL_OPTION
}

/// Ordering applied after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, TS)]
#[ts(export)]
pub enum SortKey {
    #[default]
    #[ts(rename = "name-asc")]
    NameAsc,
    #[ts(rename = "name-desc")]
    NameDesc,
    #[ts(rename = "size-asc")]
    SizeAsc,
    #[ts(rename = "size-desc")]
    SizeDesc,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::NameDesc => "name-desc",
            SortKey::SizeAsc => "size-asc",
            SortKey::SizeDesc => "size-desc",
        }
    }

    /// Parses a wire value. Unknown keys fall back to `NameAsc`.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "name-desc" => SortKey::NameDesc,
            "size-asc" => SortKey::SizeAsc,
            "size-desc" => SortKey::SizeDesc,
            _ => SortKey::NameAsc,
        }
    }
}

impl Serialize for SortKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(SortKey::from_wire(&value))
    }
}

/// Current search, filter and sort criteria of a browsing session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FilterState {
    pub search_term: String,
    pub industry: String,
    pub country: String,
    pub state: String,
    /// Matched against both the city name and the postal code.
    pub city: String,
    pub sort_by: SortKey,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            industry: ALL_OPTION.to_string(),
            country: ALL_OPTION.to_string(),
            state: ALL_OPTION.to_string(),
            city: String::new(),
            sort_by: SortKey::NameAsc,
        }
    }
}

impl FilterState {
    /// Applies a single option change.
    ///
    /// Selecting a country clears the dependent state and city selections,
    /// and selecting a state clears the city query.
    pub fn apply(&mut self, change: FilterChange) {
        match change {
            FilterChange::SearchTerm(value) => self.search_term = value,
            FilterChange::Industry(value) => self.industry = value,
            FilterChange::Country(value) => {
                self.country = value;
                self.state = ALL_OPTION.to_string();
                self.city.clear();
            }
            FilterChange::State(value) => {
                self.state = value;
                self.city.clear();
            }
            FilterChange::City(value) => self.city = value,
            FilterChange::SortBy(key) => self.sort_by = key,
            FilterChange::Reset => *self = FilterState::default(),
        }
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// A filter currently narrowing the results, rendered as a removable chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ActiveFilter {
    pub label: String,
    /// Change that clears this filter when the chip is removed.
    pub reset: FilterChange,
}

/// An explicit option-change action, e.g. `{"field": "country", "value": "India"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "field", content = "value", rename_all = "camelCase")]
#[ts(export)]
pub enum FilterChange {
    SearchTerm(String),
    Industry(String),
    Country(String),
    State(String),
    City(String),
    SortBy(SortKey),
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_key_wire_names() {
        assert_eq!(serde_json::to_string(&SortKey::SizeDesc).unwrap(), "\"size-desc\"");

        let key: SortKey = serde_json::from_str("\"name-desc\"").unwrap();
        assert_eq!(key, SortKey::NameDesc);
    }

    #[test]
    fn test_unknown_sort_key_falls_back_to_name_asc() {
        let key: SortKey = serde_json::from_str("\"founded-asc\"").unwrap();
        assert_eq!(key, SortKey::NameAsc);
    }

    #[test]
    fn test_country_change_resets_state_and_city() {
        let mut filters = FilterState::default();
        filters.apply(FilterChange::Country("India".to_string()));
        filters.apply(FilterChange::State("Karnataka".to_string()));
        filters.apply(FilterChange::City("beng".to_string()));

        filters.apply(FilterChange::Country("Germany".to_string()));
        assert_eq!(filters.country, "Germany");
        assert_eq!(filters.state, ALL_OPTION);
        assert!(filters.city.is_empty());
    }

    #[test]
    fn test_state_change_resets_city_only() {
        let mut filters = FilterState::default();
        filters.apply(FilterChange::Country("India".to_string()));
        filters.apply(FilterChange::City("560".to_string()));

        filters.apply(FilterChange::State("Karnataka".to_string()));
        assert_eq!(filters.country, "India");
        assert_eq!(filters.state, "Karnataka");
        assert!(filters.city.is_empty());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filters = FilterState::default();
        filters.apply(FilterChange::SearchTerm("north".to_string()));
        filters.apply(FilterChange::SortBy(SortKey::SizeAsc));
        assert!(!filters.is_default());

        filters.apply(FilterChange::Reset);
        assert!(filters.is_default());
    }

    #[test]
    fn test_filter_change_wire_format() {
        let change: FilterChange =
            serde_json::from_str(r#"{"field": "country", "value": "India"}"#).unwrap();
        assert_eq!(change, FilterChange::Country("India".to_string()));

        let change: FilterChange =
            serde_json::from_str(r#"{"field": "sortBy", "value": "size-asc"}"#).unwrap();
        assert_eq!(change, FilterChange::SortBy(SortKey::SizeAsc));

        let change: FilterChange = serde_json::from_str(r#"{"field": "reset"}"#).unwrap();
        assert_eq!(change, FilterChange::Reset);
    }

    #[test]
    fn test_partial_filter_state_uses_defaults() {
        let filters: FilterState = serde_json::from_str(r#"{"industry": "Fintech"}"#).unwrap();
        assert_eq!(filters.industry, "Fintech");
        assert_eq!(filters.country, ALL_OPTION);
        assert_eq!(filters.sort_by, SortKey::NameAsc);
    }

    #[test]
    fn test_option_activity() {
        assert!(!is_option_active(""));
        assert!(!is_option_active(ALL_OPTION));
        assert!(is_option_active("Fintech"));
    }
}
