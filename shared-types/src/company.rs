use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One entry of the companies dataset. Records are read-only once loaded.
///
/// Location fields and the tagline may be missing from the source document;
/// they deserialize to empty strings and are treated as absent by the filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Company {
    #[ts(type = "number")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub postal_code: String,
    #[serde(default)]
    pub employee_count: u32,
    pub founded: i32,
    #[serde(default)]
    pub tagline: String,
}
