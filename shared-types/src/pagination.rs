use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::Company;

/// One page of the filtered and sorted company list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CompanyPage {
    pub companies: Vec<Company>,
    /// 1-based page number that was requested.
    pub page: usize,
    pub page_size: usize,
    /// Always at least 1, even for an empty result set.
    pub total_pages: usize,
    pub total_results: usize,
    pub has_previous: bool,
    pub has_next: bool,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SetPageRequest {
    pub page: usize,
}
