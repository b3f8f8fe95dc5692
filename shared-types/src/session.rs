use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{ActiveFilter, CompanyPage, DirectoryStats, FilterOptions, FilterState};

/// Progress of the company list fetch.
///
/// `Idle -> Loading -> {Success, Error}`, and `Success | Error -> Loading` on retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

#[derive(Debug, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SetViewModeRequest {
    pub view_mode: ViewMode,
}

/// Everything a client needs to render the directory page.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SessionView {
    pub status: LoadStatus,
    pub error_message: Option<String>,
    /// Unix timestamp of the last successful load.
    #[ts(type = "number | null")]
    pub loaded_at: Option<i64>,
    #[ts(type = "number")]
    pub load_sequence: u64,
    pub filters: FilterState,
    pub active_filters: Vec<ActiveFilter>,
    pub view_mode: ViewMode,
    pub page: CompanyPage,
    pub options: FilterOptions,
    pub stats: DirectoryStats,
    pub has_results: bool,
}
