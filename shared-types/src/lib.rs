use serde::{Deserialize, Serialize};
use ts_rs::TS;

pub mod company;
pub mod filters;
pub mod options;
pub mod pagination;
pub mod session;

pub use company::Company;
pub use filters::{
    is_option_active, ActiveFilter, FilterChange, FilterState, SortKey, ALL_OPTION,
};
pub use options::{CityOption, DirectoryStats, FilterOptions, LocationOptions};
pub use pagination::{CompanyPage, SetPageRequest};
pub use session::{LoadStatus, SessionView, SetViewModeRequest, ViewMode};

/// Error response for API endpoints
#[derive(Debug, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
