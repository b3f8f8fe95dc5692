//! Company Filters Crate
//!
//! Pure derivation pipeline behind the company directory. Every function here is a
//! plain transformation of a company list (and the current filter state); nothing
//! performs I/O or keeps state between calls, so results are recomputed from
//! scratch whenever the inputs change.
//!
//! # Pipeline
//!
//! - [`dataset`]: parses the JSON company document
//! - [`options`]: derives the industry, country, state and city option sets
//! - [`filters`]: applies the active predicates and the selected sort
//! - [`pagination`]: slices the sorted list into fixed-size pages
//! - [`stats`]: dataset-wide header figures
//! - [`summary`]: labels for the filters currently narrowing the results
//!
//! # Example
//!
//! ```rust,ignore
//! use company_filters::{derive_options, filter_companies, page_window, PAGE_SIZE};
//!
//! let options = derive_options(&companies);
//! let filtered = filter_companies(&companies, &filters);
//! let page = page_window(&filtered, 1, PAGE_SIZE);
//! ```

pub mod dataset;
pub mod filters;
pub mod options;
pub mod pagination;
pub mod stats;
pub mod summary;

#[cfg(test)]
pub(crate) mod test_support;

pub use dataset::{parse_companies, DatasetError};
pub use filters::{compare_names, filter_companies, matches_filters, sort_companies};
pub use options::derive_options;
pub use pagination::{clamp_page, page_window, paginate, total_pages, PAGE_SIZE};
pub use stats::directory_stats;
pub use summary::active_filters;
