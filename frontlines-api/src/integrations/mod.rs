pub mod company_source;

pub use company_source::{CompanySource, HttpCompanySource, LoadError, LOAD_FAILED_MESSAGE};
