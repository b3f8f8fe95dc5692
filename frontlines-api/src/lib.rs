pub mod config;
pub mod handlers;
pub mod integrations;
pub mod jobs;

#[cfg(test)]
pub(crate) mod test_support;

pub use jobs::session_manager::{BrowserSession, SessionManager};
