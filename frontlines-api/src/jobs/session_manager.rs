use crate::integrations::{CompanySource, LoadError};
use company_filters::{
    active_filters, clamp_page, derive_options, directory_stats, filter_companies, matches_filters,
    page_window, total_pages, PAGE_SIZE,
};
use shared_types::{
    Company, CompanyPage, FilterChange, FilterOptions, FilterState, LoadStatus, SessionView,
    ViewMode,
};
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// State of the single browsing session: the loaded list plus everything the
/// user has selected. All derived data is recomputed from it on demand.
#[derive(Debug, Default)]
pub struct BrowserSession {
    companies: Vec<Company>,
    status: LoadStatus,
    error_message: Option<String>,
    loaded_at: Option<i64>,
    filters: FilterState,
    page: usize,
    view_mode: ViewMode,
    load_sequence: u64,
}

impl BrowserSession {
    pub fn new() -> Self {
        Self {
            page: 1,
            ..Default::default()
        }
    }

    pub fn companies(&self) -> &[Company] {
        &self.companies
    }

    pub fn status(&self) -> LoadStatus {
        self.status
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Applies an option change and returns to the first page.
    pub fn apply_filter(&mut self, change: FilterChange) {
        self.filters.apply(change);
        self.page = 1;
    }

    pub fn reset_filters(&mut self) {
        self.apply_filter(FilterChange::Reset);
    }

    /// Moves to `page`, clamped to the pages of the current filtered list.
    pub fn set_page(&mut self, page: usize) -> usize {
        let matching = self
            .companies
            .iter()
            .filter(|company| matches_filters(company, &self.filters))
            .count();

        self.page = clamp_page(page, total_pages(matching, PAGE_SIZE));
        self.page
    }

    pub fn set_view_mode(&mut self, view_mode: ViewMode) {
        self.view_mode = view_mode;
    }

    /// Marks a new fetch as in flight and returns its sequence number.
    pub fn begin_load(&mut self) -> u64 {
        self.load_sequence += 1;
        self.status = LoadStatus::Loading;
        self.error_message = None;
        self.load_sequence
    }

    /// Records the outcome of fetch `sequence`.
    ///
    /// Outcomes are applied in the order they resolve, so an older fetch that
    /// finishes after a newer one overwrites it.
    pub fn finish_load(&mut self, sequence: u64, result: Result<Vec<Company>, LoadError>) {
        if sequence < self.load_sequence {
            debug!(
                "Load {} resolved after newer load {} was issued",
                sequence, self.load_sequence
            );
        }

        match result {
            Ok(companies) => {
                info!("Load {} succeeded with {} companies", sequence, companies.len());
                self.companies = companies;
                self.status = LoadStatus::Success;
                self.error_message = None;
                self.loaded_at = Some(chrono::Utc::now().timestamp());
            }
            Err(e) => {
                warn!("Load {} failed: {}", sequence, e);
                self.status = LoadStatus::Error;
                self.error_message = Some(e.user_message());
            }
        }
    }

    /// Runs an ad-hoc query over the loaded list without touching session state.
    pub fn query(&self, filters: &FilterState, page: usize) -> CompanyPage {
        let filtered = filter_companies(&self.companies, filters);
        page_window(&filtered, page, PAGE_SIZE)
    }

    pub fn options(&self) -> FilterOptions {
        derive_options(&self.companies)
    }

    pub fn company(&self, id: i64) -> Option<&Company> {
        self.companies.iter().find(|company| company.id == id)
    }

    pub fn view(&self) -> SessionView {
        let page = self.query(&self.filters, self.page);
        let options = self.options();

        SessionView {
            status: self.status,
            error_message: self.error_message.clone(),
            loaded_at: self.loaded_at,
            load_sequence: self.load_sequence,
            filters: self.filters.clone(),
            active_filters: active_filters(&self.filters, &options.locations),
            view_mode: self.view_mode,
            has_results: page.total_results > 0,
            page,
            options,
            stats: directory_stats(&self.companies),
        }
    }
}

/// Owns the browsing session and drives company list loads.
pub struct SessionManager {
    source: Arc<dyn CompanySource>,
    session: Arc<RwLock<BrowserSession>>,
}

impl SessionManager {
    pub fn new(source: Arc<dyn CompanySource>) -> Self {
        Self {
            source,
            session: Arc::new(RwLock::new(BrowserSession::new())),
        }
    }

    /// Fetches the company list and waits for the outcome.
    pub async fn load(&self) -> LoadStatus {
        let sequence = self.session.write().await.begin_load();
        Self::run_load(self.source.clone(), self.session.clone(), sequence).await
    }

    /// Marks the session as loading and fetches in the background.
    ///
    /// Loads already in flight are left running.
    pub async fn start_load(&self) -> JoinHandle<LoadStatus> {
        let sequence = self.session.write().await.begin_load();
        let source = self.source.clone();
        let session = self.session.clone();

        tokio::spawn(Self::run_load(source, session, sequence))
    }

    /// Resets every filter to its default and issues a fresh load.
    pub async fn retry(&self) -> JoinHandle<LoadStatus> {
        self.session.write().await.reset_filters();
        info!("Retrying company load with default filters");
        self.start_load().await
    }

    async fn run_load(
        source: Arc<dyn CompanySource>,
        session: Arc<RwLock<BrowserSession>>,
        sequence: u64,
    ) -> LoadStatus {
        info!("Load {}: fetching companies from {}", sequence, source.describe());
        let result = source.fetch_companies().await;

        let mut session = session.write().await;
        session.finish_load(sequence, result);
        session.status()
    }

    pub async fn apply_filter(&self, change: FilterChange) -> SessionView {
        let mut session = self.session.write().await;
        session.apply_filter(change);
        session.view()
    }

    pub async fn reset_filters(&self) -> SessionView {
        let mut session = self.session.write().await;
        session.reset_filters();
        session.view()
    }

    pub async fn set_page(&self, page: usize) -> SessionView {
        let mut session = self.session.write().await;
        session.set_page(page);
        session.view()
    }

    pub async fn set_view_mode(&self, view_mode: ViewMode) -> SessionView {
        let mut session = self.session.write().await;
        session.set_view_mode(view_mode);
        session.view()
    }

    pub async fn view(&self) -> SessionView {
        self.session.read().await.view()
    }

    pub async fn status(&self) -> LoadStatus {
        self.session.read().await.status()
    }

    pub async fn query(&self, filters: &FilterState, page: usize) -> CompanyPage {
        self.session.read().await.query(filters, page)
    }

    pub async fn options(&self) -> FilterOptions {
        self.session.read().await.options()
    }

    pub async fn company(&self, id: i64) -> Option<Company> {
        self.session.read().await.company(id).cloned()
    }
}
