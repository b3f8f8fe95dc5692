pub mod companies;
pub mod dataset;
pub mod session;

use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;

use crate::config::DATASET_ROUTE;
use crate::jobs::session_manager::SessionManager;

/// Registers every route of the service.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health))
        .route(DATASET_ROUTE, web::get().to(dataset::serve_dataset))
        .route("/api/session", web::get().to(session::get_session))
        .route("/api/session/filters", web::post().to(session::update_filters))
        .route("/api/session/filters/reset", web::post().to(session::reset_filters))
        .route("/api/session/page", web::post().to(session::set_page))
        .route("/api/session/view", web::post().to(session::set_view_mode))
        .route("/api/session/retry", web::post().to(session::retry))
        .route("/api/companies", web::get().to(companies::list_companies))
        .route("/api/companies/{id}", web::get().to(companies::get_company))
        .route("/api/options", web::get().to(companies::get_options));
}

pub async fn health(manager: web::Data<Arc<SessionManager>>) -> impl Responder {
    let status = manager.status().await;

    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "companies": status,
    }))
}
