use actix_web::{web, HttpResponse, Result as ActixResult};
use shared_types::{FilterChange, SetPageRequest, SetViewModeRequest};
use std::sync::Arc;
use tracing::info;

use crate::jobs::session_manager::SessionManager;

pub async fn get_session(manager: web::Data<Arc<SessionManager>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.view().await))
}

pub async fn update_filters(
    manager: web::Data<Arc<SessionManager>>,
    request: web::Json<FilterChange>,
) -> ActixResult<HttpResponse> {
    let change = request.into_inner();
    info!("Filter change: {:?}", change);

    Ok(HttpResponse::Ok().json(manager.apply_filter(change).await))
}

pub async fn reset_filters(manager: web::Data<Arc<SessionManager>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.reset_filters().await))
}

pub async fn set_page(
    manager: web::Data<Arc<SessionManager>>,
    request: web::Json<SetPageRequest>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.set_page(request.page).await))
}

pub async fn set_view_mode(
    manager: web::Data<Arc<SessionManager>>,
    request: web::Json<SetViewModeRequest>,
) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.set_view_mode(request.view_mode).await))
}

/// Resets the filters and re-issues the fetch. The response reflects the
/// session while the new load is in flight.
pub async fn retry(manager: web::Data<Arc<SessionManager>>) -> ActixResult<HttpResponse> {
    let _load = manager.retry().await;

    Ok(HttpResponse::Accepted().json(manager.view().await))
}
