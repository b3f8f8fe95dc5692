use actix_web::{web, HttpResponse, Result as ActixResult};
use serde::Deserialize;
use shared_types::{ErrorResponse, FilterState, SortKey};
use std::sync::Arc;

use crate::jobs::session_manager::SessionManager;

/// Stateless listing query. Omitted fields take their default filter values.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompaniesQuery {
    search_term: Option<String>,
    industry: Option<String>,
    country: Option<String>,
    state: Option<String>,
    city: Option<String>,
    sort_by: Option<SortKey>,
    page: Option<usize>,
}

impl CompaniesQuery {
    fn into_parts(self) -> (FilterState, usize) {
        let defaults = FilterState::default();
        let filters = FilterState {
            search_term: self.search_term.unwrap_or(defaults.search_term),
            industry: self.industry.unwrap_or(defaults.industry),
            country: self.country.unwrap_or(defaults.country),
            state: self.state.unwrap_or(defaults.state),
            city: self.city.unwrap_or(defaults.city),
            sort_by: self.sort_by.unwrap_or(defaults.sort_by),
        };

        (filters, self.page.unwrap_or(1))
    }
}

pub async fn list_companies(
    manager: web::Data<Arc<SessionManager>>,
    query: web::Query<CompaniesQuery>,
) -> ActixResult<HttpResponse> {
    let (filters, page) = query.into_inner().into_parts();
    let result = manager.query(&filters, page).await;

    Ok(HttpResponse::Ok().json(result))
}

pub async fn get_company(
    manager: web::Data<Arc<SessionManager>>,
    path: web::Path<i64>,
) -> ActixResult<HttpResponse> {
    let company_id = path.into_inner();

    match manager.company(company_id).await {
        Some(company) => Ok(HttpResponse::Ok().json(company)),
        None => Ok(HttpResponse::NotFound()
            .json(ErrorResponse::new(format!("Company {} not found", company_id)))),
    }
}

pub async fn get_options(manager: web::Data<Arc<SessionManager>>) -> ActixResult<HttpResponse> {
    Ok(HttpResponse::Ok().json(manager.options().await))
}
