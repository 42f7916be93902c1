use axum::{
    extract::{Path, Query, State},
    Extension, Json,
};
use serde::Deserialize;
use visadir_core::search::normalize_limit;
use visadir_core::Agency;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct AgencyQuery {
    pub city: Option<String>,
    pub service: Option<String>,
    pub limit: Option<usize>,
}

/// Agencies in store order, narrowed by exact city and catalog service key.
pub(super) async fn list_agencies(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<AgencyQuery>,
) -> Json<ApiResponse<Vec<Agency>>> {
    let city = query.city.as_deref().filter(|c| !c.is_empty());
    let service = query.service.as_deref().filter(|s| !s.is_empty());

    let data = state
        .catalog
        .agencies_matching(city, service)
        .into_iter()
        .take(normalize_limit(query.limit))
        .cloned()
        .collect();

    Json(ApiResponse::new(data, req_id.0))
}

pub(super) async fn get_agency(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<Agency>>, ApiError> {
    let Some(agency) = state.catalog.agency_by_slug(&slug) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("agency {slug} not found"),
        ));
    };

    Ok(Json(ApiResponse::new(agency.clone(), req_id.0)))
}
