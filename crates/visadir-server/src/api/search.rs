use axum::{
    extract::{Path, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use visadir_core::search::{result_summary, search, SearchOptions, SortOption};
use visadir_core::{Agency, SearchFilters, SearchForm, Translate};

use crate::middleware::RequestId;

use super::{parse_locale, ApiError, ApiResponse, AppState};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchRequest {
    #[serde(flatten)]
    pub filters: SearchFilters,
    pub sort_by: Option<String>,
    pub limit: Option<usize>,
    #[serde(default)]
    pub verified_only: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct SearchResults {
    /// Filters after locale reconciliation.
    pub filters: SearchFilters,
    pub total: usize,
    pub summary: String,
    pub agencies: Vec<Agency>,
}

#[derive(Debug, Serialize)]
pub(super) struct SortChoice {
    pub key: SortOption,
    pub label: String,
}

/// Sort options in display order, labelled for `locale`.
pub(super) async fn list_sort_options(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(locale): Path<String>,
) -> Result<Json<ApiResponse<Vec<SortChoice>>>, ApiError> {
    let locale = parse_locale(&req_id.0, &locale)?;
    let data = SortOption::ALL
        .into_iter()
        .map(|key| SortChoice {
            key,
            label: state.messages.translate(locale, &key.label_key()),
        })
        .collect();
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn run_search(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(locale): Path<String>,
    Json(body): Json<SearchRequest>,
) -> Result<Json<ApiResponse<SearchResults>>, ApiError> {
    let locale = parse_locale(&req_id.0, &locale)?;
    let sort = body
        .sort_by
        .as_deref()
        .map(str::parse::<SortOption>)
        .transpose()
        .map_err(|e| ApiError::new(req_id.0.clone(), "validation_error", e.to_string()))?
        .unwrap_or_default();
    let options = SearchOptions {
        sort,
        limit: Some(body.limit.unwrap_or(state.search_default_limit)),
        verified_only: body.verified_only,
    };

    let form = SearchForm::from_filters(body.filters, locale);
    let mut results = None;
    form.submit(&mut |filters: SearchFilters| {
        let page = search(state.catalog.as_ref(), &filters, options);
        results = Some(SearchResults {
            total: page.total,
            summary: result_summary(state.messages.as_ref(), locale, page.total),
            agencies: page.agencies.into_iter().cloned().collect(),
            filters,
        });
    });

    let Some(data) = results else {
        return Err(ApiError::new(
            req_id.0,
            "internal_error",
            "search produced no results page",
        ));
    };
    tracing::info!(%locale, total = data.total, "search served");
    Ok(Json(ApiResponse::new(data, req_id.0)))
}
