//! Localized category picker data for the search form.

use axum::{
    extract::{Path, State},
    Extension, Json,
};
use visadir_core::filters::{
    category_explanation, category_options, services_for_category, CategoryExplanation,
    CategoryOption, ServiceOption,
};

use crate::middleware::RequestId;

use super::{parse_locale, ApiError, ApiResponse, AppState};

pub(super) async fn list_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(locale): Path<String>,
) -> Result<Json<ApiResponse<Vec<CategoryOption>>>, ApiError> {
    let locale = parse_locale(&req_id.0, &locale)?;
    let data = category_options(locale, state.messages.as_ref());
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

/// Unknown categories yield an empty list rather than an error.
pub(super) async fn list_category_services(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((locale, category)): Path<(String, String)>,
) -> Result<Json<ApiResponse<Vec<ServiceOption>>>, ApiError> {
    let locale = parse_locale(&req_id.0, &locale)?;
    let data = services_for_category(&category, locale, state.messages.as_ref());
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

pub(super) async fn get_category_explanation(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path((locale, category)): Path<(String, String)>,
) -> Result<Json<ApiResponse<CategoryExplanation>>, ApiError> {
    let locale = parse_locale(&req_id.0, &locale)?;
    let Some(data) = category_explanation(&category, locale, state.messages.as_ref()) else {
        return Err(ApiError::new(
            req_id.0,
            "not_found",
            format!("category {category} not found"),
        ));
    };
    Ok(Json(ApiResponse::new(data, req_id.0)))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::api::test_support::get;

    fn keys(json: &serde_json::Value) -> Vec<String> {
        json["data"]
            .as_array()
            .expect("data array")
            .iter()
            .filter_map(|v| v["key"].as_str().map(String::from))
            .collect()
    }

    #[tokio::test]
    async fn thai_categories_omit_thai_visas() {
        let (status, json) = get("/api/v1/th/categories").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            keys(&json),
            vec!["foreignVisas", "government", "financial", "legal", "business"]
        );
        assert_eq!(json["data"][3]["label"], "บริการทางกฎหมาย");
    }

    #[tokio::test]
    async fn english_categories_are_complete() {
        let (_, json) = get("/api/v1/en/categories").await;
        assert_eq!(keys(&json).len(), 6);
        assert_eq!(keys(&json)[0], "thaiVisas");
    }

    #[tokio::test]
    async fn category_services_are_localized() {
        let (status, json) = get("/api/v1/zh/categories/legal/services").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            keys(&json),
            vec![
                "companyRegistration",
                "marriageRegistration",
                "translation",
                "notarization"
            ]
        );
        assert_eq!(json["data"][2]["label"], "翻译服务");
    }

    #[tokio::test]
    async fn unknown_category_services_are_empty() {
        let (status, json) = get("/api/v1/en/categories/documentation/services").await;
        assert_eq!(status, StatusCode::OK);
        assert!(keys(&json).is_empty());
    }

    #[tokio::test]
    async fn explanation_found_and_missing() {
        let (status, json) = get("/api/v1/en/categories/financial/explanation").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["data"]["category"], "financial");
        assert_eq!(json["data"]["label"], "Financial Services");

        let (status, _) = get("/api/v1/en/categories/documentation/explanation").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
