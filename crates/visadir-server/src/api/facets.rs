//! Locale-independent facet lists derived from the record store.

use axum::{extract::State, Extension, Json};
use visadir_core::categories::CatalogGroup;

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

pub(super) async fn list_cities(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::new(state.catalog.available_cities(), req_id.0))
}

pub(super) async fn list_services(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<Vec<String>>> {
    Json(ApiResponse::new(state.catalog.available_services(), req_id.0))
}

pub(super) async fn list_service_categories(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<&'static [CatalogGroup]>> {
    Json(ApiResponse::new(state.catalog.service_categories(), req_id.0))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::api::test_support::get;

    #[tokio::test]
    async fn cities_are_sorted_and_unique() {
        let (status, json) = get("/api/v1/cities").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json["data"],
            serde_json::json!(["Bangkok", "Chiang Mai", "Hua Hin", "Pattaya", "Phuket"])
        );
    }

    #[tokio::test]
    async fn services_include_prefixed_visa_keys() {
        let (_, json) = get("/api/v1/services").await;
        let services: Vec<&str> = json["data"]
            .as_array()
            .expect("data array")
            .iter()
            .filter_map(|v| v.as_str())
            .collect();
        assert!(services.contains(&"thai-dtv"));
        assert!(services.contains(&"foreign-canada"));
        assert!(services.contains(&"tax-filing"));
        assert!(services.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test]
    async fn service_categories_is_static_table() {
        let (_, json) = get("/api/v1/service-categories").await;
        let groups = json["data"].as_array().expect("data array");
        assert_eq!(groups.len(), 6);
        assert_eq!(groups[2]["name"], "governmentServices");
        assert_eq!(groups[2]["entries"][0]["key"], "drivers-license");
        assert_eq!(groups[2]["entries"][0]["category"], "government");
    }
}
