use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use visadir_core::locale::{resolve_locale_prefix, switch_locale_path, LocalePrefix};
use visadir_core::{Locale, LANGUAGES};

use crate::middleware::RequestId;

use super::{ApiResponse, AppState};

#[derive(Debug, Deserialize)]
pub(super) struct LocalesQuery {
    pub path: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct LanguageLink {
    pub code: Locale,
    pub name: &'static str,
    pub flag: &'static str,
    pub href: String,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub(super) struct LocalesData {
    pub current: Locale,
    /// Set when `path` lacked a supported locale prefix.
    pub redirect: Option<String>,
    pub languages: Vec<LanguageLink>,
}

/// Language switcher entries for the page at `path`.
pub(super) async fn list_locales(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<LocalesQuery>,
) -> Json<ApiResponse<LocalesData>> {
    let raw = query.path.unwrap_or_else(|| "/".to_string());
    let (current, path, redirect) = match resolve_locale_prefix(&raw, state.default_locale) {
        LocalePrefix::Matched { locale, .. } => (locale, raw, None),
        LocalePrefix::Redirect(to) => (state.default_locale, to.clone(), Some(to)),
    };

    let languages = LANGUAGES
        .iter()
        .map(|lang| LanguageLink {
            code: lang.code,
            name: lang.name,
            flag: lang.flag,
            href: switch_locale_path(&path, current, lang.code),
            active: lang.code == current,
        })
        .collect();

    Json(ApiResponse::new(
        LocalesData {
            current,
            redirect,
            languages,
        },
        req_id.0,
    ))
}
