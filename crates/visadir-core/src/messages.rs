//! Localized UI strings.
//!
//! Bundles are nested JSON documents (one per locale) compiled into the
//! binary and flattened to dotted keys such as `homepage.filters.allCities`.

use std::collections::HashMap;

use serde_json::Value;

use crate::locale::Locale;
use crate::CoreError;

const EN_BUNDLE: &str = include_str!("../messages/en.json");
const TH_BUNDLE: &str = include_str!("../messages/th.json");
const ZH_BUNDLE: &str = include_str!("../messages/zh.json");

/// Key → localized string resolution.
///
/// Implementors only provide [`Translate::lookup`]; the fallback chain is
/// shared.
pub trait Translate {
    /// The string for `key` in exactly `locale`, if present.
    fn lookup(&self, locale: Locale, key: &str) -> Option<&str>;

    /// Resolve `key`, falling back to English and then to the key itself.
    fn translate(&self, locale: Locale, key: &str) -> String {
        if let Some(value) = self.lookup(locale, key) {
            return value.to_string();
        }
        if locale != Locale::En {
            if let Some(value) = self.lookup(Locale::En, key) {
                tracing::debug!(%locale, key, "message missing, using english");
                return value.to_string();
            }
        }
        tracing::warn!(%locale, key, "message missing from every bundle");
        key.to_string()
    }

    /// Resolve `key` in `locale` only, substituting `fallback` when absent.
    fn translate_or(&self, locale: Locale, key: &str, fallback: &str) -> String {
        self.lookup(locale, key).unwrap_or(fallback).to_string()
    }

    /// [`Translate::translate`] followed by `{name}` placeholder substitution.
    fn translate_with(&self, locale: Locale, key: &str, args: &[(&str, &str)]) -> String {
        let mut out = self.translate(locale, key);
        for (name, value) in args {
            out = out.replace(&format!("{{{name}}}"), value);
        }
        out
    }
}

/// Flattened message bundles for every supported locale.
#[derive(Debug, Clone, Default)]
pub struct MessageCatalog {
    bundles: HashMap<Locale, HashMap<String, String>>,
}

impl MessageCatalog {
    /// The bundles compiled into the crate.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBundle` if an embedded bundle is not a JSON object.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_sources([
            (Locale::En, EN_BUNDLE),
            (Locale::Th, TH_BUNDLE),
            (Locale::Zh, ZH_BUNDLE),
        ])
    }

    /// Build a catalog from raw JSON documents.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidBundle` if a document fails to parse or its
    /// root is not an object.
    pub fn from_sources<'a>(
        sources: impl IntoIterator<Item = (Locale, &'a str)>,
    ) -> Result<Self, CoreError> {
        let mut bundles = HashMap::new();
        for (locale, raw) in sources {
            let invalid = |reason: String| CoreError::InvalidBundle {
                locale: locale.to_string(),
                reason,
            };
            let value: Value = serde_json::from_str(raw).map_err(|e| invalid(e.to_string()))?;
            if !value.is_object() {
                return Err(invalid("root must be an object".to_string()));
            }

            let mut flat = HashMap::new();
            flatten_into(&mut flat, String::new(), value);
            tracing::debug!(%locale, keys = flat.len(), "message bundle loaded");
            bundles.insert(locale, flat);
        }
        Ok(Self { bundles })
    }

    /// Number of keys in the bundle for `locale`.
    #[must_use]
    pub fn key_count(&self, locale: Locale) -> usize {
        self.bundles.get(&locale).map_or(0, HashMap::len)
    }
}

impl Translate for MessageCatalog {
    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.bundles
            .get(&locale)
            .and_then(|b| b.get(key))
            .map(String::as_str)
    }
}

fn flatten_into(out: &mut HashMap<String, String>, prefix: String, value: Value) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                let key = if prefix.is_empty() {
                    k
                } else {
                    format!("{prefix}.{k}")
                };
                flatten_into(out, key, v);
            }
        }
        Value::String(s) => {
            out.insert(prefix, s);
        }
        Value::Null | Value::Array(_) => {}
        other => {
            out.insert(prefix, other.to_string());
        }
    }
}
