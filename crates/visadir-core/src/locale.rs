//! Supported locales, the locale-aware category policy, and locale-prefixed
//! path handling used by language switching.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::categories::{Category, CategoryDef, CATEGORY_TABLE};
use crate::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Th,
    Zh,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Th, Locale::Zh];

    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Th => "th",
            Locale::Zh => "zh",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Locale {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|l| l.code() == s)
            .ok_or_else(|| CoreError::UnknownLocale(s.to_string()))
    }
}

/// An entry in the language switcher.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Language {
    pub code: Locale,
    pub name: &'static str,
    pub flag: &'static str,
}

pub static LANGUAGES: [Language; 3] = [
    Language {
        code: Locale::En,
        name: "English",
        flag: "🇺🇸",
    },
    Language {
        code: Locale::Th,
        name: "ไทย",
        flag: "🇹🇭",
    },
    Language {
        code: Locale::Zh,
        name: "中文",
        flag: "🇨🇳",
    },
];

#[must_use]
pub fn language(locale: Locale) -> &'static Language {
    &LANGUAGES[locale as usize]
}

/// Categories hidden from speakers of a locale.
struct LocaleRule {
    locale: Locale,
    hidden: &'static [Category],
}

// Thai speakers do not need inbound Thai visas.
static LOCALE_RULES: [LocaleRule; 1] = [LocaleRule {
    locale: Locale::Th,
    hidden: &[Category::ThaiVisas],
}];

fn hidden_categories(locale: Locale) -> &'static [Category] {
    LOCALE_RULES
        .iter()
        .find(|r| r.locale == locale)
        .map_or(&[], |r| r.hidden)
}

/// The category table as shown under `locale`, order preserved.
#[must_use]
pub fn visible_categories(locale: Locale) -> Vec<&'static CategoryDef> {
    let hidden = hidden_categories(locale);
    CATEGORY_TABLE
        .iter()
        .filter(|def| !hidden.contains(&def.category))
        .collect()
}

/// Whether the raw category `key` is offered under `locale`. Unknown keys are not.
#[must_use]
pub fn is_category_visible(locale: Locale, key: &str) -> bool {
    Category::from_key(key).is_some_and(|c| !hidden_categories(locale).contains(&c))
}

/// Rewrite the locale segment of `path` for a language switch.
///
/// Only the first `/<current>` occurrence is replaced; a path without it is
/// returned unchanged.
#[must_use]
pub fn switch_locale_path(path: &str, current: Locale, target: Locale) -> String {
    let from = format!("/{current}");
    let to = format!("/{target}");
    path.replacen(&from, &to, 1)
}

/// Outcome of resolving a request path against the locale prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocalePrefix {
    /// The first segment is a supported locale.
    Matched { locale: Locale, rest: String },
    /// No supported prefix; callers redirect to the given path.
    Redirect(String),
}

/// Resolve the locale prefix of `path`, always requiring a prefix.
#[must_use]
pub fn resolve_locale_prefix(path: &str, default: Locale) -> LocalePrefix {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = trimmed.split_once('/').unwrap_or((trimmed, ""));

    match segment.parse::<Locale>() {
        Ok(locale) => LocalePrefix::Matched {
            locale,
            rest: format!("/{rest}"),
        },
        Err(_) if trimmed.is_empty() => LocalePrefix::Redirect(format!("/{default}")),
        Err(_) => LocalePrefix::Redirect(format!("/{default}/{trimmed}")),
    }
}
