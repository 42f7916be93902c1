//! Result production for submitted search filters.

use std::cmp::Ordering;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::agencies::Agency;
use crate::catalog::{offers_service, Catalog};
use crate::categories::Category;
use crate::filters::SearchFilters;
use crate::locale::Locale;
use crate::messages::Translate;
use crate::store::AgencySource;
use crate::CoreError;

pub const DEFAULT_LIMIT: usize = 50;
pub const MAX_LIMIT: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOption {
    #[default]
    Featured,
    Name,
    Rating,
    Verified,
    Location,
}

impl SortOption {
    pub const ALL: [SortOption; 5] = [
        SortOption::Featured,
        SortOption::Name,
        SortOption::Rating,
        SortOption::Verified,
        SortOption::Location,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortOption::Featured => "featured",
            SortOption::Name => "name",
            SortOption::Rating => "rating",
            SortOption::Verified => "verified",
            SortOption::Location => "location",
        }
    }

    /// Message key for the option's label.
    #[must_use]
    pub fn label_key(self) -> String {
        format!("sort.{}", self.as_str())
    }
}

impl FromStr for SortOption {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| CoreError::UnknownSortOption(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SearchOptions {
    pub sort: SortOption,
    pub limit: Option<usize>,
    pub verified_only: bool,
}

/// One page of matches; `total` counts every match before the limit.
#[derive(Debug, Clone, Serialize)]
pub struct SearchPage<'a> {
    pub total: usize,
    pub agencies: Vec<&'a Agency>,
}

#[must_use]
pub fn normalize_limit(limit: Option<usize>) -> usize {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Match active agencies against `filters`, then sort and truncate.
///
/// Unknown categories and services produce an empty page.
pub fn search<'a, S: AgencySource>(
    catalog: &'a Catalog<S>,
    filters: &SearchFilters,
    options: SearchOptions,
) -> SearchPage<'a> {
    let Some(service_keys) = service_keys(filters) else {
        return SearchPage {
            total: 0,
            agencies: Vec::new(),
        };
    };
    let needle = filters.query().trim().to_lowercase();

    let mut matches: Vec<&Agency> = catalog
        .agencies()
        .iter()
        .filter(|a| a.active)
        .filter(|a| !options.verified_only || a.is_verified())
        .filter(|a| filters.city().is_empty() || a.has_city(filters.city()))
        .filter(|a| {
            service_keys.is_empty() || service_keys.iter().any(|k| offers_service(a, k))
        })
        .filter(|a| needle.is_empty() || matches_query(a, &needle))
        .collect();

    sort_agencies(&mut matches, options.sort);

    let total = matches.len();
    matches.truncate(normalize_limit(options.limit));
    tracing::debug!(
        total,
        returned = matches.len(),
        sort = options.sort.as_str(),
        "search complete"
    );

    SearchPage {
        total,
        agencies: matches,
    }
}

/// Catalog keys the category filter accepts. `None` means nothing can match;
/// an empty list means the filter is inactive.
fn service_keys(filters: &SearchFilters) -> Option<Vec<String>> {
    if filters.service_category().is_empty() {
        return Some(Vec::new());
    }
    let category = Category::from_key(filters.service_category())?;

    if filters.specific_service().is_empty() {
        Some(
            category
                .services()
                .iter()
                .map(|s| category.catalog_key(s.key))
                .collect(),
        )
    } else {
        Some(vec![category.catalog_key(filters.specific_service())])
    }
}

fn matches_query(agency: &Agency, needle: &str) -> bool {
    let fields = [
        agency.name.as_str(),
        agency.name_th.as_str(),
        agency.description.as_str(),
        agency.description_th.as_str(),
        agency.slug.as_str(),
    ];
    fields.iter().any(|f| f.to_lowercase().contains(needle))
        || agency
            .specialties
            .iter()
            .flatten()
            .chain(&agency.services.thai_visas.specialties)
            .chain(&agency.services.foreign_visas.specialties)
            .any(|s| s.to_lowercase().contains(needle))
}

fn rating(agency: &Agency) -> f64 {
    agency.review_data.as_ref().map_or(0.0, |r| r.rating)
}

fn main_city(agency: &Agency) -> &str {
    agency.main_location().map_or("", |l| l.city.as_str())
}

fn sort_agencies(agencies: &mut [&Agency], sort: SortOption) {
    match sort {
        SortOption::Featured => agencies.sort_by_key(|a| !a.featured),
        SortOption::Name => agencies.sort_by_key(|a| a.name.to_lowercase()),
        SortOption::Rating => agencies.sort_by(|a, b| {
            rating(b).partial_cmp(&rating(a)).unwrap_or(Ordering::Equal)
        }),
        SortOption::Verified => agencies.sort_by_key(|a| !a.is_verified()),
        SortOption::Location => agencies.sort_by(|a, b| main_city(a).cmp(main_city(b))),
    }
}

/// Localized summary line for a result count.
pub fn result_summary(translator: &impl Translate, locale: Locale, total: usize) -> String {
    if total == 0 {
        translator.translate(locale, "search.noResults")
    } else {
        let count = total.to_string();
        translator.translate_with(locale, "search.results", &[("count", count.as_str())])
    }
}
