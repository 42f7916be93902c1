//! Search form state and the cascade rules between its fields.

use serde::{Deserialize, Serialize};

use crate::categories::{category_def, Category};
use crate::locale::{is_category_visible, visible_categories, Locale};
use crate::messages::Translate;

const HOMEPAGE: &str = "homepage";

/// The four user-editable search fields.
///
/// `specific_service` only carries meaning while `service_category` is set;
/// every category assignment clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchFilters {
    query: String,
    city: String,
    service_category: String,
    specific_service: String,
}

impl SearchFilters {
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    #[must_use]
    pub fn service_category(&self) -> &str {
        &self.service_category
    }

    #[must_use]
    pub fn specific_service(&self) -> &str {
        &self.specific_service
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = city.into();
    }

    pub fn set_service_category(&mut self, category: impl Into<String>) {
        self.service_category = category.into();
        self.specific_service.clear();
    }

    pub fn set_specific_service(&mut self, service: impl Into<String>) {
        self.specific_service = service.into();
    }

    /// Drop a category that `locale` hides, together with its service.
    ///
    /// Returns `true` when anything was cleared.
    pub fn reconcile_locale(&mut self, locale: Locale) -> bool {
        if self.service_category.is_empty()
            || Category::from_key(&self.service_category).is_none()
            || is_category_visible(locale, &self.service_category)
        {
            return false;
        }
        self.service_category.clear();
        self.specific_service.clear();
        true
    }
}

/// Receives the assembled filters when the form is submitted.
pub trait SearchHandler {
    fn handle(&mut self, filters: SearchFilters);
}

impl<F: FnMut(SearchFilters)> SearchHandler for F {
    fn handle(&mut self, filters: SearchFilters) {
        self(filters);
    }
}

/// Submit target that only records the search in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSearchHandler;

impl SearchHandler for LogSearchHandler {
    fn handle(&mut self, filters: SearchFilters) {
        tracing::info!(
            query = filters.query(),
            city = filters.city(),
            service_category = filters.service_category(),
            specific_service = filters.specific_service(),
            "search submitted"
        );
    }
}

/// Filter state bound to the locale it is rendered in.
#[derive(Debug, Clone, Default)]
pub struct SearchForm {
    filters: SearchFilters,
    locale: Locale,
}

impl SearchForm {
    #[must_use]
    pub fn new(locale: Locale) -> Self {
        Self {
            filters: SearchFilters::default(),
            locale,
        }
    }

    /// Adopt externally assembled filters, reconciled against `locale`.
    #[must_use]
    pub fn from_filters(mut filters: SearchFilters, locale: Locale) -> Self {
        filters.reconcile_locale(locale);
        Self { filters, locale }
    }

    #[must_use]
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    #[must_use]
    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filters.set_query(query);
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.filters.set_city(city);
    }

    pub fn set_service_category(&mut self, category: impl Into<String>) {
        self.filters.set_service_category(category);
    }

    pub fn set_specific_service(&mut self, service: impl Into<String>) {
        self.filters.set_specific_service(service);
    }

    /// Whether the specific-service picker accepts input.
    #[must_use]
    pub fn specific_service_enabled(&self) -> bool {
        !self.filters.service_category.is_empty()
    }

    /// React to a locale switch. Filters are reconciled before this returns.
    pub fn change_locale(&mut self, locale: Locale) {
        let previous = self.locale;
        self.locale = locale;
        if self.filters.reconcile_locale(locale) {
            tracing::debug!(%previous, %locale, "category hidden by new locale; filters reset");
        }
    }

    /// Hand a copy of the current filters to `handler`.
    pub fn submit<H: SearchHandler + ?Sized>(&self, handler: &mut H) {
        handler.handle(self.filters.clone());
    }

    pub fn service_options(&self, translator: &impl Translate) -> Vec<ServiceOption> {
        services_for_category(&self.filters.service_category, self.locale, translator)
    }

    pub fn category_options(&self, translator: &impl Translate) -> Vec<CategoryOption> {
        category_options(self.locale, translator)
    }

    pub fn explanation(&self, translator: &impl Translate) -> Option<CategoryExplanation> {
        category_explanation(&self.filters.service_category, self.locale, translator)
    }

    /// Placeholder for the specific-service picker.
    pub fn specific_service_label(&self, translator: &impl Translate) -> String {
        if self.specific_service_enabled() {
            translator.translate_or(
                self.locale,
                "homepage.filters.specificService",
                "Specific Service",
            )
        } else {
            translator.translate_or(
                self.locale,
                "homepage.filters.selectCategoryFirst",
                "Select Category First",
            )
        }
    }

    pub fn all_in_category_label(&self, translator: &impl Translate) -> String {
        translator.translate_or(self.locale, "homepage.filters.allInCategory", "All in Category")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceOption {
    pub key: &'static str,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryOption {
    pub key: Category,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryExplanation {
    pub category: Category,
    pub label: String,
    pub explanation: String,
}

/// Localized service list for a raw category key. Unknown keys yield an empty list.
pub fn services_for_category(
    category: &str,
    locale: Locale,
    translator: &impl Translate,
) -> Vec<ServiceOption> {
    let Some(def) = category_def(category) else {
        return Vec::new();
    };
    def.services
        .iter()
        .map(|s| ServiceOption {
            key: s.key,
            label: translator.translate(locale, &format!("{HOMEPAGE}.services.{}", s.label_key)),
        })
        .collect()
}

/// First-level picker entries visible under `locale`.
pub fn category_options(locale: Locale, translator: &impl Translate) -> Vec<CategoryOption> {
    visible_categories(locale)
        .into_iter()
        .map(|def| CategoryOption {
            key: def.category,
            label: translator.translate(locale, &format!("{HOMEPAGE}.{}", def.label_key)),
        })
        .collect()
}

pub fn category_explanation(
    category: &str,
    locale: Locale,
    translator: &impl Translate,
) -> Option<CategoryExplanation> {
    let def = category_def(category)?;
    Some(CategoryExplanation {
        category: def.category,
        label: translator.translate(locale, &format!("{HOMEPAGE}.{}", def.label_key)),
        explanation: translator.translate(
            locale,
            &format!("{HOMEPAGE}.explanations.{}", def.explanation_key),
        ),
    })
}

#[cfg(test)]
#[path = "filters_test.rs"]
mod tests;
