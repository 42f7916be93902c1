//! Facet derivation and filtering over the agency record store.
//!
//! Every query is pure and soft-failing: unknown cities or service keys yield
//! an empty result, never an error. Matches are exact and case-sensitive.

use std::collections::BTreeSet;

use crate::agencies::Agency;
use crate::categories::{CatalogGroup, CATALOG_GROUPS, FOREIGN_PREFIX, THAI_PREFIX};
use crate::store::AgencySource;

/// Query layer over an injected [`AgencySource`].
#[derive(Debug, Clone)]
pub struct Catalog<S> {
    source: S,
}

impl<S: AgencySource> Catalog<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// All records, in store order.
    pub fn agencies(&self) -> &[Agency] {
        self.source.agencies()
    }

    /// Distinct location cities across all agencies, sorted ascending.
    pub fn available_cities(&self) -> Vec<String> {
        self.agencies()
            .iter()
            .flat_map(|a| a.locations.iter().map(|l| l.city.clone()))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Distinct catalog service keys offered by at least one agency, sorted ascending.
    pub fn available_services(&self) -> Vec<String> {
        let mut services = BTreeSet::new();

        for agency in self.agencies() {
            let s = &agency.services;

            for visa_type in &s.thai_visas.types {
                services.insert(format!("{THAI_PREFIX}{visa_type}"));
            }
            for country in &s.foreign_visas.countries {
                services.insert(format!("{FOREIGN_PREFIX}{country}"));
            }

            let flags = [
                (s.financial_services.bank_account, "bank-account"),
                (s.financial_services.insurance, "insurance"),
                (s.legal_services.company_registration, "company-registration"),
                (s.legal_services.work_permit, "work-permit"),
                (s.legal_services.marriage_registration, "marriage-registration"),
                (s.government_services.drivers_license, "drivers-license"),
                (s.government_services.tax_id, "tax-id"),
                (s.government_services.residence_certificate, "residence-certificate"),
                (s.business_services.accounting_services, "accounting"),
                (s.business_services.tax_filing, "tax-filing"),
                (s.personal_services.translation, "translation"),
                (s.personal_services.notarization, "notarization"),
            ];
            services.extend(
                flags
                    .into_iter()
                    .filter(|(offered, _)| *offered)
                    .map(|(_, key)| key.to_string()),
            );
        }

        services.into_iter().collect()
    }

    /// The static service taxonomy; independent of the agency data.
    #[must_use]
    pub fn service_categories(&self) -> &'static [CatalogGroup] {
        &CATALOG_GROUPS
    }

    /// Agencies offering `service_key`, in store order.
    pub fn agencies_by_service(&self, service_key: &str) -> Vec<&Agency> {
        self.agencies()
            .iter()
            .filter(|a| offers_service(a, service_key))
            .collect()
    }

    /// Agencies with at least one location in `city`, in store order.
    pub fn agencies_by_city(&self, city: &str) -> Vec<&Agency> {
        self.agencies().iter().filter(|a| a.has_city(city)).collect()
    }

    pub fn agency_by_slug(&self, slug: &str) -> Option<&Agency> {
        self.agencies().iter().find(|a| a.slug == slug)
    }

    /// Agencies in `city` that offer `service`, either filter optional.
    ///
    /// Both filters go through [`Catalog::agencies_by_city`] and
    /// [`Catalog::agencies_by_service`]; the result keeps store order.
    pub fn agencies_matching(&self, city: Option<&str>, service: Option<&str>) -> Vec<&Agency> {
        match (city, service) {
            (None, None) => self.agencies().iter().collect(),
            (Some(city), None) => self.agencies_by_city(city),
            (None, Some(service)) => self.agencies_by_service(service),
            (Some(city), Some(service)) => {
                let offering = self.agencies_by_service(service);
                self.agencies_by_city(city)
                    .into_iter()
                    .filter(|a| offering.iter().any(|o| std::ptr::eq(*o, *a)))
                    .collect()
            }
        }
    }
}

/// Whether `agency` matches a flat catalog service key.
///
/// Only the prefixed visa keys and five flag keys are matchable; any other key
/// matches nothing.
#[must_use]
pub fn offers_service(agency: &Agency, service_key: &str) -> bool {
    let s = &agency.services;

    if let Some(visa_type) = service_key.strip_prefix(THAI_PREFIX) {
        return s.thai_visas.types.iter().any(|t| t == visa_type);
    }
    if let Some(country) = service_key.strip_prefix(FOREIGN_PREFIX) {
        return s.foreign_visas.countries.iter().any(|c| c == country);
    }

    match service_key {
        "bank-account" => s.financial_services.bank_account,
        "drivers-license" => s.government_services.drivers_license,
        "company-registration" => s.legal_services.company_registration,
        "work-permit" => s.legal_services.work_permit,
        "translation" => s.personal_services.translation,
        _ => false,
    }
}
