use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Expertise {
    #[default]
    Basic,
    Advanced,
    Expert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PrimaryCategory {
    VisaSpecialist,
    FullService,
    LegalServices,
    BusinessServices,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ThaiVisaServices {
    /// Visa types handled, e.g. `"tourist"`, `"retirement"`, `"dtv"`.
    pub types: Vec<String>,
    pub specialties: Vec<String>,
    pub expertise: Expertise,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ForeignVisaServices {
    /// Destination countries, e.g. `"usa"`, `"schengen"`.
    pub countries: Vec<String>,
    pub specialties: Vec<String>,
    pub expertise: Expertise,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FinancialServices {
    pub bank_account: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bank_account_types: Option<Vec<String>>,
    pub insurance: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_types: Option<Vec<String>>,
    pub mortgage_assistance: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LegalServices {
    pub company_registration: bool,
    pub work_permit: bool,
    pub marriage_registration: bool,
    pub wills_and_probate: bool,
    pub contract_review: bool,
    pub legal_consultation: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernmentServices {
    pub drivers_license: bool,
    pub tax_id: bool,
    pub residence_certificate: bool,
    pub police_check: bool,
    pub extension_of_stay: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BusinessServices {
    pub accounting_services: bool,
    pub tax_filing: bool,
    pub audit_services: bool,
    pub business_licensing: bool,
    pub intellectual_property: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalServices {
    pub translation: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_languages: Option<Vec<String>>,
    pub notarization: bool,
    pub apostille: bool,
    pub document_authentication: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TechnologyServices {
    pub phone_sim_card: bool,
    pub internet_setup: bool,
    pub banking_app_setup: bool,
    pub digital_wallet_setup: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RealEstateServices {
    pub property_search: bool,
    pub property_legal: bool,
    pub rent_agreements: bool,
    pub property_management: bool,
}

/// Everything an agency offers, grouped the way the directory presents it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCatalog {
    #[serde(default)]
    pub thai_visas: ThaiVisaServices,
    #[serde(default)]
    pub foreign_visas: ForeignVisaServices,
    #[serde(default)]
    pub financial_services: FinancialServices,
    #[serde(default)]
    pub legal_services: LegalServices,
    #[serde(default)]
    pub government_services: GovernmentServices,
    #[serde(default)]
    pub business_services: BusinessServices,
    #[serde(default)]
    pub personal_services: PersonalServices,
    #[serde(default)]
    pub technology_services: TechnologyServices,
    #[serde(default)]
    pub real_estate_services: RealEstateServices,
    pub primary_category: PrimaryCategory,
    #[serde(default)]
    pub service_categories: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub city: String,
    pub province: String,
    pub district: String,
    pub address: String,
    pub address_th: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<Coordinates>,
    #[serde(default)]
    pub is_main_office: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contact {
    pub phone: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewSource {
    GoogleApi,
    ManualEntry,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewData {
    pub source: ReviewSource,
    pub last_updated: DateTime<Utc>,
    pub rating: f64,
    pub total_reviews: u32,
    pub reviews_url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerificationState {
    #[default]
    Unverified,
    Pending,
    Verified,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationType {
    InPerson,
    BusinessRegistration,
    Documents,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub status: VerificationState,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<VerificationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// One row of the directory: a visa or immigration service provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agency {
    pub id: String,
    /// URL slug, unique across the store.
    pub slug: String,
    pub name: String,
    pub name_th: String,
    pub description: String,
    pub description_th: String,
    pub services: ServiceCatalog,
    pub locations: Vec<Location>,
    pub contact: Contact,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub google_place_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review_data: Option<ReviewData>,
    #[serde(default)]
    pub verification: Verification,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub established: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub licenses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialties: Option<Vec<String>>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_active")]
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn default_active() -> bool {
    true
}

impl Agency {
    /// Returns the location flagged as main office, falling back to the first one.
    #[must_use]
    pub fn main_location(&self) -> Option<&Location> {
        self.locations
            .iter()
            .find(|l| l.is_main_office)
            .or_else(|| self.locations.first())
    }

    #[must_use]
    pub fn has_city(&self, city: &str) -> bool {
        self.locations.iter().any(|l| l.city == city)
    }

    #[must_use]
    pub fn is_verified(&self) -> bool {
        self.verification.status == VerificationState::Verified
    }
}

#[derive(Debug, Deserialize)]
pub struct AgenciesFile {
    pub agencies: Vec<Agency>,
}

/// Load and validate the agency fixture from a YAML file.
///
/// # Errors
///
/// Returns `ConfigError` if the file cannot be read, parsed, or fails validation.
pub fn load_agencies(path: &Path) -> Result<AgenciesFile, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::AgenciesFileIo {
        path: path.display().to_string(),
        source: e,
    })?;

    let file = parse_agencies(&content)?;
    tracing::debug!(
        path = %path.display(),
        count = file.agencies.len(),
        "loaded agency fixture"
    );
    Ok(file)
}

/// Parse and validate agency YAML already in memory.
///
/// # Errors
///
/// Returns `ConfigError` if the YAML is malformed or fails validation.
pub fn parse_agencies(content: &str) -> Result<AgenciesFile, ConfigError> {
    let file: AgenciesFile = serde_yaml::from_str(content)?;
    validate_agencies(&file)?;
    Ok(file)
}

fn validate_agencies(file: &AgenciesFile) -> Result<(), ConfigError> {
    let mut seen_ids = HashSet::new();
    let mut seen_slugs = HashSet::new();

    for agency in &file.agencies {
        if agency.name.trim().is_empty() {
            return Err(ConfigError::Validation(format!(
                "agency '{}' must have a non-empty name",
                agency.id
            )));
        }

        if !is_valid_slug(&agency.slug) {
            return Err(ConfigError::Validation(format!(
                "agency '{}' has invalid slug '{}'; use lowercase ascii, digits and '-'",
                agency.name, agency.slug
            )));
        }

        if !seen_ids.insert(agency.id.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate agency id: '{}'",
                agency.id
            )));
        }

        if !seen_slugs.insert(agency.slug.as_str()) {
            return Err(ConfigError::Validation(format!(
                "duplicate agency slug: '{}' (from agency '{}')",
                agency.slug, agency.name
            )));
        }

        if agency.locations.is_empty() {
            return Err(ConfigError::Validation(format!(
                "agency '{}' must have at least one location",
                agency.slug
            )));
        }

        if agency.contact.phone.is_empty() {
            return Err(ConfigError::Validation(format!(
                "agency '{}' must list at least one phone number",
                agency.slug
            )));
        }

        let main_offices = agency.locations.iter().filter(|l| l.is_main_office).count();
        if main_offices > 1 {
            tracing::warn!(
                slug = %agency.slug,
                main_offices,
                "agency lists more than one main office"
            );
        }
    }

    Ok(())
}

fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
#[path = "agencies_test.rs"]
mod tests;
