//! Agency builders shared by the unit tests.

use chrono::{TimeZone, Utc};

use crate::agencies::{
    Agency, Contact, Location, PrimaryCategory, ServiceCatalog, Verification, VerificationState,
};

pub(crate) fn location(city: &str) -> Location {
    Location {
        city: city.to_string(),
        province: city.to_string(),
        district: "Central".to_string(),
        address: format!("1 Main Road, {city}"),
        address_th: format!("1 ถนนหลัก {city}"),
        coordinates: None,
        is_main_office: false,
    }
}

pub(crate) fn agency(id: &str, name: &str, cities: &[&str]) -> Agency {
    let created = Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap();
    let mut locations: Vec<Location> = cities.iter().map(|c| location(c)).collect();
    if let Some(first) = locations.first_mut() {
        first.is_main_office = true;
    }

    Agency {
        id: id.to_string(),
        slug: name.to_lowercase().replace(' ', "-"),
        name: name.to_string(),
        name_th: format!("{name} (TH)"),
        description: format!("{name} handles visa paperwork."),
        description_th: format!("{name} รับทำวีซ่า"),
        services: ServiceCatalog {
            thai_visas: Default::default(),
            foreign_visas: Default::default(),
            financial_services: Default::default(),
            legal_services: Default::default(),
            government_services: Default::default(),
            business_services: Default::default(),
            personal_services: Default::default(),
            technology_services: Default::default(),
            real_estate_services: Default::default(),
            primary_category: PrimaryCategory::VisaSpecialist,
            service_categories: vec![],
        },
        locations,
        contact: Contact {
            phone: vec!["+66 2 000 0000".to_string()],
            email: None,
            website: None,
            line: None,
            whatsapp: None,
        },
        google_place_id: None,
        review_data: None,
        verification: Verification {
            status: VerificationState::Unverified,
            ..Default::default()
        },
        image: None,
        languages: vec!["en".to_string(), "th".to_string()],
        established: None,
        licenses: None,
        specialties: None,
        featured: false,
        active: true,
        created_at: created,
        updated_at: created,
    }
}

pub(crate) fn with_thai_visas(mut agency: Agency, types: &[&str]) -> Agency {
    agency.services.thai_visas.types = types.iter().map(ToString::to_string).collect();
    agency
}

pub(crate) fn with_countries(mut agency: Agency, countries: &[&str]) -> Agency {
    agency.services.foreign_visas.countries = countries.iter().map(ToString::to_string).collect();
    agency
}

/// Three agencies across Bangkok, Chiang Mai and Phuket with overlapping services.
pub(crate) fn sample_agencies() -> Vec<Agency> {
    let mut siam = with_countries(
        with_thai_visas(
            agency("1", "Siam Visa Partners", &["Bangkok", "Pattaya"]),
            &["tourist", "retirement", "dtv"],
        ),
        &["usa", "schengen"],
    );
    siam.services.financial_services.bank_account = true;
    siam.services.personal_services.translation = true;
    siam.featured = true;
    siam.verification.status = VerificationState::Verified;

    let mut lanna = with_thai_visas(
        agency("2", "Lanna Immigration", &["Chiang Mai"]),
        &["education", "retirement"],
    );
    lanna.services.government_services.drivers_license = true;
    lanna.services.legal_services.work_permit = true;
    lanna.services.business_services.accounting_services = true;

    let mut andaman = with_countries(
        with_thai_visas(agency("3", "Andaman Legal", &["Phuket", "Bangkok"]), &["tourist"]),
        &["uk"],
    );
    andaman.services.legal_services.company_registration = true;
    andaman.services.legal_services.marriage_registration = true;
    andaman.services.financial_services.insurance = true;
    andaman.services.personal_services.notarization = true;
    andaman.services.primary_category = PrimaryCategory::LegalServices;

    vec![siam, lanna, andaman]
}
