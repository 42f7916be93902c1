//! Static service taxonomies.
//!
//! Two tables live here. [`CATEGORY_TABLE`] drives the search form: each
//! first-level category with its label key and its category-scoped service
//! list. [`CATALOG_GROUPS`] enumerates the flat catalog service keys
//! (`thai-tourist`, `drivers-license`, ...) used by the query layer. Both are
//! plain data; adding a service is a table edit.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
    ThaiVisas,
    ForeignVisas,
    Government,
    Financial,
    Legal,
    Business,
}

/// A category-scoped service shown in the specific-service picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub key: &'static str,
    /// Resolved in the `homepage.services` namespace.
    pub label_key: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDef {
    pub category: Category,
    /// Resolved in the `homepage` namespace.
    pub label_key: &'static str,
    /// Resolved in the `homepage.explanations` namespace.
    pub explanation_key: &'static str,
    pub services: &'static [Service],
}

const fn service(key: &'static str, label_key: &'static str) -> Service {
    Service { key, label_key }
}

pub static CATEGORY_TABLE: [CategoryDef; 6] = [
    CategoryDef {
        category: Category::ThaiVisas,
        label_key: "filters.categories.thaiVisas",
        explanation_key: "thaiVisas",
        services: &[
            service("tourist", "thaiVisas.tourist"),
            service("business", "thaiVisas.business"),
            service("retirement", "thaiVisas.retirement"),
            service("education", "thaiVisas.education"),
            service("privilege", "thaiVisas.privilege"),
            service("dtv", "thaiVisas.dtv"),
        ],
    },
    CategoryDef {
        category: Category::ForeignVisas,
        label_key: "filters.categories.foreignVisas",
        explanation_key: "foreignVisas",
        services: &[
            service("usa", "foreignVisas.usa"),
            service("uk", "foreignVisas.uk"),
            service("schengen", "foreignVisas.schengen"),
            service("australia", "foreignVisas.australia"),
            service("canada", "foreignVisas.canada"),
            service("china", "foreignVisas.china"),
        ],
    },
    CategoryDef {
        category: Category::Government,
        label_key: "filters.categories.governmentServices",
        explanation_key: "government",
        services: &[
            service("driversLicense", "government.driversLicense"),
            service("taxId", "government.taxId"),
            service("residenceCertificate", "government.residenceCertificate"),
            service("workPermit", "government.workPermit"),
        ],
    },
    CategoryDef {
        category: Category::Financial,
        label_key: "filters.categories.financialServices",
        explanation_key: "financial",
        services: &[
            service("bankAccount", "financial.bankAccount"),
            service("insurance", "financial.insurance"),
        ],
    },
    CategoryDef {
        category: Category::Legal,
        label_key: "filters.categories.legalServices",
        explanation_key: "legal",
        services: &[
            service("companyRegistration", "legal.companyRegistration"),
            service("marriageRegistration", "legal.marriageRegistration"),
            service("translation", "legal.translation"),
            service("notarization", "legal.notarization"),
        ],
    },
    CategoryDef {
        category: Category::Business,
        label_key: "filters.categories.businessServices",
        explanation_key: "business",
        services: &[
            service("accounting", "business.accounting"),
            service("taxFiling", "business.taxFiling"),
        ],
    },
];

impl Category {
    pub const ALL: [Category; 6] = [
        Category::ThaiVisas,
        Category::ForeignVisas,
        Category::Government,
        Category::Financial,
        Category::Legal,
        Category::Business,
    ];

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Category::ThaiVisas => "thaiVisas",
            Category::ForeignVisas => "foreignVisas",
            Category::Government => "government",
            Category::Financial => "financial",
            Category::Legal => "legal",
            Category::Business => "business",
        }
    }

    /// Exact, case-sensitive lookup of a category key.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    #[must_use]
    pub fn def(self) -> &'static CategoryDef {
        // CATEGORY_TABLE is laid out in `Category::ALL` order.
        &CATEGORY_TABLE[self as usize]
    }

    #[must_use]
    pub fn services(self) -> &'static [Service] {
        self.def().services
    }

    /// Map a category-scoped service key onto the flat catalog key space.
    ///
    /// `(ThaiVisas, "tourist")` becomes `thai-tourist`, `(ForeignVisas, "uk")`
    /// becomes `foreign-uk`, and other categories kebab-case the key
    /// (`driversLicense` becomes `drivers-license`).
    #[must_use]
    pub fn catalog_key(self, service_key: &str) -> String {
        match self {
            Category::ThaiVisas => format!("{THAI_PREFIX}{service_key}"),
            Category::ForeignVisas => format!("{FOREIGN_PREFIX}{service_key}"),
            _ => camel_to_kebab(service_key),
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Look up the table row for a raw category key; unknown keys yield `None`.
#[must_use]
pub fn category_def(key: &str) -> Option<&'static CategoryDef> {
    Category::from_key(key).map(Category::def)
}

pub const THAI_PREFIX: &str = "thai-";
pub const FOREIGN_PREFIX: &str = "foreign-";

/// One flat catalog service key and the coarse category it reports under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct CatalogGroup {
    pub name: &'static str,
    pub entries: &'static [CatalogEntry],
}

const fn entry(key: &'static str, category: &'static str) -> CatalogEntry {
    CatalogEntry { key, category }
}

pub static CATALOG_GROUPS: [CatalogGroup; 6] = [
    CatalogGroup {
        name: "thaiVisas",
        entries: &[
            entry("thai-tourist", "thai-visa"),
            entry("thai-business", "thai-visa"),
            entry("thai-retirement", "thai-visa"),
            entry("thai-education", "thai-visa"),
            entry("thai-privilege", "thai-visa"),
            entry("thai-dtv", "thai-visa"),
        ],
    },
    CatalogGroup {
        name: "foreignVisas",
        entries: &[
            entry("foreign-usa", "foreign-visa"),
            entry("foreign-uk", "foreign-visa"),
            entry("foreign-schengen", "foreign-visa"),
            entry("foreign-australia", "foreign-visa"),
            entry("foreign-canada", "foreign-visa"),
            entry("foreign-china", "foreign-visa"),
        ],
    },
    CatalogGroup {
        name: "governmentServices",
        entries: &[
            entry("drivers-license", "government"),
            entry("tax-id", "government"),
            entry("residence-certificate", "government"),
            entry("work-permit", "government"),
        ],
    },
    CatalogGroup {
        name: "financialServices",
        entries: &[
            entry("bank-account", "financial"),
            entry("insurance", "financial"),
        ],
    },
    CatalogGroup {
        name: "legalServices",
        entries: &[
            entry("company-registration", "legal"),
            entry("marriage-registration", "legal"),
            entry("translation", "legal"),
            entry("notarization", "legal"),
        ],
    },
    CatalogGroup {
        name: "businessServices",
        entries: &[entry("accounting", "business"), entry("tax-filing", "business")],
    },
];

fn camel_to_kebab(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for c in key.chars() {
        if c.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('-');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_order_matches_enum_order() {
        for (def, category) in CATEGORY_TABLE.iter().zip(Category::ALL) {
            assert_eq!(def.category, category);
            assert_eq!(category.def().category, category);
        }
    }

    #[test]
    fn from_key_is_exact() {
        assert_eq!(Category::from_key("legal"), Some(Category::Legal));
        assert_eq!(Category::from_key("thaiVisas"), Some(Category::ThaiVisas));
        assert_eq!(Category::from_key("Legal"), None);
        assert_eq!(Category::from_key("legalServices"), None);
        assert_eq!(Category::from_key(""), None);
    }

    #[test]
    fn category_def_unknown_is_none() {
        assert!(category_def("documentation").is_none());
        assert_eq!(
            category_def("financial").map(|d| d.label_key),
            Some("filters.categories.financialServices")
        );
    }

    #[test]
    fn service_lists_are_disjoint_across_categories() {
        let mut seen = std::collections::HashSet::new();
        for def in &CATEGORY_TABLE {
            for s in def.services {
                assert!(
                    seen.insert(def.category.catalog_key(s.key)),
                    "duplicate catalog key for {}",
                    s.key
                );
            }
        }
    }

    #[test]
    fn every_form_service_maps_to_a_catalog_entry() {
        let catalog: Vec<&str> = CATALOG_GROUPS
            .iter()
            .flat_map(|g| g.entries.iter().map(|e| e.key))
            .collect();
        for def in &CATEGORY_TABLE {
            for s in def.services {
                let key = def.category.catalog_key(s.key);
                assert!(catalog.contains(&key.as_str()), "{key} missing from catalog");
            }
        }
    }

    #[test]
    fn catalog_key_conversion() {
        assert_eq!(Category::ThaiVisas.catalog_key("dtv"), "thai-dtv");
        assert_eq!(Category::ForeignVisas.catalog_key("schengen"), "foreign-schengen");
        assert_eq!(
            Category::Government.catalog_key("residenceCertificate"),
            "residence-certificate"
        );
        assert_eq!(Category::Business.catalog_key("accounting"), "accounting");
    }

    #[test]
    fn category_serializes_as_key() {
        let json = serde_json::to_string(&Category::ForeignVisas).unwrap();
        assert_eq!(json, "\"foreignVisas\"");
    }
}
