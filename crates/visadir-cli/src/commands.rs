//! Command handlers. Each returns the JSON document `main` prints.

use std::collections::BTreeMap;

use anyhow::Context;
use serde_json::{json, Value};
use visadir_core::filters::{category_options, services_for_category};
use visadir_core::search::{result_summary, search, SearchOptions};
use visadir_core::{AgencySource, Catalog, Locale, MessageCatalog, SearchFilters, SearchForm};

use crate::Commands;

/// Execute `command` against a loaded catalog. `default_limit` caps search
/// pages when `--limit` is absent.
///
/// # Errors
///
/// Returns an error if `show` names an unknown slug or the result cannot be
/// serialized.
pub(crate) fn run<S: AgencySource>(
    command: &Commands,
    catalog: &Catalog<S>,
    messages: &MessageCatalog,
    default_limit: usize,
) -> anyhow::Result<Value> {
    let value = match command {
        Commands::Cities => json!(catalog.available_cities()),
        Commands::Services => json!(catalog.available_services()),
        Commands::Categories { locale } => {
            serde_json::to_value(category_options(*locale, messages))?
        }
        Commands::CategoryServices { category, locale } => {
            serde_json::to_value(services_for_category(category, *locale, messages))?
        }
        Commands::Agencies { city, service } => {
            let agencies: Vec<_> = catalog
                .agencies_matching(city.as_deref(), service.as_deref())
                .into_iter()
                .map(|a| json!({"slug": a.slug, "name": a.name, "cities": cities(a)}))
                .collect();
            json!(agencies)
        }
        Commands::Show { slug } => {
            let agency = catalog
                .agency_by_slug(slug)
                .with_context(|| format!("no agency with slug '{slug}'"))?;
            serde_json::to_value(agency)?
        }
        Commands::Search {
            query,
            city,
            category,
            service,
            locale,
            sort,
            limit,
            verified_only,
        } => {
            let mut filters = SearchFilters::default();
            filters.set_query(query.as_str());
            filters.set_city(city.as_str());
            filters.set_service_category(category.as_str());
            filters.set_specific_service(service.as_str());
            let form = SearchForm::from_filters(filters, *locale);

            let options = SearchOptions {
                sort: *sort,
                limit: limit.or(Some(default_limit)),
                verified_only: *verified_only,
            };
            let mut output = Value::Null;
            form.submit(&mut |filters: SearchFilters| {
                let page = search(catalog, &filters, options);
                output = json!({
                    "filters": filters,
                    "total": page.total,
                    "summary": result_summary(messages, *locale, page.total),
                    "agencies": page
                        .agencies
                        .iter()
                        .map(|a| json!({"slug": a.slug, "name": a.name, "featured": a.featured}))
                        .collect::<Vec<_>>(),
                });
            });
            output
        }
        Commands::Validate => {
            let agencies = catalog.agencies();
            tracing::info!(agencies = agencies.len(), "agency fixture is valid");
            json!({
                "valid": true,
                "agencies": agencies.len(),
                "active": agencies.iter().filter(|a| a.active).count(),
                "cities": catalog.available_cities().len(),
                "services": catalog.available_services().len(),
                "messages": Locale::ALL
                    .iter()
                    .map(|l| (l.code(), messages.key_count(*l)))
                    .collect::<BTreeMap<_, _>>(),
            })
        }
    };
    Ok(value)
}

fn cities(agency: &visadir_core::Agency) -> Vec<&str> {
    agency.locations.iter().map(|l| l.city.as_str()).collect()
}
