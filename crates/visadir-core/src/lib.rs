pub mod agencies;
pub mod app_config;
pub mod catalog;
pub mod categories;
pub mod config;
mod error;
pub mod filters;
pub mod locale;
pub mod messages;
pub mod search;
pub mod store;

#[cfg(test)]
mod test_support;

pub use agencies::{load_agencies, parse_agencies, AgenciesFile, Agency};
pub use app_config::{AppConfig, Environment};
pub use catalog::Catalog;
pub use categories::{Category, CategoryDef, Service};
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, CoreError};
pub use filters::{LogSearchHandler, SearchFilters, SearchForm, SearchHandler};
pub use locale::{Locale, LANGUAGES};
pub use messages::{MessageCatalog, Translate};
pub use search::{search, SearchOptions, SearchPage, SortOption};
pub use store::{AgencySource, AgencyStore};
