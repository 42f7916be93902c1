use std::path::Path;

use crate::agencies::{load_agencies, Agency};
use crate::ConfigError;

/// Read-only, ordered source of agency records.
///
/// The catalog only ever borrows through this trait, so a different backing
/// store can replace the YAML fixture without touching the filter logic.
pub trait AgencySource {
    fn agencies(&self) -> &[Agency];
}

impl AgencySource for [Agency] {
    fn agencies(&self) -> &[Agency] {
        self
    }
}

impl AgencySource for Vec<Agency> {
    fn agencies(&self) -> &[Agency] {
        self
    }
}

impl<S: AgencySource + ?Sized> AgencySource for std::sync::Arc<S> {
    fn agencies(&self) -> &[Agency] {
        (**self).agencies()
    }
}

/// The process-wide agency record store. Immutable after construction.
#[derive(Debug, Clone, Default)]
pub struct AgencyStore {
    agencies: Vec<Agency>,
}

impl AgencyStore {
    #[must_use]
    pub fn new(agencies: Vec<Agency>) -> Self {
        Self { agencies }
    }

    /// Build the store from the YAML fixture at `path`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the fixture cannot be read, parsed, or validated.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let file = load_agencies(path)?;
        tracing::info!(
            path = %path.display(),
            agencies = file.agencies.len(),
            "agency store ready"
        );
        Ok(Self::new(file.agencies))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.agencies.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.agencies.is_empty()
    }
}

impl AgencySource for AgencyStore {
    fn agencies(&self) -> &[Agency] {
        &self.agencies
    }
}
