//! In-memory implementation of the profile store

use std::collections::{BTreeMap, HashSet};

use tracing::debug;

use crate::error::{PersistenceError, UegenResult};
use crate::model::{DeviceProfile, Supi};
use crate::ports::ProfileStore;

/// Profiles keyed by SUPI, kept in SUPI order
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfileStore {
    profiles: BTreeMap<Supi, DeviceProfile>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_profiles<I>(profiles: I) -> UegenResult<Self>
    where
        I: IntoIterator<Item = DeviceProfile>,
    {
        let mut store = Self::new();
        let profiles: Vec<DeviceProfile> = profiles.into_iter().collect();
        store.insert_many(&profiles)?;
        Ok(store)
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn profiles(&self) -> impl Iterator<Item = &DeviceProfile> {
        self.profiles.values()
    }

    /// First SUPI in `profiles` that is already stored or repeated
    fn first_conflict(&self, profiles: &[DeviceProfile]) -> Option<Supi> {
        let mut seen = HashSet::with_capacity(profiles.len());
        profiles
            .iter()
            .find(|p| self.profiles.contains_key(&p.supi) || !seen.insert(&p.supi))
            .map(|p| p.supi.clone())
    }
}

impl ProfileStore for InMemoryProfileStore {
    fn insert_many(&mut self, profiles: &[DeviceProfile]) -> UegenResult<usize> {
        if let Some(supi) = self.first_conflict(profiles) {
            debug!("Rejecting batch of {}: duplicate SUPI {}", profiles.len(), supi);
            return Err(PersistenceError::Conflict { supi }.into());
        }

        for profile in profiles {
            self.profiles.insert(profile.supi.clone(), profile.clone());
        }
        Ok(profiles.len())
    }

    fn find(&self, supi: &Supi) -> UegenResult<DeviceProfile> {
        self.profiles
            .get(supi)
            .cloned()
            .ok_or_else(|| PersistenceError::NotFound { supi: supi.clone() }.into())
    }

    fn supis(&self) -> UegenResult<Vec<Supi>> {
        Ok(self.profiles.keys().cloned().collect())
    }
}
