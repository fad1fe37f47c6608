//! Scriptable collaborators for use-case tests

#[cfg(test)]
use crate::adapters::InMemoryProfileStore;
#[cfg(test)]
use crate::error::{ExportError, PersistenceError, UegenResult};
#[cfg(test)]
use crate::model::{DeviceProfile, Supi};
#[cfg(test)]
use crate::ports::{ProfileExporter, ProfileStore};
#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::collections::HashSet;
#[cfg(test)]
use std::path::PathBuf;

/// Store that behaves like [`InMemoryProfileStore`] but can pretend some
/// SUPIs already exist elsewhere, or that the backend is down.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeProfileStore {
    pub inner: InMemoryProfileStore,
    /// SUPIs that always conflict
    pub taken: HashSet<Supi>,
    /// Position in the next `insert_many` batch whose SUPI becomes taken
    pub take_position: Option<usize>,
    /// Fail every insert after this many successful profiles
    pub backend_fails_after: Option<usize>,
    /// Treat every SUPI as taken
    pub reject_all: bool,
    pub insert_calls: usize,
}

#[cfg(test)]
impl FakeProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn conflicting_at(position: usize) -> Self {
        Self {
            take_position: Some(position),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl ProfileStore for FakeProfileStore {
    fn insert_many(&mut self, profiles: &[DeviceProfile]) -> UegenResult<usize> {
        self.insert_calls += 1;

        if let Some(position) = self.take_position {
            if let Some(profile) = profiles.get(position) {
                self.taken.insert(profile.supi.clone());
                self.take_position = None;
            }
        }

        if let Some(profile) = profiles
            .iter()
            .find(|p| self.reject_all || self.taken.contains(&p.supi))
        {
            return Err(PersistenceError::Conflict {
                supi: profile.supi.clone(),
            }
            .into());
        }

        if let Some(limit) = self.backend_fails_after {
            if self.inner.len() + profiles.len() > limit {
                return Err(PersistenceError::Backend {
                    reason: "connection reset".to_string(),
                }
                .into());
            }
        }

        self.inner.insert_many(profiles)
    }

    fn find(&self, supi: &Supi) -> UegenResult<DeviceProfile> {
        self.inner.find(supi)
    }

    fn supis(&self) -> UegenResult<Vec<Supi>> {
        self.inner.supis()
    }
}

/// Exporter that records what it was given and fails on request
#[cfg(test)]
#[derive(Debug, Default)]
pub struct FakeExporter {
    pub failing: HashSet<Supi>,
    pub exported: RefCell<Vec<Supi>>,
}

#[cfg(test)]
impl FakeExporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_for(supis: impl IntoIterator<Item = Supi>) -> Self {
        Self {
            failing: supis.into_iter().collect(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
impl ProfileExporter for FakeExporter {
    fn export_record(&self, profile: &DeviceProfile) -> Result<PathBuf, ExportError> {
        let path = PathBuf::from(format!("ue_profile_{}.yaml", profile.supi));
        if self.failing.contains(&profile.supi) {
            return Err(ExportError::Io {
                path,
                reason: "permission denied".to_string(),
            });
        }
        self.exported.borrow_mut().push(profile.supi.clone());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contract_tests_for;
    use crate::ports::contract_tests::profile_store_contract;

    contract_tests_for!(
        fake_store_contract,
        make = FakeProfileStore::new,
        tests = {
            test_insert_then_find => profile_store_contract::test_insert_then_find,
            test_find_missing_is_not_found => profile_store_contract::test_find_missing_is_not_found,
            test_duplicate_against_store_is_atomic_conflict => profile_store_contract::test_duplicate_against_store_is_atomic_conflict,
            test_duplicate_within_batch_is_conflict => profile_store_contract::test_duplicate_within_batch_is_conflict,
        }
    );
}
