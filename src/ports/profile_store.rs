//! ProfileStore trait - durable storage for generated profiles

use crate::error::UegenResult;
use crate::model::{DeviceProfile, Supi};

/// Capability to persist UE profiles under a unique SUPI
///
/// Implementations enforce SUPI uniqueness; the generator relies on it as the
/// last line of defense against duplicates produced outside one operator.
pub trait ProfileStore {
    /// Insert a batch of profiles atomically
    ///
    /// # Returns
    ///
    /// The number of profiles inserted (always `profiles.len()` on success)
    ///
    /// # Errors
    ///
    /// Returns errors if:
    /// - A SUPI already exists in the store or appears twice in `profiles`
    ///   (`PersistenceError::Conflict`); nothing is inserted
    /// - The backend fails (`PersistenceError::Backend`); nothing is inserted
    fn insert_many(&mut self, profiles: &[DeviceProfile]) -> UegenResult<usize>;

    /// Look up one profile
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::NotFound` if no profile has this SUPI
    fn find(&self, supi: &Supi) -> UegenResult<DeviceProfile>;

    /// Every SUPI currently stored
    fn supis(&self) -> UegenResult<Vec<Supi>>;
}
