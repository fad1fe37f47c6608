//! Error types for uegen
//!
//! Errors are grouped by the boundary they come from. Configuration,
//! identifier exhaustion and persistence conflicts threaten the uniqueness
//! and validity guarantees and propagate as hard failures; export errors are
//! absorbed per device by the provisioning use case.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::{KeyMaterialError, KeySchemeError, PlmnError, SchemeCode, Supi, SupiError};

/// Result type alias for uegen operations
pub type UegenResult<T> = Result<T, UegenError>;

/// Top-level error type for all uegen operations
#[derive(Error, Debug)]
pub enum UegenError {
    /// Network configuration is unusable
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// No unique identifier could be synthesized
    #[error("Identifier error: {0}")]
    Identifier(#[from] IdentifierError),

    /// Persistence collaborator errors
    #[error("Persistence error: {0}")]
    Persistence(#[from] PersistenceError),

    /// Export collaborator errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Domain validation errors
    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    /// A provisioning batch must ask for at least one UE
    #[error("No UE profiles requested: batch size must be at least 1")]
    EmptyBatch,
}

impl UegenError {
    /// The conflicting SUPI when this is a duplicate-key rejection.
    pub fn conflicting_supi(&self) -> Option<&Supi> {
        match self {
            UegenError::Persistence(PersistenceError::Conflict { supi }) => Some(supi),
            _ => None,
        }
    }
}

/// Structurally invalid network configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("At least one key scheme must be configured")]
    NoKeySchemes,

    #[error("Key scheme code {code} is configured more than once")]
    DuplicateSchemeCode { code: SchemeCode },

    #[error("{0}")]
    KeyScheme(#[from] KeySchemeError),

    #[error("{0}")]
    Plmn(#[from] PlmnError),

    #[error("At least one configured NSSAI entry is required")]
    NoConfiguredSlices,

    #[error("gNB search list must not be empty")]
    NoGnbAddresses,

    #[error("Routing indicator must be 1 to 4 digits, got {value:?}")]
    InvalidRoutingIndicator { value: String },

    #[error("Failed to read configuration {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Failed to parse configuration {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Failed to write configuration {path}: {reason}")]
    Write { path: PathBuf, reason: String },
}

/// Identifier synthesis errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentifierError {
    /// Every draw collided with an issued identifier
    #[error("No unique SUPI for PLMN {plmn} after {attempts} attempts")]
    Exhausted { plmn: String, attempts: usize },
}

/// Persistence collaborator errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// Duplicate key: a profile with this SUPI already exists
    #[error("A profile with SUPI {supi} already exists")]
    Conflict { supi: Supi },

    /// No document with this SUPI
    #[error("No profile with SUPI {supi}")]
    NotFound { supi: Supi },

    /// Storage fault unrelated to uniqueness (I/O, corruption, connectivity)
    #[error("Storage backend failure: {reason}")]
    Backend { reason: String },
}

/// Export collaborator errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExportError {
    #[error("Failed to write {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Failed to serialize profile {supi}: {reason}")]
    Serialize { supi: Supi, reason: String },
}

/// Domain validation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("PLMN error: {0}")]
    Plmn(#[from] PlmnError),

    #[error("SUPI error: {0}")]
    Supi(#[from] SupiError),

    #[error("Key scheme error: {0}")]
    KeyScheme(#[from] KeySchemeError),

    #[error("Key material error: {0}")]
    KeyMaterial(#[from] KeyMaterialError),
}

/// Convert model errors to UegenError (via DomainError)
impl From<SupiError> for UegenError {
    fn from(err: SupiError) -> Self {
        UegenError::Domain(DomainError::Supi(err))
    }
}

impl From<PlmnError> for UegenError {
    fn from(err: PlmnError) -> Self {
        UegenError::Domain(DomainError::Plmn(err))
    }
}

impl From<KeySchemeError> for UegenError {
    fn from(err: KeySchemeError) -> Self {
        UegenError::Domain(DomainError::KeyScheme(err))
    }
}

impl From<KeyMaterialError> for UegenError {
    fn from(err: KeyMaterialError) -> Self {
        UegenError::Domain(DomainError::KeyMaterial(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = UegenError::Config(ConfigError::NoKeySchemes);
        assert!(err.to_string().contains("key scheme"));
    }

    #[test]
    fn test_conflicting_supi() {
        let supi = Supi::try_from("208930000000001").unwrap();
        let err = UegenError::from(PersistenceError::Conflict { supi: supi.clone() });
        assert_eq!(err.conflicting_supi(), Some(&supi));

        let err = UegenError::from(PersistenceError::Backend {
            reason: "disk full".to_string(),
        });
        assert_eq!(err.conflicting_supi(), None);
    }

    #[test]
    fn test_supi_error_conversion() {
        let err: UegenError = Supi::try_from("abc").unwrap_err().into();
        assert!(matches!(err, UegenError::Domain(DomainError::Supi(_))));
        assert!(err.to_string().contains("SUPI"));
    }

    #[test]
    fn test_result_type_alias() {
        let result: UegenResult<i32> = Ok(42);
        assert_eq!(result.unwrap(), 42);

        let result: UegenResult<i32> = Err(IdentifierError::Exhausted {
            plmn: "208-93".to_string(),
            attempts: 64,
        }
        .into());
        assert!(result.is_err());
    }
}
