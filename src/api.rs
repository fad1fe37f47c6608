//! Convenience entry points wiring the file-backed adapters
//!
//! These functions pair the use cases with [`FileProfileStore`] and
//! [`YamlExporter`]. Callers that need another store or exporter use
//! [`crate::use_cases`] directly.

use std::path::Path;

use tracing::info;

use crate::adapters::{FileProfileStore, YamlExporter};
use crate::config::{load_network_config, save_network_config};
use crate::error::{ConfigError, ExportError, UegenResult};
use crate::model::{DeviceProfile, NetworkConfig, Supi};
use crate::operator::Operator;
use crate::ports::ProfileStore;
use crate::use_cases::provision_batch;

pub use crate::operator::GenerationFailurePolicy;
pub use crate::use_cases::{BatchPolicy, BatchRequest, ProvisionReport, ProvisionSummary};

/// Provision UEs for `config` into the JSON store at `store_path`, writing
/// simulator files to `output_dir`
///
/// # Errors
///
/// Returns an error when the configuration is invalid or the store cannot be
/// opened. Failures during the run itself are reported in the
/// [`ProvisionReport`].
pub fn provision(
    config: NetworkConfig,
    store_path: &Path,
    output_dir: &Path,
    request: &BatchRequest,
) -> UegenResult<ProvisionReport> {
    let mut operator = Operator::new(config)?;
    let mut store = FileProfileStore::open(store_path)?;
    let exporter = YamlExporter::new(output_dir);
    Ok(provision_batch(&mut operator, &mut store, &exporter, request))
}

/// Like [`provision`], reading the configuration from a TOML file
pub fn provision_from_file(
    config_path: &Path,
    store_path: &Path,
    output_dir: &Path,
    request: &BatchRequest,
) -> UegenResult<ProvisionReport> {
    let config = load_network_config(config_path)?;
    provision(config, store_path, output_dir, request)
}

/// Look up one stored profile
pub fn find_profile(store_path: &Path, supi: &Supi) -> UegenResult<DeviceProfile> {
    FileProfileStore::open(store_path)?.find(supi)
}

/// Render a profile in the UERANSIM UE layout
pub fn profile_to_yaml(profile: &DeviceProfile) -> Result<String, ExportError> {
    YamlExporter::render(profile)
}

/// Write the reference network configuration to `path`
pub fn init_config(path: &Path, force: bool) -> Result<NetworkConfig, ConfigError> {
    let config = NetworkConfig::reference();
    save_network_config(&config, path, force)?;
    info!("Wrote reference network configuration to {}", path.display());
    Ok(config)
}
