use std::path::PathBuf;

use crate::error::ExportError;
use crate::model::DeviceProfile;

/// Capability to write one simulator configuration file per UE
pub trait ProfileExporter {
    /// Export a single profile, returning the path written
    fn export_record(&self, profile: &DeviceProfile) -> Result<PathBuf, ExportError>;
}
