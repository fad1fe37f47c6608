//! Ports (traits) for the collaborators around the generator
//!
//! The engine and the provisioning use case depend on these abstractions,
//! not on a concrete database or file format.

mod exporter;
mod profile_store;

pub use exporter::ProfileExporter;
pub use profile_store::ProfileStore;
