//! Adapters - concrete implementations of ports (traits)

mod file_store;
mod memory_store;
mod yaml_exporter;

#[cfg(test)]
pub mod fakes;

// Re-export for convenience
pub use file_store::{FileProfileStore, DEFAULT_STORE_FILE};
pub use memory_store::InMemoryProfileStore;
pub use yaml_exporter::{YamlExporter, DEFAULT_OUTPUT_DIR};
