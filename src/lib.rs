pub mod adapters;
pub mod api;
pub mod config;
pub mod error;
mod logic;
pub mod model;
pub mod operator;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use error::{UegenError, UegenResult};
pub use logic::{KeySchemeRegistry, SupiSynthesizer};
pub use operator::{BatchGeneration, GenerationFailure, GenerationFailurePolicy, Operator};

// Re-export public API
pub use api::{find_profile, init_config, profile_to_yaml, provision, provision_from_file};
