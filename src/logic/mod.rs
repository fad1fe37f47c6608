mod composer;
mod credentials;
mod key_scheme_registry;
mod supi_synthesizer;

pub use composer::compose;
pub use credentials::draw_credentials;
pub use key_scheme_registry::KeySchemeRegistry;
pub use supi_synthesizer::SupiSynthesizer;
