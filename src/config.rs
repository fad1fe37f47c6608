//! Loading and saving network configuration files (TOML)

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::ConfigError;
use crate::logic::KeySchemeRegistry;
use crate::model::NetworkConfig;

/// Default file name used by the CLI
pub const DEFAULT_CONFIG_FILE: &str = "network.toml";

/// Parse and validate a network configuration from TOML text.
///
/// Key schemes are checked by building the registry an operator would use.
/// `origin` is only used in error messages.
pub fn parse_network_config(text: &str, origin: &Path) -> Result<NetworkConfig, ConfigError> {
    let config: NetworkConfig = toml::from_str(text).map_err(|e| ConfigError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;
    config.validate()?;
    KeySchemeRegistry::new(config.key_schemes.clone())?;
    Ok(config)
}

/// Read, parse and validate a network configuration file.
pub fn load_network_config(path: &Path) -> Result<NetworkConfig, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let config = parse_network_config(&text, path)?;
    info!(
        "Loaded network configuration for PLMN {} (key schemes {:?}) from {}",
        config.plmn,
        config.scheme_codes(),
        path.display()
    );
    Ok(config)
}

/// Render a network configuration as TOML.
pub fn render_network_config(config: &NetworkConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config).map_err(|e| ConfigError::Write {
        path: DEFAULT_CONFIG_FILE.into(),
        reason: e.to_string(),
    })
}

/// Write a network configuration file, refusing to overwrite unless `force`.
pub fn save_network_config(
    config: &NetworkConfig,
    path: &Path,
    force: bool,
) -> Result<(), ConfigError> {
    if path.exists() && !force {
        return Err(ConfigError::Write {
            path: path.to_path_buf(),
            reason: "file already exists".to_string(),
        });
    }

    let text = render_network_config(config)?;
    fs::write(path, text).map_err(|e| ConfigError::Write {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    debug!("Wrote network configuration to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DataRate, SchemeCode, Snssai};

    const MINIMAL: &str = r#"
gnb_search_list = ["10.0.0.2", "10.0.0.3"]

[plmn]
mcc = "001"
mnc = "01"

[integrity]
ia1 = true
ia2 = true
ia3 = false

[ciphering]
ea1 = false
ea2 = true
ea3 = true

[[configured_nssai]]
sst = 1
sd = "000001"

[[key_schemes]]
code = 1
private_key = "c53c22208b61860b06c62e5406a7b330c2b577aa5558981510d128247d38bd1d"
public_key = "5a8d38864820197c3394b92613b20b91633cbd897119273bf8e4a6f4eec0a650"
"#;

    #[test]
    fn test_parse_minimal_applies_defaults() {
        let config = parse_network_config(MINIMAL, Path::new("inline")).unwrap();
        assert_eq!(config.plmn.prefix(), "00101");
        assert_eq!(config.configured_nssai, vec![Snssai::new(1, "000001")]);
        assert!(config.default_nssai.is_empty());
        assert_eq!(config.amf.to_hex(), "8000");
        assert_eq!(config.routing_indicator, "0000");
        assert_eq!(config.integrity_max_rate.uplink, DataRate::Full);
        assert_eq!(config.scheme_codes(), vec![SchemeCode::PROFILE_A]);
        assert_eq!(config.gnb_search_list.len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_plmn() {
        let text = MINIMAL.replace(r#"mcc = "001""#, r#"mcc = "1""#);
        assert!(matches!(
            parse_network_config(&text, Path::new("inline")).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn test_parse_runs_validation() {
        let text = MINIMAL.replace(r#"gnb_search_list = ["10.0.0.2", "10.0.0.3"]"#, "gnb_search_list = []");
        assert_eq!(
            parse_network_config(&text, Path::new("inline")).unwrap_err(),
            ConfigError::NoGnbAddresses
        );
    }

    #[test]
    fn test_parse_rejects_duplicate_scheme_code() {
        let scheme = &MINIMAL[MINIMAL.find("[[key_schemes]]").unwrap()..];
        let text = format!("{}\n{}", MINIMAL, scheme);
        assert_eq!(
            parse_network_config(&text, Path::new("inline")).unwrap_err(),
            ConfigError::DuplicateSchemeCode {
                code: SchemeCode::PROFILE_A
            }
        );
    }

    #[test]
    fn test_parse_rejects_short_key_material() {
        let text = MINIMAL.replace(
            "5a8d38864820197c3394b92613b20b91633cbd897119273bf8e4a6f4eec0a650",
            "5a8d3886",
        );
        assert!(matches!(
            parse_network_config(&text, Path::new("inline")).unwrap_err(),
            ConfigError::KeyScheme(_)
        ));
    }

    #[test]
    fn test_reference_round_trips_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = NetworkConfig::reference();

        save_network_config(&config, &path, false).unwrap();
        assert_eq!(load_network_config(&path).unwrap(), config);
    }

    #[test]
    fn test_save_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(DEFAULT_CONFIG_FILE);
        let config = NetworkConfig::reference();

        save_network_config(&config, &path, false).unwrap();
        assert!(matches!(
            save_network_config(&config, &path, false).unwrap_err(),
            ConfigError::Write { .. }
        ));
        assert!(save_network_config(&config, &path, true).is_ok());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_network_config(Path::new("/nonexistent/network.toml")).unwrap_err(),
            ConfigError::Read { .. }
        ));
    }
}
