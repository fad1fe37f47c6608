use std::collections::HashSet;
use std::fs;

use rand::rngs::StdRng;
use rand::SeedableRng;
use uegen::adapters::{FileProfileStore, InMemoryProfileStore, YamlExporter};
use uegen::api::{BatchRequest, GenerationFailurePolicy};
use uegen::model::{NetworkConfig, SchemeCode, Snssai};
use uegen::ports::ProfileStore;
use uegen::use_cases::provision_batch;
use uegen::{Operator, UegenError};

#[test]
fn test_reference_network_batch_of_five() {
    let mut operator =
        Operator::with_rng(NetworkConfig::reference(), StdRng::seed_from_u64(2024)).unwrap();
    let batch = operator.generate_batch(5, GenerationFailurePolicy::Abort);

    assert!(batch.is_complete());
    let codes: Vec<u8> = batch
        .profiles
        .iter()
        .map(|p| p.key_scheme.code.get())
        .collect();
    assert_eq!(codes, vec![1, 2, 1, 2, 1]);

    let supis: HashSet<_> = batch.profiles.iter().map(|p| p.supi.clone()).collect();
    assert_eq!(supis.len(), 5);
    for profile in &batch.profiles {
        assert!(profile.supi.as_str().starts_with("20893"));
        assert_eq!(profile.configured_nssai, vec![Snssai::new(1, "010203")]);
        assert_eq!(profile.default_nssai, profile.configured_nssai);
    }
}

#[test]
fn test_operator_without_key_schemes_is_rejected() {
    let mut config = NetworkConfig::reference();
    config.key_schemes.clear();

    let err = Operator::new(config).err().unwrap();
    assert_eq!(
        UegenError::from(err).to_string(),
        "Configuration error: At least one key scheme must be configured"
    );
}

#[test]
fn test_provision_to_files_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("ue_profiles.json");
    let output_dir = dir.path().join("output");

    let report = uegen::provision(
        NetworkConfig::reference(),
        &store_path,
        &output_dir,
        &BatchRequest::new(4).unwrap(),
    )
    .unwrap();

    assert!(report.is_success());
    assert_eq!(report.persisted.len(), 4);
    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 4);

    let first = &report.persisted[0];
    let stored = uegen::find_profile(&store_path, &first.supi).unwrap();
    assert_eq!(&stored, first);

    let yaml = fs::read_to_string(output_dir.join(YamlExporter::file_name(first))).unwrap();
    assert!(yaml.contains(&format!("supi: {}", first.supi.to_imsi_uri())));
    assert!(yaml.contains("configured-nssai"));
}

#[test]
fn test_second_run_never_reuses_stored_supis() {
    let dir = tempfile::tempdir().unwrap();
    let store_path = dir.path().join("ue_profiles.json");
    let output_dir = dir.path().join("output");

    for _ in 0..2 {
        let report = uegen::provision(
            NetworkConfig::reference(),
            &store_path,
            &output_dir,
            &BatchRequest::new(3).unwrap(),
        )
        .unwrap();
        assert!(report.conflicts.is_empty());
    }

    let store = FileProfileStore::open(&store_path).unwrap();
    assert_eq!(store.supis().unwrap().len(), 6);
}

#[test]
fn test_provision_into_memory_with_single_scheme() {
    let mut config = NetworkConfig::reference();
    config.key_schemes.retain(|s| s.code == SchemeCode::PROFILE_B);
    let mut operator = Operator::with_rng(config, StdRng::seed_from_u64(5)).unwrap();
    let mut store = InMemoryProfileStore::new();
    let dir = tempfile::tempdir().unwrap();
    let exporter = YamlExporter::new(dir.path());

    let request = BatchRequest::new(3).unwrap();
    let report = provision_batch(&mut operator, &mut store, &exporter, &request);

    assert!(report.is_success());
    assert_eq!(store.supis().unwrap().len(), 3);
    assert!(report
        .persisted
        .iter()
        .all(|p| p.key_scheme.code == SchemeCode::PROFILE_B));
}

#[test]
fn test_config_file_round_trip_drives_operator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("network.toml");
    uegen::init_config(&path, false).unwrap();

    let config = uegen::config::load_network_config(&path).unwrap();
    assert_eq!(config, NetworkConfig::reference());

    let mut operator = Operator::new(config).unwrap();
    assert!(operator.generate_one().is_ok());
}
