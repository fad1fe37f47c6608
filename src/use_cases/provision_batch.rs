//! Provision batch use case
//!
//! Generates a batch of UE profiles, persists them and exports each
//! persisted profile for the simulator. Persistence conflicts are isolated
//! to the offending devices; export failures never undo persistence.

use std::path::PathBuf;

use rand::Rng;
use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ExportError, PersistenceError, UegenError, UegenResult};
use crate::model::{DeviceProfile, Supi};
use crate::operator::{GenerationFailure, GenerationFailurePolicy, Operator};
use crate::ports::{ProfileExporter, ProfileStore};

/// How a provisioning run reacts to failures
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchPolicy {
    pub on_generation_failure: GenerationFailurePolicy,
    /// Rounds of replacement generation for profiles lost to conflicts
    pub conflict_retries: usize,
}

/// A validated request for at least one UE
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchRequest {
    count: usize,
    pub policy: BatchPolicy,
}

impl BatchRequest {
    /// # Errors
    ///
    /// Returns [`UegenError::EmptyBatch`] when `count` is zero.
    pub fn new(count: usize) -> UegenResult<Self> {
        if count == 0 {
            return Err(UegenError::EmptyBatch);
        }
        Ok(Self {
            count,
            policy: BatchPolicy::default(),
        })
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Everything that happened during one provisioning run
#[derive(Debug, Default)]
pub struct ProvisionReport {
    /// Profiles produced by the operator, replacements included
    pub generated: usize,
    pub persisted: Vec<DeviceProfile>,
    /// SUPIs the store refused as duplicates
    pub conflicts: Vec<Supi>,
    pub exported: Vec<PathBuf>,
    pub export_failures: Vec<(Supi, ExportError)>,
    pub generation_failures: Vec<GenerationFailure>,
    /// Set when generation stopped early under [`GenerationFailurePolicy::Abort`]
    pub aborted: bool,
    /// First failure that stopped the run or left requested UEs unprovisioned
    pub hard_error: Option<UegenError>,
}

/// Serializable digest of a [`ProvisionReport`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProvisionSummary {
    pub generated: usize,
    pub persisted: usize,
    pub conflicts: Vec<String>,
    pub yaml_files: Vec<String>,
    pub generation_failures: usize,
    pub export_failures: usize,
    pub error: Option<String>,
}

impl ProvisionReport {
    /// The error that makes this run a failure, if any
    pub fn error(&self) -> Option<&UegenError> {
        self.hard_error.as_ref().or_else(|| {
            self.aborted
                .then(|| self.generation_failures.first().map(|f| &f.error))
                .flatten()
        })
    }

    pub fn is_success(&self) -> bool {
        self.error().is_none()
    }

    pub fn summary(&self) -> ProvisionSummary {
        ProvisionSummary {
            generated: self.generated,
            persisted: self.persisted.len(),
            conflicts: self.conflicts.iter().map(Supi::to_imsi_uri).collect(),
            yaml_files: self
                .exported
                .iter()
                .map(|p| p.display().to_string())
                .collect(),
            generation_failures: self.generation_failures.len(),
            export_failures: self.export_failures.len(),
            error: self.error().map(ToString::to_string),
        }
    }

    fn record_generation(&mut self, profiles: &[DeviceProfile]) {
        self.generated += profiles.len();
    }
}

/// Generate, persist and export `request.count` UE profiles
///
/// The workflow:
/// 1. Reserve every SUPI the store already holds
/// 2. Generate the batch under the request's failure policy
/// 3. Persist it, isolating conflicting SUPIs if the store rejects the batch
/// 4. Regenerate replacements for conflicts, up to `conflict_retries` rounds
/// 5. Export every persisted profile
///
/// Failures are collected in the returned report. A store failure other than
/// a conflict stops persistence and is reported as the hard error; profiles
/// persisted before it are still exported. Conflicts still unreplaced after
/// the retry rounds are reported as a hard `PersistenceError::Conflict` for
/// the first unreplaced SUPI.
pub fn provision_batch<S, E, R>(
    operator: &mut Operator<R>,
    store: &mut S,
    exporter: &E,
    request: &BatchRequest,
) -> ProvisionReport
where
    S: ProfileStore,
    E: ProfileExporter,
    R: Rng,
{
    let mut report = ProvisionReport::default();
    let policy = request.policy;

    match store.supis() {
        Ok(existing) => {
            let reserved = operator.reserve(existing);
            info!("Reserved {} SUPIs already in the store", reserved);
        }
        Err(e) => {
            warn!("Cannot read existing SUPIs: {}", e);
            report.hard_error = Some(e);
            return report;
        }
    }

    let mut wanted = request.count();
    let mut round = 0;
    loop {
        let batch = operator.generate_batch(wanted, policy.on_generation_failure);
        let complete = batch.is_complete();
        let (profiles, failures) = batch.into_parts();
        report.record_generation(&profiles);
        report.generation_failures.extend(failures);

        let conflicts_before = report.conflicts.len();
        if let Err(e) = persist(store, profiles, &mut report) {
            warn!("Persistence stopped: {}", e);
            report.hard_error = Some(e);
            break;
        }

        if !complete && policy.on_generation_failure == GenerationFailurePolicy::Abort {
            report.aborted = true;
            break;
        }

        wanted = report.conflicts.len() - conflicts_before;
        if wanted == 0 {
            break;
        }
        if round == policy.conflict_retries {
            let supi = report.conflicts[conflicts_before].clone();
            warn!("{} UEs lost to conflicts were not replaced", wanted);
            report.hard_error = Some(PersistenceError::Conflict { supi }.into());
            break;
        }
        round += 1;
        info!(
            "Regenerating {} profiles lost to conflicts (round {} of {})",
            wanted, round, policy.conflict_retries
        );
    }

    export(exporter, &mut report);

    info!(
        "Provisioned {} of {} requested UEs ({} conflicts, {} exported)",
        report.persisted.len(),
        request.count(),
        report.conflicts.len(),
        report.exported.len()
    );
    report
}

/// Insert `profiles` as one batch, falling back to one by one on a conflict
fn persist<S: ProfileStore>(
    store: &mut S,
    profiles: Vec<DeviceProfile>,
    report: &mut ProvisionReport,
) -> Result<(), UegenError> {
    if profiles.is_empty() {
        return Ok(());
    }

    match store.insert_many(&profiles) {
        Ok(_) => {
            report.persisted.extend(profiles);
            return Ok(());
        }
        Err(e) if e.conflicting_supi().is_some() => {
            warn!("Batch insert rejected ({}), isolating conflicts", e);
        }
        Err(e) => return Err(e),
    }

    for profile in profiles {
        match store.insert_many(std::slice::from_ref(&profile)) {
            Ok(_) => report.persisted.push(profile),
            Err(e) if e.conflicting_supi().is_some() => {
                warn!("UE {} already provisioned", profile.supi);
                report.conflicts.push(profile.supi);
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn export<E: ProfileExporter>(exporter: &E, report: &mut ProvisionReport) {
    for profile in &report.persisted {
        match exporter.export_record(profile) {
            Ok(path) => report.exported.push(path),
            Err(e) => {
                warn!("Failed to export UE {}: {}", profile.supi, e);
                report.export_failures.push((profile.supi.clone(), e));
            }
        }
    }
}
