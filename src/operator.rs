//! The operator: one network configuration, many generated UEs
//!
//! An [`Operator`] is built from a validated [`NetworkConfig`] and owns the
//! set of SUPIs it has issued. An invalid configuration never produces an
//! operator, so there is no way to generate from a broken profile.
//!
//! Generation takes `&mut self`; an operator shared between threads must be
//! wrapped in a lock so that two batches never draw against diverging
//! issued sets.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::error::{ConfigError, UegenError, UegenResult};
use crate::logic::{compose, draw_credentials, KeySchemeRegistry, SupiSynthesizer};
use crate::model::{DeviceProfile, NetworkConfig, Supi};

/// What a batch does when generating one device fails
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GenerationFailurePolicy {
    /// Stop at the first failure; profiles produced so far are kept
    #[default]
    Abort,
    /// Record the failure and continue with the next device
    Skip,
}

/// One device of a batch that could not be generated
#[derive(Debug)]
pub struct GenerationFailure {
    /// Zero-based position in the batch
    pub index: usize,
    pub error: UegenError,
}

/// Result of [`Operator::generate_batch`]
#[derive(Debug, Default)]
pub struct BatchGeneration {
    pub requested: usize,
    /// Generated profiles in issue order
    pub profiles: Vec<DeviceProfile>,
    pub failures: Vec<GenerationFailure>,
}

impl BatchGeneration {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.profiles.len() == self.requested
    }

    pub fn first_failure(&self) -> Option<&GenerationFailure> {
        self.failures.first()
    }

    pub fn into_parts(self) -> (Vec<DeviceProfile>, Vec<GenerationFailure>) {
        (self.profiles, self.failures)
    }
}

/// Generates UE profiles for a single network configuration
pub struct Operator<R = StdRng> {
    config: NetworkConfig,
    registry: KeySchemeRegistry,
    synthesizer: SupiSynthesizer,
    rng: R,
    issued: HashSet<Supi>,
    generated: usize,
}

impl Operator<StdRng> {
    /// Build an operator seeded from the thread-local generator
    pub fn new(config: NetworkConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> Operator<R> {
    /// Upper bound on the profiles reserved up front for one batch
    const PREALLOCATE_LIMIT: usize = 1024;

    /// Build an operator with an explicit randomness source
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation or
    /// carries no usable key scheme.
    pub fn with_rng(config: NetworkConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let registry = KeySchemeRegistry::new(config.key_schemes.clone())?;

        info!(
            "Operator ready for PLMN {} with key schemes {:?}",
            config.plmn,
            registry.codes().map(|c| c.get()).collect::<Vec<_>>()
        );

        Ok(Self {
            config,
            registry,
            synthesizer: SupiSynthesizer::default(),
            rng,
            issued: HashSet::new(),
            generated: 0,
        })
    }

    pub fn with_synthesizer(mut self, synthesizer: SupiSynthesizer) -> Self {
        self.synthesizer = synthesizer;
        self
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn registry(&self) -> &KeySchemeRegistry {
        &self.registry
    }

    /// Mark SUPIs as already taken, e.g. those found in persistent storage.
    ///
    /// Returns how many were not already known.
    pub fn reserve<I>(&mut self, supis: I) -> usize
    where
        I: IntoIterator<Item = Supi>,
    {
        let before = self.issued.len();
        self.issued.extend(supis);
        let added = self.issued.len() - before;
        debug!("Reserved {} existing SUPIs", added);
        added
    }

    pub fn is_issued(&self, supi: &Supi) -> bool {
        self.issued.contains(supi)
    }

    pub fn issued_count(&self) -> usize {
        self.issued.len()
    }

    /// Number of profiles this operator has produced
    pub fn generated_count(&self) -> usize {
        self.generated
    }

    /// Generate one UE profile
    ///
    /// The key scheme is assigned cyclically by [`generated_count`]
    /// (schemes `[1, 2]` give `1, 2, 1, 2, …`). The new SUPI is recorded as
    /// issued before returning, so it can never be handed out again by this
    /// operator even if persisting it later fails.
    ///
    /// # Errors
    ///
    /// Returns [`IdentifierError::Exhausted`](crate::error::IdentifierError)
    /// when no unused SUPI was found within the retry bound.
    ///
    /// [`generated_count`]: Operator::generated_count
    pub fn generate_one(&mut self) -> UegenResult<DeviceProfile> {
        let scheme = self.registry.select(self.generated);
        let supi = self
            .synthesizer
            .next(&mut self.rng, &self.config.plmn, &self.issued)?;
        self.issued.insert(supi.clone());

        let credentials = draw_credentials(&mut self.rng, self.config.amf);
        let profile = compose(&self.config, supi, scheme, credentials);
        self.generated += 1;

        debug!(
            "Generated UE {} with protection scheme {}",
            profile.supi, profile.key_scheme.code
        );
        Ok(profile)
    }

    /// Generate `count` UE profiles
    ///
    /// Profiles already produced stay valid whatever happens later in the
    /// batch; `policy` decides whether a failure ends the batch.
    pub fn generate_batch(
        &mut self,
        count: usize,
        policy: GenerationFailurePolicy,
    ) -> BatchGeneration {
        let mut batch = BatchGeneration {
            requested: count,
            profiles: Vec::with_capacity(count.min(Self::PREALLOCATE_LIMIT)),
            failures: Vec::new(),
        };

        for index in 0..count {
            match self.generate_one() {
                Ok(profile) => batch.profiles.push(profile),
                Err(error) => {
                    warn!("Failed to generate UE {} of {}: {}", index + 1, count, error);
                    batch.failures.push(GenerationFailure { index, error });
                    if policy == GenerationFailurePolicy::Abort {
                        break;
                    }
                }
            }
        }

        info!(
            "Generated {} of {} UE profiles for PLMN {}",
            batch.profiles.len(),
            count,
            self.config.plmn
        );
        batch
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentifierError;
    use crate::model::{SchemeCode, Snssai};

    fn operator() -> Operator {
        Operator::with_rng(NetworkConfig::reference(), StdRng::seed_from_u64(42)).unwrap()
    }

    #[test]
    fn test_zero_key_schemes_is_configuration_error() {
        let mut config = NetworkConfig::reference();
        config.key_schemes.clear();
        assert_eq!(
            Operator::new(config).err(),
            Some(ConfigError::NoKeySchemes)
        );
    }

    #[test]
    fn test_reference_batch_of_five() {
        let mut operator = operator();
        let batch = operator.generate_batch(5, GenerationFailurePolicy::Abort);

        assert!(batch.is_complete());
        assert_eq!(batch.profiles.len(), 5);

        let codes: Vec<u8> = batch
            .profiles
            .iter()
            .map(|p| p.key_scheme.code.get())
            .collect();
        assert_eq!(codes, vec![1, 2, 1, 2, 1]);

        let supis: HashSet<&Supi> = batch.profiles.iter().map(|p| &p.supi).collect();
        assert_eq!(supis.len(), 5);

        for profile in &batch.profiles {
            assert!(profile.supi.as_str().starts_with("20893"));
            assert_eq!(profile.configured_nssai, vec![Snssai::new(1, "010203")]);
            assert_eq!(profile.default_nssai, vec![Snssai::new(1, "010203")]);
        }
    }

    #[test]
    fn test_never_reissues_reserved_or_issued() {
        let mut operator = operator().with_synthesizer(
            SupiSynthesizer::new()
                .with_msin_digits(2)
                .with_max_attempts(100_000),
        );
        let plmn = operator.config().plmn.clone();
        let reserved: Vec<Supi> = (0..50)
            .map(|n| Supi::compose(&plmn, &format!("{n:02}")).unwrap())
            .collect();
        assert_eq!(operator.reserve(reserved.clone()), 50);

        let batch = operator.generate_batch(50, GenerationFailurePolicy::Abort);
        assert!(batch.is_complete());
        for profile in &batch.profiles {
            assert!(!reserved.contains(&profile.supi));
        }
        assert_eq!(operator.issued_count(), 100);
    }

    #[test]
    fn test_abort_keeps_profiles_already_generated() {
        let mut operator = operator().with_synthesizer(
            SupiSynthesizer::new()
                .with_msin_digits(1)
                .with_max_attempts(10_000),
        );
        let batch = operator.generate_batch(12, GenerationFailurePolicy::Abort);

        assert_eq!(batch.profiles.len(), 10);
        assert_eq!(batch.failures.len(), 1);
        let failure = batch.first_failure().unwrap();
        assert_eq!(failure.index, 10);
        assert!(matches!(
            failure.error,
            UegenError::Identifier(IdentifierError::Exhausted { .. })
        ));
        assert!(!batch.is_complete());
    }

    #[test]
    fn test_oversized_batch_does_not_preallocate() {
        let mut operator = operator().with_synthesizer(
            SupiSynthesizer::new()
                .with_msin_digits(1)
                .with_max_attempts(10_000),
        );
        let batch = operator.generate_batch(usize::MAX, GenerationFailurePolicy::Abort);

        assert_eq!(batch.requested, usize::MAX);
        assert_eq!(batch.profiles.len(), 10);
        assert_eq!(batch.failures.len(), 1);
    }

    #[test]
    fn test_skip_records_every_failure() {
        let mut operator = operator().with_synthesizer(
            SupiSynthesizer::new()
                .with_msin_digits(1)
                .with_max_attempts(10_000),
        );
        let batch = operator.generate_batch(13, GenerationFailurePolicy::Skip);

        assert_eq!(batch.profiles.len(), 10);
        let indexes: Vec<usize> = batch.failures.iter().map(|f| f.index).collect();
        assert_eq!(indexes, vec![10, 11, 12]);
    }

    #[test]
    fn test_scheme_cycle_continues_across_batches() {
        let mut operator = operator();
        operator.generate_batch(3, GenerationFailurePolicy::Abort);
        let next = operator.generate_one().unwrap();
        assert_eq!(next.key_scheme.code, SchemeCode::PROFILE_B);
        assert_eq!(operator.generated_count(), 4);
    }

    #[test]
    fn test_profiles_have_distinct_credentials() {
        let mut operator = operator();
        let a = operator.generate_one().unwrap();
        let b = operator.generate_one().unwrap();
        assert_ne!(a.credentials.key, b.credentials.key);
        assert_ne!(a.credentials.opc, b.credentials.opc);
        assert_eq!(a.credentials.amf, operator.config().amf);
    }
}
