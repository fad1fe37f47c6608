use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use crate::error::{IdentifierError, UegenResult};
use crate::model::{PlmnId, Supi};

/// Draws random MSINs under a PLMN prefix until one is not already issued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SupiSynthesizer {
    max_attempts: usize,
    msin_digits: Option<usize>,
}

impl Default for SupiSynthesizer {
    fn default() -> Self {
        Self {
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
            msin_digits: None,
        }
    }
}

impl SupiSynthesizer {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 64;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Restrict the MSIN to `digits` digits instead of filling the IMSI to
    /// 15 digits. Clamped to what the PLMN leaves available.
    pub fn with_msin_digits(mut self, digits: usize) -> Self {
        self.msin_digits = Some(digits.max(1));
        self
    }

    pub fn msin_digits(&self, plmn: &PlmnId) -> usize {
        let available = Supi::MAX_DIGITS - plmn.prefix().len();
        self.msin_digits.map_or(available, |d| d.min(available))
    }

    /// Number of distinct SUPIs this synthesizer can produce for `plmn`.
    pub fn space_size(&self, plmn: &PlmnId) -> u64 {
        10u64.pow(self.msin_digits(plmn) as u32)
    }

    /// Produce a SUPI under `plmn` that is not in `issued`.
    ///
    /// The caller must add the returned SUPI to `issued` before the next call.
    pub fn next<R: Rng>(
        &self,
        rng: &mut R,
        plmn: &PlmnId,
        issued: &HashSet<Supi>,
    ) -> UegenResult<Supi> {
        let digits = self.msin_digits(plmn);
        let space = self.space_size(plmn);

        for attempt in 1..=self.max_attempts {
            let msin = rng.random_range(0..space);
            let supi = Supi::compose(plmn, &format!("{msin:0digits$}"))?;
            if !issued.contains(&supi) {
                if attempt > 1 {
                    debug!("SUPI {} found after {} draws", supi, attempt);
                }
                return Ok(supi);
            }
        }

        warn!(
            "SUPI space for PLMN {} saturated: {} of {} issued",
            plmn,
            issued.len(),
            space
        );
        Err(IdentifierError::Exhausted {
            plmn: plmn.to_string(),
            attempts: self.max_attempts,
        }
        .into())
    }
}
