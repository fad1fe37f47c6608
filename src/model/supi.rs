use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::PlmnId;

/// Subscription permanent identifier in IMSI form.
///
/// Holds the bare digit string `mcc ‖ mnc ‖ msin`. The `imsi-` prefix used by
/// simulator configuration files is added by [`Supi::to_imsi_uri`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Supi(String);

impl Supi {
    /// Longest IMSI allowed by 3GPP TS 23.003.
    pub const MAX_DIGITS: usize = 15;

    /// MCC plus the shortest MNC plus a one-digit MSIN.
    pub const MIN_DIGITS: usize = 6;

    pub const IMSI_PREFIX: &'static str = "imsi-";

    /// Builds a SUPI from a network and an MSIN that is already zero-padded.
    pub fn compose(plmn: &PlmnId, msin: &str) -> Result<Self, SupiError> {
        Self::try_from(format!("{}{}", plmn.prefix(), msin))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn belongs_to(&self, plmn: &PlmnId) -> bool {
        self.0.starts_with(&plmn.prefix())
    }

    pub fn to_imsi_uri(&self) -> String {
        format!("{}{}", Self::IMSI_PREFIX, self.0)
    }
}

impl TryFrom<&str> for Supi {
    type Error = SupiError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let digits = value.strip_prefix(Self::IMSI_PREFIX).unwrap_or(value);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(SupiError::NonDigit {
                value: value.to_string(),
            });
        }
        if !(Self::MIN_DIGITS..=Self::MAX_DIGITS).contains(&digits.len()) {
            return Err(SupiError::InvalidLength {
                length: digits.len(),
            });
        }
        Ok(Self(digits.to_string()))
    }
}

impl TryFrom<String> for Supi {
    type Error = SupiError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl std::str::FromStr for Supi {
    type Err = SupiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}

impl From<Supi> for String {
    fn from(supi: Supi) -> Self {
        supi.0
    }
}

impl fmt::Display for Supi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SupiError {
    #[error("SUPI must contain only digits, got {value:?}")]
    NonDigit { value: String },

    #[error("SUPI must be between {min} and {max} digits, got {length}", min = Supi::MIN_DIGITS, max = Supi::MAX_DIGITS)]
    InvalidLength { length: usize },
}
