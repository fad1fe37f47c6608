use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Mobile country code: exactly three decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mcc(String);

impl Mcc {
    pub const LENGTH: usize = 3;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Mcc {
    type Error = PlmnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() != Self::LENGTH || !is_digits(value) {
            return Err(PlmnError::InvalidMcc {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for Mcc {
    type Error = PlmnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Mcc> for String {
    fn from(mcc: Mcc) -> Self {
        mcc.0
    }
}

/// Mobile network code: two or three decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Mnc(String);

impl Mnc {
    pub const MIN_LENGTH: usize = 2;

    pub const MAX_LENGTH: usize = 3;

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Mnc {
    type Error = PlmnError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if !(Self::MIN_LENGTH..=Self::MAX_LENGTH).contains(&value.len()) || !is_digits(value) {
            return Err(PlmnError::InvalidMnc {
                value: value.to_string(),
            });
        }
        Ok(Self(value.to_string()))
    }
}

impl TryFrom<String> for Mnc {
    type Error = PlmnError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Mnc> for String {
    fn from(mnc: Mnc) -> Self {
        mnc.0
    }
}

/// Public land mobile network identity (MCC + MNC).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlmnId {
    pub mcc: Mcc,
    pub mnc: Mnc,
}

impl PlmnId {
    pub fn new(mcc: &str, mnc: &str) -> Result<Self, PlmnError> {
        Ok(Self {
            mcc: Mcc::try_from(mcc)?,
            mnc: Mnc::try_from(mnc)?,
        })
    }

    /// The IMSI prefix for this network, `mcc ‖ mnc`.
    pub fn prefix(&self) -> String {
        format!("{}{}", self.mcc.as_str(), self.mnc.as_str())
    }
}

impl fmt::Display for PlmnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.mcc.as_str(), self.mnc.as_str())
    }
}

fn is_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlmnError {
    #[error("MCC must be exactly 3 digits, got {value:?}")]
    InvalidMcc { value: String },

    #[error("MNC must be 2 or 3 digits, got {value:?}")]
    InvalidMnc { value: String },
}
