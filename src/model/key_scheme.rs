//! Home-network key schemes used for SUPI concealment

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::{KeyMaterialError, PublicKeyMaterial, SecretKeyMaterial};

/// Protection scheme identifier as carried in the SUCI (0 is the null scheme).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SchemeCode(u8);

impl SchemeCode {
    pub const PROFILE_A: SchemeCode = SchemeCode(1);

    pub const PROFILE_B: SchemeCode = SchemeCode(2);

    pub fn new(code: u8) -> Result<Self, KeySchemeError> {
        if code == 0 {
            return Err(KeySchemeError::NullScheme);
        }
        Ok(Self(code))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn profile(self) -> Option<EciesProfile> {
        match self.0 {
            1 => Some(EciesProfile::A),
            2 => Some(EciesProfile::B),
            _ => None,
        }
    }
}

impl TryFrom<u8> for SchemeCode {
    type Error = KeySchemeError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::new(code)
    }
}

impl From<SchemeCode> for u8 {
    fn from(code: SchemeCode) -> Self {
        code.0
    }
}

impl fmt::Display for SchemeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// ECIES profiles defined by 3GPP TS 33.501 Annex C.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EciesProfile {
    /// Curve25519 / X25519
    A,
    /// secp256r1 with compressed public key
    B,
}

impl EciesProfile {
    pub fn private_key_len(self) -> usize {
        32
    }

    pub fn public_key_len(self) -> usize {
        match self {
            EciesProfile::A => 32,
            EciesProfile::B => 33,
        }
    }
}

/// A home-network key pair bound to a protection scheme.
///
/// Shared by every device generated under one network configuration and
/// copied by value into each profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyScheme {
    pub code: SchemeCode,
    pub private_key: SecretKeyMaterial,
    pub public_key: PublicKeyMaterial,
}

impl KeyScheme {
    pub fn from_hex(code: u8, private_key: &str, public_key: &str) -> Result<Self, KeySchemeError> {
        Ok(Self {
            code: SchemeCode::new(code)?,
            private_key: SecretKeyMaterial::from_hex(private_key)?,
            public_key: PublicKeyMaterial::from_hex(public_key)?,
        })
    }

    /// Checks key lengths for the known ECIES profiles; other codes only
    /// need non-empty material.
    pub fn validate(&self) -> Result<(), KeySchemeError> {
        let Some(profile) = self.code.profile() else {
            if self.private_key.is_empty() || self.public_key.is_empty() {
                return Err(KeySchemeError::EmptyMaterial { code: self.code });
            }
            return Ok(());
        };

        check_len(self.code, profile.private_key_len(), self.private_key.len())?;
        check_len(self.code, profile.public_key_len(), self.public_key.len())?;

        if profile == EciesProfile::B && !matches!(self.public_key.as_bytes()[0], 0x02 | 0x03) {
            return Err(KeySchemeError::UncompressedPoint { code: self.code });
        }
        Ok(())
    }
}

fn check_len(code: SchemeCode, expected: usize, actual: usize) -> Result<(), KeySchemeError> {
    if expected != actual {
        return Err(KeySchemeError::Material {
            code,
            source: KeyMaterialError::InvalidLength { expected, actual },
        });
    }
    Ok(())
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeySchemeError {
    #[error("Scheme code 0 (null scheme) cannot carry a home-network key")]
    NullScheme,

    #[error("Key scheme {code}: {source}")]
    Material {
        code: SchemeCode,
        source: KeyMaterialError,
    },

    #[error("Key scheme {code} has empty key material")]
    EmptyMaterial { code: SchemeCode },

    #[error("Key scheme {code} public key must be a compressed point")]
    UncompressedPoint { code: SchemeCode },

    #[error("Invalid key material: {0}")]
    Encoding(#[from] KeyMaterialError),
}
