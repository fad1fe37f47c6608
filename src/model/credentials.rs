use serde::{Deserialize, Serialize};
use std::fmt;

use super::{KeyMaterialError, SecretKeyMaterial};

/// Authentication management field, two bytes.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Amf([u8; 2]);

impl Amf {
    pub const fn new(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl Default for Amf {
    /// Separation bit set, as used by 5G AKA.
    fn default() -> Self {
        Self([0x80, 0x00])
    }
}

impl TryFrom<&str> for Amf {
    type Error = KeyMaterialError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let bytes = hex::decode(value).map_err(|e| KeyMaterialError::InvalidHex {
            reason: e.to_string(),
        })?;
        let array: [u8; 2] = bytes
            .as_slice()
            .try_into()
            .map_err(|_| KeyMaterialError::InvalidLength {
                expected: 2,
                actual: bytes.len(),
            })?;
        Ok(Self(array))
    }
}

impl TryFrom<String> for Amf {
    type Error = KeyMaterialError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::try_from(value.as_str())
    }
}

impl From<Amf> for String {
    fn from(amf: Amf) -> Self {
        amf.to_hex()
    }
}

impl fmt::Debug for Amf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Amf({})", self.to_hex())
    }
}

/// How the operator key in a profile is to be interpreted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OpType {
    Op,
    #[default]
    Opc,
}

impl OpType {
    pub fn as_str(self) -> &'static str {
        match self {
            OpType::Op => "OP",
            OpType::Opc => "OPC",
        }
    }
}

/// Per-device subscription credentials for 5G AKA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberCredentials {
    /// Permanent subscription key K.
    pub key: SecretKeyMaterial,
    pub opc: SecretKeyMaterial,
    pub op_type: OpType,
    pub amf: Amf,
}

impl SubscriberCredentials {
    pub const KEY_LEN: usize = 16;
}
