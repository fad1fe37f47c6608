//! Security and access-control policies shared by every UE of a network

use serde::{Deserialize, Serialize};

/// NAS integrity algorithms the UE advertises (128-NIA1..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegrityAlgorithms {
    pub ia1: bool,
    pub ia2: bool,
    pub ia3: bool,
}

impl IntegrityAlgorithms {
    pub fn all() -> Self {
        Self {
            ia1: true,
            ia2: true,
            ia3: true,
        }
    }
}

/// NAS ciphering algorithms the UE advertises (128-NEA1..3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CipheringAlgorithms {
    pub ea1: bool,
    pub ea2: bool,
    pub ea3: bool,
}

impl CipheringAlgorithms {
    pub fn all() -> Self {
        Self {
            ea1: true,
            ea2: true,
            ea3: true,
        }
    }
}

/// Unified access control: access identities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UacAic {
    pub mps: bool,
    pub mcs: bool,
}

/// Unified access control: access classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UacAcc {
    pub normal_class: u8,
    pub class11: bool,
    pub class12: bool,
    pub class13: bool,
    pub class14: bool,
    pub class15: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DataRate {
    #[default]
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "64kbps")]
    Kbps64,
}

impl DataRate {
    pub fn as_str(self) -> &'static str {
        match self {
            DataRate::Full => "full",
            DataRate::Kbps64 => "64kbps",
        }
    }
}

/// Maximum data rate for user-plane integrity protection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IntegrityMaxRate {
    pub uplink: DataRate,
    pub downlink: DataRate,
}
