use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr};

use super::{
    Amf, CipheringAlgorithms, IntegrityAlgorithms, IntegrityMaxRate, KeyScheme, PduSessionType,
    PlmnId, SessionTemplate, Snssai, UacAcc, UacAic,
};
use crate::error::ConfigError;

/// Network-wide profile shared by every UE an operator generates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkConfig {
    pub plmn: PlmnId,
    #[serde(default)]
    pub amf: Amf,
    #[serde(default = "default_routing_indicator")]
    pub routing_indicator: String,
    pub configured_nssai: Vec<Snssai>,
    #[serde(default)]
    pub default_nssai: Vec<Snssai>,
    pub integrity: IntegrityAlgorithms,
    pub ciphering: CipheringAlgorithms,
    #[serde(default)]
    pub uac_aic: UacAic,
    #[serde(default)]
    pub uac_acc: UacAcc,
    #[serde(default)]
    pub sessions: Vec<SessionTemplate>,
    pub key_schemes: Vec<KeyScheme>,
    pub gnb_search_list: Vec<IpAddr>,
    #[serde(default)]
    pub integrity_max_rate: IntegrityMaxRate,
}

fn default_routing_indicator() -> String {
    NetworkConfig::DEFAULT_ROUTING_INDICATOR.to_string()
}

impl NetworkConfig {
    pub const DEFAULT_ROUTING_INDICATOR: &'static str = "0000";

    /// The test network (208/93) with both ECIES profiles configured.
    pub fn reference() -> Self {
        let slice = Snssai::new(1, "010203");
        Self {
            plmn: PlmnId::new("208", "93").expect("reference PLMN is valid"),
            amf: Amf::default(),
            routing_indicator: default_routing_indicator(),
            configured_nssai: vec![slice.clone()],
            default_nssai: vec![slice],
            integrity: IntegrityAlgorithms::all(),
            ciphering: CipheringAlgorithms::all(),
            uac_aic: UacAic::default(),
            uac_acc: UacAcc::default(),
            sessions: vec![SessionTemplate {
                pdu_type: PduSessionType::Ipv4,
                apn: "internet".to_string(),
                slice: Snssai::new(1, "0x010203"),
            }],
            key_schemes: vec![
                KeyScheme::from_hex(
                    1,
                    "c53c22208b61860b06c62e5406a7b330c2b577aa5558981510d128247d38bd1d",
                    "5a8d38864820197c3394b92613b20b91633cbd897119273bf8e4a6f4eec0a650",
                )
                .expect("reference profile A key is valid hex"),
                KeyScheme::from_hex(
                    2,
                    "F1AB1074477EBCC7F554EA1C5FC368B1616730155E0041AC447D6301975FECDA",
                    "0272DA71976234CE833A6907425867B82E074D44EF907DFB4B3E21C1C2256EBCD1",
                )
                .expect("reference profile B key is valid hex"),
            ],
            gnb_search_list: vec![IpAddr::V4(Ipv4Addr::new(10, 0, 0, 2))],
            integrity_max_rate: IntegrityMaxRate::default(),
        }
    }

    /// Structural checks that do not depend on the key scheme registry.
    ///
    /// Key scheme membership (empty list, duplicate codes) is checked when
    /// the registry is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.configured_nssai.is_empty() {
            return Err(ConfigError::NoConfiguredSlices);
        }
        if self.gnb_search_list.is_empty() {
            return Err(ConfigError::NoGnbAddresses);
        }
        if self.routing_indicator.is_empty()
            || self.routing_indicator.len() > 4
            || !self.routing_indicator.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(ConfigError::InvalidRoutingIndicator {
                value: self.routing_indicator.clone(),
            });
        }
        Ok(())
    }

    pub fn scheme_codes(&self) -> Vec<super::SchemeCode> {
        self.key_schemes.iter().map(|s| s.code).collect()
    }
}
