use serde::{Deserialize, Serialize};
use std::fmt;

/// Single network slice selection assistance information.
///
/// The slice differentiator is kept as the text the operator configured.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snssai {
    pub sst: u8,
    pub sd: String,
}

impl Snssai {
    pub fn new(sst: u8, sd: impl Into<String>) -> Self {
        Self { sst, sd: sd.into() }
    }
}

impl fmt::Display for Snssai {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.sst, self.sd)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PduSessionType {
    #[default]
    #[serde(rename = "IPv4")]
    Ipv4,
    #[serde(rename = "IPv6")]
    Ipv6,
    #[serde(rename = "IPv4v6")]
    Ipv4v6,
}

impl PduSessionType {
    pub fn as_str(self) -> &'static str {
        match self {
            PduSessionType::Ipv4 => "IPv4",
            PduSessionType::Ipv6 => "IPv6",
            PduSessionType::Ipv4v6 => "IPv4v6",
        }
    }
}

/// PDU session the UE establishes after registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionTemplate {
    #[serde(rename = "type")]
    pub pdu_type: PduSessionType,
    pub apn: String,
    pub slice: Snssai,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_type_field_name() {
        let session = SessionTemplate {
            pdu_type: PduSessionType::Ipv4,
            apn: "internet".to_string(),
            slice: Snssai::new(1, "0x010203"),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains(r#""type":"IPv4""#));
    }

    #[test]
    fn test_snssai_display() {
        assert_eq!(Snssai::new(1, "010203").to_string(), "1:010203");
    }
}
