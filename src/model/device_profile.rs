use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::{
    CipheringAlgorithms, IntegrityAlgorithms, IntegrityMaxRate, KeyScheme, PlmnId,
    SessionTemplate, Snssai, SubscriberCredentials, Supi, UacAcc, UacAic,
};

/// One synthetic UE: identity, credentials and the network profile it was
/// generated under.
///
/// Everything except `supi` and `credentials` is a verbatim copy of the
/// originating [`NetworkConfig`](super::NetworkConfig).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceProfile {
    pub supi: Supi,
    pub plmn: PlmnId,
    pub routing_indicator: String,
    pub credentials: SubscriberCredentials,
    pub key_scheme: KeyScheme,
    pub configured_nssai: Vec<Snssai>,
    pub default_nssai: Vec<Snssai>,
    pub integrity: IntegrityAlgorithms,
    pub ciphering: CipheringAlgorithms,
    pub uac_aic: UacAic,
    pub uac_acc: UacAcc,
    pub sessions: Vec<SessionTemplate>,
    pub gnb_search_list: Vec<IpAddr>,
    pub integrity_max_rate: IntegrityMaxRate,
}
