use crate::model::{DeviceProfile, KeyScheme, NetworkConfig, SubscriberCredentials, Supi};

/// Assemble one device profile from the network profile and the per-device
/// parts. No randomness and no I/O: every network-wide field is cloned
/// verbatim from `config`.
pub fn compose(
    config: &NetworkConfig,
    supi: Supi,
    key_scheme: &KeyScheme,
    credentials: SubscriberCredentials,
) -> DeviceProfile {
    DeviceProfile {
        supi,
        plmn: config.plmn.clone(),
        routing_indicator: config.routing_indicator.clone(),
        credentials,
        key_scheme: key_scheme.clone(),
        configured_nssai: config.configured_nssai.clone(),
        default_nssai: config.default_nssai.clone(),
        integrity: config.integrity,
        ciphering: config.ciphering,
        uac_aic: config.uac_aic,
        uac_acc: config.uac_acc,
        sessions: config.sessions.clone(),
        gnb_search_list: config.gnb_search_list.clone(),
        integrity_max_rate: config.integrity_max_rate,
    }
}
