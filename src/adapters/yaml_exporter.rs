//! UERANSIM UE configuration exporter
//!
//! Writes `ue_profile_<supi>.yaml` files laid out like the simulator's
//! `ue.yaml`, one per device.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::debug;

use crate::error::ExportError;
use crate::model::{DeviceProfile, SessionTemplate, Snssai};
use crate::ports::ProfileExporter;

/// Default output directory used by the CLI
pub const DEFAULT_OUTPUT_DIR: &str = "output";

#[derive(Debug, Clone)]
pub struct YamlExporter {
    output_dir: PathBuf,
}

impl YamlExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn file_name(profile: &DeviceProfile) -> String {
        format!("ue_profile_{}.yaml", profile.supi)
    }

    /// Render a profile in the simulator layout without touching the disk
    pub fn render(profile: &DeviceProfile) -> Result<String, ExportError> {
        serde_yaml::to_string(&UeConfig::from(profile)).map_err(|e| ExportError::Serialize {
            supi: profile.supi.clone(),
            reason: e.to_string(),
        })
    }
}

impl ProfileExporter for YamlExporter {
    fn export_record(&self, profile: &DeviceProfile) -> Result<PathBuf, ExportError> {
        let text = Self::render(profile)?;

        fs::create_dir_all(&self.output_dir).map_err(|e| ExportError::Io {
            path: self.output_dir.clone(),
            reason: e.to_string(),
        })?;

        let path = self.output_dir.join(Self::file_name(profile));
        fs::write(&path, text).map_err(|e| ExportError::Io {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        debug!("Exported UE {} to {}", profile.supi, path.display());
        Ok(path)
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UeConfig<'a> {
    supi: String,
    mcc: &'a str,
    mnc: &'a str,
    protection_scheme: u8,
    home_network_public_key: String,
    home_network_public_key_id: u8,
    routing_indicator: &'a str,
    key: String,
    op: String,
    op_type: &'static str,
    amf: String,
    gnb_search_list: Vec<String>,
    uac_aic: UacAicView,
    uac_acc: UacAccView,
    sessions: Vec<SessionView<'a>>,
    #[serde(rename = "configured-nssai")]
    configured_nssai: Vec<SliceView<'a>>,
    #[serde(rename = "default-nssai")]
    default_nssai: Vec<SliceView<'a>>,
    integrity: IntegrityView,
    ciphering: CipheringView,
    integrity_max_rate: RateView,
}

#[derive(Serialize)]
struct UacAicView {
    mps: bool,
    mcs: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UacAccView {
    normal_class: u8,
    class11: bool,
    class12: bool,
    class13: bool,
    class14: bool,
    class15: bool,
}

#[derive(Serialize)]
struct SliceView<'a> {
    sst: u8,
    sd: &'a str,
}

#[derive(Serialize)]
struct SessionView<'a> {
    #[serde(rename = "type")]
    pdu_type: &'static str,
    apn: &'a str,
    slice: SliceView<'a>,
}

#[derive(Serialize)]
#[serde(rename_all = "UPPERCASE")]
struct IntegrityView {
    ia1: bool,
    ia2: bool,
    ia3: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "UPPERCASE")]
struct CipheringView {
    ea1: bool,
    ea2: bool,
    ea3: bool,
}

#[derive(Serialize)]
struct RateView {
    uplink: &'static str,
    downlink: &'static str,
}

impl<'a> From<&'a Snssai> for SliceView<'a> {
    fn from(slice: &'a Snssai) -> Self {
        Self {
            sst: slice.sst,
            sd: &slice.sd,
        }
    }
}

impl<'a> From<&'a SessionTemplate> for SessionView<'a> {
    fn from(session: &'a SessionTemplate) -> Self {
        Self {
            pdu_type: session.pdu_type.as_str(),
            apn: &session.apn,
            slice: SliceView::from(&session.slice),
        }
    }
}

impl<'a> From<&'a DeviceProfile> for UeConfig<'a> {
    fn from(profile: &'a DeviceProfile) -> Self {
        let scheme = profile.key_scheme.code.get();
        Self {
            supi: profile.supi.to_imsi_uri(),
            mcc: profile.plmn.mcc.as_str(),
            mnc: profile.plmn.mnc.as_str(),
            protection_scheme: scheme,
            home_network_public_key: profile.key_scheme.public_key.to_hex(),
            home_network_public_key_id: scheme,
            routing_indicator: &profile.routing_indicator,
            key: profile.credentials.key.to_hex(),
            op: profile.credentials.opc.to_hex(),
            op_type: profile.credentials.op_type.as_str(),
            amf: profile.credentials.amf.to_hex(),
            gnb_search_list: profile
                .gnb_search_list
                .iter()
                .map(ToString::to_string)
                .collect(),
            uac_aic: UacAicView {
                mps: profile.uac_aic.mps,
                mcs: profile.uac_aic.mcs,
            },
            uac_acc: UacAccView {
                normal_class: profile.uac_acc.normal_class,
                class11: profile.uac_acc.class11,
                class12: profile.uac_acc.class12,
                class13: profile.uac_acc.class13,
                class14: profile.uac_acc.class14,
                class15: profile.uac_acc.class15,
            },
            sessions: profile.sessions.iter().map(SessionView::from).collect(),
            configured_nssai: profile.configured_nssai.iter().map(SliceView::from).collect(),
            default_nssai: profile.default_nssai.iter().map(SliceView::from).collect(),
            integrity: IntegrityView {
                ia1: profile.integrity.ia1,
                ia2: profile.integrity.ia2,
                ia3: profile.integrity.ia3,
            },
            ciphering: CipheringView {
                ea1: profile.ciphering.ea1,
                ea2: profile.ciphering.ea2,
                ea3: profile.ciphering.ea3,
            },
            integrity_max_rate: RateView {
                uplink: profile.integrity_max_rate.uplink.as_str(),
                downlink: profile.integrity_max_rate.downlink.as_str(),
            },
        }
    }
}
