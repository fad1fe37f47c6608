mod credentials;
mod device_profile;
mod key_material;
mod key_scheme;
mod network_config;
mod plmn;
mod policy;
mod session;
mod supi;

pub use credentials::{Amf, OpType, SubscriberCredentials};
pub use device_profile::DeviceProfile;
pub use key_material::{KeyMaterialError, PublicKeyMaterial, SecretKeyMaterial};
pub use key_scheme::{EciesProfile, KeyScheme, KeySchemeError, SchemeCode};
pub use network_config::NetworkConfig;
pub use plmn::{Mcc, Mnc, PlmnError, PlmnId};
pub use policy::{
    CipheringAlgorithms, DataRate, IntegrityAlgorithms, IntegrityMaxRate, UacAcc, UacAic,
};
pub use session::{PduSessionType, SessionTemplate, Snssai};
pub use supi::{Supi, SupiError};
