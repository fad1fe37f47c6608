use rand::RngCore;

use crate::model::{Amf, OpType, SecretKeyMaterial, SubscriberCredentials};

/// Draw a fresh subscription key K and OPc for one device.
pub fn draw_credentials<R: RngCore>(rng: &mut R, amf: Amf) -> SubscriberCredentials {
    SubscriberCredentials {
        key: draw_key(rng),
        opc: draw_key(rng),
        op_type: OpType::Opc,
        amf,
    }
}

fn draw_key<R: RngCore>(rng: &mut R) -> SecretKeyMaterial {
    let mut bytes = vec![0u8; SubscriberCredentials::KEY_LEN];
    rng.fill_bytes(&mut bytes);
    SecretKeyMaterial::new(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_credentials_shape() {
        let mut rng = StdRng::seed_from_u64(3);
        let credentials = draw_credentials(&mut rng, Amf::default());
        assert_eq!(credentials.key.len(), 16);
        assert_eq!(credentials.opc.len(), 16);
        assert_eq!(credentials.op_type, OpType::Opc);
        assert_eq!(credentials.amf, Amf::default());
        assert_ne!(credentials.key, credentials.opc);
    }

    #[test]
    fn test_successive_draws_differ() {
        let mut rng = StdRng::seed_from_u64(3);
        let first = draw_credentials(&mut rng, Amf::default());
        let second = draw_credentials(&mut rng, Amf::default());
        assert_ne!(first.key, second.key);
    }
}
