#[cfg(test)]
mod tests {
    use ark_bn254::{G1Affine, G2Affine};
    use ark_ec::AffineRepr;
    use ark_ff::PrimeField;
    use num_bigint::BigUint;
    use rust_da_bn254_core::onchain::{
        encode_registration_signature, g1_point_to_onchain, g2_point_to_onchain,
    };

    #[test]
    fn test_g1_layout() {
        let point = G1Affine::generator();
        let onchain = g1_point_to_onchain(&point);
        assert_eq!(onchain.x, BigUint::from(1u8));
        assert_eq!(onchain.y, BigUint::from(2u8));

        let identity = g1_point_to_onchain(&G1Affine::zero());
        assert_eq!(identity.x, BigUint::default());
        assert_eq!(identity.y, BigUint::default());
    }

    #[test]
    fn test_g2_layout_swaps_extension_components() {
        let point = G2Affine::generator();
        let onchain = g2_point_to_onchain(&point);

        let (x, y) = point.xy().unwrap();
        // The contract layout stores c1 before c0.
        assert_eq!(onchain.x[0], x.c1.into_bigint().into());
        assert_eq!(onchain.x[1], x.c0.into_bigint().into());
        assert_eq!(onchain.y[0], y.c1.into_bigint().into());
        assert_eq!(onchain.y[1], y.c0.into_bigint().into());
        assert_ne!(onchain.x[0], onchain.x[1]);
    }

    #[test]
    fn test_registration_signature_recovery_byte() {
        let mut signature = [0xabu8; 65];
        signature[64] = 1;
        let encoded = encode_registration_signature(signature);
        assert_eq!(encoded[64], 28);
        assert_eq!(&encoded[..64], &signature[..64]);
    }
}
