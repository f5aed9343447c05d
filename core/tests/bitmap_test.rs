#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rust_da_bn254_core::bitmap::{
        bitmap_to_bytes_array, bitmap_to_quorum_ids, quorum_ids_to_bitmap, MAX_NUM_QUORUMS,
    };

    #[test]
    fn test_bitmap_to_quorum_ids() {
        let mut bitmap = BigUint::default();
        bitmap.set_bit(0, true);
        bitmap.set_bit(5, true);
        bitmap.set_bit(191, true);

        assert_eq!(bitmap_to_quorum_ids(&bitmap), vec![0, 5, 191]);
        assert_eq!(bitmap_to_bytes_array(&bitmap), vec![0u8, 5, 191]);
    }

    #[test]
    fn test_empty_bitmap() {
        assert!(bitmap_to_quorum_ids(&BigUint::default()).is_empty());
    }

    #[test]
    fn test_bits_beyond_192_are_ignored() {
        let mut bitmap = BigUint::default();
        bitmap.set_bit(3, true);
        bitmap.set_bit(MAX_NUM_QUORUMS as u64, true);
        bitmap.set_bit(250, true);

        // No error, and nothing above the quorum range shows up.
        assert_eq!(bitmap_to_quorum_ids(&bitmap), vec![3]);
    }

    #[test]
    fn test_round_trip() {
        let ids: Vec<u8> = vec![1, 2, 63, 64, 100, 190];
        let bitmap = quorum_ids_to_bitmap(&ids);
        assert_eq!(bitmap_to_quorum_ids(&bitmap), ids);
    }
}
