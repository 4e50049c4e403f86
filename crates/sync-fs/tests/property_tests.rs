use proptest::prelude::*;
use std::fs;
use sync_fs::store;
use tempfile::TempDir;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn identical_iff_bytes_equal(a in proptest::collection::vec(any::<u8>(), 0..256),
                                 b in proptest::collection::vec(any::<u8>(), 0..256)) {
        let temp = TempDir::new().unwrap();
        let left = temp.path().join("left");
        let right = temp.path().join("right");
        fs::write(&left, &a).unwrap();
        fs::write(&right, &b).unwrap();

        prop_assert_eq!(store::identical(&left, &right), a == b);
    }

    #[test]
    fn single_byte_flip_is_detected(content in proptest::collection::vec(any::<u8>(), 1..256),
                                    index in any::<prop::sample::Index>()) {
        let temp = TempDir::new().unwrap();
        let left = temp.path().join("left");
        let right = temp.path().join("right");

        let mut flipped = content.clone();
        let i = index.index(flipped.len());
        flipped[i] ^= 0x01;

        fs::write(&left, &content).unwrap();
        fs::write(&right, &flipped).unwrap();

        prop_assert!(!store::identical(&left, &right));
    }
}
