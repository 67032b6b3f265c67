// tests/prop_masks.rs

use bit_store::{mask_lsb, mask_msb};
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_lsb_mask_popcount(n in 0usize..64) {
        let expected = n.min(32) as u32;
        prop_assert_eq!(mask_lsb::<u32>(n).count_ones(), expected);
    }
}

proptest! {
    #[test]
    fn prop_msb_mask_popcount(n in 0usize..64) {
        let expected = n.min(32) as u32;
        prop_assert_eq!(mask_msb::<u32>(n).count_ones(), expected);
    }
}

proptest! {
    #[test]
    fn prop_lsb_mask_is_contiguous_from_bit_zero(n in 1usize..=32) {
        let m = mask_lsb::<u32>(n);
        // A contiguous run from bit 0 means m + 1 is a power of two (or wraps to 0).
        prop_assert_eq!(m.wrapping_add(1).count_ones() <= 1, true);
        prop_assert_eq!(m & 1, 1);
    }
}

proptest! {
    #[test]
    fn prop_complementary_masks(n in 0usize..=16) {
        let lo = mask_lsb::<u16>(n);
        let hi = mask_msb::<u16>(16 - n);
        prop_assert_eq!(lo | hi, u16::MAX);
        prop_assert_eq!(lo & hi, 0);
    }
}
