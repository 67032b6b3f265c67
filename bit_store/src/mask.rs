//! Mask and single-bit helpers over any [`BitStore`].

use crate::store::BitStore;

/// Mask with the low `bit_count` bits set.
///
/// Saturates to all-ones when `bit_count >= T::BITS`.
///
/// ```rust
/// use bit_store::mask_lsb;
///
/// assert_eq!(mask_lsb::<u8>(0), 0);
/// assert_eq!(mask_lsb::<u8>(3), 0b0000_0111);
/// assert_eq!(mask_lsb::<u8>(8), 0xFF);
/// ```
#[inline]
pub fn mask_lsb<T: BitStore>(bit_count: usize) -> T {
    if bit_count >= T::BITS {
        T::MAX
    } else {
        !(T::MAX << bit_count)
    }
}

/// Mask with the high `bit_count` bits set.
///
/// Saturates to all-ones when `bit_count >= T::BITS`.
#[inline]
pub fn mask_msb<T: BitStore>(bit_count: usize) -> T {
    if bit_count >= T::BITS {
        T::MAX
    } else {
        !(T::MAX >> bit_count)
    }
}

/// Returns `value` with the bit at `pos` set.
#[inline]
pub fn set_bit<T: BitStore>(value: T, pos: usize) -> T {
    value | (T::ONE << pos)
}

/// Returns `value` with the bit at `pos` cleared.
#[inline]
pub fn unset_bit<T: BitStore>(value: T, pos: usize) -> T {
    value & !(T::ONE << pos)
}

/// Reads the bit at `pos`.
#[inline]
pub fn get_bit<T: BitStore>(value: T, pos: usize) -> bool {
    value & (T::ONE << pos) != T::ZERO
}

/// True when any bit of `mask` is set in `value`.
#[inline]
pub fn are_set<T: BitStore>(value: T, mask: T) -> bool {
    value & mask != T::ZERO
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lsb_masks() {
        assert_eq!(mask_lsb::<u16>(0), 0);
        assert_eq!(mask_lsb::<u16>(1), 1);
        assert_eq!(mask_lsb::<u16>(4), 0xF);
        assert_eq!(mask_lsb::<u16>(16), 0xFFFF);
        assert_eq!(mask_lsb::<u16>(99), 0xFFFF);
    }

    #[test]
    fn msb_masks() {
        assert_eq!(mask_msb::<u8>(0), 0);
        assert_eq!(mask_msb::<u8>(1), 0x80);
        assert_eq!(mask_msb::<u8>(3), 0b1110_0000);
        assert_eq!(mask_msb::<u8>(8), 0xFF);
    }

    #[test]
    fn masks_partition_the_register() {
        for n in 0..=32usize {
            let lo = mask_lsb::<u32>(n);
            let hi = mask_msb::<u32>(32 - n);
            assert_eq!(lo | hi, u32::MAX);
            assert_eq!(lo & hi, 0);
        }
    }

    #[test]
    fn single_bit_ops() {
        let v = set_bit(0u8, 3);
        assert_eq!(v, 0b1000);
        assert!(get_bit(v, 3));
        assert!(!get_bit(v, 2));
        assert_eq!(unset_bit(v, 3), 0);
        assert!(are_set(0b1010u8, 0b0010));
        assert!(!are_set(0b1010u8, 0b0101));
    }
}
