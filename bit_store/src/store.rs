use core::fmt::Debug;
use core::ops::{BitAnd, BitOr, BitXor, Not, Shl, Shr};

/// An unsigned integer usable as a fixed-width bit register.
///
/// The register is opaque to arithmetic: only shifts, masks, and bitwise
/// combination are available through this trait, which keeps callers from
/// accidentally treating packed bits as a number.
pub trait BitStore:
    Copy
    + Default
    + PartialEq
    + Eq
    + Debug
    + Shl<usize, Output = Self>
    + Shr<usize, Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Not<Output = Self>
{
    /// Width of the register in bits.
    const BITS: usize;
    const ZERO: Self;
    const ONE: Self;
    /// All bits set.
    const MAX: Self;

    /// Left shift that yields zero once `n` reaches the register width,
    /// instead of panicking like the `<<` operator does.
    #[inline]
    fn shl_unbounded(self, n: usize) -> Self {
        if n >= Self::BITS { Self::ZERO } else { self << n }
    }

    /// Right shift that yields zero once `n` reaches the register width.
    #[inline]
    fn shr_unbounded(self, n: usize) -> Self {
        if n >= Self::BITS { Self::ZERO } else { self >> n }
    }
}

macro_rules! impl_bit_store {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl BitStore for $ty {
                const BITS: usize = <$ty>::BITS as usize;
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const MAX: Self = <$ty>::MAX;
            }
        )+
    };
}

impl_bit_store!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod tests {
    use super::*;

    fn shl_all<Q: BitStore>(v: Q) -> Q {
        v.shl_unbounded(Q::BITS)
    }

    #[test]
    fn unbounded_shifts_saturate_to_zero() {
        assert_eq!(shl_all(0xFFu8), 0);
        assert_eq!(0xFFFFu16.shr_unbounded(16), 0);
        assert_eq!(0xFFu8.shl_unbounded(4), 0xF0);
        assert_eq!(0xFFu8.shr_unbounded(4), 0x0F);
    }

    #[test]
    fn consts_match_the_underlying_type() {
        assert_eq!(<u32 as BitStore>::BITS, 32);
        assert_eq!(<u128 as BitStore>::MAX, u128::MAX);
        assert_eq!(<u8 as BitStore>::ONE, 1u8);
    }
}
