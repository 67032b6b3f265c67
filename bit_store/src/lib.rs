//! # bit_store
//!
//! Fixed-width bit-register primitives: a [`BitStore`] trait abstracting over
//! the unsigned integer types, plus mask and single-bit helpers used by the
//! `bit_queue` crate.
//!
//! ```rust
//! use bit_store::{mask_lsb, mask_msb};
//!
//! assert_eq!(mask_lsb::<u16>(3), 0b111);
//! assert_eq!(mask_msb::<u8>(2), 0b1100_0000);
//! ```

#![no_std]

pub mod mask;
pub mod store;

pub use mask::{are_set, get_bit, mask_lsb, mask_msb, set_bit, unset_bit};
pub use store::BitStore;
