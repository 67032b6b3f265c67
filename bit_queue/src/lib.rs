//! # bit_queue
//!
//! A `no_std` compatible fixed-capacity bit-packed queue.
//!
//! [`BitQueue`] accumulates values of arbitrary bit width into a single
//! unsigned integer register and hands them back from either end: oldest
//! bits first ([`pop_front`](BitQueue::pop_front), FIFO) or newest bits
//! first ([`pop_back`](BitQueue::pop_back), LIFO). [`NibbleQueue`] is the
//! same engine counted in 4-bit units.
//!
//! ```rust
//! use bit_queue::BitQueue;
//!
//! let mut q: BitQueue<u16> = BitQueue::new();
//!
//! // Pack a 3-bit opcode, a 4-bit register id and a 1-bit flag
//! q.push_back(0b101, 3)?;
//! q.push_back(0b1100, 4)?;
//! q.push_back(1, 1)?;
//! assert_eq!(q.len(), 8);
//!
//! // Drain in push order
//! assert_eq!(q.pop_front(3)?, 0b101);
//! assert_eq!(q.pop_front(4)?, 0b1100);
//! assert_eq!(q.pop_front(1)?, 1);
//! assert!(q.is_empty());
//! # Ok::<(), bit_queue::BitQueueError>(())
//! ```
//!
//! Values wider than the requested bit count are truncated to their low
//! bits on push:
//!
//! ```rust
//! use bit_queue::BitQueue;
//!
//! let mut q: BitQueue<u16> = BitQueue::new();
//! q.push_back(37, 4)?; // 37 & 0xF == 5
//! assert_eq!(q.value(), 5);
//! # Ok::<(), bit_queue::BitQueueError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

pub mod error;
pub mod nibble;
pub mod queue;

pub use error::BitQueueError;
pub use nibble::NibbleQueue;
pub use queue::BitQueue;

/// Queue over a 16-bit register, the most common configuration.
pub type BitQueue16 = BitQueue<u16>;

/// Nibble queue over an 8-bit register (two nibbles).
pub type NibbleQueue8 = NibbleQueue<u8>;
