//! 4-bit-granularity view over a [`BitQueue`].
//!
//! # Examples
//!
//! ```rust
//! use bit_queue::NibbleQueue;
//!
//! let mut q: NibbleQueue<u16> = NibbleQueue::new();
//! q.push_back(0xAB, 2)?;
//! assert_eq!(q.len(), 2);
//! assert_eq!(q.pop_nibble()?, 0xA);
//! assert_eq!(q.pop_nibble()?, 0xB);
//! # Ok::<(), bit_queue::BitQueueError>(())
//! ```

use bit_store::BitStore;

use crate::error::BitQueueError;
use crate::queue::BitQueue;

const NIBBLE_BITS: usize = 4;

type Result<T> = core::result::Result<T, BitQueueError>;

/// A [`BitQueue`] counted in nibbles (4-bit units).
///
/// Every operation forwards to the underlying bit queue with nibble counts
/// multiplied by 4; lengths and capacities come back divided by 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NibbleQueue<Q: BitStore> {
    queue: BitQueue<Q>,
}

impl<Q: BitStore> NibbleQueue<Q> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            queue: BitQueue::new(),
        }
    }

    /// Creates a queue holding the full register `value`.
    pub fn from_full(value: Q) -> Self {
        Self {
            queue: BitQueue::from_full(value),
        }
    }

    /// Number of nibbles currently held.
    pub fn len(&self) -> usize {
        self.queue.len() / NIBBLE_BITS
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Maximum number of nibbles the register can hold.
    pub fn capacity(&self) -> usize {
        self.queue.capacity() / NIBBLE_BITS
    }

    pub fn can_pop(&self, nibbles: usize) -> bool {
        self.queue.can_pop(nibbles * NIBBLE_BITS)
    }

    /// Read-only view of the raw register.
    pub fn value(&self) -> Q {
        self.queue.value()
    }

    /// Appends the low `nibbles * 4` bits of `value`.
    pub fn push_back(&mut self, value: Q, nibbles: usize) -> Result<()> {
        self.queue.push_back(value, nibbles * NIBBLE_BITS)
    }

    /// Appends a single nibble (the low 4 bits of `value`).
    pub fn push_nibble(&mut self, value: Q) -> Result<()> {
        self.queue.push_back(value, NIBBLE_BITS)
    }

    /// Removes and returns the oldest `nibbles` nibbles (FIFO order).
    pub fn pop_front(&mut self, nibbles: usize) -> Result<Q> {
        self.queue.pop_front(nibbles * NIBBLE_BITS)
    }

    /// Removes and returns the single oldest nibble.
    pub fn pop_nibble(&mut self) -> Result<Q> {
        self.queue.pop_front(NIBBLE_BITS)
    }

    /// Removes and returns the newest `nibbles` nibbles (LIFO order).
    pub fn pop_back(&mut self, nibbles: usize) -> Result<Q> {
        self.queue.pop_back(nibbles * NIBBLE_BITS)
    }

    /// Returns the whole register and resets the queue.
    pub fn pop_all(&mut self) -> Q {
        self.queue.pop_all()
    }

    pub fn clear(&mut self) {
        self.queue.clear()
    }
}

impl<Q: BitStore> Default for NibbleQueue<Q> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nibble_to_hex(n: u32) -> char {
        char::from_digit(n, 16).unwrap()
    }

    #[test]
    fn powers_of_two_print_as_hex() {
        for n in 0..32 {
            let mut q: NibbleQueue<u32> = NibbleQueue::from_full(1u32 << n);
            let mut s = String::new();
            while q.can_pop(1) {
                s.push(nibble_to_hex(q.pop_nibble().unwrap()));
            }
            assert_eq!(s, format!("{:08x}", 1u32 << n));
        }
    }

    #[test]
    fn nibble_counts_track_the_bit_queue() {
        let mut q: NibbleQueue<u16> = NibbleQueue::new();
        assert_eq!(q.capacity(), 4);
        q.push_nibble(0x9).unwrap();
        q.push_back(0x37, 2).unwrap();
        assert_eq!(q.len(), 3);
        assert_eq!(q.value(), 0x937);
        assert!(!q.is_full());
        q.push_nibble(0xF).unwrap();
        assert!(q.is_full());
        assert_eq!(q.pop_front(2).unwrap(), 0x93);
        assert_eq!(q.pop_back(1).unwrap(), 0xF);
        assert_eq!(q.pop_all(), 0x7);
        assert!(q.is_empty());
    }

    #[test]
    fn errors_carry_bit_counts() {
        let mut q: NibbleQueue<u8> = NibbleQueue::new();
        q.push_nibble(0x5).unwrap();
        assert_eq!(
            q.push_back(0, 2),
            Err(BitQueueError::Overflow {
                requested: 8,
                available: 4
            })
        );
        assert_eq!(
            q.pop_front(2),
            Err(BitQueueError::Underflow {
                requested: 8,
                available: 4
            })
        );
    }
}
