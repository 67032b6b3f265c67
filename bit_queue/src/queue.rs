use bit_store::{BitStore, mask_lsb};

use crate::error::BitQueueError;

type Result<T> = core::result::Result<T, BitQueueError>;

/// A fixed-capacity bit-packed queue over a single integer register.
///
/// Pushes left-shift the register and OR the new value in at the bottom, so
/// the valid bits always occupy the low [`len`](Self::len) bits, oldest bits
/// highest. Capacity is the register width and never grows; no allocation
/// happens at any point.
///
/// Every bounds-checked operation has an `*_unchecked` twin that skips the
/// check apart from a `debug_assert!`, for callers that have already
/// validated against [`can_pop`](Self::can_pop) or [`capacity`](Self::capacity).
///
/// # Type Parameters
///
/// - `Q`: the backing register, any unsigned integer type implementing
///   [`BitStore`]
///
/// # Examples
///
/// ```
/// use bit_queue::BitQueue;
///
/// let mut q: BitQueue<u8> = BitQueue::new();
/// q.push_back(0b10, 2)?;
/// q.push_back(0b1, 1)?;
///
/// // Register now holds 0b101: oldest bits at the top
/// assert_eq!(q.value(), 0b101);
/// assert_eq!(q.pop_front(2)?, 0b10);
/// assert_eq!(q.pop_back(1)?, 0b1);
/// # Ok::<(), bit_queue::BitQueueError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitQueue<Q: BitStore> {
    bits: Q,
    len: usize,
}

impl<Q: BitStore> BitQueue<Q> {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self {
            bits: Q::ZERO,
            len: 0,
        }
    }

    /// Creates a queue holding the full register `value`, with
    /// `len() == capacity()`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_queue::BitQueue;
    ///
    /// let mut q = BitQueue::from_full(0xA5u8);
    /// assert_eq!(q.len(), 8);
    /// assert_eq!(q.pop_front(4)?, 0xA);
    /// assert_eq!(q.pop_front(4)?, 0x5);
    /// # Ok::<(), bit_queue::BitQueueError>(())
    /// ```
    pub fn from_full(value: Q) -> Self {
        Self {
            bits: value,
            len: Q::BITS,
        }
    }

    /// Number of valid bits currently held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no bits are held.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if the register is fully occupied.
    pub fn is_full(&self) -> bool {
        self.len == Q::BITS
    }

    /// Maximum number of bits the queue can hold: the register width.
    pub fn capacity(&self) -> usize {
        Q::BITS
    }

    /// Returns `true` if at least `bits` bits can be popped.
    pub fn can_pop(&self, bits: usize) -> bool {
        self.len >= bits
    }

    /// Read-only view of the raw register. Bits above `len()` are zero.
    pub fn value(&self) -> Q {
        self.bits
    }

    /// Appends the low `bits` bits of `value`.
    ///
    /// Any higher bits of `value` are discarded; the truncation is part of
    /// the contract, not an error.
    ///
    /// # Errors
    ///
    /// [`BitQueueError::Overflow`] when fewer than `bits` bits of capacity
    /// remain.
    ///
    /// # Examples
    ///
    /// ```
    /// use bit_queue::{BitQueue, BitQueueError};
    ///
    /// let mut q: BitQueue<u8> = BitQueue::new();
    /// q.push_back(0xFF, 8)?;
    /// assert_eq!(
    ///     q.push_back(1, 1),
    ///     Err(BitQueueError::Overflow { requested: 1, available: 0 })
    /// );
    /// # Ok::<(), bit_queue::BitQueueError>(())
    /// ```
    pub fn push_back(&mut self, value: Q, bits: usize) -> Result<()> {
        let available = Q::BITS - self.len;
        if bits > available {
            return Err(BitQueueError::Overflow {
                requested: bits,
                available,
            });
        }
        self.push_raw(value, bits);
        Ok(())
    }

    /// [`push_back`](Self::push_back) without the bounds check.
    ///
    /// The caller must guarantee `capacity() - len() >= bits`; violating that
    /// is a bug, caught by a `debug_assert!` in debug builds and yielding an
    /// unspecified queue state in release builds.
    pub fn push_back_unchecked(&mut self, value: Q, bits: usize) {
        debug_assert!(
            Q::BITS - self.len >= bits,
            "not enough capacity to hold value pushed"
        );
        self.push_raw(value, bits);
    }

    /// Removes and returns the oldest `bits` bits (FIFO order).
    ///
    /// # Errors
    ///
    /// [`BitQueueError::Underflow`] when fewer than `bits` bits are held.
    pub fn pop_front(&mut self, bits: usize) -> Result<Q> {
        if !self.can_pop(bits) {
            return Err(BitQueueError::Underflow {
                requested: bits,
                available: self.len,
            });
        }
        Ok(self.pop_front_raw(bits))
    }

    /// [`pop_front`](Self::pop_front) without the bounds check.
    pub fn pop_front_unchecked(&mut self, bits: usize) -> Q {
        debug_assert!(self.can_pop(bits), "not enough bits to pop");
        self.pop_front_raw(bits)
    }

    /// Removes and returns the newest `bits` bits (LIFO order).
    ///
    /// The remaining bits are shifted down so the valid window stays at the
    /// bottom of the register: after popping the low bit of `0b101`,
    /// [`value`](Self::value) reads `0b10`.
    ///
    /// # Errors
    ///
    /// [`BitQueueError::Underflow`] when fewer than `bits` bits are held.
    pub fn pop_back(&mut self, bits: usize) -> Result<Q> {
        if !self.can_pop(bits) {
            return Err(BitQueueError::Underflow {
                requested: bits,
                available: self.len,
            });
        }
        Ok(self.pop_back_raw(bits))
    }

    /// [`pop_back`](Self::pop_back) without the bounds check.
    pub fn pop_back_unchecked(&mut self, bits: usize) -> Q {
        debug_assert!(self.can_pop(bits), "not enough bits to pop");
        self.pop_back_raw(bits)
    }

    /// Returns the whole register and resets the queue. Never fails.
    pub fn pop_all(&mut self) -> Q {
        let result = self.bits;
        self.clear();
        result
    }

    /// Resets to the empty state. Idempotent.
    pub fn clear(&mut self) {
        self.bits = Q::ZERO;
        self.len = 0;
    }

    fn push_raw(&mut self, value: Q, bits: usize) {
        self.bits = self.bits.shl_unbounded(bits) | (value & mask_lsb(bits));
        self.len += bits;
    }

    fn pop_front_raw(&mut self, bits: usize) -> Q {
        let result = self.bits.shr_unbounded(self.len - bits) & mask_lsb(bits);
        self.bits = self.bits & mask_lsb(self.len - bits);
        self.len -= bits;
        result
    }

    fn pop_back_raw(&mut self, bits: usize) -> Q {
        let result = self.bits & mask_lsb(bits);
        self.bits = self.bits.shr_unbounded(bits);
        self.len -= bits;
        result
    }
}

impl<Q: BitStore> Default for BitQueue<Q> {
    fn default() -> Self {
        Self::new()
    }
}
