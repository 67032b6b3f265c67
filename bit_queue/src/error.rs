#[cfg(feature = "std")]
use thiserror::Error;

/// Errors for the checked queue operations.
///
/// Both variants are bounds failures: the unchecked twins of the same
/// operations treat them as caller bugs and only `debug_assert!`.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitQueueError {
    #[cfg_attr(
        feature = "std",
        error("cannot push {requested} bits, only {available} free")
    )]
    Overflow { requested: usize, available: usize },

    #[cfg_attr(
        feature = "std",
        error("cannot pop {requested} bits, only {available} held")
    )]
    Underflow { requested: usize, available: usize },
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for BitQueueError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            BitQueueError::Overflow {
                requested,
                available,
            } => {
                write!(f, "cannot push {} bits, only {} free", requested, available)
            }
            BitQueueError::Underflow {
                requested,
                available,
            } => {
                write!(f, "cannot pop {} bits, only {} held", requested, available)
            }
        }
    }
}
