use thiserror::Error;

/// Capacity conditions reported by pool operations.
///
/// Both are expected, recoverable outcomes. A pool checks capacity before
/// touching any state, so the failing call leaves slots, indices and the
/// packed buffer exactly as they were; the caller logs and drops the
/// triggering event.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum PoolError {
    /// `spawn` was called with every slot live.
    #[error("star pool is full ({capacity} live)")]
    Full { capacity: usize },

    /// `dequeue` was called with no live stars.
    #[error("star pool is empty")]
    Empty,
}
