use thiserror::Error;

/// Error types for `CellRing` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RingError {
    /// The ring is not bound to storage, or the requested geometry is invalid
    #[error("Invalid ring parameter: {reason}")]
    Param {
        /// Description of what is wrong
        reason: &'static str,
    },
    /// A run is longer than the ring can take
    #[error("Ring overflow: requested {requested} cells, but the limit is {limit} cells")]
    Overflow {
        /// Number of cells requested
        requested: usize,
        /// Capacity in `Legacy` mode, free space in `Checked` mode
        limit: usize,
    },
    /// A checked read or watch asks for more cells than were written
    #[error("Ring underflow: requested {requested} cells, but only {available} cells available")]
    Underflow {
        /// Number of cells requested
        requested: usize,
        /// Number of unread cells
        available: usize,
    },
}

pub type Result<T> = core::result::Result<T, RingError>;
