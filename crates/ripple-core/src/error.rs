//! Error types for the ripple workspace, organized by subsystem:
//! partition setup, halo exchange, and the simulation loop.

use std::error::Error;
use std::fmt;

/// Errors from building a row partition at setup time.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartitionError {
    /// The grid side length is zero.
    EmptyGrid,
    /// A two-worker slab must contain at least one full boundary block.
    TooNarrow {
        /// The requested side length.
        side: usize,
        /// The minimum side length for a pair partition.
        min: usize,
    },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid side length must be > 0"),
            Self::TooNarrow { side, min } => {
                write!(f, "side length {side} too narrow for a pair partition (min {min})")
            }
        }
    }
}

impl Error for PartitionError {}

/// Errors from the two-party halo exchange.
///
/// All exchange failures are fatal: by the time one is observed, the
/// boundary state on the two sides is already inconsistent, so nothing
/// is retried.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExchangeError {
    /// The peer endpoint hung up (its channel ends were dropped).
    PeerDisconnected,
    /// The received boundary block does not match this worker's shape.
    ShapeMismatch {
        /// Cell count expected per field (halo rows × columns).
        expected: usize,
        /// Cell count actually received.
        got: usize,
    },
    /// The two endpoints were configured for different grids.
    ConfigMismatch {
        /// Description of the disagreement.
        reason: String,
    },
}

impl fmt::Display for ExchangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PeerDisconnected => write!(f, "peer worker disconnected"),
            Self::ShapeMismatch { expected, got } => {
                write!(f, "boundary block shape mismatch: expected {expected} cells, got {got}")
            }
            Self::ConfigMismatch { reason } => write!(f, "exchange config mismatch: {reason}"),
        }
    }
}

impl Error for ExchangeError {}

/// Errors from one iteration of the simulation loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepError {
    /// The halo exchange could not complete; the run aborts.
    ExchangeFailed {
        /// The underlying exchange error.
        reason: ExchangeError,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExchangeFailed { reason } => write!(f, "halo exchange failed: {reason}"),
        }
    }
}

impl Error for StepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::ExchangeFailed { reason } => Some(reason),
        }
    }
}

impl From<ExchangeError> for StepError {
    fn from(reason: ExchangeError) -> Self {
        Self::ExchangeFailed { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_are_stable() {
        assert_eq!(
            PartitionError::EmptyGrid.to_string(),
            "grid side length must be > 0"
        );
        assert_eq!(
            ExchangeError::ShapeMismatch {
                expected: 24,
                got: 12
            }
            .to_string(),
            "boundary block shape mismatch: expected 24 cells, got 12"
        );
    }

    #[test]
    fn step_error_chains_to_exchange_error() {
        let err: StepError = ExchangeError::PeerDisconnected.into();
        let source = err.source().expect("source must be set");
        assert_eq!(source.to_string(), "peer worker disconnected");
    }
}
