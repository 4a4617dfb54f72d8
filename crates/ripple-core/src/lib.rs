//! Core types for the ripple lake-surface wave simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the simulation parameters, the row partition table that maps a
//! worker rank to its slab layout, and the error types shared by the
//! rest of the workspace.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod params;
pub mod partition;

pub use error::{ExchangeError, PartitionError, StepError};
pub use params::SimParams;
pub use partition::{Partition, WorkerRank, HALO_ROWS};
