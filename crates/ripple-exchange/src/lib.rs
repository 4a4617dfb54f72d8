//! Halo exchange between cooperating workers.
//!
//! Before each integration step, every worker's halo rows must hold
//! the peer's *current* boundary rows for both fields. [`HaloExchange`]
//! is that seam: [`NoExchange`] is the single-worker degenerate case,
//! [`ChannelExchanger`] the two-worker implementation over a pair of
//! bounded channels.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod channel;

pub use channel::ChannelExchanger;

use ripple_core::ExchangeError;
use ripple_field::Field;

/// Per-iteration boundary synchronisation.
///
/// `exchange` must complete before the stencil runs; the simulation
/// loop calls it at the top of every iteration, never skipping one.
/// Failure is fatal to the run — there is no partial-step recovery.
pub trait HaloExchange {
    /// Bring `field`'s halo rows up to date with the peer's boundary.
    fn exchange(&mut self, field: &mut Field) -> Result<(), ExchangeError>;
}

/// Exchange for a single worker holding the whole lake: a no-op,
/// since an unpartitioned slab has no halo rows.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoExchange;

impl HaloExchange for NoExchange {
    fn exchange(&mut self, _field: &mut Field) -> Result<(), ExchangeError> {
        Ok(())
    }
}
