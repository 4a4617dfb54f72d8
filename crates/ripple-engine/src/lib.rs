//! The simulation loop: exchange, then integrate, `num_iter` times.
//!
//! [`Simulation`] owns one worker's [`Field`], its [`Integrator`], and
//! its halo exchanger. Each worker runs an identical loop; the only
//! cross-worker coordination point is the exchange at the top of every
//! iteration, which is strictly ordered before integration so the
//! stencil never reads a stale halo.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::time::{Duration, Instant};

use ripple_core::{SimParams, StepError};
use ripple_exchange::HaloExchange;
use ripple_field::{Field, Integrator};

/// One worker's view of the running simulation.
///
/// For a single-worker run the exchanger is
/// [`NoExchange`](ripple_exchange::NoExchange) and the loop degenerates
/// to plain integration; the two-worker case plugs in a
/// [`ChannelExchanger`](ripple_exchange::ChannelExchanger) endpoint.
#[derive(Debug)]
pub struct Simulation<E: HaloExchange> {
    field: Field,
    integrator: Integrator,
    exchanger: E,
}

impl<E: HaloExchange> Simulation<E> {
    /// Assemble a simulation from an already-seeded field.
    ///
    /// The integrator's scratch buffer is sized here; no further
    /// allocation happens per iteration.
    pub fn new(field: Field, params: SimParams, exchanger: E) -> Self {
        let integrator = Integrator::new(params, field.cell_count());
        Self {
            field,
            integrator,
            exchanger,
        }
    }

    /// Run one iteration: exchange, then integrate.
    ///
    /// # Errors
    ///
    /// A failed exchange aborts the iteration before any state is
    /// advanced; the error is fatal to the run.
    pub fn step(&mut self) -> Result<(), StepError> {
        self.exchanger.exchange(&mut self.field)?;
        self.integrator.step(&mut self.field);
        Ok(())
    }

    /// Run `num_iter` iterations and return the wall-clock time spent
    /// in the loop itself (setup and rendering excluded).
    ///
    /// # Errors
    ///
    /// Stops at the first failed iteration; whatever output happened
    /// before the fault is all there is.
    pub fn run(&mut self, num_iter: usize) -> Result<Duration, StepError> {
        let start = Instant::now();
        for _ in 0..num_iter {
            self.step()?;
        }
        Ok(start.elapsed())
    }

    /// Read access to the worker's slab.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// Hand the final slab to the renderer.
    pub fn into_field(self) -> Field {
        self.field
    }
}
