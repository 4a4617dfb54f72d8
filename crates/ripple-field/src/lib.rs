//! Field storage and numerics for the ripple wave simulator.
//!
//! [`Field`] owns the two per-cell state slabs (`energy` and
//! `velocity`), [`stencil::laplacian`] evaluates the 13-point discrete
//! Laplacian, and [`Integrator`] advances the pair by one time step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod field;
pub mod integrator;
pub mod stencil;

pub use field::Field;
pub use integrator::Integrator;
