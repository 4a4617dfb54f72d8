//! Leapfrog time integration of the damped wave equation.

use crate::field::Field;
use crate::stencil;
use ripple_core::SimParams;

/// Advances a [`Field`] by one time step.
///
/// Implements the explicit first-order form of
/// `∂²u/∂t² = ∇²u − damping·∂u/∂t`:
///
/// ```text
/// energy'   = energy + eps * velocity
/// velocity' = velocity + eps * (laplacian(energy) - damping * velocity)
/// ```
///
/// Both outputs are derived from the pre-step snapshot: the Laplacian
/// is evaluated on the pre-step `energy` before anything is written,
/// and `energy'` uses the pre-step `velocity`, never `velocity'`.
///
/// The Laplacian scratch buffer is allocated once at construction and
/// reused every step. Stability of `eps`/`damping` is the caller's
/// responsibility; divergent output under unstable parameters is
/// silent.
#[derive(Clone, Debug)]
pub struct Integrator {
    params: SimParams,
    laplacian: Vec<f32>,
}

impl Integrator {
    /// Create an integrator for slabs of `cell_count` cells.
    pub fn new(params: SimParams, cell_count: usize) -> Self {
        Self {
            params,
            laplacian: vec![0.0; cell_count],
        }
    }

    /// The parameters this integrator was configured with.
    pub fn params(&self) -> SimParams {
        self.params
    }

    /// Advance `field` by one time step in place.
    pub fn step(&mut self, field: &mut Field) {
        let rows = field.rows();
        let cols = field.cols();
        let eps = self.params.eps;
        let damping = self.params.damping;

        stencil::laplacian(field.energy(), rows, cols, &mut self.laplacian);

        let (energy, velocity) = field.split_mut();
        for i in 0..energy.len() {
            let v = velocity[i];
            energy[i] += eps * v;
            velocity[i] = v + eps * (self.laplacian[i] - damping * v);
        }
    }
}
