//! The per-worker state slab: energy and velocity fields.

use ripple_core::Partition;

/// One worker's slab of the lake surface.
///
/// Two same-shaped `f32` slabs in row-major layout: `energy` is the
/// surface displacement, `velocity` its current rate of change (the
/// second unknown of the first-order form of the wave equation). For a
/// partitioned run the shape includes the halo rows, which are owned
/// by the exchange protocol rather than by this worker.
///
/// The slab is zero-initialized at construction, seeded once by the
/// initializer, and afterwards mutated only by the integrator (whole
/// slab) and the exchanger (halo rows).
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    rows: usize,
    cols: usize,
    energy: Vec<f32>,
    velocity: Vec<f32>,
}

impl Field {
    /// Create a zero-filled field of the given shape.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            energy: vec![0.0; rows * cols],
            velocity: vec![0.0; rows * cols],
        }
    }

    /// Create a zero-filled field shaped for a worker's partition.
    pub fn for_partition(partition: &Partition) -> Self {
        Self::new(partition.rows, partition.cols)
    }

    /// Local row count, halo included.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count of the slab.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// The energy slab, row-major.
    pub fn energy(&self) -> &[f32] {
        &self.energy
    }

    /// The velocity slab, row-major.
    pub fn velocity(&self) -> &[f32] {
        &self.velocity
    }

    /// Energy at `(row, col)`.
    pub fn energy_at(&self, row: usize, col: usize) -> f32 {
        self.energy[row * self.cols + col]
    }

    /// Velocity at `(row, col)`.
    pub fn velocity_at(&self, row: usize, col: usize) -> f32 {
        self.velocity[row * self.cols + col]
    }

    /// Set the energy at `(row, col)`. Used by the pebble initializer.
    pub fn set_energy(&mut self, row: usize, col: usize, value: f32) {
        self.energy[row * self.cols + col] = value;
    }

    /// Set the velocity at `(row, col)`.
    pub fn set_velocity(&mut self, row: usize, col: usize, value: f32) {
        self.velocity[row * self.cols + col] = value;
    }

    /// Simultaneous mutable views of both slabs, for the integrator's
    /// single-snapshot update.
    pub fn split_mut(&mut self) -> (&mut [f32], &mut [f32]) {
        (&mut self.energy, &mut self.velocity)
    }

    /// A contiguous row range of the energy slab.
    pub fn energy_rows(&self, rows: std::ops::Range<usize>) -> &[f32] {
        &self.energy[rows.start * self.cols..rows.end * self.cols]
    }

    /// A contiguous row range of the velocity slab.
    pub fn velocity_rows(&self, rows: std::ops::Range<usize>) -> &[f32] {
        &self.velocity[rows.start * self.cols..rows.end * self.cols]
    }

    /// Copy a row range of both slabs into caller-owned buffers.
    ///
    /// Used by the exchanger to pack this worker's boundary rows. Both
    /// buffers must hold exactly `rows.len() * cols` cells.
    pub fn pack_rows(
        &self,
        rows: std::ops::Range<usize>,
        energy_out: &mut [f32],
        velocity_out: &mut [f32],
    ) {
        let span = rows.start * self.cols..rows.end * self.cols;
        energy_out.copy_from_slice(&self.energy[span.clone()]);
        velocity_out.copy_from_slice(&self.velocity[span]);
    }

    /// Overwrite a row range of both slabs from caller-owned buffers.
    ///
    /// Used by the exchanger to land the peer's boundary rows in the
    /// halo. Both buffers must hold exactly `rows.len() * cols` cells.
    pub fn unpack_rows(
        &mut self,
        rows: std::ops::Range<usize>,
        energy_in: &[f32],
        velocity_in: &[f32],
    ) {
        let span = rows.start * self.cols..rows.end * self.cols;
        self.energy[span.clone()].copy_from_slice(energy_in);
        self.velocity[span].copy_from_slice(velocity_in);
    }
}
