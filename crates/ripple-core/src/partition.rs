//! Row-wise partition of the lake between cooperating workers.
//!
//! The stencil reaches three cells along each axis, so a worker that
//! shares a row boundary with a peer carries [`HALO_ROWS`] extra rows
//! holding a copy of the peer's boundary. The asymmetric row ranges of
//! the two ranks (which rows to pack for the peer, which rows the
//! peer's data lands in) are computed once here and looked up
//! everywhere else, instead of being re-derived with rank conditionals
//! at every call site.

use crate::error::PartitionError;
use std::ops::Range;

/// Halo depth in rows, equal to the stencil's axis reach.
pub const HALO_ROWS: usize = 3;

/// Identity of a worker in a two-way row decomposition.
///
/// The lower rank owns the top slab of the global domain, the upper
/// rank the bottom slab.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WorkerRank {
    /// Rank 0: halo rows appended below the physical slab.
    Lower,
    /// Rank 1: halo rows prepended above the physical slab.
    Upper,
}

impl WorkerRank {
    /// Numeric rank, 0 or 1. Embedded in per-worker output file names.
    pub fn index(self) -> usize {
        match self {
            Self::Lower => 0,
            Self::Upper => 1,
        }
    }
}

impl std::fmt::Display for WorkerRank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Layout of one worker's local slab, computed once at setup.
///
/// `physical` is the row range this worker owns authoritatively.
/// `send` and `halo` are `None` for a single-worker run; for a pair
/// they name the rows packed for the peer each iteration and the rows
/// the peer's boundary is written into. Halo rows are write-only
/// targets of the exchange and read-only inputs to the stencil; they
/// are never authoritative state of this worker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    /// Global side length N of the (square) per-worker domain.
    pub side: usize,
    /// Local row count including halo rows.
    pub rows: usize,
    /// Column count (always N).
    pub cols: usize,
    /// Rows this worker owns.
    pub physical: Range<usize>,
    /// Rows packed and sent to the peer each iteration.
    pub send: Option<Range<usize>>,
    /// Rows overwritten with the peer's boundary each iteration.
    pub halo: Option<Range<usize>>,
}

impl Partition {
    /// Layout for a single worker holding the whole lake: an N×N slab
    /// with no halo and no exchange.
    pub fn single(side: usize) -> Result<Self, PartitionError> {
        if side == 0 {
            return Err(PartitionError::EmptyGrid);
        }
        Ok(Self {
            side,
            rows: side,
            cols: side,
            physical: 0..side,
            send: None,
            halo: None,
        })
    }

    /// Layouts for the two-worker decomposition, returned as
    /// `(lower, upper)`.
    ///
    /// Each worker holds N physical rows plus [`HALO_ROWS`] halo rows:
    /// the lower rank appends its halo below the slab and sends its
    /// bottom boundary, the upper rank prepends its halo above the
    /// slab and sends its top boundary (excluding the halo itself).
    pub fn pair(side: usize) -> Result<(Self, Self), PartitionError> {
        if side == 0 {
            return Err(PartitionError::EmptyGrid);
        }
        if side < HALO_ROWS {
            return Err(PartitionError::TooNarrow {
                side,
                min: HALO_ROWS,
            });
        }
        let rows = side + HALO_ROWS;
        let lower = Self {
            side,
            rows,
            cols: side,
            physical: 0..side,
            send: Some(side - HALO_ROWS..side),
            halo: Some(side..rows),
        };
        let upper = Self {
            side,
            rows,
            cols: side,
            physical: HALO_ROWS..rows,
            send: Some(HALO_ROWS..2 * HALO_ROWS),
            halo: Some(0..HALO_ROWS),
        };
        Ok((lower, upper))
    }

    /// Total cell count of the local slab, halo included.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether this worker participates in a halo exchange.
    pub fn is_partitioned(&self) -> bool {
        self.halo.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn single_has_no_halo() {
        let p = Partition::single(10).unwrap();
        assert_eq!(p.rows, 10);
        assert_eq!(p.cols, 10);
        assert_eq!(p.physical, 0..10);
        assert!(p.send.is_none());
        assert!(p.halo.is_none());
        assert!(!p.is_partitioned());
    }

    #[test]
    fn single_rejects_empty_grid() {
        assert_eq!(Partition::single(0), Err(PartitionError::EmptyGrid));
    }

    #[test]
    fn pair_lower_layout() {
        let (lower, _) = Partition::pair(8).unwrap();
        assert_eq!(lower.rows, 11);
        assert_eq!(lower.physical, 0..8);
        assert_eq!(lower.send, Some(5..8));
        assert_eq!(lower.halo, Some(8..11));
    }

    #[test]
    fn pair_upper_layout() {
        let (_, upper) = Partition::pair(8).unwrap();
        assert_eq!(upper.rows, 11);
        assert_eq!(upper.physical, 3..11);
        assert_eq!(upper.send, Some(3..6));
        assert_eq!(upper.halo, Some(0..3));
    }

    #[test]
    fn pair_rejects_narrow_grids() {
        assert_eq!(Partition::pair(0), Err(PartitionError::EmptyGrid));
        assert_eq!(
            Partition::pair(2),
            Err(PartitionError::TooNarrow { side: 2, min: 3 })
        );
        assert!(Partition::pair(3).is_ok());
    }

    proptest! {
        // Structural invariants of the pair layout for any legal side.
        #[test]
        fn pair_ranges_are_consistent(side in 3usize..512) {
            let (lower, upper) = Partition::pair(side).unwrap();
            for p in [&lower, &upper] {
                let send = p.send.clone().unwrap();
                let halo = p.halo.clone().unwrap();
                prop_assert_eq!(p.rows, side + HALO_ROWS);
                prop_assert_eq!(p.physical.len(), side);
                prop_assert_eq!(send.len(), HALO_ROWS);
                prop_assert_eq!(halo.len(), HALO_ROWS);
                // Sent rows are physical; halo rows are not.
                prop_assert!(send.start >= p.physical.start && send.end <= p.physical.end);
                prop_assert!(halo.end <= p.physical.start || halo.start >= p.physical.end);
            }
            // The lower worker's send rows land in the upper worker's
            // halo and vice versa: adjacent global rows line up.
            prop_assert_eq!(lower.send.unwrap().len(), upper.halo.unwrap().len());
        }

        #[test]
        fn worker_rank_roundtrip(upper in proptest::bool::ANY) {
            let rank = if upper { WorkerRank::Upper } else { WorkerRank::Lower };
            prop_assert_eq!(rank.to_string(), rank.index().to_string());
        }
    }
}
