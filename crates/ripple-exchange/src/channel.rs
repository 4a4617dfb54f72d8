//! Two-party halo exchange over crossbeam channels.
//!
//! Each worker holds one [`ChannelExchanger`] endpoint. Per iteration
//! the endpoint packs its boundary rows, sends them, and blocks until
//! the peer's block arrives — a barrier-like rendezvous that keeps the
//! two workers in lock-step. The received block is kept as the next
//! iteration's send buffer, so exactly two blocks circulate between
//! the workers and the steady state allocates nothing.
//!
//! This is a direct point-to-point exchange between exactly two named
//! peers; generalizing beyond two workers needs a different
//! decomposition scheme, not a wider version of this one.

use crossbeam_channel::{bounded, Receiver, Sender};
use ripple_core::{ExchangeError, Partition};
use ripple_field::Field;
use std::ops::Range;

use crate::HaloExchange;

/// One worker's boundary rows for both fields, in transit to the peer.
#[derive(Clone, Debug)]
struct BoundaryBlock {
    energy: Vec<f32>,
    velocity: Vec<f32>,
}

impl BoundaryBlock {
    fn zeroed(cells: usize) -> Self {
        Self {
            energy: vec![0.0; cells],
            velocity: vec![0.0; cells],
        }
    }
}

/// One endpoint of a two-worker halo exchange.
///
/// Created in pairs by [`ChannelExchanger::pair`]; each endpoint moves
/// to its worker's thread together with that worker's [`Field`].
#[derive(Debug)]
pub struct ChannelExchanger {
    send_rows: Range<usize>,
    halo_rows: Range<usize>,
    /// Cell count per field of one boundary block (halo rows × cols).
    cells: usize,
    tx: Sender<BoundaryBlock>,
    rx: Receiver<BoundaryBlock>,
    /// Block reused for the next pack; replenished by each receive.
    spare: Option<BoundaryBlock>,
}

impl ChannelExchanger {
    /// Cross-wire two endpoints for the given `(lower, upper)` pair of
    /// partitions, returned in the same order.
    ///
    /// # Errors
    ///
    /// Returns [`ExchangeError::ConfigMismatch`] if either partition
    /// carries no halo (single-worker layout) or the two disagree on
    /// shape.
    pub fn pair(
        lower: &Partition,
        upper: &Partition,
    ) -> Result<(Self, Self), ExchangeError> {
        let (Some(lower_send), Some(lower_halo)) = (lower.send.clone(), lower.halo.clone())
        else {
            return Err(ExchangeError::ConfigMismatch {
                reason: "lower partition has no halo".into(),
            });
        };
        let (Some(upper_send), Some(upper_halo)) = (upper.send.clone(), upper.halo.clone())
        else {
            return Err(ExchangeError::ConfigMismatch {
                reason: "upper partition has no halo".into(),
            });
        };
        if lower.cols != upper.cols || lower.rows != upper.rows {
            return Err(ExchangeError::ConfigMismatch {
                reason: format!(
                    "slab shapes differ: {}x{} vs {}x{}",
                    lower.rows, lower.cols, upper.rows, upper.cols
                ),
            });
        }

        // Capacity 1 lets each side send without waiting, then block
        // on the receive: neither worker can reach integration before
        // both boundaries are in flight.
        let (down_tx, down_rx) = bounded(1);
        let (up_tx, up_rx) = bounded(1);
        let cells = lower_halo.len() * lower.cols;

        let lower_end = Self {
            send_rows: lower_send,
            halo_rows: lower_halo,
            cells,
            tx: down_tx,
            rx: up_rx,
            spare: Some(BoundaryBlock::zeroed(cells)),
        };
        let upper_end = Self {
            send_rows: upper_send,
            halo_rows: upper_halo,
            cells,
            tx: up_tx,
            rx: down_rx,
            spare: Some(BoundaryBlock::zeroed(cells)),
        };
        Ok((lower_end, upper_end))
    }
}

impl HaloExchange for ChannelExchanger {
    fn exchange(&mut self, field: &mut Field) -> Result<(), ExchangeError> {
        let mut block = self
            .spare
            .take()
            .unwrap_or_else(|| BoundaryBlock::zeroed(self.cells));

        field.pack_rows(self.send_rows.clone(), &mut block.energy, &mut block.velocity);
        self.tx
            .send(block)
            .map_err(|_| ExchangeError::PeerDisconnected)?;

        let block = self
            .rx
            .recv()
            .map_err(|_| ExchangeError::PeerDisconnected)?;
        if block.energy.len() != self.cells || block.velocity.len() != self.cells {
            return Err(ExchangeError::ShapeMismatch {
                expected: self.cells,
                got: block.energy.len(),
            });
        }

        field.unpack_rows(self.halo_rows.clone(), &block.energy, &block.velocity);
        self.spare = Some(block);
        Ok(())
    }
}
