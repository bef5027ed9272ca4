//! Transfer-station state: a FIFO of waiting small trucks and the slot for
//! the large truck currently being loaded.
//!
//! The state machine that moves trucks through a station lives in
//! `waste-sim`, because every transition schedules or cancels events.  This
//! type only guards the data.

use std::collections::VecDeque;

use waste_core::{StationId, TruckId};

use crate::LargeTruck;

#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransferStation {
    pub id:     StationId,
    pub name:   String,
    wait_queue: VecDeque<TruckId>,
    large:      Option<LargeTruck>,
}

impl TransferStation {
    pub fn new(id: StationId, name: impl Into<String>) -> Self {
        Self {
            id,
            name:       name.into(),
            wait_queue: VecDeque::new(),
            large:      None,
        }
    }

    // ── Wait queue ────────────────────────────────────────────────────────

    pub fn enqueue(&mut self, truck: TruckId) {
        self.wait_queue.push_back(truck);
    }

    /// Remove the truck that has waited longest.
    pub fn pop_oldest(&mut self) -> Option<TruckId> {
        self.wait_queue.pop_front()
    }

    pub fn queue_len(&self) -> usize {
        self.wait_queue.len()
    }

    pub fn has_waiting(&self) -> bool {
        !self.wait_queue.is_empty()
    }

    /// Waiting trucks, oldest first.
    pub fn waiting(&self) -> impl Iterator<Item = TruckId> + '_ {
        self.wait_queue.iter().copied()
    }

    // ── Large-truck slot ──────────────────────────────────────────────────

    pub fn large(&self) -> Option<&LargeTruck> {
        self.large.as_ref()
    }

    pub fn large_mut(&mut self) -> Option<&mut LargeTruck> {
        self.large.as_mut()
    }

    /// `true` if a large truck is present and can still take load.
    pub fn accepts_load(&self) -> bool {
        self.large.as_ref().is_some_and(|l| !l.is_full())
    }

    /// Put `truck` in the slot, returning whatever was there.
    pub fn install_large(&mut self, truck: LargeTruck) -> Option<LargeTruck> {
        self.large.replace(truck)
    }

    /// Empty the slot.
    pub fn take_large(&mut self) -> Option<LargeTruck> {
        self.large.take()
    }
}
