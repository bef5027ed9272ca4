//! `Agenda<E>` — time-ordered multiset of pending events with cancellation.
//!
//! # Why a `BTreeMap` keyed by `(time, id)`
//!
//! Events scheduled for the same minute must run in the order they were
//! scheduled.  Every insertion receives the next `EventId` from a monotonic
//! counter, so ordering the map by `(time, id)` yields ascending time with
//! FIFO tie-breaks for free.  The same `EventId` is handed back to the caller
//! as a cancellation handle; a side index `id → time` lets `cancel` locate
//! the entry in O(log n) without scanning.
//!
//! A `BinaryHeap` would need tombstones for cancellation, and a sorted `Vec`
//! would make each insertion O(n).

use std::collections::BTreeMap;

use waste_core::{EventId, SimTime};

use crate::{AgendaError, AgendaResult};

#[cfg(feature = "fx-hash")]
type IdIndex = rustc_hash::FxHashMap<EventId, SimTime>;
#[cfg(not(feature = "fx-hash"))]
type IdIndex = std::collections::HashMap<EventId, SimTime>;

/// An event removed from the agenda, with the handle and time it was
/// scheduled under.
#[derive(Debug, Clone, PartialEq)]
pub struct Scheduled<E> {
    pub id:    EventId,
    pub time:  SimTime,
    pub event: E,
}

/// Borrowed view of the next event, returned by [`Agenda::peek_earliest`].
#[derive(Debug, Clone, Copy)]
pub struct Pending<'a, E> {
    pub id:    EventId,
    pub time:  SimTime,
    pub event: &'a E,
}

/// Pending events, earliest first.
pub struct Agenda<E> {
    queue:   BTreeMap<(SimTime, EventId), E>,
    index:   IdIndex,
    next_id: u64,
}

impl<E> Default for Agenda<E> {
    fn default() -> Self {
        Self {
            queue:   BTreeMap::new(),
            index:   IdIndex::default(),
            next_id: 0,
        }
    }
}

impl<E> Agenda<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `event` to fire at `time` and return its cancellation handle.
    ///
    /// Fails with [`AgendaError::InvalidEvent`] if `time` is negative; the
    /// agenda is left unchanged.
    pub fn schedule(&mut self, time: SimTime, event: E) -> AgendaResult<EventId> {
        if !time.is_valid() {
            return Err(AgendaError::InvalidEvent(time));
        }
        let id = EventId(self.next_id);
        self.next_id += 1;
        self.queue.insert((time, id), event);
        self.index.insert(id, time);
        Ok(id)
    }

    /// Remove the event with handle `id`.
    ///
    /// Returns `false` if it is not pending (already popped, already
    /// cancelled, or never issued by this agenda).
    pub fn cancel(&mut self, id: EventId) -> bool {
        match self.index.remove(&id) {
            Some(time) => self.queue.remove(&(time, id)).is_some(),
            None => false,
        }
    }

    /// Remove and return the earliest pending event.
    pub fn pop_earliest(&mut self) -> Option<Scheduled<E>> {
        let ((time, id), event) = self.queue.pop_first()?;
        self.index.remove(&id);
        Some(Scheduled { id, time, event })
    }

    /// The event [`pop_earliest`](Self::pop_earliest) would return, without
    /// removing it.
    pub fn peek_earliest(&self) -> Option<Pending<'_, E>> {
        self.queue
            .first_key_value()
            .map(|(&(time, id), event)| Pending { id, time, event })
    }

    /// Time of the earliest pending event.
    pub fn next_time(&self) -> Option<SimTime> {
        self.queue.keys().next().map(|&(time, _)| time)
    }

    /// `true` if `id` is still pending.
    pub fn contains(&self, id: EventId) -> bool {
        self.index.contains_key(&id)
    }

    /// Scheduled time of a pending event.
    pub fn time_of(&self, id: EventId) -> Option<SimTime> {
        self.index.get(&id).copied()
    }

    /// All pending events in execution order.
    pub fn iter(&self) -> impl Iterator<Item = Pending<'_, E>> + '_ {
        self.queue
            .iter()
            .map(|(&(time, id), event)| Pending { id, time, event })
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Total number of handles issued so far, including popped and
    /// cancelled events.
    pub fn issued(&self) -> u64 {
        self.next_id
    }
}
