//! `SimContext` — everything one run owns.
//!
//! The agenda, the world arena, the RNG and the large-truck serial counter
//! live together here and are passed explicitly to every handler, so two
//! runs never share state and can execute on different threads.

use tracing::debug;
use waste_agenda::Agenda;
use waste_core::{DurationModel, EventId, LargeTruckId, SimConfig, SimRng, SimTime};
use waste_fleet::{LargeTruck, World};

use crate::{Event, SimError, SimResult, SimStats};

pub struct SimContext {
    /// Time of the event being executed (or last executed).
    pub now:       SimTime,
    pub agenda:    Agenda<Event>,
    pub world:     World,
    pub stats:     SimStats,
    pub config:    SimConfig,
    pub durations: DurationModel,
    pub rng:       SimRng,
    next_large_id: u32,
}

impl SimContext {
    /// A context at minute 0 with an empty agenda.  Nothing is scheduled and
    /// no large trucks are installed; [`SimBuilder`](crate::SimBuilder) does
    /// both.
    pub fn new(config: SimConfig, world: World) -> Self {
        Self {
            now:           SimTime::ZERO,
            agenda:        Agenda::new(),
            world,
            stats:         SimStats::default(),
            durations:     DurationModel::new(&config.timing),
            rng:           SimRng::new(config.seed),
            config,
            next_large_id: 1,
        }
    }

    // ── Scheduling ────────────────────────────────────────────────────────

    /// Put `event` on the agenda at `time`.
    ///
    /// Fails without touching the agenda if the event names an entity that
    /// does not exist, if `time` is negative, or if `time` is earlier than
    /// the current clock.
    pub fn schedule(&mut self, time: SimTime, event: Event) -> SimResult<EventId> {
        event.validate(&self.world)?;
        if time.is_valid() && time < self.now {
            return Err(SimError::PastEvent { time, now: self.now });
        }
        let id = self.agenda.schedule(time, event)?;
        debug!(%id, kind = %event.kind(), at = %time.clock(self.day_start()), "scheduled");
        Ok(id)
    }

    /// Schedule `event` `delay` minutes from now.
    pub fn schedule_in(&mut self, delay: u64, event: Event) -> SimResult<EventId> {
        self.schedule(self.now.offset(delay), event)
    }

    /// Retract a pending event.  `false` if it already fired or was
    /// cancelled.
    pub fn cancel(&mut self, id: EventId) -> bool {
        let found = self.agenda.cancel(id);
        debug!(%id, found, "cancelled");
        found
    }

    // ── Allocation ────────────────────────────────────────────────────────

    /// A fresh, empty large truck with the next serial number.
    pub fn new_large_truck(&mut self) -> SimResult<LargeTruck> {
        let id = LargeTruckId(self.next_large_id);
        self.next_large_id += 1;
        Ok(LargeTruck::new(id, self.config.large_truck_capacity)?)
    }

    /// Number of large trucks created so far.
    pub fn large_trucks_created(&self) -> u32 {
        self.next_large_id - 1
    }

    #[inline]
    pub fn day_start(&self) -> u32 {
        self.config.timing.day_start_hour
    }
}
