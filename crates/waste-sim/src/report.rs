//! End-of-run summary.

use std::fmt;

use waste_core::{SimTime, format_duration};

use crate::{EventRecord, SimContext};

/// Why [`Sim::run`](crate::Sim::run) returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    /// The agenda emptied.
    Drained,
    /// The next event lies past the configured ceiling.
    TimeLimit,
    /// A [`StopHandle`](crate::StopHandle) asked the run to end.
    Stopped,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ZoneSummary {
    pub name:      String,
    pub remaining: u32,
    pub generated: u64,
    pub collected: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StationSummary {
    pub name:       String,
    /// Small trucks still queued.
    pub queued:     usize,
    /// Load of the large truck left in the slot, if any.
    pub large_load: Option<u32>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SimReport {
    pub zones:                Vec<ZoneSummary>,
    pub stations:             Vec<StationSummary>,
    pub dispatches:           u64,
    pub landfill_tons:        u64,
    pub overflow_tons:        u64,
    /// Mean station wait, minutes.
    pub average_wait:         f64,
    pub max_wait:             u64,
    pub reinforcements:       u64,
    pub large_trucks_created: u32,
    pub events_processed:     u64,
    pub stop_reason:          StopReason,
    pub final_time:           SimTime,
    /// Time and description of the last executed event.
    pub last_event:           Option<(SimTime, String)>,
    pub day_start_hour:       u32,
}

impl SimReport {
    pub(crate) fn collect(
        ctx:       &SimContext,
        processed: u64,
        reason:    StopReason,
        last:      Option<&EventRecord>,
    ) -> Self {
        let zones = ctx
            .world
            .zones
            .iter()
            .map(|z| ZoneSummary {
                name:      z.name.clone(),
                remaining: z.accumulated(),
                generated: z.total_generated(),
                collected: z.total_collected(),
            })
            .collect();
        let stations = ctx
            .world
            .stations
            .iter()
            .map(|s| StationSummary {
                name:       s.name.clone(),
                queued:     s.queue_len(),
                large_load: s.large().map(|l| l.load()),
            })
            .collect();

        Self {
            zones,
            stations,
            dispatches:           ctx.stats.dispatches,
            landfill_tons:        ctx.stats.landfill_tons,
            overflow_tons:        ctx.stats.overflow_tons,
            average_wait:         ctx.stats.average_wait(),
            max_wait:             ctx.stats.max_wait(),
            reinforcements:       ctx.stats.reinforcements,
            large_trucks_created: ctx.large_trucks_created(),
            events_processed:     processed,
            stop_reason:          reason,
            final_time:           ctx.now,
            last_event:           last.map(|r| (r.time, r.description.clone())),
            day_start_hour:       ctx.day_start(),
        }
    }

    /// Tons still lying in zones.
    pub fn remaining_waste(&self) -> u64 {
        self.zones.iter().map(|z| z.remaining as u64).sum()
    }
}

impl fmt::Display for SimReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "── Simulation report ──")?;
        writeln!(
            f,
            "stopped: {:?} at {} after {} events",
            self.stop_reason,
            self.final_time.clock(self.day_start_hour),
            self.events_processed,
        )?;
        for z in &self.zones {
            writeln!(f, "  {:<8} {:>4}t left  ({}t generated, {}t collected)", z.name, z.remaining, z.generated, z.collected)?;
        }
        for s in &self.stations {
            let large = s.large_load.map_or_else(|| "none".to_owned(), |l| format!("{l}t"));
            writeln!(f, "  {:<10} queue {}  large truck {}", s.name, s.queued, large)?;
        }
        writeln!(f, "large trucks dispatched: {} ({}t to landfill)", self.dispatches, self.landfill_tons)?;
        if self.overflow_tons > 0 {
            writeln!(f, "spilled at stations: {}t", self.overflow_tons)?;
        }
        writeln!(
            f,
            "station wait: avg {:.1}min, max {}",
            self.average_wait,
            format_duration(self.max_wait),
        )?;
        writeln!(f, "reinforcements: {}", self.reinforcements)?;
        if let Some((time, what)) = &self.last_event {
            write!(f, "last event: {} {what}", time.clock(self.day_start_hour))?;
        }
        Ok(())
    }
}
