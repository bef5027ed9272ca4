//! Transfer-station state machine.
//!
//! ```text
//! arrival ──► large truck can take load? ──yes──► unload ──► full? ──► dispatch
//!                        │
//!                        no
//!                        ▼
//!             enqueue, arm wait timeout (once per truck)
//!
//! timeout ──► queue empty             → nothing to do
//!             large truck has load    → dispatch
//!             large truck empty       → keep waiting
//!             no large truck          → bring one in, drain the queue
//!
//! dispatch ──► departure event, slot cleared; if trucks wait, a replacement
//!              arrives at once and the queue drains oldest-first, sending
//!              off each replacement that fills.
//! ```
//!
//! A large truck filled by an unload leaves once that unload is over, so its
//! departure is logged at `now + unload time`.  Timeout-forced departures
//! leave at `now`.

use tracing::{debug, info, warn};
use waste_core::{EventId, StationId, TruckId};
use waste_fleet::LargeTruck;

use crate::{Event, SimContext, SimError, SimResult};

/// A small truck reaches `station`.
pub(crate) fn receive(ctx: &mut SimContext, station: StationId, truck: TruckId) -> SimResult<()> {
    if ctx.world.station(station).accepts_load() {
        let unload_time = unload(ctx, station, truck)?;
        if ctx.world.station(station).large().is_some_and(LargeTruck::is_full) {
            dispatch_after(ctx, station, unload_time)?;
        }
        return Ok(());
    }

    let now = ctx.now;
    ctx.world.station_mut(station).enqueue(truck);
    ctx.world.truck_mut(truck).queued_at = Some(now);
    debug!(
        truck = %ctx.world.truck(truck).label,
        station = %ctx.world.station(station).name,
        queue = ctx.world.station(station).queue_len(),
        "no large truck available; queued"
    );

    if ctx.world.truck(truck).pending_timeout.is_none() {
        let max_wait = ctx.config.timing.max_wait_minutes as u64;
        let id = ctx.schedule_in(max_wait, Event::LargeTruckTimeout { station })?;
        ctx.world.truck_mut(truck).pending_timeout = Some(id);
    }
    Ok(())
}

/// A queued truck's wait tolerance ran out.  `fired` is the handle of the
/// timeout being executed.
pub(crate) fn timeout(ctx: &mut SimContext, station: StationId, fired: EventId) -> SimResult<()> {
    let waiting: Vec<TruckId> = ctx.world.station(station).waiting().collect();
    for id in waiting {
        let t = ctx.world.truck_mut(id);
        if t.pending_timeout == Some(fired) {
            t.pending_timeout = None;
        }
    }

    let s = ctx.world.station(station);
    if !s.has_waiting() {
        debug!(station = %s.name, "timeout: queue already empty");
        return Ok(());
    }
    match s.large().map(LargeTruck::load) {
        Some(0) => {
            debug!(station = %s.name, "timeout: large truck empty, still waiting");
            Ok(())
        }
        Some(_) => {
            debug!(station = %s.name, "timeout: sending partial load");
            dispatch(ctx, station).map(|_| ())
        }
        None => replace_and_drain(ctx, station),
    }
}

/// Send the station's large truck to the landfill and, if small trucks are
/// waiting, bring in a replacement and drain the queue into it.
///
/// Returns `false` without side effects when the slot is empty or holds an
/// empty truck.
pub(crate) fn dispatch(ctx: &mut SimContext, station: StationId) -> SimResult<bool> {
    dispatch_after(ctx, station, 0)
}

/// [`dispatch`], with the departure logged `after` minutes from now.
fn dispatch_after(ctx: &mut SimContext, station: StationId, after: u64) -> SimResult<bool> {
    if !depart(ctx, station, after)? {
        return Ok(false);
    }
    if ctx.world.station(station).has_waiting() {
        replace_and_drain(ctx, station)?;
    }
    Ok(true)
}

// ── Internals ─────────────────────────────────────────────────────────────────

/// Move one small truck's load into the large truck and send the small
/// truck back to its zone if it has trips left.  Returns the unload time.
fn unload(ctx: &mut SimContext, station: StationId, truck: TruckId) -> SimResult<u64> {
    let now = ctx.now;
    let t = ctx.world.truck_mut(truck);
    let timeout = t.pending_timeout.take();
    let waited = t.queued_at.take().map_or(0, |at| now.since(at));
    let tons = t.unload();
    t.register_trip();
    let next_zone = t.can_travel().then_some(t.home_zone);

    if let Some(id) = timeout {
        ctx.cancel(id);
    }

    let s = ctx.world.station_mut(station);
    let large = s.large_mut().ok_or(SimError::NoLargeTruck(station))?;
    let accepted = large.take_on(tons);
    let overflow = tons - accepted;
    if overflow > 0 {
        warn!(large = %large.id, overflow, "large truck full; load spilled");
    }
    ctx.stats.unloaded_tons += accepted as u64;
    ctx.stats.overflow_tons += overflow as u64;
    ctx.stats.record_wait(waited);

    let unload_time = ctx.durations.unload_time(tons);
    debug!(
        truck = %ctx.world.truck(truck).label,
        tons,
        waited,
        large = ?ctx.world.station(station).large(),
        "unloaded"
    );

    match next_zone {
        Some(zone) => {
            let back = unload_time + ctx.config.timing.return_travel_minutes as u64;
            ctx.schedule_in(back, Event::Collect { truck, zone })?;
        }
        None => debug!(truck = %ctx.world.truck(truck).label, "trips exhausted"),
    }
    Ok(unload_time)
}

/// Take a loaded large truck out of the slot and log its departure `after`
/// minutes from now.
fn depart(ctx: &mut SimContext, station: StationId, after: u64) -> SimResult<bool> {
    let s = ctx.world.station_mut(station);
    let Some(large) = s.take_large() else {
        return Ok(false);
    };
    if large.is_empty() {
        s.install_large(large);
        return Ok(false);
    }

    let mut large = large;
    let tons = large.discharge();
    ctx.stats.dispatches += 1;
    ctx.stats.landfill_tons += tons as u64;
    info!(
        large = %large.id,
        tons,
        station = %ctx.world.station(station).name,
        at = %ctx.now.offset(after).clock(ctx.day_start()),
        "large truck dispatched"
    );
    ctx.schedule_in(after, Event::LargeTruckDeparture { truck: large.id, tons, station })?;
    Ok(true)
}

/// Unload queued trucks oldest-first, replacing the large truck whenever the
/// slot is empty or full, until nobody waits.
fn replace_and_drain(ctx: &mut SimContext, station: StationId) -> SimResult<()> {
    let mut last_unload = 0;
    while ctx.world.station(station).has_waiting() {
        if !ctx.world.station(station).accepts_load() {
            depart(ctx, station, last_unload)?;
            let large = ctx.new_large_truck()?;
            info!(large = %large.id, station = %ctx.world.station(station).name, "large truck brought in");
            ctx.world.station_mut(station).install_large(large);
        }
        if let Some(truck) = ctx.world.station_mut(station).pop_oldest() {
            last_unload = unload(ctx, station, truck)?;
        }
    }
    if ctx.world.station(station).large().is_some_and(LargeTruck::is_full) {
        depart(ctx, station, last_unload)?;
    }
    Ok(())
}
