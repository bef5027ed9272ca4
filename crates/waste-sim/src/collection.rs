//! Zone-side handlers: waste generation, collection and the drive to the
//! station.

use tracing::{debug, trace};
use waste_core::{TruckId, ZoneId};

use crate::{Event, SimContext, SimResult};

/// Add a random day's worth of waste to `zone`, and re-arm if periodic
/// regeneration is configured.
pub(crate) fn generate_waste(ctx: &mut SimContext, zone: ZoneId) -> SimResult<()> {
    let tons = ctx.world.zone_mut(zone).generate(&mut ctx.rng);
    ctx.stats.generated_tons += tons as u64;
    debug!(zone = %ctx.world.zone(zone).name, tons, total = ctx.world.zone(zone).accumulated(), "waste generated");

    if let Some(interval) = ctx.config.regeneration_interval_minutes {
        ctx.schedule_in(interval as u64, Event::GenerateWaste { zone })?;
    }
    Ok(())
}

/// Load as much of `zone`'s waste as `truck` can take.
///
/// An empty zone costs the truck a trip: it retries later if it has trips
/// left and otherwise heads for its station.  After loading, the truck keeps
/// collecting only while it has room, the zone still has waste and trips
/// remain; in every other case it leaves for the station once the work is
/// done.
pub(crate) fn collect(ctx: &mut SimContext, truck: TruckId, zone: ZoneId) -> SimResult<()> {
    if ctx.world.zone(zone).is_clean() {
        let t = ctx.world.truck_mut(truck);
        t.register_trip();
        debug!(truck = %t.label, trips = t.trips_remaining(), "zone already clean");
        if t.can_travel() {
            let home = t.home_zone;
            let retry = ctx.config.timing.retry_delay_minutes as u64;
            ctx.schedule_in(retry, Event::Collect { truck, zone: home })?;
        } else {
            ctx.schedule_in(0, Event::DepartForStation { truck, zone })?;
        }
        return Ok(());
    }

    let mut collected = 0;
    if ctx.world.truck(truck).can_travel() {
        let room = ctx.world.truck(truck).free_capacity();
        let taken = ctx.world.zone_mut(zone).collect(room);
        collected = ctx.world.truck_mut(truck).take_on(taken);
        ctx.stats.collected_tons += collected as u64;
    }

    let duration = ctx.durations.estimate(ctx.now, collected, false, &mut ctx.rng);
    let t = ctx.world.truck(truck);
    let z = ctx.world.zone(zone);
    debug!(
        truck = %t,
        zone = %z.name,
        collected,
        left = z.accumulated(),
        minutes = duration.total,
        "collected"
    );

    let keep_going = !t.is_full() && !z.is_clean() && t.can_travel();
    let next = if keep_going {
        Event::Collect { truck, zone }
    } else {
        Event::DepartForStation { truck, zone }
    };
    ctx.schedule_in(duration.total, next)?;
    Ok(())
}

/// Drive loaded to the station serving `zone`.  The trip is billed in full:
/// handling time for the cargo, travel, and the loaded penalty.
pub(crate) fn depart_for_station(ctx: &mut SimContext, truck: TruckId, zone: ZoneId) -> SimResult<()> {
    let station = ctx.world.station_for_zone(zone)?;
    let load = ctx.world.truck(truck).load();
    let duration = ctx.durations.estimate(ctx.now, load, true, &mut ctx.rng);
    trace!(
        handling = duration.collect_time,
        travel = duration.travel_time,
        extra = duration.extra_loaded_time,
        "trip to station"
    );
    debug!(
        truck = %ctx.world.truck(truck),
        station = %ctx.world.station(station).name,
        minutes = duration.total,
        "heading to station"
    );
    ctx.schedule_in(duration.total, Event::ArriveAtStation { station, truck })?;
    Ok(())
}
