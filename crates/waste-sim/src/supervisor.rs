//! End-of-shift supervisor.
//!
//! While any regular truck still has trips the supervisor only re-arms.
//! Once the fleet is idle it sends one reinforcement truck per check to the
//! dirtiest zone, and stops re-arming when every zone is clean.

use tracing::{debug, info};
use waste_fleet::TruckClass;

use crate::{Event, SimContext, SimResult};

pub(crate) fn check(ctx: &mut SimContext) -> SimResult<()> {
    let interval = ctx.config.timing.supervisor_interval_minutes as u64;

    if ctx.world.any_truck_active() {
        debug!("supervisor: fleet still working");
        ctx.schedule_in(interval, Event::SupervisorCheck)?;
        return Ok(());
    }

    let Some(zone) = ctx.world.dirtiest_zone() else {
        info!(at = %ctx.now.clock(ctx.day_start()), "supervisor: all zones clean, shift over");
        return Ok(());
    };

    let label = format!("{}-{}", TruckClass::Reinforcement.label_prefix(), ctx.world.reinforcement_count() + 1);
    let capacity = ctx.config.reinforcement_capacity;
    let truck = ctx.world.add_truck(label, TruckClass::Reinforcement, capacity, 1, zone)?;
    ctx.stats.reinforcements += 1;
    info!(
        truck = %ctx.world.truck(truck).label,
        zone = %ctx.world.zone(zone).name,
        waste = ctx.world.zone(zone).accumulated(),
        "supervisor: reinforcement dispatched"
    );

    ctx.schedule_in(0, Event::Collect { truck, zone })?;
    ctx.schedule_in(interval, Event::SupervisorCheck)?;
    Ok(())
}
