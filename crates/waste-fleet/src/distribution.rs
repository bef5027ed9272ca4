//! Round-robin fleet distribution.
//!
//! Trucks are created class by class (2t, 4t, 8t, 10t) and labelled
//! `C<capacity>-<n>`.  Each takes the zone at `index % zone_count`, where
//! `index` counts every truck slot across all classes, including slots of a
//! class that fields nothing because its trip allowance is zero.

use tracing::{debug, warn};
use waste_core::{SimParams, TruckClassConfig, TruckId, ZoneId};

use crate::{FleetResult, TruckClass, World};

/// Create the regular fleet described by `params` and return the new trucks
/// in creation order.  Callers schedule each truck's first collection.
///
/// A truck that cannot be given a zone (the world has none) is skipped with a
/// warning rather than failing the build.
pub fn distribute_fleet(world: &mut World, params: &SimParams) -> FleetResult<Vec<TruckId>> {
    let classes: [(TruckClass, TruckClassConfig); 4] = [
        (TruckClass::TwoTon, params.trucks_2t),
        (TruckClass::FourTon, params.trucks_4t),
        (TruckClass::EightTon, params.trucks_8t),
        (TruckClass::TenTon, params.trucks_10t),
    ];

    let mut created = Vec::new();
    let mut slot = 0usize;
    for (class, fleet) in classes {
        let capacity = class.capacity().unwrap_or_default();
        for n in 1..=fleet.count {
            let index = slot;
            slot += 1;
            if fleet.trips == 0 {
                continue;
            }

            let label = format!("{}-{n}", class.label_prefix());
            let Some(zone) = round_robin_zone(world, index) else {
                warn!(truck = %label, "no zone available for truck; skipping");
                continue;
            };

            let id = world.add_truck(label, class, capacity, fleet.trips, zone)?;
            debug!(
                truck = %world.truck(id).label,
                capacity,
                trips = fleet.trips,
                zone = %world.zone(zone).name,
                "truck assigned"
            );
            created.push(id);
        }
    }
    Ok(created)
}

fn round_robin_zone(world: &World, index: usize) -> Option<ZoneId> {
    match world.zones.len() {
        0 => None,
        n => ZoneId::try_from(index % n).ok(),
    }
}
