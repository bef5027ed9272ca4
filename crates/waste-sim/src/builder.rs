//! Fluent builder for constructing a [`Sim`].

use tracing::info;
use waste_core::{SimConfig, SimTime};
use waste_fleet::{World, WorldBuilder, distribute_fleet};

use crate::{Event, Sim, SimContext, SimResult};

/// Fluent builder for [`Sim`].
///
/// # Optional inputs
///
/// | Method        | Default                        |
/// |---------------|--------------------------------|
/// | `.world(w)`   | `WorldBuilder::standard()`     |
///
/// # Example
///
/// ```rust
/// use waste_core::SimConfig;
/// use waste_sim::{NoopObserver, SimBuilder};
///
/// let mut sim = SimBuilder::new(SimConfig::default()).build().unwrap();
/// let report = sim.run(&mut NoopObserver).unwrap();
/// assert!(report.events_processed > 0);
/// ```
pub struct SimBuilder {
    config: SimConfig,
    world:  Option<World>,
}

impl SimBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, world: None }
    }

    /// Use a custom world instead of the standard city layout.  The regular
    /// fleet is still distributed over its zones at build time.
    pub fn world(mut self, world: World) -> Self {
        self.world = Some(world);
        self
    }

    /// Validate the configuration and prepare minute 0:
    ///
    /// 1. one empty large truck per station;
    /// 2. the regular fleet, distributed round-robin over zones;
    /// 3. a `GenerateWaste` per zone, then a `Collect` per truck, both at 0;
    /// 4. the first `SupervisorCheck` one interval in.
    pub fn build(self) -> SimResult<Sim> {
        self.config.validate()?;
        let world = match self.world {
            Some(w) => w,
            None => WorldBuilder::standard().build()?,
        };
        let mut ctx = SimContext::new(self.config, world);

        let stations: Vec<_> = ctx.world.station_ids().collect();
        for &station in &stations {
            let large = ctx.new_large_truck()?;
            ctx.world.station_mut(station).install_large(large);
        }

        let trucks = distribute_fleet(&mut ctx.world, &ctx.config.params)?;

        let zones: Vec<_> = ctx.world.zone_ids().collect();
        for &zone in &zones {
            ctx.schedule(SimTime::ZERO, Event::GenerateWaste { zone })?;
        }
        for &truck in &trucks {
            let zone = ctx.world.truck(truck).home_zone;
            ctx.schedule(SimTime::ZERO, Event::Collect { truck, zone })?;
        }
        let interval = ctx.config.timing.supervisor_interval_minutes as u64;
        ctx.schedule(SimTime::ZERO.offset(interval), Event::SupervisorCheck)?;

        info!(
            zones = zones.len(),
            stations = stations.len(),
            trucks = trucks.len(),
            seed = ctx.config.seed,
            "simulation ready"
        );
        Ok(Sim::new(ctx))
    }
}
