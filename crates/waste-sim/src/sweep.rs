//! Independent runs over a list of configurations.
//!
//! Each run builds its own [`SimContext`](crate::SimContext), so nothing is
//! shared between them.  With the `parallel` feature the runs execute on
//! Rayon's thread pool; results keep the input order either way.

use crate::{NoopObserver, SimBuilder, SimReport, SimResult};
use waste_core::SimConfig;

pub fn run_sweep(configs: &[SimConfig]) -> Vec<SimResult<SimReport>> {
    #[cfg(not(feature = "parallel"))]
    {
        configs.iter().map(run_one).collect()
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;

        configs.par_iter().map(run_one).collect()
    }
}

fn run_one(config: &SimConfig) -> SimResult<SimReport> {
    SimBuilder::new(config.clone()).build()?.run(&mut NoopObserver)
}
