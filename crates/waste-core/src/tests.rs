//! Unit tests for waste-core primitives.

#[cfg(test)]
mod ids {
    use crate::{EventId, StationId, TruckId, ZoneId};

    #[test]
    fn index_roundtrip() {
        let id = TruckId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(TruckId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn narrow_ids_reject_overflow() {
        assert!(ZoneId::try_from(70_000usize).is_err());
        assert!(StationId::try_from(3usize).is_ok());
    }

    #[test]
    fn display() {
        assert_eq!(ZoneId(3).to_string(), "zone#3");
        assert_eq!(EventId(17).to_string(), "ev#17");
    }
}

#[cfg(test)]
mod time {
    use crate::{SimTime, format_duration};

    #[test]
    fn arithmetic() {
        let t = SimTime(100);
        assert_eq!(t + 15, SimTime(115));
        assert_eq!(t.offset(5), SimTime(105));
        assert_eq!(SimTime(115) - SimTime(100), 15);
        assert_eq!(SimTime(100).since(SimTime(115)), 0);
    }

    #[test]
    fn negative_is_invalid() {
        assert!(SimTime::ZERO.is_valid());
        assert!(!SimTime(-1).is_valid());
    }

    #[test]
    fn hour_of_day_starts_at_seven() {
        assert_eq!(SimTime(0).hour_of_day(7), 7);
        assert_eq!(SimTime(59).hour_of_day(7), 7);
        assert_eq!(SimTime(60).hour_of_day(7), 8);
        // 17 hours after 07:00 is midnight.
        assert_eq!(SimTime(17 * 60).hour_of_day(7), 0);
    }

    #[test]
    fn clock_formatting() {
        assert_eq!(SimTime(0).clock(7), "07:00");
        assert_eq!(SimTime(125).clock(7), "09:05");
        assert_eq!(SimTime(17 * 60 + 30).clock(7), "00:30 (+1d)");
    }

    #[test]
    fn duration_formatting() {
        assert_eq!(format_duration(45), "45min");
        assert_eq!(format_duration(125), "2h 05min");
        assert_eq!(format_duration(0), "0min");
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(7);
        let xs: Vec<u32> = (0..16).map(|_| a.gen_range(0..1000)).collect();
        let ys: Vec<u32> = (0..16).map(|_| b.gen_range(0..1000)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn seeds_diverge() {
        let mut a = SimRng::new(7);
        let mut b = SimRng::new(8);
        let xs: Vec<u64> = (0..8).map(|_| a.gen_range(0..u64::MAX)).collect();
        let ys: Vec<u64> = (0..8).map(|_| b.gen_range(0..u64::MAX)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn inclusive_range_hits_both_ends() {
        let mut rng = SimRng::new(1);
        let draws: Vec<u32> = (0..500).map(|_| rng.gen_range(1..=3)).collect();
        assert!(draws.iter().all(|d| (1..=3).contains(d)));
        assert!(draws.contains(&1) && draws.contains(&3));
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig, SimTime, TimingConfig, TravelRange};

    #[test]
    fn defaults_are_valid() {
        SimConfig::default().validate().unwrap();
    }

    #[test]
    fn inverted_travel_range_rejected() {
        let mut timing = TimingConfig::default();
        timing.peak.off_peak_travel = TravelRange::new(50, 10);
        assert!(matches!(timing.validate(), Err(CoreError::InvalidRange { .. })));
    }

    #[test]
    fn zero_large_capacity_rejected() {
        let config = SimConfig { large_truck_capacity: 0, ..SimConfig::default() };
        assert!(config.validate().is_err());
    }

    #[test]
    fn regeneration_needs_a_ceiling() {
        let mut config = SimConfig { regeneration_interval_minutes: Some(720), ..SimConfig::default() };
        config.validate().unwrap();
        config.params.hours_to_simulate = 0;
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn time_limit_from_hours() {
        let mut config = SimConfig::default();
        config.params.hours_to_simulate = 8;
        assert_eq!(config.time_limit(), Some(SimTime(480)));
        config.params.hours_to_simulate = 0;
        assert_eq!(config.time_limit(), None);
    }

    #[test]
    fn peak_windows() {
        let peak = TimingConfig::default().peak;
        assert!(peak.is_peak_hour(7));
        assert!(peak.is_peak_hour(8));
        assert!(!peak.is_peak_hour(9));
        assert!(!peak.is_peak_hour(12));
        assert!(peak.is_peak_hour(18));
        assert!(!peak.is_peak_hour(19));
    }
}

#[cfg(test)]
mod duration {
    use crate::{DurationModel, SimRng, SimTime, TimingConfig};

    fn model() -> DurationModel {
        DurationModel::new(&TimingConfig::default())
    }

    #[test]
    fn off_peak_unloaded_total_is_travel() {
        // Minute 180 is 10:00, well inside the off-peak stretch 09:00–17:00.
        let mut rng = SimRng::new(1);
        let d = model().estimate(SimTime(180), 0, false, &mut rng);
        assert_eq!(d.extra_loaded_time, 0);
        assert_eq!(d.collect_time, 0);
        assert_eq!(d.total, d.travel_time);
        assert!((20..=40).contains(&d.travel_time), "got {}", d.travel_time);
    }

    #[test]
    fn peak_minutes_billed_double() {
        // multiplier 1.5 rounds to 2 per minute.
        assert_eq!(model().peak_adjusted(SimTime(0), 30), 60);
    }

    #[test]
    fn trip_straddling_peak_end_is_mixed() {
        // Departs 08:50; ten minutes at peak, twenty after 09:00.
        assert_eq!(model().peak_adjusted(SimTime(110), 30), 10 * 2 + 20);
    }

    #[test]
    fn peak_departure_draws_from_peak_range() {
        let m = model();
        let mut rng = SimRng::new(3);
        for _ in 0..50 {
            let base = m.base_travel(SimTime(10), &mut rng);
            assert!((30..=60).contains(&base));
        }
    }

    #[test]
    fn loaded_penalty_is_half_of_adjusted_travel() {
        let d = model().estimate_with_base(SimTime(180), 4, true, 25);
        assert_eq!(d.collect_time, 40);
        assert_eq!(d.travel_time, 25);
        assert_eq!(d.extra_loaded_time, 12);
        assert_eq!(d.total, 77);
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_config {
    use crate::SimConfig;

    #[test]
    fn partial_json_uses_defaults() {
        let json = r#"{ "seed": 9, "params": { "trucks_8t": { "count": 4, "trips": 2 } } }"#;
        let config: SimConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.seed, 9);
        assert_eq!(config.params.trucks_8t.count, 4);
        assert_eq!(config.params.hours_to_simulate, 24);
        assert_eq!(config.timing.max_wait_minutes, 15);
    }
}
