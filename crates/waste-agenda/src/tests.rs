//! Unit tests for waste-agenda.

use waste_core::{EventId, SimTime};

use crate::{Agenda, AgendaError};

fn drain(agenda: &mut Agenda<&'static str>) -> Vec<(i64, &'static str)> {
    std::iter::from_fn(|| agenda.pop_earliest())
        .map(|s| (s.time.0, s.event))
        .collect()
}

#[cfg(test)]
mod ordering {
    use super::*;

    #[test]
    fn pops_in_time_order() {
        let mut agenda = Agenda::new();
        agenda.schedule(SimTime(10), "b").unwrap();
        agenda.schedule(SimTime(5), "a").unwrap();
        agenda.schedule(SimTime(20), "c").unwrap();
        assert_eq!(drain(&mut agenda), vec![(5, "a"), (10, "b"), (20, "c")]);
        assert!(agenda.is_empty());
    }

    #[test]
    fn equal_times_are_fifo() {
        let mut agenda = Agenda::new();
        agenda.schedule(SimTime(7), "first").unwrap();
        agenda.schedule(SimTime(3), "early").unwrap();
        agenda.schedule(SimTime(7), "second").unwrap();
        agenda.schedule(SimTime(7), "third").unwrap();
        assert_eq!(
            drain(&mut agenda),
            vec![(3, "early"), (7, "first"), (7, "second"), (7, "third")],
        );
    }

    #[test]
    fn popped_timestamps_never_decrease() {
        let mut agenda = Agenda::new();
        for (i, t) in [40, 3, 17, 3, 99, 0, 17, 58, 1].into_iter().enumerate() {
            agenda.schedule(SimTime(t), i).unwrap();
        }
        let times: Vec<SimTime> = std::iter::from_fn(|| agenda.pop_earliest()).map(|s| s.time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(times.len(), 9);
    }

    #[test]
    fn peek_does_not_consume() {
        let mut agenda = Agenda::new();
        let id = agenda.schedule(SimTime(4), "x").unwrap();
        let peeked = agenda.peek_earliest().unwrap();
        assert_eq!((peeked.id, peeked.time, *peeked.event), (id, SimTime(4), "x"));
        assert_eq!(agenda.len(), 1);
        assert_eq!(agenda.next_time(), Some(SimTime(4)));
        assert_eq!(agenda.pop_earliest().unwrap().id, id);
        assert!(agenda.peek_earliest().is_none());
    }
}

#[cfg(test)]
mod cancellation {
    use super::*;

    #[test]
    fn cancelled_event_is_never_popped() {
        let mut agenda = Agenda::new();
        agenda.schedule(SimTime(1), "keep-1").unwrap();
        let doomed = agenda.schedule(SimTime(2), "doomed").unwrap();
        agenda.schedule(SimTime(3), "keep-3").unwrap();

        assert!(agenda.cancel(doomed));
        assert!(!agenda.contains(doomed));
        assert_eq!(drain(&mut agenda), vec![(1, "keep-1"), (3, "keep-3")]);
    }

    #[test]
    fn cancel_is_by_identity_not_value() {
        let mut agenda = Agenda::new();
        let a = agenda.schedule(SimTime(5), "same").unwrap();
        let b = agenda.schedule(SimTime(5), "same").unwrap();
        assert!(agenda.cancel(b));
        let left = agenda.pop_earliest().unwrap();
        assert_eq!(left.id, a);
        assert!(agenda.is_empty());
    }

    #[test]
    fn cancel_preserves_order_of_the_rest() {
        let mut agenda = Agenda::new();
        agenda.schedule(SimTime(5), "a").unwrap();
        let mid = agenda.schedule(SimTime(5), "b").unwrap();
        agenda.schedule(SimTime(5), "c").unwrap();
        agenda.cancel(mid);
        assert_eq!(drain(&mut agenda), vec![(5, "a"), (5, "c")]);
    }

    #[test]
    fn cancelling_fired_or_unknown_event_returns_false() {
        let mut agenda = Agenda::new();
        let id = agenda.schedule(SimTime(0), "x").unwrap();
        agenda.pop_earliest();
        assert!(!agenda.cancel(id));
        assert!(!agenda.cancel(id));
        assert!(!agenda.cancel(EventId(999)));
    }
}

#[cfg(test)]
mod validation {
    use super::*;

    #[test]
    fn negative_timestamp_rejected() {
        let mut agenda: Agenda<&str> = Agenda::new();
        assert_eq!(agenda.schedule(SimTime(-1), "bad"), Err(AgendaError::InvalidEvent(SimTime(-1))));
        assert!(agenda.is_empty());
        assert_eq!(agenda.issued(), 0);
    }

    #[test]
    fn time_zero_accepted() {
        let mut agenda = Agenda::new();
        let id = agenda.schedule(SimTime::ZERO, "start").unwrap();
        assert_eq!(agenda.time_of(id), Some(SimTime::ZERO));
    }

    #[test]
    fn handles_are_unique() {
        let mut agenda = Agenda::new();
        let ids: Vec<EventId> = (0..5).map(|i| agenda.schedule(SimTime(i), i).unwrap()).collect();
        let mut sorted = ids.clone();
        sorted.dedup();
        assert_eq!(sorted.len(), 5);
        assert_eq!(agenda.iter().count(), 5);
    }
}
