#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use zeitfenster_libs::{Event, MeetingQuery, MeetingRequest, SlotTier, WHOLE_DAY};

fuzz_target!(|data: (Vec<Event>, u16, Vec<u8>)| {
    #[cfg(feature = "log")]
    let _ = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}][{}] {}",
                record.target(),
                record.level(),
                message
            ))
        })
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply();

    let (events, duration, selectors) = data;

    // Pick attendees out of the events so requests actually collide with them
    let people = events
        .iter()
        .flat_map(|event| event.attendees().iter().cloned())
        .unique()
        .collect_vec();
    let required = people
        .iter()
        .zip(selectors.iter())
        .filter(|(_, s)| **s & 1 == 1)
        .map(|(p, _)| p.clone())
        .collect_vec();
    let optional = people
        .iter()
        .zip(selectors.iter())
        .filter(|(_, s)| **s & 2 == 2)
        .map(|(p, _)| p.clone())
        .collect_vec();

    let request = MeetingRequest::new(required, duration).with_optional_attendees(optional);
    let query = MeetingQuery::new();
    let found = query.find(&events, &request);

    if duration > WHOLE_DAY.duration() {
        assert_eq!(found.tier, SlotTier::Impossible);
    }

    assert_eq!(
        found.tier == SlotTier::Impossible,
        found.slots.is_empty(),
        "Only impossible requests may come back empty: {:?}",
        found
    );

    if let Some(t) = found.slots.iter().find(|t| t.duration() < duration) {
        panic!("Returned {} shorter than {}", t, duration);
    }

    if let Some(t) = found.slots.iter().find(|t| !WHOLE_DAY.contains(**t)) {
        panic!("Returned {} outside of the day", t);
    }

    assert!(
        found
            .slots
            .iter()
            .tuple_windows()
            .all(|(l, r)| l.end() < r.start()),
        "Slots should be sorted and separated by busy time: {:?}",
        found.slots
    );

    let reversed = events.iter().rev().collect_vec();
    assert_eq!(
        query.find(reversed, &request),
        found,
        "Order of events changed the result"
    );
});
