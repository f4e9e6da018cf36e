#![no_main]
use itertools::Itertools;
use libfuzzer_sys::fuzz_target;
use zeitfenster_libs::time::{Available, TimeMerge, TimeRange};

fn within(outer: TimeRange<u16>, inner: TimeRange<u16>) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fuzz_target!(|data: (Vec<TimeRange<u16>>, Vec<TimeRange<u16>>)| {
    let (available, blocked) = data;

    let merged = blocked.iter().time_merge();

    assert!(
        merged
            .iter()
            .tuple_windows()
            .all(|(l, r)| l.end() < r.start()),
        "Merged times should be sorted, disjoint and not touching: {:?}",
        merged
    );

    if let Some(t) = blocked
        .iter()
        .find(|t| !merged.iter().any(|block| within(*block, **t)))
    {
        panic!("{} was lost while merging into {:?}", t, merged);
    }

    let availability = blocked.iter().get_availability(&available);
    let available = available.iter().time_merge();

    assert!(
        availability.iter().all(|t| !t.is_empty()),
        "No empty free time should be returned: {:?}",
        availability
    );

    assert!(
        availability
            .iter()
            .tuple_windows()
            .all(|(l, r)| l.end() <= r.start()),
        "Free times should be sorted and disjoint: {:?}",
        availability
    );

    if let Some(t) = availability
        .iter()
        .find(|t| !available.iter().any(|a| within(*a, **t)))
    {
        panic!("Returned {} outside of available {:?}", t, available);
    }

    if let Some(t) = availability
        .iter()
        .find(|t| {
            blocked
                .iter()
                .any(|block| !block.is_empty() && block.overlaps(**t))
        })
    {
        panic!("Returned {} overlapping blocked times {:?}", t, blocked);
    }
});
