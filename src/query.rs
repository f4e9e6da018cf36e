use crate::event::Event;
use crate::meeting::MeetingRequest;
use crate::time::{Available, Minute, TimeRange, WHOLE_DAY};
use itertools::Itertools;
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which attendees the returned slots suit.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SlotTier {
    /// Required and optional attendees are all free.
    Everyone,
    /// Only the required attendees are free.
    RequiredOnly,
    /// Only the optional attendees are free; required attendees have no room.
    OptionalOnly,
    /// No slot exists for anybody.
    Impossible,
}

#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeetingSlots {
    pub tier: SlotTier,
    pub slots: Vec<TimeRange<Minute>>,
}

impl MeetingSlots {
    fn new(tier: SlotTier, slots: Vec<TimeRange<Minute>>) -> MeetingSlots {
        MeetingSlots { tier, slots }
    }

    fn impossible() -> MeetingSlots {
        MeetingSlots::new(SlotTier::Impossible, vec![])
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Busy times of each attendee class.
/// An event attended by both classes shows up in both lists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BusyTimes {
    pub required: Vec<TimeRange<Minute>>,
    pub optional: Vec<TimeRange<Minute>>,
}

impl BusyTimes {
    pub fn collect<'a, I>(events: I, request: &MeetingRequest) -> BusyTimes
    where
        I: IntoIterator<Item = &'a Event>,
    {
        let mut busy = BusyTimes::default();

        for event in events {
            let required = event.has_any_attendee(request.required_attendees());
            let optional = event.has_any_attendee(request.optional_attendees());
            trace!(
                "Event ({}) at {}: required busy = {}, optional busy = {}",
                event.name(),
                event.when(),
                required,
                optional
            );

            if required {
                busy.required.push(event.when());
            }
            if optional {
                busy.optional.push(event.when());
            }
        }

        busy
    }

    pub fn is_empty(&self) -> bool {
        self.required.is_empty() && self.optional.is_empty()
    }
}

/// Every gap in the day around `busy` lasting at least `duration`, in order.
/// Overlapping and touching busy times are merged first, so gaps are never empty.
///
/// # Examples
/// ```
/// use zeitfenster_libs::{query::free_slots, time::{TimeRange, WHOLE_DAY}};
///
/// let busy = vec![TimeRange::new(50, 150), TimeRange::new(0, 100), TimeRange::new(160, 200)];
///
/// assert_eq!(
///     free_slots(&busy, 30),
///     vec![TimeRange::new(200, 1440)]
/// );
///
/// let nobody_busy: Vec<TimeRange<u16>> = vec![];
/// assert_eq!(free_slots(&nobody_busy, 30), vec![WHOLE_DAY]);
/// ```
pub fn free_slots<'a, I>(busy: I, duration: Minute) -> Vec<TimeRange<Minute>>
where
    I: IntoIterator<Item = &'a TimeRange<Minute>>,
{
    busy.into_iter()
        .get_availability(&[WHOLE_DAY])
        .into_iter()
        .filter(|slot| slot.duration() >= duration)
        .collect_vec()
}

/// Finds the times of day a meeting can take place.
///
/// Slots suiting every attendee win. Failing that, slots suiting the required
/// attendees; failing that, slots suiting the optional attendees.
#[derive(Debug, Default, Copy, Clone)]
pub struct MeetingQuery;

impl MeetingQuery {
    pub fn new() -> MeetingQuery {
        MeetingQuery
    }

    /// The free slots for `request`, sorted by start.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::{
    ///     event::Event,
    ///     meeting::MeetingRequest,
    ///     query::MeetingQuery,
    ///     time::TimeRange,
    /// };
    ///
    /// let events = vec![Event::new("Lunch", TimeRange::new(600, 700), vec!["A"])];
    /// let request = MeetingRequest::new(vec!["A"], 30);
    ///
    /// assert_eq!(
    ///     MeetingQuery::new().query(&events, &request),
    ///     vec![TimeRange::new(0, 600), TimeRange::new(700, 1440)]
    /// );
    /// ```
    pub fn query<'a, I>(&self, events: I, request: &MeetingRequest) -> Vec<TimeRange<Minute>>
    where
        I: IntoIterator<Item = &'a Event>,
    {
        self.find(events, request).slots
    }

    /// Like `query`, but also reports which attendees the slots suit.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::{
    ///     event::Event,
    ///     meeting::MeetingRequest,
    ///     query::{MeetingQuery, SlotTier},
    ///     time::{TimeRange, WHOLE_DAY},
    /// };
    ///
    /// let events = vec![Event::new("Offsite", WHOLE_DAY, vec!["A"])];
    /// let request = MeetingRequest::new(vec!["A"], 30).with_optional_attendees(vec!["B"]);
    ///
    /// let found = MeetingQuery::new().find(&events, &request);
    ///
    /// assert_eq!(found.tier, SlotTier::OptionalOnly);
    /// assert_eq!(found.slots, vec![WHOLE_DAY]);
    /// ```
    pub fn find<'a, I>(&self, events: I, request: &MeetingRequest) -> MeetingSlots
    where
        I: IntoIterator<Item = &'a Event>,
    {
        if request.exceeds_day() {
            debug!(
                "Requested duration {} exceeds the day, no slot can fit",
                request.duration()
            );
            return MeetingSlots::impossible();
        }

        let busy = BusyTimes::collect(events, request);
        debug!(
            "Found {} required and {} optional busy times",
            busy.required.len(),
            busy.optional.len()
        );

        if busy.is_empty() {
            return MeetingSlots::new(SlotTier::Everyone, vec![WHOLE_DAY]);
        }

        let found = MeetingQuery::reconcile(&busy, request);
        debug!("Found {} slots for {:?}", found.slots.len(), found.tier);
        found
    }

    /// Picks the slot set with the highest precedence that is not empty:
    /// everyone, then required attendees, then optional attendees.
    ///
    /// An attendee class with nobody in it has no tier of its own.
    fn reconcile(busy: &BusyTimes, request: &MeetingRequest) -> MeetingSlots {
        let duration = request.duration();

        let everyone = free_slots(busy.required.iter().chain(&busy.optional), duration);
        if !everyone.is_empty() {
            return MeetingSlots::new(SlotTier::Everyone, everyone);
        }

        if !request.required_attendees().is_empty() {
            let required = free_slots(&busy.required, duration);
            if !required.is_empty() {
                return MeetingSlots::new(SlotTier::RequiredOnly, required);
            }
        }

        if !request.optional_attendees().is_empty() {
            let optional = free_slots(&busy.optional, duration);
            if !optional.is_empty() {
                return MeetingSlots::new(SlotTier::OptionalOnly, optional);
            }
        }

        MeetingSlots::impossible()
    }
}
