use crate::time::{Minute, TimeRange};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A calendar entry: who is busy, and when.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Event {
    name: String,
    when: TimeRange<Minute>,
    attendees: BTreeSet<String>,
}

impl Event {
    /// Constructs a new Event. Every attendee is considered busy for all of `when`.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::{event::Event, time::TimeRange};
    ///
    /// let standup = Event::new("Standup", TimeRange::new(540, 555), vec!["Ada", "Grace"]);
    ///
    /// assert_eq!(standup.name(), "Standup");
    /// assert_eq!(standup.when().duration(), 15);
    /// assert!(standup.attendees().contains("Grace"));
    /// ```
    pub fn new<I, S>(name: &str, when: TimeRange<Minute>, attendees: I) -> Event
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Event {
            name: name.to_string(),
            when,
            attendees: attendees.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn when(&self) -> TimeRange<Minute> {
        self.when
    }

    pub fn attendees(&self) -> &BTreeSet<String> {
        &self.attendees
    }

    /// True when at least one of `people` attends this event.
    pub fn has_any_attendee(&self, people: &BTreeSet<String>) -> bool {
        !self.attendees.is_disjoint(people)
    }
}
