use crate::event::Event;
use crate::meeting::MeetingRequest;
use crate::query::{MeetingQuery, MeetingSlots};
use crate::time::{Minute, TimeRange, MINUTES_PER_DAY};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ValidationError {
    #[error("Invalid TimeRange found. Start must not come after end\n{location} received [{start}, {end})")]
    InvalidTimeRange {
        location: String,
        start: Minute,
        end: Minute,
    },
    #[error("TimeRange outside of the day. Times must fall within [0, 1440]\n{location} received {value}")]
    OutsideOfDay { location: String, value: Minute },
}

/// A day of events together with the meeting to fit into it.
/// This is the shape callers hand over the wire.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Input {
    #[cfg_attr(feature = "serde", serde(default))]
    pub events: Vec<Event>,
    pub request: MeetingRequest,
}

impl Input {
    pub fn new(events: Vec<Event>, request: MeetingRequest) -> Self {
        Input { events, request }
    }

    /// Checks every event falls within a single day, start before end.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::{
    ///     event::Event,
    ///     input::{Input, ValidationError},
    ///     meeting::MeetingRequest,
    ///     time::TimeRange,
    /// };
    ///
    /// let input = Input::new(
    ///     vec![Event::new("Late show", TimeRange::new(1380, 1500), vec!["A"])],
    ///     MeetingRequest::new(vec!["A"], 30),
    /// );
    ///
    /// assert_eq!(
    ///     input.validate(),
    ///     Err(ValidationError::OutsideOfDay {
    ///         location: "Event (Late show)".to_string(),
    ///         value: 1500
    ///     })
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ValidationError> {
        for event in self.events.iter() {
            // Deserialized ranges skip the constructor's bounds check
            let raw = event.when();
            let when = TimeRange::try_new(raw.start(), raw.end()).ok_or_else(|| {
                ValidationError::InvalidTimeRange {
                    location: format!("Event ({})", event.name()),
                    start: raw.start(),
                    end: raw.end(),
                }
            })?;

            if when.end() > MINUTES_PER_DAY {
                return Err(ValidationError::OutsideOfDay {
                    location: format!("Event ({})", event.name()),
                    value: when.end(),
                });
            }
        }

        Ok(())
    }

    /// Validates, then finds the slots for the request.
    pub fn find_meeting_times(&self) -> Result<MeetingSlots, ValidationError> {
        self.validate()?;

        Ok(MeetingQuery::new().find(&self.events, &self.request))
    }
}
