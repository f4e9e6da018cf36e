use crate::time::{Minute, WHOLE_DAY};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The meeting to find room for.
/// Required attendees must be free; optional attendees should be, when possible.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeetingRequest {
    #[cfg_attr(feature = "serde", serde(rename = "requiredAttendees", default))]
    required_attendees: BTreeSet<String>,
    #[cfg_attr(feature = "serde", serde(rename = "optionalAttendees", default))]
    optional_attendees: BTreeSet<String>,
    duration: Minute,
}

impl MeetingRequest {
    /// Constructs a new request with no optional attendees.
    pub fn new<I, S>(required_attendees: I, duration: Minute) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        MeetingRequest {
            required_attendees: required_attendees.into_iter().map(Into::into).collect(),
            optional_attendees: BTreeSet::new(),
            duration,
        }
    }

    /// Adds optional attendees to the request.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::meeting::MeetingRequest;
    ///
    /// let request = MeetingRequest::new(vec!["Ada"], 30).with_optional_attendees(vec!["Grace"]);
    ///
    /// assert!(request.required_attendees().contains("Ada"));
    /// assert!(request.optional_attendees().contains("Grace"));
    /// assert_eq!(request.duration(), 30);
    /// ```
    pub fn with_optional_attendees<I, S>(mut self, optional_attendees: I) -> MeetingRequest
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.optional_attendees
            .extend(optional_attendees.into_iter().map(Into::into));
        self
    }

    pub fn required_attendees(&self) -> &BTreeSet<String> {
        &self.required_attendees
    }

    pub fn optional_attendees(&self) -> &BTreeSet<String> {
        &self.optional_attendees
    }

    pub fn duration(&self) -> Minute {
        self.duration
    }

    /// A meeting longer than a day can never be scheduled.
    pub fn exceeds_day(&self) -> bool {
        self.duration > WHOLE_DAY.duration()
    }
}
