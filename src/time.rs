use itertools::Itertools;
use num::{Integer, One};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;

/// Minutes elapsed since midnight.
pub type Minute = u16;

/// Number of minutes in a day, and the exclusive end of the last slot.
pub const MINUTES_PER_DAY: Minute = 24 * 60;

/// First minute of the day.
pub const START_OF_DAY: Minute = 0;

/// Last minute of the day (inclusive).
pub const END_OF_DAY: Minute = MINUTES_PER_DAY - 1;

/// The whole day, `[0, 1440)`.
pub const WHOLE_DAY: TimeRange<Minute> = TimeRange(START_OF_DAY, MINUTES_PER_DAY);

/// Converts an hour and minute of the day into a `Minute`.
///
/// # Examples
/// ```
/// use zeitfenster_libs::time::time_in_minutes;
///
/// assert_eq!(time_in_minutes(8, 30), 510);
/// assert_eq!(time_in_minutes(23, 59), 1439);
/// ```
pub const fn time_in_minutes(hours: Minute, minutes: Minute) -> Minute {
    hours * 60 + minutes
}

/// Half-open [start, end) time range
/// <N>: Any integer type
///
/// Ranges order by start, then by end.
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeRange<N>(N, N)
where
    N: Integer + One + Copy;

impl<N> TimeRange<N>
where
    N: Integer + One + Copy,
{
    /// Construct a new Time Range
    /// Range is half-open on [start, end)
    ///
    /// # Panics
    /// Panics if `start > end`.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::TimeRange;
    ///
    /// let test = TimeRange::new(0, 100);
    ///
    /// assert_eq!(test.start(), 0);
    /// assert_eq!(test.end(), 100);
    /// ```
    pub fn new(start: N, end: N) -> TimeRange<N> {
        assert!(start <= end, "Invalid TimeRange: start must not come after end");
        TimeRange(start, end)
    }

    /// Returns `None` rather than panicking when `start > end`.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::TimeRange;
    ///
    /// assert!(TimeRange::try_new(5, 10).is_some());
    /// assert!(TimeRange::try_new(10, 5).is_none());
    /// ```
    pub fn try_new(start: N, end: N) -> Option<TimeRange<N>> {
        if start <= end {
            Some(TimeRange(start, end))
        } else {
            None
        }
    }

    /// A range of `duration` beginning at `start`.
    pub fn from_start_duration(start: N, duration: N) -> TimeRange<N> {
        TimeRange::new(start, start + duration)
    }

    /// A range between `start` and `end`. With `inclusive`, `end` itself is
    /// part of the range.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::{TimeRange, END_OF_DAY, WHOLE_DAY};
    ///
    /// assert_eq!(TimeRange::from_start_end(0, END_OF_DAY, true), WHOLE_DAY);
    /// assert_eq!(TimeRange::from_start_end(0, 10, false).duration(), 10);
    /// ```
    pub fn from_start_end(start: N, end: N, inclusive: bool) -> TimeRange<N> {
        if inclusive {
            TimeRange::new(start, end + <N>::one())
        } else {
            TimeRange::new(start, end)
        }
    }

    pub fn start(self) -> N {
        self.0
    }

    pub fn end(self) -> N {
        self.1
    }

    pub fn duration(self) -> N {
        self.1 - self.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == self.1
    }

    /// True when `point` falls within [start, end)
    pub fn contains_point(self, point: N) -> bool {
        self.0 <= point && point < self.1
    }

    /// True when `other` lies entirely within this range. An empty range
    /// contains nothing; an empty `other` is treated as a point.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::TimeRange;
    ///
    /// let outer = TimeRange::new(0, 10);
    ///
    /// assert!(outer.contains(TimeRange::new(2, 10)));
    /// assert!(!outer.contains(TimeRange::new(5, 11)));
    /// assert!(!TimeRange::new(3, 3).contains(TimeRange::new(3, 3)));
    /// ```
    pub fn contains(self, other: TimeRange<N>) -> bool {
        if self.is_empty() {
            false
        } else if other.is_empty() {
            self.contains_point(other.0)
        } else {
            self.0 <= other.0 && other.1 <= self.1
        }
    }

    /// True when the ranges share at least one point.
    /// Ranges that only touch at a boundary do not overlap.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::TimeRange;
    ///
    /// let a = TimeRange::new(0, 100);
    ///
    /// assert!(a.overlaps(TimeRange::new(50, 150)));
    /// assert!(!a.overlaps(TimeRange::new(100, 150)));
    /// ```
    pub fn overlaps(self, other: TimeRange<N>) -> bool {
        self.contains_point(other.0) || other.contains_point(self.0)
    }
}

impl TimeRange<Minute> {
    /// Formats the range as times of day.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::{TimeRange, WHOLE_DAY};
    ///
    /// assert_eq!(TimeRange::new(540, 630).clock(), "[09:00, 10:30)");
    /// assert_eq!(WHOLE_DAY.clock(), "[00:00, 24:00)");
    /// ```
    pub fn clock(self) -> String {
        format!("[{}, {})", TimeOfDay(self.0), TimeOfDay(self.1))
    }
}

impl<N> fmt::Display for TimeRange<N>
where
    N: Integer + One + Copy + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.0, self.1)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for TimeRange<Minute> {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let start = u.int_in_range(START_OF_DAY..=MINUTES_PER_DAY)?;
        let end = u.int_in_range(start..=MINUTES_PER_DAY)?;
        Ok(TimeRange(start, end))
    }
}

/// A minute of the day, displayed as `HH:MM`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct TimeOfDay(pub Minute);

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

pub trait TimeMerge<N>
where
    N: Integer + One + Copy,
{
    fn time_merge(self) -> Vec<TimeRange<N>>;
}

impl<'a, T, N> TimeMerge<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Integer + One + Copy,
{
    /// Combines overlapping or touching TimeRanges together.
    /// Input order does not matter; the result is sorted and disjoint.
    ///
    /// # Examples
    /// ```
    /// use zeitfenster_libs::time::{TimeMerge, TimeRange};
    ///
    /// let time_merge = vec![
    ///     TimeRange::new(6, 7),
    ///     TimeRange::new(0, 1),
    ///     TimeRange::new(1, 3),
    ///     TimeRange::new(2, 5),
    ///     TimeRange::new(3, 4),
    /// ];
    ///
    /// assert_eq!(
    ///     time_merge.iter().time_merge(),
    ///     vec![TimeRange::new(0, 5), TimeRange::new(6, 7)]
    /// );
    /// ```
    fn time_merge(self) -> Vec<TimeRange<N>> {
        let size_hint = self.size_hint().1.unwrap_or(0);
        let (last, mut acc): (Option<TimeRange<N>>, Vec<TimeRange<N>>) = self
            .sorted_unstable()
            .fold((None, Vec::with_capacity(size_hint)), |(last, mut acc), &curr| {
                match last {
                    None => (Some(curr), acc),
                    Some(block) if curr.start() <= block.end() => (
                        Some(TimeRange(block.start(), block.end().max(curr.end()))),
                        acc,
                    ),
                    Some(block) => {
                        acc.push(block);
                        (Some(curr), acc)
                    }
                }
            });

        if let Some(block) = last {
            acc.push(block);
        }

        acc
    }
}

pub trait Available<N>
where
    N: Integer + One + Copy,
{
    fn get_availability(self, available_times: &[TimeRange<N>]) -> Vec<TimeRange<N>>;
}

impl<'a, T, N> Available<N> for T
where
    T: Iterator<Item = &'a TimeRange<N>>,
    N: 'a + Integer + One + Copy,
{
    /// Self is blocked times that cannot be scheduled
    /// This performs a type of Set Exclusion of available times
    /// and self. `available_times - self`
    ///
    /// Empty blocked ranges take up no time.
    ///
    /// # Examples
    ///
    /// ```
    /// use zeitfenster_libs::time::{Available, TimeRange};
    ///
    /// let blocked_times = vec![TimeRange::new(1, 2), TimeRange::new(6, 12)];
    /// let available_times = vec![TimeRange::new(0, 4), TimeRange::new(5, 10)];
    ///
    /// assert_eq!(
    ///     blocked_times.iter().get_availability(&available_times),
    ///     vec![TimeRange::new(0, 1), TimeRange::new(2, 4), TimeRange::new(5, 6)]
    /// );
    /// ```
    fn get_availability(self, available_times: &[TimeRange<N>]) -> Vec<TimeRange<N>> {
        let blocked = self.filter(|block| !block.is_empty()).time_merge();
        let mut free = Vec::with_capacity(blocked.len() + 1);
        let mut blocked_iter = blocked.iter().peekable();

        for available in available_times.iter().time_merge() {
            let mut start = available.start();

            while let Some(&&block) = blocked_iter.peek() {
                // Nothing left to block within this range
                if block.start() >= available.end() {
                    break;
                }

                if block.start() > start {
                    free.push(TimeRange(start, block.start()));
                }

                start = start.max(block.end());

                // Block spills into the next available range, keep it around
                if block.end() > available.end() {
                    break;
                }

                blocked_iter.next();
            }

            if start < available.end() {
                free.push(TimeRange(start, available.end()));
            }
        }

        free
    }
}
