pub mod event;
pub mod input;
pub mod meeting;
pub mod query;
pub mod time;
#[cfg(feature = "wasm")]
pub mod wasm;

pub use event::Event;
pub use input::{Input, ValidationError};
pub use meeting::MeetingRequest;
pub use query::{MeetingQuery, MeetingSlots, SlotTier};
pub use time::{Minute, TimeRange, WHOLE_DAY};
