//! The two panels the shell can show.
//!
//! Each panel owns its own state and produces a serializable view for the
//! caller to render. Panels never share state with each other.

mod schedule;
mod submission;

pub use schedule::{DaySummary, ScheduleView, ScheduledClass, SchedulePanel};
pub use submission::{SubmissionPanel, SubmissionView, SUBMITTED_NOTICE};
