//! Class entries and the built-in sample schedules.
//!
//! Both panels run over fixed in-memory lists. They are rebuilt on every call
//! and nothing written to them survives the process.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::timing::ClassTime;

/// A single class on a schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassEntry {
    /// Unique within the list the entry belongs to.
    pub id: u32,
    pub subject: String,
    pub venue: String,
    /// Only submitted classes carry a date; today's classes are implicitly today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    pub time: ClassTime,
}

impl ClassEntry {
    fn sample(
        id: u32,
        subject: &str,
        venue: &str,
        date: Option<(i32, u32, u32)>,
        time: (u32, u32),
    ) -> Self {
        Self {
            id,
            subject: subject.into(),
            venue: venue.into(),
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            time: ClassTime::new(time.0, time.1).unwrap_or_default(),
        }
    }
}

/// Classes a class representative has already submitted.
pub fn submitted_classes() -> Vec<ClassEntry> {
    vec![
        ClassEntry::sample(1, "Data Structures", "Room 101", Some((2024, 1, 15)), (9, 0)),
        ClassEntry::sample(2, "Algorithms", "Lab 205", Some((2024, 1, 15)), (11, 0)),
        ClassEntry::sample(3, "Database Systems", "Room 302", Some((2024, 1, 16)), (14, 0)),
    ]
}

/// Classes on a student's schedule for today.
pub fn todays_classes() -> Vec<ClassEntry> {
    vec![
        ClassEntry::sample(1, "Data Structures", "Room 101", None, (9, 0)),
        ClassEntry::sample(2, "Algorithms", "Lab 205", None, (11, 0)),
        ClassEntry::sample(3, "Web Development", "Room 203", None, (14, 0)),
        ClassEntry::sample(4, "Machine Learning", "Lab 301", None, (16, 0)),
    ]
}
