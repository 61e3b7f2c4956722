use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::schedule::{todays_classes, ClassEntry};
use crate::timing::{alarm_pending, alarm_time, countdown, is_upcoming, AlarmOffset, Countdown};

/// One of today's classes with its derived countdown and alarm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledClass {
    #[serde(flatten)]
    pub entry: ClassEntry,
    pub countdown: Countdown,
    /// e.g. "1h 0m until class"
    pub countdown_text: String,
    /// Alarm time as `HH:MM`.
    pub alarm_at: String,
    pub alarm_previous_day: bool,
    pub alarm_offset_minutes: u32,
}

/// Aggregate counts for today's classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub total: usize,
    pub upcoming: usize,
    pub alarms_set: usize,
}

/// Snapshot of the schedule panel at a given instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleView {
    /// Current time as `HH:MM`.
    pub current_time: String,
    pub classes: Vec<ScheduledClass>,
    /// Absent when there are no classes today.
    pub summary: Option<DaySummary>,
}

/// Student panel: today's classes with countdowns and alarm times.
#[derive(Debug, Clone)]
pub struct SchedulePanel {
    classes: Vec<ClassEntry>,
    offset: AlarmOffset,
}

impl SchedulePanel {
    pub fn new(offset: AlarmOffset) -> Self {
        Self::with_classes(todays_classes(), offset)
    }

    pub fn with_classes(classes: Vec<ClassEntry>, offset: AlarmOffset) -> Self {
        Self { classes, offset }
    }

    pub fn classes(&self) -> &[ClassEntry] {
        &self.classes
    }

    pub fn offset(&self) -> AlarmOffset {
        self.offset
    }

    pub fn summary(&self, now: NaiveDateTime) -> DaySummary {
        DaySummary {
            total: self.classes.len(),
            upcoming: self
                .classes
                .iter()
                .filter(|c| is_upcoming(c.time, now))
                .count(),
            alarms_set: self
                .classes
                .iter()
                .filter(|c| alarm_pending(c.time, now, self.offset))
                .count(),
        }
    }

    /// Compute every countdown and alarm against `now`.
    ///
    /// Nothing is cached; a view is only as fresh as the `now` it was built with.
    pub fn view(&self, now: NaiveDateTime) -> ScheduleView {
        debug!(classes = self.classes.len(), now = %now, "Rendering schedule panel");
        let classes = self
            .classes
            .iter()
            .map(|entry| {
                let remaining = countdown(entry.time, now);
                let alarm = alarm_time(entry.time, now, self.offset);
                ScheduledClass {
                    entry: entry.clone(),
                    countdown: remaining,
                    countdown_text: remaining.to_string(),
                    alarm_at: alarm.to_string(),
                    alarm_previous_day: alarm.crosses_midnight(),
                    alarm_offset_minutes: self.offset.minutes(),
                }
            })
            .collect::<Vec<_>>();

        ScheduleView {
            current_time: now.format("%H:%M").to_string(),
            summary: (!classes.is_empty()).then(|| self.summary(now)),
            classes,
        }
    }
}

impl Default for SchedulePanel {
    fn default() -> Self {
        Self::new(AlarmOffset::default())
    }
}
