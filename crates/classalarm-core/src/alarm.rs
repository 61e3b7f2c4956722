//! Alarm checks over today's classes.
//!
//! A check finds classes whose alarm instant has been reached but which have
//! not started yet, and turns each into a reminder notice. Notices are only
//! returned and logged; nothing is delivered anywhere.
//!
//! The checker remembers which alarms it has already raised, keyed on class
//! id and date, so calling `check` repeatedly (e.g. once a minute) reports
//! each class at most once per day.

use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::schedule::ClassEntry;
use crate::timing::{alarm_time, is_upcoming, AlarmOffset, ClassTime};

/// A reminder for a class whose alarm is due.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlarmNotice {
    pub class_id: u32,
    pub subject: String,
    pub venue: String,
    pub class_time: ClassTime,
    pub offset_minutes: u32,
    pub title: String,
    pub message: String,
    pub raised_at: NaiveDateTime,
}

impl AlarmNotice {
    const TITLE: &'static str = "ClassAlarm - Class Reminder";

    fn new(entry: &ClassEntry, offset: AlarmOffset, now: NaiveDateTime) -> Self {
        let message = format!(
            "Class Reminder! {} starts in {} minutes! @ {} at {}",
            entry.subject,
            offset.minutes(),
            entry.venue,
            entry.time
        );
        Self {
            class_id: entry.id,
            subject: entry.subject.clone(),
            venue: entry.venue.clone(),
            class_time: entry.time,
            offset_minutes: offset.minutes(),
            title: Self::TITLE.to_string(),
            message,
            raised_at: now,
        }
    }
}

/// Raises each class's alarm once per day.
#[derive(Debug, Clone, Default)]
pub struct AlarmChecker {
    offset: AlarmOffset,
    raised: HashSet<(u32, NaiveDate)>,
}

impl AlarmChecker {
    pub fn new(offset: AlarmOffset) -> Self {
        Self {
            offset,
            raised: HashSet::new(),
        }
    }

    pub fn offset(&self) -> AlarmOffset {
        self.offset
    }

    /// Classes whose alarm is due at `now`, ignoring what was already raised.
    pub fn due<'a>(&self, entries: &'a [ClassEntry], now: NaiveDateTime) -> Vec<&'a ClassEntry> {
        entries
            .iter()
            .filter(|e| now >= alarm_time(e.time, now, self.offset).at && is_upcoming(e.time, now))
            .collect()
    }

    /// Raise notices for alarms that are due and not yet raised today.
    pub fn check(&mut self, entries: &[ClassEntry], now: NaiveDateTime) -> Vec<AlarmNotice> {
        let today = now.date();
        let mut notices = Vec::new();
        for entry in self.due(entries, now) {
            if !self.raised.insert((entry.id, today)) {
                debug!(class_id = entry.id, "Alarm already raised today");
                continue;
            }
            let notice = AlarmNotice::new(entry, self.offset, now);
            info!(
                class_id = notice.class_id,
                subject = %notice.subject,
                offset_minutes = notice.offset_minutes,
                "Alarm due"
            );
            notices.push(notice);
        }
        notices
    }

    /// Forget every raised alarm.
    pub fn reset(&mut self) {
        self.raised.clear();
    }
}
