//! Controlled-input state for the class submission form.
//!
//! The form holds raw text for four required fields. `submit` checks that all
//! are filled, parses the date and time in the formats a date/time picker
//! produces, logs the submission and clears the form. A submission is never
//! stored anywhere.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::ValidationError;
use crate::timing::ClassTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Subject,
    Venue,
    Date,
    Time,
}

impl FormField {
    /// Fields in display order.
    pub const ALL: [FormField; 4] = [
        FormField::Subject,
        FormField::Venue,
        FormField::Date,
        FormField::Time,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Subject => "subject",
            FormField::Venue => "venue",
            FormField::Date => "date",
            FormField::Time => "time",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Subject => "Subject",
            FormField::Venue => "Venue",
            FormField::Date => "Date",
            FormField::Time => "Time",
        }
    }
}

impl FromStr for FormField {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormField::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ValidationError::UnknownField(s.to_string()))
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Current text of each form field. Empty means unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormState {
    pub subject: String,
    pub venue: String,
    pub date: String,
    pub time: String,
}

/// A validated class submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub subject: String,
    pub venue: String,
    pub date: NaiveDate,
    pub time: ClassTime,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Subject => &self.subject,
            FormField::Venue => &self.venue,
            FormField::Date => &self.date,
            FormField::Time => &self.time,
        }
    }

    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let slot = match field {
            FormField::Subject => &mut self.subject,
            FormField::Venue => &mut self.venue,
            FormField::Date => &mut self.date,
            FormField::Time => &mut self.time,
        };
        *slot = value.into();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        FormField::ALL.iter().all(|f| self.get(*f).is_empty())
    }

    /// Validate the form without touching it.
    pub fn validate(&self) -> Result<Submission, ValidationError> {
        if let Some(missing) = FormField::ALL
            .into_iter()
            .find(|f| self.get(*f).trim().is_empty())
        {
            return Err(ValidationError::MissingField {
                field: missing.name().to_string(),
            });
        }

        let date = parse_date(self.date.trim()).ok_or_else(|| ValidationError::InvalidDate {
            value: self.date.clone(),
        })?;
        let time = self.time.parse::<ClassTime>()?;

        Ok(Submission {
            subject: self.subject.trim().to_string(),
            venue: self.venue.trim().to_string(),
            date,
            time,
        })
    }

    /// Submit the form.
    ///
    /// On success the submission is logged and the form is reset to empty.
    /// On failure the fields are left as they were.
    pub fn submit(&mut self) -> Result<Submission, ValidationError> {
        match self.validate() {
            Ok(submission) => {
                info!(
                    subject = %submission.subject,
                    venue = %submission.venue,
                    date = %submission.date,
                    time = %submission.time,
                    "Form submitted"
                );
                self.clear();
                Ok(submission)
            }
            Err(e) => {
                warn!(error = %e, "Form submission rejected");
                Err(e)
            }
        }
    }
}

/// Strict `YYYY-MM-DD`: zero-padded month and day.
fn parse_date(raw: &str) -> Option<NaiveDate> {
    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    (date.format("%Y-%m-%d").to_string() == raw).then_some(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> FormState {
        let mut form = FormState::new();
        form.set(FormField::Subject, "Operating Systems");
        form.set(FormField::Venue, "Room 404");
        form.set(FormField::Date, "2024-02-01");
        form.set(FormField::Time, "10:30");
        form
    }

    #[test]
    fn field_names_parse() {
        assert_eq!("subject".parse::<FormField>().unwrap(), FormField::Subject);
        assert_eq!("Time".parse::<FormField>().unwrap(), FormField::Time);
        assert_eq!(
            "room".parse::<FormField>(),
            Err(ValidationError::UnknownField("room".into()))
        );
    }

    #[test]
    fn set_and_get_round_through_fields() {
        let form = filled();
        assert_eq!(form.get(FormField::Venue), "Room 404");
        assert_eq!(form.get(FormField::Date), "2024-02-01");
        assert!(!form.is_empty());
    }

    #[test]
    fn submit_resets_all_fields() {
        let mut form = filled();
        let submission = form.submit().unwrap();
        assert_eq!(submission.subject, "Operating Systems");
        assert_eq!(submission.date, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
        assert_eq!(submission.time.to_string(), "10:30");
        assert!(form.is_empty());
        assert_eq!(form, FormState::default());
    }

    #[test]
    fn first_missing_field_is_reported() {
        let mut form = filled();
        form.set(FormField::Venue, "   ");
        form.set(FormField::Time, "");
        assert_eq!(
            form.submit(),
            Err(ValidationError::MissingField {
                field: "venue".into()
            })
        );
    }

    #[test]
    fn rejected_submit_keeps_fields() {
        let mut form = filled();
        form.set(FormField::Date, "01/02/2024");
        let before = form.clone();
        assert!(matches!(
            form.submit(),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert_eq!(form, before);
    }

    #[test]
    fn unpadded_date_is_rejected() {
        let mut form = filled();
        form.set(FormField::Date, "2024-1-5");
        form.set(FormField::Time, "09:05");
        assert_eq!(
            form.validate(),
            Err(ValidationError::InvalidDate {
                value: "2024-1-5".into()
            })
        );
        form.set(FormField::Date, "2024-01-05");
        assert_eq!(
            form.validate().unwrap().date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn malformed_time_is_rejected() {
        let mut form = filled();
        form.set(FormField::Time, "half past ten");
        assert!(matches!(
            form.submit(),
            Err(ValidationError::InvalidTime { .. })
        ));
        assert_eq!(form.get(FormField::Time), "half past ten");
    }
}
