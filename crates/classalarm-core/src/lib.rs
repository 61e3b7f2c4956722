//! # ClassAlarm Core Library
//!
//! Business logic for ClassAlarm, a prototype for announcing classes and
//! reminding students before they start. The `classalarm` CLI is a thin
//! presentation layer over this crate.
//!
//! ## Architecture
//!
//! - **Shell**: tab switching between the two panels; only the visible panel
//!   holds state
//! - **Panels**: the class representative's submission form and list, and the
//!   student's view of today's classes
//! - **Timing**: countdown and alarm-time arithmetic against an explicit "now"
//! - **Alarm**: once-per-day alarm checks producing display-only notices
//!
//! Class data is fixed sample data held in memory. Submissions are validated,
//! logged and dropped.
//!
//! ## Key Components
//!
//! - [`Shell`]: tab router
//! - [`SubmissionPanel`] / [`SchedulePanel`]: the two panels
//! - [`FormState`]: controlled-input form state
//! - [`AlarmChecker`]: due-alarm detection
//! - [`Config`]: application configuration management

pub mod alarm;
pub mod config;
pub mod error;
pub mod form;
pub mod panel;
pub mod schedule;
pub mod shell;
pub mod timing;

pub use alarm::{AlarmChecker, AlarmNotice};
pub use config::Config;
pub use error::{ConfigError, CoreError, ValidationError};
pub use form::{FormField, FormState, Submission};
pub use panel::{
    DaySummary, SchedulePanel, ScheduleView, ScheduledClass, SubmissionPanel, SubmissionView,
    SUBMITTED_NOTICE,
};
pub use schedule::ClassEntry;
pub use shell::{ActivePanel, Shell, Tab};
pub use timing::{AlarmOffset, AlarmTime, ClassTime, Countdown};
