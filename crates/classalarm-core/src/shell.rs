//! Tab-switching shell over the two panels.
//!
//! Only the visible panel exists. Switching to the other tab drops the current
//! panel and mounts a fresh one, so a half-filled form does not survive a
//! round trip through the student tab.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ValidationError;
use crate::panel::{SchedulePanel, SubmissionPanel};
use crate::timing::AlarmOffset;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    #[default]
    Cr,
    Student,
}

impl Tab {
    pub fn title(&self) -> &'static str {
        match self {
            Tab::Cr => "Class CR Panel",
            Tab::Student => "Student Panel",
        }
    }
}

impl FromStr for Tab {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cr" => Ok(Tab::Cr),
            "student" => Ok(Tab::Student),
            _ => Err(ValidationError::UnknownTab(s.to_string())),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::Cr => f.write_str("cr"),
            Tab::Student => f.write_str("student"),
        }
    }
}

/// The mounted panel.
#[derive(Debug, Clone)]
pub enum ActivePanel {
    Submission(SubmissionPanel),
    Schedule(SchedulePanel),
}

impl ActivePanel {
    fn mount(tab: Tab, offset: AlarmOffset) -> Self {
        match tab {
            Tab::Cr => ActivePanel::Submission(SubmissionPanel::new()),
            Tab::Student => ActivePanel::Schedule(SchedulePanel::new(offset)),
        }
    }

    pub fn tab(&self) -> Tab {
        match self {
            ActivePanel::Submission(_) => Tab::Cr,
            ActivePanel::Schedule(_) => Tab::Student,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Shell {
    panel: ActivePanel,
    offset: AlarmOffset,
}

impl Shell {
    /// Opens on the CR tab.
    pub fn new(offset: AlarmOffset) -> Self {
        Self {
            panel: ActivePanel::mount(Tab::default(), offset),
            offset,
        }
    }

    pub fn active_tab(&self) -> Tab {
        self.panel.tab()
    }

    pub fn panel(&self) -> &ActivePanel {
        &self.panel
    }

    /// Show `tab`. Returns true if a new panel was mounted.
    pub fn switch_to(&mut self, tab: Tab) -> bool {
        if self.active_tab() == tab {
            return false;
        }
        debug!(from = %self.active_tab(), to = %tab, "Switching tab");
        self.panel = ActivePanel::mount(tab, self.offset);
        true
    }

    pub fn submission_mut(&mut self) -> Option<&mut SubmissionPanel> {
        match &mut self.panel {
            ActivePanel::Submission(p) => Some(p),
            ActivePanel::Schedule(_) => None,
        }
    }
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(AlarmOffset::default())
    }
}
