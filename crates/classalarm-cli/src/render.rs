//! Plain-text rendering of panel views.

use std::fmt::Write;

use classalarm_core::{AlarmNotice, DaySummary, FormField, ScheduleView, SubmissionView, Tab};

const SEP: &str = " \u{2022} ";

/// App title and tab bar with the active tab bracketed.
pub fn header(active: Tab) -> String {
    let tab = |t: Tab| {
        if t == active {
            format!("[{}]", t.title())
        } else {
            format!(" {} ", t.title())
        }
    };
    format!("ClassAlarm\n{}  {}\n\n", tab(Tab::Cr), tab(Tab::Student))
}

pub fn submission(view: &SubmissionView) -> String {
    let mut out = String::from("Submit New Class\n");
    for field in FormField::ALL {
        let value = view.form.get(field);
        let shown = if value.is_empty() { "(empty)" } else { value };
        let _ = writeln!(out, "  {:<8} {shown}", format!("{}:", field.label()));
    }

    out.push_str("\nSubmitted Classes\n");
    if view.submitted.is_empty() {
        out.push_str("  No classes submitted yet.\n");
        return out;
    }
    for class in &view.submitted {
        let date = class
            .date
            .map(|d| d.format("%-m/%-d/%Y").to_string())
            .unwrap_or_default();
        let _ = writeln!(out, "  {}", class.subject);
        let _ = writeln!(out, "    {}{SEP}{date}{SEP}{}", class.venue, class.time);
    }
    out
}

pub fn schedule(view: &ScheduleView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Today's Classes    Current time: {}\n", view.current_time);

    if view.classes.is_empty() {
        out.push_str("No classes scheduled for today!\nEnjoy your free time!\n");
        return out;
    }

    for class in &view.classes {
        let _ = writeln!(out, "{}", class.entry.subject);
        let _ = writeln!(out, "  {}{SEP}{}", class.entry.venue, class.entry.time);
        let _ = writeln!(out, "  {}", class.countdown_text);
        let previous_day = if class.alarm_previous_day {
            " (previous day)"
        } else {
            ""
        };
        let _ = writeln!(
            out,
            "  Alarm set {} minutes before class: Alarm at {}{previous_day}\n",
            class.alarm_offset_minutes, class.alarm_at
        );
    }

    if let Some(s) = &view.summary {
        out.push_str(&summary(s));
    }
    out
}

pub fn summary(summary: &DaySummary) -> String {
    format!(
        "Today's Summary\n  Total Classes: {}\n  Upcoming:      {}\n  Alarms Set:    {}\n",
        summary.total, summary.upcoming, summary.alarms_set
    )
}

pub fn notices(notices: &[AlarmNotice]) -> String {
    if notices.is_empty() {
        return "No alarms due\n".to_string();
    }
    let mut out = String::new();
    for n in notices {
        let _ = writeln!(out, "[{}] {}", n.raised_at.format("%H:%M:%S"), n.message);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use classalarm_core::{AlarmChecker, SchedulePanel, SubmissionPanel};

    fn at(h: u32, m: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn header_brackets_active_tab() {
        let text = header(Tab::Student);
        assert!(text.starts_with("ClassAlarm\n"));
        assert!(text.contains("[Student Panel]"));
        assert!(text.contains(" Class CR Panel "));
    }

    #[test]
    fn submission_lists_sample_classes() {
        let text = submission(&SubmissionPanel::new().view());
        assert!(text.contains("Subject: (empty)"));
        assert!(text.contains("Database Systems"));
        assert!(text.contains("Room 302 \u{2022} 1/16/2024 \u{2022} 14:00"));
    }

    #[test]
    fn submission_empty_list_message() {
        let text = submission(&SubmissionPanel::with_classes(Vec::new()).view());
        assert!(text.contains("No classes submitted yet."));
    }

    #[test]
    fn schedule_shows_countdown_and_alarm() {
        let text = schedule(&SchedulePanel::default().view(at(8, 0)));
        assert!(text.contains("Current time: 08:00"));
        assert!(text.contains("1h 0m until class"));
        assert!(text.contains("Alarm set 20 minutes before class: Alarm at 08:40"));
        assert!(text.contains("Total Classes: 4"));
    }

    #[test]
    fn schedule_empty_message() {
        let panel = SchedulePanel::with_classes(Vec::new(), Default::default());
        let text = schedule(&panel.view(at(8, 0)));
        assert!(text.contains("No classes scheduled for today!"));
        assert!(!text.contains("Today's Summary"));
    }

    #[test]
    fn notices_render_messages() {
        let mut checker = AlarmChecker::default();
        let due = checker.check(&classalarm_core::schedule::todays_classes(), at(8, 45));
        let text = notices(&due);
        assert!(text.starts_with("[08:45:00] Class Reminder! Data Structures"));
        assert_eq!(notices(&[]), "No alarms due\n");
    }
}
