//! Interactive shell over both panels.
//!
//! Reads one command per line and re-renders the visible panel after each.
//! Countdowns are recomputed only when a command is handled.

use std::io::{self, BufRead, Write};

use chrono::NaiveDateTime;
use classalarm_core::{ActivePanel, FormField, Shell, Tab, SUBMITTED_NOTICE};

use crate::context::Context;
use crate::render;

const HELP: &str = "\
Commands:
  tab cr|student         switch panel
  set <field> <value>    fill subject, venue, date (YYYY-MM-DD) or time (HH:MM)
  submit                 submit the form
  show                   re-render the current panel
  help                   this message
  quit                   leave
";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Tab(Tab),
    Set(FormField, String),
    Submit,
    Show,
    Help,
    Quit,
}

fn parse(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let rest = rest.trim();
    match word.to_ascii_lowercase().as_str() {
        "" | "show" => Ok(Command::Show),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        "submit" => Ok(Command::Submit),
        "tab" => rest.parse().map(Command::Tab).map_err(|e| e.to_string()),
        "set" => {
            let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            let field = field.parse::<FormField>().map_err(|e| e.to_string())?;
            Ok(Command::Set(field, value.trim().to_string()))
        }
        other => Err(format!("unknown command '{other}', type 'help'")),
    }
}

/// Interactive state: the shell plus how to render it.
struct Session {
    shell: Shell,
}

impl Session {
    fn new(shell: Shell) -> Self {
        Self { shell }
    }

    fn render(&self, now: NaiveDateTime) -> String {
        let mut out = render::header(self.shell.active_tab());
        match self.shell.panel() {
            ActivePanel::Submission(p) => out.push_str(&render::submission(&p.view())),
            ActivePanel::Schedule(p) => out.push_str(&render::schedule(&p.view(now))),
        }
        out
    }

    /// Handle one input line. Returns the output and whether to stop.
    fn handle(&mut self, line: &str, now: NaiveDateTime) -> (String, bool) {
        let command = match parse(line) {
            Ok(c) => c,
            Err(message) => return (format!("{message}\n"), false),
        };

        match command {
            Command::Quit => (String::new(), true),
            Command::Help => (HELP.to_string(), false),
            Command::Show => (self.render(now), false),
            Command::Tab(tab) => {
                self.shell.switch_to(tab);
                (self.render(now), false)
            }
            Command::Set(field, value) => match self.shell.submission_mut() {
                Some(panel) => {
                    panel.set_field(field, value);
                    (self.render(now), false)
                }
                None => ("Switch to the cr tab to edit the form\n".to_string(), false),
            },
            Command::Submit => match self.shell.submission_mut() {
                Some(panel) => match panel.submit() {
                    Ok(_) => (format!("{SUBMITTED_NOTICE}\n\n{}", self.render(now)), false),
                    Err(e) => (format!("{e}\n"), false),
                },
                None => ("Switch to the cr tab to submit a class\n".to_string(), false),
            },
        }
    }
}

fn run_session<R: BufRead, W: Write>(
    ctx: &Context,
    input: R,
    mut output: W,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = Session::new(Shell::new(ctx.config.alarm.offset_minutes));
    write!(output, "{}\n> ", session.render(ctx.now()))?;
    output.flush()?;

    for line in input.lines() {
        let (text, quit) = session.handle(&line?, ctx.now());
        output.write_all(text.as_bytes())?;
        if quit {
            break;
        }
        write!(output, "\n> ")?;
        output.flush()?;
    }
    Ok(())
}

pub fn run(ctx: &Context) -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    run_session(ctx, stdin.lock(), io::stdout().lock())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use classalarm_core::{ClassTime, Config};

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 15)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    #[test]
    fn parses_commands() {
        assert_eq!(parse("tab student"), Ok(Command::Tab(Tab::Student)));
        assert_eq!(
            parse("set venue  Lab 205 "),
            Ok(Command::Set(FormField::Venue, "Lab 205".into()))
        );
        assert_eq!(parse(""), Ok(Command::Show));
        assert_eq!(parse("EXIT"), Ok(Command::Quit));
        assert!(parse("tab admin").is_err());
        assert!(parse("set room 5").is_err());
        assert!(parse("dance").is_err());
    }

    #[test]
    fn submit_resets_form_and_keeps_list() {
        let mut session = Session::new(Shell::default());
        let now = at(8, 0);
        session.handle("set subject Compilers", now);
        session.handle("set venue Room 9", now);
        session.handle("set date 2024-03-04", now);
        let (out, _) = session.handle("set time 13:15", now);
        assert!(out.contains("Subject: Compilers"));

        let (out, quit) = session.handle("submit", now);
        assert!(!quit);
        assert!(out.starts_with(SUBMITTED_NOTICE));
        assert!(out.contains("Subject: (empty)"));
        assert!(!out.contains("Compilers"));
        assert!(out.contains("Database Systems"));
    }

    #[test]
    fn incomplete_submit_reports_missing_field() {
        let mut session = Session::new(Shell::default());
        let (out, _) = session.handle("submit", at(8, 0));
        assert_eq!(out, "Please fill out the 'subject' field\n");
    }

    #[test]
    fn form_edits_are_blocked_on_student_tab() {
        let mut session = Session::new(Shell::default());
        let (out, _) = session.handle("tab student", at(8, 0));
        assert!(out.contains("[Student Panel]"));
        assert!(out.contains("1h 0m until class"));

        let (out, _) = session.handle("set subject X", at(8, 0));
        assert_eq!(out, "Switch to the cr tab to edit the form\n");
    }

    #[test]
    fn session_runs_until_quit() {
        let ctx = Context::new(Config::default(), false, ClassTime::new(8, 0));
        let input = "tab student\nquit\nshow\n";
        let mut output = Vec::new();
        run_session(&ctx, input.as_bytes(), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert!(text.starts_with("ClassAlarm\n[Class CR Panel]"));
        assert!(text.contains("Current time: 08:00"));
        assert_eq!(text.matches("Today's Classes").count(), 1);
    }
}
