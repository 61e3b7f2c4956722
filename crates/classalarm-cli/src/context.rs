use chrono::{Local, NaiveDateTime};
use classalarm_core::{ClassTime, Config};
use serde::Serialize;

/// Settings shared by every command.
pub struct Context {
    pub config: Config,
    pub json: bool,
    at: Option<ClassTime>,
}

impl Context {
    pub fn new(config: Config, json: bool, at: Option<ClassTime>) -> Self {
        Self { config, json, at }
    }

    /// Current local time, or `--at` on today's date.
    pub fn now(&self) -> NaiveDateTime {
        match self.at {
            Some(time) => time.on(Local::now().date_naive()),
            None => Local::now().naive_local(),
        }
    }

    /// Print `value` as JSON or as the text `render` produces.
    pub fn emit<T: Serialize>(
        &self,
        value: &T,
        render: impl FnOnce(&T) -> String,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            print!("{}", render(value));
        }
        Ok(())
    }

    /// Like `emit`, but JSON goes out as a single line so a stream of
    /// values can be read one per line.
    pub fn emit_line<T: Serialize>(
        &self,
        value: &T,
        render: impl FnOnce(&T) -> String,
    ) -> Result<(), Box<dyn std::error::Error>> {
        if self.json {
            println!("{}", serde_json::to_string(value)?);
        } else {
            print!("{}", render(value));
        }
        Ok(())
    }
}
