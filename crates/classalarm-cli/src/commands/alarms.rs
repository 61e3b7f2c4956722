use std::time::Duration;

use clap::Subcommand;
use classalarm_core::schedule::todays_classes;
use classalarm_core::AlarmChecker;

use crate::context::Context;
use crate::render;

#[derive(Subcommand)]
pub enum AlarmsAction {
    /// List alarms that are due right now
    Check,
    /// Re-check on an interval, raising each alarm once
    Watch {
        /// Seconds between checks (defaults to alarm.check_interval_secs)
        #[arg(long)]
        interval: Option<u64>,
        /// Stop after this many checks
        #[arg(long)]
        ticks: Option<u64>,
    },
}

pub fn run(ctx: &Context, action: AlarmsAction) -> Result<(), Box<dyn std::error::Error>> {
    let classes = todays_classes();
    let mut checker = AlarmChecker::new(ctx.config.alarm.offset_minutes);

    match action {
        AlarmsAction::Check => {
            let notices = checker.check(&classes, ctx.now());
            ctx.emit(&notices, |n| render::notices(n))?;
        }
        AlarmsAction::Watch { interval, ticks } => {
            let interval = interval.unwrap_or(ctx.config.alarm.check_interval_secs).max(1);
            tracing::info!(
                interval_secs = interval,
                offset_minutes = checker.offset().minutes(),
                "Alarm watch started"
            );
            let mut tick = 0u64;
            loop {
                let notices = checker.check(&classes, ctx.now());
                ctx.emit_line(&notices, |n| render::notices(n))?;
                tick += 1;
                if ticks.is_some_and(|limit| tick >= limit) {
                    break;
                }
                std::thread::sleep(Duration::from_secs(interval));
            }
        }
    }
    Ok(())
}
