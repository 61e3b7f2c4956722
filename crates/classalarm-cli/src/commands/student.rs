use clap::Subcommand;
use classalarm_core::SchedulePanel;

use crate::context::Context;
use crate::render;

#[derive(Subcommand)]
pub enum StudentAction {
    /// Today's classes with countdowns and alarm times
    Today,
    /// Counts of total, upcoming and pending-alarm classes
    Summary,
}

pub fn run(ctx: &Context, action: StudentAction) -> Result<(), Box<dyn std::error::Error>> {
    let panel = SchedulePanel::new(ctx.config.alarm.offset_minutes);
    let now = ctx.now();

    match action {
        StudentAction::Today => {
            ctx.emit(&panel.view(now), render::schedule)?;
        }
        StudentAction::Summary => {
            ctx.emit(&panel.summary(now), render::summary)?;
        }
    }
    Ok(())
}
