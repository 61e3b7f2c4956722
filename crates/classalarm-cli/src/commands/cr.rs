use clap::Subcommand;
use classalarm_core::{FormField, SubmissionPanel, SUBMITTED_NOTICE};

use crate::context::Context;
use crate::render;

#[derive(Subcommand)]
pub enum CrAction {
    /// Show submitted classes
    List,
    /// Submit a new class (validated and logged, not stored)
    Submit {
        #[arg(long)]
        subject: String,
        #[arg(long)]
        venue: String,
        /// Class date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Class time (HH:MM)
        #[arg(long)]
        time: String,
    },
}

pub fn run(ctx: &Context, action: CrAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut panel = SubmissionPanel::new();

    match action {
        CrAction::List => {
            ctx.emit(&panel.view(), render::submission)?;
        }
        CrAction::Submit {
            subject,
            venue,
            date,
            time,
        } => {
            panel.set_field(FormField::Subject, subject);
            panel.set_field(FormField::Venue, venue);
            panel.set_field(FormField::Date, date);
            panel.set_field(FormField::Time, time);
            let submission = panel.submit()?;

            if ctx.json {
                let out = serde_json::json!({
                    "notice": SUBMITTED_NOTICE,
                    "submission": submission,
                    "panel": panel.view(),
                });
                println!("{}", serde_json::to_string_pretty(&out)?);
            } else {
                println!("{SUBMITTED_NOTICE}\n");
                print!("{}", render::submission(&panel.view()));
            }
        }
    }
    Ok(())
}
