use clap::{Parser, Subcommand};
use classalarm_core::{ClassTime, Config};

mod commands;
mod context;
mod logging;
mod render;

use context::Context;

#[derive(Parser)]
#[command(name = "classalarm", version, about = "ClassAlarm CLI")]
struct Cli {
    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
    /// Use HH:MM today as the current time
    #[arg(long, global = true, value_name = "HH:MM")]
    at: Option<ClassTime>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Class representative panel
    Cr {
        #[command(subcommand)]
        action: commands::cr::CrAction,
    },
    /// Student panel
    Student {
        #[command(subcommand)]
        action: commands::student::StudentAction,
    },
    /// Alarm checks
    Alarms {
        #[command(subcommand)]
        action: commands::alarms::AlarmsAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Interactive shell with both panels
    Ui,
}

fn main() {
    let cli = Cli::parse();

    let loaded = Config::load();
    let config = loaded.as_ref().cloned().unwrap_or_default();
    logging::init(&config.logging);
    if let Err(e) = &loaded {
        tracing::warn!(error = %e, "Falling back to default configuration");
    }

    let ctx = Context::new(config, cli.json, cli.at);
    let result = match cli.command {
        Commands::Cr { action } => commands::cr::run(&ctx, action),
        Commands::Student { action } => commands::student::run(&ctx, action),
        Commands::Alarms { action } => commands::alarms::run(&ctx, action),
        Commands::Config { action } => commands::config::run(action),
        Commands::Ui => commands::ui::run(&ctx),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
