mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};

use barnameh_core::EventType;

#[derive(Parser)]
#[command(name = "barnameh")]
#[command(about = "Personal daily/weekly planner on the Jalali calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the Jalali month calendar
    Month {
        /// Gregorian date inside the month to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the Saturday-start week strip
    Week {
        /// Gregorian date inside the week to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Show the hour-by-hour agenda for one day
    Day {
        /// Day to show (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,

        /// Show all 24 hours, including empty ones
        #[arg(short, long)]
        all: bool,
    },
    /// Add an event to a day
    Add {
        /// Event title
        title: String,

        /// Agenda hour, 0 to 23
        #[arg(short = 'H', long)]
        hour: u32,

        /// Event type: normal, exam, meeting or deadline
        #[arg(short = 't', long = "type", default_value = "normal")]
        kind: EventType,

        /// Event description
        #[arg(long)]
        description: Option<String>,

        /// Day to add the event to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Toggle an event's completion state
    Done {
        /// Event id (or unique id prefix) as shown by `day`
        event_id: String,

        /// Day the event belongs to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Delete an event
    Rm {
        /// Event id (or unique id prefix) as shown by `day`
        event_id: String,

        /// Day the event belongs to (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Month { date } => commands::month::run(date.as_deref()),
        Commands::Week { date } => commands::week::run(date.as_deref()),
        Commands::Day { date, all } => commands::day::run(date.as_deref(), all),
        Commands::Add {
            title,
            hour,
            kind,
            description,
            date,
        } => commands::add::run(title, hour, kind, description, date.as_deref()),
        Commands::Done { event_id, date } => commands::done::run(&event_id, date.as_deref()),
        Commands::Rm { event_id, date } => commands::rm::run(&event_id, date.as_deref()),
    }
}
