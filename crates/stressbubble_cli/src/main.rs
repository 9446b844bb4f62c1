//! CLI entry point over a JSON snapshot file.
//!
//! # Responsibility
//! - Drive `stressbubble_core` end to end: load, mutate, derive, save.
//! - Keep output deterministic for quick local checks.

use clap::{Parser, Subcommand};
use log::{error, info};
use std::path::PathBuf;
use std::process::ExitCode;
use stressbubble_core::{
    default_log_level, init_logging, read_snapshot, write_snapshot, LoggingConfig, NewStressor,
    StressLevel, StressStore, Stressor, StressorService,
};

#[derive(Parser)]
#[command(name = "stressbubble", about = "Track daily stressors in a JSON snapshot", version)]
struct Cli {
    /// Path to the stress data snapshot
    #[arg(long, default_value = "stress.json")]
    data: PathBuf,

    /// Absolute directory for rolling logs (logging disabled when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show stressors for one date (defaults to today)
    Show {
        #[arg(long)]
        date: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List dates that have stressors
    Dates,

    /// Record a new stressor
    Add {
        name: String,

        /// Severity 1-5
        #[arg(long, value_parser = clap::value_parser!(u8).range(1..=5))]
        level: u8,

        #[arg(long)]
        notes: Option<String>,

        #[arg(long)]
        date: Option<String>,
    },

    /// Raise a stressor's level by one
    Bump {
        #[arg(long)]
        date: String,
        id: String,
    },

    /// Delete a stressor
    Delete {
        #[arg(long)]
        date: String,
        id: String,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::Dates => "dates",
            Self::Add { .. } => "add",
            Self::Bump { .. } => "bump",
            Self::Delete { .. } => "delete",
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let command = cli.command.name();
    match run(cli) {
        Ok(()) => {
            info!("event=cli_command module=cli status=ok command={command}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_command module=cli status=error command={command}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(log_dir) = &cli.log_dir {
        init_logging(&LoggingConfig::new(default_log_level(), log_dir))?;
    }

    let store = StressStore::new();
    store.load_data(read_snapshot(&cli.data)?);
    let service = StressorService::new(&store);

    match cli.command {
        Commands::Show { date, json } => {
            if let Some(date) = date {
                store.set_date(date);
            }
            let stressors = store.current_stressors();
            if json {
                println!("{}", serde_json::to_string_pretty(&stressors)?);
            } else {
                print_day(&store.current_date(), &stressors);
            }
            return Ok(());
        }
        Commands::Dates => {
            for date in store.dates_with_data() {
                println!("{date} {}", store.stressors_on(&date).len());
            }
            return Ok(());
        }
        Commands::Add {
            name,
            level,
            notes,
            date,
        } => {
            let mut request = NewStressor::new(name, StressLevel::try_from(level)?);
            request.notes = notes;
            request.date = date;
            let created = service.record_stressor(request)?;
            println!("added {} on {}", created.id, created.date);
        }
        Commands::Bump { date, id } => {
            let raised = service.increase_level(&date, &id)?;
            println!("level {} for {}", raised.level, raised.id);
        }
        Commands::Delete { date, id } => {
            service.remove_stressor(&date, &id)?;
            println!("deleted {id} from {date}");
        }
    }

    write_snapshot(&cli.data, &store.stress_data())?;
    Ok(())
}

fn print_day(date: &str, stressors: &[Stressor]) {
    println!("date={date} count={}", stressors.len());
    for stressor in stressors {
        let notes = stressor.notes.as_deref().unwrap_or("-");
        println!(
            "{} level={} name={} notes={}",
            stressor.id, stressor.level, stressor.name, notes
        );
    }
}
