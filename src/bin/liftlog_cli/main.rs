// ABOUTME: Liftlog CLI - command-line front end for the guided workout tracker
// ABOUTME: Drives muscle and exercise selection, set logging, timers, history and backups
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftlog Contributors
//!
//! Usage:
//! ```bash
//! # Pick muscle groups, then exercises, then start
//! liftlog select muscles chest triceps
//! liftlog select exercises "Bench Press" "Dips"
//! liftlog start
//!
//! # Log and complete the first set of the first exercise (starts the rest timer)
//! liftlog set log 1 1 --weight 80 --reps 8
//! liftlog set complete 1 1
//! liftlog rest
//!
//! # Finish and review
//! liftlog finish
//! liftlog history
//! liftlog suggest "Bench Press"
//!
//! # Utility clocks
//! liftlog timer 1 30
//! liftlog stopwatch
//! ```

mod commands;
mod helpers;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use liftlog::config::{StorageBackend, TrackerConfig};
use liftlog::constants::training::REST_EXTENSION_SECONDS;
use liftlog::feedback::TerminalBell;
use liftlog::logging::LoggingConfig;
use liftlog::models::{ExperienceLevel, MuscleGroup};
use liftlog::session::WorkoutSession;
use tracing::debug;

#[derive(Parser)]
#[command(
    name = "liftlog",
    about = "Guided strength workout tracker",
    long_about = "Select muscle groups and exercises, log sets with a rest timer, and get progressive overload suggestions from your history."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Data directory override
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Show the current phase, selections, sets and timers
    Status,

    /// Choose muscle groups or exercises
    Select {
        #[command(subcommand)]
        target: SelectCommand,
    },

    /// List catalog exercises for the selected (or given) muscle groups
    Catalog {
        /// Muscle groups to list instead of the current selection
        muscles: Vec<MuscleGroup>,
    },

    /// Start (or resume) the workout with the selected exercises
    Start,

    /// Edit sets of the active workout
    Set {
        #[command(subcommand)]
        action: SetCommand,
    },

    /// Add an exercise to the active workout
    AddExercise {
        /// Exercise name
        name: String,
    },

    /// Remove an exercise from the active workout
    RemoveExercise {
        /// Exercise number (1-based)
        exercise: usize,
    },

    /// Move an exercise to another position
    MoveExercise {
        /// Current position (1-based)
        from: usize,
        /// New position (1-based)
        to: usize,
    },

    /// Finish the workout and show the summary
    Finish,

    /// Go back one phase
    Back,

    /// Abandon the current session
    Reset,

    /// Show completed workouts and statistics
    History {
        /// Number of workouts to show
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// Delete a completed workout
    DeleteWorkout {
        /// Workout id
        id: uuid::Uuid,
    },

    /// Show the overload suggestion for an exercise
    Suggest {
        /// Exercise name
        exercise: String,

        /// Prefill the exercise's untouched sets in the active workout
        #[arg(long)]
        apply: bool,
    },

    /// Run a countdown timer
    Timer {
        /// Minutes
        minutes: i64,
        /// Seconds
        #[arg(default_value = "0")]
        seconds: i64,
    },

    /// Run the utility stopwatch until Ctrl-C; Enter records a lap
    Stopwatch {
        /// Zero the stopwatch and laps first
        #[arg(long)]
        reset: bool,
    },

    /// Run the rest timer (starts a new one when seconds are given)
    Rest {
        /// Rest length in seconds
        seconds: Option<u64>,

        /// Adjust the running rest timer by this many seconds instead
        #[arg(long, allow_hyphen_values = true, conflicts_with = "seconds")]
        add: Option<i64>,

        /// Extend the running rest timer by the standard 30 seconds
        #[arg(long, conflicts_with_all = ["seconds", "add"])]
        extend: bool,

        /// Skip the running rest timer
        #[arg(long, conflicts_with_all = ["seconds", "add", "extend"])]
        skip: bool,
    },

    /// Watch the workout clock and rest timer until Ctrl-C
    Watch,

    /// Generate a workout plan with the configured AI service
    Generate {
        /// Target muscle groups (defaults to the current selection)
        #[arg(long, value_delimiter = ',')]
        muscles: Vec<MuscleGroup>,

        /// Experience level
        #[arg(long, value_enum, default_value = "beginner")]
        level: LevelArg,

        /// Free-text focus notes
        #[arg(long)]
        focus: Option<String>,

        /// Load the plan into the selection
        #[arg(long)]
        apply: bool,
    },

    /// Workout templates
    Template {
        #[command(subcommand)]
        action: TemplateCommand,
    },

    /// Write a backup to a file (or stdout)
    Export {
        /// Output file
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Merge a backup file into local data
    Import {
        /// Backup file
        path: PathBuf,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SelectCommand {
    /// Replace the selected muscle groups and move on to exercise selection
    Muscles {
        /// Muscle groups
        #[arg(required = true)]
        muscles: Vec<MuscleGroup>,
    },
    /// Replace the selected exercises
    Exercises {
        /// Exercise names
        #[arg(required = true)]
        names: Vec<String>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum SetCommand {
    /// Enter weight and/or reps for a set
    Log {
        /// Exercise number (1-based)
        exercise: usize,
        /// Set number (1-based)
        set: usize,
        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,
        /// Repetitions
        #[arg(long)]
        reps: Option<u32>,
    },
    /// Toggle a set's completed flag
    Complete {
        /// Exercise number (1-based)
        exercise: usize,
        /// Set number (1-based)
        set: usize,
    },
    /// Add a set drafted from the previous one
    Add {
        /// Exercise number (1-based)
        exercise: usize,
    },
    /// Remove a set
    Remove {
        /// Exercise number (1-based)
        exercise: usize,
        /// Set number (1-based)
        set: usize,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum TemplateCommand {
    /// Save the current selection
    Save {
        /// Template name
        name: String,
    },
    /// List saved templates
    List,
    /// Load a template into the selection
    Load {
        /// Template id
        id: uuid::Uuid,
    },
    /// Delete a template
    Delete {
        /// Template id
        id: uuid::Uuid,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum LevelArg {
    Beginner,
    Intermediate,
    Advanced,
}

impl From<LevelArg> for ExperienceLevel {
    fn from(level: LevelArg) -> Self {
        match level {
            LevelArg::Beginner => Self::Beginner,
            LevelArg::Intermediate => Self::Intermediate,
            LevelArg::Advanced => Self::Advanced,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = TrackerConfig::from_env()?;
    if let Some(dir) = cli.data_dir {
        config.storage = StorageBackend::File(dir);
    }
    debug!(?config, "Configuration resolved");

    let mut session = WorkoutSession::open_with_feedback(&config, Arc::new(TerminalBell)).await?;

    match cli.command {
        Command::Status => commands::session::status(&session).await,
        Command::Select { target } => match target {
            SelectCommand::Muscles { muscles } => {
                commands::session::select_muscles(&mut session, muscles);
            }
            SelectCommand::Exercises { names } => {
                commands::session::select_exercises(&mut session, names);
            }
        },
        Command::Catalog { muscles } => commands::session::catalog(&session, &muscles),
        Command::Start => commands::session::start(&mut session).await,
        Command::Set { action } => match action {
            SetCommand::Log {
                exercise,
                set,
                weight,
                reps,
            } => commands::session::log_set(&mut session, exercise, set, weight, reps)?,
            SetCommand::Complete { exercise, set } => {
                commands::session::complete_set(&mut session, exercise, set).await?;
            }
            SetCommand::Add { exercise } => commands::session::add_set(&mut session, exercise)?,
            SetCommand::Remove { exercise, set } => {
                commands::session::remove_set(&mut session, exercise, set)?;
            }
        },
        Command::AddExercise { name } => commands::session::add_exercise(&mut session, &name),
        Command::RemoveExercise { exercise } => {
            commands::session::remove_exercise(&mut session, exercise)?;
        }
        Command::MoveExercise { from, to } => {
            commands::session::move_exercise(&mut session, from, to)?;
        }
        Command::Finish => commands::session::finish(&mut session).await,
        Command::Back => commands::session::back(&mut session).await,
        Command::Reset => commands::session::reset(&mut session).await,
        Command::History { limit } => commands::data::history(&session, limit),
        Command::DeleteWorkout { id } => commands::data::delete_workout(&mut session, id).await?,
        Command::Suggest { exercise, apply } => {
            commands::data::suggest(&mut session, &exercise, apply);
        }
        Command::Timer { minutes, seconds } => {
            commands::clock::timer(&session, &config, minutes, seconds).await?;
        }
        Command::Stopwatch { reset } => commands::clock::stopwatch(&session, &config, reset).await?,
        Command::Rest {
            seconds,
            add,
            extend,
            skip,
        } => {
            let add = add.or_else(|| extend.then_some(REST_EXTENSION_SECONDS));
            commands::clock::rest(&session, &config, seconds, add, skip).await?;
        }
        Command::Watch => commands::clock::watch(&session, &config).await?,
        Command::Generate {
            muscles,
            level,
            focus,
            apply,
        } => {
            commands::data::generate(&mut session, &config, muscles, level.into(), focus, apply)
                .await?;
        }
        Command::Template { action } => match action {
            TemplateCommand::Save { name } => commands::data::save_template(&session, &name).await?,
            TemplateCommand::List => commands::data::list_templates(&session).await?,
            TemplateCommand::Load { id } => commands::data::load_template(&mut session, id).await?,
            TemplateCommand::Delete { id } => {
                commands::data::delete_template(&session, id).await?;
            }
        },
        Command::Export { output } => commands::data::export(&session, output).await?,
        Command::Import { path } => commands::data::import(&mut session, &path).await?,
    }

    Ok(())
}
