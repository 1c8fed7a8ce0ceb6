//! felony-fitness - Nutrition analysis and training program generation

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::info;
use tracing_subscriber::EnvFilter;

use felony_fitness::exercises::{Equipment, Exercise, default_exercise_pool, filter_by_equipment};
use felony_fitness::nutrition::{
    NutrientLogEntry, RdaTargets, analyze_weekly_nutrition, default_rda_targets,
    validate_rda_targets, window_bounds,
};
use felony_fitness::nutrition::targets::nutrient_unit;
use felony_fitness::routines::{
    DEFAULT_MAX_MAIN_EXERCISES, GeneratedProgram, GeneratorSettings, MIN_REPEAT_INTENSITY,
    REPEAT_INTENSITY_DECREMENT, generate_routines_with,
};

#[derive(Parser)]
#[command(name = "felony-fitness")]
#[command(author, version, about = "Felony Fitness - nutrition reports and training programs")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze a nutrition log against daily targets
    Analyze {
        /// JSON array of log entries
        #[arg(short, long)]
        log: PathBuf,

        /// JSON map of nutrient -> target range (defaults to the bundled table)
        #[arg(long, env = "FELONY_RDA_PATH")]
        rda: Option<PathBuf>,

        /// Averaging window in days
        #[arg(
            short,
            long,
            default_value = "7",
            env = "FELONY_WINDOW_DAYS",
            allow_negative_numbers = true
        )]
        window_days: i64,

        /// Last day of the window, YYYY-MM-DD (defaults to today)
        #[arg(short, long)]
        end: Option<NaiveDate>,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a weekly training program
    Routine {
        /// Training days per week (2-7)
        #[arg(short, long)]
        frequency: u32,

        /// JSON array of exercises (defaults to the bundled catalog)
        #[arg(short, long)]
        pool: Option<PathBuf>,

        /// Only use exercises for this equipment (free_weight, machine, bodyweight)
        #[arg(long)]
        equipment: Option<Equipment>,

        /// Intensity points removed each time an exercise repeats
        #[arg(long, default_value_t = REPEAT_INTENSITY_DECREMENT, env = "FELONY_REPEAT_DECREMENT")]
        repeat_decrement: u32,

        /// Lowest intensity a repeated exercise drops to
        #[arg(long, default_value_t = MIN_REPEAT_INTENSITY, env = "FELONY_INTENSITY_FLOOR")]
        intensity_floor: u32,

        /// Main exercises per day once every muscle group is covered
        #[arg(
            long,
            default_value_t = DEFAULT_MAX_MAIN_EXERCISES,
            env = "FELONY_MAX_MAIN_EXERCISES"
        )]
        max_main_exercises: usize,

        /// Print the program as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the daily targets in effect
    Targets {
        /// JSON map of nutrient -> target range
        #[arg(long, env = "FELONY_RDA_PATH")]
        rda: Option<PathBuf>,
    },
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}

fn load_rda(path: Option<&Path>) -> Result<RdaTargets> {
    let Some(path) = path else {
        return Ok(default_rda_targets());
    };
    let targets: RdaTargets = read_json(path)?;
    validate_rda_targets(&targets)
        .with_context(|| format!("Invalid targets in {}", path.display()))?;
    info!("Loaded {} targets from {}", targets.len(), path.display());
    Ok(targets)
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { log, rda, window_days, end, json } => {
            let rda = load_rda(rda.as_deref())?;
            let entries: Vec<NutrientLogEntry> = read_json(&log)?;

            let end = end.unwrap_or_else(|| Local::now().date_naive());
            let (start, end) = window_bounds(end, window_days)?;
            let in_window: Vec<_> = entries
                .into_iter()
                .filter(|e| e.date >= start && e.date <= end)
                .collect();
            info!("Analyzing {} entries from {} to {}", in_window.len(), start, end);

            let report = analyze_weekly_nutrition(&in_window, &rda, window_days)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("{}", report.format());
            }
        }

        Commands::Routine {
            frequency,
            pool,
            equipment,
            repeat_decrement,
            intensity_floor,
            max_main_exercises,
            json,
        } => {
            let mut exercises: Vec<Exercise> = match pool {
                Some(path) => read_json(&path)?,
                None => default_exercise_pool(),
            };
            if let Some(equipment) = equipment {
                exercises = filter_by_equipment(&exercises, equipment);
            }
            info!("Generating {}-day program from {} exercises", frequency, exercises.len());

            let settings = GeneratorSettings {
                repeat_decrement,
                intensity_floor,
                max_main_exercises,
            };
            let routines = generate_routines_with(&exercises, frequency, &settings)?;
            let program = GeneratedProgram { frequency, routines };

            if json {
                println!("{}", serde_json::to_string_pretty(&program)?);
            } else {
                println!("{}", program.format());
            }
        }

        Commands::Targets { rda } => {
            let rda = load_rda(rda.as_deref())?;
            println!("Daily targets");
            println!("{:-<60}", "");
            for (nutrient, target) in &rda {
                let max_safe = target
                    .max_safe
                    .map(|v| format!("{:.0}", v))
                    .unwrap_or_else(|| "-".to_string());
                println!(
                    "{:16} | {:>8.0} - {:<8.0} | max {:>6} {}",
                    nutrient,
                    target.min_optimal,
                    target.max_optimal,
                    max_safe,
                    nutrient_unit(nutrient)
                );
            }
        }
    }

    Ok(())
}
