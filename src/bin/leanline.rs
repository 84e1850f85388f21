//! Leanline CLI - Command-line interface for the Leanline engine
//!
//! Commands:
//! - evaluate: Evaluate a session file into a report payload
//! - validate: Validate a session file against the ledger invariants

use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use leanline::report::ReportEncoder;
use leanline::session::{SessionState, MAX_WEIGHT_KG, MIN_WEIGHT_KG};
use leanline::ENGINE_VERSION;

/// Leanline - On-device metabolic projection engine
#[derive(Parser)]
#[command(name = "leanline")]
#[command(version = ENGINE_VERSION)]
#[command(about = "Project weight trajectory from a calorie/workout ledger", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a session file into a report payload
    Evaluate {
        /// Input session file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file path (use - for stdout)
        #[arg(short, long, default_value = "-")]
        output: PathBuf,

        /// Goal weight in kg
        #[arg(long)]
        goal: f64,

        /// Output format (defaults to pretty on a terminal, compact otherwise)
        #[arg(long)]
        output_format: Option<OutputFormat>,
    },

    /// Validate a session file against the ledger invariants
    Validate {
        /// Input session file path (use - for stdin)
        #[arg(short, long)]
        input: PathBuf,

        /// Output validation report as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Compact JSON
    Json,
    /// Pretty-printed JSON
    JsonPretty,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Engine(#[from] leanline::EngineError),
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("session failed validation with {0} finding(s)")]
    ValidationFailed(usize),
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Evaluate {
            input,
            output,
            goal,
            output_format,
        } => cmd_evaluate(&input, &output, goal, output_format),
        Commands::Validate { input, json } => cmd_validate(&input, json),
    }
}

fn cmd_evaluate(
    input: &Path,
    output: &Path,
    goal: f64,
    output_format: Option<OutputFormat>,
) -> Result<(), CliError> {
    let session = SessionState::from_json(&read_input(input)?)?;
    let payload = ReportEncoder::new().encode(&session.to_input(goal));

    let format = output_format.unwrap_or_else(|| {
        if output.to_string_lossy() == "-" && atty::is(atty::Stream::Stdout) {
            OutputFormat::JsonPretty
        } else {
            OutputFormat::Json
        }
    });

    let rendered = match format {
        OutputFormat::Json => serde_json::to_string(&payload)?,
        OutputFormat::JsonPretty => serde_json::to_string_pretty(&payload)?,
    };

    if output.to_string_lossy() == "-" {
        println!("{rendered}");
    } else {
        fs::write(output, rendered)?;
    }

    Ok(())
}

#[derive(Serialize)]
struct ValidationReport {
    weight_kg: f64,
    activity: String,
    meals: usize,
    workouts: usize,
    findings: Vec<String>,
}

fn cmd_validate(input: &Path, json: bool) -> Result<(), CliError> {
    let session = SessionState::from_json(&read_input(input)?)?;

    let mut findings = Vec::new();

    if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&session.weight_kg) {
        findings.push(format!(
            "weight {} kg outside [{MIN_WEIGHT_KG}, {MAX_WEIGHT_KG}]",
            session.weight_kg
        ));
    }

    for meal in &session.meals {
        if meal.calories == 0 {
            findings.push(format!("meal {} ({}) has zero calories", meal.id, meal.name));
        }
        if meal.protein < 0.0 {
            findings.push(format!("meal {} has negative protein", meal.id));
        }
    }

    for workout in &session.workouts {
        if workout.duration_min <= 0.0 {
            findings.push(format!("workout {} has non-positive duration", workout.id));
        }
        if workout.distance_km <= 0.0 {
            findings.push(format!("workout {} has non-positive distance", workout.id));
        }
    }

    let mut ids: Vec<i64> = session
        .meals
        .iter()
        .map(|m| m.id)
        .chain(session.workouts.iter().map(|w| w.id))
        .collect();
    let total = ids.len();
    ids.sort_unstable();
    ids.dedup();
    if ids.len() != total {
        findings.push("duplicate entry ids".to_string());
    }

    let report = ValidationReport {
        weight_kg: session.weight_kg,
        activity: session.activity.as_str().to_string(),
        meals: session.meals.len(),
        workouts: session.workouts.len(),
        findings,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Session Validation");
        println!("==================");
        println!("Weight:   {} kg", report.weight_kg);
        println!("Activity: {}", report.activity);
        println!("Meals:    {}", report.meals);
        println!("Workouts: {}", report.workouts);

        if !report.findings.is_empty() {
            println!("\nFindings:");
            for finding in &report.findings {
                println!("  - {finding}");
            }
        }
    }

    if report.findings.is_empty() {
        Ok(())
    } else {
        Err(CliError::ValidationFailed(report.findings.len()))
    }
}

fn read_input(input: &Path) -> Result<String, CliError> {
    if input.to_string_lossy() == "-" {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        Ok(buffer)
    } else {
        Ok(fs::read_to_string(input)?)
    }
}
