use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::{info, warn};

use weat::accuracy::{self, Answers, GroupGrade};
use weat::association::{self, EmbeddingSpace, WeatReport, WeatTest};
use weat::config::Config;

/// Word Embedding Association Test and response-accuracy evaluator.
///
/// Measures differential association between target and attribute word sets
/// in an embedding space, and compares answer accuracy across respondent groups.
#[derive(Parser)]
#[command(name = "weat", version, about)]
struct Cli {
    /// Print machine-readable JSON instead of the colored report
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the WEAT statistic with a per-word breakdown
    Weat {
        /// Embeddings JSON file (default: WEAT_EMBEDDINGS, else the built-in vocabulary)
        #[arg(long)]
        embeddings: Option<PathBuf>,

        /// Word sets JSON file (default: WEAT_SETS, else the built-in test)
        #[arg(long)]
        sets: Option<PathBuf>,
    },

    /// Grade respondent groups against an answer key
    Accuracy {
        /// Answer key JSON file
        #[arg(long)]
        key: PathBuf,

        /// A respondent group as NAME=PATH (repeatable)
        #[arg(long = "group", required = true)]
        groups: Vec<String>,
    },

    /// Run both computations on the built-in reference data
    Demo,
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("weat=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Weat { embeddings, sets } => {
            let space = match embeddings.or_else(|| config.embeddings_path.clone()) {
                Some(path) => weat::loader::load_embeddings(&path)?,
                None => {
                    info!("No embeddings file configured, using the reference vocabulary");
                    weat::sample::reference_embeddings()?
                }
            };
            let test = match sets.or_else(|| config.sets_path.clone()) {
                Some(path) => weat::loader::load_word_sets(&path)?,
                None => {
                    info!("No word sets file configured, using the reference test");
                    weat::sample::reference_test()
                }
            };

            let report = run_weat(&test, &space)?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                weat::output::terminal::display_weat_report(&test, &report, config.precision);
            }
        }

        Commands::Accuracy { key, groups } => {
            let answer_key = weat::loader::load_answers(&key)?;

            let mut loaded: Vec<(String, Answers)> = Vec::with_capacity(groups.len());
            for arg in &groups {
                let (name, path) = weat::loader::parse_group_arg(arg)?;
                if loaded.iter().any(|(existing, _)| *existing == name) {
                    warn!(group = %name, "Group given more than once; grading both");
                }
                let responses = weat::loader::load_answers(&path)
                    .with_context(|| format!("Failed to load responses for group {name:?}"))?;
                loaded.push((name, responses));
            }

            let grades = accuracy::compare_groups(&answer_key, &loaded)?;
            show_grades(&grades, cli.json, config.precision)?;
        }

        Commands::Demo => {
            let space = weat::sample::reference_embeddings()?;
            let test = weat::sample::reference_test();
            let report = run_weat(&test, &space)?;

            let grades = accuracy::compare_groups(
                &weat::sample::reference_answer_key(),
                &weat::sample::reference_groups(),
            )?;

            if cli.json {
                let combined = serde_json::json!({
                    "weat": report,
                    "accuracy": {
                        "groups": grades,
                        "gap": accuracy::accuracy_gap(&grades),
                    },
                });
                println!("{}", serde_json::to_string_pretty(&combined)?);
            } else {
                weat::output::terminal::display_weat_report(&test, &report, config.precision);
                weat::output::terminal::display_group_grades(&grades, config.precision);
                println!(
                    "\n{}",
                    "Reference data only. Pass --embeddings/--sets or use `weat accuracy` for your own."
                        .dimmed()
                );
            }
        }
    }

    Ok(())
}

/// Validate the test against the space (reporting every missing word at
/// once), then compute the statistic and its breakdown.
fn run_weat(test: &WeatTest, space: &EmbeddingSpace) -> Result<WeatReport> {
    test.validate(space)
        .context("Word sets do not fit the embedding space")?;
    let report = association::weat_report(test, space)?;
    info!(
        statistic = report.statistic,
        words = report.associations.len(),
        "Computed WEAT statistic"
    );
    Ok(report)
}

fn show_grades(grades: &[GroupGrade], json: bool, precision: usize) -> Result<()> {
    if json {
        let out = serde_json::json!({
            "groups": grades,
            "gap": accuracy::accuracy_gap(grades),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        weat::output::terminal::display_group_grades(grades, precision);
    }
    Ok(())
}
