mod config;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use career_match::input::{load_json_file, parse_candidate, parse_job, parse_peers};
use career_match::{select_top_peers, ComparisonEngine, EngineError};

use crate::config::Config;

#[derive(Parser)]
#[command(name = "career-match", version, about = "Score a CV against a job or an alumni cohort")]
struct Cli {
    /// Print single-line JSON
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare a candidate with one job posting
    Job {
        #[arg(long)]
        candidate: PathBuf,
        #[arg(long)]
        job: PathBuf,
    },
    /// Compare a candidate with the longest-tenured peers of a cohort
    Peers {
        #[arg(long)]
        candidate: PathBuf,
        #[arg(long)]
        peers: PathBuf,
        /// Overrides PEER_LIMIT
        #[arg(long)]
        limit: Option<usize>,
    },
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let code = error_code(&err);
            eprintln!("error [{code}]: {err:#}");
            ExitCode::FAILURE
        }
    }
}

/// The engine's stable code when an `EngineError` sits anywhere in the chain.
fn error_code(err: &anyhow::Error) -> &'static str {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<EngineError>())
        .map_or("ERROR", EngineError::code)
}

fn run() -> Result<()> {
    let config = Config::from_env()?;

    // Logs go to stderr; stdout carries only JSON results
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("career_match={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let engine = ComparisonEngine::default();

    match cli.command {
        Command::Job { candidate, job } => {
            let candidate = parse_candidate(&load(&candidate)?)?;
            let job = parse_job(&load(&job)?)?;
            let result = engine.compare_with_job(&candidate, &job);
            info!(overall_score = result.overall_score, "Scored job {}", job.id);
            print_json(&result, cli.compact)
        }
        Command::Peers {
            candidate,
            peers,
            limit,
        } => {
            let candidate = parse_candidate(&load(&candidate)?)?;
            let cohort = parse_peers(&load(&peers)?)?;
            let limit = limit.unwrap_or(config.peer_limit);
            let selected = select_top_peers(&cohort, limit);
            info!("Selected {} of {} peers by tenure", selected.len(), cohort.len());
            let result = engine.compare_with_peers(&candidate, &selected);
            print_json(&result, cli.compact)
        }
    }
}

fn load(path: &Path) -> Result<serde_json::Value> {
    load_json_file(path).with_context(|| format!("Failed to load {}", path.display()))
}

fn print_json<T: Serialize>(value: &T, compact: bool) -> Result<()> {
    let out = if compact {
        serde_json::to_string(value)
    } else {
        serde_json::to_string_pretty(value)
    }
    .context("Failed to serialize result")?;
    println!("{out}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;

    #[test]
    fn test_error_code_found_through_context() {
        let err = Err::<(), _>(EngineError::InvalidArgument("candidate must be a JSON object".into()))
            .context("Failed to load cv.json")
            .unwrap_err();
        assert_eq!(error_code(&err), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_error_code_falls_back_for_other_errors() {
        assert_eq!(error_code(&anyhow!("PEER_LIMIT must be a number")), "ERROR");
    }
}
