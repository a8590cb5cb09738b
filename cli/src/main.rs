//! CLI entrypoint for questforge
//!
//! Reads a raw reply body (file or stdin), runs the offline recovery
//! pipeline for the chosen response kind, and prints either the typed
//! entity or the tagged error payload as JSON. Useful for replaying the
//! service's output when debugging a misbehaving prompt.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use questforge_application::{
    AnalyzeProfileUseCase, RecoverAlternateStartUseCase, RecoverPlotNodeUseCase,
    RecoverQuestionsUseCase, RecoverQuizUseCase,
};
use questforge_domain::RecoveryError;
use serde_json::Value;
use std::io::Read;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Recover a typed game entity from a raw LLM reply body.
#[derive(Parser)]
#[command(name = "questforge", version, about)]
struct Cli {
    /// Which response kind the body is expected to contain
    #[arg(value_enum)]
    kind: ResponseKind,

    /// Read the body from this file instead of stdin
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Pretty-print the output JSON
    #[arg(long)]
    pretty: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ResponseKind {
    /// Three personality questions
    Questions,
    /// Trait profile, classified into an archetype
    Profile,
    /// Five-question moral-dilemma quiz
    Quiz,
    /// One narrative node
    Plot,
    /// Alternate-start scenario
    Start,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let body = read_body(cli.input.as_deref())?;
    info!(bytes = body.len(), kind = ?cli.kind, "recovering reply body");

    let outcome: Result<Value, RecoveryError> = match cli.kind {
        ResponseKind::Questions => {
            RecoverQuestionsUseCase::recover(&body).map(|list| to_json(&list))
        }
        ResponseKind::Profile => {
            AnalyzeProfileUseCase::recover(&body).map(|analysis| to_json(&analysis))
        }
        ResponseKind::Quiz => RecoverQuizUseCase::recover(&body).map(|set| to_json(&set)),
        ResponseKind::Plot => RecoverPlotNodeUseCase::recover(&body).map(|node| to_json(&node)),
        ResponseKind::Start => {
            RecoverAlternateStartUseCase::recover(&body).map(|start| to_json(&start))
        }
    };

    match outcome {
        Ok(value) => {
            print_json(&value, cli.pretty)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            print_json(&err.to_payload(), cli.pretty)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn read_body(input: Option<&std::path::Path>) -> Result<String> {
    match input {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("failed to read stdin")?;
            Ok(body)
        }
    }
}

fn to_json<T: serde::Serialize>(entity: &T) -> Value {
    // Entities only contain JSON-representable data, so this cannot fail
    serde_json::to_value(entity).expect("entity serialization is infallible")
}

fn print_json(value: &Value, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        value.to_string()
    };
    println!("{rendered}");
    Ok(())
}
