//! Answer Evaluator CLI
//!
//! An LLM-backed evaluation service for presentation question/answer pairs.

use answer_evaluator::{
    config::Config,
    llm::LlmClient,
    report::{QaPair, ReportGenerator},
    server,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Answer Evaluator - LLM-backed evaluation of question/answer pairs
#[derive(Parser)]
#[command(name = "answer-eval")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the evaluation HTTP server
    Serve {
        /// Address to bind to (overrides config)
        #[arg(short, long)]
        bind: Option<String>,
    },

    /// Evaluate pairs from a JSON file and print the report
    Evaluate {
        /// Path to a JSON file containing an array of pairs
        /// ([{"question": ..., "userAnswer": ...}, ...])
        file: PathBuf,

        /// Output the report as JSON instead of formatted text
        #[arg(long)]
        json: bool,
    },

    /// Test LLM connection
    Test,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind } => cmd_serve(bind).await,
        Commands::Evaluate { file, json } => cmd_evaluate(file, json).await,
        Commands::Test => cmd_test().await,
    }
}

async fn cmd_serve(bind: Option<String>) -> Result<()> {
    let mut config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    if let Some(bind) = bind {
        config.server.bind_addr = bind;
    }

    server::run(&config).await
}

async fn cmd_evaluate(file: PathBuf, json: bool) -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    let content = std::fs::read_to_string(&file)
        .with_context(|| format!("Failed to read '{}'", file.display()))?;
    let pairs: Vec<QaPair> =
        serde_json::from_str(&content).context("Failed to parse pairs file")?;

    println!("Evaluating {} pair(s) with model: {}", pairs.len(), config.llm.model);

    let start = Instant::now();

    let client = LlmClient::new(config.llm);
    let reporter = ReportGenerator::new(client);
    let report = reporter.generate(&pairs).await.context("Evaluation failed")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{}", "─".repeat(60));
    for (i, row) in report.iter().enumerate() {
        println!("{:>2}. {}", i + 1, row.question);
        println!("    User answer:      {}", row.user_answer);
        println!("    Reference answer: {}", row.reference_answer);
        match row.similarity_score {
            Some(score) => println!("    Similarity:       {:.2}", score),
            None => println!("    Similarity:       n/a (reply was not valid JSON)"),
        }
        if !row.missing_points.is_empty() {
            println!("    Missing points:   {}", row.missing_points);
        }
        println!();
    }
    println!("{}", "─".repeat(60));
    println!("Evaluated {} pair(s) in {:.2?}", report.len(), start.elapsed());

    Ok(())
}

async fn cmd_test() -> Result<()> {
    println!("Testing LLM connection...\n");

    let config = Config::load().context("Failed to load configuration")?;

    println!("Configuration:");
    println!("  API Base:  {}", config.llm.api_base);
    println!("  Model:     {}", config.llm.model);
    println!(
        "  API Key:   {}...",
        &config.llm.api_key[..config.llm.api_key.len().min(8)]
    );
    println!();

    if let Err(e) = config.validate() {
        println!("Configuration error: {}", e);
        return Ok(());
    }

    let client = LlmClient::new(config.llm);

    println!("Sending test request...");
    match client.test_connection().await {
        Ok(()) => {
            println!("Connection successful!");
        }
        Err(e) => {
            println!("Connection failed: {}", e);
        }
    }

    Ok(())
}
