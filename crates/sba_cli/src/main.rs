//! sba - live match bet analyzer CLI
//!
//! One-shot analysis, an interactive session with win/loss feedback, and
//! weight inspection. Weights, bankroll and history live in `--data-dir`.

mod shell;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use validator::Validate;

use sba_core::{AnalysisResult, EngineConfig, FileStore, MatchStats, Session};

#[derive(Parser)]
#[command(name = "sba")]
#[command(about = "Analyze live football statistics and learn from bet outcomes", long_about = None)]
struct Cli {
    /// Directory holding weights, bankroll and history
    #[arg(long, global = true, env = "SBA_DATA_DIR", default_value = "sba_data")]
    data_dir: PathBuf,

    /// Engine config YAML file
    #[arg(long, global = true, env = "SBA_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one set of match statistics with the stored weights
    Analyze {
        /// Possession in percent
        #[arg(long)]
        possession: f64,

        /// Dangerous attacks
        #[arg(long)]
        da: i32,

        /// Shots on target
        #[arg(long)]
        tc: i32,

        /// Shots off target
        #[arg(long)]
        tnc: i32,

        #[arg(long)]
        corners: i32,

        #[arg(long)]
        league: String,

        /// Current score, display only
        #[arg(long, default_value = "")]
        score: String,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Interactive session: analyze, then report win or loss
    Session,

    /// Show current weights and bankroll
    Weights,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;
    let mut session = Session::with_config(FileStore::new(&cli.data_dir), config);

    match cli.command {
        Commands::Analyze { possession, da, tc, tnc, corners, league, score, json } => {
            let stats = MatchStats::new(possession, da, tc, tnc, corners, league).with_score(score);
            stats.validate().context("Invalid match statistics")?;

            let result = session.analyze(stats);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&result);
            }
        }

        Commands::Session => {
            let stdin = io::stdin();
            shell::run(&mut session, stdin.lock(), io::stdout())?;
        }

        Commands::Weights => {
            let w = session.weights();
            println!("Data dir:              {}", cli.data_dir.display());
            println!("Bankroll:              {:.0}", session.bankroll());
            println!("Attack weight:         {:.4}", w.attack_weight);
            println!("Shots on target:       {:.4}", w.shots_on_target_weight);
            println!("Shots off target:      {:.4}", w.shots_off_target_weight);
            println!("Corners weight:        {:.4}", w.corners_weight);
            println!("Bias:                  {:.4}", w.bias);
            println!("Feedback recorded:     {}", session.history().len());
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(EngineConfig::from_env_or_default()),
    }
}

pub(crate) fn format_result(result: &AnalysisResult) -> String {
    let mut out = format!(
        "Verdict:     {}\nConfidence:  {}%\nTotal shots: {}\n",
        result.verdict, result.confidence, result.total_shots
    );
    if result.sterile_flag {
        out.push_str("!! Sterile domination detected\n");
    }
    out.push_str(&result.explanation);
    out
}

fn print_result(result: &AnalysisResult) {
    println!("{}", format_result(result));
}
