use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use facescore::{config, input, report, report::OutputFormat, ProportionScorer};
use log::{info, warn};

#[derive(Parser)]
#[command(name = "facescore")]
#[command(
    version,
    about = "Facial proportion scores from 68-point landmark detections"
)]
struct Cli {
    /// Config file (defaults to the built-in path)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score every face in a detections JSON file
    Score {
        /// Detections file, or `-` for stdin
        file: PathBuf,
        /// Output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
        /// Clamp displayed sub-scores to 0-10 (overrides config)
        #[arg(long)]
        clamp: bool,
    },
    /// Open config file in editor
    Config,
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .format_target(false)
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();
    let cfg = config::load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Score {
            file,
            format,
            clamp,
        } => {
            let format = format.unwrap_or(cfg.format);
            score(&file, format, clamp || cfg.clamp_display)
        }
        Commands::Config => open_config(cli.config),
    }
}

fn score(file: &Path, format: OutputFormat, clamp_display: bool) -> Result<()> {
    let faces = input::load_detections(file).context("Failed to load detections")?;

    let scorer = ProportionScorer::default();
    if faces.is_empty() {
        warn!("No face detected in {}", file.display());
    } else {
        info!(
            "Scoring {} face(s) from {} ({}-point landmarks)",
            faces.len(),
            file.display(),
            scorer.scheme().count
        );
    }

    let scores = scorer.score_all(&faces);
    for face in &scores {
        if let Err(e) = &face.result {
            warn!("Face #{}: {}", face.index + 1, e);
        }
    }

    let out = report::render(&scores, format, clamp_display)?;
    print!("{}", out);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}

fn open_config(path: Option<PathBuf>) -> Result<()> {
    let config_path = path.unwrap_or_else(|| config::CONFIG_PATH.to_path_buf());
    let editor = env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());

    if !config_path.exists() {
        config::save_config(&config::Config::default(), Some(config_path.as_path()))
            .context("Failed to write default config")?;
    }

    info!("Opening config file: {:?}", config_path);

    let status = std::process::Command::new(editor)
        .arg(&config_path)
        .status()
        .context("Failed to open editor")?;

    if !status.success() {
        anyhow::bail!("Editor exited with non-zero status");
    }

    Ok(())
}
