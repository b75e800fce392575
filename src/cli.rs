// src/cli.rs
use crate::config::AppConfig;
use crate::export::{build_exporter, do_export, select_exporter, QualityTier};
use crate::prompt::read_quality_tier;
use crate::serializer::{Song, SongSerializer};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(name = "media-factory")]
#[command(about = "Media exporter and song serializer CLI", long_about = None)]
pub struct Cli {
    /// Configuration file (defaults to ./media-factory.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a test export for a quality tier
    Export {
        /// Quality tier (low, high, master); asked for interactively when omitted
        #[arg(short, long)]
        quality: Option<String>,

        /// Destination folder (overrides the configured one)
        #[arg(short, long)]
        folder: Option<PathBuf>,
    },

    /// Serialize a song
    Serialize {
        /// Output format (JSON, XML); defaults to the configured format
        #[arg(short, long)]
        format: Option<String>,

        /// Song ID
        #[arg(long)]
        id: String,

        /// Song title
        #[arg(short, long)]
        title: String,

        /// Song artist
        #[arg(short, long)]
        artist: String,
    },

    /// List the available quality tiers
    Tiers,
}

/// Format a tier row for the tiers table
fn format_tier_for_display(tier: QualityTier) -> String {
    let factory = tier.factory();
    format!(
        "{:<8} | {:<18} | {:<6} | {}",
        tier.as_str(),
        factory.video_exporter().codec().to_string(),
        factory.audio_exporter().codec().to_string(),
        factory.description()
    )
}

/// Execute a command from the CLI
pub fn execute_command(command: Commands, config: &AppConfig) -> Result<()> {
    match command {
        Commands::Export { quality, folder } => {
            // Resolve the exporter, asking the user when no tier was passed
            let exporter = match quality {
                Some(key) => select_exporter(&key)?,
                None => {
                    let stdin = io::stdin();
                    let mut input = stdin.lock();
                    let mut output = io::stdout();
                    let tier = read_quality_tier(&mut input, &mut output)
                        .context("Failed to read export quality")?;
                    build_exporter(tier)
                }
            };

            let folder = folder.unwrap_or_else(|| config.export.folder.clone());
            let report = do_export(&exporter, &config.export.payload(), &folder);

            for message in report.messages() {
                println!("{}", message);
            }
        },

        Commands::Serialize { format, id, title, artist } => {
            let format = format.unwrap_or_else(|| config.serializer.default_format.clone());
            let song = Song::new(id, title, artist);

            let encoded = SongSerializer::new()
                .serialize(&song, &format)
                .with_context(|| format!("Failed to serialize song {} as {}", song.id, format))?;

            info!("Serialized song {} as {}", song.id, format);
            println!("{}", encoded);
        },

        Commands::Tiers => {
            let mut stdout = io::stdout().lock();

            writeln!(stdout, "{:<8} | {:<18} | {:<6} | {}", "Tier", "Video", "Audio", "Description")?;
            writeln!(stdout, "{:-<8}-+-{:-<18}-+-{:-<6}-+-{:-<11}", "", "", "", "")?;
            for tier in QualityTier::ALL {
                writeln!(stdout, "{}", format_tier_for_display(tier))?;
            }
        },
    }

    Ok(())
}
