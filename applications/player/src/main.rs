/// EPTSS Player - headless playlist playback
use anyhow::Context;
use clap::{Parser, Subcommand};
use eptss_player::{PlayerConfig, PlaylistManifest, Session};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "eptss-player")]
#[command(about = "Play an EPTSS round playlist from a command script", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "EPTSS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run playback commands against a playlist
    Play {
        /// Playlist manifest (JSON)
        manifest: PathBuf,
        /// Read commands from this file instead of stdin
        #[arg(short, long)]
        script: Option<PathBuf>,
    },
    /// Print the playlist header
    Summary {
        /// Playlist manifest (JSON)
        manifest: PathBuf,
    },
    /// Print the effective configuration
    Config,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = PlayerConfig::load(cli.config.as_deref()).context("failed to load configuration")?;

    // Initialize tracing; RUST_LOG wins over the configured filter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match cli.command {
        Commands::Play { manifest, script } => {
            let manifest = PlaylistManifest::load(&manifest)
                .with_context(|| format!("failed to load {}", manifest.display()))?;
            let mut session = Session::new(manifest, config.playback.playlist_options());
            let mut stdout = io::stdout().lock();

            match script {
                Some(path) => {
                    let file = File::open(&path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                    session.run(BufReader::new(file), &mut stdout)?;
                }
                None => session.run(io::stdin().lock(), &mut stdout)?,
            }

            tracing::info!(liked = session.likes().len(), "session finished");
        }
        Commands::Summary { manifest } => {
            let manifest = PlaylistManifest::load(&manifest)
                .with_context(|| format!("failed to load {}", manifest.display()))?;
            let session = Session::new(manifest, config.playback.playlist_options());
            for line in session.summary_lines() {
                println!("{}", line);
            }
        }
        Commands::Config => {
            print!("{}", config.to_toml()?);
        }
    }

    Ok(())
}
