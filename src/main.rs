use clap::Parser;
use song_scout::utils::{logger, validation::Validate};
use song_scout::{
    AggregatedOutcome, CliConfig, HttpBackingTrackProvider, HttpContentProvider, QueryOrchestrator,
    QueryStatus, Result,
};
use std::time::Duration;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting song-scout CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let outcome = match build_orchestrator(&config) {
        Ok(orchestrator) => {
            orchestrator
                .run(&config.song, config.content_type.as_str())
                .await
        }
        Err(e) => {
            tracing::error!("❌ Orchestration failed: {}", e);
            AggregatedOutcome::unexpected(
                Some(config.content_type),
                format!(
                    "An unexpected error occurred while fetching data: {}. Please try again.",
                    e
                ),
            )
        }
    };

    if config.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        render(&config.song, &outcome);
    }

    match outcome.status {
        QueryStatus::ValidationError | QueryStatus::UnexpectedError => std::process::exit(1),
        _ => Ok(()),
    }
}

fn build_orchestrator(
    config: &CliConfig,
) -> Result<QueryOrchestrator<HttpContentProvider, HttpBackingTrackProvider>> {
    let timeout = Duration::from_secs(config.timeout_seconds);
    let content = HttpContentProvider::new(config.content_endpoint.clone(), timeout)?;
    let backing_tracks = HttpBackingTrackProvider::new(config.track_endpoint.clone(), timeout)?;
    Ok(QueryOrchestrator::new(content, backing_tracks))
}

fn render(title: &str, outcome: &AggregatedOutcome) {
    match outcome.status {
        QueryStatus::Ok => {
            if let Some(kind) = outcome.requested {
                println!("✅ Found {} for \"{}\"", kind, title);
            }
        }
        QueryStatus::ValidationError | QueryStatus::UnexpectedError => {
            if let Some(message) = &outcome.message {
                eprintln!("❌ {}", message);
            }
            return;
        }
        _ => {}
    }

    if let Some(message) = &outcome.message {
        println!("ℹ️  {}", message);
    }
    if let Some(lyrics) = &outcome.content.lyrics {
        println!("\n🎤 Lyrics:\n{}", lyrics);
    }
    if let Some(chords) = &outcome.content.chords {
        println!("\n🎸 Chords:\n{}", chords);
    }
    if let Some(tabs) = &outcome.content.tabs {
        println!("\n🎼 Tabs:\n{}", tabs);
    }
    if let Some(url) = &outcome.backing_track_url {
        println!("\n🎵 Backing track: {}", url);
    }
}
