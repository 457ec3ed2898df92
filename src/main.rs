use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ytsum::cli::{self, Cli};
use ytsum::{Config, SummaryPipeline};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ytsum=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    let video_url = match cli.url {
        Some(url) => url,
        None => cli::prompt("Enter the YouTube video URL: ")?,
    };
    let target_language = match cli.language {
        Some(language) => language,
        None => cli::prompt("Enter the language for the summary (e.g., English, Vietnamese): ")?,
    };

    let pipeline = SummaryPipeline::new(&config)?;

    println!("Fetching transcript...");
    let (transcript, source) = pipeline.acquire_transcript(&video_url).await?;
    tracing::info!("Transcript acquired via {}", source.describe());
    println!("Transcript successfully fetched.");

    println!("Summarizing with Google Gemini...");
    let summary = pipeline.summarize(&transcript, &target_language).await?;

    println!("\n=== Video Summary ===");
    println!("{summary}");

    Ok(())
}
