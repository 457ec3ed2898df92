//! ytsum - A Rust CLI tool for summarizing YouTube videos
//!
//! This library fetches a transcript for a YouTube video (caption tracks when
//! available, otherwise audio download plus Whisper speech-to-text) and
//! summarizes it in a user-chosen language with Google Gemini.

pub mod audio;
pub mod captions;
pub mod cli;
pub mod config;
pub mod pipeline;
pub mod summarize;
pub mod transcribe;
pub mod youtube;

pub use captions::{CaptionClient, CaptionListing, CaptionTrack};
pub use config::Config;
pub use pipeline::{SummaryPipeline, TranscriptSource};

/// Result type used throughout the library
pub type Result<T> = anyhow::Result<T>;

/// Error types specific to the summarizer
#[derive(thiserror::Error, Debug)]
pub enum SummarizeError {
    #[error("Invalid YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("Caption service error: {0}")]
    CaptionsFailed(String),

    #[error("Audio download failed for {0}")]
    AudioDownloadFailed(String),

    #[error("Transcription failed: {0}")]
    TranscriptionFailed(String),

    #[error("Summarization failed: {0}")]
    SummarizationFailed(String),
}
