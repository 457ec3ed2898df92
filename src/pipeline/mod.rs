use anyhow::Context;
use indicatif::{ProgressBar, ProgressStyle};

use crate::audio::AudioFetcher;
use crate::captions::{self, CaptionClient, CaptionListing};
use crate::config::Config;
use crate::summarize::SummaryClient;
use crate::transcribe::SpeechClient;
use crate::youtube;
use crate::{Result, SummarizeError};

/// Which route produced the transcript text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranscriptSource {
    ManualCaptions,
    GeneratedCaptions,
    Speech,
}

impl TranscriptSource {
    pub fn describe(&self) -> &'static str {
        match self {
            TranscriptSource::ManualCaptions => "manually-created captions",
            TranscriptSource::GeneratedCaptions => "auto-generated captions",
            TranscriptSource::Speech => "speech-to-text",
        }
    }
}

/// End-to-end pipeline: URL -> transcript -> summary.
///
/// Owns one HTTP client shared by all service calls. Everything runs as a
/// single sequential await chain; there is no parallelism to manage.
pub struct SummaryPipeline {
    captions: CaptionClient,
    audio: AudioFetcher,
    speech: SpeechClient,
    summary: SummaryClient,
}

impl SummaryPipeline {
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            captions: CaptionClient::new(http.clone(), &config.youtube),
            audio: AudioFetcher::new(&config.audio),
            speech: SpeechClient::new(http.clone(), &config.whisper),
            summary: SummaryClient::new(http, &config.gemini),
        })
    }

    /// Fetch the best available transcript for a video URL.
    ///
    /// Caption tracks are preferred: the first manually-created track, then
    /// the first auto-generated one. When captions are disabled (or no track
    /// exists at all) the audio is downloaded and transcribed instead.
    pub async fn acquire_transcript(&self, video_url: &str) -> Result<(String, TranscriptSource)> {
        let video_id = youtube::video_id(video_url)
            .ok_or_else(|| SummarizeError::InvalidUrl(video_url.to_string()))?;

        match self.captions.list_tracks(&video_id).await? {
            CaptionListing::Tracks(tracks) => {
                tracing::debug!("Available caption tracks for {}:", video_id);
                for track in &tracks {
                    tracing::debug!(
                        " - {} (generated: {})",
                        track.language_code,
                        track.is_generated
                    );
                }

                match captions::select_track(&tracks) {
                    Some(track) => {
                        let entries = self.captions.fetch_entries(track).await?;
                        let source = if track.is_generated {
                            TranscriptSource::GeneratedCaptions
                        } else {
                            TranscriptSource::ManualCaptions
                        };
                        tracing::info!(
                            "Using {} ({})",
                            source.describe(),
                            track.language_code
                        );
                        Ok((captions::join_entries(&entries), source))
                    }
                    None => self.transcribe_fallback(video_url).await,
                }
            }
            CaptionListing::Disabled => self.transcribe_fallback(video_url).await,
        }
    }

    /// Audio download + speech-to-text route, used only when no caption
    /// track exists.
    async fn transcribe_fallback(&self, video_url: &str) -> Result<(String, TranscriptSource)> {
        println!("Captions are disabled. Using Whisper STT.");

        let audio_path = self
            .audio
            .download(video_url)
            .await
            .ok_or_else(|| SummarizeError::AudioDownloadFailed(video_url.to_string()))?;

        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        progress.set_message("Transcribing audio with Whisper...");

        let text = self.speech.transcribe(&audio_path).await?;

        progress.finish_with_message("Transcription complete");

        Ok((text, TranscriptSource::Speech))
    }

    /// Summarize a transcript in the target language.
    pub async fn summarize(&self, transcript: &str, target_language: &str) -> Result<String> {
        self.summary.summarize(transcript, target_language).await
    }
}
