use std::path::PathBuf;
use std::process::Stdio;

use tokio::process::Command;

use crate::config::AudioConfig;

/// Audio fetcher backed by yt-dlp.
///
/// Downloads the best available audio track to a fixed path in the system
/// temp directory, overwriting whatever a previous run left there. The file
/// is never cleaned up.
pub struct AudioFetcher {
    yt_dlp_path: String,
    output_path: PathBuf,
}

impl AudioFetcher {
    pub fn new(config: &AudioConfig) -> Self {
        Self {
            yt_dlp_path: config.yt_dlp_path.clone(),
            output_path: config.output_path.clone(),
        }
    }

    /// Check if yt-dlp is available
    pub async fn check_availability(&self) -> bool {
        let output = Command::new(&self.yt_dlp_path)
            .arg("--version")
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        output.map(|o| o.status.success()).unwrap_or(false)
    }

    /// Download the audio track for a video.
    ///
    /// Takes the original watch URL, not the parsed identifier; yt-dlp does
    /// its own URL handling. Returns `None` when the download fails or the
    /// expected file is missing afterwards, so the caller decides how to
    /// report it.
    pub async fn download(&self, url: &str) -> Option<PathBuf> {
        if !self.check_availability().await {
            tracing::warn!(
                "{} is not available. Install it from https://github.com/yt-dlp/yt-dlp",
                self.yt_dlp_path
            );
            return None;
        }

        println!("Downloading audio to: {}", self.output_path.display());

        let output = Command::new(&self.yt_dlp_path)
            .args([
                "--format",
                "bestaudio/best",
                "--output",
                &self.output_path.to_string_lossy(),
                "--force-overwrites",
                "--no-playlist",
                "--quiet",
                url,
            ])
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => {}
            Ok(output) => {
                let error = String::from_utf8_lossy(&output.stderr);
                tracing::warn!("yt-dlp download failed: {}", error.trim());
                return None;
            }
            Err(e) => {
                tracing::warn!("failed to run {}: {}", self.yt_dlp_path, e);
                return None;
            }
        }

        if !self.output_path.exists() {
            tracing::warn!("audio file not found at {}", self.output_path.display());
            return None;
        }

        Some(self.output_path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fetcher_with_missing_binary() -> AudioFetcher {
        AudioFetcher::new(&AudioConfig {
            yt_dlp_path: "yt-dlp-definitely-not-installed".to_string(),
            output_path: std::env::temp_dir().join("youtube_audio.mp3"),
        })
    }

    #[test]
    fn missing_binary_fails_availability_check() {
        let fetcher = fetcher_with_missing_binary();
        assert!(!tokio_test::block_on(fetcher.check_availability()));
    }

    #[test]
    fn download_with_missing_binary_returns_none() {
        let fetcher = fetcher_with_missing_binary();
        let result = tokio_test::block_on(fetcher.download("https://youtu.be/xyz789"));
        assert!(result.is_none());
    }
}
