use std::path::Path;

use reqwest::multipart::{Form, Part};

use crate::config::WhisperConfig;
use crate::{Result, SummarizeError};

/// Client for a Whisper-compatible speech-to-text endpoint.
pub struct SpeechClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl SpeechClient {
    pub fn new(http: reqwest::Client, config: &WhisperConfig) -> Self {
        Self {
            http,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Transcribe an audio file to plain text.
    ///
    /// The whole file is submitted in one request; any service-side size or
    /// duration limit surfaces as an error from the endpoint.
    pub async fn transcribe(&self, audio_path: &Path) -> Result<String> {
        let bytes = fs_err::read(audio_path)
            .map_err(|e| SummarizeError::TranscriptionFailed(e.to_string()))?;

        let filename = audio_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "audio.mp3".to_string());

        tracing::debug!("Submitting {} bytes of audio for transcription", bytes.len());

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(filename))
            .text("model", self.model.clone())
            .text("response_format", "text");

        let response = self
            .http
            .post(format!("{}/v1/audio/transcriptions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| SummarizeError::TranscriptionFailed(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SummarizeError::TranscriptionFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(SummarizeError::TranscriptionFailed(format!(
                "HTTP {}: {}",
                status,
                body.trim()
            ))
            .into());
        }

        Ok(body.trim_end().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn client(base_url: String) -> SpeechClient {
        SpeechClient::new(
            reqwest::Client::new(),
            &WhisperConfig {
                api_key: "test-key".to_string(),
                model: "whisper-1".to_string(),
                base_url,
            },
        )
    }

    fn scratch_audio() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"not really mp3 bytes").unwrap();
        file
    }

    #[tokio::test]
    async fn returns_plain_text_body() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1/audio/transcriptions")
            .match_header("authorization", "Bearer test-key")
            .with_status(200)
            .with_body("hello from the video\n")
            .create_async()
            .await;

        let audio = scratch_audio();
        let text = client(server.url()).transcribe(audio.path()).await.unwrap();
        assert_eq!(text, "hello from the video");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn error_status_carries_body() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/v1/audio/transcriptions")
            .with_status(401)
            .with_body(r#"{"error": "invalid api key"}"#)
            .create_async()
            .await;

        let audio = scratch_audio();
        let err = client(server.url()).transcribe(audio.path()).await.unwrap_err();
        let message = err.to_string();
        assert!(message.contains("401"));
        assert!(message.contains("invalid api key"));
    }

    #[tokio::test]
    async fn missing_file_is_an_error() {
        let err = client("http://127.0.0.1:9".to_string())
            .transcribe(Path::new("/nonexistent/youtube_audio.mp3"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Transcription failed"));
    }
}
