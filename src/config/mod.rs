use std::path::PathBuf;

/// File name of the downloaded audio track. Not per-video: the program is
/// single-shot and each run overwrites the previous file.
const AUDIO_FILE_NAME: &str = "youtube_audio.mp3";

// Non-functional placeholders so the program can start without credentials
// and fail at the first authenticated call instead.
const GEMINI_KEY_PLACEHOLDER: &str = "your_google_gemini_api_key";
const OPENAI_KEY_PLACEHOLDER: &str = "your_openai_api_key";

#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini summarization service
    pub gemini: GeminiConfig,

    /// Whisper-compatible transcription service
    pub whisper: WhisperConfig,

    /// YouTube caption endpoints
    pub youtube: YoutubeConfig,

    /// Audio download settings
    pub audio: AudioConfig,
}

#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for the Generative Language API
    pub api_key: String,

    /// Model name used for summarization
    pub model: String,

    /// Service base URL
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct WhisperConfig {
    /// API key for the transcription service
    pub api_key: String,

    /// Transcription model name
    pub model: String,

    /// Service base URL
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct YoutubeConfig {
    /// Base URL for the InnerTube player API
    pub base_url: String,
}

#[derive(Debug, Clone)]
pub struct AudioConfig {
    /// yt-dlp executable name or path
    pub yt_dlp_path: String,

    /// Fixed output path for the downloaded audio track
    pub output_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            gemini: GeminiConfig {
                api_key: GEMINI_KEY_PLACEHOLDER.to_string(),
                model: "gemini-1.5-flash".to_string(),
                base_url: "https://generativelanguage.googleapis.com".to_string(),
            },
            whisper: WhisperConfig {
                api_key: OPENAI_KEY_PLACEHOLDER.to_string(),
                model: "whisper-1".to_string(),
                base_url: "https://api.openai.com".to_string(),
            },
            youtube: YoutubeConfig {
                base_url: "https://www.youtube.com".to_string(),
            },
            audio: AudioConfig {
                yt_dlp_path: "yt-dlp".to_string(),
                output_path: std::env::temp_dir().join(AUDIO_FILE_NAME),
            },
        }
    }
}

impl Config {
    /// Build the configuration from the environment. Loads a `.env` file
    /// when present.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(key) = std::env::var("GEMINI_API_KEY") {
            if !key.trim().is_empty() {
                config.gemini.api_key = key.trim().to_string();
            }
        }
        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.trim().is_empty() {
                config.whisper.api_key = key.trim().to_string();
            }
        }

        if config.gemini.api_key == GEMINI_KEY_PLACEHOLDER {
            tracing::warn!("GEMINI_API_KEY not set; summarization will fail");
        }
        if config.whisper.api_key == OPENAI_KEY_PLACEHOLDER {
            tracing::warn!("OPENAI_API_KEY not set; the speech-to-text fallback will fail");
        }

        config
    }
}
