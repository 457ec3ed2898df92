use std::io::{self, Write};

use clap::Parser;
use console::style;

#[derive(Parser)]
#[command(
    name = "ytsum",
    about = "Summarize YouTube videos from captions or Whisper speech-to-text using Google Gemini",
    version,
    long_about = "Fetches the transcript of a YouTube video (caption tracks when available, \
                  otherwise audio download plus Whisper speech-to-text) and summarizes it in a \
                  language of your choice with Google Gemini."
)]
pub struct Cli {
    /// YouTube video URL (prompted for when omitted)
    #[arg(short, long, value_name = "URL")]
    pub url: Option<String>,

    /// Language for the summary, free text (prompted for when omitted)
    #[arg(short, long, value_name = "LANG")]
    pub language: Option<String>,
}

/// Print a prompt label and read one trimmed line from stdin.
pub fn prompt(label: &str) -> io::Result<String> {
    print!("{}", style(label).bold());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
