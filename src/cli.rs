use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "ytsum", about = "YouTube transcript summarizer and Q&A", version)]
pub struct Cli {
    /// YouTube video URL or video ID (reads from stdin if omitted)
    pub url: Option<String>,

    /// Ask a question about the video instead of summarizing
    #[arg(short, long)]
    pub question: Option<String>,

    /// Custom prompt prefix for summarization
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// List available caption languages and exit
    #[arg(short, long)]
    pub languages: bool,

    /// Print the transcript without generating a summary
    #[arg(short, long)]
    pub transcript_only: bool,

    /// Target word count for the summary (50-1000)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(50..=1000))]
    pub words: Option<u32>,

    /// Truncate the printed transcript to the first N words (500 if no value given)
    #[arg(
        long,
        num_args = 0..=1,
        default_missing_value = "500",
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub preview: Option<u32>,

    /// Output format for transcripts and failures: text (default), json
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Gemini model for summarization (default gemini-1.5-pro)
    #[arg(short, long)]
    pub model: Option<String>,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show resolution and fetch metadata
    #[arg(short, long)]
    pub verbose: bool,
}
