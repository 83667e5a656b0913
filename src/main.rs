use std::io::{self, BufRead};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, bail};
use log::{debug, info};

mod cli;

use cli::{Cli, OutputFormat};
use ytsum::summarize;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytsum.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytsum")
        .join("logs")
}

fn report_failure(err: &ytsum::Error, format: OutputFormat) {
    match format {
        OutputFormat::Json => println!("{}", ytsum::output::render_failure_json(err)),
        OutputFormat::Text => eprintln!("error: {err}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let cli = Cli::parse();

    // Load config file (non-fatal if missing/invalid)
    let config = ytsum::config::Config::load().unwrap_or_default();

    if cli.verbose {
        let config_path = ytsum::config::config_path();
        if config_path.exists() {
            eprintln!("Config: {}", config_path.display());
        }
    }

    // CLI flags take priority over config defaults
    let model = cli
        .model
        .clone()
        .or(config.default_model)
        .unwrap_or_else(|| summarize::DEFAULT_MODEL.to_string());
    let summary_words = cli
        .words
        .or(config.summary_words)
        .unwrap_or(summarize::DEFAULT_SUMMARY_WORDS);
    let preview_words = cli
        .preview
        .map(|n| n as usize)
        .or(config.preview_words.filter(|&n| n >= 1));

    let client = reqwest::Client::new();

    // Collect URLs: from arg or stdin
    let urls = if let Some(ref url) = cli.url {
        vec![url.clone()]
    } else {
        let stdin = io::stdin();
        stdin.lock().lines().collect::<Result<Vec<_>, _>>()?
    };

    if urls.is_empty() {
        bail!("no URL or video ID provided\n\nUsage: ytsum <URL>\n       echo <URL> | ytsum");
    }

    let mut failures = 0_usize;

    for url_input in &urls {
        let url_input = url_input.trim();
        if url_input.is_empty() {
            continue;
        }

        let video_id = match ytsum::resolve_video_id(url_input) {
            Ok(id) => id,
            Err(e) => {
                report_failure(&e, cli.format);
                failures += 1;
                continue;
            }
        };

        if cli.verbose {
            eprintln!("Video ID: {video_id}");
        }

        if cli.languages {
            match ytsum::youtube::list_languages(&client, &video_id).await {
                Ok(langs) => {
                    debug!("{} caption languages for {video_id}", langs.len());
                    match cli.format {
                        OutputFormat::Text => println!("{}", langs.join(", ")),
                        OutputFormat::Json => println!(
                            "{}",
                            serde_json::json!({ "identifier": video_id, "languages": langs })
                        ),
                    }
                }
                Err(e) => {
                    report_failure(&e, cli.format);
                    failures += 1;
                }
            }
            continue;
        }

        let transcript = match ytsum::transcript::fetch(&client, &video_id, preview_words).await {
            Ok(t) => t,
            Err(e) => {
                report_failure(&e, cli.format);
                failures += 1;
                continue;
            }
        };

        let rendered = if cli.transcript_only {
            match cli.format {
                OutputFormat::Text => ytsum::output::render_text(&transcript),
                OutputFormat::Json => ytsum::output::render_json(&transcript),
            }
        } else if let Some(ref question) = cli.question {
            summarize::answer(&client, &model, &transcript.full_text, question).await?
        } else if let Some(ref prefix) = cli.prompt {
            summarize::generate(&client, &model, &format!("{prefix}{}", transcript.full_text)).await?
        } else {
            summarize::summarize(&client, &model, &transcript.full_text, summary_words).await?
        };

        if let Some(ref path) = cli.output {
            std::fs::write(path, &rendered)?;
            if cli.verbose {
                eprintln!("Output written to: {}", path.display());
            }
        } else {
            println!("{rendered}");
        }
    }

    if failures > 0 {
        bail!("{failures} of {} inputs failed", urls.len());
    }

    Ok(())
}
