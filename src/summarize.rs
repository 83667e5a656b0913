use eyre::{Result, bail};
use log::debug;

/// Default Gemini model for summarization and Q&A
pub const DEFAULT_MODEL: &str = "gemini-1.5-pro";

/// Default target word count for a summary
pub const DEFAULT_SUMMARY_WORDS: u32 = 250;

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Summarize transcript text with a target word count
pub async fn summarize(
    client: &reqwest::Client,
    model: &str,
    transcript_text: &str,
    word_count: u32,
) -> Result<String> {
    let prompt = format!("{}{transcript_text}", summary_prompt(word_count));
    generate(client, model, &prompt).await
}

/// Answer a free-form question about the transcript
pub async fn answer(
    client: &reqwest::Client,
    model: &str,
    transcript_text: &str,
    question: &str,
) -> Result<String> {
    let prompt = question_prompt(question, transcript_text);
    generate(client, model, &prompt).await
}

fn summary_prompt(word_count: u32) -> String {
    format!(
        "You are a YouTube video summarizer. You will be taking the transcript text \
         and summarizing the entire video and providing the important summary in points \
         within {word_count} words. Please provide the summary of the text given here: "
    )
}

fn question_prompt(question: &str, transcript_text: &str) -> String {
    format!("Use the transcript to answer this question:\n\n{question}\n\nTranscript:\n{transcript_text}\n")
}

/// Send a prompt to the Gemini generateContent endpoint and return the text
pub async fn generate(client: &reqwest::Client, model: &str, prompt: &str) -> Result<String> {
    let api_key = std::env::var("GOOGLE_API_KEY").map_err(|_| {
        eyre::eyre!("GOOGLE_API_KEY environment variable not set (required for Gemini summarization)")
    })?;

    debug!("Generating content via Gemini API with model {model}");

    let url = format!("{GEMINI_API_BASE}/{model}:generateContent?key={api_key}");

    let body = serde_json::json!({
        "contents": [
            {
                "parts": [
                    { "text": prompt }
                ]
            }
        ]
    });

    let resp = client
        .post(&url)
        .header("Content-Type", "application/json")
        .json(&body)
        .send()
        .await?;

    if !resp.status().is_success() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        bail!("Gemini API returned {status}: {body}");
    }

    let json: serde_json::Value = resp.json().await?;
    extract_gemini_text(&json)
}

fn extract_gemini_text(json: &serde_json::Value) -> Result<String> {
    if let Some(parts) = json
        .get("candidates")
        .and_then(|c| c.get(0))
        .and_then(|c| c.get("content"))
        .and_then(|c| c.get("parts"))
        .and_then(|p| p.as_array())
    {
        let text: String = parts
            .iter()
            .filter_map(|part| part.get("text")?.as_str().map(|s| s.to_string()))
            .collect::<Vec<_>>()
            .join("");
        if !text.is_empty() {
            return Ok(text);
        }
    }
    bail!("unexpected Gemini API response format");
}
