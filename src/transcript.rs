use log::debug;

use crate::{Fragment, Result, Transcript, youtube};

/// Default number of words in a transcript preview
pub const DEFAULT_PREVIEW_WORDS: usize = 500;

/// Fetch the caption track for a resolved video ID and normalize it into a
/// single text blob, with an optional word-bounded preview.
///
/// There is no partial success: either every fragment is concatenated or a
/// typed failure comes back.
pub async fn fetch(
    client: &reqwest::Client,
    video_id: &str,
    preview_words: Option<usize>,
) -> Result<Transcript> {
    let fragments = youtube::fetch_captions(client, video_id).await?;
    debug!("Fetched {} caption fragments for {video_id}", fragments.len());

    let full_text = normalize(&fragments);
    let preview = preview_words.map(|n| preview(&full_text, n));

    Ok(Transcript {
        video_id: video_id.to_string(),
        full_text,
        preview,
    })
}

/// Concatenate fragment text in playback order, one space before each
/// fragment. The output therefore starts with a leading space; the existing
/// prompt templates expect that shape, so keep it.
pub fn normalize(fragments: &[Fragment]) -> String {
    let mut text = String::new();
    for fragment in fragments {
        text.push(' ');
        text.push_str(&fragment.text);
    }
    text
}

/// First `words` whitespace-separated tokens of `text`, rejoined with single spaces
pub fn preview(text: &str, words: usize) -> String {
    text.split_whitespace().take(words).collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(text: &str, start: f64) -> Fragment {
        Fragment {
            text: text.to_string(),
            start,
            duration: 1.0,
        }
    }

    #[test]
    fn test_normalize_leading_space() {
        let fragments = vec![fragment("Hello", 0.0), fragment("world", 1.0)];
        assert_eq!(normalize(&fragments), " Hello world");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize(&[]), "");
    }

    #[test]
    fn test_normalize_is_deterministic() {
        let fragments = vec![fragment("a", 0.0), fragment("b", 1.0), fragment("c", 2.0)];
        assert_eq!(normalize(&fragments), normalize(&fragments));
    }

    #[test]
    fn test_preview_truncates() {
        assert_eq!(preview("a b c d", 2), "a b");
    }

    #[test]
    fn test_preview_shorter_than_limit() {
        assert_eq!(preview(" Hello world", 500), "Hello world");
    }

    #[test]
    fn test_preview_collapses_whitespace() {
        assert_eq!(preview("  a   b\nc ", 3), "a b c");
    }
}
