use crate::{Error, Transcript};

/// Render a transcript for display: the preview when one was requested,
/// the full text otherwise
pub fn render_text(transcript: &Transcript) -> String {
    match &transcript.preview {
        Some(preview) => preview.clone(),
        None => transcript.full_text.clone(),
    }
}

/// Render a transcript as a JSON object with identifier, fullText and,
/// when requested, preview fields
pub fn render_json(transcript: &Transcript) -> String {
    serde_json::to_string_pretty(transcript).unwrap() // safe: Transcript holds only strings
}

/// Render a failure as a JSON object with kind and message fields
pub fn render_failure_json(err: &Error) -> String {
    serde_json::json!({
        "kind": err.kind(),
        "message": err.to_string(),
    })
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_transcript(preview: Option<&str>) -> Transcript {
        Transcript {
            video_id: "test123".to_string(),
            full_text: " Hello world This is a test".to_string(),
            preview: preview.map(|p| p.to_string()),
        }
    }

    #[test]
    fn test_render_text_full() {
        let t = sample_transcript(None);
        assert_eq!(render_text(&t), " Hello world This is a test");
    }

    #[test]
    fn test_render_text_prefers_preview() {
        let t = sample_transcript(Some("Hello world"));
        assert_eq!(render_text(&t), "Hello world");
    }

    #[test]
    fn test_render_json_shape() {
        let t = sample_transcript(Some("Hello world"));
        let json: serde_json::Value = serde_json::from_str(&render_json(&t)).unwrap();
        assert_eq!(json["identifier"], "test123");
        assert_eq!(json["fullText"], " Hello world This is a test");
        assert_eq!(json["preview"], "Hello world");
    }

    #[test]
    fn test_render_json_omits_missing_preview() {
        let t = sample_transcript(None);
        let json: serde_json::Value = serde_json::from_str(&render_json(&t)).unwrap();
        assert!(json.get("preview").is_none());
    }

    #[test]
    fn test_render_failure_json() {
        let err = Error::CaptionsDisabled("test123".to_string());
        let json: serde_json::Value = serde_json::from_str(&render_failure_json(&err)).unwrap();
        assert_eq!(json["kind"], "CaptionsDisabled");
        assert!(json["message"].as_str().unwrap().contains("test123"));
        assert!(json.get("fullText").is_none());
    }
}
