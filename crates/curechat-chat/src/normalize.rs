//! Model-output normalization.
//!
//! Gemini frequently wraps its JSON answer in markdown code fences despite
//! the prompt's instruction not to. Stripping the fences and tolerating
//! non-JSON output are expected branches here, not errors.

use serde_json::{json, Value};

/// Specialty used in the fallback envelope when the model output is not JSON.
pub const FALLBACK_SPECIALTY: &str = "General Physician";

/// Remove every literal code-fence marker and trim surrounding whitespace.
pub fn clean_model_text(raw: &str) -> String {
    raw.replace("```json", "")
        .replace("```", "")
        .trim()
        .to_string()
}

/// Parse cleaned model text as JSON.
///
/// Valid JSON passes through verbatim, without any check that the expected
/// fields are present. Anything else becomes the fallback envelope carrying
/// the cleaned text as the reply.
pub fn normalize_reply(raw: &str) -> Value {
    let clean = clean_model_text(raw);
    serde_json::from_str(&clean).unwrap_or_else(|_| {
        json!({
            "specialty": FALLBACK_SPECIALTY,
            "reply": clean,
            "isEmergency": false,
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_json_fence() {
        let raw = "```json\n{\"specialty\": \"Cardiology\"}\n```";
        assert_eq!(clean_model_text(raw), "{\"specialty\": \"Cardiology\"}");
    }

    #[test]
    fn strips_plain_fence() {
        let raw = "```\n{\"reply\": \"ok\"}\n```";
        assert_eq!(clean_model_text(raw), "{\"reply\": \"ok\"}");
    }

    #[test]
    fn unfenced_text_only_trimmed() {
        assert_eq!(clean_model_text("  hello  "), "hello");
    }

    #[test]
    fn fenced_json_round_trips() {
        let original = json!({
            "specialty": "Cardiology",
            "reply": "Please see a cardiologist today.",
            "isEmergency": true,
        });
        let wrapped = format!("```json\n{}\n```", original);
        assert_eq!(normalize_reply(&wrapped), original);
    }

    #[test]
    fn valid_json_passes_through_unvalidated() {
        // Missing expected fields still passes through untouched.
        let raw = r#"{"unexpected": 42}"#;
        assert_eq!(normalize_reply(raw), json!({"unexpected": 42}));
    }

    #[test]
    fn non_json_falls_back_to_envelope() {
        let value = normalize_reply("Drink fluids and rest.");
        assert_eq!(value["specialty"], FALLBACK_SPECIALTY);
        assert_eq!(value["reply"], "Drink fluids and rest.");
        assert_eq!(value["isEmergency"], false);
    }

    #[test]
    fn fallback_reply_is_cleaned_text() {
        let value = normalize_reply("```\nnot json at all\n```");
        assert_eq!(value["reply"], "not json at all");
    }
}
