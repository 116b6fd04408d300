use serde::{Deserialize, Serialize};

use super::QueryError;

/// Safety verdict returned by the flower safety service for one flower
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub flower: String,
    pub verified: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub source: String,
}

/// Wire shape. Some deployments omit `flower`.
#[derive(Deserialize)]
struct VerdictBody {
    #[serde(default)]
    flower: Option<String>,
    verified: bool,
    message: String,
    #[serde(default)]
    note: Option<String>,
    source: String,
}

impl Verdict {
    /// Decode a response body, falling back to `requested` when the service
    /// does not echo the flower name.
    pub fn from_json(body: &str, requested: &str) -> Result<Self, QueryError> {
        let body: VerdictBody =
            serde_json::from_str(body).map_err(|e| QueryError::MalformedResponse {
                message: e.to_string(),
            })?;

        let flower = body
            .flower
            .map(|f| f.trim().to_string())
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| requested.to_string());

        Ok(Self {
            flower,
            verified: body.verified,
            message: body.message,
            note: body.note.filter(|n| !n.trim().is_empty()),
            source: body.source,
        })
    }

    /// The vet note, shown only for unverified results
    pub fn visible_note(&self) -> Option<&str> {
        if self.verified {
            return None;
        }
        self.note.as_deref()
    }

    pub fn is_ai_generated(&self) -> bool {
        self.source.eq_ignore_ascii_case("llm")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_full_verdict() {
        let body = r#"{"flower":"Lilies","verified":false,"message":"Toxic","note":"Contact a vet","source":"LLM"}"#;
        let verdict = Verdict::from_json(body, "lilies").unwrap();

        assert_eq!(verdict.flower, "Lilies");
        assert!(!verdict.verified);
        assert_eq!(verdict.message, "Toxic");
        assert_eq!(verdict.visible_note(), Some("Contact a vet"));
        assert!(verdict.is_ai_generated());
    }

    #[test]
    fn test_missing_flower_uses_requested_name() {
        let body = r#"{"verified":true,"message":"Roses are safe","source":"database"}"#;
        let verdict = Verdict::from_json(body, "Roses").unwrap();
        assert_eq!(verdict.flower, "Roses");
        assert_eq!(verdict.note, None);
    }

    #[test]
    fn test_null_and_blank_fields_are_absent() {
        let body = r#"{"flower":"  ","verified":false,"message":"?","note":null,"source":"error"}"#;
        let verdict = Verdict::from_json(body, "Mystery").unwrap();
        assert_eq!(verdict.flower, "Mystery");
        assert_eq!(verdict.visible_note(), None);
    }

    #[test]
    fn test_note_hidden_when_verified() {
        let body = r#"{"flower":"roses","verified":true,"message":"Safe","note":"Watch for thorns","source":"database"}"#;
        let verdict = Verdict::from_json(body, "roses").unwrap();
        assert_eq!(verdict.note.as_deref(), Some("Watch for thorns"));
        assert_eq!(verdict.visible_note(), None);
        assert!(!verdict.is_ai_generated());
    }

    #[test]
    fn test_missing_required_field_is_malformed() {
        let body = r#"{"flower":"roses","message":"Safe","source":"database"}"#;
        let err = Verdict::from_json(body, "roses").unwrap_err();
        assert!(matches!(err, QueryError::MalformedResponse { .. }));
    }

    #[test]
    fn test_non_json_body_is_malformed() {
        let err = Verdict::from_json("<html>oops</html>", "roses").unwrap_err();
        assert!(matches!(err, QueryError::MalformedResponse { .. }));
    }
}
