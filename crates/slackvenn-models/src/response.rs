use serde::{Deserialize, Serialize};

// https://api.slack.com/web#evaluating_responses

/// The part of the envelope every Web API method answers with.
///
/// The method-specific payload sits next to these fields,
/// at the top level of the same object.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct ResponseStatus {
    pub ok: bool,
    /// Machine-readable error code, present when `ok` is false.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

// https://api.slack.com/docs/pagination#cursors

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
    /// Cursor for the next page. Empty on the last page.
    #[serde(default)]
    pub next_cursor: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_ignores_payload_fields() {
        let status: ResponseStatus =
            serde_json::from_str(r#"{"ok": false, "error": "channel_not_found", "members": []}"#)
                .unwrap();

        assert!(!status.ok);
        assert_eq!(status.error.as_deref(), Some("channel_not_found"));
        assert_eq!(status.warning, None);
    }
}
