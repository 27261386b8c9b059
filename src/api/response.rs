/// Interpretation of API responses
///
/// Both endpoints answer with either a bare JSON array of entries, or an
/// envelope `{ "error": "...", "<key>": [...] }` carrying a message and an
/// optional partial list. Anything else is a protocol violation.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::FetchError;
use crate::state::data::{DownloadableItem, SelectableVersion};

/// An entry type served as a list by one of the endpoints
pub trait Listing: DeserializeOwned + Clone {
    /// Key holding the partial list inside an error envelope
    const ENVELOPE_KEY: &'static str;
    /// What is being fetched, used in user-facing messages
    const NOUN: &'static str;
    /// Message shown when the server returns a valid empty list
    const EMPTY_NOTICE: &'static str;
    /// Message for a response of unexpected shape
    const MALFORMED: &'static str;

    /// Split a fetch result into the entries to display and the message to show
    fn settle(result: Result<Listed<Self>, FetchError>) -> (Vec<Self>, Option<String>) {
        match result {
            Ok(Listed::Entries(entries)) => (entries, None),
            Ok(Listed::Empty) => (Vec::new(), Some(Self::EMPTY_NOTICE.to_string())),
            Ok(Listed::Rejected { message, partial }) => (partial, Some(message)),
            Err(err) => (Vec::new(), Some(format!("Error fetching {}: {}", Self::NOUN, err))),
        }
    }
}

impl Listing for SelectableVersion {
    const ENVELOPE_KEY: &'static str = "versions";
    const NOUN: &'static str = "versions list";
    const EMPTY_NOTICE: &'static str = "No versions found for this product.";
    const MALFORMED: &'static str = "Received invalid data structure for versions list from API.";
}

impl Listing for DownloadableItem {
    const ENVELOPE_KEY: &'static str = "items";
    const NOUN: &'static str = "download items";
    const EMPTY_NOTICE: &'static str = "No downloadable items found for this version.";
    const MALFORMED: &'static str = "Received invalid data structure for download items.";
}

/// A successfully interpreted response
#[derive(Debug, Clone, PartialEq)]
pub enum Listed<T> {
    /// A non-empty list
    Entries(Vec<T>),
    /// A valid, empty list
    Empty,
    /// The server reported an error, possibly with some entries anyway
    Rejected { message: String, partial: Vec<T> },
}

/// Interpret a raw HTTP status and body
pub fn interpret<T: Listing>(status: u16, body: &str) -> Result<Listed<T>, FetchError> {
    if !(200..300).contains(&status) {
        let message = serde_json::from_str::<Value>(body)
            .ok()
            .as_ref()
            .and_then(error_message)
            .unwrap_or_else(|| format!("Failed to fetch {} ({})", T::NOUN, status));
        return Err(FetchError::Transport(message));
    }

    let value: Value =
        serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;

    if let Some(message) = error_message(&value) {
        let partial = match value.get(T::ENVELOPE_KEY) {
            None | Some(Value::Null) => Vec::new(),
            Some(list) => entries::<T>(list.clone())?,
        };
        return Ok(Listed::Rejected { message, partial });
    }

    match value {
        Value::Array(_) => {
            let list = entries::<T>(value)?;
            if list.is_empty() {
                Ok(Listed::Empty)
            } else {
                Ok(Listed::Entries(list))
            }
        }
        _ => Err(FetchError::MalformedResponse(T::MALFORMED)),
    }
}

/// Non-empty `error` string of an envelope object
fn error_message(value: &Value) -> Option<String> {
    match value.get("error") {
        Some(Value::String(message)) if !message.is_empty() => Some(message.clone()),
        _ => None,
    }
}

fn entries<T: Listing>(value: Value) -> Result<Vec<T>, FetchError> {
    serde_json::from_value(value).map_err(|_| FetchError::MalformedResponse(T::MALFORMED))
}

#[cfg(test)]
mod tests {
    use super::*;

    const VERSION: &str = r#"{
        "idForClientSelection": "k1",
        "displayVersion": "17.6.1",
        "version": "17.6.1",
        "build": "24319023",
        "platformOrArch": "windows",
        "gzFilePath": "ws/17.6.1/24319023/windows/core/metadata.xml.gz"
    }"#;

    #[test]
    fn test_direct_list() {
        let body = format!("[{}]", VERSION);
        match interpret::<SelectableVersion>(200, &body).unwrap() {
            Listed::Entries(list) => assert_eq!(list[0].selection_key, "k1"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_empty_list_is_not_a_failure() {
        let listed = interpret::<SelectableVersion>(200, "[]").unwrap();
        assert_eq!(listed, Listed::Empty);

        let (entries, notice) = SelectableVersion::settle(Ok(listed));
        assert!(entries.is_empty());
        assert_eq!(notice.as_deref(), Some("No versions found for this product."));
    }

    #[test]
    fn test_envelope_with_partial_list() {
        let body = format!(r#"{{"error": "Some versions failed", "versions": [{}]}}"#, VERSION);
        let listed = interpret::<SelectableVersion>(200, &body).unwrap();

        let (entries, notice) = SelectableVersion::settle(Ok(listed));
        assert_eq!(entries.len(), 1);
        assert_eq!(notice.as_deref(), Some("Some versions failed"));
    }

    #[test]
    fn test_envelope_without_list_defaults_to_empty() {
        let listed = interpret::<DownloadableItem>(200, r#"{"error": "Manifest missing"}"#).unwrap();
        assert_eq!(
            listed,
            Listed::Rejected { message: "Manifest missing".to_string(), partial: Vec::new() }
        );
    }

    #[test]
    fn test_unexpected_shape_is_malformed() {
        let err = interpret::<DownloadableItem>(200, r#"{"items": []}"#).unwrap_err();
        assert_eq!(
            err,
            FetchError::MalformedResponse("Received invalid data structure for download items.")
        );

        // An empty error string does not make a valid envelope
        let err = interpret::<SelectableVersion>(200, r#"{"error": ""}"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));

        // Array entries of the wrong shape
        let err = interpret::<SelectableVersion>(200, r#"[{"name": 1}]"#).unwrap_err();
        assert!(matches!(err, FetchError::MalformedResponse(_)));
    }

    #[test]
    fn test_invalid_json_is_decode_error() {
        let err = interpret::<SelectableVersion>(200, "<html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_error_status_prefers_body_message() {
        let err = interpret::<SelectableVersion>(404, r#"{"error": "Unknown product"}"#).unwrap_err();
        assert_eq!(err, FetchError::Transport("Unknown product".to_string()));

        let (_, notice) = SelectableVersion::settle(Err(err));
        assert_eq!(notice.as_deref(), Some("Error fetching versions list: Unknown product"));
    }

    #[test]
    fn test_error_status_falls_back_to_generic_message() {
        let err = interpret::<DownloadableItem>(502, "Bad Gateway").unwrap_err();
        assert_eq!(
            err,
            FetchError::Transport("Failed to fetch download items (502)".to_string())
        );
    }
}
