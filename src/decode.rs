use serde_json::Value as JsonValue;

use crate::FetchError;

/// Decodes the body of a success response.
///
/// Malformed JSON is a classified failure, not a panic: the caller gets
/// [`FetchError::Decode`] carrying the parse error.
pub(crate) fn decode_success_body(text: &str) -> Result<JsonValue, FetchError> {
    serde_json::from_str(text)
        .map_err(|err| FetchError::Decode(format!("invalid response JSON: {err}")))
}

/// Best-effort decode of a non-success response body.
///
/// Returns the parsed JSON when the body parses, the raw text wrapped as a
/// JSON string when it does not, and `None` for an empty body. The fallback
/// is chosen here, explicitly, rather than by swallowing a parse error at
/// the call site.
pub(crate) fn decode_error_body(text: &str) -> Option<JsonValue> {
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str(text) {
        Ok(value) => Some(value),
        Err(_) => Some(JsonValue::String(text.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::{decode_error_body, decode_success_body};
    use crate::FetchError;
    use serde_json::{json, Value as JsonValue};

    #[test]
    fn success_body_parses_json() {
        let value = decode_success_body(r#"{"hello":"world"}"#).expect("must parse");
        assert_eq!(value, json!({"hello": "world"}));
    }

    #[test]
    fn malformed_success_body_is_decode_error() {
        let err = decode_success_body("{not json").expect_err("must fail");
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn error_body_parses_json_diagnostic() {
        let body = decode_error_body(r#"{"message":"Server says no"}"#);
        assert_eq!(body, Some(json!({"message": "Server says no"})));
    }

    #[test]
    fn error_body_falls_back_to_raw_text() {
        let body = decode_error_body("upstream exploded");
        assert_eq!(body, Some(JsonValue::String("upstream exploded".to_owned())));
    }

    #[test]
    fn empty_error_body_is_absent() {
        assert_eq!(decode_error_body(""), None);
    }
}
