//! Response translation for platform errors
//!
//! The platform reports failures as structured JSON
//! (`{"errorCode": "...", "message": "..."}`). When the body parses, both
//! fields ride on the typed error next to the raw text; when it does not
//! (HTML gateway pages, empty bodies), the raw text alone is carried.

use serde::Deserialize;

use crate::error::{Error, Result};

#[derive(Debug, Deserialize)]
struct PlatformError {
    #[serde(rename = "errorCode")]
    error_code: Option<String>,
    message: Option<String>,
}

/// Pass a success body through; map anything else to [`Error::Api`].
pub async fn translate_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .map_err(|e| Error::Http(format!("reading response body: {e}")))?;

    if status.is_success() {
        return Ok(body);
    }
    Err(translate_error(status.as_u16(), body))
}

fn translate_error(status: u16, body: String) -> Error {
    let parsed: Option<PlatformError> = serde_json::from_str(&body).ok();
    let (error_code, message) = match parsed {
        Some(platform) => (platform.error_code, platform.message),
        None => (None, None),
    };
    Error::Api {
        status,
        error_code,
        message,
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_error_body_is_parsed() {
        let err = translate_error(404, r#"{"errorCode":"NOT_FOUND","message":"x"}"#.into());
        match err {
            Error::Api {
                status,
                error_code,
                message,
                body,
            } => {
                assert_eq!(status, 404);
                assert_eq!(error_code.as_deref(), Some("NOT_FOUND"));
                assert_eq!(message.as_deref(), Some("x"));
                assert!(body.contains("NOT_FOUND"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn unstructured_body_is_carried_raw() {
        let err = translate_error(502, "<html>Bad Gateway</html>".into());
        match err {
            Error::Api {
                status,
                error_code,
                message,
                body,
            } => {
                assert_eq!(status, 502);
                assert!(error_code.is_none());
                assert!(message.is_none());
                assert_eq!(body, "<html>Bad Gateway</html>");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn json_body_without_error_fields_yields_none() {
        let err = translate_error(400, r#"{"detail":"something"}"#.into());
        match err {
            Error::Api {
                error_code, message, ..
            } => {
                assert!(error_code.is_none());
                assert!(message.is_none());
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn display_includes_status_and_body() {
        let err = translate_error(404, r#"{"errorCode":"NOT_FOUND","message":"x"}"#.into());
        let text = err.to_string();
        assert!(text.contains("404"), "got: {text}");
        assert!(text.contains("NOT_FOUND"), "got: {text}");
    }
}
