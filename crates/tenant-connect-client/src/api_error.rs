//! Decoding of API error bodies.

use serde::Deserialize;

use crate::error::ClientError;

/// Error envelope returned by the deployment API.
#[derive(Debug, Deserialize)]
struct ServerErrorResponse {
    error: ServerError,
}

#[derive(Debug, Deserialize)]
struct ServerError {
    #[serde(default)]
    code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

/// Turn a failed response into `ClientError::Api`.
///
/// The status is always the HTTP status; the message comes from the body when
/// it can be parsed.
#[must_use]
pub fn decode_error(body: &[u8], status: u16) -> ClientError {
    let message = match serde_json::from_slice::<ServerErrorResponse>(body) {
        Ok(ServerErrorResponse { error }) => match (error.message, error.code) {
            (Some(message), _) if !message.is_empty() => message,
            (_, Some(code)) => format!("error code {code}"),
            _ => format!("server returned status {status}"),
        },
        Err(_) => format!("unparseable error response (status {status})"),
    };

    ClientError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message_of(err: ClientError) -> (u16, String) {
        match err {
            ClientError::Api { status, message } => (status, message),
            other => panic!("expected API error, got {other:?}"),
        }
    }

    #[test]
    fn decodes_server_error_body() {
        let body = br#"{"error": {"code": 403, "message": "Token is missing required scope"}}"#;
        let (status, message) = message_of(decode_error(body, 403));
        assert_eq!(status, 403);
        assert_eq!(message, "Token is missing required scope");
    }

    #[test]
    fn falls_back_to_code_without_message() {
        let body = br#"{"error": {"code": 401}}"#;
        let (_, message) = message_of(decode_error(body, 401));
        assert_eq!(message, "error code 401");
    }

    #[test]
    fn empty_error_object() {
        let (status, message) = message_of(decode_error(br#"{"error": {}}"#, 500));
        assert_eq!(status, 500);
        assert_eq!(message, "server returned status 500");
    }

    #[test]
    fn unparseable_body() {
        let (status, message) = message_of(decode_error(b"<html>Bad Gateway</html>", 502));
        assert_eq!(status, 502);
        assert_eq!(message, "unparseable error response (status 502)");
    }

    #[test]
    fn empty_body() {
        let (_, message) = message_of(decode_error(b"", 404));
        assert_eq!(message, "unparseable error response (status 404)");
    }
}
