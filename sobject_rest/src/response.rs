//! Turns raw service responses into record-access errors.

use serde::Deserialize;

use crate::errors::{ClientError, Error, RecordNotFound, RequestError};

/// Longest body excerpt kept on [`ClientError::HttpStatus`].
const MAX_BODY_SNIPPET: usize = 2000;

/// The service sends a list of errors; some endpoints send a bare object.
#[derive(Deserialize)]
#[serde(untagged)]
enum ErrorPayload {
    Many(Vec<RequestError>),
    One(RequestError),
}

/// Extracts the first service-reported error from a response body.
///
/// Returns `None` when the body is not an error payload.
pub fn decode_error_body(body: &str) -> Option<RequestError> {
    match serde_json::from_str::<ErrorPayload>(body).ok()? {
        ErrorPayload::Many(errors) => errors.into_iter().next(),
        ErrorPayload::One(error) => Some(error),
    }
}

/// Maps a response status and body onto the error taxonomy.
///
/// A 404 is always a missing record. Any other failure status carrying an
/// error payload becomes a [`RequestError`]; anything else is a transport-level
/// [`ClientError::HttpStatus`].
pub fn classify(status: u16, body: &str) -> Result<(), ClientError> {
    if (200..300).contains(&status) {
        return Ok(());
    }

    if status == 404 {
        tracing::debug!("Record not found (HTTP 404)");
        return Err(RecordNotFound.into());
    }

    match decode_error_body(body) {
        Some(err) => {
            tracing::debug!("Request rejected with status {}: {}", status, err);
            Err(err.into())
        }
        None => {
            let snippet = truncate_body(body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            Err(ClientError::HttpStatus {
                status,
                body: snippet,
            })
        }
    }
}

/// Returns the single record a lookup produced, or [`RecordNotFound`] if it
/// produced none.
pub fn single_record<T>(records: Vec<T>) -> crate::Result<T> {
    records
        .into_iter()
        .next()
        .ok_or(Error::RecordNotFound(RecordNotFound))
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_BODY_SNIPPET {
        return body.to_string();
    }
    let mut end = MAX_BODY_SNIPPET;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
