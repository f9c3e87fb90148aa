use crux_http::Http;
use tracing::{debug, instrument};

use crate::config::ValidatedUrl;
use crate::error::LoadError;
use crate::event::Event;
use crate::record::Record;

/// Issues the single dataset request. The response comes back as
/// [`Event::LoadSucceeded`] or [`Event::LoadFailed`]; nothing is retried.
#[instrument(skip(http), fields(host = endpoint.host()))]
pub fn fetch_records(http: &Http<Event>, endpoint: &ValidatedUrl) {
    debug!(url = %endpoint, "requesting dataset");

    http.get(endpoint.as_str()).send(|result| {
        let decoded = result
            .map_err(|e| LoadError::Transport {
                message: e.to_string(),
            })
            .and_then(|mut response| {
                let status = u16::from(response.status());
                decode_records(status, response.take_body())
            });

        match decoded {
            Ok(records) => Event::LoadSucceeded { records },
            Err(error) => Event::LoadFailed { error },
        }
    });
}

/// Turns a raw response into records: 2xx only, non-empty body, JSON array.
pub fn decode_records(status: u16, body: Option<Vec<u8>>) -> Result<Vec<Record>, LoadError> {
    if !(200..300).contains(&status) {
        return Err(LoadError::Status { status });
    }

    let body = body.filter(|b| !b.is_empty()).ok_or(LoadError::EmptyBody)?;

    serde_json::from_slice(&body).map_err(|e| LoadError::Decode {
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_a_successful_body() {
        let body = br#"[{"City":"A","Town":"B","Name":"C"}]"#.to_vec();
        let records = decode_records(200, Some(body)).unwrap();
        assert_eq!(records, vec![Record::new("A", "B", "C")]);
    }

    #[test]
    fn non_success_status_is_an_error() {
        assert_eq!(
            decode_records(503, Some(b"[]".to_vec())),
            Err(LoadError::Status { status: 503 })
        );
    }

    #[test]
    fn missing_or_empty_body() {
        assert_eq!(decode_records(200, None), Err(LoadError::EmptyBody));
        assert_eq!(decode_records(200, Some(Vec::new())), Err(LoadError::EmptyBody));
    }

    #[test]
    fn undecodable_body() {
        let result = decode_records(200, Some(b"<html>".to_vec()));
        assert!(matches!(result, Err(LoadError::Decode { .. })));

        let result = decode_records(200, Some(br#"{"City":"A"}"#.to_vec()));
        assert!(matches!(result, Err(LoadError::Decode { .. })));
    }

    #[test]
    fn empty_array_is_a_valid_dataset() {
        assert_eq!(decode_records(200, Some(b"[]".to_vec())), Ok(Vec::new()));
    }
}
