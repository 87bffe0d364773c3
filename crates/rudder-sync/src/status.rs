use serde::Deserialize;

use crate::Outcome;

/// Status payload from `GET /v2/sources/{source_id}/status`.
///
/// The API reports `status` as a free-form string; `error` is only present
/// when the run failed. Unknown fields are ignored so the payload model
/// survives additive API changes.
#[derive(Debug, Clone, Deserialize)]
pub struct SyncStatus {
    pub status: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl SyncStatus {
    /// Classify the payload of a successfully fetched status response.
    ///
    /// An empty `error` string counts as no error, matching how the API
    /// clears the field on healthy runs.
    pub fn outcome(&self) -> Outcome {
        match self.status.as_str() {
            "finished" => match self.error.as_deref() {
                Some(error) if !error.is_empty() => Outcome::RunErrored,
                _ => Outcome::Success,
            },
            "processing" => Outcome::StillIncomplete,
            _ => Outcome::UnknownStatus,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SyncStatus {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn finished_without_error_is_success() {
        let status = parse(r#"{"status":"finished"}"#);
        assert_eq!(status.outcome(), Outcome::Success);
    }

    #[test]
    fn finished_with_empty_error_is_success() {
        let status = parse(r#"{"status":"finished","error":""}"#);
        assert_eq!(status.outcome(), Outcome::Success);
    }

    #[test]
    fn finished_with_error_is_run_errored() {
        let status = parse(r#"{"status":"finished","error":"credential expired"}"#);
        assert_eq!(status.outcome(), Outcome::RunErrored);
        assert_eq!(status.error.as_deref(), Some("credential expired"));
    }

    #[test]
    fn processing_is_still_incomplete() {
        let status = parse(r#"{"status":"processing"}"#);
        assert_eq!(status.outcome(), Outcome::StillIncomplete);
    }

    #[test]
    fn unrecognized_status_is_unknown() {
        let status = parse(r#"{"status":"weird"}"#);
        assert_eq!(status.outcome(), Outcome::UnknownStatus);
        assert_ne!(status.outcome(), Outcome::StillIncomplete);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let status = parse(r#"{"status":"finished","startedAt":"2023-01-01T00:00:00Z"}"#);
        assert_eq!(status.outcome(), Outcome::Success);
    }
}
