/// The terminal result of one trigger or status-check invocation.
///
/// Every invocation maps onto exactly one of these; the CLI converts the
/// variant to a process exit code at the outermost boundary, so everything
/// below `main` works with typed outcomes instead of exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Trigger accepted, or the latest sync run finished without error.
    Success,
    /// The API rejected the access token (HTTP 401).
    InvalidCredentials,
    /// Unclassified non-success HTTP status, or a status-check transport failure.
    BadRequest,
    /// A sync run is already in flight for this source (HTTP 409 on trigger).
    SyncAlreadyRunning,
    /// The API does not recognize the source id (HTTP 404 or 500).
    InvalidSourceId,
    /// The latest sync run finished but reported an error.
    RunErrored,
    /// The latest sync run is still processing.
    StillIncomplete,
    /// The status payload reported a status we do not recognize.
    UnknownStatus,
    /// Uncategorized transport or runtime failure during a trigger.
    UnknownError,
}

impl Outcome {
    /// Process exit code for this outcome. The 200-series values match the
    /// codes the orchestrator contract documents for this integration.
    pub fn exit_code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::InvalidCredentials => 200,
            Self::BadRequest => 201,
            Self::SyncAlreadyRunning => 202,
            Self::InvalidSourceId => 203,
            Self::RunErrored => 210,
            Self::StillIncomplete => 211,
            Self::UnknownStatus => 212,
            Self::UnknownError => 249,
        }
    }

    /// Classify the HTTP status code of a trigger request.
    ///
    /// Precedence: auth failure, then unknown-source, then the generic
    /// bad-request bucket. Transport failures never reach this function;
    /// the caller maps those to [`Outcome::UnknownError`].
    pub fn from_trigger_http(status: u16) -> Self {
        match status {
            200 | 201 | 204 => Self::Success,
            401 => Self::InvalidCredentials,
            409 => Self::SyncAlreadyRunning,
            // The API reports unknown sources as either 404 or 500
            // depending on the endpoint version; both mean the same thing.
            404 | 500 => Self::InvalidSourceId,
            _ => Self::BadRequest,
        }
    }

    /// Classify the HTTP layer of a status-check request.
    ///
    /// Returns `None` on success, meaning classification should proceed to
    /// the response payload.
    pub fn from_status_http(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            401 => Some(Self::InvalidCredentials),
            404 | 500 => Some(Self::InvalidSourceId),
            _ => Some(Self::BadRequest),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_accepts_canonical_success_codes() {
        for code in [200, 201, 204] {
            assert_eq!(Outcome::from_trigger_http(code), Outcome::Success);
        }
    }

    #[test]
    fn trigger_conflict_is_already_running() {
        assert_eq!(
            Outcome::from_trigger_http(409),
            Outcome::SyncAlreadyRunning
        );
    }

    #[test]
    fn trigger_auth_failure_is_invalid_credentials() {
        assert_eq!(
            Outcome::from_trigger_http(401),
            Outcome::InvalidCredentials
        );
    }

    #[test]
    fn trigger_unknown_source_codes_merge() {
        assert_eq!(Outcome::from_trigger_http(404), Outcome::InvalidSourceId);
        assert_eq!(Outcome::from_trigger_http(500), Outcome::InvalidSourceId);
    }

    #[test]
    fn trigger_other_codes_are_bad_request() {
        for code in [400, 403, 418, 429, 503] {
            assert_eq!(Outcome::from_trigger_http(code), Outcome::BadRequest);
        }
    }

    #[test]
    fn status_http_success_defers_to_payload() {
        assert_eq!(Outcome::from_status_http(200), None);
        assert_eq!(Outcome::from_status_http(204), None);
    }

    #[test]
    fn status_http_failures_classify() {
        assert_eq!(
            Outcome::from_status_http(401),
            Some(Outcome::InvalidCredentials)
        );
        assert_eq!(
            Outcome::from_status_http(404),
            Some(Outcome::InvalidSourceId)
        );
        assert_eq!(
            Outcome::from_status_http(500),
            Some(Outcome::InvalidSourceId)
        );
        assert_eq!(Outcome::from_status_http(400), Some(Outcome::BadRequest));
    }

    #[test]
    fn exit_codes_are_distinct() {
        let all = [
            Outcome::Success,
            Outcome::InvalidCredentials,
            Outcome::BadRequest,
            Outcome::SyncAlreadyRunning,
            Outcome::InvalidSourceId,
            Outcome::RunErrored,
            Outcome::StillIncomplete,
            Outcome::UnknownStatus,
            Outcome::UnknownError,
        ];
        let mut codes: Vec<i32> = all.iter().map(|o| o.exit_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), all.len());
    }
}
