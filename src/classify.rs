use crate::{Classify, FailureKind, LookupError, RawResponse};

/// Bucket an HTTP status code falls into for the lookup call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    Success,
    NotFound,
    ClientError,
    ServerError,
    Unknown,
}

pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Success,
        404 => StatusClass::NotFound,
        400..=499 => StatusClass::ClientError,
        500..=599 => StatusClass::ServerError,
        _ => StatusClass::Unknown,
    }
}

/// Result of a single attempt, before retry handling.
#[derive(Debug)]
pub enum AttemptOutcome<T> {
    Success(T),
    /// Definitive negative answer (404): no such user.
    ClientRejected,
    Failure(LookupError),
}

impl AttemptOutcome<Vec<u8>> {
    /// Classifies a raw response; the success payload is the response body.
    pub fn from_response(response: RawResponse) -> Self {
        let RawResponse { status, body } = response;
        match classify_status(status) {
            StatusClass::Success => Self::Success(body),
            StatusClass::NotFound => Self::ClientRejected,
            StatusClass::ClientError => Self::Failure(LookupError::ClientError {
                status,
                body: lossy(&body),
            }),
            StatusClass::ServerError => Self::Failure(LookupError::ServerError {
                status,
                body: lossy(&body),
            }),
            StatusClass::Unknown => Self::Failure(LookupError::UnknownStatus {
                status,
                body: lossy(&body),
            }),
        }
    }
}

fn lossy(body: &[u8]) -> String {
    String::from_utf8_lossy(body).into_owned()
}

impl<T> AttemptOutcome<T> {
    /// `ClientRejected` becomes `Ok(None)`: a not-found is an answer, not an error.
    pub fn into_result(self) -> Result<Option<T>, LookupError> {
        match self {
            Self::Success(value) => Ok(Some(value)),
            Self::ClientRejected => Ok(None),
            Self::Failure(err) => Err(err),
        }
    }
}

impl Classify for LookupError {
    fn is_retryable(&self) -> bool {
        matches!(
            self.kind(),
            FailureKind::Timeout | FailureKind::Network | FailureKind::ServerError(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{classify_status, AttemptOutcome, StatusClass};
    use crate::{Classify, FailureKind, LookupError, RawResponse};

    fn response(status: u16, body: &str) -> RawResponse {
        RawResponse {
            status,
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn status_ranges() {
        assert_eq!(classify_status(200), StatusClass::Success);
        assert_eq!(classify_status(204), StatusClass::Success);
        assert_eq!(classify_status(404), StatusClass::NotFound);
        assert_eq!(classify_status(400), StatusClass::ClientError);
        assert_eq!(classify_status(429), StatusClass::ClientError);
        assert_eq!(classify_status(500), StatusClass::ServerError);
        assert_eq!(classify_status(599), StatusClass::ServerError);
        assert_eq!(classify_status(302), StatusClass::Unknown);
        assert_eq!(classify_status(100), StatusClass::Unknown);
        assert_eq!(classify_status(600), StatusClass::Unknown);
    }

    #[test]
    fn not_found_is_an_empty_answer() {
        let outcome = AttemptOutcome::from_response(response(404, "missing"));
        assert!(matches!(outcome, AttemptOutcome::ClientRejected));
        assert!(matches!(outcome.into_result(), Ok(None)));
    }

    #[test]
    fn failures_keep_status_and_body() {
        match AttemptOutcome::from_response(response(503, "unavailable")) {
            AttemptOutcome::Failure(LookupError::ServerError { status, body }) => {
                assert_eq!(status, 503);
                assert_eq!(body, "unavailable");
            }
            other => panic!("expected server error, got {other:?}"),
        }
    }

    #[test]
    fn retryable_kinds() {
        assert!(LookupError::Timeout(Duration::from_millis(1)).is_retryable());
        assert!(LookupError::network("reset").is_retryable());
        assert!(LookupError::ServerError {
            status: 500,
            body: String::new()
        }
        .is_retryable());

        for err in [
            LookupError::ClientError {
                status: 400,
                body: String::new(),
            },
            LookupError::UnknownStatus {
                status: 301,
                body: String::new(),
            },
            LookupError::Decode("bad json".to_owned()),
            LookupError::Config("no token".to_owned()),
        ] {
            assert!(!err.is_retryable(), "{:?} must be terminal", err.kind());
        }
        assert_eq!(
            LookupError::Decode(String::new()).kind(),
            FailureKind::Decode
        );
    }
}
