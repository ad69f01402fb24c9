//! `userlookup-http` resolves user profiles by email through the
//! Administration API, with a small resilience layer around the call.
//!
//! The crate is built from three pieces:
//! - [`execute_with_retry`] runs a re-invocable operation under a bounded,
//!   exponential-backoff [`RetryPolicy`];
//! - [`with_timeout`] bounds a single attempt and turns a hang into a
//!   retryable timeout;
//! - [`UserServiceClient::get_user_by_email`] wires both around one
//!   `GET /users/{email}` call.

mod classify;
mod client;
mod decode;
mod error;
mod options;
mod retry;
mod timeout;
mod transport;
mod types;
mod wire;

pub use classify::{classify_status, AttemptOutcome, StatusClass};
pub use client::{UserServiceClient, DEFAULT_BASE_URL};
pub use error::{AttemptTimedOut, FailureKind, LookupError};
pub use options::RetryPolicy;
pub use retry::{execute_with_retry, Classify};
pub use timeout::with_timeout;
pub use transport::{RawResponse, ReqwestTransport, Transport};
pub use types::UserInfo;

pub type Result<T> = std::result::Result<T, LookupError>;
