use std::fmt;

use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    Url,
};

use crate::{
    decode::decode_user_info, execute_with_retry, AttemptOutcome, LookupError, RawResponse,
    ReqwestTransport, Result, RetryPolicy, Transport, UserInfo,
};

/// Administration API endpoint used when `ADMIN_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://api.example.com";

/// Client for the Administration API user lookup.
///
/// Every call to [`UserServiceClient::get_user_by_email`] runs under the
/// client's [`RetryPolicy`]. Calls share no state with each other.
#[derive(Clone)]
pub struct UserServiceClient<T = ReqwestTransport> {
    transport: T,
    base_url: String,
    authorization: String,
    policy: RetryPolicy,
}

impl<T: fmt::Debug> fmt::Debug for UserServiceClient<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UserServiceClient")
            .field("transport", &self.transport)
            .field("base_url", &self.base_url)
            .field("authorization", &"<redacted>")
            .field("policy", &self.policy)
            .finish()
    }
}

impl UserServiceClient {
    /// Creates a client with a full raw authorization value.
    ///
    /// Example: `"Bearer <token>"` or any custom scheme.
    pub fn new(base_url: impl Into<String>, authorization: impl Into<String>) -> Self {
        Self {
            transport: ReqwestTransport::default(),
            base_url: base_url.into(),
            authorization: authorization.into(),
            policy: RetryPolicy::default(),
        }
    }

    /// Creates a client from a bearer token.
    ///
    /// If the token is missing the `Bearer ` prefix, it is added automatically.
    pub fn new_bearer(base_url: impl Into<String>, token: impl AsRef<str>) -> Self {
        Self::new(base_url, normalize_bearer_authorization(token.as_ref()))
    }

    /// Creates a client from environment variables.
    ///
    /// Reads:
    /// - `ADMIN_API_TOKEN`: access token (Bearer prefix optional), required
    /// - `ADMIN_API_BASE_URL`: API root, defaults to [`DEFAULT_BASE_URL`]
    ///
    /// # Example
    ///
    /// ```no_run
    /// use userlookup_http::UserServiceClient;
    ///
    /// let users = UserServiceClient::from_env().expect("missing ADMIN_API_TOKEN");
    /// ```
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("ADMIN_API_TOKEN").map_err(|_| {
            LookupError::Config("missing ADMIN_API_TOKEN environment variable".to_owned())
        })?;
        if token.trim().is_empty() {
            return Err(LookupError::Config(
                "ADMIN_API_TOKEN is set but empty".to_owned(),
            ));
        }

        let base_url = match std::env::var("ADMIN_API_BASE_URL") {
            Ok(url) if !url.trim().is_empty() => url,
            _ => DEFAULT_BASE_URL.to_owned(),
        };
        Ok(Self::new_bearer(base_url, token))
    }
}

impl<T: Transport> UserServiceClient<T> {
    /// Applies retry, backoff and timeout settings.
    pub fn with_policy(mut self, policy: RetryPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Swaps the HTTP transport, keeping URL, credentials and policy.
    pub fn with_transport<U: Transport>(self, transport: U) -> UserServiceClient<U> {
        UserServiceClient {
            transport,
            base_url: self.base_url,
            authorization: self.authorization,
            policy: self.policy,
        }
    }

    /// Retry policy applied to every lookup.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Looks up a user by email address.
    ///
    /// Returns `Ok(None)` when the API answers 404. 5xx responses, network
    /// failures and attempt timeouts are retried under the client's policy;
    /// any other non-2xx status fails immediately.
    pub async fn get_user_by_email(&self, email: &str) -> Result<Option<UserInfo>> {
        let url = self.user_url(email)?;
        let headers = self.headers()?;

        execute_with_retry(&self.policy, || self.lookup_once(&url, &headers, email)).await
    }

    async fn lookup_once(
        &self,
        url: &Url,
        headers: &HeaderMap,
        email: &str,
    ) -> Result<Option<UserInfo>> {
        #[cfg(feature = "tracing")]
        tracing::debug!(%url, "calling user lookup endpoint");

        let response: RawResponse = self.transport.request(url, headers).await?;

        #[cfg(feature = "tracing")]
        tracing::debug!(status = response.status, "user lookup response");

        let user = AttemptOutcome::from_response(response)
            .into_result()?
            .map(|body| decode_user_info(&body))
            .transpose()?;

        #[cfg(feature = "tracing")]
        if user.is_none() {
            tracing::info!(email, "user not found");
        }
        #[cfg(not(feature = "tracing"))]
        let _ = email;

        Ok(user)
    }

    /// Builds `{base_url}/users/{email}` with the email percent-encoded as one
    /// path segment.
    pub fn user_url(&self, email: &str) -> Result<Url> {
        let mut url = Url::parse(self.base_url.trim()).map_err(|err| {
            LookupError::Config(format!("invalid base URL '{}': {err}", self.base_url))
        })?;
        url.path_segments_mut()
            .map_err(|_| {
                LookupError::Config(format!(
                    "base URL '{}' cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .push("users")
            .push(email);
        Ok(url)
    }

    fn headers(&self) -> Result<HeaderMap> {
        let mut authorization = HeaderValue::from_str(&self.authorization).map_err(|_| {
            LookupError::Config("authorization value is not a valid header".to_owned())
        })?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, authorization);
        headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        );
        Ok(headers)
    }
}

fn normalize_bearer_authorization(token: &str) -> String {
    let trimmed = token.trim();
    let prefix = trimmed.get(..7);
    if prefix.is_some_and(|value| value.eq_ignore_ascii_case("bearer ")) {
        trimmed.to_owned()
    } else {
        format!("Bearer {trimmed}")
    }
}
