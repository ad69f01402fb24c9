use std::future::Future;

use reqwest::{header::HeaderMap, Url};

use crate::{LookupError, Result};

/// Status and body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Performs one HTTP GET. Implementations must not retry on their own.
///
/// Network-level failures are reported as [`LookupError::Network`]; any
/// response that arrives, whatever its status, is `Ok`.
pub trait Transport {
    fn request(
        &self,
        url: &Url,
        headers: &HeaderMap,
    ) -> impl Future<Output = Result<RawResponse>> + Send;
}

/// [`Transport`] backed by a shared `reqwest` client.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }
}

impl Transport for ReqwestTransport {
    async fn request(&self, url: &Url, headers: &HeaderMap) -> Result<RawResponse> {
        let response = self
            .http
            .get(url.clone())
            .headers(headers.clone())
            .send()
            .await
            .map_err(LookupError::network)?;

        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(LookupError::network)?;

        Ok(RawResponse {
            status,
            body: body.to_vec(),
        })
    }
}
