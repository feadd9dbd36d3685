//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! The response body is always read to the end before returning.

use std::collections::HashMap;
use std::future::Future;
use std::time::Instant;

use itemcheck_application::ports::{HttpClient, HttpClientError};
use itemcheck_domain::{
    request::{HttpMethod, RequestSpec},
    response::ResponseSpec,
};
use reqwest::{Client, Method};
use tracing::trace;

/// HTTP client implementation using reqwest.
///
/// Wraps `reqwest::Client`, which pools connections, so one instance
/// should be shared across scenarios.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client sending the given `User-Agent`.
    ///
    /// Timeouts and redirects are left at reqwest's defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new(user_agent: &str) -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
        }
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error) -> HttpClientError {
        if error.is_builder() {
            return HttpClientError::InvalidUrl(error.to_string());
        }
        if error.is_timeout() {
            return HttpClientError::Timeout(error.to_string());
        }
        if error.is_connect() {
            return HttpClientError::ConnectionFailed(error.to_string());
        }
        HttpClientError::Other(error.to_string())
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        let method = Self::to_reqwest_method(request.method);
        let url = request.url.clone();
        let headers: Vec<_> = request.headers.iter().cloned().collect();
        let body = request.body.as_bytes().to_vec();

        async move {
            let start = Instant::now();

            let mut builder = self.client.request(method, url);
            for header in &headers {
                builder = builder.header(&header.name, &header.value);
            }
            if !body.is_empty() {
                builder = builder.body(body);
            }

            let response = builder.send().await.map_err(|e| Self::map_error(&e))?;

            let status = response.status().as_u16();
            let response_headers: HashMap<String, String> = response
                .headers()
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                .collect();

            let body_bytes = response
                .bytes()
                .await
                .map_err(|e| HttpClientError::BodyRead(e.to_string()))?
                .to_vec();
            let duration = start.elapsed();
            trace!(status, bytes = body_bytes.len(), "response drained");

            Ok(ResponseSpec::new(
                status,
                response_headers,
                body_bytes,
                duration,
            ))
        }
    }
}
