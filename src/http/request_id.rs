use std::time::Instant;

use async_trait::async_trait;
use ::http::Extensions;
use reqwest::header::{HeaderName, HeaderValue};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next};
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Client middleware that stamps every outgoing call with an `X-Request-ID`
/// and logs method, path, status and latency under that id
pub struct RequestId;

#[async_trait]
impl Middleware for RequestId {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        // Keep a caller-supplied id, otherwise generate one
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string())
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        if let Ok(value) = HeaderValue::from_str(&request_id) {
            req.headers_mut()
                .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
        }

        let method = req.method().clone();
        let path = req.url().path().to_string();
        let start = Instant::now();

        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "API request started"
        );

        let result = next.run(req, extensions).await;
        let elapsed_ms = start.elapsed().as_millis() as u64;

        match &result {
            Ok(response) if response.status().is_success() => {
                tracing::info!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "API request completed"
                );
            }
            Ok(response) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    status = response.status().as_u16(),
                    elapsed_ms,
                    "API request returned error status"
                );
            }
            Err(e) => {
                tracing::warn!(
                    request_id = %request_id,
                    method = %method,
                    path = %path,
                    elapsed_ms,
                    error = %e,
                    "API request failed"
                );
            }
        }

        result
    }
}
