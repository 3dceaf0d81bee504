use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION};
use reqwest::{StatusCode, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use serde_json::Value;

use super::request_id::RequestId;
use super::routes::RouteSpec;
use crate::config::ApiConfig;
use crate::core::{AppError, Result};

/// Shared HTTP client for the storefront API
///
/// Cheap to clone; every entity repository holds one.
#[derive(Clone)]
pub struct ApiClient {
    client: ClientWithMiddleware,
    root: Url,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(token) = &config.token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.trim()))
                .map_err(|_| {
                    AppError::Configuration(
                        "SEVADESK_API_TOKEN contains characters not allowed in a header"
                            .to_string(),
                    )
                })?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let inner = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .user_agent(concat!("sevadesk/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let root = Url::parse(&config.api_root()).map_err(|e| {
            AppError::Configuration(format!(
                "{} is not a valid URL: {}",
                config.base_url_source, e
            ))
        })?;

        let client = ClientBuilder::new(inner).with(RequestId).build();

        Ok(Self { client, root })
    }

    /// Absolute URL for a route, each path segment percent-encoded
    pub fn url(&self, route: &RouteSpec, id: Option<&str>) -> Result<Url> {
        let segments = route.resolve(id)?;

        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| {
                AppError::Configuration(format!("API root {} cannot take a path", self.root))
            })?
            .pop_if_empty()
            .extend(&segments);
        Ok(url)
    }

    pub fn root(&self) -> &str {
        self.root.as_str()
    }

    /// Call a listing route and return the decoded JSON body
    pub async fn fetch_json(&self, route: &RouteSpec) -> Result<Value> {
        let body = self.send(route, None).await?;
        serde_json::from_str(&body).map_err(|e| {
            AppError::envelope(format!("{} returned a non-JSON body: {}", route, e))
        })
    }

    /// Call a mutation route for one record; the response body is ignored
    pub async fn execute(&self, route: &RouteSpec, id: &str) -> Result<()> {
        self.send(route, Some(id)).await.map(|_| ())
    }

    async fn send(&self, route: &RouteSpec, id: Option<&str>) -> Result<String> {
        let url = self.url(route, id)?;

        let response = self
            .client
            .request(route.method.as_reqwest(), url)
            .send()
            .await
            .map_err(|e| describe_transport_error(route, e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            AppError::Unavailable(format!("{} response could not be read: {}", route, e))
        })?;

        if !status.is_success() {
            return Err(AppError::from_status(status, &body));
        }

        if status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }

        Ok(body)
    }
}

fn describe_transport_error(route: &RouteSpec, err: reqwest_middleware::Error) -> AppError {
    match err {
        reqwest_middleware::Error::Reqwest(e) if e.is_connect() || e.is_timeout() => {
            AppError::Unavailable(format!(
                "{} ({}): {}",
                route,
                if e.is_timeout() {
                    "timeout"
                } else {
                    "connection failed"
                },
                e
            ))
        }
        other => AppError::from(other),
    }
}
