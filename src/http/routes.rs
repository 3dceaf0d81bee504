use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::{AppError, Result};

const ID_PLACEHOLDER: &str = "{id}";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_reqwest(&self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_reqwest())
    }
}

/// One endpoint: method plus a path relative to the API root
///
/// Mutation paths carry an `{id}` placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteSpec {
    pub method: HttpMethod,
    pub path: String,
}

impl RouteSpec {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn needs_id(&self) -> bool {
        self.path.contains(ID_PLACEHOLDER)
    }

    /// Path segments with the id substituted, relative to the API root
    ///
    /// Segments are returned raw; the client percent-encodes each one when building the
    /// URL, so an id containing `/`, `?` or spaces stays a single segment.
    pub fn resolve(&self, id: Option<&str>) -> Result<Vec<String>> {
        let id = match (self.needs_id(), id) {
            (true, Some(id)) => Some(validate_id(id)?),
            (true, None) => {
                return Err(AppError::internal(format!(
                    "Route '{}' requires a record id",
                    self.path
                )))
            }
            (false, _) => None,
        };

        Ok(self
            .path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .map(|segment| match id {
                Some(id) => segment.replace(ID_PLACEHOLDER, id),
                None => segment.to_string(),
            })
            .collect())
    }
}

impl fmt::Display for RouteSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}

/// Check an id can stand as a URL path segment
///
/// Backend ids are opaque and get percent-encoded; only the empty id and the dot
/// segments, which URL normalisation would collapse into a different path, are refused.
pub fn validate_id(id: &str) -> Result<&str> {
    match id {
        "" => Err(AppError::validation("Record id must not be empty")),
        "." | ".." => Err(AppError::validation(format!(
            "Record id '{}' is not a usable path segment",
            id
        ))),
        _ => Ok(id),
    }
}

/// Full set of lifecycle endpoints for one entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityRoutes {
    pub list: RouteSpec,
    pub deleted: RouteSpec,
    pub restore: RouteSpec,
    pub soft_delete: RouteSpec,
    pub hard_delete: RouteSpec,
    /// JSON pointers to the record list in listing responses
    pub envelope: Vec<String>,
}

impl EntityRoutes {
    /// Conventional layout: `<base>`, `<base>/<trash>`, `<base>/restore/{id}`,
    /// `<base>/{id}`, `<base>/<hard>/{id}`
    pub fn conventional(
        base: &str,
        trash_segment: &str,
        restore_method: HttpMethod,
        hard_segment: &str,
        envelope: &[&str],
    ) -> Self {
        Self {
            list: RouteSpec::get(base),
            deleted: RouteSpec::get(format!("{}/{}", base, trash_segment)),
            restore: RouteSpec::new(restore_method, format!("{}/restore/{{id}}", base)),
            soft_delete: RouteSpec::delete(format!("{}/{{id}}", base)),
            hard_delete: RouteSpec::delete(format!("{}/{}/{{id}}", base, hard_segment)),
            envelope: envelope.iter().map(|p| p.to_string()).collect(),
        }
    }
}
