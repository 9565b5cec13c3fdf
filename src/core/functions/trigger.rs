//! Trigger and binding descriptors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::core::constants::ROUTE_PREFIX;

/// HTTP methods
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HttpMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Self::Get),
            "POST" => Ok(Self::Post),
            "PUT" => Ok(Self::Put),
            "PATCH" => Ok(Self::Patch),
            "DELETE" => Ok(Self::Delete),
            other => Err(format!("unsupported HTTP method: {}", other)),
        }
    }
}

/// What starts a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trigger {
    /// HTTP request on a route
    Http {
        route: String,
        methods: Vec<HttpMethod>,
    },

    /// Six-field cron schedule, or a `%Setting%` placeholder naming one
    Timer { schedule: String },
}

impl Trigger {
    /// HTTP trigger accepting GET and POST, the host default.
    pub fn http(route: impl Into<String>) -> Self {
        Self::Http {
            route: route.into(),
            methods: vec![HttpMethod::Get, HttpMethod::Post],
        }
    }

    pub fn timer(schedule: impl Into<String>) -> Self {
        Self::Timer {
            schedule: schedule.into(),
        }
    }

    /// Short name of the trigger kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Http { .. } => "http",
            Self::Timer { .. } => "timer",
        }
    }

    /// Whether an HTTP trigger answers `method`. Always false for timers.
    pub fn accepts(&self, method: HttpMethod) -> bool {
        match self {
            Self::Http { methods, .. } => methods.contains(&method),
            Self::Timer { .. } => false,
        }
    }
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http { route, methods } => {
                let methods: Vec<&str> = methods.iter().map(HttpMethod::as_str).collect();
                write!(f, "http {} /{}/{}", methods.join(","), ROUTE_PREFIX, route)
            }
            Self::Timer { schedule } => write!(f, "timer {}", schedule),
        }
    }
}

/// Reduce a route to its comparable form.
///
/// Leading and trailing slashes and the `api/` prefix are dropped and the
/// result is lowercased, so `/api/Req/` and `req` compare equal.
pub fn normalize_route(route: &str) -> String {
    let trimmed = route.trim().trim_matches('/');
    let without_prefix = match trimmed.split_once('/') {
        Some((head, tail)) if head.eq_ignore_ascii_case(ROUTE_PREFIX) => tail,
        _ if trimmed.eq_ignore_ascii_case(ROUTE_PREFIX) => "",
        _ => trimmed,
    };
    without_prefix.trim_matches('/').to_ascii_lowercase()
}

/// Data flow direction of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    In,
    Out,
}

/// Blob storage binding attached to a function.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlobBinding {
    /// Name the handler uses to reach the binding
    pub name: String,
    pub direction: Direction,
    /// `<container>/<blob>`, may contain `%Setting%` placeholders
    pub path: String,
    /// Storage connection setting; empty means the default account
    #[serde(default)]
    pub connection: String,
}

impl BlobBinding {
    pub fn input(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::In,
            path: path.into(),
            connection: String::new(),
        }
    }

    pub fn output(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            direction: Direction::Out,
            path: path.into(),
            connection: String::new(),
        }
    }
}
