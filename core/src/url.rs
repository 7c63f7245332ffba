//! Decomposition of bare URLs into hostname, port and path.
//!
//! # Design
//! Accepts anything from `example.com` to `http://example.com:8080/a/b?c`
//! and never fails. Nothing is validated here: an empty hostname or a
//! non-numeric port is handed on unchanged and rejected by the connection
//! step. All slicing happens on the borrowed input, which is never modified.
//!
//! The port search only looks at the text before the first `/`, so a colon
//! in a query string cannot be mistaken for a port separator.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Port used when the URL does not name one.
pub const DEFAULT_PORT: &str = "80";

/// Path used when the URL has no path, or an empty one.
pub const DEFAULT_PATH: &str = "/";

const SCHEMES: [&str; 2] = ["https://", "http://"];

/// The three pieces of a URL the client needs to issue a request.
///
/// `path` holds the text after the URL's first `/`, without that slash; the
/// request builder adds it back. `None` means the URL had no path (or an
/// empty one), which `path()` reports as `"/"`. A URL ending in `//` has the
/// literal path `Some("/")`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlParts {
    pub hostname: String,
    pub port: String,
    pub path: Option<String>,
}

impl UrlParts {
    pub fn path(&self) -> &str {
        self.path.as_deref().unwrap_or(DEFAULT_PATH)
    }

    /// Request target: the path with its leading slash restored.
    pub fn target(&self) -> String {
        format!("/{}", self.path.as_deref().unwrap_or(""))
    }
}

/// Split `url` into hostname, port and path, applying defaults.
pub fn decompose(url: &str) -> UrlParts {
    let rest = SCHEMES
        .iter()
        .find_map(|scheme| url.strip_prefix(*scheme))
        .unwrap_or(url);

    let (authority, path) = match rest.split_once('/') {
        Some((authority, "")) => (authority, None),
        Some((authority, path)) => (authority, Some(path)),
        None => (rest, None),
    };

    let (hostname, port) = authority
        .split_once(':')
        .unwrap_or((authority, DEFAULT_PORT));

    UrlParts {
        hostname: hostname.to_string(),
        port: port.to_string(),
        path: path.map(str::to_string),
    }
}

impl FromStr for UrlParts {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(decompose(s))
    }
}

impl fmt::Display for UrlParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}{}", self.hostname, self.port, self.target())
    }
}
