//! Request framing and response splitting.
//!
//! # Design
//! Both halves work on plain data and never touch the network. The request
//! is a single `String` built with bare `\n` line endings and a
//! `Connection: close` header, so the response is terminated by the peer
//! closing the stream. The response is kept as the raw byte buffer it was
//! read into; splitting only records offsets.

use crate::error::ClientError;
use crate::url::UrlParts;

/// Hard upper bound on the size of a built request, in bytes.
pub const MAX_REQUEST_SIZE: usize = 16384;

const CRLF_BOUNDARY: &[u8] = b"\r\n\r\n";
const LF_BOUNDARY: &[u8] = b"\n\n";

/// Build the GET request for `hostname:port/path`.
///
/// `path` is inserted verbatim after a single `/`, so the root is requested
/// with an empty `path`.
pub fn build_request(hostname: &str, port: &str, path: &str) -> Result<String, ClientError> {
    let request = format!("GET /{path} HTTP/1.1\nHost: {hostname}:{port}\nConnection: close\n\n");
    if request.len() > MAX_REQUEST_SIZE {
        return Err(ClientError::RequestTooLarge {
            size: request.len(),
            limit: MAX_REQUEST_SIZE,
        });
    }
    Ok(request)
}

impl UrlParts {
    /// Build the request for these parts; a missing path requests `/`.
    pub fn to_request(&self) -> Result<String, ClientError> {
        build_request(
            &self.hostname,
            &self.port,
            self.path.as_deref().unwrap_or(""),
        )
    }
}

/// Split a complete response into its header block and body.
///
/// The first `\r\n\r\n` wins; `\n\n` is only looked for when there is none.
/// The boundary belongs to neither half. A buffer with no boundary at all is
/// returned entirely as body with an empty header.
pub fn split_response(buffer: &[u8]) -> (&[u8], &[u8]) {
    match find_boundary(buffer) {
        Some((header_end, body_start)) => (&buffer[..header_end], &buffer[body_start..]),
        None => (&buffer[..0], buffer),
    }
}

/// Offsets of the header end and body start, if a boundary exists.
fn find_boundary(buffer: &[u8]) -> Option<(usize, usize)> {
    [CRLF_BOUNDARY, LF_BOUNDARY].iter().find_map(|boundary| {
        buffer
            .windows(boundary.len())
            .position(|window| window == *boundary)
            .map(|at| (at, at + boundary.len()))
    })
}

/// A response as read off the wire, with its header/body boundary located.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    raw: Vec<u8>,
    header_end: usize,
    body_start: usize,
}

impl HttpResponse {
    pub fn from_raw(raw: Vec<u8>) -> Self {
        let (header_end, body_start) = find_boundary(&raw).unwrap_or((0, 0));
        Self {
            raw,
            header_end,
            body_start,
        }
    }

    pub fn header(&self) -> &[u8] {
        &self.raw[..self.header_end]
    }

    pub fn body(&self) -> &[u8] {
        &self.raw[self.body_start..]
    }

    pub fn raw(&self) -> &[u8] {
        &self.raw
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.raw
    }
}
