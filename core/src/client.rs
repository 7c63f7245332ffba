//! One-shot GET client tying decomposition, framing and transport together.
//!
//! # Design
//! `Client` holds only its connector and carries no state between calls.
//! `get` runs the whole exchange: the request is built (and size-checked)
//! before a connection is opened, and the stream lives only for the
//! duration of the call, so it is closed on every return path.

use std::io::Write;
use std::time::Duration;

use log::debug;

use crate::error::ClientError;
use crate::http::HttpResponse;
use crate::transport::{read_response, send_request, Connector, TcpConnector};
use crate::url::decompose;

/// Timeouts applied to the TCP connection. `None` blocks indefinitely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClientConfig {
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
}

/// Synchronous client issuing a single GET per call.
#[derive(Debug, Clone)]
pub struct Client<C = TcpConnector> {
    connector: C,
}

impl Client<TcpConnector> {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_connector(TcpConnector::new(
            config.connect_timeout,
            config.read_timeout,
        ))
    }
}

impl<C: Connector> Client<C> {
    pub fn with_connector(connector: C) -> Self {
        Self { connector }
    }

    /// Fetch `url` and return the complete response.
    pub fn get(&self, url: &str) -> Result<HttpResponse, ClientError> {
        let parts = decompose(url);
        debug!("resolved {url:?} to {parts}");
        let request = parts.to_request()?;

        let mut stream = self.connector.connect(&parts.hostname, &parts.port)?;
        send_request(&mut stream, &request)?;
        let raw = read_response(&mut stream)?;
        Ok(HttpResponse::from_raw(raw))
    }
}

/// Write the response body to `out`, preceded by the header block and a
/// newline when `print_headers` is set. Bytes are copied verbatim.
pub fn write_response<W: Write>(
    out: &mut W,
    response: &HttpResponse,
    print_headers: bool,
) -> std::io::Result<()> {
    if print_headers {
        out.write_all(response.header())?;
        out.write_all(b"\n")?;
    }
    out.write_all(response.body())?;
    out.flush()
}
