//! Minimal HTTP/1.1 GET client over a raw TCP stream.
//!
//! # Overview
//! Turns a bare URL such as `example.com:8080/index.html` into a GET
//! request, sends it over a plain TCP connection, reads until the server
//! closes the stream and splits what arrived into header block and body.
//!
//! # Design
//! - `url` and `http` are pure: decomposition, request framing and response
//!   splitting never touch the network and are tested on plain data.
//! - `transport` owns all blocking I/O behind the `Connector` trait.
//! - `Client` composes the two; the connection never outlives one `get`.
//! - No TLS, no chunked encoding, no redirects, no status handling.

pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod url;

pub use client::{write_response, Client, ClientConfig};
pub use error::ClientError;
pub use http::{build_request, split_response, HttpResponse, MAX_REQUEST_SIZE};
pub use transport::{read_response, send_request, Connector, TcpConnector};
pub use url::{decompose, UrlParts};
