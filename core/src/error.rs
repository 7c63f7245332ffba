//! Error types for the raw GET client.
//!
//! # Design
//! `RequestTooLarge` is raised by the request builder before any socket is
//! opened, so an oversize URL never results in network activity. Connection
//! setup failures carry the host (and port) they were attempted against.
//! Everything that goes wrong after the connection is up lands in `Io`.
//!
//! A peer closing the connection is not an error: it is how every response
//! ends.

use std::io;

use thiserror::Error;

/// Errors returned by the client, transport and request builder.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The assembled request would exceed the builder's hard size limit.
    #[error("request of {size} bytes exceeds the {limit}-byte limit")]
    RequestTooLarge { size: usize, limit: usize },

    /// The port segment of the URL is not a valid TCP port.
    #[error("invalid port {0:?}")]
    InvalidPort(String),

    /// The hostname could not be resolved to any address.
    #[error("could not resolve host {host:?}")]
    Resolve {
        host: String,
        #[source]
        source: io::Error,
    },

    /// Every resolved address refused or timed out.
    #[error("could not connect to {host}:{port}")]
    Connect {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    /// Writing the request or reading the response failed.
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
