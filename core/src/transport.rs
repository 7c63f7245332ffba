//! Connection setup and the blocking send/receive loop.
//!
//! # Design
//! Opening a connection is behind the `Connector` trait so the send/read
//! logic can be driven by any `Read + Write` stream. `TcpConnector` is the
//! real implementation: it resolves the host, tries each address in turn and
//! applies the optional timeouts. The returned stream is owned by the
//! caller and closed when it goes out of scope.
//!
//! There is no length framing: the response ends when a read returns zero
//! bytes.

use std::io::{self, Read, Write};
use std::net::{SocketAddr, TcpStream, ToSocketAddrs};
use std::time::Duration;

use log::{debug, trace};

use crate::error::ClientError;

const READ_CHUNK: usize = 4096;

/// Opens a byte stream to `hostname:port`.
pub trait Connector {
    type Stream: Read + Write;

    fn connect(&self, hostname: &str, port: &str) -> Result<Self::Stream, ClientError>;
}

/// Plain TCP connector with optional connect and read timeouts.
///
/// A zero timeout is rejected by the OS, so `new` treats it as no timeout.
#[derive(Debug, Clone, Default)]
pub struct TcpConnector {
    pub connect_timeout: Option<Duration>,
    pub read_timeout: Option<Duration>,
}

impl TcpConnector {
    pub fn new(connect_timeout: Option<Duration>, read_timeout: Option<Duration>) -> Self {
        let nonzero = |timeout: Option<Duration>| timeout.filter(|t| !t.is_zero());
        Self {
            connect_timeout: nonzero(connect_timeout),
            read_timeout: nonzero(read_timeout),
        }
    }

    fn connect_addr(&self, addr: &SocketAddr) -> io::Result<TcpStream> {
        match self.connect_timeout {
            Some(timeout) => TcpStream::connect_timeout(addr, timeout),
            None => TcpStream::connect(addr),
        }
    }
}

impl Connector for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, hostname: &str, port: &str) -> Result<TcpStream, ClientError> {
        let port: u16 = port
            .parse()
            .map_err(|_| ClientError::InvalidPort(port.to_string()))?;

        let addrs: Vec<SocketAddr> = (hostname, port)
            .to_socket_addrs()
            .map_err(|source| ClientError::Resolve {
                host: hostname.to_string(),
                source,
            })?
            .collect();
        if addrs.is_empty() {
            return Err(ClientError::Resolve {
                host: hostname.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "no addresses found"),
            });
        }

        let mut last_err = None;
        for addr in &addrs {
            debug!("connecting to {addr}");
            match self.connect_addr(addr) {
                Ok(stream) => {
                    stream.set_read_timeout(self.read_timeout)?;
                    return Ok(stream);
                }
                Err(e) => {
                    debug!("connect to {addr} failed: {e}");
                    last_err = Some(e);
                }
            }
        }

        Err(ClientError::Connect {
            host: hostname.to_string(),
            port,
            source: last_err
                .unwrap_or_else(|| io::Error::from(io::ErrorKind::AddrNotAvailable)),
        })
    }
}

/// Write the whole request, retrying short writes.
pub fn send_request<S: Write>(stream: &mut S, request: &str) -> Result<(), ClientError> {
    let mut remaining = request.as_bytes();
    while !remaining.is_empty() {
        match stream.write(remaining) {
            Ok(0) => return Err(io::Error::from(io::ErrorKind::WriteZero).into()),
            Ok(n) => remaining = &remaining[n..],
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        }
    }
    stream.flush()?;
    debug!("sent {} byte request", request.len());
    Ok(())
}

/// Read until the peer closes the stream.
pub fn read_response<S: Read>(stream: &mut S) -> Result<Vec<u8>, ClientError> {
    let mut received = Vec::new();
    let mut buf = [0u8; READ_CHUNK];
    loop {
        let n = match stream.read(&mut buf) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if n == 0 {
            break;
        }
        trace!("read {n} bytes");
        received.extend_from_slice(&buf[..n]);
    }
    debug!("received {} bytes", received.len());
    Ok(received)
}
