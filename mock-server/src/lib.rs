//! Stub HTTP servers for exercising the raw client end to end.
//!
//! Two flavours: an `axum` router for realistic responses, and a canned
//! server that captures the raw request bytes, answers with a fixed byte
//! string and closes the connection. The `spawn_*` helpers run either on a
//! background thread with its own runtime so blocking tests can use them.

use std::io;
use std::net::SocketAddr;
use std::thread::JoinHandle;

use axum::{
    http::{StatusCode, Uri},
    routing::get,
    Router,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

pub const HELLO: &str = "Hello";

pub fn app() -> Router {
    Router::new()
        .route("/anything", get(hello))
        .route("/hello", get(hello))
        .route("/echo", get(echo))
        .route("/echo/{*rest}", get(echo))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), io::Error> {
    axum::serve(listener, app()).await
}

async fn hello() -> &'static str {
    HELLO
}

/// Responds with the request target as received, query included.
async fn echo(uri: Uri) -> String {
    uri.to_string()
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "not found")
}

/// Accept one connection, read its request head, reply with `response` and
/// close. Returns the bytes the client sent.
pub async fn serve_canned(listener: TcpListener, response: &[u8]) -> io::Result<Vec<u8>> {
    let (mut socket, _) = listener.accept().await?;
    let mut request = Vec::new();
    let mut buf = [0u8; 1024];
    while !ends_head(&request) {
        let n = socket.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        request.extend_from_slice(&buf[..n]);
    }
    socket.write_all(response).await?;
    socket.shutdown().await?;
    Ok(request)
}

fn ends_head(request: &[u8]) -> bool {
    request.ends_with(b"\n\n") || request.ends_with(b"\r\n\r\n")
}

fn bind_local() -> io::Result<std::net::TcpListener> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    listener.set_nonblocking(true)?;
    Ok(listener)
}

fn block_on<F: std::future::Future>(future: F) -> io::Result<F::Output> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    Ok(rt.block_on(future))
}

/// Start the router on a random local port in a background thread.
pub fn spawn_app() -> io::Result<SocketAddr> {
    let std_listener = bind_local()?;
    let addr = std_listener.local_addr()?;
    std::thread::spawn(move || {
        let served = block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            run(listener).await
        });
        if let Err(e) = served.and_then(|result| result) {
            eprintln!("mock server on {addr} stopped: {e}");
        }
    });
    Ok(addr)
}

/// Start a one-shot canned server on a random local port. Joining the
/// handle yields the captured request.
pub fn spawn_canned(
    response: &[u8],
) -> io::Result<(SocketAddr, JoinHandle<io::Result<Vec<u8>>>)> {
    let std_listener = bind_local()?;
    let addr = std_listener.local_addr()?;
    let response = response.to_vec();
    let handle = std::thread::spawn(move || {
        block_on(async {
            let listener = TcpListener::from_std(std_listener)?;
            serve_canned(listener, &response).await
        })?
    });
    Ok((addr, handle))
}
