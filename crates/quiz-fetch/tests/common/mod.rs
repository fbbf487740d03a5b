//! Minimal in-process HTTP/1.1 server for exercising the client end to end.

#![allow(dead_code)]

use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

#[derive(Clone)]
pub struct Route {
    pub path: &'static str,
    pub status: u16,
    pub body: String,
    pub last_modified: Option<&'static str>,
}

impl Route {
    pub fn ok(path: &'static str, body: impl Into<String>) -> Self {
        Self {
            path,
            status: 200,
            body: body.into(),
            last_modified: None,
        }
    }

    pub fn modified(mut self, value: &'static str) -> Self {
        self.last_modified = Some(value);
        self
    }
}

/// Serve `routes` on an ephemeral port; returns `http://127.0.0.1:<port>`.
pub async fn serve(routes: Vec<Route>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let routes = Arc::new(routes);
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let routes = routes.clone();
            tokio::spawn(async move { handle(stream, &routes).await });
        }
    });
    format!("http://{addr}")
}

async fn handle(mut stream: TcpStream, routes: &[Route]) {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 4096];
    let header_end = loop {
        let Ok(n) = stream.read(&mut chunk).await else { return };
        if n == 0 {
            return;
        }
        buf.extend_from_slice(&chunk[..n]);
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buf[..header_end]).to_string();
    let content_length = head
        .lines()
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case("content-length")
                .then(|| value.trim().parse::<usize>().ok())
                .flatten()
        })
        .unwrap_or(0);
    while buf.len() < header_end + content_length {
        let Ok(n) = stream.read(&mut chunk).await else { return };
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
    }

    let mut parts = head.split_whitespace();
    let method = parts.next().unwrap_or_default();
    let path = parts.next().unwrap_or_default();

    let response = match routes.iter().find(|route| route.path == path) {
        Some(route) => {
            let mut out = format!(
                "HTTP/1.1 {} X\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n",
                route.status,
                route.body.len()
            );
            if let Some(modified) = route.last_modified {
                out.push_str(&format!("Last-Modified: {modified}\r\n"));
            }
            out.push_str("\r\n");
            if method != "HEAD" {
                out.push_str(&route.body);
            }
            out
        }
        None => "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n".to_string(),
    };
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}
