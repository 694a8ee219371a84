//! Minimal HTTP/1.1 server for page-check integration tests.
//!
//! Serves a single static HTML body with a configurable status. Can also
//! redirect `/` to `/target` to exercise redirect-following clients.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;

#[derive(Debug, Clone, Copy)]
pub struct PageServerOptions {
    /// Status code for served pages.
    pub status: u16,
    /// If true, `/` answers 301 to `/target` and only `/target` serves
    /// the body.
    pub redirect_root: bool,
}

impl Default for PageServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            redirect_root: false,
        }
    }
}

/// Starts a server in a background thread serving `html` with 200 OK on
/// every path. Returns the base URL (e.g. "http://127.0.0.1:12345/"). The
/// server runs until the process exits.
pub fn start(html: &str) -> String {
    start_with_options(html, PageServerOptions::default())
}

/// Like `start` but allows customizing status and redirect behavior.
pub fn start_with_options(html: &str, opts: PageServerOptions) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let html = Arc::new(html.to_string());
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let html = Arc::clone(&html);
            thread::spawn(move || handle(stream, &html, opts));
        }
    });
    format!("http://127.0.0.1:{}/", port)
}

fn handle(mut stream: std::net::TcpStream, html: &str, opts: PageServerOptions) {
    let _ = stream.set_read_timeout(Some(std::time::Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(std::time::Duration::from_secs(2)));
    let mut buf = [0u8; 8192];
    let n = match stream.read(&mut buf) {
        Ok(0) => return,
        Ok(n) => n,
        Err(_) => return,
    };
    let request = match std::str::from_utf8(&buf[..n]) {
        Ok(s) => s,
        Err(_) => return,
    };
    let path = request_path(request);

    if opts.redirect_root && path == "/" {
        let _ = stream.write_all(
            b"HTTP/1.1 301 Moved Permanently\r\n\
              Location: /target\r\n\
              Content-Length: 0\r\n\
              Connection: close\r\n\r\n",
        );
        return;
    }

    let response = format!(
        "HTTP/1.1 {} {}\r\n\
         Content-Type: text/html; charset=utf-8\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n",
        opts.status,
        reason(opts.status),
        html.len(),
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(html.as_bytes());
}

/// Path from the request line ("GET /x HTTP/1.1" -> "/x").
fn request_path(request: &str) -> &str {
    request
        .lines()
        .next()
        .and_then(|line| line.split_whitespace().nth(1))
        .unwrap_or("/")
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        301 => "Moved Permanently",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Status",
    }
}
