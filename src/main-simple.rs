//! Static file server for the Crypto Ponies page
//!
//! Serves the built WASM app from the dist/ directory on port 8080.

use std::fs;
use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};
use std::path::PathBuf;

fn main() {
    let addr = "127.0.0.1:8080";
    let listener = TcpListener::bind(addr).expect("Failed to bind to port 8080");

    println!("Crypto Ponies server running at http://{}", addr);
    println!("Serving from dist/ directory");
    println!("Press Ctrl+C to stop\n");

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => handle_client(stream),
            Err(e) => eprintln!("Connection error: {}", e),
        }
    }
}

fn handle_client(mut stream: TcpStream) {
    let buf_reader = BufReader::new(&mut stream);
    let request_line = match buf_reader.lines().next() {
        Some(Ok(line)) => line,
        _ => {
            eprintln!("Failed to read request line");
            return;
        }
    };

    let full_path = request_line.split_whitespace().nth(1).unwrap_or("/");
    let path = full_path.split('?').next().unwrap_or("/");

    let file_path = resolve_path(path);
    let content_type = content_type_for(&file_path);

    let (body, status) = match fs::read(&file_path) {
        Ok(contents) => (contents, "200 OK"),
        Err(_) => {
            eprintln!("File not found: {}", file_path.display());
            (
                b"<!DOCTYPE html><html><body><h1>Not found</h1></body></html>".to_vec(),
                "404 NOT FOUND",
            )
        }
    };

    let headers = format!(
        "HTTP/1.1 {}\r\nContent-Type: {}\r\nContent-Length: {}\r\n\r\n",
        status,
        content_type,
        body.len()
    );

    if let Err(e) = stream.write_all(headers.as_bytes()) {
        eprintln!("Failed to write headers: {}", e);
        return;
    }
    if let Err(e) = stream.write_all(&body) {
        eprintln!("Failed to write body: {}", e);
    }
    let _ = stream.flush();
}

/// Map a request path to a file under dist/, falling back to index.html
/// so client-side routing keeps working.
fn resolve_path(path: &str) -> PathBuf {
    if path == "/" || path.is_empty() {
        return PathBuf::from("dist/index.html");
    }
    let mut dist_path = PathBuf::from("dist");
    dist_path.push(path.strip_prefix('/').unwrap_or(path));
    if dist_path.is_dir() || !dist_path.exists() {
        PathBuf::from("dist/index.html")
    } else {
        dist_path
    }
}

fn content_type_for(file_path: &PathBuf) -> &'static str {
    match file_path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_resolves_to_index() {
        assert_eq!(resolve_path("/"), PathBuf::from("dist/index.html"));
        assert_eq!(resolve_path(""), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_unknown_paths_fall_back_to_index() {
        assert_eq!(resolve_path("/no/such/page"), PathBuf::from("dist/index.html"));
    }

    #[test]
    fn test_content_types() {
        assert_eq!(
            content_type_for(&PathBuf::from("dist/app.wasm")),
            "application/wasm"
        );
        assert_eq!(content_type_for(&PathBuf::from("dist/ponies.css")), "text/css");
        assert_eq!(
            content_type_for(&PathBuf::from("dist/unknown.bin")),
            "application/octet-stream"
        );
    }
}
