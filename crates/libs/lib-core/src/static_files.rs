//! # Static Files
//!
//! Maps HTTP request targets onto the trunk `dist/` output for the dev
//! server. The page is a single-page app, so `/`, directories, and unknown
//! paths all fall back to `index.html`.

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{AppError, Result};

pub const INDEX_FILE: &str = "index.html";

/// A file ready to be written to the socket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticFile {
    pub path: PathBuf,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// Extract the path from a request line such as `GET /app.wasm?v=2 HTTP/1.1`.
///
/// The query string is dropped. A malformed line maps to `/`.
pub fn request_path(request_line: &str) -> &str {
    let target = request_line.split_whitespace().nth(1).unwrap_or("/");
    match target.split_once('?') {
        Some((path, _query)) => path,
        None => target,
    }
}

/// Resolve a request path to a file under `dist_dir`.
///
/// Paths that try to leave `dist_dir` are treated as unknown and fall back
/// to the index.
pub fn resolve(dist_dir: &Path, path: &str) -> PathBuf {
    let relative = path.trim_start_matches('/');
    let index = dist_dir.join(INDEX_FILE);

    if relative.is_empty() {
        return index;
    }

    let escapes = Path::new(relative)
        .components()
        .any(|c| !matches!(c, Component::Normal(_)));
    if escapes {
        tracing::warn!("rejected path outside dist: {}", path);
        return index;
    }

    let candidate = dist_dir.join(relative);
    if candidate.is_file() {
        candidate
    } else {
        index
    }
}

/// Content type for a file, by extension.
pub fn content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|s| s.to_str()) {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("wasm") => "application/wasm",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Load the file that answers `path`.
///
/// # Errors
///
/// [`AppError::NotFound`] when neither the file nor `index.html` exists,
/// [`AppError::Io`] when reading fails.
pub fn load(dist_dir: &Path, path: &str) -> Result<StaticFile> {
    let resolved = resolve(dist_dir, path);
    if !resolved.is_file() {
        return Err(AppError::NotFound(resolved.display().to_string()));
    }

    let body = fs::read(&resolved)?;
    Ok(StaticFile {
        content_type: content_type(&resolved),
        path: resolved,
        body,
    })
}

/// Status line and headers for a response.
pub fn response_head(status: u16, reason: &str, content_type: &str, len: usize) -> String {
    let cors = if status == 200 {
        "Access-Control-Allow-Origin: *\r\n"
    } else {
        ""
    };
    format!(
        "HTTP/1.1 {status} {reason}\r\nContent-Type: {content_type}\r\n{cors}Content-Length: {len}\r\n\r\n"
    )
}

/// Minimal HTML page for an error response.
pub fn error_body(reason: &str) -> Vec<u8> {
    format!("<!DOCTYPE html><html><body><h1>Error: {reason}</h1></body></html>").into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dist() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("index.html"), "<html></html>").unwrap();
        fs::write(dir.path().join("landing_web_bg.wasm"), [0u8, 97, 115, 109]).unwrap();
        fs::create_dir(dir.path().join("images")).unwrap();
        fs::write(dir.path().join("images/logo.svg"), "<svg/>").unwrap();
        dir
    }

    #[test]
    fn test_request_path() {
        assert_eq!(request_path("GET / HTTP/1.1"), "/");
        assert_eq!(request_path("GET /app.js?v=3 HTTP/1.1"), "/app.js");
        assert_eq!(request_path("garbage"), "/");
    }

    #[test]
    fn test_resolve_existing_and_fallback() {
        let dir = dist();
        let root = dir.path();
        assert_eq!(resolve(root, "/"), root.join("index.html"));
        assert_eq!(resolve(root, "/images/logo.svg"), root.join("images/logo.svg"));
        assert_eq!(resolve(root, "/images"), root.join("index.html"));
        assert_eq!(resolve(root, "/missing/route"), root.join("index.html"));
    }

    #[test]
    fn test_resolve_rejects_traversal() {
        let dir = dist();
        assert_eq!(
            resolve(dir.path(), "/../secret.txt"),
            dir.path().join("index.html")
        );
    }

    #[test]
    fn test_content_types() {
        assert_eq!(content_type(Path::new("a.wasm")), "application/wasm");
        assert_eq!(content_type(Path::new("a.svg")), "image/svg+xml");
        assert_eq!(content_type(Path::new("index.html")), "text/html; charset=utf-8");
        assert_eq!(content_type(Path::new("LICENSE")), "application/octet-stream");
    }

    #[test]
    fn test_load() {
        let dir = dist();
        let file = load(dir.path(), "/landing_web_bg.wasm").unwrap();
        assert_eq!(file.content_type, "application/wasm");
        assert_eq!(file.body, vec![0u8, 97, 115, 109]);

        let file = load(dir.path(), "/features").unwrap();
        assert_eq!(file.content_type, "text/html; charset=utf-8");
    }

    #[test]
    fn test_load_without_index_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path(), "/").unwrap_err();
        assert_eq!(err.status_code(), 404);
    }

    #[test]
    fn test_response_head() {
        let head = response_head(200, "OK", "text/css", 12);
        assert!(head.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(head.contains("Access-Control-Allow-Origin: *"));
        assert!(head.ends_with("Content-Length: 12\r\n\r\n"));

        let head = response_head(404, "Not Found", "text/html", 3);
        assert!(!head.contains("Access-Control"));

        let body = String::from_utf8(error_body("Not Found")).unwrap();
        assert!(body.contains("<h1>Error: Not Found</h1>"));
    }
}
