//! Static file server for the landing page
//!
//! Serves the trunk build from `LANDING_DIST_DIR` (default `dist/`) on
//! `LANDING_ADDR` (default `127.0.0.1:8080`).

use std::io::{BufRead, BufReader, Write};
use std::net::{TcpListener, TcpStream};

use lib_core::config::{init_config, Config};
use lib_core::static_files;
use lib_core::{AppError, Result};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run() {
        tracing::error!("landing server stopped: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let config = init_config()?;
    let listener = TcpListener::bind(config.bind_addr)?;

    tracing::info!("Landing page server running at http://{}", config.bind_addr);
    tracing::info!("Serving from {}", config.dist_dir.display());

    for stream in listener.incoming() {
        match stream {
            Ok(stream) => {
                if let Err(e) = handle_client(stream, config) {
                    tracing::warn!("request failed: {}", e);
                }
            }
            Err(e) => tracing::warn!("connection error: {}", e),
        }
    }
    Ok(())
}

fn handle_client(mut stream: TcpStream, config: &Config) -> Result<()> {
    let request_line = match BufReader::new(&mut stream).lines().next() {
        Some(line) => line?,
        None => return Err(AppError::Internal("empty request".to_string())),
    };
    let path = static_files::request_path(&request_line);

    let (head, body) = match static_files::load(&config.dist_dir, path) {
        Ok(file) => {
            tracing::debug!("{} -> {}", path, file.path.display());
            let head = static_files::response_head(200, "OK", file.content_type, file.body.len());
            (head, file.body)
        }
        Err(e) => {
            tracing::warn!("{}: {}", path, e);
            let body = static_files::error_body(e.reason());
            let head =
                static_files::response_head(e.status_code(), e.reason(), "text/html", body.len());
            (head, body)
        }
    };

    stream.write_all(head.as_bytes())?;
    stream.write_all(&body)?;
    stream.flush()?;
    Ok(())
}
