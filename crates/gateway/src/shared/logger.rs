//! Tracing setup and the per-request console line.

use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Stdout plus `logs/gateway.log` under `base_dir`; `RUST_LOG` overrides the `info` default
pub fn init_tracing(base_dir: &Path) -> anyhow::Result<()> {
    let log_dir = base_dir.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("gateway.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,reqwest=warn,hyper=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();
    Ok(())
}

/// Thousands separated with dots: 1234567 -> "1.234.567"
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

fn request_line(
    color_code: &str,
    elapsed_ms: u128,
    size: &str,
    status: u16,
    method: &str,
    path: &str,
) -> String {
    format!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        elapsed_ms,
        size,
        status,
        method,
        path
    )
}

/// Prints one line per request with its duration and the real body size
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("{} {}: body could not be read: {}", method, uri.path(), e);
            println!(
                "{}",
                request_line(
                    "33",
                    start.elapsed().as_millis(),
                    "error",
                    parts.status.as_u16(),
                    method.as_str(),
                    uri.path()
                )
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    // Cyan for 200, brown for everything else
    let color_code = if parts.status.as_u16() == 200 { "36" } else { "33" };
    println!(
        "{}",
        request_line(
            color_code,
            start.elapsed().as_millis(),
            &format_number(bytes.len()),
            parts.status.as_u16(),
            method.as_str(),
            uri.path()
        )
    );

    Response::from_parts(parts, Body::from(bytes))
}
