use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use std::time::Instant;

use contracts::shared::format::format_thousands;

/// Console line for one finished request:
/// `time | duration | size | status method path`, time coloured by outcome.
fn access_line(
    status: StatusCode,
    elapsed_ms: u128,
    size: Option<usize>,
    method: &Method,
    path: &str,
) -> String {
    let color = if status.is_success() { "36" } else { "33" };
    let size = match size {
        Some(n) => format_thousands(n as u64),
        None => "unreadable".to_string(),
    };
    format!(
        "\x1b[{color}m{}\x1b[0m | {elapsed_ms:>5}ms | {size:>12} | {} {:>6} {path}",
        Utc::now().format("%H:%M:%S"),
        status.as_u16(),
        method.as_str(),
    )
}

/// Prints one access line per request.
///
/// The response body is buffered to learn its size, then passed on unchanged.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let (parts, body) = next.run(req).await.into_parts();
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (Some(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::warn!("{} {}: cannot read response body: {}", method, path, e);
            (None, Body::default())
        }
    };

    println!(
        "{}",
        access_line(parts.status, started.elapsed().as_millis(), size, &method, &path)
    );
    Response::from_parts(parts, body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_line_formats_size_and_request() {
        let line = access_line(StatusCode::OK, 12, Some(1_234_567), &Method::GET, "/api/housing");
        assert!(line.starts_with("\x1b[36m"));
        assert!(line.contains("1,234,567"));
        assert!(line.ends_with("200    GET /api/housing"));
    }

    #[test]
    fn test_access_line_marks_failures() {
        let line = access_line(StatusCode::BAD_REQUEST, 3, None, &Method::POST, "/api/donations");
        assert!(line.starts_with("\x1b[33m"));
        assert!(line.contains("unreadable"));
        assert!(line.contains("400   POST /api/donations"));
    }
}
