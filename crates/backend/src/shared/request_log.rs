use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Local;
use std::time::Instant;

use super::format::format_number;

/// Prints one line per request: time, duration, body size, status, method, path.
///
/// The body is buffered to report its real size.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!("failed to read response body for {} {}: {}", method, path, e);
            print_line(start, "error", parts.status, method.as_str(), &path);
            return Response::from_parts(parts, Body::default());
        }
    };

    print_line(
        start,
        &format_number(bytes.len()),
        parts.status,
        method.as_str(),
        &path,
    );

    Response::from_parts(parts, Body::from(bytes))
}

fn print_line(start: Instant, size: &str, status: StatusCode, method: &str, path: &str) {
    // cyan for 200, yellow otherwise
    let color_code = if status == StatusCode::OK { "36" } else { "33" };
    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        Local::now().format("%H:%M:%S"),
        start.elapsed().as_millis(),
        size,
        status.as_u16(),
        method,
        path
    );
}
