use axum::body::Body;
use axum::http::{header, HeaderMap, Request};
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;
use contracts::shared::format::format_thousands;

/// Middleware для логирования HTTP запросов
///
/// Выводит в консоль:
/// - Timestamp (WIB, UTC+7)
/// - Длительность (ms)
/// - Размер ответа (по Content-Length, если известен)
/// - Статус код
/// - Метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();

    let response = next.run(req).await;

    let duration = start.elapsed();
    let timestamp = Utc::now() + chrono::Duration::hours(7);
    let status = response.status().as_u16();

    // Голубой для 2xx/3xx, коричневый для остальных
    let color_code = if status < 400 { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        timestamp.format("%H:%M:%S"),
        duration.as_millis(),
        response_size(response.headers()),
        status,
        method,
        uri.path()
    );

    tracing::debug!(%method, path = uri.path(), status, elapsed_ms = duration.as_millis() as u64);

    response
}

fn response_size(headers: &HeaderMap) -> String {
    headers
        .get(header::CONTENT_LENGTH)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok())
        .map(format_thousands)
        .unwrap_or_else(|| "-".to_string())
}
