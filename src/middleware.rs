//! Request pipeline wrapper.

use axum::{extract::Request, middleware::Next, response::Response};

/// Log the method and path of every completed request, whatever its
/// outcome. The `log` macros never propagate sink failures, so an
/// unavailable log target cannot affect the response.
pub async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let response = next.run(req).await;

    log::info!("{} {} -> {}", method, path, response.status());
    response
}
