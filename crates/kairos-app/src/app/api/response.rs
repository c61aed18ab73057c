use salvo::{Response, writing::Json};
use serde::Serialize;

use crate::error::AppError;

/// ## Summary
/// Error response payload
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// ## Summary
/// Renders `err` with the status it maps to.
///
/// Server-side failures are logged and answered with a generic message.
pub fn render_error(res: &mut Response, err: &AppError) {
    let status = err.status_code();
    let error = if status.is_server_error() {
        tracing::error!(error = ?err, "Request failed");
        "Internal server error".to_string()
    } else {
        tracing::debug!(error = %err, "Request rejected");
        err.to_string()
    };
    res.status_code(status);
    res.render(Json(ErrorResponse { error }));
}
