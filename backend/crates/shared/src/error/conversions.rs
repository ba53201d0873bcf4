//! Framework conversions
//!
//! With the `axum` feature an [`AppError`] renders as the same
//! `{message, error}` envelope the relay uses, plus `action` when set, so a
//! view reads `message` no matter which layer failed.

#[cfg(feature = "axum")]
use super::app_error::AppError;

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::Json;
        use axum::http::StatusCode;

        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut body = serde_json::json!({
            "message": self.message(),
            "error": self.kind().as_str(),
        });
        if let Some(action) = self.action() {
            body["action"] = action.into();
        }

        (status, Json(body)).into_response()
    }
}
