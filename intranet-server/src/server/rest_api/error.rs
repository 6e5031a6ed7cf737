use crate::store::StoreError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// Type-erased error response
///
/// NOTE: This type is inspired by RFC7807 (Problem Details for HTTP APIs) but spares on a lot of
/// the details. Messages are deliberately generic, internals never reach the client.
///
/// See: <https://www.rfc-editor.org/rfc/rfc7807.html>
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiErrorResponse {
	r#type: String,
	status: u16,
	message: String,
}

impl ApiErrorResponse {
	pub fn invalid_data() -> Self {
		Self {
			r#type: "invalid-data".to_string(),
			status: StatusCode::BAD_REQUEST.as_u16(),
			message: "Invalid data".to_string(),
		}
	}

	pub fn internal_server_error() -> Self {
		Self {
			r#type: "internal-server-error".to_string(),
			status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
			message: "Internal server error".to_string(),
		}
	}
}

impl From<JsonRejection> for ApiErrorResponse {
	fn from(rejection: JsonRejection) -> Self {
		debug!("Rejected request body: {rejection}");
		Self::invalid_data()
	}
}

impl From<PathRejection> for ApiErrorResponse {
	fn from(rejection: PathRejection) -> Self {
		debug!("Rejected request path: {rejection}");
		Self::invalid_data()
	}
}

impl From<StoreError> for ApiErrorResponse {
	fn from(error: StoreError) -> Self {
		error!("Store operation failed: {error}");
		Self::internal_server_error()
	}
}

impl IntoResponse for ApiErrorResponse {
	fn into_response(self) -> Response {
		let status_code = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
		(status_code, Json(self)).into_response()
	}
}
