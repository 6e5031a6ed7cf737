use crate::server::rest_api::error::ApiErrorResponse;
use axum::extract::{FromRequest, FromRequestParts};

/// [`axum::Json`] that rejects with [`ApiErrorResponse`] instead of axum's plain text rejections.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiErrorResponse))]
pub struct JsonBody<T>(pub T);

/// [`axum::extract::Path`] that rejects with [`ApiErrorResponse`].
#[derive(FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiErrorResponse))]
pub struct PathParameter<T>(pub T);
