//! Request-level failures and their HTTP rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("invalid student: {0}")]
    Validation(&'static str),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Request failed");
        crate::metrics::request_failed(match self {
            AppError::Validation(_) => "validation",
            AppError::Store(_) => "store",
        });

        (StatusCode::INTERNAL_SERVER_ERROR, "Server error").into_response()
    }
}
