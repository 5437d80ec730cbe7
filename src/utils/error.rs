use actix_web::{
    http::{header::ContentType, StatusCode},
    HttpResponse, ResponseError,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::models::ApiResponse;

/// Erros da aplicação, cada um com status HTTP fixo
#[derive(Debug, Error)]
pub enum AppError {
    #[error("user not found")]
    NotFound,

    #[error("{0}")]
    UpstreamNotFound(String),

    #[error("{0}")]
    UpstreamValidationError(String),

    /// 400 do upstream cujo corpo já é um envelope (repassado como veio)
    #[error("upstream rejected the request")]
    UpstreamRejected(String),

    #[error("upstream request failed: {0}")]
    UpstreamError(String),

    #[error("upstream service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("validation failed")]
    Validation(BTreeMap<String, String>),

    #[error("{0}")]
    InvalidRequest(String),

    #[error("internal server error")]
    Internal(String),
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound | AppError::UpstreamNotFound(_) => StatusCode::NOT_FOUND,
            AppError::UpstreamValidationError(_)
            | AppError::UpstreamRejected(_)
            | AppError::Validation(_)
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::UpstreamError(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            AppError::UpstreamUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());

        match self {
            AppError::UpstreamRejected(body) => builder
                .content_type(ContentType::json())
                .body(body.clone()),
            AppError::Validation(errors) => {
                let data = serde_json::to_value(errors).ok();
                builder.json(ApiResponse::new(false, self.to_string(), data))
            }
            AppError::Internal(detail) => {
                // O detalhe fica só no log
                log::error!("Internal error: {}", detail);
                builder.json(ApiResponse::failure(self.to_string()))
            }
            _ => builder.json(ApiResponse::failure(self.to_string())),
        }
    }
}
