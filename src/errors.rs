use actix_web::HttpResponse;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors surfaced at the HTTP boundary. Injected failures keep their domain
/// cause for logging but answer with a generic message only.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to fetch users")]
    FetchUsers(#[source] DomainError),

    #[error("Failed to fetch products")]
    FetchProducts(#[source] DomainError),

    #[error("Order processing failed")]
    ProcessOrder(#[source] DomainError),

    #[error("Invalid request body: {0}")]
    BadRequest(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    #[error("Not found")]
    NotFound,
}

impl actix_web::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let body = serde_json::json!({ "error": self.to_string() });
        match self {
            AppError::FetchUsers(_) | AppError::FetchProducts(_) | AppError::ProcessOrder(_) => {
                HttpResponse::InternalServerError().json(body)
            }
            AppError::BadRequest(_) | AppError::InvalidQuery(_) => {
                HttpResponse::BadRequest().json(body)
            }
            AppError::NotFound => HttpResponse::NotFound().json(body),
        }
    }
}
