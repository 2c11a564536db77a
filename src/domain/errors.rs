use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Database connection timeout")]
    DatabaseTimeout,
    #[error("Payment processing failed")]
    PaymentFailed,
}
