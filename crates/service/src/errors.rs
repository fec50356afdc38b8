use thiserror::Error;

use crate::exports::channel::ChannelError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Invariant(String),
    #[error("{0}")]
    Authentication(String),
    #[error("{0}")]
    Authorization(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("database error: {0}")]
    Db(String),
    #[error("storage error: {0}")]
    Storage(String),
    #[error("message channel error: {0}")]
    Channel(#[from] ChannelError),
    #[error("internal error: {0}")]
    Internal(String),
}

impl ServiceError {
    pub fn not_found(message: impl Into<String>) -> Self { Self::NotFound(message.into()) }

    /// Client faults carry a message that is safe to return to the caller.
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::Validation(_)
                | Self::Invariant(_)
                | Self::Authentication(_)
                | Self::Authorization(_)
                | Self::NotFound(_)
                | Self::Conflict(_)
                | Self::PayloadTooLarge(_)
        )
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::Validation(msg) => ServiceError::Validation(msg),
            models::errors::ModelError::Db(msg) => ServiceError::Db(msg),
        }
    }
}

impl From<sea_orm::DbErr> for ServiceError {
    fn from(e: sea_orm::DbErr) -> Self { ServiceError::Db(e.to_string()) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn model_errors_keep_their_class() {
        let v: ServiceError = models::errors::ModelError::Validation("bad".into()).into();
        assert!(matches!(v, ServiceError::Validation(_)));
        let d: ServiceError = models::errors::ModelError::Db("down".into()).into();
        assert!(matches!(d, ServiceError::Db(_)));
        assert!(!d.is_client_error());
    }
}
