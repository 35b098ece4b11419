//! HTTP error mapping

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use crypto_session::CryptoError;
use shared_protocol::{ErrorKind, ErrorResponse, ProtocolError};
use thiserror::Error;
use tracing::{error, warn};

/// Error returned by every handler
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("Invalid request body: {0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Crypto(e) => e.kind(),
            // A malformed identifier cannot name a live session
            Self::Protocol(ProtocolError::InvalidSessionId) => ErrorKind::NotFound,
            Self::BadRequest(_) => ErrorKind::InvalidRequest,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::NotPaired => StatusCode::CONFLICT,
            ErrorKind::DecryptionFailed
            | ErrorKind::EncodingError
            | ErrorKind::InvalidRequest => StatusCode::BAD_REQUEST,
            ErrorKind::FatalEntropyFailure | ErrorKind::Internal => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let status = self.status();
        if status.is_server_error() {
            error!("Request aborted: {}", self);
        } else {
            warn!("Request rejected: {}", kind);
        }

        (
            status,
            Json(ErrorResponse {
                error: kind,
                message: self.to_string(),
            }),
        )
            .into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use axum::body::to_bytes;

    use super::*;

    #[test]
    fn test_status_table() {
        let cases = [
            (ApiError::from(CryptoError::SessionNotFound), StatusCode::NOT_FOUND),
            (ApiError::from(ProtocolError::InvalidSessionId), StatusCode::NOT_FOUND),
            (ApiError::from(CryptoError::NotPaired), StatusCode::CONFLICT),
            (ApiError::from(CryptoError::SelfPairing), StatusCode::BAD_REQUEST),
            (ApiError::from(CryptoError::DecryptionFailed), StatusCode::BAD_REQUEST),
            (ApiError::from(CryptoError::EncodingError), StatusCode::BAD_REQUEST),
            (ApiError::BadRequest("missing field".into()), StatusCode::BAD_REQUEST),
            (
                ApiError::from(CryptoError::EntropyUnavailable),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(CryptoError::KeyExchange("key derivation failed")),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                ApiError::from(CryptoError::Encryption),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (error, status) in cases {
            assert_eq!(error.status(), status, "{error}");
        }
    }

    #[tokio::test]
    async fn test_entropy_failure_body() {
        let response = ApiError::from(CryptoError::EntropyUnavailable).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, ErrorKind::FatalEntropyFailure);
        assert_eq!(body.message, "Secure random source unavailable");
    }

    #[tokio::test]
    async fn test_key_exchange_body_is_internal() {
        let response = ApiError::from(CryptoError::KeyExchange("non-contributory public key"))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, ErrorKind::Internal);
        assert_eq!(body.message, "Key exchange failed: non-contributory public key");
    }
}
