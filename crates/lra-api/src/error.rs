//! LRA API — HTTP error responses.

use std::error::Error as _;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use lra_core::error::{ClientError, GenericLraError, WebApplicationError};
use lra_core::lra_id::LraId;
use serde::Serialize;

use crate::config::ErrorResponseConfig;

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
    /// Status code carried by the error, even when it is not a valid HTTP status.
    pub status_code: i32,
    /// Locator of the LRA involved, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lra_id: Option<String>,
    /// Cause chain, outermost first. Only populated when causes are exposed.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub causes: Vec<String>,
}

/// HTTP-layer wrapper around `ClientError` that implements `IntoResponse`.
#[derive(Debug)]
pub struct ApiError {
    error: ClientError,
    expose_causes: bool,
}

impl ApiError {
    /// Wraps `error`, rendering it according to `config`.
    #[must_use]
    pub fn with_config(error: impl Into<ClientError>, config: &ErrorResponseConfig) -> Self {
        Self {
            error: error.into(),
            expose_causes: config.expose_causes,
        }
    }

    /// The wrapped client error.
    #[must_use]
    pub fn client_error(&self) -> &ClientError {
        &self.error
    }

    /// The HTTP status this error is served with. Codes that are not valid
    /// HTTP statuses are served as 500.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.mapped_status().unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Builds the JSON body for this error.
    #[must_use]
    pub fn body(&self) -> ErrorBody {
        let error_code = match &self.error {
            ClientError::Lra(_) => "lra_error",
            ClientError::WebApplication(_) => "web_application_error",
        };

        let causes = if self.expose_causes {
            std::iter::successors(self.error.source(), |&cause| cause.source())
                .map(ToString::to_string)
                .collect()
        } else {
            Vec::new()
        };

        ErrorBody {
            error: error_code,
            message: self.error.message().to_string(),
            status_code: self.error.status_code(),
            lra_id: self.error.lra_id().map(ToString::to_string),
            causes,
        }
    }

    fn mapped_status(&self) -> Option<StatusCode> {
        self.error
            .http_status()
            .and_then(|code| StatusCode::from_u16(code).ok())
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        Self::with_config(err, &ErrorResponseConfig::default())
    }
}

impl From<GenericLraError> for ApiError {
    fn from(err: GenericLraError) -> Self {
        Self::from(ClientError::from(err))
    }
}

impl From<WebApplicationError> for ApiError {
    fn from(err: WebApplicationError) -> Self {
        Self::from(ClientError::from(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let lra_id = self.error.lra_id().map(LraId::as_str);

        if self.mapped_status().is_none() || status.is_server_error() {
            tracing::error!(
                status_code = self.error.status_code(),
                lra_id,
                error = %self.error,
                "LRA client error"
            );
        } else {
            tracing::warn!(
                status_code = self.error.status_code(),
                lra_id,
                error = %self.error,
                "LRA client error"
            );
        }

        (status, Json(self.body())).into_response()
    }
}
