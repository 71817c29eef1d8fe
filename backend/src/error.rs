//! Error handling for the Drought Early Warning System
//!
//! Provides consistent error responses in English and Vietnamese

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::PredictionError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_vi: String,
    },

    #[error("Validation error: {0}")]
    ValidationError(String),

    // External service errors
    #[error("Drought model is not configured")]
    ModelNotConfigured,

    #[error("Drought model service error: {0}")]
    ModelServiceError(String),

    #[error("Invalid model output: {0}")]
    InvalidModelOutput(#[from] PredictionError),

    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message_en: String,
    pub message_vi: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ModelNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            AppError::ModelServiceError(_) | AppError::InvalidModelOutput(_) => {
                StatusCode::BAD_GATEWAY
            }
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_detail = match &self {
            AppError::Validation {
                field,
                message,
                message_vi,
            } => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: message.clone(),
                message_vi: message_vi.clone(),
                field: Some(field.clone()),
            },
            AppError::ValidationError(msg) => ErrorDetail {
                code: "VALIDATION_ERROR".to_string(),
                message_en: msg.clone(),
                message_vi: format!("Dữ liệu không hợp lệ: {}", msg),
                field: None,
            },
            AppError::ModelNotConfigured => ErrorDetail {
                code: "MODEL_NOT_CONFIGURED".to_string(),
                message_en: "Drought prediction model is not available".to_string(),
                message_vi: "Mô hình dự báo hạn hán hiện không khả dụng".to_string(),
                field: None,
            },
            AppError::ModelServiceError(msg) => ErrorDetail {
                code: "MODEL_SERVICE_ERROR".to_string(),
                message_en: format!("Drought model service error: {}", msg),
                message_vi: format!("Lỗi dịch vụ mô hình dự báo: {}", msg),
                field: None,
            },
            AppError::InvalidModelOutput(err) => ErrorDetail {
                code: "INVALID_MODEL_OUTPUT".to_string(),
                message_en: format!("Drought model returned invalid output: {}", err),
                message_vi: "Mô hình dự báo trả về kết quả không hợp lệ".to_string(),
                field: None,
            },
            AppError::Configuration(msg) => ErrorDetail {
                code: "CONFIGURATION_ERROR".to_string(),
                message_en: format!("Configuration error: {}", msg),
                message_vi: format!("Lỗi cấu hình: {}", msg),
                field: None,
            },
        };

        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        (
            self.status_code(),
            Json(ErrorResponse {
                error: error_detail,
            }),
        )
            .into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
