//! 统一错误模型
//! 定义所有错误类型和错误响应格式

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

/// 结果类型别名
pub type Result<T> = std::result::Result<T, AppError>;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// 登录凭证错误。用户不存在与密码错误共用此变体，
    /// 外部不可区分，避免用户名枚举
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Invalid or missing token")]
    Unauthorized,

    #[error("Token expired")]
    TokenExpired,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    /// 获取 HTTP 状态码
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidCredentials
            | AppError::Unauthorized
            | AppError::TokenExpired => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Database(_) | AppError::Config(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// 获取用户友好的错误消息（不包含敏感信息）
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidCredentials => "Invalid credentials".to_string(),
            AppError::Unauthorized => "Invalid or missing token".to_string(),
            AppError::TokenExpired => "Token expired".to_string(),
            AppError::NotFound(msg) => format!("Resource not found: {}", msg),
            AppError::Conflict(msg) => msg.clone(),
            AppError::Validation(msg) => msg.clone(),
            AppError::Database(_) => "Database error occurred".to_string(),
            AppError::Config(_) => "Configuration error".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
        }
    }

    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }

    // 便捷方法
    pub fn conflict(msg: &str) -> Self {
        AppError::Conflict(msg.to_string())
    }

    pub fn validation(msg: &str) -> Self {
        AppError::Validation(msg.to_string())
    }

    pub fn internal(msg: &str) -> Self {
        AppError::Internal(msg.to_string())
    }
}

/// 错误响应 DTO：统一的 {"error": "..."} 格式
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // 完整错误只进日志，响应体只携带对外消息
        if status.is_server_error() {
            tracing::error!(code = self.code(), error = %self, "Application error");
        } else {
            tracing::debug!(code = self.code(), error = %self, "Request rejected");
        }

        let body = ErrorResponse {
            error: self.user_message(),
        };

        (status, Json(body)).into_response()
    }
}

/// 从 config::ConfigError 转换
impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(AppError::InvalidCredentials.code(), 401);
        assert_eq!(AppError::Unauthorized.code(), 401);
        assert_eq!(AppError::TokenExpired.code(), 401);
        assert_eq!(AppError::NotFound("user".to_string()).code(), 404);
        assert_eq!(AppError::Conflict("dup".to_string()).code(), 409);
        assert_eq!(AppError::Validation("bad".to_string()).code(), 400);
        assert_eq!(AppError::Internal("boom".to_string()).code(), 500);
    }

    #[test]
    fn test_user_message_no_sensitive_info() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        let message = error.user_message();
        assert_eq!(message, "Database error occurred");
        assert!(!message.contains("sqlx"));

        let error = AppError::Internal("secret detail".to_string());
        assert!(!error.user_message().contains("secret detail"));
    }

    #[test]
    fn test_credential_errors_share_one_message() {
        // 用户不存在和密码错误必须产生完全相同的对外消息
        assert_eq!(AppError::InvalidCredentials.user_message(), "Invalid credentials");
        assert_eq!(AppError::InvalidCredentials.code(), 401);
    }
}
