//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 错误码规范
//!
//! | 错误码 | 分类 | HTTP |
//! |--------|------|------|
//! | E0000 | 成功 | 200 |
//! | E0002 | 请求验证失败 | 400 |
//! | E0003 | 资源不存在 | 404 |
//! | E1001 | 非法状态转换 | 409 |
//! | E1002 | 并发冲突 (可重试) | 409 |
//! | E1003 | 金额校验失败 | 422 |
//! | E9xxx | 系统错误 | 500 |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use shared::order::OrderStatus;
use tracing::error;

use crate::orders::TransitionError;

/// API 统一响应结构
///
/// ```json
/// {
///   "code": "E0000",
///   "message": "Success",
///   "data": { ... }
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 错误码 (E0000 表示成功)
    pub code: String,
    /// 消息
    pub message: String,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 业务逻辑错误 (4xx) ==========
    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Cannot transition from {current} to {requested}")]
    /// 非法状态转换 (409)，响应携带合法动作集合
    InvalidTransition {
        current: OrderStatus,
        requested: OrderStatus,
        allowed: Vec<OrderStatus>,
    },

    #[error("Conflict: {0}")]
    /// 并发冲突 (409)，客户端应重新加载后重试
    Conflict(String),

    #[error("Invalid amount: {0}")]
    /// 金额校验失败 (422)
    InvalidAmount(String),

    #[error("Validation failed: {0}")]
    /// 请求验证失败 (400)
    Validation(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Storage error: {0}")]
    /// 存储错误 (500)
    Storage(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, data) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "E0003", msg, None),

            AppError::InvalidTransition {
                current,
                requested,
                allowed,
            } => (
                StatusCode::CONFLICT,
                "E1001",
                format!("Cannot transition from {} to {}", current, requested),
                Some(serde_json::json!({
                    "current_status": current,
                    "requested_status": requested,
                    "allowed": allowed,
                })),
            ),

            AppError::Conflict(msg) => (
                StatusCode::CONFLICT,
                "E1002",
                msg,
                Some(serde_json::json!({ "retryable": true })),
            ),

            AppError::InvalidAmount(msg) => (StatusCode::UNPROCESSABLE_ENTITY, "E1003", msg, None),

            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "E0002", msg, None),

            AppError::Storage(msg) => {
                error!(target: "storage", error = %msg, "Storage error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9002",
                    "Storage error".to_string(),
                    None,
                )
            }

            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "E9001",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(AppResponse {
            code: code.to_string(),
            message,
            data,
        });

        (status, body).into_response()
    }
}

impl From<TransitionError> for AppError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NotFound(id) => {
                AppError::NotFound(format!("Order {} not found", id))
            }
            TransitionError::InvalidTransition {
                current,
                requested,
                allowed,
            } => AppError::InvalidTransition {
                current,
                requested,
                allowed,
            },
            TransitionError::Conflict(id) => AppError::Conflict(format!(
                "Order {} was modified concurrently, reload and retry",
                id
            )),
            TransitionError::InvalidAmount(msg) => AppError::InvalidAmount(msg),
            TransitionError::Storage(e) => AppError::Storage(e.to_string()),
        }
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        code: "E0000".to_string(),
        message: "Success".to_string(),
        data: Some(data),
    })
}
