//! 服务器级错误定义

use crate::orders::StoreError;

pub type Result<T> = std::result::Result<T, ServerError>;

/// 启动和运行期错误
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),

    #[error("Internal error: {0}")]
    Internal(String),
}
