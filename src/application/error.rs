//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 验证错误
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 存储错误
    #[error("Store error: {0}")]
    StoreError(String),

    /// 内部错误
    #[error("Internal error: {0}")]
    InternalError(String),
}

impl ApplicationError {
    /// 创建验证错误
    pub fn validation(message: impl Into<String>) -> Self {
        Self::ValidationError(message.into())
    }
}

impl From<crate::application::ports::StoreError> for ApplicationError {
    fn from(err: crate::application::ports::StoreError) -> Self {
        Self::StoreError(err.to_string())
    }
}

impl From<crate::domain::SpeechValidationError> for ApplicationError {
    fn from(err: crate::domain::SpeechValidationError) -> Self {
        Self::ValidationError(err.to_string())
    }
}
