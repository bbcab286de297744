//! 转换层统一错误定义
//!
//! 聚焦字段缺失、取值校验与解析失败等最小必要集合。
//! 可失败契约的错误类型由实现自定，本类型仅作为现成的默认选择，
//! 便于各实现以 `?` 统一上抛常见的解析类错误。
//!
use thiserror::Error;

/// 统一错误类型（转换实现的最小必要集）
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConvertError {
    // --- 字段级失败 ---
    #[error("missing field: {field}")]
    MissingField { field: &'static str },
    #[error("invalid value: field={field}, reason={reason}")]
    InvalidValue {
        field: &'static str,
        reason: String,
    },

    // --- 解析/序列化 ---
    #[error("parse error: {reason}")]
    Parse { reason: String },
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },

    // --- 通用 ---
    #[error("unsupported conversion: {reason}")]
    Unsupported { reason: String },
}

/// 统一 Result 类型别名
pub type ConvertResult<T> = Result<T, ConvertError>;

// ---- 常见解析错误的便捷转换 ----
// 允许实现方在字段解析处直接使用 `?` 上抛为 ConvertError

impl From<std::num::ParseIntError> for ConvertError {
    fn from(err: std::num::ParseIntError) -> Self {
        ConvertError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::num::ParseFloatError> for ConvertError {
    fn from(err: std::num::ParseFloatError) -> Self {
        ConvertError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<std::str::ParseBoolError> for ConvertError {
    fn from(err: std::str::ParseBoolError) -> Self {
        ConvertError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<uuid::Error> for ConvertError {
    fn from(err: uuid::Error) -> Self {
        ConvertError::Parse {
            reason: err.to_string(),
        }
    }
}

impl From<chrono::ParseError> for ConvertError {
    fn from(err: chrono::ParseError) -> Self {
        ConvertError::Parse {
            reason: err.to_string(),
        }
    }
}
