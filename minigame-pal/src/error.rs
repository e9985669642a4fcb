//! # Error 模块
//!
//! 定义宿主边界产生的错误类型。
//!
//! ## 设计原则
//!
//! - 适配层**不引入新的失败分类**：所有错误都来自宿主 API 本身
//! - 错误原样向上传播，不包装、不重试、不做默认值兜底

use thiserror::Error;

/// 宿主 API 调用错误
///
/// 适配层自身不产生错误，只透传宿主查询的失败结果。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HostError {
    /// 宿主接口调用失败
    #[error("宿主接口 '{api}' 调用失败: {message}")]
    QueryFailed { api: String, message: String },

    /// 宿主未提供该接口
    #[error("宿主未提供接口 '{api}'")]
    Unsupported { api: String },
}

impl HostError {
    /// 创建接口调用失败错误
    pub fn query_failed(api: impl Into<String>, message: impl Into<String>) -> Self {
        Self::QueryFailed {
            api: api.into(),
            message: message.into(),
        }
    }

    /// 创建接口缺失错误
    pub fn unsupported(api: impl Into<String>) -> Self {
        Self::Unsupported { api: api.into() }
    }
}

/// Result 类型别名
pub type PalResult<T> = Result<T, HostError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = HostError::query_failed("getSystemInfoSync", "internal error");
        assert_eq!(
            err.to_string(),
            "宿主接口 'getSystemInfoSync' 调用失败: internal error"
        );

        let err = HostError::unsupported("getBatteryInfoSync");
        assert_eq!(err.to_string(), "宿主未提供接口 'getBatteryInfoSync'");
    }
}
