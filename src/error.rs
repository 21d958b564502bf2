//! 错误类型定义

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// 可变参数步骤（`values`、`select`、`within` 等）至少需要一个参数
    #[error("参数列表不能为空: {step}()")]
    EmptyArgumentList { step: &'static str },

    #[error("无效的参数: {0}")]
    InvalidArgument(String),

    #[error("配置错误: {0}")]
    ConfigError(String),
}

impl Error {
    /// 是否属于调用方参数错误
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::EmptyArgumentList { .. } | Error::InvalidArgument(_)
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::ConfigError(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EmptyArgumentList { step: "values" };
        assert_eq!(err.to_string(), "参数列表不能为空: values()");
        assert!(err.is_invalid_argument());
        assert!(!Error::ConfigError("x".into()).is_invalid_argument());
    }
}
