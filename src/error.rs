//! objlog 错误类型定义
//!
//! 统一的错误处理，仅出现在配置与解析边界。Composer 与 Formatter 的
//! emit 路径是 void 且不可失败的，日志调用本身永远不会冒出错误。

use thiserror::Error;

/// objlog 操作的主要错误类型
#[derive(Error, Debug)]
pub enum ObjlogError {
    /// 无效的日志级别
    #[error("Invalid log level: {0}")]
    InvalidLevel(String),

    /// 环境变量配置错误
    #[error("Environment configuration error: {0}")]
    EnvConfig(String),

    /// 序列化/反序列化错误
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// objlog 操作的 Result 类型别名
pub type Result<T> = std::result::Result<T, ObjlogError>;

impl ObjlogError {
    /// 创建环境变量配置错误
    pub fn env_config<S: Into<String>>(msg: S) -> Self {
        Self::EnvConfig(msg.into())
    }

    /// 获取错误分类，用于诊断输出
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidLevel(_) => "level",
            Self::EnvConfig(_) => "config",
            Self::Serialization { .. } => "serialization",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ObjlogError::InvalidLevel("verbose".to_string());
        assert_eq!(err.to_string(), "Invalid log level: verbose");

        let err = ObjlogError::env_config("bad value");
        assert_eq!(
            err.to_string(),
            "Environment configuration error: bad value"
        );
    }

    #[test]
    fn test_error_from_serde_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: ObjlogError = json_err.into();
        assert!(matches!(err, ObjlogError::Serialization { .. }));
        assert!(err.to_string().contains("Serialization error"));
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(ObjlogError::InvalidLevel("x".into()).category(), "level");
        assert_eq!(ObjlogError::env_config("x").category(), "config");
    }

    #[test]
    fn test_result_type_alias() {
        fn parse_ok() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(parse_ok().unwrap(), 42);
    }
}
