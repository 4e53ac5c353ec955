//! 日志级别定义
//!
//! 封闭的五级枚举，按约定全序排列：debug < info < warn < error < fatal。
//! 核心从不按级别过滤——每次 emit 都会到达 sink，级别过滤（如果有）
//! 是 sink 的职责。

use crate::error::ObjlogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 日志级别
///
/// 变体顺序决定了派生的全序关系。
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// 调试信息
    Debug,
    /// 常规信息
    Info,
    /// 警告
    Warn,
    /// 错误
    Error,
    /// 致命错误（是否随之退出进程取决于具体 sink）
    Fatal,
}

impl Level {
    /// 所有级别，按升序排列
    pub const ALL: [Level; 5] = [
        Level::Debug,
        Level::Info,
        Level::Warn,
        Level::Error,
        Level::Fatal,
    ];

    /// 级别的小写名称，与 serde 表示一致
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
            Level::Fatal => "fatal",
        }
    }

    /// 控制台输出使用的长标签
    pub fn label(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Fatal => "FATAL",
        }
    }

    /// 缓冲 sink 输出使用的三字母短标签
    pub fn tag(&self) -> &'static str {
        match self {
            Level::Debug => "DBG",
            Level::Info => "INF",
            Level::Warn => "WRN",
            Level::Error => "ERR",
            Level::Fatal => "FTL",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = ObjlogError;

    /// 大小写不敏感地解析级别名称
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(Level::Debug),
            "info" => Ok(Level::Info),
            "warn" => Ok(Level::Warn),
            "error" => Ok(Level::Error),
            "fatal" => Ok(Level::Fatal),
            _ => Err(ObjlogError::InvalidLevel(s.to_string())),
        }
    }
}
