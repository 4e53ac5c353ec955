//! 定义 objlog 的配置结构体。
//!
//! 控制台 sink 的行为通过 [`ConsoleConfig`] 配置，既可以在代码中
//! 构造，也可以反序列化自配置文件片段，或经由 [`ConsoleConfig::from_env`]
//! 从环境变量读取。

use crate::core::level::Level;
use crate::error::{ObjlogError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// 控制台输出的目标流
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleTarget {
    /// 标准输出
    Stdout,
    /// 标准错误（默认）
    #[default]
    Stderr,
}

/// 控制台 Sink 配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// 输出目标流
    pub target: ConsoleTarget,
    /// 是否为级别标签着色
    pub color_enabled: bool,
    /// 最低输出级别；`None` 表示不过滤
    pub min_level: Option<Level>,
    /// fatal 写入后是否以退出码 1 终止进程
    pub exit_on_fatal: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            target: ConsoleTarget::Stderr,
            color_enabled: true,
            min_level: None,
            exit_on_fatal: true,
        }
    }
}

impl ConsoleConfig {
    /// 从环境变量读取控制台配置
    ///
    /// 识别的变量：
    /// - `OBJLOG_CONSOLE_LEVEL`：最低输出级别（`debug`/`info`/`warn`/`error`/`fatal`）
    /// - `OBJLOG_CONSOLE_COLOR`：`1`/`true`/`on` 或 `0`/`false`/`off`
    /// - `OBJLOG_CONSOLE_TARGET`：`stdout` 或 `stderr`
    ///
    /// 未设置或为空的变量保持默认值；无法解析的值返回错误。
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(raw) = env::var("OBJLOG_CONSOLE_LEVEL") {
            if !raw.is_empty() {
                config.min_level = Some(raw.parse()?);
            }
        }

        if let Ok(raw) = env::var("OBJLOG_CONSOLE_COLOR") {
            match raw.to_ascii_lowercase().as_str() {
                "" => {}
                "1" | "true" | "on" => config.color_enabled = true,
                "0" | "false" | "off" => config.color_enabled = false,
                other => {
                    return Err(ObjlogError::env_config(format!(
                        "invalid OBJLOG_CONSOLE_COLOR value: {}",
                        other
                    )))
                }
            }
        }

        if let Ok(raw) = env::var("OBJLOG_CONSOLE_TARGET") {
            match raw.to_ascii_lowercase().as_str() {
                "" => {}
                "stdout" => config.target = ConsoleTarget::Stdout,
                "stderr" => config.target = ConsoleTarget::Stderr,
                other => {
                    return Err(ObjlogError::env_config(format!(
                        "invalid OBJLOG_CONSOLE_TARGET value: {}",
                        other
                    )))
                }
            }
        }

        Ok(config)
    }
}
