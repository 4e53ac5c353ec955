//! 控制台输出 Sink 实现
//!
//! 把日志行写到标准错误或标准输出，带时间戳与级别标签，支持彩色
//! 输出和 sink 侧的级别过滤。

use crate::config::{ConsoleConfig, ConsoleTarget};
use crate::core::level::Level;
use crate::sinks::traits::Sink;
use colored::Colorize;
use std::io::{self, Write};
use std::process;

/// 时间戳格式
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

/// 控制台 Sink
///
/// 每行输出 `<timestamp> [LEVEL] <message>`。低于 `min_level` 的行被
/// 丢弃（级别过滤是 sink 的职责，Composer 从不过滤）。写入失败静默
/// 降级，不向调用方传播。
///
/// **fatal 契约**：`exit_on_fatal` 为 true（默认）时，fatal 行写入后
/// 进程以退出码 1 终止；测试中请将其置为 false 或改用
/// [`crate::BufferSink`]。
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    config: ConsoleConfig,
}

impl ConsoleSink {
    /// 用指定配置创建控制台 Sink
    pub fn new(config: ConsoleConfig) -> Self {
        Self { config }
    }

    /// 设置最低输出级别
    pub fn with_min_level(mut self, level: Level) -> Self {
        self.config.min_level = Some(level);
        self
    }

    /// 渲染一整行输出（不含换行）
    fn format_line(&self, level: Level, message: &str) -> String {
        let timestamp = chrono::Local::now().format(TIMESTAMP_FORMAT);
        let label = if self.config.color_enabled {
            let colored = match level {
                Level::Debug => level.label().cyan(),
                Level::Info => level.label().green(),
                Level::Warn => level.label().yellow(),
                Level::Error => level.label().red(),
                Level::Fatal => level.label().red().bold(),
            };
            colored.to_string()
        } else {
            level.label().to_string()
        };
        format!("{} [{}] {}", timestamp, label, message)
    }

    fn write_line(&self, level: Level, message: &str) {
        if let Some(min) = self.config.min_level {
            if level < min {
                return;
            }
        }
        let line = self.format_line(level, message);
        // 写入失败静默降级：emit 是 fire-and-forget
        let result = match self.config.target {
            ConsoleTarget::Stdout => writeln!(io::stdout().lock(), "{}", line),
            ConsoleTarget::Stderr => writeln!(io::stderr().lock(), "{}", line),
        };
        let _ = result;
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(ConsoleConfig::default())
    }
}

impl Sink for ConsoleSink {
    fn debug(&self, message: &str) {
        self.write_line(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.write_line(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.write_line(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.write_line(Level::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.write_line(Level::Fatal, message);
        if self.config.exit_on_fatal {
            process::exit(1);
        }
    }

    fn name(&self) -> &'static str {
        "console"
    }
}
