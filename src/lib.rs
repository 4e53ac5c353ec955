//! objlog - 可组合的对象日志装饰库
//!
//! objlog 让任意领域对象通过持有一个小小的日志组件获得结构化、带
//! 前缀/后缀、富含上下文参数的日志输出，而对象自身不需要实现任何
//! 日志逻辑。输出目标（控制台、内存缓冲、多路分发、tracing 桥接）
//! 可插拔在一个最小的 [`Sink`] 能力接口之后。
//!
//! # 快速开始
//!
//! ```rust
//! use objlog::{BufferSink, Composer};
//! use std::sync::Arc;
//!
//! let buffer = Arc::new(BufferSink::new());
//! let log = Composer::with_sink(buffer.clone()).with_prefix("Person(Mr. Foo): ");
//!
//! log.info("Hello! I am created", &[]);
//! assert_eq!(buffer.contents(), "[INF] Person(Mr. Foo): Hello! I am created\n");
//! ```
//!
//! # 派生（clone-and-specialize）
//!
//! 相关对象的层级（例如父/子领域对）可以通过克隆派生出继承既有
//! 前缀/后缀/上下文参数、之后又彼此独立的日志器：
//!
//! ```rust
//! use objlog::{BufferSink, Composer};
//! use std::sync::Arc;
//!
//! let buffer = Arc::new(BufferSink::new());
//! let brand = Composer::with_sink(buffer.clone()).with_prefix("Brand(Ferrari): ");
//!
//! let mut car = brand.clone();
//! car.set_prefix(format!("{}Model(F-40): ", brand.prefix()));
//!
//! car.info("Roarr", &[]);
//! assert_eq!(buffer.contents(), "[INF] Brand(Ferrari): Model(F-40): Roarr\n");
//! ```
//!
//! # 进程级默认值
//!
//! [`Composer::new`] 使用进程级默认 sink（控制台）与默认格式化器。
//! 二者都可以全局替换（例如测试替换为缓冲 sink），这是刻意的环境
//! 配置而非逐调用点配置——需要隔离的调用方应当显式传入 sink。

pub mod config;
pub mod core;
pub mod error;
pub mod sinks;

// 重新导出主要类型
pub use crate::config::{ConsoleConfig, ConsoleTarget};
pub use crate::core::composer::Composer;
pub use crate::core::formatter::{ContextMap, DefaultFormatter, Formatter};
pub use crate::core::level::Level;
pub use crate::error::{ObjlogError, Result};
pub use crate::sinks::buffer::BufferSink;
pub use crate::sinks::console::ConsoleSink;
pub use crate::sinks::multi::MultiSink;
pub use crate::sinks::tracing::TracingSink;
pub use crate::sinks::traits::Sink;

use once_cell::sync::Lazy;
use std::sync::{Arc, RwLock};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// 进程级默认 sink：未显式绑定 sink 的 Composer 使用它
static DEFAULT_SINK: Lazy<RwLock<Arc<dyn Sink>>> =
    Lazy::new(|| RwLock::new(Arc::new(ConsoleSink::default())));

/// 进程级默认格式化器
static DEFAULT_FORMATTER: Lazy<RwLock<Arc<dyn Formatter>>> =
    Lazy::new(|| RwLock::new(Arc::new(DefaultFormatter)));

/// 当前的进程级默认 sink
///
/// 初始为写到标准错误的 [`ConsoleSink`]。
pub fn default_sink() -> Arc<dyn Sink> {
    match DEFAULT_SINK.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// 全局替换进程级默认 sink
///
/// 只影响之后构造的 Composer；已构造的实例保留构造时的快照。
pub fn set_default_sink(sink: Arc<dyn Sink>) {
    match DEFAULT_SINK.write() {
        Ok(mut guard) => *guard = sink,
        Err(poisoned) => *poisoned.into_inner() = sink,
    }
}

/// 当前的进程级默认格式化器
///
/// 初始为 [`DefaultFormatter`]。
pub fn default_formatter() -> Arc<dyn Formatter> {
    match DEFAULT_FORMATTER.read() {
        Ok(guard) => guard.clone(),
        Err(poisoned) => poisoned.into_inner().clone(),
    }
}

/// 全局替换进程级默认格式化器
pub fn set_default_formatter(formatter: Arc<dyn Formatter>) {
    match DEFAULT_FORMATTER.write() {
        Ok(mut guard) => *guard = formatter,
        Err(poisoned) => *poisoned.into_inner() = formatter,
    }
}
