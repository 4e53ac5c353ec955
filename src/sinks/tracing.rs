//! tracing 生态桥接 Sink 实现
//!
//! 把日志行转发给 `tracing` 的同级别事件宏，除此之外不添加任何
//! 自己的行为。行文本作为事件消息原样传递，时间戳、级别标签与
//! 过滤全部交给已安装的 subscriber。

use crate::sinks::traits::Sink;

/// tracing 桥接 Sink
///
/// 五个级别映射到 `tracing` 事件：debug/info/warn/error 一一对应；
/// `tracing` 没有 fatal 级别，**fatal 映射为 `ERROR` 事件并附加
/// `fatal = true` 字段**，且不会终止进程。
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl TracingSink {
    /// 创建 tracing 桥接 Sink
    pub fn new() -> Self {
        Self
    }
}

impl Sink for TracingSink {
    fn debug(&self, message: &str) {
        ::tracing::debug!("{}", message);
    }

    fn info(&self, message: &str) {
        ::tracing::info!("{}", message);
    }

    fn warn(&self, message: &str) {
        ::tracing::warn!("{}", message);
    }

    fn error(&self, message: &str) {
        ::tracing::error!("{}", message);
    }

    fn fatal(&self, message: &str) {
        ::tracing::error!(fatal = true, "{}", message);
    }

    fn name(&self) -> &'static str {
        "tracing"
    }
}
