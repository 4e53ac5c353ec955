//! 内存缓冲 Sink 实现
//!
//! 面向调试与测试：把所有日志行以 `"[TAG] " + msg + "\n"` 的简单格式
//! 追加到内部缓冲区，之后可以读取缓冲内容来断言某条日志是否被写出。

use crate::core::level::Level;
use crate::sinks::traits::Sink;
use std::sync::Mutex;

/// 内存缓冲 Sink
///
/// 每次调用追加一行 `"[DBG] "` / `"[INF] "` / `"[WRN] "` / `"[ERR] "` /
/// `"[FTL] "` 前缀的文本。内部用 `Mutex` 串行化追加，可以安全地被
/// 多个 Composer 跨线程共享。
///
/// `fatal` 只写入缓冲，**不会**终止进程。
#[derive(Debug, Default)]
pub struct BufferSink {
    buf: Mutex<String>,
}

impl BufferSink {
    /// 创建空的缓冲 Sink
    pub fn new() -> Self {
        Self::default()
    }

    /// 读取累积的缓冲内容
    pub fn contents(&self) -> String {
        match self.buf.lock() {
            Ok(buf) => buf.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// 清空缓冲
    pub fn clear(&self) {
        match self.buf.lock() {
            Ok(mut buf) => buf.clear(),
            Err(poisoned) => poisoned.into_inner().clear(),
        }
    }

    fn append(&self, level: Level, message: &str) {
        let mut guard = match self.buf.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push('[');
        guard.push_str(level.tag());
        guard.push_str("] ");
        guard.push_str(message);
        guard.push('\n');
    }
}

impl Sink for BufferSink {
    fn debug(&self, message: &str) {
        self.append(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.append(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.append(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.append(Level::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.append(Level::Fatal, message);
    }

    fn name(&self) -> &'static str {
        "buffer"
    }
}
