//! 多路分发 Sink 实现
//!
//! 当一个输出目标不够用时（例如同时写本地 stderr 与测试缓冲），
//! `MultiSink` 把每条消息按注册顺序重放给一组子 sink。它自身就是
//! 一个 [`Sink`]，可以直接挂到任意 Composer 上。

use crate::core::level::Level;
use crate::sinks::traits::Sink;
use std::sync::{Arc, RwLock};

/// 多路分发 Sink
///
/// 持有一个有序的子 sink 序列（可以为空）。每个级别操作按注册顺序
/// 无条件调用每个子 sink 的同级别操作：没有提前退出，也没有跨子
/// sink 的原子性——消息可能已经完整交付给第 1 个子 sink 而对第 2 个
/// 失败，没有回滚。子 sink 的失败由其自身消化，分发器没有错误通道。
///
/// 不做按引用去重：同一个 sink 注册两次就会收到两次消息。基线契约
/// 不提供按身份移除，整体替换用 [`MultiSink::set_sinks`]。
///
/// **fatal 契约**：分发器自身从不终止进程，但某个子 sink 的 fatal
/// 可能会（见各子 sink 文档）；此时排在它之后的子 sink 收不到消息。
#[derive(Debug, Default)]
pub struct MultiSink {
    sinks: RwLock<Vec<Arc<dyn Sink>>>,
}

impl MultiSink {
    /// 创建空的分发器
    pub fn new() -> Self {
        Self::default()
    }

    /// 用一组初始子 sink 创建分发器，顺序即注册顺序
    pub fn with_sinks(sinks: Vec<Arc<dyn Sink>>) -> Self {
        Self {
            sinks: RwLock::new(sinks),
        }
    }

    /// 追加一个子 sink 到序列末尾
    pub fn add(&self, sink: Arc<dyn Sink>) {
        match self.sinks.write() {
            Ok(mut sinks) => sinks.push(sink),
            Err(poisoned) => poisoned.into_inner().push(sink),
        }
    }

    /// 整体替换子 sink 序列
    pub fn set_sinks(&self, sinks: Vec<Arc<dyn Sink>>) {
        match self.sinks.write() {
            Ok(mut guard) => *guard = sinks,
            Err(poisoned) => *poisoned.into_inner() = sinks,
        }
    }

    /// 当前注册的子 sink 数量
    pub fn len(&self) -> usize {
        match self.sinks.read() {
            Ok(sinks) => sinks.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// 是否没有任何子 sink
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 按注册顺序把消息重放给每个子 sink
    fn fan_out(&self, level: Level, message: &str) {
        let sinks = match self.sinks.read() {
            Ok(sinks) => sinks,
            Err(poisoned) => poisoned.into_inner(),
        };
        for sink in sinks.iter() {
            sink.write(level, message);
        }
    }
}

impl Sink for MultiSink {
    fn debug(&self, message: &str) {
        self.fan_out(Level::Debug, message);
    }

    fn info(&self, message: &str) {
        self.fan_out(Level::Info, message);
    }

    fn warn(&self, message: &str) {
        self.fan_out(Level::Warn, message);
    }

    fn error(&self, message: &str) {
        self.fan_out(Level::Error, message);
    }

    fn fatal(&self, message: &str) {
        self.fan_out(Level::Fatal, message);
    }

    fn name(&self) -> &'static str {
        "multi"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sinks::buffer::BufferSink;
    use std::sync::Mutex;

    #[test]
    fn test_fan_out_to_all_children() {
        let first = Arc::new(BufferSink::new());
        let second = Arc::new(BufferSink::new());
        let multi = MultiSink::with_sinks(vec![first.clone(), second.clone()]);

        multi.debug("From Debug");
        multi.info("From Info");
        multi.warn("From Warn");
        multi.error("From Error");
        multi.fatal("From Fatal");

        let expected = "[DBG] From Debug\n\
                        [INF] From Info\n\
                        [WRN] From Warn\n\
                        [ERR] From Error\n\
                        [FTL] From Fatal\n";
        assert_eq!(first.contents(), expected);
        assert_eq!(second.contents(), expected);
    }

    #[test]
    fn test_empty_dispatcher_is_a_no_op() {
        let multi = MultiSink::new();
        assert!(multi.is_empty());
        multi.info("nobody listens");
    }

    #[test]
    fn test_registration_order_is_preserved() {
        // 记录到达顺序的探针 sink
        #[derive(Debug)]
        struct Probe {
            id: &'static str,
            order: Arc<Mutex<Vec<&'static str>>>,
        }

        impl Sink for Probe {
            fn debug(&self, _m: &str) {}
            fn info(&self, _m: &str) {
                if let Ok(mut order) = self.order.lock() {
                    order.push(self.id);
                }
            }
            fn warn(&self, _m: &str) {}
            fn error(&self, _m: &str) {}
            fn fatal(&self, _m: &str) {}
            fn name(&self) -> &'static str {
                "probe"
            }
        }

        let order = Arc::new(Mutex::new(Vec::new()));
        let multi = MultiSink::new();
        for id in ["a", "b", "c"] {
            multi.add(Arc::new(Probe {
                id,
                order: order.clone(),
            }));
        }
        multi.info("ping");
        assert_eq!(*order.lock().unwrap(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_duplicate_children_receive_duplicates() {
        let buffer = Arc::new(BufferSink::new());
        let multi = MultiSink::with_sinks(vec![buffer.clone(), buffer.clone()]);
        multi.warn("twice");
        assert_eq!(buffer.contents(), "[WRN] twice\n[WRN] twice\n");
    }

    #[test]
    fn test_set_sinks_replaces_wholesale() {
        let old = Arc::new(BufferSink::new());
        let new = Arc::new(BufferSink::new());
        let multi = MultiSink::with_sinks(vec![old.clone()]);

        multi.set_sinks(vec![new.clone()]);
        assert_eq!(multi.len(), 1);
        multi.error("redirected");

        assert_eq!(old.contents(), "");
        assert_eq!(new.contents(), "[ERR] redirected\n");
    }

    #[test]
    fn test_dynamic_add() {
        let buffer = Arc::new(BufferSink::new());
        let multi = MultiSink::new();
        multi.info("dropped");
        multi.add(buffer.clone());
        multi.info("kept");
        assert_eq!(buffer.contents(), "[INF] kept\n");
    }
}
