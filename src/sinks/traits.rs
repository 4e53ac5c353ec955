//! Sink trait 定义
//!
//! 定义统一的 Sink 能力接口：任何能够在五个级别之一接收一条已经
//! 渲染完成的日志行的对象。实现此 trait 即可作为输出目标插入任意
//! Composer。
//!
//! # 契约
//!
//! - emit 是 fire-and-forget：五个级别操作对"正常"输入（空字符串、
//!   含控制字符的字符串）不得 panic，也没有错误通道可以向 Composer
//!   传播。无法写入的 sink 应当内部静默降级。
//! - `fatal` 允许在写入之后终止进程（传统的 "fatal 即退出" 语义），
//!   这是具体 sink 的属性而非 Composer 的属性；每个实现必须在文档中
//!   说明其 fatal 行为。
//! - 多个 Composer（例如原始实例与它的全部克隆）可能同时持有同一个
//!   sink 实例的 `Arc` 引用，写入的串行化由 sink 自己负责。

use crate::core::level::Level;
use std::fmt::Debug;

/// 日志输出目标的能力接口
///
/// 五个操作各接收一条已格式化的消息字符串，无返回值。通过
/// `Arc<dyn Sink>` 在 Composer 之间共享。
pub trait Sink: Send + Sync + Debug {
    /// 写入 DEBUG 级别消息
    fn debug(&self, message: &str);

    /// 写入 INFO 级别消息
    fn info(&self, message: &str);

    /// 写入 WARN 级别消息
    fn warn(&self, message: &str);

    /// 写入 ERROR 级别消息
    fn error(&self, message: &str);

    /// 写入 FATAL 级别消息
    ///
    /// 实现可以在写入后终止进程；是否如此必须在实现文档中说明。
    fn fatal(&self, message: &str);

    /// sink 的名称，用于诊断输出
    fn name(&self) -> &'static str;

    /// 按级别分发到同级别操作
    ///
    /// Composer 的 emit 经由此方法转发，保证同级别转发语义。
    fn write(&self, level: Level, message: &str) {
        match level {
            Level::Debug => self.debug(message),
            Level::Info => self.info(message),
            Level::Warn => self.warn(message),
            Level::Error => self.error(message),
            Level::Fatal => self.fatal(message),
        }
    }
}
