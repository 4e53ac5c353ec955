//! objlog Sinks 模块
//!
//! 提供各种日志输出目标的实现，包括控制台、内存缓冲、多路分发与
//! tracing 生态桥接。
//!
//! - 统一的 [`Sink`](traits::Sink) trait 接口
//! - 多路分发器按注册顺序重放消息
//! - 缓冲 sink 面向测试验证

pub mod buffer;
pub mod console;
pub mod multi;
pub mod tracing;
pub mod traits;

// 重新导出主要类型
pub use self::buffer::BufferSink;
pub use self::console::ConsoleSink;
pub use self::multi::MultiSink;
pub use self::tracing::TracingSink;
pub use self::traits::Sink;
