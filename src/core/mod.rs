//! objlog 核心模块
//!
//! 本模块包含记录组合与分发引擎的核心组件：级别定义、格式化器
//! 与记录组合器。

pub mod composer;
pub mod formatter;
pub mod level;

// 重新导出核心类型
pub use self::composer::Composer;
pub use self::formatter::{ContextMap, DefaultFormatter, Formatter};
pub use self::level::Level;
