//! 记录组合器
//!
//! `Composer` 是装饰组件本身：持有前缀、后缀、上下文参数映射、当前
//! 格式化器以及当前 sink 的共享引用，并暴露按级别的 emit 操作。领域
//! 对象通过持有一个 `Composer` 字段获得结构化日志输出能力，而无需
//! 自己实现任何日志逻辑。
//!
//! # 并发
//!
//! emit 路径只读自身状态，多个线程共享 `&Composer` 并发 emit 是安全
//! 的（写入的串行化由 sink 自己负责）。突变器（`set_*`）不做内部
//! 加锁；在多个执行上下文中对同一个 Composer 同时突变与 emit 属于
//! 调用方责任（外部加锁），以保持 emit 热路径无锁。

use crate::core::formatter::{ContextMap, Formatter};
use crate::core::level::Level;
use crate::sinks::traits::Sink;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// 记录组合器
///
/// 始终持有非空的 sink 与 formatter：显式构造时未提供的部分回退到
/// 进程级默认值（见 [`crate::default_sink`] / [`crate::default_formatter`]）。
///
/// 没有状态机：每个操作在任何时刻都合法，突变立即对后续 emit 生效，
/// 且从不影响已经发出的行。
///
/// # 派生
///
/// `Composer` 的 [`Clone`] 实现即 clone-and-specialize 协议：克隆体
/// 共享同一个 sink 与 formatter 引用（`Arc` 克隆），而 prefix、suffix
/// 与上下文参数映射是值拷贝——之后任何一侧的突变都不会影响另一侧。
/// 父子领域对象借此派生出继承既有装饰状态、又彼此独立的日志器。
///
/// ```rust
/// use objlog::{BufferSink, Composer};
/// use std::sync::Arc;
///
/// let buffer = Arc::new(BufferSink::new());
/// let parent = Composer::with_sink(buffer.clone()).with_prefix("Brand(DeLorean): ");
///
/// let mut child = parent.clone();
/// child.set_prefix(format!("{}Model(DMC-12): ", parent.prefix()));
/// child.info("Wrumm, Wrumm", &[]);
///
/// assert_eq!(
///     buffer.contents(),
///     "[INF] Brand(DeLorean): Model(DMC-12): Wrumm, Wrumm\n"
/// );
/// assert_eq!(parent.prefix(), "Brand(DeLorean): ");
/// ```
#[derive(Clone)]
pub struct Composer {
    sink: Arc<dyn Sink>,
    formatter: Arc<dyn Formatter>,
    prefix: String,
    suffix: String,
    context: ContextMap,
}

impl Composer {
    /// 创建使用进程级默认 sink 与默认 formatter 的组合器
    ///
    /// 默认值在构造时快照；之后对全局默认值的重新赋值不影响已经
    /// 构造的实例。
    pub fn new() -> Self {
        Self::with_sink(crate::default_sink())
    }

    /// 创建绑定到指定 sink 的组合器
    ///
    /// sink 以共享引用持有：任意多个组合器可以指向同一个 sink 实例，
    /// 组合器不管理其生命周期。
    pub fn with_sink(sink: Arc<dyn Sink>) -> Self {
        Self {
            sink,
            formatter: crate::default_formatter(),
            prefix: String::new(),
            suffix: String::new(),
            context: ContextMap::new(),
        }
    }

    // --- 链式构造 ---

    /// 设置前缀并返回自身，用于构造时链式调用
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// 设置后缀并返回自身
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// 插入单个上下文参数并返回自身
    pub fn with_arg(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// 整体替换上下文参数映射并返回自身
    pub fn with_args(mut self, context: ContextMap) -> Self {
        self.context = context;
        self
    }

    /// 设置格式化器并返回自身
    pub fn with_formatter(mut self, formatter: Arc<dyn Formatter>) -> Self {
        self.formatter = formatter;
        self
    }

    // --- 突变器与访问器 ---

    /// 设置所有后续日志行的前缀
    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    /// 当前前缀（可能为空字符串）
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// 设置所有后续日志行的后缀
    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    /// 当前后缀（可能为空字符串）
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// 整体替换上下文参数映射
    ///
    /// 映射永远存在；要清空请使用 [`Composer::clear_args`]。
    pub fn set_args(&mut self, context: ContextMap) {
        self.context = context;
    }

    /// 清空上下文参数映射
    pub fn clear_args(&mut self) {
        self.context.clear();
    }

    /// 插入或覆盖单个上下文参数
    pub fn set_arg(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.context.insert(key.into(), value.into());
    }

    /// 当前上下文参数映射的共享借用
    ///
    /// 返回活映射的借用而非防御性拷贝；需要就地修改时使用
    /// [`Composer::args_mut`]。
    pub fn args(&self) -> &ContextMap {
        &self.context
    }

    /// 当前上下文参数映射的可变借用
    pub fn args_mut(&mut self) -> &mut ContextMap {
        &mut self.context
    }

    /// 替换当前格式化器
    pub fn set_formatter(&mut self, formatter: Arc<dyn Formatter>) {
        self.formatter = formatter;
    }

    /// 当前格式化器的共享引用
    pub fn formatter(&self) -> Arc<dyn Formatter> {
        self.formatter.clone()
    }

    /// 替换当前 sink
    pub fn set_sink(&mut self, sink: Arc<dyn Sink>) {
        self.sink = sink;
    }

    /// 当前 sink 的共享引用
    pub fn sink(&self) -> Arc<dyn Sink> {
        self.sink.clone()
    }

    // --- emit 操作 ---

    /// 渲染一条记录并转发到当前 sink 的同级别操作
    ///
    /// 尽力交付：无返回值、无错误路径。sink 写入失败由 sink 自行
    /// 消化，组合器无法也不会观察到。
    pub fn emit(&self, level: Level, template: &str, args: &[Value]) {
        let line = self.formatter.format(
            level,
            &self.prefix,
            &self.suffix,
            template,
            args,
            &self.context,
        );
        self.sink.write(level, &line);
    }

    /// 以 DEBUG 级别发出一条记录
    pub fn debug(&self, template: &str, args: &[Value]) {
        self.emit(Level::Debug, template, args);
    }

    /// 以 INFO 级别发出一条记录
    pub fn info(&self, template: &str, args: &[Value]) {
        self.emit(Level::Info, template, args);
    }

    /// 以 WARN 级别发出一条记录
    pub fn warn(&self, template: &str, args: &[Value]) {
        self.emit(Level::Warn, template, args);
    }

    /// 以 ERROR 级别发出一条记录
    pub fn error(&self, template: &str, args: &[Value]) {
        self.emit(Level::Error, template, args);
    }

    /// 以 FATAL 级别发出一条记录
    ///
    /// 组合器总是先格式化并转发；随后是否退出进程取决于当前 sink
    /// 的 fatal 契约（见各 sink 的文档）。
    pub fn fatal(&self, template: &str, args: &[Value]) {
        self.emit(Level::Fatal, template, args);
    }
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Composer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composer")
            .field("sink", &self.sink.name())
            .field("prefix", &self.prefix)
            .field("suffix", &self.suffix)
            .field("context", &self.context)
            .finish_non_exhaustive()
    }
}
