//! 格式化器
//!
//! 此模块定义将一条日志记录的最终文本渲染出来的纯函数接口。
//! 格式化器无状态、无副作用，可以通过 `Arc` 在任意多个 Composer
//! 之间共享。
//!
//! 默认算法：`prefix + expand(template, args) + suffix`，当上下文参数
//! 非空时再追加 `" :: " + JSON(context)`。默认格式化器不输出级别标签，
//! 级别标签由 sink 负责添加（见 `sinks` 模块）。

use crate::core::level::Level;
use serde_json::Value;
use std::collections::BTreeMap;

/// 上下文参数映射
///
/// `BTreeMap` 保证 JSON 编码时键按字典序输出，使黄金输出测试具有
/// 确定性。
pub type ContextMap = BTreeMap<String, Value>;

/// 格式化器接口
///
/// 实现必须是纯函数：给定相同输入产生相同输出，且无副作用。
/// 任何签名匹配的 `Fn` 闭包都自动实现此 trait。
pub trait Formatter: Send + Sync {
    /// 将一条记录渲染为最终输出字符串
    ///
    /// # 参数
    ///
    /// * `level` - 日志级别（默认格式化器忽略它，级别标签由 sink 添加）
    /// * `prefix` - 行前缀
    /// * `suffix` - 行后缀
    /// * `template` - printf 风格的消息模板
    /// * `args` - 位置参数
    /// * `context` - 上下文参数映射
    fn format(
        &self,
        level: Level,
        prefix: &str,
        suffix: &str,
        template: &str,
        args: &[Value],
        context: &ContextMap,
    ) -> String;
}

impl<F> Formatter for F
where
    F: Fn(Level, &str, &str, &str, &[Value], &ContextMap) -> String + Send + Sync,
{
    fn format(
        &self,
        level: Level,
        prefix: &str,
        suffix: &str,
        template: &str,
        args: &[Value],
        context: &ContextMap,
    ) -> String {
        self(level, prefix, suffix, template, args, context)
    }
}

/// 默认格式化器
///
/// 输出 `<prefix><expanded><suffix>( :: <context-json>)`。上下文 JSON
/// 编码失败时整个 `" :: "` 后缀被静默省略（fail-soft）；上下文为空时
/// 完全不追加 `" :: "`。
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFormatter;

impl Formatter for DefaultFormatter {
    fn format(
        &self,
        _level: Level,
        prefix: &str,
        suffix: &str,
        template: &str,
        args: &[Value],
        context: &ContextMap,
    ) -> String {
        let mut line = String::with_capacity(prefix.len() + template.len() + suffix.len());
        line.push_str(prefix);
        line.push_str(&expand_template(template, args));
        line.push_str(suffix);
        if !context.is_empty() {
            if let Ok(raw) = serde_json::to_string(context) {
                line.push_str(" :: ");
                line.push_str(&raw);
            }
        }
        line
    }
}

/// printf 风格的模板展开
///
/// 支持的占位符：`%s`、`%d`、`%f`、`%v`（均按顺序消耗一个位置参数）
/// 以及转义 `%%`。参数耗尽时占位符原样保留；多余的参数被忽略；
/// 未识别的 `%x` 序列原样输出且不消耗参数。
pub fn expand_template(template: &str, args: &[Value]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next = 0usize;

    while let Some(c) = chars.next() {
        if c != '%' {
            out.push(c);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                out.push('%');
            }
            Some(verb @ ('s' | 'd' | 'f' | 'v')) => {
                chars.next();
                match args.get(next) {
                    Some(value) => {
                        next += 1;
                        out.push_str(&render_value(value, verb));
                    }
                    None => {
                        // 参数耗尽，占位符原样保留
                        out.push('%');
                        out.push(verb);
                    }
                }
            }
            _ => out.push('%'),
        }
    }
    out
}

/// 渲染单个位置参数
///
/// `%v` 始终使用 JSON 形式；其余占位符对字符串值去掉引号，其它值
/// 使用 JSON 形式。
fn render_value(value: &Value, verb: char) -> String {
    match (verb, value) {
        ('v', _) => value.to_string(),
        (_, Value::String(s)) => s.clone(),
        _ => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn ctx(pairs: &[(&str, Value)]) -> ContextMap {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    #[test]
    fn test_expand_basic() {
        assert_eq!(
            expand_template("Hello %s", &[json!("foo1")]),
            "Hello foo1"
        );
        assert_eq!(
            expand_template("%s is %d years old", &[json!("Ann"), json!(42)]),
            "Ann is 42 years old"
        );
        assert_eq!(expand_template("100%%", &[]), "100%");
    }

    #[test]
    fn test_expand_missing_args_kept_verbatim() {
        assert_eq!(expand_template("Hello %s and %s", &[json!("a")]), "Hello a and %s");
        assert_eq!(expand_template("no args %d", &[]), "no args %d");
    }

    #[test]
    fn test_expand_extra_args_ignored() {
        assert_eq!(
            expand_template("just %s", &[json!("one"), json!("two")]),
            "just one"
        );
    }

    #[test]
    fn test_expand_unknown_verb_passes_through() {
        assert_eq!(expand_template("%x %s", &[json!("ok")]), "%x ok");
        assert_eq!(expand_template("dangling %", &[]), "dangling %");
    }

    #[test]
    fn test_expand_json_verb() {
        assert_eq!(
            expand_template("payload=%v", &[json!({"a": 1})]),
            "payload={\"a\":1}"
        );
        assert_eq!(expand_template("quoted=%v", &[json!("s")]), "quoted=\"s\"");
    }

    #[test]
    fn test_default_formatter_with_context() {
        let line = DefaultFormatter.format(
            Level::Info,
            "(PREFIX) ",
            " (SUFFIX)",
            "The Message with arg \"%s\"",
            &[json!("ARG1")],
            &ctx(&[("foo", json!("bar"))]),
        );
        assert_eq!(
            line,
            "(PREFIX) The Message with arg \"ARG1\" (SUFFIX) :: {\"foo\":\"bar\"}"
        );
    }

    #[test]
    fn test_default_formatter_without_context() {
        let line = DefaultFormatter.format(
            Level::Info,
            "(PREFIX) ",
            " (SUFFIX)",
            "The Message with arg \"%s\"",
            &[json!("ARG1")],
            &ContextMap::new(),
        );
        assert_eq!(line, "(PREFIX) The Message with arg \"ARG1\" (SUFFIX)");
        assert!(!line.contains(" :: "));
    }

    #[test]
    fn test_default_formatter_context_keys_sorted() {
        let line = DefaultFormatter.format(
            Level::Debug,
            "",
            "",
            "msg",
            &[],
            &ctx(&[("zeta", json!(1)), ("alpha", json!(2)), ("mid", json!(3))]),
        );
        assert!(line.ends_with(" :: {\"alpha\":2,\"mid\":3,\"zeta\":1}"));
    }

    #[test]
    fn test_default_formatter_ignores_level() {
        for level in Level::ALL {
            let line = DefaultFormatter.format(level, "p ", " s", "m", &[], &ContextMap::new());
            assert_eq!(line, "p m s");
        }
    }

    #[test]
    fn test_closure_as_formatter() {
        let upper = |_level: Level,
                     prefix: &str,
                     _suffix: &str,
                     template: &str,
                     _args: &[Value],
                     _context: &ContextMap| {
            format!("{}{}", prefix, template.to_uppercase())
        };
        let line = Formatter::format(&upper, Level::Warn, "! ", "", "quiet", &[], &ContextMap::new());
        assert_eq!(line, "! QUIET");
    }

    proptest! {
        // 拼接属性：无上下文时输出恰好是 prefix + expanded + suffix
        #[test]
        fn prop_concatenation_without_context(
            prefix in ".{0,40}",
            suffix in ".{0,40}",
            msg in "[^%]{0,60}",
        ) {
            let line = DefaultFormatter.format(
                Level::Error,
                &prefix,
                &suffix,
                &msg,
                &[],
                &ContextMap::new(),
            );
            prop_assert_eq!(line, format!("{}{}{}", prefix, msg, suffix));
        }

        // 非空上下文时输出以 " :: " + JSON(context) 结尾
        #[test]
        fn prop_context_suffix(key in "[a-z]{1,10}", value in "[a-zA-Z0-9]{0,20}") {
            let context = ctx(&[(&key, json!(value.clone()))]);
            let line = DefaultFormatter.format(Level::Info, "", "", "msg", &[], &context);
            let expected = format!(" :: {}", serde_json::to_string(&context).unwrap());
            prop_assert!(line.ends_with(&expected));
        }
    }
}
