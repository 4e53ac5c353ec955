//! 基础示例：用 Composer 装饰领域对象
//!
//! 运行：`cargo run --example basic`

use objlog::{Composer, ConsoleConfig, ConsoleSink};
use serde_json::json;
use std::sync::Arc;

/// 演示用领域对象：自身不含任何日志逻辑，仅持有一个 Composer
struct Person {
    log: Composer,
    name: String,
}

impl Person {
    fn new(name: &str) -> Self {
        let log = Composer::new().with_prefix(format!("[Person: {}] ", name));
        Self {
            log,
            name: name.to_string(),
        }
    }

    fn greet(&self) {
        self.log.info("Hello! I am created", &[]);
    }
}

fn main() {
    // 显式配置默认 sink：写到 stdout，fatal 不退出
    let console = ConsoleSink::new(ConsoleConfig {
        target: objlog::ConsoleTarget::Stdout,
        exit_on_fatal: false,
        ..ConsoleConfig::default()
    });
    objlog::set_default_sink(Arc::new(console));

    let person = Person::new("Mr. Foo");
    person.greet();
    person
        .log
        .warn("%s lost %d coins", &[json!(person.name.clone()), json!(3)]);

    // 上下文参数以 JSON 形式拖在每一行末尾
    let mut company = Composer::new().with_prefix("[Company: ACME Inc] ");
    company.set_arg("employees", 42);
    company.info("We build token tokens.", &[]);
}
