//! 派生示例：子对象通过克隆继承父对象的日志装饰
//!
//! 运行：`cargo run --example derive_chain`

use objlog::{Composer, ConsoleConfig, ConsoleSink};
use std::sync::Arc;

/// 父级领域对象
struct Brand {
    log: Composer,
    name: String,
}

/// 子级领域对象：日志器派生自所属 Brand
struct Car {
    log: Composer,
    model: String,
}

impl Brand {
    fn new(sink: Arc<ConsoleSink>, name: &str) -> Self {
        Self {
            log: Composer::with_sink(sink).with_prefix(format!("Brand({}): ", name)),
            name: name.to_string(),
        }
    }

    /// 派生：克隆继承前缀，再在其后追加自己的标识
    fn car(&self, model: &str) -> Car {
        let mut log = self.log.clone();
        log.set_prefix(format!("{}Model({}): ", self.log.prefix(), model));
        Car {
            log,
            model: model.to_string(),
        }
    }
}

fn main() {
    let console = Arc::new(ConsoleSink::new(ConsoleConfig {
        exit_on_fatal: false,
        ..ConsoleConfig::default()
    }));

    let brand1 = Brand::new(console.clone(), "DeLorean");
    let car1 = brand1.car("DMC-12");

    let brand2 = Brand::new(console, "Ferrari");
    let car2 = brand2.car("F-40");

    // "... [INFO] Brand(DeLorean): Model(DMC-12): Wrumm, Wrumm"
    car1.log.info("Wrumm, Wrumm", &[]);

    // "... [INFO] Brand(Ferrari): Model(F-40): Roarr"
    car2.log.info("Roarr", &[]);

    // 子级状态的突变不影响父级
    brand1.log.info("Still just the brand prefix", &[]);
    let _ = (&car1.model, &car2.model, &brand1.name, &brand2.name);
}
