//! tracing 桥接示例：把 Composer 的输出交给 tracing 生态
//!
//! 运行：`cargo run --example tracing_bridge`

use objlog::{Composer, TracingSink};
use serde_json::json;
use std::sync::Arc;

fn main() {
    // 安装常规的 tracing subscriber，objlog 的输出经由它呈现
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    objlog::set_default_sink(Arc::new(TracingSink::new()));

    let request = Composer::new()
        .with_prefix("(uuid: 042-117-absolute) ")
        .with_arg("path", "/hello")
        .with_arg("method", "GET");

    request.debug("handler selected", &[]);
    request.info("Took %s", &[json!("1.2ms")]);
    request.warn("POST not supported!", &[]);
}
