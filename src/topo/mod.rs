//! 拓扑层
//!
//! 负责向核心提供路由器集合与无向加权边：随机生成器与 JSON 拓扑描述。

mod random;
mod spec;

pub use random::{RandomOpts, RandomTopology, build_random};
pub use spec::{LinkSpec, TopologySpec};
