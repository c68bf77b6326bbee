//! 展示层快照（用于离线渲染）
//!
//! 设计目标：
//! - **结构化**：用 JSON 快照而不是解析文本输出
//! - **轻量**：不引入复杂依赖/运行时服务
//! - **自足**：节点位置、链路与收敛后的路由表一次性给全

mod types;

pub use types::{VizLink, VizNode, VizRoute, VizSnapshot, VizTable};
