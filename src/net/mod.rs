//! 距离向量路由核心模块
//!
//! 此模块包含距离向量路由仿真的核心组件：路由器标识、链路开销、
//! 路由表、路由器以及网络聚合体（含收敛驱动循环）。

// 子模块声明
mod cost;
mod error;
mod id;
mod limits;
mod network;
mod router;
mod stats;
mod table;

// 重新导出公共接口
pub use cost::Cost;
pub use error::TopologyError;
pub use id::RouterId;
pub use limits::Limits;
pub use network::Network;
pub use router::Router;
pub use stats::Stats;
pub use table::{Route, RouteTable};
