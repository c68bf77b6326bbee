//! 拓扑边界错误
//!
//! 仅在构建拓扑时产生；松弛与收敛过程是纯计算，永不失败。

use thiserror::Error;

use super::id::RouterId;

/// 拓扑输入校验错误（配置错误，不会进入松弛算法）
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TopologyError {
    #[error("unknown router {0:?}")]
    UnknownRouter(RouterId),

    #[error("unknown router name {0:?}")]
    UnknownRouterName(String),

    #[error("duplicate router name {0:?}")]
    DuplicateRouterName(String),

    #[error("self-loop on router {0:?}")]
    SelfLoop(RouterId),

    #[error("duplicate link between {a:?} and {b:?}")]
    DuplicateLink { a: RouterId, b: RouterId },

    #[error("link cost {cost} outside configured range {min}..={max}")]
    CostOutOfRange { cost: u64, min: u64, max: u64 },

    #[error("router count {count} outside configured range {min}..={max}")]
    RouterCountOutOfRange {
        count: usize,
        min: usize,
        max: usize,
    },
}
