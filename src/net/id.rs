//! 标识符类型
//!
//! 定义路由器的唯一标识符。

/// 路由器标识符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouterId(pub usize);
