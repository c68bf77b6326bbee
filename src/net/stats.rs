//! 统计信息
//!
//! 定义收敛过程的统计数据结构。

/// 收敛统计信息
#[derive(Debug, Default)]
pub struct Stats {
    /// 已执行的松弛轮数（含最后一轮无变化的确认轮）
    pub rounds: usize,
    /// 各轮中发生表项更新的路由器次数累计
    pub router_updates: u64,
}
