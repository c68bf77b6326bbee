//! 网络规模与链路开销的配置范围
//!
//! 拓扑边界校验使用这些范围；核心松弛算法本身不做任何校验。

/// 路由器数量与链路开销的允许范围
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// 网络中路由器的最小数量
    pub min_routers: usize,
    /// 网络中路由器的最大数量
    pub max_routers: usize,
    /// 链路开销下界（含）
    pub min_cost: u64,
    /// 链路开销上界（含）
    pub max_cost: u64,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            min_routers: 3,
            max_routers: 7,
            min_cost: 1,
            max_cost: 10,
        }
    }
}

impl Limits {
    /// 开销是否落在配置范围内
    pub fn cost_in_range(&self, cost: u64) -> bool {
        (self.min_cost..=self.max_cost).contains(&cost)
    }

    /// 路由器数量是否落在配置范围内
    pub fn router_count_in_range(&self, count: usize) -> bool {
        (self.min_routers..=self.max_routers).contains(&count)
    }
}
