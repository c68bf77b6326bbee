//! 路由表
//!
//! 每个路由器持有一张路由表：目的地 -> (开销, 下一跳)。
//! 查询不存在的目的地返回 `(INFINITE, None)`，这是正常情况而非错误。

use std::collections::HashMap;

use super::cost::Cost;
use super::id::RouterId;

/// 一条路由表项
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Route {
    pub cost: Cost,
    pub next_hop: RouterId,
}

/// 单个路由器的路由表
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RouteTable {
    routes: HashMap<RouterId, Route>,
}

impl RouteTable {
    /// 插入或无条件覆盖到 `dest` 的表项。
    ///
    /// 调用方必须先确认新路由确实更优，本方法不做比较。
    pub fn upsert(&mut self, dest: RouterId, cost: Cost, next_hop: RouterId) {
        self.routes.insert(dest, Route { cost, next_hop });
    }

    /// 查询到 `dest` 的表项；缺失时返回 `(INFINITE, None)`。
    pub fn lookup(&self, dest: RouterId) -> (Cost, Option<RouterId>) {
        match self.routes.get(&dest) {
            Some(route) => (route.cost, Some(route.next_hop)),
            None => (Cost::INFINITE, None),
        }
    }

    /// 遍历全部表项（松弛时供邻居读取）
    pub fn iter(&self) -> impl Iterator<Item = (RouterId, Route)> + '_ {
        self.routes.iter().map(|(&dest, &route)| (dest, route))
    }

    /// 有限开销的表项，按目的地排序（供展示层使用）
    pub fn finite_routes(&self) -> Vec<(RouterId, Cost, RouterId)> {
        let mut out: Vec<_> = self
            .routes
            .iter()
            .filter(|(_, route)| route.cost.is_finite())
            .map(|(&dest, &route)| (dest, route.cost, route.next_hop))
            .collect();
        out.sort_by_key(|&(dest, _, _)| dest);
        out
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
