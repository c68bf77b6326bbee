//! 路由器
//!
//! 定义路由器：持有自身标识、直连邻居的链路开销以及一张路由表，
//! 并实现距离向量算法的单次松弛步骤。

use std::collections::HashMap;

use super::cost::Cost;
use super::id::RouterId;
use super::network::Network;
use super::table::RouteTable;
use tracing::{debug, trace};

/// 网络中的一台路由器
#[derive(Debug)]
pub struct Router {
    id: RouterId,
    name: String,
    neighbors: HashMap<RouterId, Cost>,
    table: RouteTable,
}

impl Router {
    /// 创建新路由器
    pub fn new(id: RouterId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            neighbors: HashMap::new(),
            table: RouteTable::default(),
        }
    }

    /// 获取路由器标识符
    pub fn id(&self) -> RouterId {
        self.id
    }

    /// 获取路由器名称
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 直连邻居及其链路开销
    pub fn neighbors(&self) -> impl Iterator<Item = (RouterId, Cost)> + '_ {
        self.neighbors.iter().map(|(&n, &c)| (n, c))
    }

    /// 当前路由表（只读）
    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// 记录一条对称直连链路，并把到该邻居的路由播种为 `(link_cost, neighbor)`。
    ///
    /// 直连链路永远不会比“无路由”更差，因此无条件覆盖。
    /// 拓扑层负责在两个端点上以相同开销各调用一次。
    pub fn add_neighbor(&mut self, neighbor: RouterId, link_cost: Cost) {
        trace!(router = %self.name, neighbor = ?neighbor, cost = %link_cost, "记录直连邻居");
        self.neighbors.insert(neighbor, link_cost);
        self.table.upsert(neighbor, link_cost, neighbor);
    }

    /// 执行一次同步松弛：读取所有路由器的当前表状态，只做本地写入。
    ///
    /// 返回本次调用是否发生了任何表项更新。纯计算，永不失败；
    /// `net` 中缺失的邻居行直接跳过。严格小于才替换，等开销不换路。
    #[tracing::instrument(skip(self, net), fields(router = %self.name))]
    pub fn relax(&mut self, net: &Network) -> bool {
        let mut changed = false;

        for (&neighbor, &link_cost) in &self.neighbors {
            // 直连链路检查：比当前记录更近则重新播种
            let (current, _) = self.table.lookup(neighbor);
            if link_cost < current {
                debug!(neighbor = ?neighbor, cost = %link_cost, "直连链路优于当前路由");
                self.table.upsert(neighbor, link_cost, neighbor);
                changed = true;
            }

            // 经邻居中转的候选路径；邻居行缺失时跳过
            let Some(neighbor_table) = net.table_of(neighbor) else {
                continue;
            };
            for (dest, route) in neighbor_table.iter() {
                // 不得经邻居学到指向自身的路由
                if dest == self.id {
                    continue;
                }

                let candidate = link_cost.combine(route.cost);
                let (current, _) = self.table.lookup(dest);
                if candidate < current {
                    trace!(
                        dest = ?dest,
                        via = ?neighbor,
                        candidate = %candidate,
                        current = %current,
                        "发现更短路径"
                    );
                    self.table.upsert(dest, candidate, neighbor);
                    changed = true;
                }
            }
        }

        changed
    }
}
