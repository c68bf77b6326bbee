//! 网络聚合体与收敛驱动
//!
//! 持有全部路由器与对称邻接关系，驱动重复松弛直到全局不动点。
//! 拓扑输入（重边、自环、越界开销）在此边界校验；松弛本身不校验。

use std::collections::HashSet;

use super::cost::Cost;
use super::error::TopologyError;
use super::id::RouterId;
use super::limits::Limits;
use super::router::Router;
use super::stats::Stats;
use super::table::RouteTable;
use tracing::{debug, info, trace};

/// 网络：全部路由器 + 无向加权边集
#[derive(Debug, Default)]
pub struct Network {
    routers: Vec<Option<Router>>,
    edges: HashSet<(RouterId, RouterId)>,
    limits: Limits,
    pub stats: Stats,
}

impl Network {
    /// 使用自定义范围配置创建网络
    pub fn with_limits(limits: Limits) -> Self {
        Self {
            limits,
            ..Self::default()
        }
    }

    /// 当前配置范围
    pub fn limits(&self) -> Limits {
        self.limits
    }

    /// 添加路由器
    pub fn add_router(&mut self, name: impl Into<String>) -> RouterId {
        let id = RouterId(self.routers.len());
        self.routers.push(Some(Router::new(id, name)));
        id
    }

    /// 路由器数量
    pub fn len(&self) -> usize {
        self.routers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routers.is_empty()
    }

    /// 全部路由器标识符
    pub fn router_ids(&self) -> impl Iterator<Item = RouterId> + '_ {
        (0..self.routers.len()).map(RouterId)
    }

    /// 按标识符访问路由器
    pub fn router(&self, id: RouterId) -> Option<&Router> {
        self.routers.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// 读取某路由器当前的路由表。
    ///
    /// 松弛期间被取出的路由器对应 `None`，调用方按“行缺失”跳过。
    pub fn table_of(&self, id: RouterId) -> Option<&RouteTable> {
        self.routers
            .get(id.0)
            .and_then(|slot| slot.as_ref())
            .map(|r| r.table())
    }

    /// 建立一条无向加权链路，两端以相同开销各记录一次。
    ///
    /// 重边、自环、未知端点与越界开销都在这里拒绝，
    /// 之后的松弛算法完全信任已通过校验的拓扑。
    pub fn link(&mut self, a: RouterId, b: RouterId, cost: Cost) -> Result<(), TopologyError> {
        if a == b {
            return Err(TopologyError::SelfLoop(a));
        }
        for id in [a, b] {
            if self.router(id).is_none() {
                return Err(TopologyError::UnknownRouter(id));
            }
        }
        if !self.limits.cost_in_range(cost.value()) {
            return Err(TopologyError::CostOutOfRange {
                cost: cost.value(),
                min: self.limits.min_cost,
                max: self.limits.max_cost,
            });
        }
        let key = if a < b { (a, b) } else { (b, a) };
        if !self.edges.insert(key) {
            return Err(TopologyError::DuplicateLink { a, b });
        }

        debug!(a = ?a, b = ?b, cost = %cost, "建立链路");
        self.with_router(a, |r| r.add_neighbor(b, cost));
        self.with_router(b, |r| r.add_neighbor(a, cost));
        Ok(())
    }

    /// 无向边集（规范化为 (小, 大) 顺序）
    pub fn edges(&self) -> impl Iterator<Item = (RouterId, RouterId)> + '_ {
        self.edges.iter().copied()
    }

    /// 反复整轮松弛直到不动点，返回执行的轮数。
    ///
    /// 一轮 = 按序对每台路由器各调用一次 `relax`，后继路由器能看到
    /// 本轮之前路由器的更新（Gauss-Seidel 式，收敛到与严格同步
    /// Bellman-Ford 相同的最短开销不动点）。开销为正且拓扑静态，
    /// 距离单调递减且取值有限，轮数必然有界。
    #[tracing::instrument(skip(self))]
    pub fn converge(&mut self) -> usize {
        info!(routers = self.routers.len(), links = self.edges.len(), "▶️  开始收敛");

        let mut rounds = 0;
        loop {
            rounds += 1;
            let mut round_changed = false;

            for idx in 0..self.routers.len() {
                // 暂时把路由器取出来，避免 &mut router 与 &self 表视图的重叠借用
                let mut router = self.routers[idx].take().expect("router exists");
                let changed = router.relax(self);
                self.routers[idx] = Some(router);

                if changed {
                    self.stats.router_updates += 1;
                    round_changed = true;
                }
            }

            trace!(round = rounds, changed = round_changed, "整轮松弛结束");
            if !round_changed {
                break;
            }
        }

        self.stats.rounds += rounds;
        info!(rounds, updates = self.stats.router_updates, "✅ 收敛完成");
        rounds
    }

    /// 某路由器收敛后的可达路由，按目的地排序。
    ///
    /// 不可达目的地（开销为 INFINITE）已被过滤，展示层无需再处理哨兵值。
    pub fn routes_from(&self, id: RouterId) -> Vec<(RouterId, Cost, RouterId)> {
        self.router(id)
            .map(|r| r.table().finite_routes())
            .unwrap_or_default()
    }

    fn with_router(&mut self, id: RouterId, f: impl FnOnce(&mut Router)) {
        if let Some(router) = self.routers[id.0].as_mut() {
            f(router);
        }
    }
}
