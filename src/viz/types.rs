//! 展示层快照类型

use serde::{Deserialize, Serialize};

use crate::net::Network;

/// 收敛后的网络快照：节点 + 链路 + 各路由器的可达路由
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizSnapshot {
    pub nodes: Vec<VizNode>,
    pub links: Vec<VizLink>,
    pub tables: Vec<VizTable>,
}

/// 节点信息（位置为单位圆坐标，缺省为原点）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizNode {
    pub id: usize,
    pub name: String,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

/// 无向链路信息
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizLink {
    pub a: usize,
    pub b: usize,
    pub cost: u64,
}

/// 单个路由器的可达路由表
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizTable {
    pub router: usize,
    pub routes: Vec<VizRoute>,
}

/// 一条可达路由
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizRoute {
    pub dest: usize,
    pub cost: u64,
    pub next_hop: usize,
}

impl VizSnapshot {
    /// 对收敛后的网络拍快照；`positions` 与路由器下标一一对应，
    /// 长度不足时缺省为原点。
    pub fn capture(net: &Network, positions: &[(f64, f64)]) -> VizSnapshot {
        let nodes = net
            .router_ids()
            .map(|id| {
                let (x, y) = positions.get(id.0).copied().unwrap_or((0.0, 0.0));
                VizNode {
                    id: id.0,
                    name: net
                        .router(id)
                        .map(|r| r.name().to_string())
                        .unwrap_or_default(),
                    x,
                    y,
                }
            })
            .collect();

        let mut edges: Vec<_> = net.edges().collect();
        edges.sort();
        let links = edges
            .into_iter()
            .map(|(a, b)| {
                // link() 校验过端点存在，邻居表里必有对应开销
                let cost = net
                    .router(a)
                    .and_then(|r| r.neighbors().find(|&(n, _)| n == b))
                    .map(|(_, c)| c.value())
                    .unwrap_or_default();
                VizLink {
                    a: a.0,
                    b: b.0,
                    cost,
                }
            })
            .collect();

        let tables = net
            .router_ids()
            .map(|id| VizTable {
                router: id.0,
                routes: net
                    .routes_from(id)
                    .into_iter()
                    .map(|(dest, cost, next_hop)| VizRoute {
                        dest: dest.0,
                        cost: cost.value(),
                        next_hop: next_hop.0,
                    })
                    .collect(),
            })
            .collect();

        VizSnapshot {
            nodes,
            links,
            tables,
        }
    }
}
