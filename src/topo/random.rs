//! 随机连通拓扑构建
//!
//! 路由器按单位圆均匀排布（位置同时供展示层使用），
//! 先用“最近邻”贪心连出一棵保证连通的生成树，
//! 再以固定概率补充额外链路，链路开销在配置范围内均匀抽取。

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::net::{Cost, Network, RouterId, TopologyError};

/// 随机拓扑配置选项
#[derive(Debug, Clone)]
pub struct RandomOpts {
    /// 路由器数量（需落在 Limits 配置范围内）
    pub routers: usize,
    /// 生成树之外每对路由器补充链路的概率
    pub extra_link_prob: f64,
    /// 链路开销下界（含）
    pub min_cost: u64,
    /// 链路开销上界（含）
    pub max_cost: u64,
    /// RNG 种子；None 时取熵源
    pub seed: Option<u64>,
}

impl Default for RandomOpts {
    fn default() -> Self {
        Self {
            routers: 5,
            extra_link_prob: 0.3,
            min_cost: 1,
            max_cost: 10,
            seed: None,
        }
    }
}

/// 随机拓扑构建结果
#[derive(Debug, Clone)]
pub struct RandomTopology {
    pub routers: Vec<RouterId>,
    /// 单位圆上的节点位置，与 `routers` 一一对应
    pub positions: Vec<(f64, f64)>,
    /// 实际建立的链路
    pub links: Vec<(RouterId, RouterId, Cost)>,
}

/// 构建随机连通拓扑
///
/// 路由器命名为 `A`, `B`, ...；返回的节点位置供展示层复用。
pub fn build_random(net: &mut Network, opts: &RandomOpts) -> Result<RandomTopology, TopologyError> {
    let limits = net.limits();
    if !limits.router_count_in_range(opts.routers) {
        return Err(TopologyError::RouterCountOutOfRange {
            count: opts.routers,
            min: limits.min_routers,
            max: limits.max_routers,
        });
    }

    for bound in [opts.min_cost, opts.max_cost] {
        if !limits.cost_in_range(bound) {
            return Err(TopologyError::CostOutOfRange {
                cost: bound,
                min: limits.min_cost,
                max: limits.max_cost,
            });
        }
    }
    if opts.min_cost > opts.max_cost {
        return Err(TopologyError::CostOutOfRange {
            cost: opts.min_cost,
            min: limits.min_cost,
            max: limits.max_cost,
        });
    }

    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let n = opts.routers;
    let mut routers = Vec::with_capacity(n);
    let mut positions = Vec::with_capacity(n);
    for i in 0..n {
        let name = char::from(b'A' + i as u8).to_string();
        routers.push(net.add_router(name));

        // 顶部起始、顺时针排布
        let angle = (2.0 * std::f64::consts::PI * i as f64) / n as f64 - std::f64::consts::FRAC_PI_2;
        positions.push((angle.cos(), angle.sin()));
    }

    let mut links = Vec::new();
    let draw_cost = |rng: &mut StdRng| Cost::of(rng.gen_range(opts.min_cost..=opts.max_cost));

    // 最近邻生成树：每次把几何上离已连通集最近的节点接入
    let mut connected = vec![false; n];
    connected[0] = true;
    let mut adjacency = vec![vec![false; n]; n];

    for _ in 1..n {
        let mut best: Option<(usize, usize, f64)> = None;
        for i in 0..n {
            if !connected[i] {
                continue;
            }
            for j in 0..n {
                if connected[j] {
                    continue;
                }
                let (x1, y1) = positions[i];
                let (x2, y2) = positions[j];
                let dist = ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt();
                if best.is_none_or(|(_, _, d)| dist < d) {
                    best = Some((i, j, dist));
                }
            }
        }
        let (i, j, _) = best.expect("unconnected node remains");

        let cost = draw_cost(&mut rng);
        net.link(routers[i], routers[j], cost)?;
        links.push((routers[i], routers[j], cost));
        adjacency[i][j] = true;
        adjacency[j][i] = true;
        connected[j] = true;
    }

    // 额外链路：生成树之外的每一对以固定概率补边
    for i in 0..n {
        for j in (i + 1)..n {
            if adjacency[i][j] || rng.gen_range(0.0..1.0) >= opts.extra_link_prob {
                continue;
            }
            let cost = draw_cost(&mut rng);
            net.link(routers[i], routers[j], cost)?;
            links.push((routers[i], routers[j], cost));
            adjacency[i][j] = true;
            adjacency[j][i] = true;
        }
    }

    debug!(routers = n, links = links.len(), "随机拓扑构建完成");
    Ok(RandomTopology {
        routers,
        positions,
        links,
    })
}
