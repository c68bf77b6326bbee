//! JSON 拓扑描述
//!
//! 从文件描述构建网络：路由器名称列表 + 按名称引用的无向加权链路。
//! 所有边界校验（数量范围、自环、重边、越界开销）在构建时完成。

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::net::{Cost, Limits, Network, TopologyError};

/// 拓扑文件顶层结构
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopologySpec {
    pub routers: Vec<String>,
    #[serde(default)]
    pub links: Vec<LinkSpec>,
}

/// 一条无向链路，端点按路由器名称引用
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkSpec {
    pub a: String,
    pub b: String,
    pub cost: u64,
}

impl TopologySpec {
    /// 按描述构建网络并应用全部边界校验。
    pub fn build(&self, limits: Limits) -> Result<Network, TopologyError> {
        if !limits.router_count_in_range(self.routers.len()) {
            return Err(TopologyError::RouterCountOutOfRange {
                count: self.routers.len(),
                min: limits.min_routers,
                max: limits.max_routers,
            });
        }

        let mut net = Network::with_limits(limits);
        let mut by_name = HashMap::new();
        for name in &self.routers {
            let id = net.add_router(name.clone());
            if by_name.insert(name.as_str(), id).is_some() {
                return Err(TopologyError::DuplicateRouterName(name.clone()));
            }
        }

        for link in &self.links {
            let a = *by_name
                .get(link.a.as_str())
                .ok_or_else(|| TopologyError::UnknownRouterName(link.a.clone()))?;
            let b = *by_name
                .get(link.b.as_str())
                .ok_or_else(|| TopologyError::UnknownRouterName(link.b.clone()))?;
            net.link(a, b, Cost::of(link.cost))?;
        }

        Ok(net)
    }
}
