//! 随机拓扑收敛仿真
//!
//! 生成随机连通拓扑，运行距离向量收敛，打印各路由器的路由表

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dvrsim_rs::net::Network;
use dvrsim_rs::topo::{RandomOpts, build_random};
use dvrsim_rs::viz::VizSnapshot;

#[derive(Debug, Parser)]
#[command(name = "random-sim", about = "随机拓扑上的距离向量路由收敛仿真")]
struct Args {
    /// 路由器数量（默认范围 3..=7）
    #[arg(long, default_value_t = 5)]
    routers: usize,
    /// 生成树之外每对路由器补充链路的概率
    #[arg(long, default_value_t = 0.3)]
    extra_link_prob: f64,
    /// 链路开销下界（含）
    #[arg(long, default_value_t = 1)]
    min_cost: u64,
    /// 链路开销上界（含）
    #[arg(long, default_value_t = 10)]
    max_cost: u64,
    /// RNG 种子（缺省时取熵源）
    #[arg(long)]
    seed: Option<u64>,
    /// 将收敛后的快照写入 JSON 文件
    #[arg(long)]
    viz_json: Option<PathBuf>,
}

fn main() -> ExitCode {
    // 初始化 tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();

    let mut net = Network::default();
    let opts = RandomOpts {
        routers: args.routers,
        extra_link_prob: args.extra_link_prob,
        min_cost: args.min_cost,
        max_cost: args.max_cost,
        seed: args.seed,
    };

    let topo = match build_random(&mut net, &opts) {
        Ok(topo) => topo,
        Err(err) => {
            eprintln!("topology error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let rounds = net.converge();

    for &id in &topo.routers {
        let router = net.router(id).expect("router exists");
        println!("Router {}", router.name());
        for (dest, cost, next_hop) in net.routes_from(id) {
            let dest_name = net.router(dest).expect("router exists").name();
            let hop_name = net.router(next_hop).expect("router exists").name();
            println!("  To {dest_name} via {hop_name}: {cost}");
        }
    }
    println!(
        "done: routers={}, links={}, rounds={rounds}",
        topo.routers.len(),
        topo.links.len()
    );

    if let Some(path) = args.viz_json {
        let snapshot = VizSnapshot::capture(&net, &topo.positions);
        let json = serde_json::to_string_pretty(&snapshot).expect("serialize snapshot");
        if let Err(err) = std::fs::write(&path, json) {
            eprintln!("write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
