//! JSON 拓扑收敛仿真
//!
//! 从 topology.json 构建网络，运行距离向量收敛，打印各路由器的路由表

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use dvrsim_rs::net::Limits;
use dvrsim_rs::topo::TopologySpec;
use dvrsim_rs::viz::VizSnapshot;

#[derive(Debug, Parser)]
#[command(name = "topology-sim", about = "在 topology.json 描述的网络上运行距离向量收敛")]
struct Args {
    /// topology.json 路径
    #[arg(long)]
    topology: PathBuf,

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

    let raw = match std::fs::read_to_string(&args.topology) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("read {}: {err}", args.topology.display());
            return ExitCode::FAILURE;
        }
    };
    let spec: TopologySpec = match serde_json::from_str(&raw) {
        Ok(spec) => spec,
        Err(err) => {
            eprintln!("parse {}: {err}", args.topology.display());
            return ExitCode::FAILURE;
        }
    };

    let mut net = match spec.build(Limits::default()) {
        Ok(net) => net,
        Err(err) => {
            eprintln!("topology error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let rounds = net.converge();

    let ids: Vec<_> = net.router_ids().collect();
    for id in ids {
        let router = net.router(id).expect("router exists");
        println!("Router {}", router.name());
        for (dest, cost, next_hop) in net.routes_from(id) {
            let dest_name = net.router(dest).expect("router exists").name();
            let hop_name = net.router(next_hop).expect("router exists").name();
            println!("  To {dest_name} via {hop_name}: {cost}");
        }
    }
    println!("done: routers={}, rounds={rounds}", net.len());

    if let Some(path) = args.viz_json {
        let snapshot = VizSnapshot::capture(&net, &[]);
        let json = serde_json::to_string_pretty(&snapshot).expect("serialize snapshot");
        if let Err(err) = std::fs::write(&path, json) {
            eprintln!("write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
