use crate::net::{Cost, Network, RouterId};
use crate::topo::{RandomOpts, build_random};
use std::collections::{BinaryHeap, HashMap};

/// Independent reference shortest-path computation (Dijkstra over the same
/// undirected links), used to validate the distance-vector fixpoint.
fn dijkstra(links: &[(RouterId, RouterId, Cost)], n: usize, src: RouterId) -> Vec<Cost> {
    let mut adj: HashMap<usize, Vec<(usize, u64)>> = HashMap::new();
    for &(a, b, cost) in links {
        adj.entry(a.0).or_default().push((b.0, cost.value()));
        adj.entry(b.0).or_default().push((a.0, cost.value()));
    }

    let mut dist = vec![Cost::INFINITE; n];
    dist[src.0] = Cost::of(0);
    // Min-heap via Reverse on (distance, node).
    let mut heap = BinaryHeap::new();
    heap.push(std::cmp::Reverse((0u64, src.0)));

    while let Some(std::cmp::Reverse((d, v))) = heap.pop() {
        if Cost::of(d) > dist[v] {
            continue;
        }
        for &(next, w) in adj.get(&v).map(Vec::as_slice).unwrap_or_default() {
            let cand = d + w;
            if Cost::of(cand) < dist[next] {
                dist[next] = Cost::of(cand);
                heap.push(std::cmp::Reverse((cand, next)));
            }
        }
    }
    dist
}

#[test]
fn triangle_routes_through_the_cheaper_detour() {
    let mut net = Network::default();
    let a = net.add_router("A");
    let b = net.add_router("B");
    let c = net.add_router("C");
    net.link(a, b, Cost::of(1)).expect("link a-b");
    net.link(b, c, Cost::of(1)).expect("link b-c");
    net.link(a, c, Cost::of(5)).expect("link a-c");

    net.converge();

    assert_eq!(net.table_of(a).unwrap().lookup(c), (Cost::of(2), Some(b)));
    assert_eq!(net.table_of(c).unwrap().lookup(a), (Cost::of(2), Some(b)));
}

#[test]
fn path_topology_accumulates_costs_along_the_line() {
    let mut net = Network::default();
    let a = net.add_router("A");
    let b = net.add_router("B");
    let c = net.add_router("C");
    let d = net.add_router("D");
    net.link(a, b, Cost::of(2)).expect("link a-b");
    net.link(b, c, Cost::of(3)).expect("link b-c");
    net.link(c, d, Cost::of(4)).expect("link c-d");

    net.converge();

    assert_eq!(net.table_of(a).unwrap().lookup(d), (Cost::of(9), Some(b)));
    assert_eq!(net.table_of(d).unwrap().lookup(a), (Cost::of(9), Some(c)));
}

#[test]
fn disconnected_routers_stay_unreachable() {
    let mut net = Network::default();
    let a = net.add_router("A");
    let b = net.add_router("B");

    let rounds = net.converge();

    assert_eq!(net.table_of(a).unwrap().lookup(b), (Cost::INFINITE, None));
    assert_eq!(net.table_of(b).unwrap().lookup(a), (Cost::INFINITE, None));
    assert_eq!(net.routes_from(a), vec![]);
    // Nothing to learn: the very first round is already the fixpoint.
    assert_eq!(rounds, 1);
}

#[test]
fn disconnected_components_converge_independently() {
    let mut net = Network::default();
    let a = net.add_router("A");
    let b = net.add_router("B");
    let c = net.add_router("C");
    let d = net.add_router("D");
    net.link(a, b, Cost::of(1)).expect("link a-b");
    net.link(c, d, Cost::of(2)).expect("link c-d");

    net.converge();

    assert_eq!(net.table_of(a).unwrap().lookup(b), (Cost::of(1), Some(b)));
    assert_eq!(net.table_of(a).unwrap().lookup(c), (Cost::INFINITE, None));
    assert_eq!(net.table_of(a).unwrap().lookup(d), (Cost::INFINITE, None));
    assert_eq!(net.table_of(c).unwrap().lookup(d), (Cost::of(2), Some(d)));
}

#[test]
fn fixpoint_matches_dijkstra_on_random_topologies() {
    for seed in 0..20 {
        let mut net = Network::default();
        let opts = RandomOpts {
            routers: 3 + (seed as usize % 5),
            seed: Some(seed),
            ..RandomOpts::default()
        };
        let topo = build_random(&mut net, &opts).expect("build random topology");

        net.converge();

        for &src in &topo.routers {
            let reference = dijkstra(&topo.links, topo.routers.len(), src);
            for &dst in &topo.routers {
                if dst == src {
                    continue;
                }
                let (cost, next_hop) = net.table_of(src).unwrap().lookup(dst);
                assert_eq!(
                    cost, reference[dst.0],
                    "seed {seed}: {src:?} -> {dst:?} disagrees with reference"
                );
                if cost.is_finite() {
                    // The chosen next hop must be a direct neighbor of src.
                    let hop = next_hop.expect("finite route has a next hop");
                    assert!(
                        net.router(src)
                            .unwrap()
                            .neighbors()
                            .any(|(n, _)| n == hop),
                        "seed {seed}: next hop {hop:?} is not a neighbor of {src:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn convergence_is_idempotent_on_random_topologies() {
    let mut net = Network::default();
    let opts = RandomOpts {
        routers: 6,
        seed: Some(7),
        ..RandomOpts::default()
    };
    let topo = build_random(&mut net, &opts).expect("build random topology");

    net.converge();
    let before: Vec<_> = topo
        .routers
        .iter()
        .map(|&id| net.table_of(id).unwrap().clone())
        .collect();

    assert_eq!(net.converge(), 1);
    for (&id, table) in topo.routers.iter().zip(&before) {
        assert_eq!(net.table_of(id).unwrap(), table);
    }
}
