use crate::net::{Cost, Network};
use crate::viz::VizSnapshot;

#[test]
fn snapshot_captures_nodes_links_and_finite_tables() {
    let mut net = Network::default();
    let a = net.add_router("A");
    let b = net.add_router("B");
    let c = net.add_router("C");
    net.link(a, b, Cost::of(1)).expect("link a-b");
    net.link(b, c, Cost::of(2)).expect("link b-c");
    net.converge();

    let positions = [(0.0, -1.0), (0.8, 0.5), (-0.8, 0.5)];
    let snap = VizSnapshot::capture(&net, &positions);

    assert_eq!(snap.nodes.len(), 3);
    assert_eq!(snap.nodes[1].name, "B");
    assert_eq!((snap.nodes[1].x, snap.nodes[1].y), (0.8, 0.5));

    // Links are stable: sorted by normalized endpoint pair.
    let links: Vec<_> = snap.links.iter().map(|l| (l.a, l.b, l.cost)).collect();
    assert_eq!(links, vec![(0, 1, 1), (1, 2, 2)]);

    // A reaches B directly and C via B; no unreachable entries appear.
    let table_a = &snap.tables[0];
    assert_eq!(table_a.router, 0);
    let routes: Vec<_> = table_a
        .routes
        .iter()
        .map(|r| (r.dest, r.cost, r.next_hop))
        .collect();
    assert_eq!(routes, vec![(1, 1, 1), (2, 3, 1)]);
}

#[test]
fn snapshot_defaults_missing_positions_to_origin() {
    let mut net = Network::default();
    net.add_router("A");
    net.add_router("B");

    let snap = VizSnapshot::capture(&net, &[]);
    assert_eq!((snap.nodes[0].x, snap.nodes[0].y), (0.0, 0.0));
}

#[test]
fn snapshot_serializes_to_the_expected_json_shape() {
    let mut net = Network::default();
    let a = net.add_router("A");
    let b = net.add_router("B");
    net.link(a, b, Cost::of(3)).expect("link a-b");
    net.converge();

    let snap = VizSnapshot::capture(&net, &[]);
    let json: serde_json::Value =
        serde_json::from_str(&serde_json::to_string(&snap).expect("serialize")).expect("parse");

    assert_eq!(json["links"][0]["cost"], 3);
    assert_eq!(json["tables"][0]["routes"][0]["dest"], 1);
    assert_eq!(json["tables"][0]["routes"][0]["next_hop"], 1);
}
