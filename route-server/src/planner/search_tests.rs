//! Unit tests for the cheapest-route search.

use super::*;
use crate::domain::{Connection, Coordinates};

fn loc(title: &str) -> Location {
    Location::new(title, Coordinates::new(0.0, 0.0).unwrap()).unwrap()
}

fn conn(from: &str, to: &str, price: f64) -> Connection {
    Connection::new(loc(from), loc(to), price).unwrap()
}

fn network(edges: &[(&str, &str, f64)]) -> Network {
    Network::build(edges.iter().map(|&(f, t, p)| conn(f, t, p)))
}

fn titles(locations: &[Location]) -> Vec<&str> {
    locations.iter().map(Location::title).collect()
}

fn search(net: &Network, from: &str, to: &str) -> Option<Route> {
    find_cheapest_route(&loc(from), &loc(to), net)
}

#[test]
fn prefers_cheaper_detour_over_direct_edge() {
    let net = network(&[
        ("First", "Second", 2.0),
        ("First", "Third", 10.0),
        ("Second", "Third", 5.0),
    ]);

    let route = search(&net, "First", "Third").unwrap();

    assert_eq!(titles(route.locations()), vec!["First", "Second", "Third"]);
    assert_eq!(titles(route.pass_through_locations()), vec!["Second"]);
    assert_eq!(route.total_price(), 7.0);
}

#[test]
fn empty_network_has_no_routes() {
    let net = Network::build(Vec::new());
    assert!(search(&net, "A", "B").is_none());
}

#[test]
fn cheaper_parallel_edge_wins() {
    let net = network(&[("First", "Second", 5.0), ("First", "Second", 1.0)]);

    let route = search(&net, "First", "Second").unwrap();

    assert_eq!(route.total_price(), 1.0);
    assert_eq!(route.connections().len(), 1);
    assert_eq!(route.connections()[0].price(), 1.0);
}

#[test]
fn start_equals_destination_is_trivial() {
    let net = network(&[("A", "B", 3.0), ("B", "A", 3.0)]);

    let route = search(&net, "A", "A").unwrap();

    assert_eq!(titles(route.locations()), vec!["A"]);
    assert!(route.pass_through_locations().is_empty());
    assert!(route.connections().is_empty());
    assert_eq!(route.total_price(), 0.0);
}

#[test]
fn start_equals_destination_outside_network() {
    let net = Network::build(Vec::new());
    let route = search(&net, "Nowhere", "Nowhere").unwrap();
    assert_eq!(titles(route.locations()), vec!["Nowhere"]);
    assert_eq!(route.total_price(), 0.0);
}

#[test]
fn edges_are_directed() {
    let net = network(&[("A", "B", 1.0)]);

    assert!(search(&net, "A", "B").is_some());
    assert!(search(&net, "B", "A").is_none());
}

#[test]
fn unknown_endpoints_have_no_route() {
    let net = network(&[("A", "B", 1.0)]);

    assert!(search(&net, "Z", "B").is_none());
    assert!(search(&net, "A", "Z").is_none());
}

#[test]
fn unreachable_component() {
    let net = network(&[("A", "B", 1.0), ("C", "D", 1.0)]);
    assert!(search(&net, "A", "D").is_none());
}

#[test]
fn self_loops_do_not_change_result() {
    let net = network(&[("A", "A", 0.0), ("A", "B", 4.0), ("B", "B", 1.0)]);

    let route = search(&net, "A", "B").unwrap();

    assert_eq!(titles(route.locations()), vec!["A", "B"]);
    assert_eq!(route.total_price(), 4.0);
}

#[test]
fn cycles_terminate() {
    let net = network(&[
        ("A", "B", 1.0),
        ("B", "C", 1.0),
        ("C", "A", 1.0),
        ("C", "D", 10.0),
    ]);

    let route = search(&net, "A", "D").unwrap();
    assert_eq!(titles(route.locations()), vec!["A", "B", "C", "D"]);
    assert_eq!(route.total_price(), 12.0);
}

#[test]
fn zero_price_edges() {
    let net = network(&[("A", "B", 0.0), ("B", "C", 0.0), ("A", "C", 0.5)]);

    let route = search(&net, "A", "C").unwrap();
    assert_eq!(titles(route.locations()), vec!["A", "B", "C"]);
    assert_eq!(route.total_price(), 0.0);
}

#[test]
fn longer_path_beats_expensive_shortcut() {
    // A -> E directly costs 100; walking the chain costs 4.
    let net = network(&[
        ("A", "E", 100.0),
        ("A", "B", 1.0),
        ("B", "C", 1.0),
        ("C", "D", 1.0),
        ("D", "E", 1.0),
    ]);

    let route = search(&net, "A", "E").unwrap();
    assert_eq!(titles(route.pass_through_locations()), vec!["B", "C", "D"]);
    assert_eq!(route.total_price(), 4.0);
}

#[test]
fn same_title_different_coordinates_are_different_nodes() {
    let near = Location::new("Springfield", Coordinates::new(1.0, 1.0).unwrap()).unwrap();
    let far = Location::new("Springfield", Coordinates::new(9.0, 9.0).unwrap()).unwrap();
    let net = Network::build(vec![
        Connection::new(loc("A"), near.clone(), 1.0).unwrap(),
        Connection::new(far.clone(), loc("B"), 1.0).unwrap(),
    ]);

    assert!(find_cheapest_route(&loc("A"), &near, &net).is_some());
    assert!(find_cheapest_route(&loc("A"), &loc("B"), &net).is_none());
    assert!(find_cheapest_route(&loc("A"), &far, &net).is_none());
}

#[test]
fn by_id_matches_by_location() {
    let net = network(&[("A", "B", 2.0), ("B", "C", 2.0)]);
    let a = net.id_of(&loc("A")).unwrap();
    let c = net.id_of(&loc("C")).unwrap();

    assert_eq!(
        find_cheapest_route_by_id(a, c, &net),
        search(&net, "A", "C")
    );
}

#[test]
fn by_id_rejects_foreign_ids() {
    let big = network(&[("A", "B", 1.0), ("C", "D", 1.0)]);
    let small = network(&[("A", "B", 1.0)]);
    let d = big.id_of(&loc("D")).unwrap();
    let a = small.id_of(&loc("A")).unwrap();

    assert!(find_cheapest_route_by_id(a, d, &small).is_none());
    assert!(find_cheapest_route_by_id(d, a, &small).is_none());
}

#[test]
fn repeated_search_is_identical() {
    let net = network(&[
        ("A", "B", 1.0),
        ("A", "C", 1.0),
        ("B", "D", 1.0),
        ("C", "D", 1.0),
    ]);

    let first = search(&net, "A", "D");
    let second = search(&net, "A", "D");
    assert_eq!(first, second);
    assert_eq!(first.unwrap().total_price(), 2.0);
}

#[test]
fn network_shared_across_threads() {
    let net = std::sync::Arc::new(network(&[("A", "B", 1.0), ("B", "C", 1.0)]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let net = net.clone();
            std::thread::spawn(move || search(&net, "A", "C").map(|r| r.total_price()))
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), Some(2.0));
    }
}

mod proptests {
    use super::*;
    use proptest::prelude::*;

    const NODES: usize = 6;

    fn node(i: usize) -> Location {
        loc(&format!("N{i}"))
    }

    /// Integer prices keep float sums exact, so totals compare exactly.
    fn edges() -> impl Strategy<Value = Vec<(usize, usize, u32)>> {
        proptest::collection::vec((0..NODES, 0..NODES, 0u32..20), 0..18)
    }

    fn build(raw: &[(usize, usize, u32)]) -> Network {
        Network::build(
            raw.iter()
                .map(|&(f, t, p)| Connection::new(node(f), node(t), f64::from(p)).unwrap()),
        )
    }

    /// Cheapest simple-path price by exhaustive depth-first enumeration.
    fn brute_force(raw: &[(usize, usize, u32)], from: usize, to: usize) -> Option<u32> {
        fn walk(
            raw: &[(usize, usize, u32)],
            at: usize,
            to: usize,
            visited: &mut Vec<bool>,
            cost: u32,
            best: &mut Option<u32>,
        ) {
            if at == to {
                *best = Some(best.map_or(cost, |b| b.min(cost)));
                return;
            }
            for &(f, t, p) in raw {
                if f == at && !visited[t] {
                    visited[t] = true;
                    walk(raw, t, to, visited, cost + p, best);
                    visited[t] = false;
                }
            }
        }

        let mut visited = vec![false; NODES];
        visited[from] = true;
        let mut best = None;
        walk(raw, from, to, &mut visited, 0, &mut best);
        best
    }

    proptest! {
        /// The search finds a route exactly when one exists, at the minimum price
        #[test]
        fn matches_brute_force(raw in edges(), from in 0..NODES, to in 0..NODES) {
            let net = build(&raw);
            let found = find_cheapest_route(&node(from), &node(to), &net);
            let expected = brute_force(&raw, from, to);

            match (found, expected) {
                (Some(route), Some(price)) => prop_assert_eq!(route.total_price(), f64::from(price)),
                (None, None) => {}
                (found, expected) => prop_assert!(
                    false,
                    "search returned {:?}, brute force {:?}",
                    found.map(|r| r.total_price()),
                    expected
                ),
            }
        }

        /// A returned route is a real path whose price is its edge sum
        #[test]
        fn route_is_consistent_path(raw in edges(), from in 0..NODES, to in 0..NODES) {
            let net = build(&raw);
            if let Some(route) = find_cheapest_route(&node(from), &node(to), &net) {
                let locations = route.locations();
                prop_assert_eq!(locations.len(), route.connections().len() + 1);
                prop_assert_eq!(route.start_location(), &node(from));
                prop_assert_eq!(route.destination_location(), &node(to));

                for (i, c) in route.connections().iter().enumerate() {
                    prop_assert_eq!(c.from(), &locations[i]);
                    prop_assert_eq!(c.to(), &locations[i + 1]);
                }

                let sum = route.connections().iter().fold(0.0, |s, c| s + c.price());
                prop_assert_eq!(route.total_price(), sum);

                let inner = route.pass_through_locations();
                if locations.len() <= 2 {
                    prop_assert!(inner.is_empty());
                } else {
                    prop_assert_eq!(inner, &locations[1..locations.len() - 1]);
                }
            }
        }

        /// Same inputs, same output
        #[test]
        fn idempotent(raw in edges(), from in 0..NODES, to in 0..NODES) {
            let net = build(&raw);
            let first = find_cheapest_route(&node(from), &node(to), &net);
            let second = find_cheapest_route(&node(from), &node(to), &net);
            prop_assert_eq!(first, second);
        }
    }
}
