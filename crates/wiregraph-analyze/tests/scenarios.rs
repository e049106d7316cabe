//! End-to-end connectivity scenarios over hand-built snapshots.

use std::collections::{HashMap, HashSet};

use serde_json::{json, Value};

use wiregraph_analyze::adjacency::AdjacencyMap;
use wiregraph_analyze::algorithms::{self, PathOutcome};
use wiregraph_analyze::{loader, resolve, AnalyzeError};
use wiregraph_core::{ComponentId, ReferenceInput};

fn id(s: &str) -> ComponentId {
    ComponentId::from(s)
}

/// Pump → valve → tank on two wires, plus an unconnected gauge.
fn plant() -> Value {
    json!({
        "path_mode": "orthogonal",
        "components": [
            {"id": "comp_1", "instance_name": "Pump_1"},
            {"id": "comp_2", "instance_name": "Valve_1"},
            {"id": "comp_3", "instance_name": "Tank_1"},
            {"id": "comp_4", "instance_name": "Gauge_1"}
        ],
        "connections": [
            {"component": "comp_1", "wire": "W1"},
            {"component": "comp_2", "wire": "W1"},
            {"component": "comp_2", "wire": "W2"},
            {"component": "comp_3", "wire": "W2"}
        ]
    })
}

#[test]
fn test_linear_plant_neighbors_and_path() {
    let graph = loader::load("plant", &plant()).unwrap();
    let adj = AdjacencyMap::build(&graph);

    assert_eq!(algorithms::neighbors(&adj, &id("comp_1")).unwrap(), vec![id("comp_2")]);
    assert_eq!(
        algorithms::shortest_path(&adj, &id("comp_1"), &id("comp_3")).unwrap(),
        PathOutcome::Found(vec![id("comp_1"), id("comp_2"), id("comp_3")])
    );
}

#[test]
fn test_isolated_component() {
    let graph = loader::load("plant", &plant()).unwrap();
    let adj = AdjacencyMap::build(&graph);

    assert!(algorithms::neighbors(&adj, &id("comp_4")).unwrap().is_empty());
    assert_eq!(
        algorithms::shortest_path(&adj, &id("comp_1"), &id("comp_4")).unwrap(),
        PathOutcome::NoPath
    );
}

#[test]
fn test_reference_forms() {
    let graph = loader::load("plant", &plant()).unwrap();
    assert_eq!(
        resolve::resolve_to_id(&graph, &ReferenceInput::from("Pump_1")).unwrap(),
        id("comp_1")
    );
    assert_eq!(
        resolve::resolve_to_id(&graph, &ReferenceInput::from("1")).unwrap(),
        id("comp_1")
    );
    assert!(matches!(
        resolve::resolve_to_id(&graph, &ReferenceInput::from("pump_1")),
        Err(AnalyzeError::ComponentNotFound { .. })
    ));
}

#[test]
fn test_wire_cliques_are_complete_and_symmetric() {
    let components: Vec<Value> = (0..8).map(|i| json!({"id": format!("c{i}")})).collect();
    // Wire sizes 5, 3, 1: expect C(5,2) + C(3,2) = 13 edges; c3 and c4 share both.
    let mut connections = Vec::new();
    for i in 0..5 {
        connections.push(json!({"component": format!("c{i}"), "wire": "bus"}));
    }
    for i in 3..6 {
        connections.push(json!({"component": format!("c{i}"), "wire": "tap"}));
    }
    connections.push(json!({"component": "c6", "wire": "stub"}));

    let graph = loader::load(
        "cliques",
        &json!({"components": components, "connections": connections}),
    )
    .unwrap();
    let adj = AdjacencyMap::build(&graph);

    // c3-c4 is counted once even though both wires join them.
    assert_eq!(adj.edge_count(), 10 + 3 - 1);
    for i in 0..5 {
        for j in 0..5 {
            if i != j {
                let ni = algorithms::neighbors(&adj, &id(&format!("c{i}"))).unwrap();
                assert!(ni.contains(&id(&format!("c{j}"))), "c{i} missing c{j}");
            }
        }
    }

    for component in graph.components() {
        for neighbor in algorithms::neighbors(&adj, &component.id).unwrap() {
            let back = algorithms::neighbors(&adj, &neighbor).unwrap();
            assert!(back.contains(&component.id), "{neighbor} -/-> {}", component.id);
            assert_ne!(neighbor, component.id);
        }
    }
    assert_eq!(adj.isolated_count(), 2);
}

/// Small deterministic generator so the property test needs no extra crates.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self, bound: u64) -> u64 {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (self.0 >> 33) % bound
    }
}

/// All-pairs hop distances computed straight from the connection list.
fn reference_distances(n: usize, wires: &HashMap<u64, Vec<usize>>) -> Vec<Vec<Option<usize>>> {
    let mut adj = vec![HashSet::new(); n];
    for members in wires.values() {
        for &a in members {
            for &b in members {
                if a != b {
                    adj[a].insert(b);
                }
            }
        }
    }

    (0..n)
        .map(|src| {
            let mut dist = vec![None; n];
            dist[src] = Some(0);
            let mut frontier = vec![src];
            let mut d = 0;
            while !frontier.is_empty() {
                d += 1;
                let mut next = Vec::new();
                for &u in &frontier {
                    for &v in &adj[u] {
                        if dist[v].is_none() {
                            dist[v] = Some(d);
                            next.push(v);
                        }
                    }
                }
                frontier = next;
            }
            dist
        })
        .collect()
}

#[test]
fn test_paths_are_minimal_valid_walks() {
    let mut rng = Lcg(7);

    for round in 0..20 {
        let n = 4 + rng.next(12) as usize;
        let mut wires: HashMap<u64, Vec<usize>> = HashMap::new();
        let mut connections = Vec::new();
        for _ in 0..rng.next(2 * n as u64) {
            let component = rng.next(n as u64) as usize;
            let wire = rng.next(n as u64);
            wires.entry(wire).or_default().push(component);
            connections.push(json!({"component": format!("n{component}"), "wire": format!("w{wire}")}));
        }
        let components: Vec<Value> = (0..n).map(|i| json!({"id": format!("n{i}")})).collect();

        let graph = loader::load(
            "random",
            &json!({"components": components, "connections": connections}),
        )
        .unwrap();
        let adj = AdjacencyMap::build(&graph);
        let expected = reference_distances(n, &wires);

        for a in 0..n {
            for b in 0..n {
                let from = id(&format!("n{a}"));
                let to = id(&format!("n{b}"));
                match algorithms::shortest_path(&adj, &from, &to).unwrap() {
                    PathOutcome::Found(path) => {
                        assert_eq!(
                            Some(path.len() - 1),
                            expected[a][b],
                            "round {round}: n{a} -> n{b}"
                        );
                        assert_eq!(path.first(), Some(&from));
                        assert_eq!(path.last(), Some(&to));
                        for pair in path.windows(2) {
                            let next = algorithms::neighbors(&adj, &pair[0]).unwrap();
                            assert!(next.contains(&pair[1]));
                        }
                    }
                    PathOutcome::NoPath => {
                        assert_eq!(expected[a][b], None, "round {round}: n{a} -> n{b}");
                    }
                }
            }
        }
    }
}

#[test]
fn test_dangling_connection_never_builds() {
    let err = loader::load(
        "dangling",
        &json!({
            "components": [{"id": "comp_1"}],
            "connections": [
                {"component": "comp_1", "wire": "W1"},
                {"component": "comp_9", "wire": "W1"}
            ]
        }),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "MalformedGraph");
}
