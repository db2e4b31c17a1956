use digraph_scc::domain::graph::{Graph, SccResult};
use digraph_scc::domain::traits::SccDetector;
use digraph_scc::infrastructure::scc_tarjan::TarjanSccDetector;
use digraph_scc::usecase::build::build_graph;
use std::collections::BTreeSet;

fn partition(res: &SccResult) -> BTreeSet<BTreeSet<usize>> {
    res.components
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect()
}

fn set(items: &[&[usize]]) -> BTreeSet<BTreeSet<usize>> {
    items.iter().map(|c| c.iter().copied().collect()).collect()
}

/// Nodes reachable from `start` (including itself), by iterative DFS.
fn reachable(g: &Graph, start: usize) -> Vec<bool> {
    let mut seen = vec![false; g.node_count()];
    let mut stack = vec![start];
    seen[start] = true;
    while let Some(v) = stack.pop() {
        for &w in g.neighbors(v) {
            if !seen[w] {
                seen[w] = true;
                stack.push(w);
            }
        }
    }
    seen
}

/// Deterministic pseudo-random edge lists (64-bit LCG).
fn random_edges(node_count: usize, edge_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut state = seed;
    let mut next = || {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) as usize) % node_count
    };
    (0..edge_count).map(|_| (next(), next())).collect()
}

#[test]
fn scenario_three_cycle_is_a_single_component() {
    let g = build_graph(3, "0-1, 1-2, 2-0").expect("graph");
    let res = TarjanSccDetector.compute_scc(&g);

    assert_eq!(partition(&res), set(&[&[0, 1, 2]]));
    assert_eq!(res.component_of, vec![0, 0, 0]);
}

#[test]
fn scenario_inner_cycle_with_tails() {
    let g = build_graph(4, "0-1, 1-2, 2-1, 2-3").expect("graph");
    let res = TarjanSccDetector.compute_scc(&g);

    assert_eq!(res.component_count(), 3);
    assert_eq!(partition(&res), set(&[&[0], &[1, 2], &[3]]));
}

#[test]
fn scenario_single_edge_gives_two_singletons() {
    let g = build_graph(2, "0-1").expect("graph");
    let res = TarjanSccDetector.compute_scc(&g);

    assert_eq!(partition(&res), set(&[&[0], &[1]]));
    assert!(!res.same_component(0, 1));
}

#[test]
fn isolated_nodes_are_singletons() {
    // Nodes 3 and 4 never appear in an edge.
    let g = build_graph(5, "0-1, 1-0, 1-2").expect("graph");
    let res = TarjanSccDetector.compute_scc(&g);

    for v in [3, 4] {
        assert_eq!(res.components[res.component_of[v]], vec![v]);
    }
}

#[test]
fn every_node_is_assigned_exactly_once() {
    for seed in 1..=20u64 {
        let n = 1 + (seed as usize * 7) % 40;
        let g = Graph::from_edges(n, random_edges(n, n * 2, seed)).expect("graph");
        let res = TarjanSccDetector.compute_scc(&g);

        assert_eq!(res.component_of.len(), n);
        let mut seen = vec![0usize; n];
        for (cid, members) in res.components.iter().enumerate() {
            for &v in members {
                seen[v] += 1;
                assert_eq!(res.component_of[v], cid);
            }
        }
        assert!(seen.iter().all(|&count| count == 1), "seed={seed}");
    }
}

#[test]
fn components_are_exactly_the_mutual_reachability_classes() {
    for seed in 100..110u64 {
        let n = 25;
        let g = Graph::from_edges(n, random_edges(n, 40, seed)).expect("graph");
        let res = TarjanSccDetector.compute_scc(&g);
        let reach: Vec<Vec<bool>> = (0..n).map(|v| reachable(&g, v)).collect();

        for u in 0..n {
            for v in 0..n {
                let mutual = reach[u][v] && reach[v][u];
                assert_eq!(
                    res.same_component(u, v),
                    mutual,
                    "seed={seed} u={u} v={v}"
                );
            }
        }
    }
}

#[test]
fn closing_order_is_a_reverse_topological_order_of_the_condensation() {
    // An edge between different components always points to an earlier-closed one.
    let n = 30;
    let g = Graph::from_edges(n, random_edges(n, 45, 7)).expect("graph");
    let res = TarjanSccDetector.compute_scc(&g);

    for e in g.edges() {
        assert!(res.component_of[e.source] >= res.component_of[e.target]);
    }
}

#[test]
fn repeated_computation_is_deterministic() {
    let g = Graph::from_edges(50, random_edges(50, 120, 42)).expect("graph");
    let first = TarjanSccDetector.compute_scc(&g);
    for _ in 0..3 {
        assert_eq!(TarjanSccDetector.compute_scc(&g), first);
    }
}

#[test]
fn duplicate_edges_and_self_loops_do_not_change_the_partition() {
    let base = build_graph(5, "0-1, 1-2, 2-0, 3-4").expect("graph");
    let noisy = build_graph(5, "0-1, 0-1, 1-1, 1-2, 2-0, 2-0, 3-3, 3-4, 4-4").expect("graph");

    let a = TarjanSccDetector.compute_scc(&base);
    let b = TarjanSccDetector.compute_scc(&noisy);

    assert_eq!(partition(&a), partition(&b));
    assert_eq!(a.component_of, b.component_of);
    // Only the cyclic flags of the self-looped singletons differ.
    assert_eq!(b.cyclic_count(), a.cyclic_count() + 2);
}

#[test]
fn deep_chain_of_two_cycles_is_handled_iteratively() {
    // 0 <-> 1 <-> 2 <-> ... : one big component reached through a very deep DFS.
    let n = 100_000;
    let mut g = Graph::new(n).expect("graph");
    for i in 0..n - 1 {
        g.add_edge(i, i + 1).expect("edge");
        g.add_edge(i + 1, i).expect("edge");
    }
    let res = TarjanSccDetector.compute_scc(&g);
    assert_eq!(res.component_count(), 1);
    assert!(res.cyclic_component[0]);
}
