use crate::graph::{Graph, Edge, NodeIndex};
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use tracing::trace;

/// Frontier entry. Reversed on cost so that `BinaryHeap` pops the cheapest.
#[derive(Debug, Clone, Copy)]
struct State {
    cost: f64,
    node: NodeIndex,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.total_cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Returns a pair of (dist, prev), where
///   * dist[i] := the weight of the s--i shortest path, `None` if unreachable
///   * prev[i] := the previous node in the shortest path tree
///
/// Weights returned by `weight` must be non-negative.
pub fn dijkstra<N: Clone, E: Clone, F>(
    g: &Graph<N, E>,
    weight: F,
    s: NodeIndex
) -> (Vec<Option<f64>>, Vec<Option<NodeIndex>>) where F: Fn(&Edge<E>) -> f64 {
    let node_size = g.node_count();
    let mut dist: Vec<Option<f64>> = vec![None; node_size];
    let mut prev = vec![None; node_size];

    let mut que = BinaryHeap::new();
    que.push(State { cost: 0.0, node: s });
    dist[s] = Some(0.0);
    while let Some(State { cost: d, node: v }) = que.pop() {
        // lazy deletion: a cheaper entry for v was pushed after this one
        if dist[v].map_or(false, |d2| d > d2) {
            trace!(node = v, cost = d, "stale frontier entry");
            continue;
        }
        for e in g.edges_from(v) {
            let to = e.target();
            let nd = d + weight(e);
            if dist[to].map_or(true, |d2| nd < d2) {
                trace!(from = v, to, cost = nd, "relax");
                dist[to] = Some(nd);
                prev[to] = Some(v);
                que.push(State { cost: nd, node: to });
            }
        }
    }

    (dist, prev)
}
