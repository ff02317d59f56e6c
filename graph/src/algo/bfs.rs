use crate::graph::{Graph, NodeIndex};
use crate::algo::path::reconstruct_path;
use std::collections::VecDeque;

/// Returns a path from `s` to `t` with the fewest edges, ignoring weights.
/// The path is empty if `t` is unreachable.
pub fn bfs<N: Clone, E: Clone>(g: &Graph<N, E>, s: NodeIndex, t: NodeIndex) -> Vec<NodeIndex> {
    let n = g.node_count();
    let mut visited = vec![false; n];
    let mut prev = vec![None; n];
    let mut que = VecDeque::new();
    visited[s] = true;
    que.push_back(s);
    while let Some(v) = que.pop_front() {
        if v == t {
            return reconstruct_path(s, t, &prev);
        }
        for u in g.neighbors(v) {
            if !visited[u] {
                visited[u] = true;
                prev[u] = Some(v);
                que.push_back(u);
            }
        }
    }
    Vec::new()
}
