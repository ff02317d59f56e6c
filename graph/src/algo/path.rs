use crate::graph::NodeIndex;

/// Walks `prev` back from `t` and returns the `s`--`t` path in forward order.
///
/// Returns an empty vector when the walk stops at a node other than `s`,
/// i.e. `t` is not reachable from `s` in the tree described by `prev`.
pub fn reconstruct_path(s: NodeIndex, t: NodeIndex, prev: &[Option<NodeIndex>]) -> Vec<NodeIndex> {
    let mut path = vec![t];
    let mut v = t;
    while v != s {
        match prev[v] {
            Some(p) => {
                path.push(p);
                v = p;
            },
            None => return Vec::new(),
        }
        // a well-formed predecessor tree never revisits a node
        if path.len() > prev.len() {
            return Vec::new();
        }
    }
    path.reverse();
    path
}
