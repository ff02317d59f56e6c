use std::collections::{HashMap, VecDeque};
use thiserror::Error;

pub type NodeId = usize;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Node {
    val: i32,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// Binary tree stored in an arena; the tree value owns its root index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BinaryTree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error("inorder has {inorder} values but postorder has {postorder}")]
    LengthMismatch { inorder: usize, postorder: usize },
    #[error("value {0} is missing from the inorder sequence or out of place")]
    Inconsistent(i32),
    #[error("value {0} occurs more than once")]
    Duplicate(i32),
}

impl BinaryTree {
    fn alloc(&mut self, val: i32) -> NodeId {
        self.nodes.push(Node { val, left: None, right: None });
        self.nodes.len() - 1
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn value(&self, id: NodeId) -> i32 {
        self.nodes[id].val
    }

    pub fn left(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].left
    }

    pub fn right(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].right
    }

    /// Builds a tree from level-order input, `None` marking an absent child.
    /// Children are read in pairs for each present node, front to back.
    pub fn from_level_order(values: &[Option<i32>]) -> Self {
        let mut tree = Self::default();
        let mut input = values.iter().copied();
        let root = match input.next().flatten() {
            Some(v) => tree.alloc(v),
            None => return tree,
        };
        tree.root = Some(root);
        let mut que = VecDeque::from([root]);
        while let Some(p) = que.pop_front() {
            if let Some(v) = input.next().flatten() {
                let t = tree.alloc(v);
                tree.nodes[p].left = Some(t);
                que.push_back(t);
            }
            if let Some(v) = input.next().flatten() {
                let t = tree.alloc(v);
                tree.nodes[p].right = Some(t);
                que.push_back(t);
            }
        }
        tree
    }

    /// Rebuilds the unique tree with the given inorder and postorder
    /// traversals. Values must be distinct.
    pub fn from_in_post(inorder: &[i32], postorder: &[i32]) -> Result<Self, BuildError> {
        if inorder.len() != postorder.len() {
            return Err(BuildError::LengthMismatch {
                inorder: inorder.len(),
                postorder: postorder.len(),
            });
        }
        let mut in_map = HashMap::new();
        for (i, &v) in inorder.iter().enumerate() {
            if in_map.insert(v, i).is_some() {
                return Err(BuildError::Duplicate(v));
            }
        }
        let mut tree = Self::default();
        let mut post_index = postorder.len();
        tree.root = tree.build(postorder, &in_map, 0, inorder.len(), &mut post_index)?;
        Ok(tree)
    }

    /// Builds the subtree covering `inorder[lo..hi]`, consuming postorder
    /// from the back (root, then right subtree, then left).
    fn build(
        &mut self,
        postorder: &[i32],
        in_map: &HashMap<i32, usize>,
        lo: usize,
        hi: usize,
        post_index: &mut usize
    ) -> Result<Option<NodeId>, BuildError> {
        if lo >= hi {
            return Ok(None);
        }
        *post_index -= 1;
        let val = postorder[*post_index];
        let mid = match in_map.get(&val) {
            Some(&m) if lo <= m && m < hi => m,
            _ => return Err(BuildError::Inconsistent(val)),
        };
        let id = self.alloc(val);
        let right = self.build(postorder, in_map, mid + 1, hi, post_index)?;
        let left = self.build(postorder, in_map, lo, mid, post_index)?;
        self.nodes[id].left = left;
        self.nodes[id].right = right;
        Ok(Some(id))
    }

    pub fn preorder(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        self.walk_pre(self.root, &mut out);
        out
    }

    fn walk_pre(&self, p: Option<NodeId>, out: &mut Vec<i32>) {
        if let Some(p) = p {
            out.push(self.value(p));
            self.walk_pre(self.left(p), out);
            self.walk_pre(self.right(p), out);
        }
    }

    pub fn inorder(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        self.walk_in(self.root, &mut out);
        out
    }

    fn walk_in(&self, p: Option<NodeId>, out: &mut Vec<i32>) {
        if let Some(p) = p {
            self.walk_in(self.left(p), out);
            out.push(self.value(p));
            self.walk_in(self.right(p), out);
        }
    }

    pub fn postorder(&self) -> Vec<i32> {
        let mut out = Vec::with_capacity(self.len());
        self.walk_post(self.root, &mut out);
        out
    }

    fn walk_post(&self, p: Option<NodeId>, out: &mut Vec<i32>) {
        if let Some(p) = p {
            self.walk_post(self.left(p), out);
            self.walk_post(self.right(p), out);
            out.push(self.value(p));
        }
    }

    /// Values grouped by depth, root first.
    pub fn level_order(&self) -> Vec<Vec<i32>> {
        let mut levels = Vec::new();
        let mut que: VecDeque<NodeId> = self.root.into_iter().collect();
        while !que.is_empty() {
            let mut level = Vec::with_capacity(que.len());
            for _ in 0..que.len() {
                if let Some(p) = que.pop_front() {
                    level.push(self.value(p));
                    que.extend(self.left(p));
                    que.extend(self.right(p));
                }
            }
            levels.push(level);
        }
        levels
    }
}
