pub mod heap;
pub mod list;
pub mod tree;

pub use heap::{heap_sort, MaxHeap};
pub use list::LinkedList;
pub use tree::{BinaryTree, NodeId};
