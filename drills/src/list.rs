//! Singly linked list whose nodes live in a `Vec` and link by index.

#[derive(Debug, Clone)]
struct Node<T> {
    data: T,
    next: Option<usize>,
}

#[derive(Debug, Clone)]
pub struct LinkedList<T> {
    nodes: Vec<Node<T>>,
    first: Option<usize>,
    len: usize,
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            first: None,
            len: 0,
        }
    }
}

impl<T: Clone + PartialEq> LinkedList<T> {
    /// Links the values of `a` in order.
    pub fn create(a: &[T]) -> Self {
        let nodes = a.iter().enumerate().map(|(i, x)| Node {
            data: x.clone(),
            next: if i + 1 < a.len() { Some(i + 1) } else { None },
        }).collect();
        Self {
            nodes,
            first: if a.is_empty() { None } else { Some(0) },
            len: a.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { list: self, cur: self.first }
    }

    /// Unlinks every node equal to its predecessor, so a sorted list ends
    /// up with distinct values. Returns how many nodes were removed.
    ///
    /// Unlinked nodes stay in the arena until the list is dropped.
    pub fn dedup(&mut self) -> usize {
        let mut removed = 0;
        let mut p = match self.first {
            Some(p) => p,
            None => return 0,
        };
        while let Some(q) = self.nodes[p].next {
            if self.nodes[p].data == self.nodes[q].data {
                self.nodes[p].next = self.nodes[q].next;
                removed += 1;
            } else {
                p = q;
            }
        }
        self.len -= removed;
        removed
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    cur: Option<usize>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let node = &self.list.nodes[self.cur?];
        self.cur = node.next;
        Some(&node.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(l: &LinkedList<i32>) -> Vec<i32> {
        l.iter().copied().collect()
    }

    #[test]
    fn test_create() {
        let l = LinkedList::create(&[3, 1, 2]);
        assert_eq!(values(&l), vec![3, 1, 2]);
        assert_eq!(l.len(), 3);
        let empty: LinkedList<i32> = LinkedList::create(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn test_dedup_sorted() {
        let mut l = LinkedList::create(&[1, 2, 4, 5, 6, 6, 6, 7, 8, 9, 9]);
        assert_eq!(l.dedup(), 3);
        assert_eq!(values(&l), vec![1, 2, 4, 5, 6, 7, 8, 9]);
        assert_eq!(l.len(), 8);
    }

    #[test]
    fn test_dedup_edges() {
        let mut l = LinkedList::create(&[5, 5, 5]);
        l.dedup();
        assert_eq!(values(&l), vec![5]);

        let mut l: LinkedList<i32> = LinkedList::default();
        assert_eq!(l.dedup(), 0);

        // only adjacent duplicates are removed
        let mut l = LinkedList::create(&[1, 2, 1]);
        assert_eq!(l.dedup(), 0);
        assert_eq!(values(&l), vec![1, 2, 1]);
    }
}
