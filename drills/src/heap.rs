//! Binary max-heap on a 1-indexed array: slot 0 is unused, the children of
//! slot `i` are `2i` and `2i + 1`.

/// Sifts `a[n]` up into the heap `a[1..n]`, making `a[1..=n]` a heap.
pub fn insert<T: Ord + Copy>(a: &mut [T], n: usize) {
    let temp = a[n];
    let mut i = n;
    while i > 1 && temp > a[i / 2] {
        a[i] = a[i / 2];
        i /= 2;
    }
    a[i] = temp;
}

/// Removes the maximum of the heap `a[1..=n]` and stores it at `a[n]`,
/// leaving `a[1..n]` a heap. Returns the removed value.
pub fn delete<T: Ord + Copy>(a: &mut [T], n: usize) -> T {
    let val = a[1];
    a[1] = a[n];
    a[n] = val;
    let mut i = 1;
    loop {
        let mut j = 2 * i;
        if j >= n {
            break;
        }
        if j + 1 < n && a[j + 1] > a[j] {
            j += 1;
        }
        if a[i] < a[j] {
            a.swap(i, j);
            i = j;
        } else {
            break;
        }
    }
    val
}

/// Sorts ascending by building a max-heap and repeatedly deleting the root.
pub fn heap_sort<T: Ord + Copy + Default>(values: &mut [T]) {
    let n = values.len();
    if n < 2 {
        return;
    }
    let mut a = Vec::with_capacity(n + 1);
    a.push(T::default());
    a.extend_from_slice(values);
    for i in 2..=n {
        insert(&mut a, i);
    }
    for i in (2..=n).rev() {
        delete(&mut a, i);
    }
    values.copy_from_slice(&a[1..]);
}

#[derive(Debug, Clone, Default)]
pub struct MaxHeap<T> {
    /// `data[0]` is a placeholder
    data: Vec<T>,
}

impl<T: Ord + Copy + Default> MaxHeap<T> {
    pub fn new() -> Self {
        Self { data: vec![T::default()] }
    }

    pub fn len(&self) -> usize {
        self.data.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn peek(&self) -> Option<T> {
        self.data.get(1).copied()
    }

    pub fn push(&mut self, value: T) {
        if self.data.is_empty() {
            self.data.push(T::default());
        }
        self.data.push(value);
        let n = self.len();
        insert(&mut self.data, n);
    }

    pub fn pop(&mut self) -> Option<T> {
        let n = self.len();
        if n == 0 {
            return None;
        }
        let top = delete(&mut self.data, n);
        self.data.pop();
        Some(top)
    }

    /// Heap contents in array order
    pub fn as_slice(&self) -> &[T] {
        self.data.get(1..).unwrap_or(&[])
    }
}
