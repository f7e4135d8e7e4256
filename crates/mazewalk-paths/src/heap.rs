//! Array-backed binary min-heap keyed on a floating-point distance.
//!
//! Entries with equal keys come out in whatever order the sift operations
//! leave them; there is no secondary key and no FIFO guarantee.

/// An entry that can be ordered by a floating-point key.
pub trait HeapKey {
    /// Ordering key. Smaller keys are popped first.
    fn key(&self) -> f64;
}

impl HeapKey for f64 {
    fn key(&self) -> f64 {
        *self
    }
}

/// A binary min-heap.
#[derive(Debug, Clone)]
pub struct MinHeap<T> {
    items: Vec<T>,
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: HeapKey> MinHeap<T> {
    /// Create an empty heap.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry in O(log n).
    pub fn push(&mut self, item: T) {
        self.items.push(item);
        self.bubble_up(self.items.len() - 1);
    }

    /// Remove and return the entry with the smallest key.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }
        let top = self.items.swap_remove(0);
        self.bubble_down(0);
        Some(top)
    }

    /// The entry with the smallest key, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Replace the root entry in place, restoring the heap order.
    ///
    /// Used to re-seed the frontier root while a search has not begun.
    /// Pushes `item` when the heap is empty.
    pub fn replace_root(&mut self, item: T) {
        match self.items.first_mut() {
            Some(root) => {
                *root = item;
                self.bubble_down(0);
            }
            None => self.items.push(item),
        }
    }

    /// Whether the heap holds no entries.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Remove all entries.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Entries in heap (array) order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Whether every non-root entry's key is ≥ its parent's key.
    pub fn is_valid(&self) -> bool {
        (1..self.items.len()).all(|i| self.items[(i - 1) / 2].key() <= self.items[i].key())
    }

    fn bubble_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.items[parent].key() <= self.items[i].key() {
                break;
            }
            self.items.swap(parent, i);
            i = parent;
        }
    }

    fn bubble_down(&mut self, mut i: usize) {
        let n = self.items.len();
        loop {
            let left = 2 * i + 1;
            let right = left + 1;
            let mut smallest = i;
            if left < n && self.items[left].key() < self.items[smallest].key() {
                smallest = left;
            }
            // Strict comparison keeps the left child on ties.
            if right < n && self.items[right].key() < self.items[smallest].key() {
                smallest = right;
            }
            if smallest == i {
                break;
            }
            self.items.swap(i, smallest);
            i = smallest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut MinHeap<f64>) -> Vec<f64> {
        std::iter::from_fn(|| heap.pop()).collect()
    }

    #[test]
    fn pops_in_ascending_order() {
        let mut h = MinHeap::new();
        for d in [5.0, 3.0, 8.0, 1.0] {
            h.push(d);
        }
        assert_eq!(drain(&mut h), vec![1.0, 3.0, 5.0, 8.0]);
        assert!(h.is_empty());
        assert_eq!(h.pop(), None);
    }

    #[test]
    fn peek_matches_pop() {
        let mut h = MinHeap::new();
        assert!(h.peek().is_none());
        h.push(4.0);
        h.push(2.5);
        h.push(7.0);
        assert_eq!(h.peek(), Some(&2.5));
        assert_eq!(h.len(), 3);
        assert_eq!(h.pop(), Some(2.5));
        assert_eq!(h.peek(), Some(&4.0));
    }

    #[test]
    fn invariant_holds_after_mixed_operations() {
        // Keys chosen so that a bubble-down comparing indices instead of
        // keys would stop early and leave a larger key above a smaller one.
        let mut h = MinHeap::new();
        let mut popped = Vec::new();
        for (i, k) in [9.0, 0.5, 7.0, 3.0, 8.5, 1.0, 6.0, 2.0, 4.0, 0.25, 5.0]
            .into_iter()
            .enumerate()
        {
            h.push(k);
            assert!(h.is_valid());
            if i % 3 == 2 {
                popped.push(h.pop().unwrap());
                assert!(h.is_valid());
            }
        }
        while let Some(k) = h.pop() {
            assert!(h.is_valid());
            popped.push(k);
        }
        assert_eq!(popped.len(), 11);
        // Every pop after the pushes stopped is non-decreasing.
        let tail = &popped[3..];
        assert!(tail.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn every_pop_is_minimum_of_remaining() {
        let keys = [3.0, 3.0, 1.0, 9.0, 2.0, 2.0, 8.0, 0.0, 5.0, 7.0, 4.0, 6.0];
        let mut h = MinHeap::new();
        for k in keys {
            h.push(k);
        }
        while let Some(k) = h.pop() {
            assert!(h.as_slice().iter().all(|&rest| k <= rest));
            assert!(h.is_valid());
        }
    }

    #[test]
    fn ties_prefer_left_child() {
        #[derive(Debug, PartialEq)]
        struct Tagged(f64, char);
        impl HeapKey for Tagged {
            fn key(&self) -> f64 {
                self.0
            }
        }

        let mut h = MinHeap::new();
        h.push(Tagged(0.0, 'r'));
        h.push(Tagged(1.0, 'a'));
        h.push(Tagged(1.0, 'b'));
        h.push(Tagged(2.0, 'z'));
        // Root goes; 'z' moves to the root and sinks into the left child slot.
        assert_eq!(h.pop(), Some(Tagged(0.0, 'r')));
        assert_eq!(h.pop(), Some(Tagged(1.0, 'a')));
        assert_eq!(h.pop(), Some(Tagged(1.0, 'b')));
        assert_eq!(h.pop(), Some(Tagged(2.0, 'z')));
    }

    #[test]
    fn replace_root_restores_order() {
        let mut h = MinHeap::new();
        h.replace_root(4.0);
        assert_eq!(h.len(), 1);
        h.push(6.0);
        h.push(5.0);
        h.replace_root(10.0);
        assert!(h.is_valid());
        assert_eq!(drain(&mut h), vec![5.0, 6.0, 10.0]);
    }
}
