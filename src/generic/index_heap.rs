/*!
A max heap on some subset of elements with fixed indicies.

The heap is backed by a vector of values, one for each index, together with a companion vector tracking the position (if any) of each index on the heap.
The backing vector stays constant, so the structure acts as a store of values where any index may be *activated* (moved onto the heap) or removed from the heap without loss of its value.

[IndexHeap] is used as a store of atom activity, where every atom without a value should be active, and as a store of the activity of learnt clauses.

```rust
# use burrow_sat::generic::index_heap::IndexHeap;
let mut heap = IndexHeap::default();

heap.add(600, 10);
heap.add(0, 70);

heap.activate(600);
heap.activate(0);

assert_eq!(heap.count(), 601);
assert_eq!(heap.value_at(5), &i32::default());

assert_eq!(heap.pop_max(), Some(0));
assert_eq!(heap.pop_max(), Some(600));
assert!(heap.pop_max().is_none());
```
*/

/// The index heap struct.
pub struct IndexHeap<V: PartialOrd + Default> {
    /// The value of each index, regardless of whether the index is active.
    values: Vec<V>,

    /// The position of each index on the heap, if active.
    position: Vec<Option<usize>>,

    /// The heap of active indicies.
    heap: Vec<usize>,
}

impl<V: PartialOrd + Default> Default for IndexHeap<V> {
    fn default() -> Self {
        IndexHeap {
            values: Vec::default(),
            position: Vec::default(),
            heap: Vec::default(),
        }
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    /// Stores `value` at `index`, growing the store if required.
    /// Returns true if `index` was fresh, false otherwise.
    ///
    /// The index is not activated, though if the index is already active the heap is revised.
    pub fn add(&mut self, index: usize, value: V) -> bool {
        let fresh = self.values.len() <= index;
        if fresh {
            self.values.resize_with(index + 1, V::default);
            self.position.resize(index + 1, None);
        }
        self.values[index] = value;
        if !fresh {
            self.heapify_if_active(index);
        }
        fresh
    }

    /// Removes `index` from the heap, if active.
    /// Returns true if `index` was removed, false otherwise.
    pub fn remove(&mut self, index: usize) -> bool {
        let Some(heap_index) = self.position.get(index).copied().flatten() else {
            return false;
        };

        let last = self.heap.len() - 1;
        self.swap(heap_index, last);
        self.heap.pop();
        self.position[index] = None;

        if heap_index < self.heap.len() {
            self.sift_down(heap_index);
            self.sift_up(heap_index);
        }
        true
    }

    /// Activates `index` on the heap.
    /// Returns true if the index was not already active, false otherwise.
    ///
    /// Panics if `index` has not been [added](IndexHeap::add).
    pub fn activate(&mut self, index: usize) -> bool {
        match self.position[index] {
            None => {
                self.heap.push(index);
                let heap_index = self.heap.len() - 1;
                self.position[index] = Some(heap_index);
                self.sift_up(heap_index);
                true
            }
            Some(heap_index) => {
                self.sift_up(heap_index);
                self.sift_down(heap_index);
                false
            }
        }
    }

    /// Whether `index` is on the heap.
    pub fn is_active(&self, index: usize) -> bool {
        self.position.get(index).is_some_and(|p| p.is_some())
    }

    /// Restores the heap property around `index`, if active.
    pub fn heapify_if_active(&mut self, index: usize) {
        if let Some(heap_index) = self.position.get(index).copied().flatten() {
            self.sift_up(heap_index);
            self.sift_down(heap_index);
        }
    }

    /// The active index with the maximum value, if some index is active.
    pub fn peek_max(&self) -> Option<usize> {
        self.heap.first().copied()
    }

    /// Removes and returns the active index with the maximum value, if some index is active.
    pub fn pop_max(&mut self) -> Option<usize> {
        let max = self.peek_max()?;
        self.remove(max);
        Some(max)
    }

    /// Rebuilds the heap, e.g. after values have been revised through [apply_to_all](IndexHeap::apply_to_all).
    pub fn heapify(&mut self) {
        for heap_index in (0..self.heap.len() / 2).rev() {
            self.sift_down(heap_index)
        }
    }

    /// The value stored at `index`.
    ///
    /// Panics if `index` has not been [added](IndexHeap::add).
    pub fn value_at(&self, index: usize) -> &V {
        &self.values[index]
    }

    /// Sets the value at `index` to `value`, without revising the heap.
    pub fn revalue(&mut self, index: usize, value: V) {
        self.values[index] = value
    }

    /// Applies `f` to every stored value, without revising the heap.
    pub fn apply_to_all(&mut self, f: impl Fn(&V) -> V) {
        for value in self.values.iter_mut() {
            *value = f(value)
        }
    }

    /// A count of indicies stored by the structure.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// A count of active indicies.
    pub fn active_count(&self) -> usize {
        self.heap.len()
    }

    /// True if no index is stored, false otherwise.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<V: PartialOrd + Default> IndexHeap<V> {
    fn swap(&mut self, a: usize, b: usize) {
        self.heap.swap(a, b);
        self.position[self.heap[a]] = Some(a);
        self.position[self.heap[b]] = Some(b);
    }

    fn greater(&self, a: usize, b: usize) -> bool {
        self.values[self.heap[a]] > self.values[self.heap[b]]
    }

    fn sift_up(&mut self, mut heap_index: usize) {
        while heap_index > 0 {
            let parent = (heap_index - 1) / 2;
            if self.greater(heap_index, parent) {
                self.swap(heap_index, parent);
                heap_index = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut heap_index: usize) {
        loop {
            let left = (2 * heap_index) + 1;
            let right = left + 1;
            let mut largest = heap_index;

            if left < self.heap.len() && self.greater(left, largest) {
                largest = left;
            }
            if right < self.heap.len() && self.greater(right, largest) {
                largest = right;
            }

            if largest == heap_index {
                break;
            }
            self.swap(heap_index, largest);
            heap_index = largest;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heap_simple() {
        let mut test_heap = IndexHeap::default();
        for (index, value) in [(6, 10), (5, 20), (4, 30), (1, 60), (0, 70)] {
            test_heap.add(index, value);
            test_heap.activate(index);
        }

        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(6));
        assert!(test_heap.pop_max().is_none());
    }

    #[test]
    fn heap_rescale() {
        let mut test_heap = IndexHeap::default();
        for (index, value) in [(6, 10.0), (4, 30.0), (1, 60.0), (0, 70.0)] {
            test_heap.add(index, value);
            test_heap.activate(index);
        }

        test_heap.apply_to_all(|v| 100.0 - v);
        test_heap.heapify();

        assert_eq!(test_heap.pop_max(), Some(6));
        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
    }

    #[test]
    fn heap_remove() {
        let mut test_heap = IndexHeap::default();
        for index in [6, 5, 4, 1, 0] {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        assert!(test_heap.remove(4));
        assert!(!test_heap.remove(4));
        assert!(test_heap.remove(6));
        assert!(!test_heap.add(4, 10));
        assert!(!test_heap.is_active(4));
        assert!(test_heap.activate(4));
        assert!(!test_heap.activate(4));

        assert_eq!(test_heap.pop_max(), Some(4));
        assert_eq!(test_heap.pop_max(), Some(5));
        assert_eq!(test_heap.pop_max(), Some(1));
        assert_eq!(test_heap.pop_max(), Some(0));
        assert_eq!(test_heap.active_count(), 0);
    }

    #[test]
    fn heap_revalue_active() {
        let mut test_heap = IndexHeap::default();
        for index in 0..8 {
            test_heap.add(index, index as i32);
            test_heap.activate(index);
        }

        test_heap.revalue(2, 50);
        test_heap.heapify_if_active(2);
        assert_eq!(test_heap.peek_max(), Some(2));

        while test_heap.pop_max().is_some() {}
        assert_eq!(test_heap.active_count(), 0);
        assert_eq!(test_heap.value_at(2), &50);
    }
}
