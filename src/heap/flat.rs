use super::{last_internal_slot, left_child_of, parent_of, HeapSlot, Priority};

/// Min-heap over plain values. Elements are addressed by their slot only.
#[derive(Debug, Clone, Default)]
pub struct FlatBinaryHeap<V: Priority = i32> {
    values: Vec<V>,
}

impl<V: Priority> FlatBinaryHeap<V> {
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Appends `values` and restores heap order bottom-up in O(n).
    pub fn init(&mut self, values: impl IntoIterator<Item = V>) {
        self.values.extend(values);
        self.heapify();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.values
    }

    pub fn add(&mut self, value: V) {
        self.values.push(value);
        self.sift_up(self.values.len() - 1);
    }

    /// Smallest value, or `V::NO_DATA` if the heap is empty.
    pub fn peek_min(&self) -> V {
        self.values.first().copied().unwrap_or(V::NO_DATA)
    }

    /// Removes and returns the smallest value, or `V::NO_DATA` if the heap is empty.
    pub fn extract_min(&mut self) -> V {
        let Some(last) = self.values.pop() else {
            return V::NO_DATA;
        };
        if self.values.is_empty() {
            return last;
        }
        let min = std::mem::replace(&mut self.values[0], last);
        self.sift_down(0);
        min
    }

    /// Overwrites the value at `slot` and moves it to where it belongs.
    ///
    /// Returns `false` and leaves the heap untouched if `slot` is out of range.
    pub fn change(&mut self, slot: HeapSlot, value: V) -> bool {
        if slot >= self.values.len() {
            log::debug!("ignoring change of slot {} in heap of size {}", slot, self.len());
            return false;
        }
        self.values[slot] = value;
        if slot > 0 && value < self.values[parent_of(slot)] {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        true
    }

    /// Removes the element at `slot` by moving the last element into its place.
    ///
    /// Returns `false` and leaves the heap untouched if `slot` is out of range.
    pub fn delete(&mut self, slot: HeapSlot) -> bool {
        if slot >= self.values.len() {
            log::debug!("ignoring delete of slot {} in heap of size {}", slot, self.len());
            return false;
        }
        if let Some(last) = self.values.pop() {
            if slot < self.values.len() {
                self.change(slot, last);
            }
        }
        true
    }

    pub fn heapify(&mut self) {
        if let Some(start) = last_internal_slot(self.values.len()) {
            for slot in (0..=start).rev() {
                self.sift_down(slot);
            }
        }
    }

    fn sift_up(&mut self, mut slot: HeapSlot) {
        let value = self.values[slot];
        while slot > 0 {
            let parent = parent_of(slot);
            if self.values[parent] <= value {
                break;
            }
            self.values[slot] = self.values[parent];
            slot = parent;
        }
        self.values[slot] = value;
    }

    fn sift_down(&mut self, mut slot: HeapSlot) {
        let len = self.values.len();
        let value = self.values[slot];
        loop {
            let left = left_child_of(slot);
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut smaller_child = left;
            if right < len && self.values[right] < self.values[left] {
                smaller_child = right;
            }
            if self.values[smaller_child] >= value {
                break;
            }
            self.values[slot] = self.values[smaller_child];
            slot = smaller_child;
        }
        self.values[slot] = value;
    }
}

impl<V: Priority> From<Vec<V>> for FlatBinaryHeap<V> {
    fn from(values: Vec<V>) -> Self {
        let mut heap = Self { values };
        heap.heapify();
        heap
    }
}
