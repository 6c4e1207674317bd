use super::{last_internal_slot, left_child_of, parent_of, HeapOrder, HeapSlot, Priority};

/// Stable caller-assigned name of an element, in `[0, capacity)`.
pub type Identity = usize;

/// Identity carried by [`Element::NO_DATA`]. Never a valid identity.
pub const NO_IDENTITY: Identity = Identity::MAX;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Element<V: Priority = i32> {
    pub identity: Identity,
    pub value: V,
}

impl<V: Priority> Element<V> {
    /// Returned by peek and extract operations on an empty heap.
    pub const NO_DATA: Self = Element {
        identity: NO_IDENTITY,
        value: V::NO_DATA,
    };

    pub fn new(identity: Identity, value: V) -> Self {
        Self { identity, value }
    }
}

/// Binary heap of `(identity, value)` pairs with a locator table mapping every
/// identity to the slot it currently occupies.
///
/// The order is chosen at construction. Elements with equal values are ordered
/// by identity, lowest first, so extraction order is fully deterministic.
///
/// Invariant: `locator[k] == Some(s)` iff the element at slot `s` has identity
/// `k`. Every mutating operation preserves it.
#[derive(Debug, Clone)]
pub struct LocatorBinaryHeap<V: Priority = i32> {
    order: HeapOrder,
    elements: Vec<Element<V>>,
    locator: Vec<Option<HeapSlot>>,
}

impl<V: Priority> LocatorBinaryHeap<V> {
    /// Empty heap accepting identities in `[0, capacity)`.
    pub fn with_capacity(capacity: usize, order: HeapOrder) -> Self {
        Self {
            order,
            elements: Vec::with_capacity(capacity),
            locator: vec![None; capacity],
        }
    }

    /// Builds a heap from `values`, assigning identities `0..n` in input order.
    pub fn init(values: impl IntoIterator<Item = V>, order: HeapOrder) -> Self {
        let elements: Vec<Element<V>> = values
            .into_iter()
            .enumerate()
            .map(|(identity, value)| Element::new(identity, value))
            .collect();
        let locator = (0..elements.len()).map(Some).collect();
        let mut heap = Self {
            order,
            elements,
            locator,
        };
        heap.heapify();
        heap
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Size of the identity range.
    pub fn capacity(&self) -> usize {
        self.locator.len()
    }

    pub fn contains(&self, identity: Identity) -> bool {
        self.slot_of(identity).is_some()
    }

    pub fn value_of(&self, identity: Identity) -> Option<V> {
        self.slot_of(identity).map(|slot| self.elements[slot].value)
    }

    pub fn as_slice(&self) -> &[Element<V>] {
        &self.elements
    }

    /// Inserts a new element.
    ///
    /// Returns `false` and leaves the heap untouched if `identity` is outside the
    /// identity range or already present.
    pub fn add(&mut self, identity: Identity, value: V) -> bool {
        if identity >= self.capacity() || self.contains(identity) {
            log::debug!(
                "ignoring add of identity {} (capacity {}, present {})",
                identity,
                self.capacity(),
                self.contains(identity)
            );
            return false;
        }
        let slot = self.elements.len();
        self.elements.push(Element::new(identity, value));
        self.locator[identity] = Some(slot);
        self.sift_up(slot);
        true
    }

    /// Root element, or [`Element::NO_DATA`] if the heap is empty.
    pub fn peek_top(&self) -> Element<V> {
        self.elements.first().copied().unwrap_or(Element::NO_DATA)
    }

    /// Removes and returns the root element, or [`Element::NO_DATA`] if the
    /// heap is empty.
    pub fn extract_top(&mut self) -> Element<V> {
        let Some(last) = self.elements.pop() else {
            return Element::NO_DATA;
        };
        if self.elements.is_empty() {
            self.locator[last.identity] = None;
            return last;
        }
        let top = self.elements[0];
        self.locator[top.identity] = None;
        self.place(0, last);
        self.sift_down(0);
        top
    }

    /// Sets a new value for `identity`, locating it through the locator table.
    ///
    /// Returns `false` and leaves the heap untouched if `identity` is absent.
    pub fn change(&mut self, identity: Identity, value: V) -> bool {
        let Some(slot) = self.slot_of(identity) else {
            log::debug!("ignoring change of absent identity {}", identity);
            return false;
        };
        let old = self.elements[slot].value;
        self.elements[slot].value = value;
        if self.order.beats(value, old) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
        true
    }

    /// Removes the element with `identity` by moving the last element into its
    /// slot.
    ///
    /// Returns `false` and leaves the heap untouched if `identity` is absent.
    pub fn delete(&mut self, identity: Identity) -> bool {
        let Some(slot) = self.slot_of(identity) else {
            log::debug!("ignoring delete of absent identity {}", identity);
            return false;
        };
        self.locator[identity] = None;
        if let Some(last) = self.elements.pop() {
            if slot < self.elements.len() {
                self.place(slot, last);
                self.restore(slot);
            }
        }
        true
    }

    pub fn heapify(&mut self) {
        if let Some(start) = last_internal_slot(self.elements.len()) {
            for slot in (0..=start).rev() {
                self.sift_down(slot);
            }
        }
    }

    fn slot_of(&self, identity: Identity) -> Option<HeapSlot> {
        self.locator.get(identity).copied().flatten()
    }

    fn precedes(&self, a: &Element<V>, b: &Element<V>) -> bool {
        self.order.beats(a.value, b.value) || (a.value == b.value && a.identity < b.identity)
    }

    #[inline]
    fn place(&mut self, slot: HeapSlot, element: Element<V>) {
        self.elements[slot] = element;
        self.locator[element.identity] = Some(slot);
    }

    fn restore(&mut self, slot: HeapSlot) {
        if slot > 0 && self.precedes(&self.elements[slot], &self.elements[parent_of(slot)]) {
            self.sift_up(slot);
        } else {
            self.sift_down(slot);
        }
    }

    fn sift_up(&mut self, mut slot: HeapSlot) {
        let element = self.elements[slot];
        while slot > 0 {
            let parent = parent_of(slot);
            let parent_element = self.elements[parent];
            if !self.precedes(&element, &parent_element) {
                break;
            }
            self.place(slot, parent_element);
            slot = parent;
        }
        self.place(slot, element);
    }

    fn sift_down(&mut self, mut slot: HeapSlot) {
        let len = self.elements.len();
        let element = self.elements[slot];
        loop {
            let left = left_child_of(slot);
            if left >= len {
                break;
            }
            let right = left + 1;
            let mut best_child = left;
            if right < len && self.precedes(&self.elements[right], &self.elements[left]) {
                best_child = right;
            }
            let child_element = self.elements[best_child];
            if !self.precedes(&child_element, &element) {
                break;
            }
            self.place(slot, child_element);
            slot = best_child;
        }
        self.place(slot, element);
    }
}
