//! Fixed-length indexed storage with fail-fast bounds enforcement.
//!
//! An [`Array`] is allocated once at a given length and never resized.
//! Slots start empty and hold at most one element each; the library
//! never drops a displaced element on the caller's behalf — `set` and
//! `unset` hand it back instead.
//!
//! Lengths and indices are `i32`, the integer type of the generated
//! code this runtime backs. A negative creation length clamps to zero;
//! a negative *index* is a fatal fault, same as any index at or past
//! the length.

use ort_core::Fault;

/// A fixed-length, index-addressable container.
///
/// The length is fixed at creation. Every slot is either empty or holds
/// one element; reading a never-written slot yields `None`, the empty
/// marker.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Array<T> {
    slots: Vec<Option<T>>,
}

impl<T> Array<T> {
    /// Allocate an array of `length` empty slots.
    ///
    /// A negative `length` clamps to zero; creation never faults.
    /// Allocation failure aborts the process (global allocator policy).
    pub fn new(length: i32) -> Self {
        let length = length.max(0) as usize;
        let mut slots = Vec::with_capacity(length);
        slots.resize_with(length, || None);
        Self { slots }
    }

    /// The fixed length.
    pub fn length(&self) -> i32 {
        self.slots.len() as i32
    }

    /// Whether the array has zero slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Read the slot at `index`.
    ///
    /// Returns `None` for a slot that was never written (or was
    /// [`unset`](Self::unset)). Faults — terminating the process — if
    /// `index` is outside `[0, length)`.
    pub fn get(&self, index: i32) -> Option<&T> {
        let slot = self.checked_slot(index);
        self.slots[slot].as_ref()
    }

    /// Store `value` at `index`, returning the displaced element.
    ///
    /// The displaced element is never dropped by the runtime; ownership
    /// reverts to the caller. Faults if `index` is outside
    /// `[0, length)`.
    pub fn set(&mut self, index: i32, value: T) -> Option<T> {
        let slot = self.checked_slot(index);
        self.slots[slot].replace(value)
    }

    /// Clear the slot at `index` back to the empty marker, returning
    /// the displaced element.
    ///
    /// This is the C surface's `set(array, index, NULL)`. Faults if
    /// `index` is outside `[0, length)`.
    pub fn unset(&mut self, index: i32) -> Option<T> {
        let slot = self.checked_slot(index);
        self.slots[slot].take()
    }

    /// Iterate the slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = Option<&T>> {
        self.slots.iter().map(|slot| slot.as_ref())
    }

    fn checked_slot(&self, index: i32) -> usize {
        if index < 0 || index >= self.length() {
            Fault::IndexOutOfBounds {
                index,
                length: self.length(),
            }
            .raise();
        }
        index as usize
    }
}

/// Build a fully populated array from element values, in order.
///
/// This is the materialization path used by `List::to_array`.
impl<T> FromIterator<T> for Array<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            slots: iter.into_iter().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn new_allocates_empty_slots() {
        let array: Array<&str> = Array::new(3);
        assert_eq!(array.length(), 3);
        assert_eq!(array.get(0), None);
        assert_eq!(array.get(2), None);
    }

    #[test]
    fn negative_length_clamps_to_zero() {
        let array: Array<&str> = Array::new(-7);
        assert_eq!(array.length(), 0);
        assert!(array.is_empty());
    }

    #[test]
    fn zero_length_is_valid() {
        let array: Array<&str> = Array::new(0);
        assert_eq!(array.length(), 0);
    }

    #[test]
    fn get_returns_last_set_value() {
        let mut array = Array::new(2);
        array.set(1, "first");
        array.set(1, "second");
        assert_eq!(array.get(1), Some(&"second"));
        assert_eq!(array.get(0), None);
    }

    #[test]
    fn set_returns_displaced_element() {
        let mut array = Array::new(1);
        assert_eq!(array.set(0, 10), None);
        assert_eq!(array.set(0, 20), Some(10));
    }

    #[test]
    fn unset_clears_back_to_empty_marker() {
        let mut array = Array::new(1);
        array.set(0, 5);
        assert_eq!(array.unset(0), Some(5));
        assert_eq!(array.get(0), None);
        assert_eq!(array.unset(0), None);
    }

    #[test]
    #[should_panic(expected = "array index 3 out of bounds for length 3")]
    fn get_past_length_is_fatal() {
        let array: Array<i32> = Array::new(3);
        array.get(3);
    }

    #[test]
    #[should_panic(expected = "array index -1 out of bounds for length 3")]
    fn get_negative_index_is_fatal() {
        let array: Array<i32> = Array::new(3);
        array.get(-1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn set_past_length_is_fatal() {
        let mut array = Array::new(2);
        array.set(2, 1);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn any_index_into_zero_length_is_fatal() {
        let array: Array<i32> = Array::new(0);
        array.get(0);
    }

    #[test]
    fn from_iterator_populates_every_slot() {
        let array: Array<i32> = [1, 2, 3].into_iter().collect();
        assert_eq!(array.length(), 3);
        assert_eq!(array.get(0), Some(&1));
        assert_eq!(array.get(2), Some(&3));
    }

    #[test]
    fn iter_walks_slots_in_index_order() {
        let mut array = Array::new(3);
        array.set(0, "a");
        array.set(2, "c");
        let slots: Vec<_> = array.iter().collect();
        assert_eq!(slots, vec![Some(&"a"), None, Some(&"c")]);
    }

    proptest! {
        #[test]
        fn length_matches_clamped_request(length in -100i32..1000) {
            let array: Array<u8> = Array::new(length);
            prop_assert_eq!(array.length(), length.max(0));
        }

        #[test]
        fn every_in_bounds_slot_reads_back_what_was_set(
            length in 1i32..64,
            writes in proptest::collection::vec((0usize..64, 0u32..1000), 0..32),
        ) {
            let mut array = Array::new(length);
            let mut model = vec![None; length as usize];
            for (slot, value) in writes {
                let index = (slot % length as usize) as i32;
                array.set(index, value);
                model[index as usize] = Some(value);
            }
            for index in 0..length {
                prop_assert_eq!(array.get(index), model[index as usize].as_ref());
            }
        }
    }
}
