//! Benchmark fixtures for the O runtime support library.
//!
//! The interesting measurement here is the append contract: `append`
//! re-walks the whole chain on every call, so building a list of n
//! elements by repeated append is O(n²). That cost is part of the
//! runtime's documented behavior, and the benchmarks exist to keep it
//! visible rather than to optimize it away.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ort_collections::List;

/// Build a list of `length` elements by repeated tail-append, the way
/// generated code builds list literals.
pub fn build_by_append(length: u32) -> List<u32> {
    let mut list = List::empty();
    for value in 0..length {
        list = list.append(value);
    }
    list
}
