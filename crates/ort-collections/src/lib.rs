//! Fixed-length arrays and persistent lists backing generated O code.
//!
//! Two containers with deliberately asymmetric failure contracts:
//!
//! - [`Array<T>`]: fixed-length indexed slots. Misuse (an index outside
//!   `[0, length)`) is a fatal fault, not a recoverable error — bad
//!   indices in generated code are compiler defects.
//! - [`List<T>`]: append-ordered persistent linked list with structural
//!   sharing. Degenerate inputs (head or tail of an empty list) return
//!   well-defined empty results and are never fatal.
//!
//! [`List::to_array`] is the single conversion bridge between the two.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod list;

pub use array::Array;
pub use list::List;
