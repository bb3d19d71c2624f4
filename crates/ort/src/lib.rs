//! Runtime support library for code generated by the O compiler.
//!
//! This is the facade crate re-exporting the native API from the O
//! runtime sub-crates. Generated code links the C surface in `ort-ffi`
//! instead; this crate is for Rust embedders, tools, and tests.
//!
//! # Quick start
//!
//! ```rust
//! use ort::prelude::*;
//!
//! // Lists grow by appending at the tail and share suffixes on `tail`.
//! let list = List::empty().append("a").append("b").append("c");
//! assert_eq!(list.head(), Some(&"a"));
//!
//! let rest = list.tail();
//! assert_eq!(rest.to_array().get(0), Some(&"b"));
//!
//! // Arrays are fixed-length; slots start empty.
//! let mut array: Array<&str> = Array::new(2);
//! assert_eq!(array.length(), 2);
//! array.set(0, "x");
//! assert_eq!(array.get(0), Some(&"x"));
//! assert_eq!(array.get(1), None);
//! ```
//!
//! # Failure model
//!
//! Array misuse (an index outside `[0, length)`) raises a
//! [`Fault`](types::Fault) and terminates; list operations on empty
//! input degrade to empty results. See the `ort-collections` docs.
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`collections`] | `ort-collections` | `Array<T>`, `List<T>`, conversion bridge |
//! | [`types`] | `ort-core` | `Fault`, `OpaqueRef` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Containers: fixed-length arrays and persistent lists
/// (`ort-collections`).
pub use ort_collections as collections;

/// Fault machinery and opaque values (`ort-core`).
pub use ort_core as types;

/// Common imports for typical runtime usage.
///
/// ```rust
/// use ort::prelude::*;
/// ```
pub mod prelude {
    pub use ort_collections::{Array, List};
    pub use ort_core::{Fault, OpaqueRef};
}
