//! C ABI for the O runtime, linked by compiler-generated code.
//!
//! This is the only crate in the workspace that may contain `unsafe`
//! code. It exposes the `o_array_*` and `o_list_*` symbols over raw
//! pointers to [`OArray`] and [`OList`], exactly as the generated code
//! was compiled against; the matching declarations live in
//! `include/o_runtime.h`.
//!
//! # Failure contract
//!
//! Contract violations (out-of-bounds index, array access through a
//! null pointer) raise a [`Fault`](ort_core::Fault), which unwinds into
//! the `extern "C"` boundary and aborts the process, the hard-stop
//! behavior generated code is compiled against. Degenerate list inputs
//! (null or empty lists) are never fatal and return empty results.
//!
//! # Lifetime
//!
//! Every constructor hands out a `Box::into_raw` pointer the runtime
//! never reclaims on its own. Hosts that manage object lifetimes (for
//! example an embedding with a garbage collector) destroy containers
//! through the null-safe `o_array_free`/`o_list_free`; hosts that do
//! not simply let containers live for the process.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]

mod array;
mod list;

pub use array::{o_array_free, o_array_get, o_array_length, o_array_new, o_array_set};
pub use list::{
    o_list_append, o_list_empty, o_list_free, o_list_head, o_list_replicate, o_list_singleton,
    o_list_tail, o_list_to_array,
};

use ort_collections::{Array, List};
use ort_core::OpaqueRef;

/// The array instantiation behind every `o_array_*` pointer.
pub type OArray = Array<OpaqueRef>;

/// The list instantiation behind every `o_list_*` pointer.
pub type OList = List<OpaqueRef>;
