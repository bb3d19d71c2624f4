//! Fault machinery and opaque value types for the O runtime.
//!
//! This is the leaf crate with zero dependencies. It defines the two
//! pieces of shared vocabulary the rest of the workspace is built on:
//! the fail-fast [`Fault`] type and the type-erased [`OpaqueRef`] value
//! handed across the C boundary.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod fault;
pub mod value;

pub use fault::Fault;
pub use value::OpaqueRef;
