//! Fatal contract violations.
//!
//! The runtime's failure model is two-tier: contract violations (a bad
//! array index, an array operation through a null reference) terminate
//! the process, while degenerate-but-legal inputs (head of an empty
//! list, length of a null array) return well-defined empty results.
//! [`Fault`] covers the first tier only. There is deliberately no
//! `Error` impl and no `Result` channel — a fault is never a value that
//! callers can observe, catch, or retry.
//!
//! [`Fault::raise`] panics with the formatted fault. Every FFI entry
//! point in `ort-ffi` is an `extern "C"` function, where unwinding is a
//! guaranteed process abort, so compiler-generated code sees exactly the
//! `abort()` behavior it was built against. Native Rust embedders that
//! want the same guarantee on direct calls should build with
//! `panic = "abort"`.
//!
//! Allocation failure needs no machinery here: the global allocator
//! already aborts the process on out-of-memory, which is the contract.

use std::fmt;

/// A fatal contract violation in generated or embedding code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fault {
    /// An array `get`/`set` went through a null array reference.
    ///
    /// Only reachable from the C surface; safe Rust references cannot
    /// be null.
    NullArray,
    /// An array index outside `[0, length)`.
    IndexOutOfBounds {
        /// The offending index.
        index: i32,
        /// The array's fixed length.
        length: i32,
    },
}

impl Fault {
    /// Terminate on this fault. Never returns.
    ///
    /// Panics with the rendered fault message; at the `extern "C"`
    /// boundary the unwind becomes a process abort.
    #[cold]
    #[inline(never)]
    pub fn raise(self) -> ! {
        panic!("o-runtime fatal fault: {self}");
    }
}

impl fmt::Display for Fault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NullArray => write!(f, "array operation on a null array reference"),
            Self::IndexOutOfBounds { index, length } => {
                write!(f, "array index {index} out of bounds for length {length}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_index_and_length() {
        let fault = Fault::IndexOutOfBounds {
            index: 7,
            length: 3,
        };
        assert_eq!(
            fault.to_string(),
            "array index 7 out of bounds for length 3"
        );
    }

    #[test]
    fn display_null_array() {
        assert_eq!(
            Fault::NullArray.to_string(),
            "array operation on a null array reference"
        );
    }

    #[test]
    #[should_panic(expected = "o-runtime fatal fault")]
    fn raise_panics_with_fault_prefix() {
        Fault::NullArray.raise();
    }

    #[test]
    #[should_panic(expected = "array index -1 out of bounds for length 0")]
    fn raise_carries_the_rendered_fault() {
        Fault::IndexOutOfBounds {
            index: -1,
            length: 0,
        }
        .raise();
    }
}
