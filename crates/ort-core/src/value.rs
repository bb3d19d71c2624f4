//! Type-erased element values for the C surface.
//!
//! Generated O code stores untyped references in runtime containers.
//! [`OpaqueRef`] is the Rust spelling of that `void *`: the runtime
//! stores and returns it by position but never dereferences, clones,
//! or frees what it points to. The null pointer doubles as the
//! empty/no-value marker: a never-written array slot reads back as
//! null on the C surface.

use std::ffi::c_void;
use std::fmt;

/// An uninterpreted element reference.
///
/// `#[repr(transparent)]` over `*mut c_void`, so it crosses the C
/// boundary as a plain pointer. Copyable and comparable by address.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct OpaqueRef(*mut c_void);

impl OpaqueRef {
    /// Wrap a caller-owned pointer.
    pub const fn new(ptr: *mut c_void) -> Self {
        Self(ptr)
    }

    /// The empty/no-value marker.
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    /// Whether this is the empty marker.
    pub fn is_null(self) -> bool {
        self.0.is_null()
    }

    /// The wrapped pointer.
    pub fn as_ptr(self) -> *mut c_void {
        self.0
    }
}

impl Default for OpaqueRef {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for OpaqueRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "OpaqueRef({:p})", self.0)
    }
}
