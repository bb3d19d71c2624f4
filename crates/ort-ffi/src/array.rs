//! Array FFI: create, length, get, set, free.
//!
//! `o_array_length` treats a null array as the canonical empty array
//! and returns 0. `o_array_get`/`o_array_set` treat a null array as a
//! fatal fault, same as an out-of-bounds index.

use ort_core::{Fault, OpaqueRef};

use crate::OArray;

/// Allocate a fixed-length array of empty slots.
///
/// A negative `length` clamps to zero. The returned pointer is owned by
/// the caller; release it with [`o_array_free`] or let it live for the
/// process.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn o_array_new(length: i32) -> *mut OArray {
    Box::into_raw(Box::new(OArray::new(length)))
}

/// The array's fixed length, or 0 for a null array.
///
/// # Safety
///
/// `array` must be null or a pointer returned by this crate's array
/// constructors that has not been freed.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_array_length(array: *const OArray) -> i32 {
    if array.is_null() {
        return 0;
    }
    // SAFETY: non-null per the check above, valid per the caller contract.
    unsafe { &*array }.length()
}

/// The element at `index`, or null for a never-written slot.
///
/// Faults (aborting the process) on a null array or an index outside
/// `[0, length)`.
///
/// # Safety
///
/// `array` must be null or a live pointer from this crate's array
/// constructors.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_array_get(array: *const OArray, index: i32) -> OpaqueRef {
    if array.is_null() {
        Fault::NullArray.raise();
    }
    // SAFETY: non-null per the check above, valid per the caller contract.
    let array = unsafe { &*array };
    array.get(index).copied().unwrap_or(OpaqueRef::null())
}

/// Store `value` at `index`, overwriting any prior element.
///
/// A null `value` clears the slot back to the empty marker. The
/// displaced element is never touched by the runtime. Faults on a null
/// array or an index outside `[0, length)`.
///
/// # Safety
///
/// `array` must be null or a live pointer from this crate's array
/// constructors, with no other reference active during the call.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_array_set(array: *mut OArray, index: i32, value: OpaqueRef) {
    if array.is_null() {
        Fault::NullArray.raise();
    }
    // SAFETY: non-null per the check above, exclusive per the caller contract.
    let array = unsafe { &mut *array };
    if value.is_null() {
        array.unset(index);
    } else {
        array.set(index, value);
    }
}

/// Destroy an array. Null-safe; the stored elements are not touched.
///
/// # Safety
///
/// `array` must be null or a live pointer from this crate's array
/// constructors; it must not be used after this call.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_array_free(array: *mut OArray) {
    if array.is_null() {
        return;
    }
    // SAFETY: non-null per the check above, owned per the caller contract.
    drop(unsafe { Box::from_raw(array) });
}
