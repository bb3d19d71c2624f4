//! List FFI: constructors, head/tail destructuring, array conversion,
//! free.
//!
//! A null list pointer is everywhere treated as the empty list: `head`
//! yields null, `tail` and `append` behave as on an empty list, and
//! `to_array` yields a zero-length array. No list operation is fatal.

use ort_core::OpaqueRef;

use crate::{OArray, OList};

fn export(list: OList) -> *mut OList {
    Box::into_raw(Box::new(list))
}

/// Borrow the list behind `list`; `None` for null.
///
/// # Safety
///
/// `list` must be null or a live pointer from this crate's list
/// constructors.
#[allow(unsafe_code)]
unsafe fn import<'a>(list: *const OList) -> Option<&'a OList> {
    // SAFETY: null is mapped to None; otherwise valid per the caller contract.
    unsafe { list.as_ref() }
}

/// A new empty list.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn o_list_empty() -> *mut OList {
    export(OList::empty())
}

/// A new list holding exactly `value`.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn o_list_singleton(value: OpaqueRef) -> *mut OList {
    export(OList::singleton(value))
}

/// A new list of `count` nodes all holding `value`.
///
/// `count <= 0` yields an empty list.
#[no_mangle]
#[allow(unsafe_code)]
pub extern "C" fn o_list_replicate(value: OpaqueRef, count: i32) -> *mut OList {
    export(OList::replicate(value, count))
}

/// A new list with `value` appended after `list`'s elements.
///
/// O(n) in the input length. A null `list` behaves as `o_list_singleton`.
/// The input list is unchanged.
///
/// # Safety
///
/// `list` must be null or a live pointer from this crate's list
/// constructors.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_list_append(list: *const OList, value: OpaqueRef) -> *mut OList {
    // SAFETY: forwarded caller contract.
    export(match unsafe { import(list) } {
        Some(list) => list.append(value),
        None => OList::singleton(value),
    })
}

/// The first element, or null for a null or empty list. Never fatal.
///
/// # Safety
///
/// `list` must be null or a live pointer from this crate's list
/// constructors.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_list_head(list: *const OList) -> OpaqueRef {
    // SAFETY: forwarded caller contract.
    unsafe { import(list) }
        .and_then(OList::head)
        .copied()
        .unwrap_or(OpaqueRef::null())
}

/// A new list viewing `list` without its first node.
///
/// The suffix chain is shared with the input, which is unchanged. A
/// null or empty input yields a new empty list. Never fatal.
///
/// # Safety
///
/// `list` must be null or a live pointer from this crate's list
/// constructors.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_list_tail(list: *const OList) -> *mut OList {
    // SAFETY: forwarded caller contract.
    export(unsafe { import(list) }.map_or_else(OList::empty, OList::tail))
}

/// Materialize `list` as a new fully populated array, in append order.
///
/// A null or empty input yields a zero-length array.
///
/// # Safety
///
/// `list` must be null or a live pointer from this crate's list
/// constructors.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_list_to_array(list: *const OList) -> *mut OArray {
    // SAFETY: forwarded caller contract.
    let array = unsafe { import(list) }.map_or_else(|| OArray::new(0), OList::to_array);
    Box::into_raw(Box::new(array))
}

/// Destroy a list. Null-safe; shared suffixes and stored elements are
/// not touched.
///
/// # Safety
///
/// `list` must be null or a live pointer from this crate's list
/// constructors; it must not be used after this call.
#[no_mangle]
#[allow(unsafe_code)]
pub unsafe extern "C" fn o_list_free(list: *mut OList) {
    if list.is_null() {
        return;
    }
    // SAFETY: non-null per the check above, owned per the caller contract.
    drop(unsafe { Box::from_raw(list) });
}
