//! C ABI adapter surface
//!
//! Exposes the store to foreign-language bindings through an opaque handle.
//! This layer only converts pointer+length byte parameters to the core's
//! native types and the core's absence signal to a status code; it performs
//! no storage logic. Binding packaging lives outside this crate.
//!
//! All functions are safe to call concurrently on the same handle. Keys and
//! values are arbitrary byte sequences; a null pointer with length zero is
//! accepted as the empty sequence.

use crate::kv::KvStore;

/// Operation completed; for lookups, the key was found
pub const MEMSTORE_OK: i32 = 0;

/// Key not found
pub const MEMSTORE_NOT_FOUND: i32 = 1;

/// Null pointer or otherwise unusable argument
pub const MEMSTORE_INVALID_ARGUMENT: i32 = -1;

/// Convert a pointer+length pair into a byte slice
///
/// (null, 0) is the empty slice; null with a non-zero length is rejected.
unsafe fn byte_arg<'a>(ptr: *const u8, len: usize) -> Option<&'a [u8]> {
    if len == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(unsafe { std::slice::from_raw_parts(ptr, len) })
}

/// Create a store with the default configuration
///
/// # Returns
/// - An owned handle; release it with [`memstore_free`]
#[no_mangle]
pub extern "C" fn memstore_new() -> *mut KvStore {
    Box::into_raw(Box::new(KvStore::new()))
}

/// Destroy a store and release its entries
///
/// A null handle is a no-op. The handle must not be used afterwards.
#[no_mangle]
pub extern "C" fn memstore_free(store: *mut KvStore) {
    if store.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(store) });
}

/// Set a key to a value, replacing any previous value
///
/// # Parameters
/// - `store`: store handle
/// - `key`, `key_len`: key bytes
/// - `value`, `value_len`: value bytes (copied into the store)
///
/// # Returns
/// - 0 on success, negative on invalid arguments
#[no_mangle]
pub extern "C" fn memstore_set(
    store: *const KvStore,
    key: *const u8,
    key_len: usize,
    value: *const u8,
    value_len: usize,
) -> i32 {
    if store.is_null() {
        return MEMSTORE_INVALID_ARGUMENT;
    }
    let store = unsafe { &*store };

    let (key, value) = unsafe {
        match (byte_arg(key, key_len), byte_arg(value, value_len)) {
            (Some(k), Some(v)) => (k, v),
            _ => return MEMSTORE_INVALID_ARGUMENT,
        }
    };

    store.set(key.to_vec(), value.to_vec());
    MEMSTORE_OK
}

/// Get the value stored for a key
///
/// On success the value is copied to a fresh allocation owned by the
/// caller; release it with [`memstore_value_free`].
///
/// # Parameters
/// - `store`: store handle
/// - `key`, `key_len`: key bytes
/// - `value_out`: receives the value pointer
/// - `value_len_out`: receives the value length
///
/// # Returns
/// - 0 if the value exists and was retrieved, 1 if the key was not found,
///   negative on invalid arguments
#[no_mangle]
pub extern "C" fn memstore_get(
    store: *const KvStore,
    key: *const u8,
    key_len: usize,
    value_out: *mut *mut u8,
    value_len_out: *mut usize,
) -> i32 {
    if store.is_null() || value_out.is_null() || value_len_out.is_null() {
        return MEMSTORE_INVALID_ARGUMENT;
    }
    let store = unsafe { &*store };

    let key = match unsafe { byte_arg(key, key_len) } {
        Some(k) => k,
        None => return MEMSTORE_INVALID_ARGUMENT,
    };

    match store.get(key) {
        Some(value) => {
            let boxed = value.to_vec().into_boxed_slice();
            let len = boxed.len();
            unsafe {
                *value_out = Box::into_raw(boxed) as *mut u8;
                *value_len_out = len;
            }
            MEMSTORE_OK
        }
        None => {
            unsafe {
                *value_out = std::ptr::null_mut();
                *value_len_out = 0;
            }
            MEMSTORE_NOT_FOUND
        }
    }
}

/// Release a value returned by [`memstore_get`]
///
/// A null pointer is a no-op. `len` must be the length the store reported.
#[no_mangle]
pub extern "C" fn memstore_value_free(value: *mut u8, len: usize) {
    if value.is_null() {
        return;
    }
    drop(unsafe { Box::from_raw(std::ptr::slice_from_raw_parts_mut(value, len)) });
}

/// Delete a key
///
/// # Returns
/// - 0 if an entry was removed, 1 if the key was not found, negative on
///   invalid arguments
#[no_mangle]
pub extern "C" fn memstore_delete(store: *const KvStore, key: *const u8, key_len: usize) -> i32 {
    if store.is_null() {
        return MEMSTORE_INVALID_ARGUMENT;
    }
    let store = unsafe { &*store };

    let key = match unsafe { byte_arg(key, key_len) } {
        Some(k) => k,
        None => return MEMSTORE_INVALID_ARGUMENT,
    };

    if store.delete(key) {
        MEMSTORE_OK
    } else {
        MEMSTORE_NOT_FOUND
    }
}

/// Check if a key exists
///
/// # Parameters
/// - `result`: receives 1 if the key exists, 0 if not
///
/// # Returns
/// - 0 on success, negative on invalid arguments
#[no_mangle]
pub extern "C" fn memstore_exists(
    store: *const KvStore,
    key: *const u8,
    key_len: usize,
    result: *mut u8,
) -> i32 {
    if store.is_null() || result.is_null() {
        return MEMSTORE_INVALID_ARGUMENT;
    }
    let store = unsafe { &*store };

    let key = match unsafe { byte_arg(key, key_len) } {
        Some(k) => k,
        None => return MEMSTORE_INVALID_ARGUMENT,
    };

    unsafe {
        *result = store.exists(key) as u8;
    }
    MEMSTORE_OK
}

/// Remove all entries
///
/// # Returns
/// - 0 on success, negative on invalid arguments
#[no_mangle]
pub extern "C" fn memstore_clear(store: *const KvStore) -> i32 {
    if store.is_null() {
        return MEMSTORE_INVALID_ARGUMENT;
    }
    unsafe { &*store }.clear();
    MEMSTORE_OK
}

/// Get the current number of entries
///
/// # Parameters
/// - `len_out`: receives the entry count
///
/// # Returns
/// - 0 on success, negative on invalid arguments
#[no_mangle]
pub extern "C" fn memstore_len(store: *const KvStore, len_out: *mut usize) -> i32 {
    if store.is_null() || len_out.is_null() {
        return MEMSTORE_INVALID_ARGUMENT;
    }
    unsafe {
        *len_out = (*store).len();
    }
    MEMSTORE_OK
}
