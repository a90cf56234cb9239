// FFI functions are inherently unsafe: callers must ensure pointer validity.
// Safety contracts are documented per-function in the public API comments.
#![allow(clippy::missing_safety_doc)]

// dms-ffi: C-compatible FFI layer for the Daitch-Mokotoff encoder.
//
// Memory management rules:
// - Opaque `DaitchMokotoff` pointer: created by `dms_new` or
//   `dms_new_with_rules`, freed by `dms_free`.
// - Returned strings: caller must free with `dms_free_str`.
// - Returned string arrays: caller must free with `dms_free_str_array`.
// - All input strings are UTF-8 encoded, null-terminated C strings.
// - A NULL (or non-UTF-8) input string yields a NULL result.

use std::ffi::{CStr, CString, c_char, c_int};
use std::ptr;

use dms_soundex::{DaitchMokotoff, EncoderOptions};

// ── Encoder lifecycle ───────────────────────────────────────────

/// Create an encoder over the bundled rules.
///
/// `folding`: non-zero to fold accented characters during cleanup.
#[unsafe(no_mangle)]
pub extern "C" fn dms_new(folding: c_int) -> *mut DaitchMokotoff {
    Box::into_raw(Box::new(DaitchMokotoff::with_folding(folding != 0)))
}

/// Create an encoder from a rule source.
///
/// Returns an opaque pointer on success, NULL on failure.
/// On failure, if `error_out` is non-NULL, it receives a heap-allocated error string
/// that the caller must free with `dms_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_new_with_rules(
    rules: *const c_char,
    folding: c_int,
    error_out: *mut *mut c_char,
) -> *mut DaitchMokotoff {
    let Some(source) = cstr_to_str(rules) else {
        set_error(error_out, "rules is null or not valid UTF-8");
        return ptr::null_mut();
    };

    let options = EncoderOptions {
        folding: folding != 0,
    };
    match DaitchMokotoff::from_rules_str(source, options) {
        Ok(dm) => Box::into_raw(Box::new(dm)),
        Err(e) => {
            set_error(error_out, &e.to_string());
            ptr::null_mut()
        }
    }
}

/// Free an encoder created by `dms_new` or `dms_new_with_rules`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_free(handle: *mut DaitchMokotoff) {
    if !handle.is_null() {
        drop(unsafe { Box::from_raw(handle) });
    }
}

// ── Encoding ────────────────────────────────────────────────────

/// Encode a name into a single six-digit code (no branching).
///
/// Returns NULL when `text` is NULL. Caller frees the result with `dms_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_encode(handle: *const DaitchMokotoff, text: *const c_char) -> *mut c_char {
    let Some(dm) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&dm.encode(text))
}

/// Encode a name into all of its codes, joined with `|`.
///
/// Returns NULL when `text` is NULL. Caller frees the result with `dms_free_str`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_soundex(handle: *const DaitchMokotoff, text: *const c_char) -> *mut c_char {
    let Some(dm) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    str_to_c(&dm.soundex(text))
}

/// Encode a name into all of its codes.
///
/// Returns a NULL-terminated array of C strings. Caller must free with
/// `dms_free_str_array`. Returns NULL on error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_soundex_codes(
    handle: *const DaitchMokotoff,
    text: *const c_char,
) -> *mut *mut c_char {
    let Some(dm) = (unsafe { handle.as_ref() }) else {
        return ptr::null_mut();
    };
    let Some(text) = cstr_to_str(text) else {
        return ptr::null_mut();
    };
    strings_to_c_array(&dm.soundex_codes(text))
}

// ── Option setters ──────────────────────────────────────────────

#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_set_folding(handle: *mut DaitchMokotoff, value: c_int) {
    if let Some(dm) = unsafe { handle.as_mut() } {
        dm.set_folding(value != 0);
    }
}

// ── Utility functions ───────────────────────────────────────────

/// Return the library version string.
///
/// The returned pointer is valid for the lifetime of the library (static).
/// Do NOT free this pointer.
#[unsafe(no_mangle)]
pub extern "C" fn dms_version() -> *const c_char {
    static VERSION: std::sync::LazyLock<CString> = std::sync::LazyLock::new(|| {
        CString::new(DaitchMokotoff::get_version()).unwrap_or_default()
    });
    VERSION.as_ptr()
}

/// Free a heap-allocated C string returned by dms functions.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_free_str(s: *mut c_char) {
    free_c_str(s);
}

/// Free a NULL-terminated array of C strings.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn dms_free_str_array(arr: *mut *mut c_char) {
    free_null_terminated_array(arr);
}

// ── Internal helpers ────────────────────────────────────────────

fn cstr_to_str<'a>(s: *const c_char) -> Option<&'a str> {
    if s.is_null() {
        return None;
    }
    unsafe { CStr::from_ptr(s) }.to_str().ok()
}

fn str_to_c(s: &str) -> *mut c_char {
    CString::new(s).unwrap_or_default().into_raw()
}

fn set_error(out: *mut *mut c_char, msg: &str) {
    if !out.is_null() {
        unsafe {
            *out = str_to_c(msg);
        }
    }
}

fn free_c_str(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

fn strings_to_c_array(strings: &[String]) -> *mut *mut c_char {
    let mut ptrs: Vec<*mut c_char> = strings.iter().map(|s| str_to_c(s)).collect();
    ptrs.push(ptr::null_mut()); // NULL terminator
    Box::into_raw(ptrs.into_boxed_slice()).cast::<*mut c_char>()
}

fn free_null_terminated_array(arr: *mut *mut c_char) {
    if arr.is_null() {
        return;
    }
    let mut i = 0;
    loop {
        let p = unsafe { *arr.add(i) };
        if p.is_null() {
            break;
        }
        free_c_str(p);
        i += 1;
    }
    // The array was allocated as a boxed slice of i+1 pointers
    drop(unsafe { Box::from_raw(ptr::slice_from_raw_parts_mut(arr, i + 1)) });
}
