//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use std::convert::TryFrom;
use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::time::Duration;

use crate::error::{Error, Result};

/// Convert C String to owned string.
pub(crate) fn char_ptr_to_string(c_str: *const c_char) -> String {
    unsafe { CStr::from_ptr(c_str).to_string_lossy().into_owned() }
}

/// Convert C String to optional owned string.
pub(crate) fn char_ptr_to_opt_string(c_str: *const c_char) -> Option<String> {
    if c_str.is_null() {
        None
    } else {
        Some(char_ptr_to_string(c_str))
    }
}

/// Convert C String to string slice.
pub(crate) fn char_ptr_to_str<'a>(c_str: *const c_char) -> &'a str {
    unsafe { CStr::from_ptr(c_str).to_str().unwrap_or_default() }
}

/// Convert a Rust string to a C string, rejecting interior NUL bytes.
pub(crate) fn str_to_cstring(value: &str) -> Result<CString> {
    CString::new(value).map_err(|_| Error::invalid_string(value))
}

/// Convert an optional Rust string to an optional C string.
pub(crate) fn opt_str_to_cstring(
    value: Option<&str>,
) -> Result<Option<CString>> {
    value.map(str_to_cstring).transpose()
}

/// Pointer to an optional C string, or NULL when absent.
pub(crate) fn opt_cstring_ptr(value: &Option<CString>) -> *const c_char {
    value
        .as_ref()
        .map(|value| value.as_ptr())
        .unwrap_or(std::ptr::null())
}

/// Convert a timeout to the millisecond count expected by sysrepo.
///
/// A zero duration selects the sysrepo default timeout.
pub(crate) fn duration_to_ms(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX)
}

/// A trait implemented by all types that can be created from a raw C pointer
/// and a generic container type.
#[doc(hidden)]
pub unsafe trait Binding<'a>
where
    Self: Sized,
    <Self as Binding<'a>>::Container: 'a,
{
    type CType;
    type Container;

    unsafe fn from_raw(
        container: &'a Self::Container,
        raw: *mut Self::CType,
    ) -> Self;

    unsafe fn from_raw_opt(
        container: &'a Self::Container,
        raw: *mut Self::CType,
    ) -> Option<Self> {
        if raw.is_null() {
            None
        } else {
            Some(Self::from_raw(container, raw))
        }
    }
}
