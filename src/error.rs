//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::os::raw::c_int;

use crate::utils::*;
use sysrepo_sys as ffi;

/// A convenience wrapper around `Result` for `sysrepo::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Return code of a successful sysrepo call.
pub(crate) const SR_ERR_OK: c_int = ffi::sr_error_t::SR_ERR_OK as c_int;

/// sysrepo error codes.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum ErrorCode {
    /// No error.
    Ok = ffi::sr_error_t::SR_ERR_OK,
    /// Invalid argument.
    InvalArg = ffi::sr_error_t::SR_ERR_INVAL_ARG,
    /// Error generated by libyang.
    Libyang = ffi::sr_error_t::SR_ERR_LY,
    /// System function call failed.
    Sys = ffi::sr_error_t::SR_ERR_SYS,
    /// Not enough memory.
    NoMemory = ffi::sr_error_t::SR_ERR_NO_MEMORY,
    /// Item not found.
    NotFound = ffi::sr_error_t::SR_ERR_NOT_FOUND,
    /// Item already exists.
    Exists = ffi::sr_error_t::SR_ERR_EXISTS,
    /// Other internal error.
    Internal = ffi::sr_error_t::SR_ERR_INTERNAL,
    /// Unsupported operation requested.
    Unsupported = ffi::sr_error_t::SR_ERR_UNSUPPORTED,
    /// Validation of the changes failed.
    ValidationFailed = ffi::sr_error_t::SR_ERR_VALIDATION_FAILED,
    /// An operation failed.
    OperationFailed = ffi::sr_error_t::SR_ERR_OPERATION_FAILED,
    /// Operation not authorized.
    Unauthorized = ffi::sr_error_t::SR_ERR_UNAUTHORIZED,
    /// Requested resource is already locked.
    Locked = ffi::sr_error_t::SR_ERR_LOCKED,
    /// Time out has expired.
    TimeOut = ffi::sr_error_t::SR_ERR_TIME_OUT,
    /// User callback failure caused the operation to fail.
    CallbackFailed = ffi::sr_error_t::SR_ERR_CALLBACK_FAILED,
    /// User callback has not processed the event and will do so on some
    /// future event processing.
    CallbackShelve = ffi::sr_error_t::SR_ERR_CALLBACK_SHELVE,
}

/// Error returned by the sysrepo bindings.
///
/// `msg` describes the operation that failed (and the path, module or value
/// involved). `detail` holds the last error message sysrepo recorded on the
/// session, when one is available.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Error {
    pub errcode: ErrorCode,
    pub msg: String,
    pub detail: Option<String>,
}

// ===== impl ErrorCode =====

impl ErrorCode {
    /// Translate a return code of a sysrepo function.
    pub fn from_raw(rc: c_int) -> ErrorCode {
        match ErrorCode::from_i32(rc) {
            Some(errcode) => errcode,
            None => {
                log::warn!("unknown sysrepo error code {rc}");
                ErrorCode::Internal
            }
        }
    }

    /// Human-readable description of the error code, as provided by sysrepo.
    pub fn description(&self) -> String {
        char_ptr_to_string(unsafe { ffi::sr_strerror(*self as c_int) })
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

// ===== impl Error =====

impl Error {
    pub fn new(errcode: ErrorCode, msg: impl Into<String>) -> Error {
        Error {
            errcode,
            msg: msg.into(),
            detail: None,
        }
    }

    /// Build an error out of a sysrepo return code.
    pub(crate) fn from_rc(rc: c_int, msg: impl Into<String>) -> Error {
        Error::new(ErrorCode::from_raw(rc), msg)
    }

    /// Build an error out of a sysrepo return code, attaching the last error
    /// message sysrepo stored on the given session.
    pub(crate) fn from_session(
        sess: *mut ffi::sr_session_ctx_t,
        rc: c_int,
        msg: impl Into<String>,
    ) -> Error {
        let mut error = Error::from_rc(rc, msg);
        error.detail = session_error_message(sess);
        error
    }

    /// Error used when a Rust string can't be passed to sysrepo.
    pub(crate) fn invalid_string(value: &str) -> Error {
        Error::new(
            ErrorCode::InvalArg,
            format!("Invalid string argument '{}'", value.escape_debug()),
        )
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (code: {})", self.msg, self.errcode as u32)?;
        if let Some(detail) = &self.detail {
            write!(f, ": {}", detail)?;
        }
        Ok(())
    }
}

impl std::error::Error for Error {}

// Last error message stored by sysrepo on the session, if any.
fn session_error_message(sess: *mut ffi::sr_session_ctx_t) -> Option<String> {
    if sess.is_null() {
        return None;
    }

    let mut err_info = std::ptr::null();
    let ret = unsafe { ffi::sr_session_get_error(sess, &mut err_info) };
    if ret != SR_ERR_OK || err_info.is_null() {
        return None;
    }

    let err_info = unsafe { &*err_info };
    if err_info.err.is_null() || err_info.err_count == 0 {
        return None;
    }
    let last = unsafe { &*err_info.err.add(err_info.err_count as usize - 1) };
    char_ptr_to_opt_string(last.message)
}
