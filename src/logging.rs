//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Logging of sysrepo messages.

use num_traits::FromPrimitive;
use std::borrow::Cow;
use std::ffi::CStr;
use std::os::raw::c_char;
use std::sync::OnceLock;

use crate::error::Result;
use crate::types::LogLevel;
use crate::utils::*;
use sysrepo_sys as ffi;

static LOG_CALLBACK: OnceLock<Box<dyn LogCallback>> = OnceLock::new();

/// A custom logger to pass to sysrepo.
pub trait LogCallback: Send + Sync + 'static {
    fn log<'a>(&'a self, level: LogLevel, msg: Option<Cow<'a, str>>);
}

/// An error returned when the logging callback has already been initialized.
#[derive(Debug)]
pub struct LoggingCallbackAlreadySet {
    _private: (),
}

impl std::fmt::Display for LoggingCallbackAlreadySet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Logging callback already set")
    }
}

impl std::error::Error for LoggingCallbackAlreadySet {}

/// Initialize the logging callback.
///
/// The callback can only be initialized once.
pub fn init_logger<C>(
    callback: C,
) -> std::result::Result<(), LoggingCallbackAlreadySet>
where
    C: LogCallback,
{
    LOG_CALLBACK
        .set(Box::new(callback))
        .map_err(|_| LoggingCallbackAlreadySet { _private: () })?;
    unsafe { ffi::sr_log_set_cb(Some(log_callback)) };
    Ok(())
}

/// Route sysrepo messages to the `log` crate using [`DefaultLogger`].
pub fn init_default_logger(
) -> std::result::Result<(), LoggingCallbackAlreadySet> {
    init_logger(DefaultLogger::default())
}

/// Set the maximum level of messages sysrepo prints to stderr.
///
/// [`LogLevel::None`] disables printing to stderr.
pub fn set_stderr_level(level: LogLevel) {
    unsafe { ffi::sr_log_stderr(level as u32) };
}

/// Get the current stderr log level.
pub fn stderr_level() -> LogLevel {
    let level = unsafe { ffi::sr_log_get_stderr() };
    LogLevel::from_u32(level).unwrap_or(LogLevel::None)
}

/// Set the maximum level of messages sysrepo sends to syslog, using the
/// given application name.
pub fn set_syslog_level(app_name: Option<&str>, level: LogLevel) -> Result<()> {
    let app_name = opt_str_to_cstring(app_name)?;
    unsafe { ffi::sr_log_syslog(opt_cstring_ptr(&app_name), level as u32) };
    Ok(())
}

extern "C" fn log_callback(
    level: ffi::sr_log_level_t::Type,
    msg: *const c_char,
) {
    let msg = if !msg.is_null() {
        // SAFETY: we assume that the message passed to the callback is a
        // valid null terminated string for the entire execution of this
        // function.
        let cstr = unsafe { CStr::from_ptr(msg) };
        Some(cstr.to_string_lossy())
    } else {
        None
    };

    let level = LogLevel::from_u32(level).unwrap_or(LogLevel::Debug);
    if let Some(cb) = LOG_CALLBACK.get() {
        cb.log(level, msg);
    }
}

/// A logger that logs sysrepo messages using the `log` crate.
#[derive(Debug, Default)]
pub struct DefaultLogger {
    _private: (),
}

impl LogCallback for DefaultLogger {
    fn log<'a>(&'a self, level: LogLevel, msg: Option<Cow<'a, str>>) {
        let level = match level {
            LogLevel::Error => log::Level::Error,
            LogLevel::Warning => log::Level::Warn,
            LogLevel::Info => log::Level::Info,
            LogLevel::Debug => log::Level::Debug,
            LogLevel::None => return,
        };
        let msg = msg.unwrap_or_else(|| Cow::from(""));
        log::log!(target: "sysrepo", level, "{msg}");
    }
}
