//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! sysrepo connection.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::error::{Error, Result, SR_ERR_OK};
use crate::session::Session;
use crate::types::{ConnectionFlags, Datastore};
use crate::utils::*;
use sysrepo_sys as ffi;

/// Connection to sysrepo.
///
/// A connection is the process-wide handle used to start sessions. Sessions
/// borrow the connection, so it can't be closed or dropped while any of them
/// is alive.
#[derive(Debug)]
pub struct Connection {
    pub(crate) raw: *mut ffi::sr_conn_ctx_t,
}

/// Replay support of a YANG module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleReplaySupport {
    /// Whether replay support is enabled.
    pub enabled: bool,
    /// Timestamp of the earliest stored notification, if any notification
    /// was stored yet.
    pub earliest_notification: Option<SystemTime>,
}

impl Connection {
    /// Connect to sysrepo.
    pub fn connect(options: ConnectionFlags) -> Result<Connection> {
        let mut conn = std::ptr::null_mut();

        let ret = unsafe { ffi::sr_connect(options.bits(), &mut conn) };
        if ret != SR_ERR_OK {
            return Err(Error::from_rc(ret, "Couldn't connect to sysrepo"));
        }

        log::debug!("connected to sysrepo");
        Ok(Connection { raw: conn })
    }

    /// Disconnect from sysrepo.
    ///
    /// Closing an already closed connection does nothing.
    pub fn close(&mut self) -> Result<()> {
        if self.raw.is_null() {
            return Ok(());
        }

        let ret = unsafe { ffi::sr_disconnect(self.raw) };
        self.raw = std::ptr::null_mut();
        if ret != SR_ERR_OK {
            return Err(Error::from_rc(ret, "Couldn't disconnect from sysrepo"));
        }

        log::debug!("disconnected from sysrepo");
        Ok(())
    }

    /// Whether the connection was closed.
    pub fn is_closed(&self) -> bool {
        self.raw.is_null()
    }

    /// Start a new session on the given datastore.
    pub fn start_session(&self, datastore: Datastore) -> Result<Session<'_>> {
        let mut sess = std::ptr::null_mut();

        let ret = unsafe {
            ffi::sr_session_start(self.raw, datastore as u32, &mut sess)
        };
        if ret != SR_ERR_OK {
            return Err(Error::from_rc(ret, "Couldn't start sysrepo session"));
        }

        Ok(unsafe { Session::from_raw(self, sess, true) })
    }

    /// Raw sysrepo connection, for calls these bindings don't wrap.
    ///
    /// The pointer is NULL once the connection is closed.
    pub fn as_raw(&self) -> *mut ffi::sr_conn_ctx_t {
        self.raw
    }

    /// Get the content ID of the current YANG module set. It changes every
    /// time a module is installed, removed or updated.
    pub fn content_id(&self) -> u32 {
        unsafe { ffi::sr_get_content_id(self.raw) }
    }

    /// Enable or disable the storing of notifications of a module, which
    /// makes them available for replay.
    ///
    /// When `module_name` is `None`, the change applies to all the modules.
    pub fn set_module_replay_support(
        &self,
        module_name: Option<&str>,
        enabled: bool,
    ) -> Result<()> {
        let module_name_cstr = opt_str_to_cstring(module_name)?;

        let ret = unsafe {
            ffi::sr_set_module_replay_support(
                self.raw,
                opt_cstring_ptr(&module_name_cstr),
                enabled as i32,
            )
        };
        if ret != SR_ERR_OK {
            let msg = match module_name {
                Some(module_name) => format!(
                    "Couldn't set replay support for module '{}'",
                    module_name
                ),
                None => "Couldn't set replay support for all modules".into(),
            };
            return Err(Error::from_rc(ret, msg));
        }

        Ok(())
    }

    /// Learn the replay support of a module.
    pub fn get_module_replay_support(
        &self,
        module_name: &str,
    ) -> Result<ModuleReplaySupport> {
        let module_name_cstr = str_to_cstring(module_name)?;
        let mut earliest_notif = ffi::timespec::default();
        let mut enabled = 0;

        let ret = unsafe {
            ffi::sr_get_module_replay_support(
                self.raw,
                module_name_cstr.as_ptr(),
                &mut earliest_notif,
                &mut enabled,
            )
        };
        if ret != SR_ERR_OK {
            return Err(Error::from_rc(
                ret,
                format!(
                    "Couldn't get replay support for module '{}'",
                    module_name
                ),
            ));
        }

        Ok(ModuleReplaySupport {
            enabled: enabled != 0,
            earliest_notification: timespec_to_system_time(&earliest_notif),
        })
    }

    /// Discard stored operational data.
    ///
    /// When `xpath` is `None`, all the stored operational data are
    /// discarded. When `session` is given, only the data pushed by that
    /// session are discarded.
    pub fn discard_operational_changes(
        &self,
        xpath: Option<&str>,
        session: Option<&Session<'_>>,
        timeout: Duration,
    ) -> Result<()> {
        let xpath_cstr = opt_str_to_cstring(xpath)?;
        let sess = session
            .map(|session| session.raw)
            .unwrap_or(std::ptr::null_mut());

        let ret = unsafe {
            ffi::sr_discard_oper_changes(
                self.raw,
                sess,
                opt_cstring_ptr(&xpath_cstr),
                duration_to_ms(timeout),
            )
        };
        if ret != SR_ERR_OK {
            let msg = match xpath {
                Some(xpath) => format!(
                    "Couldn't discard operational changes of '{}'",
                    xpath
                ),
                None => "Couldn't discard operational changes".into(),
            };
            return Err(Error::from_session(sess, ret, msg));
        }

        Ok(())
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            log::warn!("{}", error);
        }
    }
}

/// Get the name of the NACM recovery user, which is allowed to perform any
/// operation.
pub fn nacm_recovery_user() -> String {
    char_ptr_to_string(unsafe { ffi::sr_nacm_get_recovery_user() })
}

// A zeroed timespec means no timestamp.
fn timespec_to_system_time(ts: &ffi::timespec) -> Option<SystemTime> {
    if ts.tv_sec == 0 && ts.tv_nsec == 0 {
        return None;
    }

    let since_epoch =
        Duration::new(ts.tv_sec.max(0) as u64, ts.tv_nsec.max(0) as u32);
    Some(UNIX_EPOCH + since_epoch)
}
