//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Datastore locks.

use std::ffi::CString;
use std::time::Duration;

use crate::error::{Result, SR_ERR_OK};
use crate::session::Session;
use crate::types::Datastore;
use crate::utils::*;
use sysrepo_sys as ffi;

/// Lock held on the datastore of a session.
///
/// sysrepo only accepts the unlock request while the session operates on the
/// locked datastore. [`Lock::unlock`] takes care of switching to it and back,
/// so the session can freely change its datastore while the lock is held.
///
/// A lock that is still held when dropped is released, with failures being
/// logged.
#[derive(Debug)]
pub struct Lock<'s, 'a> {
    session: Option<&'s Session<'a>>,
    datastore: Datastore,
    module_name: Option<CString>,
}

impl<'s, 'a> Lock<'s, 'a> {
    /// Lock the active datastore of the session.
    ///
    /// When `module_name` is given, only that module is locked. A `None`
    /// timeout selects the sysrepo default.
    pub fn acquire(
        session: &'s Session<'a>,
        module_name: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Lock<'s, 'a>> {
        let module_name_cstr = opt_str_to_cstring(module_name)?;
        let timeout = timeout.map(duration_to_ms).unwrap_or(0);

        let ret = unsafe {
            ffi::sr_lock(
                session.raw,
                opt_cstring_ptr(&module_name_cstr),
                timeout,
            )
        };
        if ret != SR_ERR_OK {
            let msg = match module_name {
                Some(module_name) => {
                    format!("Cannot lock session (module '{}')", module_name)
                }
                None => "Cannot lock session".to_owned(),
            };
            return Err(session.error(ret, msg));
        }

        Ok(Lock {
            session: Some(session),
            datastore: session.active_datastore(),
            module_name: module_name_cstr,
        })
    }

    /// Datastore that was active when the lock was acquired.
    pub fn datastore(&self) -> Datastore {
        self.datastore
    }

    /// Name of the locked module, when only one module is locked.
    pub fn module_name(&self) -> Option<&str> {
        self.module_name
            .as_ref()
            .and_then(|module_name| module_name.to_str().ok())
    }

    /// Whether the lock is still held.
    pub fn is_locked(&self) -> bool {
        self.session.is_some()
    }

    /// Release the lock.
    ///
    /// The session is switched to the locked datastore for the duration of
    /// the unlock request and then back to the datastore it was using before
    /// the call, even when the request fails. Releasing an already released
    /// lock does nothing.
    pub fn unlock(&mut self) -> Result<()> {
        let session = match self.session {
            Some(session) => session,
            None => return Ok(()),
        };

        let current = session.active_datastore();
        session.switch_datastore(self.datastore)?;

        let ret = unsafe {
            ffi::sr_unlock(session.raw, opt_cstring_ptr(&self.module_name))
        };
        let unlock_error = (ret != SR_ERR_OK)
            .then(|| session.error(ret, "Cannot unlock session"));

        let restored = session.switch_datastore(current);
        if let Some(error) = unlock_error {
            if let Err(restore_error) = restored {
                log::warn!("{}", restore_error);
            }
            return Err(error);
        }

        self.session = None;
        restored
    }
}

impl Drop for Lock<'_, '_> {
    fn drop(&mut self) {
        if let Err(error) = self.unlock() {
            log::warn!("{}", error);
        }
    }
}
