//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! sysrepo session.

use num_traits::FromPrimitive;
use std::cell::RefCell;
use std::time::Duration;

use crate::change::ChangeIter;
use crate::connection::Connection;
use crate::data::DataTree;
use crate::error::{Error, ErrorCode, Result, SR_ERR_OK};
use crate::lock::Lock;
use crate::subscription::{ModuleChangeEvent, Subscription};
use crate::types::{
    Datastore, EditFlags, GetFlags, MovePosition, SubscribeFlags,
};
use crate::utils::*;
use crate::value::Value;
use sysrepo_sys as ffi;

type CleanupTask<'a> = Box<dyn FnOnce() + 'a>;

/// sysrepo session.
///
/// All the operations of a session are performed on its active datastore.
/// A session borrows the connection it was started on.
pub struct Session<'a> {
    conn: &'a Connection,
    pub(crate) raw: *mut ffi::sr_session_ctx_t,
    // Event sessions handed to subscription callbacks belong to sysrepo.
    owned: bool,
    cleanup: RefCell<Vec<CleanupTask<'a>>>,
}

impl<'a> Session<'a> {
    /// Wrap a raw sysrepo session.
    ///
    /// # Safety
    ///
    /// `raw` must be a valid session of `conn`. When `owned` is false, the
    /// session isn't stopped on close.
    pub(crate) unsafe fn from_raw(
        conn: &'a Connection,
        raw: *mut ffi::sr_session_ctx_t,
        owned: bool,
    ) -> Session<'a> {
        if owned {
            let id = ffi::sr_session_get_id(raw);
            log::debug!("started sysrepo session {}", id);
        }
        Session {
            conn,
            raw,
            owned,
            cleanup: RefCell::new(Vec::new()),
        }
    }

    /// Register an action to run when the session is closed.
    ///
    /// Actions run in the reverse order of their registration.
    pub fn add_cleanup<F>(&self, task: F)
    where
        F: FnOnce() + 'a,
    {
        self.cleanup.borrow_mut().push(Box::new(task));
    }

    /// Close the session.
    ///
    /// Runs the registered cleanup actions and then stops the session.
    /// Closing an already closed session does nothing.
    pub fn close(&mut self) -> Result<()> {
        let cleanup = std::mem::take(self.cleanup.get_mut());
        for task in cleanup.into_iter().rev() {
            task();
        }

        if self.raw.is_null() {
            return Ok(());
        }
        let raw = std::mem::replace(&mut self.raw, std::ptr::null_mut());
        if !self.owned {
            return Ok(());
        }

        let id = unsafe { ffi::sr_session_get_id(raw) };
        let ret = unsafe { ffi::sr_session_stop(raw) };
        if ret != SR_ERR_OK {
            return Err(Error::from_rc(
                ret,
                format!("Couldn't stop sysrepo session {}", id),
            ));
        }

        log::debug!("stopped sysrepo session {}", id);
        Ok(())
    }

    /// Whether the session was closed.
    pub fn is_closed(&self) -> bool {
        self.raw.is_null()
    }

    /// Connection the session was started on.
    pub fn connection(&self) -> &'a Connection {
        self.conn
    }

    /// Session ID.
    pub fn id(&self) -> u32 {
        unsafe { ffi::sr_session_get_id(self.raw) }
    }

    /// Raw sysrepo session, for calls these bindings don't wrap.
    ///
    /// The pointer is NULL once the session is closed.
    pub fn as_raw(&self) -> *mut ffi::sr_session_ctx_t {
        self.raw
    }

    /// Datastore the session currently operates on.
    pub fn active_datastore(&self) -> Datastore {
        let ds = unsafe { ffi::sr_session_get_ds(self.raw) };
        Datastore::from_u32(ds).expect("unknown sysrepo datastore")
    }

    /// Change the datastore the session operates on.
    pub fn switch_datastore(&self, datastore: Datastore) -> Result<()> {
        let ret =
            unsafe { ffi::sr_session_switch_ds(self.raw, datastore as u32) };
        if ret != SR_ERR_OK {
            return Err(self.error(
                ret,
                format!("Couldn't switch datastore to {:?}", datastore),
            ));
        }

        Ok(())
    }

    /// Retrieve a tree whose root nodes match the provided XPath.
    ///
    /// A `max_depth` of 0 retrieves whole subtrees. An XPath selecting no
    /// nodes yields an empty tree.
    pub fn get_data(
        &self,
        xpath: &str,
        max_depth: u32,
        timeout: Duration,
        options: GetFlags,
    ) -> Result<DataTree<'a>> {
        let xpath_cstr = str_to_cstring(xpath)?;
        let mut data = std::ptr::null_mut();

        let ret = unsafe {
            ffi::sr_get_data(
                self.raw,
                xpath_cstr.as_ptr(),
                max_depth,
                duration_to_ms(timeout),
                options.bits(),
                &mut data,
            )
        };
        // Take ownership before checking the result so that the data is
        // released on every path.
        let dtree = unsafe { DataTree::from_raw(data) };
        if ret != SR_ERR_OK {
            return Err(self.error(ret, format!("Couldn't get '{}'", xpath)));
        }

        Ok(dtree)
    }

    /// Retrieve the value of a single data node.
    pub fn get_value(&self, path: &str, timeout: Duration) -> Result<Value> {
        let path_cstr = str_to_cstring(path)?;
        let mut raw_value = std::ptr::null_mut();

        let ret = unsafe {
            ffi::sr_get_item(
                self.raw,
                path_cstr.as_ptr(),
                duration_to_ms(timeout),
                &mut raw_value,
            )
        };
        if ret != SR_ERR_OK {
            unsafe { ffi::sr_free_val(raw_value) };
            return Err(self.error(ret, format!("Couldn't get '{}'", path)));
        }
        if raw_value.is_null() {
            return Err(Error::new(
                ErrorCode::NotFound,
                format!("Couldn't get '{}'", path),
            ));
        }

        let value = unsafe { Value::from_raw(raw_value) };
        unsafe { ffi::sr_free_val(raw_value) };
        Ok(value)
    }

    /// Retrieve the value of a single data node as a string.
    ///
    /// Containers, lists and empty leaves yield an empty string.
    pub fn get_item(&self, path: &str) -> Result<String> {
        self.get_value(path, Duration::ZERO)
            .map(|value| value.to_string())
    }

    /// Prepare to set (create) the value of a leaf, leaf-list, list or
    /// presence container.
    ///
    /// With `value` set to `None` the node is created without an explicit
    /// value, as needed for presence containers and for lists whose keys are
    /// given in the path. The change is applied by [`Session::apply_changes`].
    pub fn set_item(
        &self,
        path: &str,
        value: Option<&str>,
        options: EditFlags,
    ) -> Result<()> {
        let path_cstr = str_to_cstring(path)?;
        let value_cstr = opt_str_to_cstring(value)?;

        let ret = unsafe {
            ffi::sr_set_item_str(
                self.raw,
                path_cstr.as_ptr(),
                opt_cstring_ptr(&value_cstr),
                std::ptr::null(),
                options.bits(),
            )
        };
        if ret != SR_ERR_OK {
            let msg = match value {
                Some(value) => {
                    format!("Couldn't set '{}' to '{}'", path, value)
                }
                None => format!("Couldn't set '{}'", path),
            };
            return Err(self.error(ret, msg));
        }

        Ok(())
    }

    /// Prepare to delete the nodes matching the specified XPath.
    pub fn delete_item(&self, path: &str, options: EditFlags) -> Result<()> {
        let path_cstr = str_to_cstring(path)?;

        let ret = unsafe {
            ffi::sr_delete_item(self.raw, path_cstr.as_ptr(), options.bits())
        };
        if ret != SR_ERR_OK {
            return Err(self.error(ret, format!("Couldn't delete '{}'", path)));
        }

        Ok(())
    }

    /// Prepare to move an instance of a user-ordered list or leaf-list.
    ///
    /// For [`MovePosition::Before`] and [`MovePosition::After`],
    /// `keys_or_value` identifies the relative instance: its keys in the
    /// `[key1='val1'][key2='val2']` form for lists, its value for leaf-lists.
    /// It is ignored for [`MovePosition::First`] and [`MovePosition::Last`].
    pub fn move_item(
        &self,
        path: &str,
        position: MovePosition,
        keys_or_value: Option<&str>,
        origin: Option<&str>,
        options: EditFlags,
    ) -> Result<()> {
        let keys_or_value = match position {
            MovePosition::Before | MovePosition::After => {
                if keys_or_value.is_none() {
                    return Err(Error::new(
                        ErrorCode::InvalArg,
                        format!(
                            "Couldn't move '{}': {:?} requires list keys \
                             or a leaf-list value",
                            path, position
                        ),
                    ));
                }
                keys_or_value
            }
            MovePosition::First | MovePosition::Last => None,
        };
        let path_cstr = str_to_cstring(path)?;
        let keys_or_value_cstr = opt_str_to_cstring(keys_or_value)?;
        let origin_cstr = opt_str_to_cstring(origin)?;

        let ret = unsafe {
            ffi::sr_move_item(
                self.raw,
                path_cstr.as_ptr(),
                position as u32,
                opt_cstring_ptr(&keys_or_value_cstr),
                opt_cstring_ptr(&keys_or_value_cstr),
                opt_cstring_ptr(&origin_cstr),
                options.bits(),
            )
        };
        if ret != SR_ERR_OK {
            return Err(self.error(ret, format!("Couldn't move '{}'", path)));
        }

        Ok(())
    }

    /// Discard operational data previously pushed by this session.
    ///
    /// When `xpath` is `None`, all the data pushed by the session are
    /// discarded.
    pub fn drop_foreign_operational_content(
        &self,
        xpath: Option<&str>,
    ) -> Result<()> {
        let xpath_cstr = opt_str_to_cstring(xpath)?;

        let ret = unsafe {
            ffi::sr_discard_items(self.raw, opt_cstring_ptr(&xpath_cstr))
        };
        if ret != SR_ERR_OK {
            let msg = match xpath {
                Some(xpath) => format!("Couldn't discard '{}'", xpath),
                None => "Couldn't discard all nodes".to_owned(),
            };
            return Err(self.error(ret, msg));
        }

        Ok(())
    }

    /// Whether there are any prepared changes not applied yet.
    pub fn has_changes(&self) -> bool {
        unsafe { ffi::sr_has_changes(self.raw) != 0 }
    }

    /// Apply the prepared changes.
    ///
    /// A zero timeout selects the sysrepo default.
    pub fn apply_changes(&self, timeout: Duration) -> Result<()> {
        let ret = unsafe {
            ffi::sr_apply_changes(self.raw, duration_to_ms(timeout))
        };
        if ret != SR_ERR_OK {
            return Err(self.error(ret, "Couldn't apply changes"));
        }

        Ok(())
    }

    /// Discard prepared changes.
    ///
    /// When `xpath` is `None`, all the prepared changes are discarded.
    pub fn discard_changes(&self, xpath: Option<&str>) -> Result<()> {
        let xpath_cstr = opt_str_to_cstring(xpath)?;

        let ret = unsafe {
            ffi::sr_discard_changes_xpath(
                self.raw,
                opt_cstring_ptr(&xpath_cstr),
            )
        };
        if ret != SR_ERR_OK {
            let msg = match xpath {
                Some(xpath) => {
                    format!("Couldn't discard changes of '{}'", xpath)
                }
                None => "Couldn't discard changes".to_owned(),
            };
            return Err(self.error(ret, msg));
        }

        Ok(())
    }

    /// Replace the configuration of the active datastore with the one of the
    /// source datastore.
    ///
    /// When `module_name` is `None`, the configuration of all the modules is
    /// copied.
    pub fn copy_config(
        &self,
        source: Datastore,
        module_name: Option<&str>,
        timeout: Duration,
    ) -> Result<()> {
        let module_name_cstr = opt_str_to_cstring(module_name)?;

        let ret = unsafe {
            ffi::sr_copy_config(
                self.raw,
                opt_cstring_ptr(&module_name_cstr),
                source as u32,
                duration_to_ms(timeout),
            )
        };
        if ret != SR_ERR_OK {
            let msg = match module_name {
                Some(module_name) => format!(
                    "Couldn't copy config of module '{}' from {:?}",
                    module_name, source
                ),
                None => format!("Couldn't copy config from {:?}", source),
            };
            return Err(self.error(ret, msg));
        }

        Ok(())
    }

    /// Name of the originator of the session's changes (empty when unset).
    pub fn originator_name(&self) -> String {
        let name = unsafe { ffi::sr_session_get_orig_name(self.raw) };
        char_ptr_to_opt_string(name).unwrap_or_default()
    }

    /// Set the name of the originator of the session's changes.
    pub fn set_originator_name(&self, name: &str) -> Result<()> {
        let name_cstr = str_to_cstring(name)?;

        let ret = unsafe {
            ffi::sr_session_set_orig_name(self.raw, name_cstr.as_ptr())
        };
        if ret != SR_ERR_OK {
            return Err(self.error(
                ret,
                format!("Couldn't set originator name '{}'", name),
            ));
        }

        Ok(())
    }

    /// Set the NACM user of the session, enabling NACM checks of its
    /// operations.
    pub fn set_nacm_user(&self, user: &str) -> Result<()> {
        let user_cstr = str_to_cstring(user)?;

        let ret =
            unsafe { ffi::sr_nacm_set_user(self.raw, user_cstr.as_ptr()) };
        if ret != SR_ERR_OK {
            return Err(
                self.error(ret, format!("Couldn't set NACM user '{}'", user))
            );
        }

        Ok(())
    }

    /// NACM user of the session, if any.
    pub fn nacm_user(&self) -> Option<String> {
        char_ptr_to_opt_string(unsafe { ffi::sr_nacm_get_user(self.raw) })
    }

    /// Lock the active datastore (or only one of its modules).
    ///
    /// See [`Lock::acquire`].
    pub fn lock(
        &self,
        module_name: Option<&str>,
        timeout: Option<Duration>,
    ) -> Result<Lock<'_, 'a>> {
        Lock::acquire(self, module_name, timeout)
    }

    /// Iterate over the changes matching the XPath.
    ///
    /// Only event sessions handed to module change callbacks carry changes.
    /// See [`ChangeIter::begin`].
    pub fn get_changes(&self, xpath: &str) -> Result<ChangeIter<'_, 'a>> {
        ChangeIter::begin(self, xpath)
    }

    /// Subscribe to changes of a module in the active datastore.
    ///
    /// See [`Subscription::module_change`].
    pub fn subscribe_module_change<F>(
        &self,
        module_name: &str,
        xpath: Option<&str>,
        priority: u32,
        options: SubscribeFlags,
        callback: F,
    ) -> Result<Subscription<'_>>
    where
        F: FnMut(&Session<'_>, &ModuleChangeEvent) -> Result<()>
            + Send
            + 'static,
    {
        Subscription::module_change(
            self,
            module_name,
            xpath,
            priority,
            options,
            callback,
        )
    }

    // Build an error carrying the last error message stored on the session.
    pub(crate) fn error(
        &self,
        rc: std::os::raw::c_int,
        msg: impl Into<String>,
    ) -> Error {
        Error::from_session(self.raw, rc, msg)
    }
}

impl std::fmt::Debug for Session<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("raw", &self.raw)
            .field("owned", &self.owned)
            .field("cleanup_tasks", &self.cleanup.borrow().len())
            .finish()
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.close() {
            log::warn!("{}", error);
        }
    }
}
