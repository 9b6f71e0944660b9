//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Iteration over configuration changes.

use num_traits::FromPrimitive;

use crate::data::{node_path, node_value_canonical};
use crate::error::{Error, ErrorCode, Result, SR_ERR_OK};
use crate::session::Session;
use crate::types::ChangeOperation;
use crate::utils::*;
use sysrepo_sys as ffi;

const SR_ERR_NOT_FOUND: i32 = ffi::sr_error_t::SR_ERR_NOT_FOUND as i32;

/// A single change of a data node.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Change {
    /// Type of the change.
    pub operation: ChangeOperation,
    /// Data path of the changed node.
    pub path: String,
    /// Value of the changed node (leaves and leaf-lists only).
    pub value: Option<String>,
    /// Previous value of a modified leaf, or the value of the leaf-list
    /// instance a moved leaf-list instance used to follow.
    pub previous_value: Option<String>,
    /// Keys of the list instance a moved list instance used to follow.
    pub previous_list: Option<String>,
    /// Whether the previous value of a modified leaf was its default value.
    pub previous_default: bool,
}

/// State of a [`ChangeIter`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ChangeIterState {
    /// A current change is available.
    Active,
    /// All the changes were consumed.
    Exhausted,
    /// The iterator was closed.
    Closed,
}

/// Cursor over the changes of an event session.
///
/// A freshly created iterator already points to the first change (if any).
#[derive(Debug)]
pub struct ChangeIter<'s, 'a> {
    session: &'s Session<'a>,
    raw: *mut ffi::sr_change_iter_t,
    current: Option<Change>,
    exhausted: bool,
}

impl<'s, 'a> ChangeIter<'s, 'a> {
    /// Create an iterator over the changes matching the XPath and advance it
    /// to the first change.
    ///
    /// Changes are only available to event sessions inside module change
    /// callbacks.
    pub fn begin(
        session: &'s Session<'a>,
        xpath: &str,
    ) -> Result<ChangeIter<'s, 'a>> {
        let xpath_cstr = str_to_cstring(xpath)?;
        let mut raw = std::ptr::null_mut();

        let ret = unsafe {
            ffi::sr_get_changes_iter(session.raw, xpath_cstr.as_ptr(), &mut raw)
        };
        if ret != SR_ERR_OK {
            return Err(session.error(
                ret,
                format!(
                    "Couldn't create an iterator for changes of '{}'",
                    xpath
                ),
            ));
        }

        let mut iter = ChangeIter {
            session,
            raw,
            current: None,
            exhausted: false,
        };
        // On failure the iterator is closed when dropped.
        iter.next()?;

        Ok(iter)
    }

    /// Advance to the next change.
    ///
    /// Reaching the end of the changes isn't an error: the iterator just
    /// becomes exhausted, and stays so on further calls.
    pub fn next(&mut self) -> Result<()> {
        if self.raw.is_null() || self.exhausted {
            self.current = None;
            return Ok(());
        }

        let mut operation = 0;
        let mut node = std::ptr::null();
        let mut prev_value = std::ptr::null();
        let mut prev_list = std::ptr::null();
        let mut prev_dflt = 0;

        let ret = unsafe {
            ffi::sr_get_change_tree_next(
                self.session.raw,
                self.raw,
                &mut operation,
                &mut node,
                &mut prev_value,
                &mut prev_list,
                &mut prev_dflt,
            )
        };
        if ret == SR_ERR_NOT_FOUND {
            self.current = None;
            self.exhausted = true;
            return Ok(());
        }
        if ret != SR_ERR_OK {
            return Err(self
                .session
                .error(ret, "Could not iterate to the next change"));
        }

        let operation = ChangeOperation::from_u32(operation).ok_or_else(|| {
            Error::new(
                ErrorCode::Internal,
                format!("Unknown change operation {}", operation),
            )
        })?;
        let (path, value) = if node.is_null() {
            (String::new(), None)
        } else {
            (node_path(node), node_value_canonical(node))
        };

        self.current = Some(Change {
            operation,
            path,
            value,
            previous_value: char_ptr_to_opt_string(prev_value),
            previous_list: char_ptr_to_opt_string(prev_list),
            previous_default: prev_dflt != 0,
        });

        Ok(())
    }

    /// Whether a current change is available.
    pub fn has_next(&self) -> bool {
        self.current.is_some()
    }

    /// Current change.
    pub fn current(&self) -> Option<&Change> {
        self.current.as_ref()
    }

    /// Current state of the iterator.
    pub fn state(&self) -> ChangeIterState {
        if self.raw.is_null() {
            ChangeIterState::Closed
        } else if self.current.is_some() {
            ChangeIterState::Active
        } else {
            ChangeIterState::Exhausted
        }
    }

    /// Release the iterator. Closing an already closed iterator does
    /// nothing.
    pub fn close(&mut self) {
        self.current = None;
        if !self.raw.is_null() {
            unsafe { ffi::sr_free_change_iter(self.raw) };
            self.raw = std::ptr::null_mut();
        }
    }

    /// Consume the remaining changes, closing the iterator.
    pub fn collect_changes(mut self) -> Result<Vec<Change>> {
        let mut changes = Vec::new();
        while let Some(change) = self.current.take() {
            changes.push(change);
            self.next()?;
        }
        self.close();
        Ok(changes)
    }
}

impl Drop for ChangeIter<'_, '_> {
    fn drop(&mut self) {
        self.close();
    }
}
