//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Module change subscriptions.

use num_traits::FromPrimitive;
use std::marker::PhantomData;
use std::os::raw::{c_char, c_int, c_void};
use std::panic::AssertUnwindSafe;

use crate::connection::Connection;
use crate::error::{Error, ErrorCode, Result, SR_ERR_OK};
use crate::session::Session;
use crate::types::{Event, SubscribeFlags};
use crate::utils::*;
use sysrepo_sys as ffi;

type ModuleChangeCallback =
    dyn FnMut(&Session<'_>, &ModuleChangeEvent) -> Result<()> + Send;

/// Event delivered to a module change callback.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ModuleChangeEvent {
    /// Subscription ID.
    pub sub_id: u32,
    /// Name of the changed module.
    pub module_name: String,
    /// XPath the subscription was made with.
    pub xpath: Option<String>,
    /// Type of the event.
    pub event: Event,
    /// Request ID, identical for all the events of a single change.
    pub request_id: u32,
}

/// Subscription to the changes of a module.
///
/// The callback runs on the sysrepo handler thread. Dropping the subscription
/// unsubscribes, waiting for a running callback to finish.
pub struct Subscription<'s> {
    raw: *mut ffi::sr_subscription_ctx_t,
    // Referenced by sysrepo as private data until unsubscribed.
    data: Box<CallbackData>,
    _marker: PhantomData<&'s ()>,
}

struct CallbackData {
    conn: *const Connection,
    callback: Box<ModuleChangeCallback>,
}

impl<'s> Subscription<'s> {
    /// Subscribe to changes of a module in the active datastore of the
    /// session.
    ///
    /// When `xpath` is given, only changes of the nodes it selects are
    /// reported. Callbacks of subscriptions with higher `priority` are called
    /// first. On [`Event::Change`] and [`Event::Update`] the callback can
    /// refuse the change by returning an error, whose code is passed to
    /// sysrepo. The event session given to the callback is the one
    /// [`ChangeIter`] needs.
    ///
    /// [`ChangeIter`]: crate::change::ChangeIter
    pub fn module_change<'a, F>(
        session: &'s Session<'a>,
        module_name: &str,
        xpath: Option<&str>,
        priority: u32,
        options: SubscribeFlags,
        callback: F,
    ) -> Result<Subscription<'s>>
    where
        F: FnMut(&Session<'_>, &ModuleChangeEvent) -> Result<()>
            + Send
            + 'static,
    {
        let module_name_cstr = str_to_cstring(module_name)?;
        let xpath_cstr = opt_str_to_cstring(xpath)?;
        let mut data = Box::new(CallbackData {
            conn: session.connection() as *const Connection,
            callback: Box::new(callback),
        });
        let mut raw = std::ptr::null_mut();

        let ret = unsafe {
            ffi::sr_module_change_subscribe(
                session.raw,
                module_name_cstr.as_ptr(),
                opt_cstring_ptr(&xpath_cstr),
                Some(module_change_cb),
                &mut *data as *mut CallbackData as *mut c_void,
                priority,
                options.bits(),
                &mut raw,
            )
        };
        if ret != SR_ERR_OK {
            return Err(session.error(
                ret,
                format!(
                    "Couldn't subscribe to changes of module '{}'",
                    module_name
                ),
            ));
        }

        log::debug!("subscribed to changes of module '{}'", module_name);
        Ok(Subscription {
            raw,
            data,
            _marker: PhantomData,
        })
    }

    /// Unsubscribe, reporting any failure.
    pub fn unsubscribe(mut self) -> Result<()> {
        self.release()
    }

    fn release(&mut self) -> Result<()> {
        if self.raw.is_null() {
            return Ok(());
        }

        let ret = unsafe { ffi::sr_unsubscribe(self.raw) };
        self.raw = std::ptr::null_mut();
        if ret != SR_ERR_OK {
            return Err(Error::from_rc(ret, "Couldn't unsubscribe"));
        }

        Ok(())
    }
}

impl std::fmt::Debug for Subscription<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("raw", &self.raw)
            .field("conn", &self.data.conn)
            .finish()
    }
}

impl Drop for Subscription<'_> {
    fn drop(&mut self) {
        if let Err(error) = self.release() {
            log::warn!("{}", error);
        }
    }
}

extern "C" fn module_change_cb(
    sess: *mut ffi::sr_session_ctx_t,
    sub_id: u32,
    module_name: *const c_char,
    xpath: *const c_char,
    event: ffi::sr_event_t::Type,
    request_id: u32,
    private_data: *mut c_void,
) -> c_int {
    // SAFETY: the private data is the `CallbackData` registered along with
    // this callback, which lives until the subscription is released.
    let data = unsafe { &mut *(private_data as *mut CallbackData) };
    let conn = unsafe { &*data.conn };

    let event = match Event::from_u32(event) {
        Some(event) => event,
        None => {
            log::warn!("unknown sysrepo event {}", event);
            return ffi::sr_error_t::SR_ERR_UNSUPPORTED as c_int;
        }
    };
    let event = ModuleChangeEvent {
        sub_id,
        module_name: char_ptr_to_string(module_name),
        xpath: char_ptr_to_opt_string(xpath),
        event,
        request_id,
    };

    // The event session belongs to sysrepo.
    let session = unsafe { Session::from_raw(conn, sess, false) };
    let result = std::panic::catch_unwind(AssertUnwindSafe(|| {
        (data.callback)(&session, &event)
    }));
    match result {
        Ok(Ok(())) => SR_ERR_OK,
        Ok(Err(error)) => {
            log::debug!("module change callback failed: {}", error);
            match error.errcode {
                ErrorCode::Ok => {
                    ffi::sr_error_t::SR_ERR_CALLBACK_FAILED as c_int
                }
                errcode => errcode as c_int,
            }
        }
        Err(_) => {
            log::error!("module change callback panicked");
            ffi::sr_error_t::SR_ERR_CALLBACK_FAILED as c_int
        }
    }
}
