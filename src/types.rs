//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! sysrepo enumerations and option sets.

use bitflags::bitflags;
use num_derive::FromPrimitive;

use sysrepo_sys as ffi;

/// sysrepo datastores.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq, FromPrimitive)]
pub enum Datastore {
    /// Contains configuration data that is loaded when a device starts.
    Startup = ffi::sr_datastore_t::SR_DS_STARTUP,
    /// Contains currently applied configuration.
    Running = ffi::sr_datastore_t::SR_DS_RUNNING,
    /// Contains configuration that can be manipulated without impacting the
    /// current configuration.
    Candidate = ffi::sr_datastore_t::SR_DS_CANDIDATE,
    /// Contains currently used configuration and the state data.
    Operational = ffi::sr_datastore_t::SR_DS_OPERATIONAL,
    /// Contains the factory-default configuration.
    FactoryDefault = ffi::sr_datastore_t::SR_DS_FACTORY_DEFAULT,
}

/// Type of a change reported by a change iterator.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum ChangeOperation {
    /// The node was created.
    Created = ffi::sr_change_oper_t::SR_OP_CREATED,
    /// The value of the node was modified.
    Modified = ffi::sr_change_oper_t::SR_OP_MODIFIED,
    /// The node was deleted.
    Deleted = ffi::sr_change_oper_t::SR_OP_DELETED,
    /// The user-ordered node was moved.
    Moved = ffi::sr_change_oper_t::SR_OP_MOVED,
}

/// Target position of a moved user-ordered list or leaf-list instance.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum MovePosition {
    /// Move before the instance given by its keys or value.
    Before = ffi::sr_move_position_t::SR_MOVE_BEFORE,
    /// Move after the instance given by its keys or value.
    After = ffi::sr_move_position_t::SR_MOVE_AFTER,
    /// Move to the first position.
    First = ffi::sr_move_position_t::SR_MOVE_FIRST,
    /// Move to the last position.
    Last = ffi::sr_move_position_t::SR_MOVE_LAST,
}

/// Subscription event types.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum Event {
    /// Occurs before any other events and allows to update the edit.
    Update = ffi::sr_event_t::SR_EV_UPDATE,
    /// Changes are about to be applied and can still be refused.
    Change = ffi::sr_event_t::SR_EV_CHANGE,
    /// Changes were applied.
    Done = ffi::sr_event_t::SR_EV_DONE,
    /// Changes applied in a previous change event are being reverted.
    Abort = ffi::sr_event_t::SR_EV_ABORT,
    /// Current configuration is being passed to a new subscription.
    Enabled = ffi::sr_event_t::SR_EV_ENABLED,
    /// An RPC or action is being executed.
    Rpc = ffi::sr_event_t::SR_EV_RPC,
}

/// Notification types.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, FromPrimitive)]
pub enum NotificationType {
    Realtime = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_REALTIME,
    Replay = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_REPLAY,
    ReplayComplete = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_REPLAY_COMPLETE,
    Terminated = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_TERMINATED,
    Modified = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_MODIFIED,
    Suspended = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_SUSPENDED,
    Resumed = ffi::sr_ev_notif_type_t::SR_EV_NOTIF_RESUMED,
}

/// sysrepo log levels.
#[repr(u32)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord, FromPrimitive)]
pub enum LogLevel {
    None = ffi::sr_log_level_t::SR_LL_NONE,
    Error = ffi::sr_log_level_t::SR_LL_ERR,
    Warning = ffi::sr_log_level_t::SR_LL_WRN,
    Info = ffi::sr_log_level_t::SR_LL_INF,
    Debug = ffi::sr_log_level_t::SR_LL_DBG,
}

bitflags! {
    /// Options to change connection behavior.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct ConnectionFlags: u32 {
        /// Always cache running datastore data, which makes mainly
        /// repeated retrieval of data much faster.
        const CACHE_RUNNING = ffi::SR_CONN_CACHE_RUNNING;
        /// Set the private pointer of schema nodes in the connection context
        /// to the parsed schema nodes.
        const CTX_SET_PRIV_PARSED = ffi::SR_CONN_CTX_SET_PRIV_PARSED;
    }
}

bitflags! {
    /// Options overriding the default behavior of edit operations.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct EditFlags: u32 {
        /// Non-recursive behavior: by set, all preceding nodes (parents) of
        /// the identified element must exist. By delete, the element must not
        /// have any children.
        const NON_RECURSIVE = ffi::SR_EDIT_NON_RECURSIVE;
        /// Strict behavior: by set, the identified element must not exist
        /// (similar to NETCONF create operation). By delete, the identified
        /// element must exist (similar to NETCONF delete operation).
        const STRICT = ffi::SR_EDIT_STRICT;
        /// Create new operation separately, independent of all the previous
        /// operations.
        const ISOLATE = ffi::SR_EDIT_ISOLATE;
    }
}

bitflags! {
    /// Options of data retrieval.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct GetFlags: u32 {
        /// Return only configuration data.
        const OPER_NO_STATE = ffi::SR_OPER_NO_STATE;
        /// Return only state data. Configuration children of state nodes are
        /// still returned.
        const OPER_NO_CONFIG = ffi::SR_OPER_NO_CONFIG;
        /// Return only stored operational data, do not call operational
        /// callbacks.
        const OPER_NO_SUBS = ffi::SR_OPER_NO_SUBS;
        /// Do not merge with stored operational data (push data).
        const OPER_NO_STORED = ffi::SR_OPER_NO_STORED;
        /// Return data with their origin attributes.
        const OPER_WITH_ORIGIN = ffi::SR_OPER_WITH_ORIGIN;
        /// Do not use cached data of operational poll subscriptions.
        const OPER_NO_POLL_CACHED = ffi::SR_OPER_NO_POLL_CACHED;
        /// Do not use cached running datastore data.
        const OPER_NO_RUN_CACHED = ffi::SR_OPER_NO_RUN_CACHED;
        /// Do not apply NACM filtering.
        const NO_FILTER = ffi::SR_GET_NO_FILTER;
    }
}

bitflags! {
    /// Options of subscriptions.
    #[derive(Copy, Clone, Debug, Eq, PartialEq)]
    pub struct SubscribeFlags: u32 {
        /// No handler thread is created, events are processed by calling
        /// the subscription processing functions.
        const NO_THREAD = ffi::SR_SUBSCR_NO_THREAD;
        /// The subscriber does not support configuration changes, it only
        /// reads them.
        const PASSIVE = ffi::SR_SUBSCR_PASSIVE;
        /// The subscriber only wants the done event.
        const DONE_ONLY = ffi::SR_SUBSCR_DONE_ONLY;
        /// The subscriber also wants the current configuration, delivered
        /// as an enabled event.
        const ENABLED = ffi::SR_SUBSCR_ENABLED;
        /// The subscriber wants to update the edit in an update event.
        const UPDATE = ffi::SR_SUBSCR_UPDATE;
        /// Merge provided operational data with other providers.
        const OPER_MERGE = ffi::SR_SUBSCR_OPER_MERGE;
        /// Suspend the handler thread by default.
        const THREAD_SUSPEND = ffi::SR_SUBSCR_THREAD_SUSPEND;
    }
}
