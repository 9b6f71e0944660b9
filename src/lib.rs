//
// Copyright (c) The sysrepo-rs Core Contributors
//
// SPDX-License-Identifier: MIT
//

//! Rust bindings for the [sysrepo] library.
//!
//! For raw FFI bindings for sysrepo, see [sysrepo-sys].
//!
//! [sysrepo]: https://github.com/sysrepo/sysrepo
//! [sysrepo-sys]: https://github.com/holo-routing/sysrepo-rs/tree/master/sysrepo-sys
//!
//! ## Design Goals
//! * Provide high-level bindings for sysrepo using idiomatic Rust
//! * Leverage Rust's ownership system to detect API misuse problems at compile
//!   time: sessions borrow their connection, and locks, change iterators and
//!   subscriptions borrow their session
//! * Automatic resource management, with idempotent explicit `close()` methods
//!   for callers that want to observe release errors
//!
//! ## Feature flags
//! By default, sysrepo-rs uses pre-generated FFI bindings and uses dynamic
//! linking to load sysrepo. The following feature flag, however, can be used
//! to change that behavior:
//! * **bindgen**: generate new C FFI bindings dynamically instead of using
//!   the pre-generated ones. Useful when updating this crate to use newer
//!   sysrepo versions.
//!   * Additional build requirements: *bindgen 0.68.0*
//!
//! ## Examples
//!
//! See <https://github.com/holo-routing/sysrepo-rs/tree/master/demos>

mod error;

pub mod change;
pub mod connection;
pub mod data;
pub mod iter;
pub mod lock;
pub mod logging;
pub mod session;
pub mod subscription;
pub mod types;
pub mod utils;
pub mod value;

pub use crate::change::{Change, ChangeIter, ChangeIterState};
pub use crate::connection::{
    nacm_recovery_user, Connection, ModuleReplaySupport,
};
pub use crate::error::{Error, ErrorCode, Result};
pub use crate::lock::Lock;
pub use crate::session::Session;
pub use crate::subscription::{ModuleChangeEvent, Subscription};
pub use crate::types::*;
pub use crate::value::Value;

// Re-export the raw FFI bindings for convenience.
pub use sysrepo_sys as ffi;
