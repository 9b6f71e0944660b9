#![allow(
    non_upper_case_globals,
    non_camel_case_types,
    non_snake_case,
    // Silence "constants have by default a `'static` lifetime" clippy warnings
    clippy::redundant_static_lifetimes,
    // https://github.com/rust-lang/rust-bindgen/issues/1651
    deref_nullptr,
)]

// libyang types (data trees, contexts) referenced by sysrepo signatures.
pub use libyang3_sys::{ly_ctx, lyd_node};

include!(concat!(env!("OUT_DIR"), "/sysrepo.rs"));
