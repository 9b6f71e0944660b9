#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use sysrepo::{Connection, ConnectionFlags};

pub static NACM: &str = "ietf-netconf-acm";

static SERIAL: Mutex<()> = Mutex::new(());

// Tests of a file share the same sysrepo instance and data nodes.
pub fn serialize() -> MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn connect() -> Connection {
    Connection::connect(ConnectionFlags::empty())
        .expect("Failed to connect to sysrepo")
}
