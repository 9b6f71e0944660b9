mod common;

use std::ffi::CString;
use sysrepo::{Datastore, ErrorCode, Lock};

use common::{connect, serialize, NACM};

#[test]
fn lock_unlock_restores_datastore() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Startup)
        .expect("Failed to start session");

    let mut lock = sess
        .lock(Some(NACM), None)
        .expect("Failed to lock datastore");
    assert!(lock.is_locked());
    assert_eq!(lock.datastore(), Datastore::Startup);
    assert_eq!(lock.module_name(), Some(NACM));

    sess.switch_datastore(Datastore::Operational)
        .expect("Failed to switch datastore");
    lock.unlock().expect("Failed to unlock datastore");

    assert!(!lock.is_locked());
    assert_eq!(sess.active_datastore(), Datastore::Operational);
}

#[test]
fn lock_unlock_is_idempotent() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    let mut lock = Lock::acquire(&sess, None, None)
        .expect("Failed to lock datastore");
    assert_eq!(lock.module_name(), None);
    lock.unlock().expect("Failed to unlock datastore");
    assert_eq!(lock.unlock(), Ok(()));
    assert!(!lock.is_locked());
}

#[test]
fn lock_released_on_drop() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    {
        let _lock = sess
            .lock(Some(NACM), None)
            .expect("Failed to lock datastore");
    }

    let other = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let mut lock = other
        .lock(Some(NACM), None)
        .expect("Lock wasn't released on drop");
    lock.unlock().expect("Failed to unlock datastore");
}

#[test]
fn lock_held_by_another_session() {
    let _guard = serialize();
    let conn = connect();
    let sess1 = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let sess2 = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    let mut lock = sess1
        .lock(Some(NACM), None)
        .expect("Failed to lock datastore");
    let error = sess2
        .lock(Some(NACM), None)
        .expect_err("Datastore locked twice");
    assert_eq!(error.errcode, ErrorCode::Locked);
    assert!(error.msg.contains(NACM));

    lock.unlock().expect("Failed to unlock datastore");
}

#[test]
fn lock_unlock_failure_restores_datastore() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    let mut lock = sess
        .lock(Some(NACM), None)
        .expect("Failed to lock datastore");

    // Release the module behind the guard, so its own unlock is refused.
    let module_name = CString::new(NACM).unwrap();
    let ret = unsafe {
        sysrepo::ffi::sr_unlock(sess.as_raw(), module_name.as_ptr())
    };
    assert_eq!(ret, 0);

    sess.switch_datastore(Datastore::Operational)
        .expect("Failed to switch datastore");
    let error = lock.unlock().expect_err("Released module unlocked again");
    assert_ne!(error.errcode, ErrorCode::Ok);
    assert!(error.msg.contains("Cannot unlock session"));

    assert!(lock.is_locked());
    assert_eq!(sess.active_datastore(), Datastore::Operational);
}
