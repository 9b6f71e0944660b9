mod common;

use std::time::Duration;
use sysrepo::{nacm_recovery_user, Datastore};

use common::{connect, serialize, NACM};

#[test]
fn connection_close_is_idempotent() {
    let _guard = serialize();
    let mut conn = connect();

    assert!(!conn.is_closed());
    conn.close().expect("Failed to disconnect");
    assert!(conn.is_closed());
    // No second disconnect is attempted.
    assert_eq!(conn.close(), Ok(()));
    assert!(conn.is_closed());
}

#[test]
fn connection_start_sessions() {
    let _guard = serialize();
    let conn = connect();

    let sess1 = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let sess2 = conn
        .start_session(Datastore::Operational)
        .expect("Failed to start session");

    assert_ne!(sess1.id(), sess2.id());
    assert_eq!(sess1.active_datastore(), Datastore::Running);
    assert_eq!(sess2.active_datastore(), Datastore::Operational);
    assert!(std::ptr::eq(sess1.connection(), &conn));
}

#[test]
fn connection_module_replay_support() {
    let _guard = serialize();
    let conn = connect();

    conn.set_module_replay_support(Some(NACM), true)
        .expect("Failed to enable replay support");
    let replay = conn
        .get_module_replay_support(NACM)
        .expect("Failed to get replay support");
    assert!(replay.enabled);

    conn.set_module_replay_support(Some(NACM), false)
        .expect("Failed to disable replay support");
    let replay = conn
        .get_module_replay_support(NACM)
        .expect("Failed to get replay support");
    assert!(!replay.enabled);
}

#[test]
fn connection_replay_support_unknown_module() {
    let _guard = serialize();
    let conn = connect();

    let error = conn
        .get_module_replay_support("no-such-module")
        .expect_err("Unknown module accepted");
    assert!(error.msg.contains("no-such-module"));

    let error = conn
        .set_module_replay_support(Some("no-such-module"), true)
        .expect_err("Unknown module accepted");
    assert!(error.msg.contains("no-such-module"));
}

#[test]
fn connection_discard_operational_changes() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Operational)
        .expect("Failed to start session");

    conn.discard_operational_changes(None, Some(&sess), Duration::ZERO)
        .expect("Failed to discard operational changes of the session");
    conn.discard_operational_changes(
        Some("/ietf-netconf-acm:nacm"),
        None,
        Duration::ZERO,
    )
    .expect("Failed to discard operational changes");
}

#[test]
fn connection_nacm_recovery_user() {
    assert!(!nacm_recovery_user().is_empty());
}

#[test]
fn connection_invalid_string_argument() {
    let _guard = serialize();
    let conn = connect();

    let error = conn
        .get_module_replay_support("bad\0name")
        .expect_err("Interior NUL accepted");
    assert_eq!(error.errcode, sysrepo::ErrorCode::InvalArg);
}

#[test]
fn connection_content_id_is_stable() {
    let _guard = serialize();
    let conn = connect();

    // No modules are installed or removed in between.
    assert_eq!(conn.content_id(), conn.content_id());
}
