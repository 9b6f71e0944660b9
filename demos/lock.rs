use std::time::Duration;
use sysrepo::{Connection, ConnectionFlags, Datastore, EditFlags};

static MODULE: &str = "ietf-netconf-acm";

fn main() {
    env_logger::init();

    let conn = Connection::connect(ConnectionFlags::empty())
        .expect("Failed to connect to sysrepo");
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    // Edit the running datastore while holding a lock on the module.
    let mut lock = sess
        .lock(Some(MODULE), Some(Duration::from_secs(5)))
        .expect("Failed to lock module");
    sess.set_item(
        "/ietf-netconf-acm:nacm/exec-default",
        Some("permit"),
        EditFlags::empty(),
    )
    .expect("Failed to set item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    // The session may operate on another datastore while the lock is held.
    sess.switch_datastore(Datastore::Operational)
        .expect("Failed to switch datastore");
    lock.unlock().expect("Failed to unlock module");
    println!(
        "Module '{}' unlocked, session still on {:?}",
        MODULE,
        sess.active_datastore()
    );
}
