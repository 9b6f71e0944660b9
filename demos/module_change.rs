use std::time::Duration;
use sysrepo::{
    Connection, ConnectionFlags, Datastore, EditFlags, Event, SubscribeFlags,
};

static MODULE: &str = "ietf-netconf-acm";

fn main() {
    env_logger::init();

    let conn = Connection::connect(ConnectionFlags::empty())
        .expect("Failed to connect to sysrepo");
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    // Print every change of the module once it's applied.
    let subscription = sess
        .subscribe_module_change(
            MODULE,
            None,
            0,
            SubscribeFlags::DONE_ONLY,
            |event_sess, event| {
                println!(
                    "{:?} event for module '{}' (request {})",
                    event.event, event.module_name, event.request_id
                );
                if event.event != Event::Done {
                    return Ok(());
                }

                let mut iter = event_sess
                    .get_changes(&format!("/{}:*//.", event.module_name))?;
                while let Some(change) = iter.current() {
                    println!(
                        "  {:?} {} {}",
                        change.operation,
                        change.path,
                        change.value.as_deref().unwrap_or_default()
                    );
                    iter.next()?;
                }
                Ok(())
            },
        )
        .expect("Failed to subscribe");

    // Trigger a change.
    sess.set_item(
        "/ietf-netconf-acm:nacm/write-default",
        Some("permit"),
        EditFlags::empty(),
    )
    .expect("Failed to set item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    subscription.unsubscribe().expect("Failed to unsubscribe");
}
