mod common;

use std::sync::{Arc, Mutex};
use std::time::Duration;
use sysrepo::{
    Change, ChangeIterState, ChangeOperation, Datastore, EditFlags, Error,
    ErrorCode, Event, SubscribeFlags,
};

use common::{connect, serialize, NACM};

static READ_DEFAULT: &str = "/ietf-netconf-acm:nacm/read-default";
static WRITE_DEFAULT: &str = "/ietf-netconf-acm:nacm/write-default";
static ENABLE_EXTERNAL_GROUPS: &str =
    "/ietf-netconf-acm:nacm/enable-external-groups";

#[test]
fn changes_collected_in_change_event() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let collected: Arc<Mutex<Vec<Change>>> = Arc::default();
    let states: Arc<Mutex<Vec<ChangeIterState>>> = Arc::default();

    let subscription = {
        let collected = collected.clone();
        let states = states.clone();
        sess.subscribe_module_change(
            NACM,
            None,
            0,
            SubscribeFlags::empty(),
            move |event_sess, event| {
                if event.event != Event::Change {
                    return Ok(());
                }
                assert_eq!(event.module_name, NACM);

                let mut iter =
                    event_sess.get_changes("/ietf-netconf-acm:*//.")?;
                let mut changes = Vec::new();
                while let Some(change) = iter.current() {
                    changes.push(change.clone());
                    iter.next()?;
                }
                let mut states = states.lock().unwrap();
                states.push(iter.state());
                // Stays exhausted.
                iter.next()?;
                states.push(iter.state());
                iter.close();
                states.push(iter.state());

                collected.lock().unwrap().extend(changes);
                Ok(())
            },
        )
        .expect("Failed to subscribe")
    };

    sess.set_item(READ_DEFAULT, Some("deny"), EditFlags::empty())
        .expect("Failed to set item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    let changes = collected.lock().unwrap().clone();
    let change = changes
        .iter()
        .find(|change| change.path == READ_DEFAULT)
        .expect("Change not reported");
    assert_eq!(change.value.as_deref(), Some("deny"));
    assert!(matches!(
        change.operation,
        ChangeOperation::Created | ChangeOperation::Modified
    ));
    assert_eq!(
        *states.lock().unwrap(),
        vec![
            ChangeIterState::Exhausted,
            ChangeIterState::Exhausted,
            ChangeIterState::Closed
        ]
    );

    subscription.unsubscribe().expect("Failed to unsubscribe");
    sess.delete_item(READ_DEFAULT, EditFlags::empty())
        .expect("Failed to delete item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}

#[test]
fn changes_collect_changes() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let collected: Arc<Mutex<Vec<Change>>> = Arc::default();

    let _subscription = {
        let collected = collected.clone();
        sess.subscribe_module_change(
            NACM,
            Some(ENABLE_EXTERNAL_GROUPS),
            0,
            SubscribeFlags::DONE_ONLY,
            move |event_sess, _event| {
                let changes = event_sess
                    .get_changes(&format!("{}//.", ENABLE_EXTERNAL_GROUPS))?
                    .collect_changes()?;
                collected.lock().unwrap().extend(changes);
                Ok(())
            },
        )
        .expect("Failed to subscribe")
    };

    sess.set_item(ENABLE_EXTERNAL_GROUPS, Some("false"), EditFlags::empty())
        .expect("Failed to set item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    let changes = collected.lock().unwrap().clone();
    assert_eq!(changes.len(), 1);
    assert_eq!(changes[0].path, ENABLE_EXTERNAL_GROUPS);
    assert_eq!(changes[0].value.as_deref(), Some("false"));

    sess.delete_item(ENABLE_EXTERNAL_GROUPS, EditFlags::empty())
        .expect("Failed to delete item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}

#[test]
fn changes_refused_by_callback() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    let subscription = sess
        .subscribe_module_change(
            NACM,
            None,
            0,
            SubscribeFlags::empty(),
            |_event_sess, event| match event.event {
                Event::Change => Err(Error::new(
                    ErrorCode::OperationFailed,
                    "change refused",
                )),
                _ => Ok(()),
            },
        )
        .expect("Failed to subscribe");

    sess.set_item(READ_DEFAULT, Some("deny"), EditFlags::empty())
        .expect("Failed to set item");
    let error = sess
        .apply_changes(Duration::ZERO)
        .expect_err("Refused change applied");
    assert_ne!(error.errcode, ErrorCode::Ok);

    sess.discard_changes(None)
        .expect("Failed to discard changes");
    drop(subscription);
    assert_eq!(
        sess.get_item(READ_DEFAULT).ok().as_deref(),
        Some("permit")
    );
}

#[test]
fn changes_outside_event_session() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    assert!(sess.get_changes("/ietf-netconf-acm:*//.").is_err());
}

#[test]
fn changes_none_matching() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let seen: Arc<Mutex<Vec<(bool, ChangeIterState)>>> = Arc::default();

    let subscription = {
        let seen = seen.clone();
        sess.subscribe_module_change(
            NACM,
            None,
            0,
            SubscribeFlags::empty(),
            move |event_sess, event| {
                if event.event != Event::Change {
                    return Ok(());
                }

                let iter = event_sess
                    .get_changes("/ietf-netconf-acm:nacm/groups//.")?;
                seen.lock().unwrap().push((iter.has_next(), iter.state()));
                Ok(())
            },
        )
        .expect("Failed to subscribe")
    };

    sess.set_item(READ_DEFAULT, Some("deny"), EditFlags::empty())
        .expect("Failed to set item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    assert_eq!(
        *seen.lock().unwrap(),
        vec![(false, ChangeIterState::Exhausted)]
    );

    subscription.unsubscribe().expect("Failed to unsubscribe");
    sess.delete_item(READ_DEFAULT, EditFlags::empty())
        .expect("Failed to delete item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}

#[test]
fn changes_one_step_per_change() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let transitions: Arc<Mutex<Vec<(ChangeIterState, ChangeIterState)>>> =
        Arc::default();

    let subscription = {
        let transitions = transitions.clone();
        sess.subscribe_module_change(
            NACM,
            None,
            0,
            SubscribeFlags::empty(),
            move |event_sess, event| {
                if event.event != Event::Change {
                    return Ok(());
                }

                let mut iter =
                    event_sess.get_changes("/ietf-netconf-acm:*//.")?;
                let mut transitions = transitions.lock().unwrap();
                while iter.has_next() {
                    let before = iter.state();
                    iter.next()?;
                    transitions.push((before, iter.state()));
                }
                Ok(())
            },
        )
        .expect("Failed to subscribe")
    };

    sess.set_item(READ_DEFAULT, Some("deny"), EditFlags::empty())
        .expect("Failed to set item");
    sess.set_item(WRITE_DEFAULT, Some("permit"), EditFlags::empty())
        .expect("Failed to set item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    // Two changed leaves take exactly two steps.
    assert_eq!(
        *transitions.lock().unwrap(),
        vec![
            (ChangeIterState::Active, ChangeIterState::Active),
            (ChangeIterState::Active, ChangeIterState::Exhausted),
        ]
    );

    subscription.unsubscribe().expect("Failed to unsubscribe");
    sess.delete_item(READ_DEFAULT, EditFlags::empty())
        .expect("Failed to delete item");
    sess.delete_item(WRITE_DEFAULT, EditFlags::empty())
        .expect("Failed to delete item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}
