mod common;

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;
use sysrepo::data::{DataFormat, DataPrinterFlags};
use sysrepo::{
    Datastore, EditFlags, ErrorCode, GetFlags, MovePosition, Session, Value,
};

use common::{connect, serialize};

static WRITE_DEFAULT: &str = "/ietf-netconf-acm:nacm/write-default";
static EXEC_DEFAULT: &str = "/ietf-netconf-acm:nacm/exec-default";
static RULE_LIST_A: &str =
    "/ietf-netconf-acm:nacm/rule-list[name='sysrepo-rs-a']";
static RULE_LIST_B: &str =
    "/ietf-netconf-acm:nacm/rule-list[name='sysrepo-rs-b']";
static MISSING_GROUP: &str =
    "/ietf-netconf-acm:nacm/groups/group[name='sysrepo-rs-missing']/name";

fn reset(sess: &Session<'_>, path: &str) {
    sess.discard_changes(None).expect("Failed to discard changes");
    sess.delete_item(path, EditFlags::empty())
        .expect("Failed to delete item");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}

#[test]
fn session_close_runs_cleanup_in_reverse_order() {
    let _guard = serialize();
    let conn = connect();
    let mut sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let order = Rc::new(RefCell::new(Vec::new()));

    for i in 1..=3 {
        let order = order.clone();
        sess.add_cleanup(move || order.borrow_mut().push(i));
    }

    sess.close().expect("Failed to stop session");
    assert_eq!(*order.borrow(), vec![3, 2, 1]);
    assert!(sess.is_closed());

    // Closing again runs nothing.
    assert_eq!(sess.close(), Ok(()));
    assert_eq!(*order.borrow(), vec![3, 2, 1]);
}

#[test]
fn session_switch_datastore() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    for ds in [
        Datastore::Startup,
        Datastore::Candidate,
        Datastore::Operational,
        Datastore::FactoryDefault,
        Datastore::Running,
    ] {
        sess.switch_datastore(ds)
            .expect("Failed to switch datastore");
        assert_eq!(sess.active_datastore(), ds);
    }
}

#[test]
fn session_set_get_delete_item() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    sess.set_item(WRITE_DEFAULT, Some("permit"), EditFlags::empty())
        .expect("Failed to set item");
    assert!(sess.has_changes());
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
    assert!(!sess.has_changes());

    assert_eq!(sess.get_item(WRITE_DEFAULT), Ok("permit".to_owned()));
    assert_eq!(
        sess.get_value(WRITE_DEFAULT, Duration::ZERO),
        Ok(Value::Enum("permit".to_owned()))
    );

    reset(&sess, WRITE_DEFAULT);
}

#[test]
fn session_get_item_not_found() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    let error = sess
        .get_item(MISSING_GROUP)
        .expect_err("Missing node returned a value");
    assert_eq!(error.errcode, ErrorCode::NotFound);
    assert!(error.msg.contains(MISSING_GROUP));
    // The message sysrepo stored on the session is attached.
    assert!(error.detail.map_or(false, |detail| !detail.is_empty()));
    assert!(!sess.is_closed());
}

#[test]
fn session_set_item_error_messages() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");
    let path = "/ietf-netconf-acm:nacm/sysrepo-rs-unknown";

    let without_value = sess
        .set_item(path, None, EditFlags::empty())
        .expect_err("Unknown node accepted");
    let empty_value = sess
        .set_item(path, Some(""), EditFlags::empty())
        .expect_err("Unknown node accepted");

    assert_eq!(without_value.msg, format!("Couldn't set '{}'", path));
    assert_eq!(empty_value.msg, format!("Couldn't set '{}' to ''", path));
    assert_ne!(without_value.msg, empty_value.msg);
}

#[test]
fn session_discard_changes() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    sess.set_item(EXEC_DEFAULT, Some("deny"), EditFlags::empty())
        .expect("Failed to set item");
    assert!(sess.has_changes());
    sess.discard_changes(Some(EXEC_DEFAULT))
        .expect("Failed to discard changes");
    assert!(!sess.has_changes());

    sess.set_item(EXEC_DEFAULT, Some("deny"), EditFlags::empty())
        .expect("Failed to set item");
    sess.discard_changes(None)
        .expect("Failed to discard changes");
    assert!(!sess.has_changes());
}

#[test]
fn session_move_item() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    // Relative positions need the keys of the anchor instance.
    let error = sess
        .move_item(
            RULE_LIST_B,
            MovePosition::Before,
            None,
            None,
            EditFlags::empty(),
        )
        .expect_err("Relative move without keys accepted");
    assert_eq!(error.errcode, ErrorCode::InvalArg);

    sess.set_item(RULE_LIST_A, None, EditFlags::empty())
        .expect("Failed to create list entry");
    sess.set_item(RULE_LIST_B, None, EditFlags::empty())
        .expect("Failed to create list entry");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    sess.move_item(
        RULE_LIST_B,
        MovePosition::Before,
        Some("[name='sysrepo-rs-a']"),
        None,
        EditFlags::empty(),
    )
    .expect("Failed to move list entry");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    let dtree = sess
        .get_data(
            "/ietf-netconf-acm:nacm/rule-list",
            0,
            Duration::ZERO,
            GetFlags::empty(),
        )
        .expect("Failed to get data");
    let order = dtree
        .traverse()
        .filter(|dnode| dnode.name() == "rule-list")
        .map(|dnode| dnode.path())
        .filter(|path| path.contains("sysrepo-rs-"))
        .collect::<Vec<_>>();
    assert_eq!(order, vec![RULE_LIST_B.to_owned(), RULE_LIST_A.to_owned()]);

    sess.move_item(
        RULE_LIST_A,
        MovePosition::First,
        None,
        None,
        EditFlags::empty(),
    )
    .expect("Failed to move list entry");
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");

    sess.delete_item(RULE_LIST_A, EditFlags::empty())
        .expect("Failed to delete list entry");
    reset(&sess, RULE_LIST_B);
}

#[test]
fn session_get_data() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Operational)
        .expect("Failed to start session");

    let dtree = sess
        .get_data(
            "/ietf-yang-library:yang-library",
            0,
            Duration::ZERO,
            GetFlags::empty(),
        )
        .expect("Failed to get data");
    assert!(!dtree.is_empty());
    let output = dtree
        .print_string(DataFormat::JSON, DataPrinterFlags::empty())
        .expect("Failed to print data tree");
    assert!(output.contains("module-set"));
    assert!(dtree
        .find_path("/ietf-yang-library:yang-library/content-id")
        .and_then(|dnode| dnode.value_canonical())
        .is_some());
}

#[test]
fn session_get_data_empty() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    let dtree = sess
        .get_data(
            "/ietf-netconf-acm:nacm/groups/group[name='sysrepo-rs-missing']",
            0,
            Duration::ZERO,
            GetFlags::empty(),
        )
        .expect("Failed to get data");
    assert!(dtree.is_empty());
    assert!(dtree.reference().is_none());
    assert_eq!(
        dtree.print_string(DataFormat::XML, DataPrinterFlags::empty()),
        Ok(String::new())
    );
}

#[test]
fn session_originator_name() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    assert_eq!(sess.originator_name(), "");
    sess.set_originator_name("netconf")
        .expect("Failed to set originator name");
    assert_eq!(sess.originator_name(), "netconf");
}

#[test]
fn session_nacm_user() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    assert_eq!(sess.nacm_user(), None);
    sess.set_nacm_user("alice")
        .expect("Failed to set NACM user");
    assert_eq!(sess.nacm_user(), Some("alice".to_owned()));
}

#[test]
fn session_copy_config() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Candidate)
        .expect("Failed to start session");

    sess.copy_config(
        Datastore::Running,
        Some("ietf-netconf-acm"),
        Duration::ZERO,
    )
    .expect("Failed to copy config");
}

#[test]
fn session_drop_foreign_operational_content() {
    let _guard = serialize();
    let conn = connect();
    let sess = conn
        .start_session(Datastore::Operational)
        .expect("Failed to start session");

    sess.drop_foreign_operational_content(Some("/ietf-netconf-acm:nacm"))
        .expect("Failed to discard operational content");
    sess.drop_foreign_operational_content(None)
        .expect("Failed to discard operational content");
}
