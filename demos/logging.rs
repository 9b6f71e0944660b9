use log::LevelFilter;
use sysrepo::logging;
use sysrepo::{Connection, ConnectionFlags, Datastore, LogLevel};

fn main() {
    env_logger::Builder::new()
        .filter_level(LevelFilter::max())
        .init();
    logging::set_stderr_level(LogLevel::None);
    logging::init_default_logger().unwrap();

    // When connecting and failing a request, we should see some logs
    let conn = Connection::connect(ConnectionFlags::empty()).unwrap();
    let sess = conn.start_session(Datastore::Running).unwrap();
    let _ = sess.get_item("/ietf-netconf-acm:nacm/no-such-node");
}
