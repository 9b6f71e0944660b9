use std::time::Duration;
use sysrepo::data::{DataFormat, DataPrinterFlags};
use sysrepo::{Connection, ConnectionFlags, Datastore, GetFlags};

fn main() {
    env_logger::init();

    let conn = Connection::connect(ConnectionFlags::empty())
        .expect("Failed to connect to sysrepo");
    let sess = conn
        .start_session(Datastore::Operational)
        .expect("Failed to start session");

    // Retrieve a subtree and print it.
    println!("Example: get data from sysrepo");
    let dtree = sess
        .get_data(
            "/ietf-system:system-state/ntp/sources",
            0,
            Duration::ZERO,
            GetFlags::empty(),
        )
        .expect("Failed to get data");
    let output = dtree
        .print_string(DataFormat::JSON, DataPrinterFlags::empty())
        .expect("Failed to print data tree");
    print!("{}", output);
    println!("=============================");

    // Walk the list instances of the subtree.
    let sources_path = "/ietf-system:system-state/ntp/sources";
    if let Some(sources) = dtree.find_path(sources_path) {
        for source in sources.children() {
            for dnode in source.children() {
                println!(
                    "{}:{}",
                    dnode.name(),
                    dnode.value_canonical().unwrap_or_default()
                );
            }
            println!("--------------------------");
        }
    }
    println!("=============================");

    // Retrieve a single leaf.
    println!("Example: get item from sysrepo");
    match sess.get_item("/ietf-system:system/hostname") {
        Ok(hostname) => println!("Hostname: {}", hostname),
        Err(error) => println!("Error getting hostname: {}", error),
    }
}
