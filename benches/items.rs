use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;
use sysrepo::{
    Connection, ConnectionFlags, Datastore, EditFlags, GetFlags, Session,
};

fn rule_list_path(i: u32) -> String {
    format!("/ietf-netconf-acm:nacm/rule-list[name='bench-{}']", i)
}

fn data_generate(sess: &Session<'_>, rule_lists: u32) {
    for i in 1..=rule_lists {
        let path = rule_list_path(i);
        sess.set_item(&path, None, EditFlags::empty())
            .expect("Failed to create list entry");
        sess.set_item(
            &format!("{}/group", path),
            Some(&format!("group-{}", i)),
            EditFlags::empty(),
        )
        .expect("Failed to set leaf-list value");
    }
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}

fn data_remove(sess: &Session<'_>, rule_lists: u32) {
    for i in 1..=rule_lists {
        sess.delete_item(&rule_list_path(i), EditFlags::empty())
            .expect("Failed to delete list entry");
    }
    sess.apply_changes(Duration::ZERO)
        .expect("Failed to apply changes");
}

fn criterion_benchmark(c: &mut Criterion) {
    let rule_list_counts = [16, 64, 256, 1024];

    // Initialize connection.
    let conn = Connection::connect(ConnectionFlags::CACHE_RUNNING)
        .expect("Failed to connect to sysrepo");
    let sess = conn
        .start_session(Datastore::Running)
        .expect("Failed to start session");

    // Prepare Session.get_item() benchmark.
    c.bench_function("Session.get_item()", |b| {
        b.iter(|| {
            sess.get_item("/ietf-netconf-acm:nacm/read-default")
                .expect("Failed to get item");
        });
    });

    // Prepare Session.get_data() benchmark.
    let mut group = c.benchmark_group("Session.get_data() / rule lists");
    for count in &rule_list_counts {
        data_generate(&sess, *count);

        // Run benchmark.
        group.bench_with_input(
            BenchmarkId::from_parameter(count),
            count,
            |b, _| {
                b.iter(|| {
                    let dtree = sess
                        .get_data(
                            "/ietf-netconf-acm:nacm",
                            0,
                            Duration::ZERO,
                            GetFlags::empty(),
                        )
                        .expect("Failed to get data");
                    dtree.traverse().count()
                });
            },
        );

        data_remove(&sess, *count);
    }
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
