use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use zkunit_core::eventing::QueueScope;
use zkunit_core::{Component, Event, listener};
use zkunit_harness::{ZkTest, zk_test};

fn random_id() -> String {
    Uuid::new_v4().to_string()
}

#[zk_test]
fn lookup_returns_a_queue(zk: &mut ZkTest) {
    let id = random_id();
    let queue = zk.queues().lookup(&id);
    assert_eq!(queue.name(), id);
}

#[zk_test]
fn queue_is_processed_synchronously(zk: &mut ZkTest) {
    let hits = Arc::new(AtomicUsize::new(0));
    let queue = zk.queues().lookup(&random_id());
    {
        let hits = hits.clone();
        queue.subscribe(listener(move |_e: &Event| {
            hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }));
    }

    queue.publish(&Event::detached("onMessage", "hello")).unwrap();

    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[zk_test]
fn unknown_queue_does_not_exist(zk: &mut ZkTest) {
    assert!(!zk.queues().exists(&random_id()));
}

#[zk_test]
fn known_queue_exists(zk: &mut ZkTest) {
    let id = random_id();
    zk.queues().lookup(&id);
    assert!(zk.queues().exists(&id));
}

#[zk_test]
fn removed_queue_does_not_exist(zk: &mut ZkTest) {
    let id = random_id();
    zk.queues().lookup(&id);
    assert!(zk.queues().remove(&id));
    assert!(!zk.queues().exists(&id));
}

#[zk_test]
fn removed_queue_is_recreated_fresh(zk: &mut ZkTest) {
    let id = random_id();
    let before = zk.queues().lookup(&id);
    zk.queues().remove_in(&id, QueueScope::Session);

    let after = zk.queues().lookup_in(&id, QueueScope::Session, true);
    assert!(!Arc::ptr_eq(&before, &after));
}

#[zk_test]
fn queue_state_does_not_survive_reset(zk: &mut ZkTest) {
    let queue = zk.queues().lookup("notifications");
    queue.subscribe(listener(|_e: &Event| Ok(())));
    assert_eq!(queue.subscriber_count(), 1);

    zk.reset();

    assert!(!zk.queues().exists("notifications"));
    assert_eq!(zk.queues().lookup("notifications").subscriber_count(), 0);
}

#[test]
fn separate_fixtures_are_isolated() {
    let first = ZkTest::setup();
    first.queues().lookup("notifications");

    let second = ZkTest::setup();
    assert!(!second.queues().exists("notifications"));
}

#[zk_test]
fn identical_sequences_give_identical_deliveries(zk: &mut ZkTest) {
    fn run(zk: &ZkTest) -> Vec<String> {
        let log = Arc::new(Mutex::new(Vec::new()));
        let queue = zk.queues().lookup("audit");
        for tag in ["a", "b", "c"] {
            let log = log.clone();
            let cb_log = log.clone();
            queue.subscribe_with_callback(
                listener(move |e: &Event| {
                    log.lock().unwrap().push(format!("{tag}:{}", e.name()));
                    Ok(())
                }),
                listener(move |_e: &Event| {
                    cb_log.lock().unwrap().push(format!("{tag}:done"));
                    Ok(())
                }),
            );
        }
        let source = Component::new("window");
        queue.publish(&Event::new("onSave", &source)).unwrap();
        queue.publish(&Event::new("onClose", &source)).unwrap();
        let out = log.lock().unwrap().clone();
        out
    }

    let first = run(zk);
    zk.reset();
    let second = run(zk);

    assert_eq!(first, second);
    assert_eq!(
        &first[..6],
        &["a:onSave", "a:done", "b:onSave", "b:done", "c:onSave", "c:done"]
    );
}
