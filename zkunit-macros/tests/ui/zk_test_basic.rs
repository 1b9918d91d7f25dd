use zkunit_harness::zk_test;

#[zk_test]
fn with_fixture(zk: &mut zkunit_harness::ZkTest) {
    let queue = zk.queues().lookup("chat");
    assert_eq!(queue.name(), "chat");
}

#[zk_test]
fn with_shared_borrow(zk: &zkunit_harness::ZkTest) {
    assert!(!zk.queues().exists("chat"));
}

#[zk_test]
fn without_parameters() {
    assert_eq!(1 + 1, 2);
}

fn main() {}
