use zkunit_harness::{ZkTestConfig, zk_test};

fn quiet() -> ZkTestConfig {
    ZkTestConfig::builder()
        .log_filter("off")
        .record_dispatches(false)
        .build()
}

#[zk_test(config = quiet())]
fn configured(zk: &mut zkunit_harness::ZkTest) -> Result<(), String> {
    if zk.config().record_dispatches() {
        return Err("recording should be off".to_string());
    }
    Ok(())
}

#[zk_test]
#[should_panic(expected = "boom")]
fn keeps_other_attributes(_zk: &mut zkunit_harness::ZkTest) {
    panic!("boom");
}

fn main() {
    let _ = quiet();
}
