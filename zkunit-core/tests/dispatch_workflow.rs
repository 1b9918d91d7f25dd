use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;
use zkunit_core::event::names::{ON_CHANGE, ON_CLICK};
use zkunit_core::{Component, CoreError, DispatchArgs, Event, EventQueues, Events, listener};

fn random_id() -> String {
    Uuid::new_v4().to_string()
}

#[test]
fn queue_fan_out_with_callbacks_is_strictly_paired() {
    let queues = EventQueues::new();
    let queue = queues.lookup(&random_id());
    let log = Arc::new(Mutex::new(Vec::new()));

    for i in 1..=3 {
        let h_log = log.clone();
        let c_log = log.clone();
        queue.subscribe_with_callback(
            listener(move |_e: &Event| {
                h_log.lock().unwrap().push(format!("h{i}"));
                Ok(())
            }),
            listener(move |_e: &Event| {
                c_log.lock().unwrap().push(format!("c{i}"));
                Ok(())
            }),
        );
    }

    queue.publish(&Event::detached("onTick", Value::Null)).unwrap();

    assert_eq!(*log.lock().unwrap(), vec!["h1", "c1", "h2", "c2", "h3", "c3"]);
}

#[test]
fn publish_error_surfaces_queue_and_cause() {
    let queues = EventQueues::new();
    let name = random_id();
    let queue = queues.lookup(&name);
    queue.subscribe(listener(|_e: &Event| Err(anyhow::anyhow!("listener exploded"))));

    let err = queue.publish(&Event::detached("onTick", Value::Null)).unwrap_err();

    match err {
        CoreError::Publish { queue, cause, .. } => {
            assert_eq!(queue, name);
            assert_eq!(cause.to_string(), "listener exploded");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn component_listeners_only_see_their_event_name() {
    let events = Events::new();
    let textbox = Component::new("textbox");
    let clicks = Arc::new(AtomicUsize::new(0));
    let changes = Arc::new(Mutex::new(Vec::new()));
    {
        let clicks = clicks.clone();
        textbox.add_event_listener(
            ON_CLICK,
            listener(move |_e: &Event| {
                clicks.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );
    }
    {
        let changes = changes.clone();
        textbox.add_event_listener(
            ON_CHANGE,
            listener(move |e: &Event| {
                changes.lock().unwrap().push(e.data()["value"].clone());
                Ok(())
            }),
        );
    }

    events
        .send_event(DispatchArgs::triple(ON_CHANGE, &textbox, json!({"value": "abc"})))
        .unwrap();
    events
        .post_event(DispatchArgs::triple(ON_CHANGE, &textbox, json!({"value": "abcd"})))
        .unwrap();

    assert_eq!(clicks.load(Ordering::SeqCst), 0);
    assert_eq!(*changes.lock().unwrap(), vec![json!("abc"), json!("abcd")]);
}

#[test]
fn dispatch_collects_every_failure_and_keeps_going() {
    let events = Events::new();
    let button = Component::new("button").with_id("danger");
    let survivors = Arc::new(AtomicUsize::new(0));
    for i in 0..4 {
        let survivors = survivors.clone();
        button.add_event_listener(
            ON_CLICK,
            listener(move |_e: &Event| {
                if i % 2 == 0 {
                    anyhow::bail!("listener {i} failed");
                }
                survivors.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }),
        );
    }

    let err = events.send_event(Event::new(ON_CLICK, &button)).unwrap_err();

    assert_eq!(survivors.load(Ordering::SeqCst), 2);
    match err {
        CoreError::ListenerFailures {
            target, failures, ..
        } => {
            assert_eq!(target, "<button#danger>");
            let positions: Vec<usize> = failures.iter().map(|f| f.position).collect();
            assert_eq!(positions, vec![0, 2]);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    // 失败的派发同样会被记录
    assert_eq!(events.journal().len(), 1);
}

#[test]
fn removed_listener_is_no_longer_invoked() {
    let events = Events::new();
    let button = Component::new("button");
    let hits = Arc::new(AtomicUsize::new(0));
    let l = {
        let hits = hits.clone();
        listener(move |_e: &Event| {
            hits.fetch_add(1, Ordering::SeqCst);
            Ok(())
        })
    };
    button.add_event_listener(ON_CLICK, l.clone());
    events.send_event(Event::new(ON_CLICK, &button)).unwrap();

    assert!(button.remove_event_listener(ON_CLICK, &l));
    assert_eq!(events.send_event(Event::new(ON_CLICK, &button)).unwrap(), 0);
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}
