//! 组件树断言
//!
//! 组件模型是普通的内存对象，可以直接检查其子组件、样式与监听器。
//! 断言失败时 panic（`#[track_caller]` 指向调用处），成功时返回被检查的组件，
//! 便于链式继续断言。
//!
use zkunit_core::{Component, DispatchMode, Event, Events, ListenerRef};

#[track_caller]
pub fn assert_stubonly(component: &Component) {
    assert!(component.stubonly(), "expected {} to be stub-only", component.label());
}

// TODO: 与 style 中的某一条声明匹配即可，而非整串相等
#[track_caller]
pub fn assert_style(component: &Component, expected_style: &str) {
    assert_eq!(
        component.style().as_deref(),
        Some(expected_style),
        "style of {}",
        component.label()
    );
}

#[track_caller]
pub fn assert_style_class(component: &Component, expected_class: &str) {
    assert_eq!(
        component.sclass().as_deref(),
        Some(expected_class),
        "style class of {}",
        component.label()
    );
}

#[track_caller]
pub fn assert_has_no_children(container: &Component) {
    let children = container.children();
    assert!(children.is_empty(), "expected no children, found: {children:?}");
}

/// 返回第一个种类匹配的子组件
#[track_caller]
pub fn assert_has_child_of_kind(container: &Component, kind: &str) -> Component {
    let children = container.children();
    assert!(!children.is_empty(), "container should have at least one child");
    match children.into_iter().find(|c| c.is_kind(kind)) {
        Some(child) => child,
        None => panic!("{} doesn't contain a {kind}", container.label()),
    }
}

#[track_caller]
pub fn assert_has_no_child_of_kind(container: &Component, kind: &str) {
    if let Some(child) = container.children().iter().find(|c| c.is_kind(kind)) {
        panic!("{} contains a {kind}: {child:?}", container.label());
    }
}

#[track_caller]
pub fn assert_only_child_is_of_kind(container: &Component, kind: &str) -> Component {
    let children = container.children();
    assert_eq!(children.len(), 1, "should have one child ({children:?})");
    assert_child_is_of_kind(container, 0, kind)
}

#[track_caller]
pub fn assert_first_child_is_of_kind(container: &Component, kind: &str) -> Component {
    assert_child_is_of_kind(container, 0, kind)
}

#[track_caller]
pub fn assert_child_is_of_kind(container: &Component, index: usize, kind: &str) -> Component {
    let count = container.child_count();
    let Some(child) = container.child(index) else {
        panic!("expected at least {} children, found {count}", index + 1);
    };
    assert!(
        child.is_kind(kind),
        "child {index} is of wrong kind: expected {kind}, found {}",
        child.kind()
    );
    child
}

/// 所有子组件都是 `kind`，且恰好 `expected_count` 个
#[track_caller]
pub fn assert_children_are_of_kind(
    container: &Component,
    kind: &str,
    expected_count: usize,
) -> Vec<Component> {
    let children = container.children();
    assert_eq!(
        children.len(),
        expected_count,
        "container has the incorrect number of children"
    );
    for (index, child) in children.iter().enumerate() {
        assert!(
            child.is_kind(kind),
            "child {index} is of wrong kind: expected {kind}, found {}",
            child.kind()
        );
    }
    children
}

#[track_caller]
pub fn assert_only_child_is_native(container: &Component, tag: &str) -> Component {
    let children = container.children();
    assert_eq!(children.len(), 1, "container should only have one child");
    native_with_tag(&children[0], tag);
    children[0].clone()
}

#[track_caller]
pub fn assert_children_are_native(
    container: &Component,
    tag: &str,
    expected_count: usize,
) -> Vec<Component> {
    let children = container.children();
    assert_eq!(
        children.len(),
        expected_count,
        "container has the incorrect number of children"
    );
    for child in &children {
        native_with_tag(child, tag);
    }
    children
}

#[track_caller]
fn native_with_tag(component: &Component, tag: &str) {
    assert!(
        component.is_native(),
        "not a native HTML component (got {})",
        component.kind()
    );
    assert_eq!(
        component.tag().as_deref(),
        Some(tag),
        "native HTML component is not of the type '{tag}'"
    );
}

/// 返回该事件名下第一个注册的监听器
#[track_caller]
pub fn assert_has_event_listener(component: &Component, event_name: &str) -> ListenerRef {
    match component.event_listeners(event_name).into_iter().next() {
        Some(listener) => listener,
        None => panic!(
            "expected '{event_name}' event registered on {}",
            component.label()
        ),
    }
}

#[track_caller]
pub fn assert_has_no_event_listeners(component: &Component, event_name: &str) {
    assert!(
        !component.is_listening(event_name),
        "expected no '{event_name}' event registered on {}",
        component.label()
    );
}

#[track_caller]
pub fn assert_event_sent(events: &Events, name: &str, target: &Component) -> Vec<Event> {
    assert_dispatched(events, DispatchMode::Send, name, target)
}

#[track_caller]
pub fn assert_event_posted(events: &Events, name: &str, target: &Component) -> Vec<Event> {
    assert_dispatched(events, DispatchMode::Post, name, target)
}

#[track_caller]
pub fn assert_event_echoed(events: &Events, name: &str, target: &Component) -> Vec<Event> {
    assert_dispatched(events, DispatchMode::Echo, name, target)
}

#[track_caller]
fn assert_dispatched(
    events: &Events,
    mode: DispatchMode,
    name: &str,
    target: &Component,
) -> Vec<Event> {
    let matched = events.journal().matching(mode, name, target);
    assert!(
        !matched.is_empty(),
        "expected {name} {} to {}",
        past_tense(mode),
        target.label()
    );
    matched
}

fn past_tense(mode: DispatchMode) -> &'static str {
    match mode {
        DispatchMode::Send => "sent",
        DispatchMode::Echo => "echoed",
        DispatchMode::Post => "posted",
    }
}
