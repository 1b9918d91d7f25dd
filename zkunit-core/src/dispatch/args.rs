//! 派发参数（DispatchArgs）
//!
//! 框架的 send/echo/post 入口接受多种参数形态，这里用带标签的联合类型
//! 显式列出合法形态，并为目标、名称、载荷各给出一条解析规则：
//!
//! | 形态         | 目标            | 名称        | 载荷        |
//! |--------------|-----------------|-------------|-------------|
//! | `FromEvent`  | 事件的目标      | 事件名      | 事件载荷    |
//! | `FromTriple` | `target`        | `name`      | `data`      |
//! | `FromPair`   | 显式的 `target` | 事件名      | 事件载荷    |
//!
//! 载荷缺省为 `Null`，事件名永远不会被误当作载荷。
//!
use crate::component::Component;
use crate::error::{CoreError, CoreResult as Result};
use crate::event::Event;
use serde_json::Value;
use std::fmt;

#[derive(Clone, Debug)]
pub enum DispatchArgs {
    /// 已构造好的事件
    FromEvent(Event),
    /// `(name, target, data)`
    FromTriple {
        name: String,
        target: Option<Component>,
        data: Value,
    },
    /// `(target, event)`
    FromPair { target: Component, event: Event },
}

impl DispatchArgs {
    pub fn event(event: Event) -> Self {
        DispatchArgs::FromEvent(event)
    }

    pub fn triple(name: impl Into<String>, target: &Component, data: impl Into<Value>) -> Self {
        DispatchArgs::FromTriple {
            name: name.into(),
            target: Some(target.clone()),
            data: data.into(),
        }
    }

    pub fn pair(target: &Component, event: Event) -> Self {
        DispatchArgs::FromPair {
            target: target.clone(),
            event,
        }
    }

    pub fn resolve_target(&self) -> Option<&Component> {
        match self {
            DispatchArgs::FromEvent(event) => event.target(),
            DispatchArgs::FromTriple { target, .. } => target.as_ref(),
            DispatchArgs::FromPair { target, .. } => Some(target),
        }
    }

    /// 空名称视为无法解析
    pub fn resolve_name(&self) -> Option<&str> {
        let name = match self {
            DispatchArgs::FromEvent(event) | DispatchArgs::FromPair { event, .. } => event.name(),
            DispatchArgs::FromTriple { name, .. } => name.as_str(),
        };
        (!name.is_empty()).then_some(name)
    }

    pub fn resolve_data(&self) -> &Value {
        match self {
            DispatchArgs::FromEvent(event) | DispatchArgs::FromPair { event, .. } => event.data(),
            DispatchArgs::FromTriple { data, .. } => data,
        }
    }

    /// 解析出 `(name, target, data)` 并构造事件
    pub fn resolve(&self) -> Result<Event> {
        self.resolve_with_target().map(|(_, event)| event)
    }

    /// 同 `resolve`，另外返回解析出的目标
    pub(crate) fn resolve_with_target(&self) -> Result<(Component, Event)> {
        let target = self
            .resolve_target()
            .ok_or_else(|| CoreError::UnresolvableTarget {
                args: self.to_string(),
            })?;
        let name = self
            .resolve_name()
            .ok_or_else(|| CoreError::UnresolvableName {
                args: self.to_string(),
            })?;

        let data = self.resolve_data().clone();
        let event = Event::from_parts(name.to_string(), target.clone(), data);
        Ok((target.clone(), event))
    }
}

impl fmt::Display for DispatchArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchArgs::FromEvent(event) => write!(f, "({event})"),
            DispatchArgs::FromTriple { name, target, data } => {
                let target = target.as_ref().map_or_else(|| "null".to_string(), Component::label);
                write!(f, "({name:?}, {target}, {data})")
            }
            DispatchArgs::FromPair { target, event } => write!(f, "({}, {event})", target.label()),
        }
    }
}

impl From<Event> for DispatchArgs {
    fn from(event: Event) -> Self {
        DispatchArgs::FromEvent(event)
    }
}

impl From<&Event> for DispatchArgs {
    fn from(event: &Event) -> Self {
        DispatchArgs::FromEvent(event.clone())
    }
}

impl From<(&Component, Event)> for DispatchArgs {
    fn from((target, event): (&Component, Event)) -> Self {
        DispatchArgs::pair(target, event)
    }
}

impl<V> From<(&str, &Component, V)> for DispatchArgs
where
    V: Into<Value>,
{
    fn from((name, target, data): (&str, &Component, V)) -> Self {
        DispatchArgs::triple(name, target, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::names::ON_CLICK;
    use serde_json::json;

    #[test]
    fn from_event_takes_everything_from_the_event() {
        let button = Component::new("button");
        let args = DispatchArgs::from(Event::with_data(ON_CLICK, &button, "x"));

        assert!(args.resolve_target().unwrap().ptr_eq(&button));
        assert_eq!(args.resolve_name(), Some(ON_CLICK));
        assert_eq!(args.resolve_data(), &json!("x"));
    }

    #[test]
    fn from_triple_uses_positional_values() {
        let button = Component::new("button");
        let args = DispatchArgs::from((ON_CLICK, &button, json!({"n": 1})));

        assert!(args.resolve_target().unwrap().ptr_eq(&button));
        assert_eq!(args.resolve_name(), Some(ON_CLICK));
        assert_eq!(args.resolve_data()["n"], 1);
    }

    #[test]
    fn from_triple_with_null_data_does_not_fall_back_to_name() {
        let button = Component::new("button");
        let args = DispatchArgs::triple(ON_CLICK, &button, Value::Null);
        assert!(args.resolve_data().is_null());
    }

    #[test]
    fn from_pair_prefers_explicit_target_and_event_payload() {
        let outer = Component::new("window");
        let inner = Component::new("button");
        let args = DispatchArgs::from((&outer, Event::with_data(ON_CLICK, &inner, 7)));

        assert!(args.resolve_target().unwrap().ptr_eq(&outer));
        assert_eq!(args.resolve_name(), Some(ON_CLICK));
        assert_eq!(args.resolve_data(), &json!(7));
    }

    #[test]
    fn resolve_fails_without_target() {
        let args = DispatchArgs::from(Event::detached(ON_CLICK, Value::Null));
        let err = args.resolve().unwrap_err();
        match err {
            CoreError::UnresolvableTarget { args } => assert!(args.contains("onClick")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn resolve_fails_for_triple_without_target() {
        let args = DispatchArgs::FromTriple {
            name: ON_CLICK.to_string(),
            target: None,
            data: json!("x"),
        };
        assert!(args.resolve_target().is_none());
        match args.resolve().unwrap_err() {
            CoreError::UnresolvableTarget { args } => {
                assert_eq!(args, r#"("onClick", null, "x")"#)
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn resolve_fails_with_empty_name() {
        let button = Component::new("button");
        let err = DispatchArgs::triple("", &button, 1).resolve().unwrap_err();
        assert!(matches!(err, CoreError::UnresolvableName { .. }));
    }

    #[test]
    fn display_lists_the_call_shape() {
        let button = Component::new("button").with_id("ok");
        let args = DispatchArgs::triple(ON_CLICK, &button, "hi");
        assert_eq!(args.to_string(), r#"("onClick", <button#ok>, "hi")"#);
    }
}
