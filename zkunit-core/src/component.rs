//! 组件（Component）模型
//!
//! 脱离真实 UI 环境的最小组件树：
//! - 组件种类（`kind`）与可选的原生 HTML 标签（`tag`）；
//! - 有序子组件列表；
//! - 自由属性（style / sclass / stubonly 等）；
//! - 按事件名划分的监听器注册表。
//!
//! `Component` 是共享句柄，克隆开销很小，相等性按引用身份判断。
//! 内部锁只在读写字段的瞬间持有，调用监听器之前已经释放。
//!
//! 组件持有自己的监听器，监听器若再捕获组件的强句柄就会形成 `Arc` 环，
//! 整棵子树永远不会释放。监听器应通过 `Event::target()` 读取目标，
//! 或只捕获 `Component::downgrade()` 得到的 `WeakComponent`。
//!
use crate::eventing::{ListenerRef, ListenerRegistry};
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::{Arc, Weak};

/// 原生 HTML 组件的种类名
pub const NATIVE_KIND: &str = "native";

const STYLE: &str = "style";
const SCLASS: &str = "sclass";
const STUBONLY: &str = "stubonly";

#[derive(Default)]
struct Inner {
    kind: String,
    id: Option<String>,
    tag: Option<String>,
    attrs: BTreeMap<String, Value>,
    children: Vec<Component>,
    listeners: HashMap<String, ListenerRegistry>,
}

#[derive(Clone)]
pub struct Component(Arc<RwLock<Inner>>);

impl Component {
    pub fn new(kind: impl Into<String>) -> Self {
        Self(Arc::new(RwLock::new(Inner {
            kind: kind.into(),
            ..Default::default()
        })))
    }

    /// 原生 HTML 组件，例如 `Component::native("div")`
    pub fn native(tag: impl Into<String>) -> Self {
        let c = Self::new(NATIVE_KIND);
        c.0.write().tag = Some(tag.into());
        c
    }

    pub fn with_id(self, id: impl Into<String>) -> Self {
        self.0.write().id = Some(id.into());
        self
    }

    pub fn with_attr(self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn kind(&self) -> String {
        self.0.read().kind.clone()
    }

    pub fn is_kind(&self, kind: &str) -> bool {
        self.0.read().kind == kind
    }

    pub fn id(&self) -> Option<String> {
        self.0.read().id.clone()
    }

    pub fn tag(&self) -> Option<String> {
        self.0.read().tag.clone()
    }

    pub fn is_native(&self) -> bool {
        self.is_kind(NATIVE_KIND)
    }

    /// 弱句柄，供监听器捕获而不延长组件寿命
    pub fn downgrade(&self) -> WeakComponent {
        WeakComponent(Arc::downgrade(&self.0))
    }

    /// 引用身份比较
    pub fn ptr_eq(&self, other: &Component) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// 用于日志与断言信息，例如 `<button#ok>`、`<native:div>`
    pub fn label(&self) -> String {
        let inner = self.0.read();
        let mut s = format!("<{}", inner.kind);
        if let Some(tag) = &inner.tag {
            s.push(':');
            s.push_str(tag);
        }
        if let Some(id) = &inner.id {
            s.push('#');
            s.push_str(id);
        }
        s.push('>');
        s
    }

    // --- 子组件 ---

    pub fn append_child(&self, child: Component) {
        self.0.write().children.push(child);
    }

    pub fn remove_child(&self, child: &Component) -> bool {
        let mut inner = self.0.write();
        match inner.children.iter().position(|c| c.ptr_eq(child)) {
            Some(idx) => {
                inner.children.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn clear_children(&self) {
        self.0.write().children.clear();
    }

    pub fn children(&self) -> Vec<Component> {
        self.0.read().children.clone()
    }

    pub fn child(&self, index: usize) -> Option<Component> {
        self.0.read().children.get(index).cloned()
    }

    pub fn child_count(&self) -> usize {
        self.0.read().children.len()
    }

    pub fn first_child(&self) -> Option<Component> {
        self.child(0)
    }

    // --- 属性 ---

    pub fn attr(&self, name: &str) -> Option<Value> {
        self.0.read().attrs.get(name).cloned()
    }

    pub fn set_attr(&self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.write().attrs.insert(name.into(), value.into());
    }

    pub fn remove_attr(&self, name: &str) -> Option<Value> {
        self.0.write().attrs.remove(name)
    }

    pub fn style(&self) -> Option<String> {
        self.string_attr(STYLE)
    }

    pub fn set_style(&self, style: impl Into<String>) {
        self.set_attr(STYLE, style.into());
    }

    pub fn sclass(&self) -> Option<String> {
        self.string_attr(SCLASS)
    }

    pub fn set_sclass(&self, sclass: impl Into<String>) {
        self.set_attr(SCLASS, sclass.into());
    }

    pub fn stubonly(&self) -> bool {
        matches!(self.attr(STUBONLY), Some(Value::Bool(true)))
    }

    pub fn set_stubonly(&self, stubonly: bool) {
        self.set_attr(STUBONLY, stubonly);
    }

    fn string_attr(&self, name: &str) -> Option<String> {
        match self.attr(name) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    // --- 监听器 ---

    /// 注册监听器；同一监听器重复注册返回 `false`
    pub fn add_event_listener(&self, event_name: impl Into<String>, listener: ListenerRef) -> bool {
        self.0
            .write()
            .listeners
            .entry(event_name.into())
            .or_default()
            .insert(listener, None)
    }

    pub fn remove_event_listener(&self, event_name: &str, listener: &ListenerRef) -> bool {
        let mut inner = self.0.write();
        let Some(reg) = inner.listeners.get_mut(event_name) else {
            return false;
        };
        let removed = reg.remove(listener);
        if reg.is_empty() {
            inner.listeners.remove(event_name);
        }
        removed
    }

    /// 按注册顺序返回监听器（快照）
    pub fn event_listeners(&self, event_name: &str) -> Vec<ListenerRef> {
        self.0
            .read()
            .listeners
            .get(event_name)
            .map(ListenerRegistry::handlers)
            .unwrap_or_default()
    }

    pub fn is_listening(&self, event_name: &str) -> bool {
        self.0
            .read()
            .listeners
            .get(event_name)
            .is_some_and(|reg| !reg.is_empty())
    }
}

/// 不持有所有权的组件句柄
#[derive(Clone, Default)]
pub struct WeakComponent(Weak<RwLock<Inner>>);

impl WeakComponent {
    /// 组件已释放时返回 `None`
    pub fn upgrade(&self) -> Option<Component> {
        self.0.upgrade().map(Component)
    }
}

impl fmt::Debug for WeakComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.upgrade() {
            Some(c) => write!(f, "(weak) {}", c.label()),
            None => f.write_str("(weak) <dropped>"),
        }
    }
}

impl PartialEq for Component {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Component {}

impl fmt::Debug for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())?;
        let n = self.child_count();
        if n > 0 {
            write!(f, "[{n} children]")?;
        }
        Ok(())
    }
}
