//! 监听器（EventListener）与监听器注册表（ListenerRegistry）
//!
//! 注册表以 handler 的引用身份（`Arc` 指针地址）去重，
//! 同一 handler 重复注册仅替换其 callback，位置保持不变。
//!
use crate::event::Event;
use std::fmt;
use std::sync::Arc;

/// 事件监听器：同步处理一个事件
pub trait EventListener: Send + Sync {
    fn on_event(&self, event: &Event) -> anyhow::Result<()>;
}

impl<F> EventListener for F
where
    F: Fn(&Event) -> anyhow::Result<()> + Send + Sync,
{
    fn on_event(&self, event: &Event) -> anyhow::Result<()> {
        self(event)
    }
}

/// 监听器句柄，克隆后仍指向同一个监听器
pub type ListenerRef = Arc<dyn EventListener>;

/// 将闭包包装为监听器句柄
pub fn listener<F>(f: F) -> ListenerRef
where
    F: Fn(&Event) -> anyhow::Result<()> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// 按引用身份比较两个监听器
pub fn same_listener(a: &ListenerRef, b: &ListenerRef) -> bool {
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}

/// 一条注册：handler 与可选的 callback
#[derive(Clone)]
pub struct Registration {
    pub handler: ListenerRef,
    pub callback: Option<ListenerRef>,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("handler", &Arc::as_ptr(&self.handler))
            .field("has_callback", &self.callback.is_some())
            .finish()
    }
}

/// 监听器注册表，迭代顺序即注册顺序
#[derive(Clone, Debug, Default)]
pub struct ListenerRegistry {
    entries: Vec<Registration>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 注册 handler；已存在时替换 callback 并返回 `false`
    pub fn insert(&mut self, handler: ListenerRef, callback: Option<ListenerRef>) -> bool {
        match self.position(&handler) {
            Some(idx) => {
                self.entries[idx].callback = callback;
                false
            }
            None => {
                self.entries.push(Registration { handler, callback });
                true
            }
        }
    }

    /// 移除 handler，返回是否确实移除
    pub fn remove(&mut self, handler: &ListenerRef) -> bool {
        match self.position(handler) {
            Some(idx) => {
                self.entries.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn contains(&self, handler: &ListenerRef) -> bool {
        self.position(handler).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Registration> {
        self.entries.iter()
    }

    /// 复制当前注册列表，投递期间不再持有锁
    pub fn snapshot(&self) -> Vec<Registration> {
        self.entries.clone()
    }

    pub fn handlers(&self) -> Vec<ListenerRef> {
        self.entries.iter().map(|r| r.handler.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    fn position(&self, handler: &ListenerRef) -> Option<usize> {
        self.entries
            .iter()
            .position(|r| same_listener(&r.handler, handler))
    }
}
