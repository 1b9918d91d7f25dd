//! 同步事件队列（SynchronousEventQueue）
//!
//! 发布即投递：`publish` 在返回前按订阅顺序依次调用每个 handler，
//! 若该订阅带有 callback，则紧接着调用 callback（`h1, c1, h2, c2, ...`）。
//!
//! 失败策略为“首错即止”：任一 handler/callback 返回错误时立即中止，
//! 其后的订阅者不再被调用，错误包装为 `CoreError::Publish` 抛出。
//!
//! 注意：
//! - `subscribe_async` 的异步标志仅为接口兼容，投递始终同步；
//! - `unsubscribe` 无论是否存在订阅都返回 `true`；
//! - `close` 不做任何事，`is_closed` 恒为 `false`。
//!
use super::listener::{ListenerRef, ListenerRegistry};
use crate::error::{CoreError, CoreResult as Result};
use crate::event::Event;
use parking_lot::RwLock;
use tracing::{debug, warn};

pub struct SynchronousEventQueue {
    name: String,
    subscriptions: RwLock<ListenerRegistry>,
}

impl SynchronousEventQueue {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subscriptions: RwLock::new(ListenerRegistry::new()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// 同步发布事件
    pub fn publish(&self, event: &Event) -> Result<()> {
        // 先取快照再投递，监听器内可重入地订阅/退订/发布
        let subscriptions = self.subscriptions.read().snapshot();
        debug!(
            queue = %self.name,
            event = %event.name(),
            subscribers = subscriptions.len(),
            "publish"
        );

        for sub in subscriptions {
            sub.handler
                .on_event(event)
                .and_then(|_| match &sub.callback {
                    Some(callback) => callback.on_event(event),
                    None => Ok(()),
                })
                .map_err(|e| {
                    warn!(queue = %self.name, event = %event.name(), error = %e, "publish aborted");
                    CoreError::publish(&self.name, event.name(), e)
                })?;
        }
        Ok(())
    }

    pub fn subscribe(&self, handler: ListenerRef) {
        self.subscriptions.write().insert(handler, None);
    }

    pub fn subscribe_with_callback(&self, handler: ListenerRef, callback: ListenerRef) {
        self.subscriptions.write().insert(handler, Some(callback));
    }

    /// `is_async` 被忽略，投递始终同步
    pub fn subscribe_async(&self, handler: ListenerRef, is_async: bool) {
        if is_async {
            debug!(queue = %self.name, "async subscription delivered synchronously");
        }
        self.subscribe(handler);
    }

    /// 退订；恒返回 `true`
    pub fn unsubscribe(&self, handler: &ListenerRef) -> bool {
        self.subscriptions.write().remove(handler);
        true
    }

    pub fn is_subscribed(&self, handler: &ListenerRef) -> bool {
        self.subscriptions.read().contains(handler)
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscriptions.read().len()
    }

    pub fn close(&self) {}

    pub fn is_closed(&self) -> bool {
        false
    }
}

impl std::fmt::Debug for SynchronousEventQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SynchronousEventQueue")
            .field("name", &self.name)
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}
