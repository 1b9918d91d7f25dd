//! 命名队列注册表（EventQueues）
//!
//! 以字符串为键保存 `SynchronousEventQueue`：
//! - `lookup`：存在则返回，不存在则创建并保存，永不返回空；
//! - `exists`：仅反映当前键集合，无副作用；
//! - `remove`：存在则删除，恒返回 `true`；
//! - `clear`：夹具在每个测试开始时重置。
//!
//! 带作用域参数的重载仅为接口兼容，作用域不参与区分。
//!
use super::queue::SynchronousEventQueue;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// 队列作用域；接受但不区分
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueScope {
    #[default]
    Desktop,
    Group,
    Session,
    Application,
}

#[derive(Default)]
pub struct EventQueues {
    queues: DashMap<String, Arc<SynchronousEventQueue>>,
}

impl EventQueues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, name: &str) -> Arc<SynchronousEventQueue> {
        self.queues
            .entry(name.to_string())
            .or_insert_with(|| {
                debug!(queue = %name, "create event queue");
                Arc::new(SynchronousEventQueue::new(name))
            })
            .clone()
    }

    /// `auto_create = false` 时同样会创建
    pub fn lookup_in(
        &self,
        name: &str,
        scope: QueueScope,
        auto_create: bool,
    ) -> Arc<SynchronousEventQueue> {
        if !auto_create {
            debug!(queue = %name, ?scope, "auto_create=false ignored");
        }
        self.lookup(name)
    }

    pub fn exists(&self, name: &str) -> bool {
        self.queues.contains_key(name)
    }

    /// 恒返回 `true`
    pub fn remove(&self, name: &str) -> bool {
        if self.queues.remove(name).is_some() {
            debug!(queue = %name, "remove event queue");
        }
        true
    }

    pub fn remove_in(&self, name: &str, _scope: QueueScope) -> bool {
        self.remove(name)
    }

    pub fn clear(&self) {
        self.queues.clear();
    }

    pub fn len(&self) -> usize {
        self.queues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queues.is_empty()
    }

    /// 当前队列名（已排序）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.queues.iter().map(|e| e.key().clone()).collect();
        names.sort_unstable();
        names
    }
}
