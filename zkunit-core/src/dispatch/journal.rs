//! 派发日志（DispatchJournal）
//!
//! 记录每一次模拟派发（已解析的事件及其入口），供 `assert_event_*` 断言查询。
//!
use crate::component::Component;
use crate::event::Event;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 框架派发入口；模拟环境下三者都立即同步投递
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DispatchMode {
    Send,
    Echo,
    Post,
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Send => write!(f, "send"),
            Self::Echo => write!(f, "echo"),
            Self::Post => write!(f, "post"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DispatchRecord {
    pub mode: DispatchMode,
    pub event: Event,
}

#[derive(Default)]
pub struct DispatchJournal {
    records: RwLock<Vec<DispatchRecord>>,
}

impl DispatchJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, mode: DispatchMode, event: &Event) {
        self.records.write().push(DispatchRecord {
            mode,
            event: event.clone(),
        });
    }

    pub fn records(&self) -> Vec<DispatchRecord> {
        self.records.read().clone()
    }

    /// 按入口、事件名与目标筛选
    pub fn matching(&self, mode: DispatchMode, name: &str, target: &Component) -> Vec<Event> {
        self.records
            .read()
            .iter()
            .filter(|r| r.mode == mode && r.event.name() == name)
            .filter(|r| r.event.target().is_some_and(|t| t.ptr_eq(target)))
            .map(|r| r.event.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    pub fn clear(&self) {
        self.records.write().clear();
    }
}
