//! 事件派发模拟器（Events）
//!
//! 代替框架的 send/echo/post 入口：解析参数 → 构造事件 → 立即同步调用
//! 目标组件上该事件名下的全部监听器（按注册顺序）。
//!
//! 失败策略与 `SynchronousEventQueue` 不同：单个监听器失败只会被记录，
//! 其余监听器照常调用；全部调用结束后再以 `CoreError::ListenerFailures`
//! 汇总返回。目标上没有对应监听器时静默返回。
//!
use super::args::DispatchArgs;
use super::journal::{DispatchJournal, DispatchMode};
use crate::component::Component;
use crate::error::{CoreError, CoreResult as Result, ListenerFailure};
use crate::event::Event;
use tracing::{debug, warn};

pub struct Events {
    journal: DispatchJournal,
    record_dispatches: bool,
}

impl Default for Events {
    fn default() -> Self {
        Self {
            journal: DispatchJournal::new(),
            record_dispatches: true,
        }
    }
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    /// `record = false` 时不写派发日志
    pub fn with_recording(record: bool) -> Self {
        Self {
            record_dispatches: record,
            ..Self::default()
        }
    }

    /// 任意事件名都视为合法
    pub fn is_valid(&self, _name: &str) -> bool {
        true
    }

    pub fn send_event(&self, args: impl Into<DispatchArgs>) -> Result<usize> {
        self.dispatch(DispatchMode::Send, args.into())
    }

    pub fn echo_event(&self, args: impl Into<DispatchArgs>) -> Result<usize> {
        self.dispatch(DispatchMode::Echo, args.into())
    }

    pub fn post_event(&self, args: impl Into<DispatchArgs>) -> Result<usize> {
        self.dispatch(DispatchMode::Post, args.into())
    }

    /// 解析并立即投递，返回被调用的监听器数量
    pub fn dispatch(&self, mode: DispatchMode, args: DispatchArgs) -> Result<usize> {
        let (target, event) = args.resolve_with_target()?;
        if self.record_dispatches {
            self.journal.record(mode, &event);
        }
        deliver(mode, &target, &event)
    }

    pub fn journal(&self) -> &DispatchJournal {
        &self.journal
    }

    pub fn reset(&self) {
        self.journal.clear();
    }
}

fn deliver(mode: DispatchMode, target: &Component, event: &Event) -> Result<usize> {
    let listeners = target.event_listeners(event.name());
    if listeners.is_empty() {
        debug!(%mode, event = %event.name(), target = %target.label(), "no listeners");
        return Ok(0);
    }
    debug!(
        %mode,
        event = %event.name(),
        target = %target.label(),
        listeners = listeners.len(),
        "dispatch"
    );

    let mut failures = Vec::new();
    for (position, listener) in listeners.iter().enumerate() {
        if let Err(e) = listener.on_event(event) {
            warn!(
                event = %event.name(),
                target = %target.label(),
                position,
                error = %e,
                "listener failed"
            );
            failures.push(ListenerFailure {
                position,
                cause: e.into(),
            });
        }
    }

    if failures.is_empty() {
        Ok(listeners.len())
    } else {
        Err(CoreError::ListenerFailures {
            event: event.name().to_string(),
            target: target.label(),
            failures,
        })
    }
}
