//! 核心层统一错误定义
//!
//! 覆盖队列投递、事件模拟派发两条路径上的失败，
//! 便于上层（harness）统一转换为 `HarnessError`。
//!
use std::fmt;
use thiserror::Error;

/// 监听器返回的错误原因（保留为 `source()`）
pub type ListenerCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CoreError {
    // --- 同步队列 ---
    #[error("event queue `{queue}` aborted publish of `{event}`")]
    Publish {
        queue: String,
        event: String,
        #[source]
        cause: ListenerCause,
    },

    // --- 事件模拟派发 ---
    #[error("could not resolve event target from {args}")]
    UnresolvableTarget { args: String },
    #[error("could not resolve event name from {args}")]
    UnresolvableName { args: String },
    #[error("{} listener(s) failed for `{event}` on {target}", .failures.len())]
    ListenerFailures {
        event: String,
        target: String,
        failures: Vec<ListenerFailure>,
    },
}

/// 模拟派发中单个监听器的失败记录
#[derive(Debug)]
pub struct ListenerFailure {
    /// 监听器在注册表中的位置（注册顺序，从 0 开始）
    pub position: usize,
    pub cause: ListenerCause,
}

impl fmt::Display for ListenerFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "listener #{}: {}", self.position, self.cause)
    }
}

impl CoreError {
    pub fn publish(
        queue: impl Into<String>,
        event: impl Into<String>,
        cause: anyhow::Error,
    ) -> Self {
        CoreError::Publish {
            queue: queue.into(),
            event: event.into(),
            cause: cause.into(),
        }
    }
}

/// 统一 Result 类型别名
pub type CoreResult<T> = Result<T, CoreError>;
