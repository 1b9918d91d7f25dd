//! 测试支撑层错误
//!
//! 包装核心层错误，并补充严格事件模拟特有的两种失败：
//! 目标上没有监听器，以及监听器本身返回错误。
//!
use zkunit_core::error::CoreError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum HarnessError {
    #[error("core: {0}")]
    Core(#[from] CoreError),

    #[error("expected '{event}' event registered on {component}")]
    NoListener { event: String, component: String },

    #[error("listener for '{event}' on {component} failed")]
    Listener {
        event: String,
        component: String,
        #[source]
        cause: zkunit_core::error::ListenerCause,
    },
}

pub type HarnessResult<T> = Result<T, HarnessError>;
