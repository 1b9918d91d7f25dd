//! 测试夹具（ZkTest）
//!
//! 持有一次测试用到的全部可变状态（命名队列注册表、派发模拟器及其日志），
//! 以显式对象代替进程级全局表：
//! - `setup`：安装 tracing（进程内仅第一次生效）并创建全新的注册表；
//! - `reset`：清空队列与派发日志，供同一夹具跨阶段复用。
//!
//! 典型用法：
//! ```rust
//! use zkunit_harness::ZkTest;
//!
//! let zk = ZkTest::setup();
//! let queue = zk.queues().lookup("chat");
//! assert!(zk.queues().exists("chat"));
//! assert_eq!(queue.name(), "chat");
//! ```
use bon::Builder;
use std::sync::{Arc, Once};
use tracing_subscriber::EnvFilter;
use zkunit_core::{EventQueues, Events};

const DEFAULT_LOG_FILTER: &str = "warn";

/// 夹具配置
#[derive(Builder, Clone, Debug)]
pub struct ZkTestConfig {
    /// tracing 过滤指令；为空时读取 `RUST_LOG`，再退回 `warn`
    ///
    /// 订阅器在进程内只安装一次，只有第一个创建的夹具的过滤指令生效。
    /// 测试并行运行时由调度顺序决定是哪一个，之后的配置会被忽略。
    #[builder(into)]
    log_filter: Option<String>,
    /// 是否记录派发日志（`assert_event_*` 依赖它）
    #[builder(default = true)]
    record_dispatches: bool,
}

impl Default for ZkTestConfig {
    fn default() -> Self {
        Self {
            log_filter: None,
            record_dispatches: true,
        }
    }
}

impl ZkTestConfig {
    pub fn log_filter(&self) -> Option<&str> {
        self.log_filter.as_deref()
    }

    pub fn record_dispatches(&self) -> bool {
        self.record_dispatches
    }
}

pub struct ZkTest {
    config: ZkTestConfig,
    queues: Arc<EventQueues>,
    events: Arc<Events>,
}

impl ZkTest {
    pub fn setup() -> Self {
        Self::with_config(ZkTestConfig::default())
    }

    pub fn with_config(config: ZkTestConfig) -> Self {
        init_tracing(config.log_filter());
        let zk = Self {
            queues: Arc::new(EventQueues::new()),
            events: Arc::new(Events::with_recording(config.record_dispatches())),
            config,
        };
        tracing::debug!("zk test fixture ready");
        zk
    }

    /// 清空队列与派发日志
    pub fn reset(&self) {
        self.queues.clear();
        self.events.reset();
    }

    /// 克隆句柄即可在监听器中使用
    pub fn queues(&self) -> &Arc<EventQueues> {
        &self.queues
    }

    pub fn events(&self) -> &Arc<Events> {
        &self.events
    }

    pub fn config(&self) -> &ZkTestConfig {
        &self.config
    }
}

impl Default for ZkTest {
    fn default() -> Self {
        Self::setup()
    }
}

/// 安装测试用 tracing 订阅器；已有全局订阅器时静默跳过
pub fn init_tracing(filter: Option<&str>) {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let filter = match filter {
            Some(directives) => EnvFilter::new(directives),
            None => EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        };
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}
