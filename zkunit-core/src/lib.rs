//! zkunit 核心库（zkunit-core）
//!
//! 脱离真实应用服务器运行组件化 UI 代码所需的确定性事件派发基座：
//! - 组件（`component`）：最小组件树与按事件名的监听器注册表；
//! - 事件（`event`）：不可变的 `(name, target, data)` 值对象；
//! - 事件队列（`eventing`）：命名队列注册表与发布即同步投递的事件队列；
//! - 派发模拟（`dispatch`）：把 send/echo/post 折叠为立即同步投递。
//!
//! 全部操作在调用线程上同步完成，不存在调度、后台线程或等待。
//! 可变状态由测试夹具持有，每个测试开始时重置，保证确定性。
//!
pub mod component;
pub mod dispatch;
pub mod error;
pub mod event;
pub mod eventing;

pub use component::{Component, WeakComponent};
pub use dispatch::{DispatchArgs, DispatchMode, Events};
pub use error::{CoreError, CoreResult};
pub use event::Event;
pub use eventing::{EventListener, EventQueues, ListenerRef, SynchronousEventQueue, listener};
