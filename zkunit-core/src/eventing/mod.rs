//! 事件队列子系统（eventing）
//!
//! - `EventListener` / `ListenerRegistry`：监听器与按注册顺序保存的注册表；
//! - `SynchronousEventQueue`：发布即同步投递、首错即止的队列；
//! - `EventQueues`：按名称懒创建队列的注册表，由测试夹具持有。
//!
pub mod listener;
pub mod queue;
pub mod queues;

pub use listener::{
    EventListener, ListenerRef, ListenerRegistry, Registration, listener, same_listener,
};
pub use queue::SynchronousEventQueue;
pub use queues::{EventQueues, QueueScope};
