//! 事件派发模拟（dispatch）
//!
//! - `DispatchArgs`：合法调用形态及其解析规则；
//! - `Events`：send/echo/post 的同步替身；
//! - `DispatchJournal`：派发记录。
//!
pub mod args;
pub mod journal;
pub mod simulator;

pub use args::DispatchArgs;
pub use journal::{DispatchJournal, DispatchMode, DispatchRecord};
pub use simulator::Events;
