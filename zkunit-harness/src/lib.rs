//! zkunit 测试支撑层（zkunit-harness）
//!
//! 在 `zkunit-core` 之上提供写测试时直接使用的部分：
//! - `fixture`：每个测试独占的夹具 `ZkTest`，持有队列注册表与派发模拟器；
//! - `assert`：组件树、监听器与派发记录的断言；
//! - `utils`：grid 构造与严格版事件模拟；
//! - `zk_test`：把夹具接入 `#[test]` 的属性宏。
//!
pub mod assert;
pub mod error;
pub mod fixture;
pub mod utils;

pub use error::{HarnessError, HarnessResult};
pub use fixture::{ZkTest, ZkTestConfig};
pub use zkunit_macros::zk_test;

// 允许在本 crate 内部通过 ::zkunit_harness 进行自引用，
// 以便 #[zk_test] 展开的路径在本 crate 的单元测试中也能解析。
extern crate self as zkunit_harness;
