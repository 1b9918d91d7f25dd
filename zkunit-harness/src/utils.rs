//! 测试辅助工具
//!
//! - `grid` / `grid_with_columns`：真实环境中 grid 总会带有 rows 与 columns，
//!   测试中手工创建的 grid 没有，这里直接补齐；
//! - `simulate_event` / `simulate`：严格版事件模拟，要求目标上已注册监听器，
//!   只调用第一个监听器并原样传播其失败。
//!
use crate::error::{HarnessError, HarnessResult as Result};
use serde_json::Value;
use zkunit_core::{Component, Event};

pub const GRID: &str = "grid";
pub const ROWS: &str = "rows";
pub const COLUMNS: &str = "columns";
pub const COLUMN: &str = "column";

/// 带空 rows 与空 columns 的 grid
pub fn grid() -> Component {
    grid_with_columns(0)
}

/// 带空 rows 与 `columns` 个 column 的 grid
pub fn grid_with_columns(columns: usize) -> Component {
    let grid = Component::new(GRID);
    let cols = Component::new(COLUMNS);
    for _ in 0..columns {
        cols.append_child(Component::new(COLUMN));
    }
    grid.append_child(Component::new(ROWS));
    grid.append_child(cols);
    grid
}

/// 按种类取 grid 的 rows / columns 子组件
pub fn grid_part(grid: &Component, kind: &str) -> Option<Component> {
    grid.children().into_iter().find(|c| c.is_kind(kind))
}

pub fn simulate(event_name: &str, target: &Component, data: impl Into<Value>) -> Result<()> {
    simulate_event(&Event::with_data(event_name, target, data))
}

pub fn simulate_event(event: &Event) -> Result<()> {
    let Some(target) = event.target() else {
        return Err(HarnessError::NoListener {
            event: event.name().to_string(),
            component: "<no target>".to_string(),
        });
    };
    let Some(listener) = target.event_listeners(event.name()).into_iter().next() else {
        return Err(HarnessError::NoListener {
            event: event.name().to_string(),
            component: target.label(),
        });
    };

    tracing::debug!(event = %event.name(), target = %target.label(), "simulate");
    listener
        .on_event(event)
        .map_err(|e| HarnessError::Listener {
            event: event.name().to_string(),
            component: target.label(),
            cause: e.into(),
        })
}
