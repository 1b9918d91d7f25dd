//! 事件（Event）值对象
//!
//! 构造后不可变，派发期间只读。
//!
use crate::component::Component;
use serde_json::Value;
use std::fmt;

/// 常用事件名
pub mod names {
    pub const ON_CLICK: &str = "onClick";
    pub const ON_DOUBLE_CLICK: &str = "onDoubleClick";
    pub const ON_CHANGE: &str = "onChange";
    pub const ON_CHANGING: &str = "onChanging";
    pub const ON_SELECT: &str = "onSelect";
    pub const ON_CHECK: &str = "onCheck";
    pub const ON_OK: &str = "onOK";
    pub const ON_CANCEL: &str = "onCancel";
    pub const ON_CLOSE: &str = "onClose";
    pub const ON_OPEN: &str = "onOpen";
    pub const ON_CREATE: &str = "onCreate";
    pub const ON_FOCUS: &str = "onFocus";
    pub const ON_BLUR: &str = "onBlur";
    pub const ON_UPLOAD: &str = "onUpload";
}

#[derive(Clone)]
pub struct Event {
    name: String,
    target: Option<Component>,
    data: Value,
}

impl Event {
    /// 无载荷事件
    pub fn new(name: impl Into<String>, target: &Component) -> Self {
        Self::with_data(name, target, Value::Null)
    }

    pub fn with_data(name: impl Into<String>, target: &Component, data: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            target: Some(target.clone()),
            data: data.into(),
        }
    }

    /// 无目标事件；派发时会因无法解析目标而失败
    pub fn detached(name: impl Into<String>, data: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            target: None,
            data: data.into(),
        }
    }

    pub(crate) fn from_parts(name: String, target: Component, data: Value) -> Self {
        Self {
            name,
            target: Some(target),
            data,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn target(&self) -> Option<&Component> {
        self.target.as_ref()
    }

    pub fn data(&self) -> &Value {
        &self.data
    }

    pub fn has_data(&self) -> bool {
        !self.data.is_null()
    }
}

impl fmt::Debug for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Event")
            .field("name", &self.name)
            .field("target", &self.target.as_ref().map(|c| c.label()))
            .field("data", &self.data)
            .finish()
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.target {
            Some(target) => write!(f, "[Event {} {}]", self.name, target.label()),
            None => write!(f, "[Event {} <no target>]", self.name),
        }
    }
}
