use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const USER_TYPE: &str = "user";

pub const CATEGORY_CLICK: &str = "ui.click";
pub const CATEGORY_SCROLL: &str = "ui.scroll";
pub const CATEGORY_SWIPE: &str = "ui.swipe";
pub const CATEGORY_KEY: &str = "ui.key";
pub const CATEGORY_FOCUS: &str = "ui.focus";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
}

/// A single user action, as handed to the hub.
///
/// `timestamp` stays `None` until the hub accepts the breadcrumb.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    pub category: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    pub level: Level,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub data: BTreeMap<String, Value>,
}

impl Breadcrumb {
    pub fn user_interaction(category: &str, target: &str, message: impl Into<String>) -> Self {
        let mut data = BTreeMap::new();
        data.insert("target".to_string(), Value::String(target.to_string()));
        Self {
            timestamp: None,
            category: category.to_string(),
            kind: USER_TYPE.to_string(),
            message: message.into(),
            level: Level::Info,
            data,
        }
    }

    pub fn with_data(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.data.insert(key.to_string(), value.into());
        self
    }

    pub fn target(&self) -> Option<&str> {
        self.data.get("target").and_then(Value::as_str)
    }
}
