use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionAction {
    Down,
    Move,
    Up,
    Cancel,
}

/// A pointer sample in window pixels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MotionEvent {
    pub action: MotionAction,
    pub x: f32,
    pub y: f32,
    /// Monotonic time of the sample.
    pub event_time_ms: u64,
}

impl MotionEvent {
    pub fn new(action: MotionAction, x: f32, y: f32, event_time_ms: u64) -> Self {
        Self { action, x, y, event_time_ms }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KeyAction {
    Down,
    Up,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyEvent {
    pub action: KeyAction,
    /// Symbolic key name, e.g. `KEYCODE_BACK`.
    pub key: String,
    /// Auto-repeat count, 0 for the initial press.
    pub repeat_count: u32,
}

impl KeyEvent {
    pub fn new(action: KeyAction, key: &str) -> Self {
        Self {
            action,
            key: key.to_string(),
            repeat_count: 0,
        }
    }
}
