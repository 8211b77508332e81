use serde::{Deserialize, Serialize};

use super::event::{MotionAction, MotionEvent};
use crate::hub::Options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Left => "left",
            Direction::Right => "right",
            Direction::Up => "up",
            Direction::Down => "down",
        }
    }

    /// Dominant axis of the travelled vector. Ties go to the vertical axis.
    pub fn from_delta(dx: f32, dy: f32) -> Self {
        if dx.abs() > dy.abs() {
            if dx > 0.0 { Direction::Right } else { Direction::Left }
        } else if dy > 0.0 {
            Direction::Down
        } else {
            Direction::Up
        }
    }
}

/// A completed gesture, reported on release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap { x: f32, y: f32 },
    Scroll { start_x: f32, start_y: f32, direction: Direction },
    Swipe { start_x: f32, start_y: f32, direction: Direction },
}

#[derive(Debug, Clone, Copy)]
struct Pointer {
    down_x: f32,
    down_y: f32,
    down_time_ms: u64,
    last_x: f32,
    last_y: f32,
    last_time_ms: u64,
    scrolling: bool,
}

/// Tap/scroll/swipe discrimination over a single pointer stream.
pub struct GestureDetector {
    // Configuration (pixels, already density scaled)
    touch_slop_px: f32,
    tap_timeout_ms: u64,
    min_fling_px_per_s: f32,

    // State
    pointer: Option<Pointer>,
}

impl GestureDetector {
    pub fn new(options: &Options, density: f32) -> Self {
        Self {
            touch_slop_px: options.touch_slop_dp * density,
            tap_timeout_ms: options.tap_timeout_ms,
            min_fling_px_per_s: options.min_fling_velocity_dp * density,
            pointer: None,
        }
    }

    pub fn touch_slop_px(&self) -> f32 {
        self.touch_slop_px
    }

    pub fn is_tracking(&self) -> bool {
        self.pointer.is_some()
    }

    /// Feed one sample. Returns a gesture when the release completes one.
    pub fn on_touch_event(&mut self, event: &MotionEvent) -> Option<Gesture> {
        match event.action {
            MotionAction::Down => {
                self.pointer = Some(Pointer {
                    down_x: event.x,
                    down_y: event.y,
                    down_time_ms: event.event_time_ms,
                    last_x: event.x,
                    last_y: event.y,
                    last_time_ms: event.event_time_ms,
                    scrolling: false,
                });
                None
            }
            MotionAction::Move => {
                let slop = self.touch_slop_px;
                if let Some(pointer) = self.pointer.as_mut() {
                    if !pointer.scrolling && distance(pointer, event) > slop {
                        pointer.scrolling = true;
                    }
                    pointer.last_x = event.x;
                    pointer.last_y = event.y;
                    pointer.last_time_ms = event.event_time_ms;
                }
                None
            }
            MotionAction::Up => {
                let pointer = self.pointer.take()?;
                self.classify(&pointer, event)
            }
            MotionAction::Cancel => {
                self.pointer = None;
                None
            }
        }
    }

    fn classify(&self, pointer: &Pointer, up: &MotionEvent) -> Option<Gesture> {
        let travelled = distance(pointer, up);
        let elapsed_ms = up.event_time_ms.saturating_sub(pointer.down_time_ms);

        if !pointer.scrolling && travelled <= self.touch_slop_px {
            // Held too long: a long press, not a tap
            if elapsed_ms > self.tap_timeout_ms {
                return None;
            }
            return Some(Gesture::Tap { x: up.x, y: up.y });
        }

        let direction = Direction::from_delta(up.x - pointer.down_x, up.y - pointer.down_y);

        // Velocity of the final segment: a finger that stops before lifting
        // scrolled, one still moving flung.
        let dx = up.x - pointer.last_x;
        let dy = up.y - pointer.last_y;
        let segment_ms = up.event_time_ms.saturating_sub(pointer.last_time_ms).max(1);
        let velocity = (dx * dx + dy * dy).sqrt() * 1000.0 / segment_ms as f32;

        if velocity >= self.min_fling_px_per_s {
            Some(Gesture::Swipe {
                start_x: pointer.down_x,
                start_y: pointer.down_y,
                direction,
            })
        } else {
            Some(Gesture::Scroll {
                start_x: pointer.down_x,
                start_y: pointer.down_y,
                direction,
            })
        }
    }
}

fn distance(pointer: &Pointer, event: &MotionEvent) -> f32 {
    let dx = event.x - pointer.down_x;
    let dy = event.y - pointer.down_y;
    (dx * dx + dy * dy).sqrt()
}
