use super::callback::EventHandler;
use super::event::{KeyEvent, MotionEvent};

/// Stands in for a missing window callback. Consumes nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoOpWindowCallback;

impl EventHandler for NoOpWindowCallback {
    fn dispatch_touch_event(&self, _event: &MotionEvent) -> bool {
        false
    }

    fn dispatch_key_event(&self, _event: &KeyEvent) -> bool {
        false
    }

    fn dispatch_generic_motion_event(&self, _event: &MotionEvent) -> bool {
        false
    }

    fn dispatch_trackball_event(&self, _event: &MotionEvent) -> bool {
        false
    }

    fn on_window_focus_changed(&self, _has_focus: bool) {}

    fn on_attached_to_window(&self) {}

    fn on_detached_from_window(&self) {}

    fn on_menu_item_selected(&self, _item_id: u32) -> bool {
        false
    }
}
