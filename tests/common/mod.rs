#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use crumbtrail::gestures::{EventHandler, KeyEvent, MotionEvent};
use crumbtrail::hub::{Breadcrumb, Hub, Options};
use crumbtrail::HubError;

#[derive(Debug, Clone, PartialEq)]
pub enum Received {
    Touch(MotionEvent),
    Key(KeyEvent),
    GenericMotion(MotionEvent),
    Trackball(MotionEvent),
    Focus(bool),
    Attached,
    Detached,
    MenuItem(u32),
}

/// Application handler that records everything and answers `consumes`.
#[derive(Debug, Default)]
pub struct RecordingHandler {
    pub consumes: bool,
    received: Mutex<Vec<Received>>,
}

impl RecordingHandler {
    pub fn consuming() -> Self {
        Self {
            consumes: true,
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    fn push(&self, event: Received) {
        self.received.lock().unwrap().push(event);
    }
}

impl EventHandler for RecordingHandler {
    fn dispatch_touch_event(&self, event: &MotionEvent) -> bool {
        self.push(Received::Touch(event.clone()));
        self.consumes
    }

    fn dispatch_key_event(&self, event: &KeyEvent) -> bool {
        self.push(Received::Key(event.clone()));
        self.consumes
    }

    fn dispatch_generic_motion_event(&self, event: &MotionEvent) -> bool {
        self.push(Received::GenericMotion(event.clone()));
        self.consumes
    }

    fn dispatch_trackball_event(&self, event: &MotionEvent) -> bool {
        self.push(Received::Trackball(event.clone()));
        self.consumes
    }

    fn on_window_focus_changed(&self, has_focus: bool) {
        self.push(Received::Focus(has_focus));
    }

    fn on_attached_to_window(&self) {
        self.push(Received::Attached);
    }

    fn on_detached_from_window(&self) {
        self.push(Received::Detached);
    }

    fn on_menu_item_selected(&self, item_id: u32) -> bool {
        self.push(Received::MenuItem(item_id));
        self.consumes
    }
}

/// Hub that rejects everything but counts the attempts.
pub struct FailingHub {
    options: Arc<Options>,
    attempts: Mutex<Vec<Breadcrumb>>,
}

impl FailingHub {
    pub fn new(options: Arc<Options>) -> Self {
        Self {
            options,
            attempts: Mutex::new(Vec::new()),
        }
    }

    pub fn attempts(&self) -> usize {
        self.attempts.lock().unwrap().len()
    }
}

impl Hub for FailingHub {
    fn options(&self) -> Arc<Options> {
        Arc::clone(&self.options)
    }

    fn add_breadcrumb(&self, breadcrumb: Breadcrumb) -> Result<(), HubError> {
        self.attempts.lock().unwrap().push(breadcrumb);
        Err(HubError::QueueFull)
    }
}
