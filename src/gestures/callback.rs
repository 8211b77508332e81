use std::fmt;
use std::sync::Arc;

use super::event::{KeyEvent, MotionEvent};
use super::noop::NoOpWindowCallback;
use super::window_callback::BreadcrumbWindowCallback;

/// Everything a window dispatches to its callback.
///
/// `dispatch_*` and `on_menu_item_selected` return whether the event was
/// consumed.
pub trait EventHandler: Send + Sync {
    fn dispatch_touch_event(&self, event: &MotionEvent) -> bool;
    fn dispatch_key_event(&self, event: &KeyEvent) -> bool;
    fn dispatch_generic_motion_event(&self, event: &MotionEvent) -> bool;
    fn dispatch_trackball_event(&self, event: &MotionEvent) -> bool;
    fn on_window_focus_changed(&self, has_focus: bool);
    fn on_attached_to_window(&self);
    fn on_detached_from_window(&self);
    fn on_menu_item_selected(&self, item_id: u32) -> bool;
}

/// The value held in a window's callback slot.
///
/// Instrumentation is active on a window exactly when its slot holds
/// [`WindowCallback::Breadcrumbs`].
#[derive(Clone)]
pub enum WindowCallback {
    /// Whatever the application installed.
    Original(Arc<dyn EventHandler>),
    NoOp(NoOpWindowCallback),
    Breadcrumbs(Arc<BreadcrumbWindowCallback>),
}

impl WindowCallback {
    pub fn original(handler: Arc<dyn EventHandler>) -> Self {
        Self::Original(handler)
    }

    pub fn is_instrumented(&self) -> bool {
        matches!(self, Self::Breadcrumbs(_))
    }

    pub fn as_breadcrumbs(&self) -> Option<&Arc<BreadcrumbWindowCallback>> {
        match self {
            Self::Breadcrumbs(wrapper) => Some(wrapper),
            _ => None,
        }
    }

    /// Reference identity: the very same handler object, not an equal one.
    pub fn same_handler(&self, other: &WindowCallback) -> bool {
        match (self, other) {
            (Self::Original(a), Self::Original(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            (Self::NoOp(_), Self::NoOp(_)) => true,
            (Self::Breadcrumbs(a), Self::Breadcrumbs(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn handler(&self) -> &dyn EventHandler {
        match self {
            Self::Original(handler) => handler.as_ref(),
            Self::NoOp(noop) => noop,
            Self::Breadcrumbs(wrapper) => wrapper.as_ref(),
        }
    }
}

impl fmt::Debug for WindowCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Original(_) => f.write_str("WindowCallback::Original"),
            Self::NoOp(_) => f.write_str("WindowCallback::NoOp"),
            Self::Breadcrumbs(wrapper) => f
                .debug_tuple("WindowCallback::Breadcrumbs")
                .field(wrapper.delegate())
                .finish(),
        }
    }
}

impl EventHandler for WindowCallback {
    fn dispatch_touch_event(&self, event: &MotionEvent) -> bool {
        self.handler().dispatch_touch_event(event)
    }

    fn dispatch_key_event(&self, event: &KeyEvent) -> bool {
        self.handler().dispatch_key_event(event)
    }

    fn dispatch_generic_motion_event(&self, event: &MotionEvent) -> bool {
        self.handler().dispatch_generic_motion_event(event)
    }

    fn dispatch_trackball_event(&self, event: &MotionEvent) -> bool {
        self.handler().dispatch_trackball_event(event)
    }

    fn on_window_focus_changed(&self, has_focus: bool) {
        self.handler().on_window_focus_changed(has_focus)
    }

    fn on_attached_to_window(&self) {
        self.handler().on_attached_to_window()
    }

    fn on_detached_from_window(&self) {
        self.handler().on_detached_from_window()
    }

    fn on_menu_item_selected(&self, item_id: u32) -> bool {
        self.handler().on_menu_item_selected(item_id)
    }
}
