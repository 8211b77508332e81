use std::fmt;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracing::{debug, warn};

use super::callback::{EventHandler, WindowCallback};
use super::detector::{Direction, Gesture, GestureDetector};
use super::event::{KeyAction, KeyEvent, MotionEvent};
use super::noop::NoOpWindowCallback;
use crate::error::InstrumentationError;
use crate::hub::{
    Breadcrumb, Hub, Options, CATEGORY_CLICK, CATEGORY_FOCUS, CATEGORY_KEY, CATEGORY_SCROLL,
    CATEGORY_SWIPE,
};
use crate::platform::{TargetKind, TargetLocator, UiTarget};

/// Per-screen inputs the wrapper needs besides the delegate.
#[derive(Clone)]
pub struct SurfaceContext {
    /// Pixels per density-independent pixel.
    pub density: f32,
    pub locator: Option<Arc<dyn TargetLocator>>,
}

impl SurfaceContext {
    pub fn new(density: f32) -> Self {
        Self { density, locator: None }
    }

    pub fn with_locator(mut self, locator: Arc<dyn TargetLocator>) -> Self {
        self.locator = Some(locator);
        self
    }
}

/// Window callback decorator that turns user input into breadcrumbs.
///
/// # Invariants
/// - Every call reaches the delegate, and the delegate's return value is
///   returned unchanged.
/// - At most one hub call per qualifying event; none otherwise.
/// - Reporting failures are logged and dropped.
pub struct BreadcrumbWindowCallback {
    delegate: WindowCallback,
    context: SurfaceContext,
    hub: Arc<dyn Hub>,
    options: Arc<Options>,
    detector: Mutex<GestureDetector>,
}

impl BreadcrumbWindowCallback {
    pub fn new(
        delegate: Option<WindowCallback>,
        context: SurfaceContext,
        hub: Arc<dyn Hub>,
        options: Arc<Options>,
    ) -> Self {
        let delegate = delegate.unwrap_or_else(|| {
            debug!("{}", InstrumentationError::MissingDelegate);
            WindowCallback::NoOp(NoOpWindowCallback)
        });
        let detector = Mutex::new(GestureDetector::new(&options, context.density));
        Self {
            delegate,
            context,
            hub,
            options,
            detector,
        }
    }

    /// The callback that was installed before this one.
    pub fn delegate(&self) -> &WindowCallback {
        &self.delegate
    }

    pub fn density(&self) -> f32 {
        self.context.density
    }

    fn observe_touch(&self, event: &MotionEvent) {
        if !self.options.enable_user_interaction_breadcrumbs {
            return;
        }
        let gesture = match self.detector.lock() {
            Ok(mut detector) => detector.on_touch_event(event),
            Err(_) => {
                debug!("gesture detector lock poisoned, skipping touch event");
                return;
            }
        };
        if let Some(gesture) = gesture {
            self.report_gesture(gesture);
        }
    }

    fn report_gesture(&self, gesture: Gesture) {
        let (category, kind, x, y, direction) = match gesture {
            Gesture::Tap { x, y } => (CATEGORY_CLICK, TargetKind::Clickable, x, y, None),
            Gesture::Scroll { start_x, start_y, direction } => {
                (CATEGORY_SCROLL, TargetKind::Scrollable, start_x, start_y, Some(direction))
            }
            Gesture::Swipe { start_x, start_y, direction } => {
                (CATEGORY_SWIPE, TargetKind::Scrollable, start_x, start_y, Some(direction))
            }
        };

        let Some(target) = self.locate(x, y, kind) else {
            debug!(category, x, y, "unable to find target for gesture");
            return;
        };

        self.report(view_breadcrumb(category, &target, direction));
    }

    fn locate(&self, x: f32, y: f32, kind: TargetKind) -> Option<UiTarget> {
        self.context.locator.as_ref()?.locate(x, y, kind)
    }

    fn observe_key(&self, event: &KeyEvent) {
        if !self.options.enable_user_interaction_breadcrumbs {
            return;
        }
        if event.action != KeyAction::Down || event.repeat_count > 0 {
            return;
        }
        let message = format!("key {}", event.key);
        let crumb = Breadcrumb::user_interaction(CATEGORY_KEY, &event.key, message);
        self.report(crumb);
    }

    fn observe_focus(&self, has_focus: bool) {
        if !self.options.enable_user_interaction_breadcrumbs {
            return;
        }
        let message = if has_focus { "window gained focus" } else { "window lost focus" };
        let crumb = Breadcrumb::user_interaction(CATEGORY_FOCUS, "window", message)
            .with_data("has_focus", has_focus);
        self.report(crumb);
    }

    fn report(&self, breadcrumb: Breadcrumb) {
        let category = breadcrumb.category.clone();
        if let Err(e) = self.hub.add_breadcrumb(breadcrumb) {
            let error = InstrumentationError::from(e);
            warn!(%category, %error, "dropping breadcrumb");
        }
    }
}

fn view_breadcrumb(category: &str, target: &UiTarget, direction: Option<Direction>) -> Breadcrumb {
    let message = match direction {
        Some(direction) => format!("{} {} on {}", category, direction.as_str(), target.id),
        None => format!("{} on {}", category, target.id),
    };
    let crumb = Breadcrumb::user_interaction(category, &target.id, message)
        .with_data("view.id", target.id.as_str())
        .with_data("view.class", target.class_name.as_str());
    match direction {
        Some(direction) => crumb.with_data("direction", Value::from(direction.as_str())),
        None => crumb,
    }
}

impl fmt::Debug for BreadcrumbWindowCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BreadcrumbWindowCallback")
            .field("delegate", &self.delegate)
            .field("density", &self.context.density)
            .finish_non_exhaustive()
    }
}

impl EventHandler for BreadcrumbWindowCallback {
    fn dispatch_touch_event(&self, event: &MotionEvent) -> bool {
        let consumed = self.delegate.dispatch_touch_event(event);
        self.observe_touch(event);
        consumed
    }

    fn dispatch_key_event(&self, event: &KeyEvent) -> bool {
        let consumed = self.delegate.dispatch_key_event(event);
        self.observe_key(event);
        consumed
    }

    fn dispatch_generic_motion_event(&self, event: &MotionEvent) -> bool {
        self.delegate.dispatch_generic_motion_event(event)
    }

    fn dispatch_trackball_event(&self, event: &MotionEvent) -> bool {
        self.delegate.dispatch_trackball_event(event)
    }

    fn on_window_focus_changed(&self, has_focus: bool) {
        self.delegate.on_window_focus_changed(has_focus);
        self.observe_focus(has_focus);
    }

    fn on_attached_to_window(&self) {
        self.delegate.on_attached_to_window()
    }

    fn on_detached_from_window(&self) {
        self.delegate.on_detached_from_window()
    }

    fn on_menu_item_selected(&self, item_id: u32) -> bool {
        self.delegate.on_menu_item_selected(item_id)
    }
}
