//! Ports to the host UI platform.
//!
//! The coordinator and the window callback only ever touch the host through
//! these traits. `memory` provides in-process implementations.

pub mod memory;

use std::collections::HashSet;
use std::sync::Arc;

use crate::gestures::WindowCallback;
use crate::hub::Options;

/// The optional class the gesture capability depends on.
pub const GESTURE_DETECTOR_CLASS: &str = "androidx.core.view.GestureDetectorCompat";

/// Answers whether an optional class ships with the host process.
pub trait ClassAvailability {
    fn is_class_available(&self, class_name: &str, options: Option<&Options>) -> bool;
}

/// Set-backed [`ClassAvailability`].
#[derive(Debug, Clone, Default)]
pub struct KnownClasses {
    classes: HashSet<String>,
}

impl KnownClasses {
    pub fn new<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            classes: classes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_options(options: &Options) -> Self {
        Self::new(options.available_classes.iter().cloned())
    }
}

impl ClassAvailability for KnownClasses {
    fn is_class_available(&self, class_name: &str, _options: Option<&Options>) -> bool {
        self.classes.contains(class_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetKind {
    Clickable,
    Scrollable,
}

/// A view that a gesture landed on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTarget {
    pub id: String,
    pub class_name: String,
}

impl UiTarget {
    pub fn new(id: &str, class_name: &str) -> Self {
        Self {
            id: id.to_string(),
            class_name: class_name.to_string(),
        }
    }
}

/// Hit-testing into the view hierarchy of a screen.
pub trait TargetLocator: Send + Sync {
    fn locate(&self, x: f32, y: f32, kind: TargetKind) -> Option<UiTarget>;
}

/// The callback slot of a screen's window. Owned by the platform.
pub trait Window: Send + Sync {
    fn callback(&self) -> Option<WindowCallback>;
    fn set_callback(&self, callback: Option<WindowCallback>);
}

/// A top-level screen.
pub trait Activity: Send + Sync {
    fn name(&self) -> &str;
    fn window(&self) -> Option<Arc<dyn Window>>;
    /// Display density from the screen's resources, if it has any.
    fn density(&self) -> Option<f32>;
    fn target_locator(&self) -> Option<Arc<dyn TargetLocator>> {
        None
    }
}

/// Screen lifecycle notifications.
pub trait ActivityLifecycleCallbacks: Send + Sync {
    fn on_activity_created(&self, _activity: &dyn Activity) {}
    fn on_activity_resumed(&self, activity: &dyn Activity);
    fn on_activity_paused(&self, activity: &dyn Activity);
    fn on_activity_destroyed(&self, _activity: &dyn Activity) {}
}

/// The application object that fans out lifecycle notifications.
pub trait LifecycleHost: Send + Sync {
    fn register_activity_lifecycle_callbacks(
        &self,
        callbacks: Arc<dyn ActivityLifecycleCallbacks>,
    );
    fn unregister_activity_lifecycle_callbacks(
        &self,
        callbacks: &Arc<dyn ActivityLifecycleCallbacks>,
    );
}
