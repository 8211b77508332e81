use std::sync::Arc;

use tracing::{debug, info};

use crate::error::InstrumentationError;
use crate::gestures::{BreadcrumbWindowCallback, SurfaceContext, WindowCallback};
use crate::hub::{Hub, Options};
use crate::platform::{
    Activity, ActivityLifecycleCallbacks, ClassAvailability, LifecycleHost, GESTURE_DETECTOR_CLASS,
};

/// Installs a [`BreadcrumbWindowCallback`] on every resumed screen and takes
/// it off again when the screen pauses.
///
/// Lifecycle of the subscription:
/// - `register` subscribes at most once, and only when breadcrumbs are
///   enabled and the gesture capability was found at construction.
/// - `close` (or drop) unsubscribes exactly once if subscribed.
///
/// Screens still instrumented at close are left as they are.
pub struct UserInteractionIntegration {
    host: Arc<dyn LifecycleHost>,
    gestures_available: bool,
    tracker: Option<Arc<InteractionTracker>>,
}

impl UserInteractionIntegration {
    /// Probes the gesture capability once; it is never re-checked.
    pub fn new(host: Arc<dyn LifecycleHost>, classes: &dyn ClassAvailability) -> Self {
        let gestures_available = classes.is_class_available(GESTURE_DETECTOR_CLASS, None);
        Self {
            host,
            gestures_available,
            tracker: None,
        }
    }

    /// Reads its configuration from the hub.
    pub fn register(&mut self, hub: Arc<dyn Hub>) {
        match self.try_register(hub) {
            Ok(()) => info!("UserInteractionIntegration installed"),
            Err(e) => debug!(error = %e, "UserInteractionIntegration not installed"),
        }
    }

    fn try_register(&mut self, hub: Arc<dyn Hub>) -> Result<(), InstrumentationError> {
        let options = hub.options();
        if !options.enable_user_interaction_breadcrumbs {
            return Err(InstrumentationError::BreadcrumbsDisabled);
        }
        if !self.gestures_available {
            return Err(InstrumentationError::CapabilityUnavailable(GESTURE_DETECTOR_CLASS));
        }
        if self.tracker.is_some() {
            debug!("UserInteractionIntegration already registered");
            return Ok(());
        }

        let tracker = Arc::new(InteractionTracker { hub, options });
        let callbacks: Arc<dyn ActivityLifecycleCallbacks> = tracker.clone();
        self.host.register_activity_lifecycle_callbacks(callbacks);
        self.tracker = Some(tracker);
        Ok(())
    }

    pub fn is_registered(&self) -> bool {
        self.tracker.is_some()
    }

    pub fn close(&mut self) {
        if let Some(tracker) = self.tracker.take() {
            let callbacks: Arc<dyn ActivityLifecycleCallbacks> = tracker;
            self.host.unregister_activity_lifecycle_callbacks(&callbacks);
            info!("UserInteractionIntegration removed");
        }
    }
}

impl Drop for UserInteractionIntegration {
    fn drop(&mut self) {
        self.close();
    }
}

impl ActivityLifecycleCallbacks for UserInteractionIntegration {
    fn on_activity_resumed(&self, activity: &dyn Activity) {
        match &self.tracker {
            Some(tracker) => tracker.on_activity_resumed(activity),
            None => debug!(activity = activity.name(), "not registered, ignoring resume"),
        }
    }

    fn on_activity_paused(&self, activity: &dyn Activity) {
        log_skipped(activity, stop_tracking(activity));
    }
}

/// The subscriber actually handed to the host.
struct InteractionTracker {
    hub: Arc<dyn Hub>,
    options: Arc<Options>,
}

impl ActivityLifecycleCallbacks for InteractionTracker {
    fn on_activity_resumed(&self, activity: &dyn Activity) {
        log_skipped(activity, start_tracking(activity, &self.hub, &self.options));
    }

    fn on_activity_paused(&self, activity: &dyn Activity) {
        log_skipped(activity, stop_tracking(activity));
    }
}

fn log_skipped(activity: &dyn Activity, result: Result<(), InstrumentationError>) {
    if let Err(e) = result {
        debug!(activity = activity.name(), error = %e, "window callback left unchanged");
    }
}

fn start_tracking(
    activity: &dyn Activity,
    hub: &Arc<dyn Hub>,
    options: &Arc<Options>,
) -> Result<(), InstrumentationError> {
    let window = activity
        .window()
        .ok_or_else(|| InstrumentationError::NoWindow(activity.name().to_string()))?;
    // Thresholds scale by density; only a positive finite value is usable
    let density = activity
        .density()
        .filter(|d| d.is_finite() && *d > 0.0)
        .ok_or_else(|| InstrumentationError::NoResources(activity.name().to_string()))?;

    // Re-wrap the original rather than stacking wrappers
    let delegate = match window.callback() {
        Some(WindowCallback::Breadcrumbs(installed)) => Some(installed.delegate().clone()),
        other => other,
    };

    let mut context = SurfaceContext::new(density);
    context.locator = activity.target_locator();

    let wrapper =
        BreadcrumbWindowCallback::new(delegate, context, Arc::clone(hub), Arc::clone(options));
    window.set_callback(Some(WindowCallback::Breadcrumbs(Arc::new(wrapper))));
    debug!(activity = activity.name(), "window callback instrumented");
    Ok(())
}

fn stop_tracking(activity: &dyn Activity) -> Result<(), InstrumentationError> {
    let window = activity
        .window()
        .ok_or_else(|| InstrumentationError::NoWindow(activity.name().to_string()))?;

    let Some(WindowCallback::Breadcrumbs(installed)) = window.callback() else {
        return Err(InstrumentationError::StaleWrapperOnDetach);
    };

    let restored = match installed.delegate() {
        WindowCallback::NoOp(_) => None,
        original => Some(original.clone()),
    };
    window.set_callback(restored);
    debug!(activity = activity.name(), "window callback restored");
    Ok(())
}
