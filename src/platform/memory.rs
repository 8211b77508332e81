use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use uuid::Uuid;

use super::{
    Activity, ActivityLifecycleCallbacks, LifecycleHost, TargetKind, TargetLocator, UiTarget,
    Window,
};
use crate::gestures::WindowCallback;

/// Window whose callback slot lives in memory. Records every write.
#[derive(Debug, Default)]
pub struct MemoryWindow {
    slot: Mutex<Option<WindowCallback>>,
    writes: Mutex<Vec<Option<WindowCallback>>>,
}

impl MemoryWindow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_callback(callback: Option<WindowCallback>) -> Self {
        Self {
            slot: Mutex::new(callback),
            writes: Mutex::new(Vec::new()),
        }
    }

    /// Every value passed to `set_callback`, oldest first.
    pub fn writes(&self) -> Vec<Option<WindowCallback>> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    pub fn last_write(&self) -> Option<Option<WindowCallback>> {
        self.writes.lock().ok().and_then(|w| w.last().cloned())
    }
}

impl Window for MemoryWindow {
    fn callback(&self) -> Option<WindowCallback> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set_callback(&self, callback: Option<WindowCallback>) {
        if let Ok(mut writes) = self.writes.lock() {
            writes.push(callback.clone());
        }
        if let Ok(mut slot) = self.slot.lock() {
            *slot = callback;
        }
    }
}

pub struct MemoryActivity {
    id: Uuid,
    name: String,
    window: Option<Arc<MemoryWindow>>,
    density: Option<f32>,
    locator: Option<Arc<dyn TargetLocator>>,
}

impl MemoryActivity {
    /// A screen with an empty window at density 1.0.
    pub fn new(name: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            window: Some(Arc::new(MemoryWindow::new())),
            density: Some(1.0),
            locator: None,
        }
    }

    pub fn with_window(mut self, window: Option<Arc<MemoryWindow>>) -> Self {
        self.window = window;
        self
    }

    pub fn with_density(mut self, density: Option<f32>) -> Self {
        self.density = density;
        self
    }

    pub fn with_locator(mut self, locator: Arc<dyn TargetLocator>) -> Self {
        self.locator = Some(locator);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn memory_window(&self) -> Option<&Arc<MemoryWindow>> {
        self.window.as_ref()
    }
}

impl Activity for MemoryActivity {
    fn name(&self) -> &str {
        &self.name
    }

    fn window(&self) -> Option<Arc<dyn Window>> {
        self.window.as_ref().map(|w| Arc::clone(w) as Arc<dyn Window>)
    }

    fn density(&self) -> Option<f32> {
        self.density
    }

    fn target_locator(&self) -> Option<Arc<dyn TargetLocator>> {
        self.locator.clone()
    }
}

/// Lifecycle host that counts subscriptions and can replay transitions.
#[derive(Default)]
pub struct MemoryHost {
    callbacks: Mutex<Vec<Arc<dyn ActivityLifecycleCallbacks>>>,
    register_calls: AtomicUsize,
    unregister_calls: AtomicUsize,
}

impl MemoryHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_calls(&self) -> usize {
        self.register_calls.load(Ordering::SeqCst)
    }

    pub fn unregister_calls(&self) -> usize {
        self.unregister_calls.load(Ordering::SeqCst)
    }

    pub fn subscriber_count(&self) -> usize {
        self.callbacks.lock().map(|c| c.len()).unwrap_or(0)
    }

    pub fn resume(&self, activity: &dyn Activity) {
        for callbacks in self.subscribers() {
            callbacks.on_activity_resumed(activity);
        }
    }

    pub fn pause(&self, activity: &dyn Activity) {
        for callbacks in self.subscribers() {
            callbacks.on_activity_paused(activity);
        }
    }

    // Snapshot so callbacks may (un)register while being notified
    fn subscribers(&self) -> Vec<Arc<dyn ActivityLifecycleCallbacks>> {
        self.callbacks.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl LifecycleHost for MemoryHost {
    fn register_activity_lifecycle_callbacks(
        &self,
        callbacks: Arc<dyn ActivityLifecycleCallbacks>,
    ) {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut registered) = self.callbacks.lock() {
            registered.push(callbacks);
        }
    }

    fn unregister_activity_lifecycle_callbacks(
        &self,
        callbacks: &Arc<dyn ActivityLifecycleCallbacks>,
    ) {
        self.unregister_calls.fetch_add(1, Ordering::SeqCst);
        let target = Arc::as_ptr(callbacks) as *const ();
        if let Ok(mut registered) = self.callbacks.lock() {
            registered.retain(|c| Arc::as_ptr(c) as *const () != target);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }

    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}

#[derive(Debug, Clone)]
struct LaidOutView {
    target: UiTarget,
    bounds: Rect,
    clickable: bool,
    scrollable: bool,
}

/// Flat view layout. Later views are drawn on top of earlier ones.
#[derive(Debug, Clone, Default)]
pub struct ViewLayout {
    views: Vec<LaidOutView>,
}

impl ViewLayout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clickable(mut self, id: &str, class_name: &str, bounds: Rect) -> Self {
        self.views.push(LaidOutView {
            target: UiTarget::new(id, class_name),
            bounds,
            clickable: true,
            scrollable: false,
        });
        self
    }

    pub fn scrollable(mut self, id: &str, class_name: &str, bounds: Rect) -> Self {
        self.views.push(LaidOutView {
            target: UiTarget::new(id, class_name),
            bounds,
            clickable: false,
            scrollable: true,
        });
        self
    }
}

impl TargetLocator for ViewLayout {
    fn locate(&self, x: f32, y: f32, kind: TargetKind) -> Option<UiTarget> {
        self.views
            .iter()
            .rev()
            .filter(|view| match kind {
                TargetKind::Clickable => view.clickable,
                TargetKind::Scrollable => view.scrollable,
            })
            .find(|view| view.bounds.contains(x, y))
            .map(|view| view.target.clone())
    }
}
