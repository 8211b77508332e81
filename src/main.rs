use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crumbtrail::gestures::{
    EventHandler, KeyAction, KeyEvent, MotionAction, MotionEvent, WindowCallback,
};
use crumbtrail::hub::{compute_snapshot, Breadcrumb, ChannelHub, Hub, Options};
use crumbtrail::platform::memory::{MemoryActivity, MemoryHost, MemoryWindow, Rect, ViewLayout};
use crumbtrail::platform::{KnownClasses, LifecycleHost, Window};
use crumbtrail::UserInteractionIntegration;

const SCROLL_FLOOD: usize = 200;

/// The application's own handler: a list that consumes every touch.
#[derive(Default)]
struct ScrollingList {
    touches: AtomicU64,
}

impl EventHandler for ScrollingList {
    fn dispatch_touch_event(&self, _event: &MotionEvent) -> bool {
        self.touches.fetch_add(1, Ordering::Relaxed);
        true
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

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Setup Logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("setting default subscriber failed")?;

    // 2. Options
    let options = match std::env::args().nth(1) {
        Some(path) => Options::load(&path).with_context(|| format!("loading options from {path}"))?,
        None => Options::default(),
    };
    let options = Arc::new(options);
    tracing::info!(?options, "crumbtrail session starting");

    // 3. Hub + consumer task (stands in for transport)
    let (hub, mut receiver) = ChannelHub::new(Arc::clone(&options), 1024);
    let consumer_token = CancellationToken::new();
    let consumer = tokio::spawn({
        let token = consumer_token.clone();
        async move {
            let mut received: Vec<Breadcrumb> = Vec::new();
            loop {
                tokio::select! {
                    Some(crumb) = receiver.recv() => received.push(crumb),
                    _ = token.cancelled() => break,
                }
            }
            while let Ok(crumb) = receiver.try_recv() {
                received.push(crumb);
            }
            received
        }
    });

    // 4. Screen with a button over a scrolling list
    let list = Arc::new(ScrollingList::default());
    let original = WindowCallback::original(list.clone());
    let window = Arc::new(MemoryWindow::with_callback(Some(original)));
    let layout = ViewLayout::new()
        .scrollable("item_list", "RecyclerView", Rect::new(0.0, 0.0, 1080.0, 2000.0))
        .clickable("refresh_button", "Button", Rect::new(40.0, 40.0, 340.0, 160.0));
    let activity = MemoryActivity::new("BenchmarkActivity")
        .with_window(Some(Arc::clone(&window)))
        .with_density(Some(2.75))
        .with_locator(Arc::new(layout));
    tracing::info!(activity_id = %activity.id(), "screen created");

    let host = Arc::new(MemoryHost::new());
    let mut integration = UserInteractionIntegration::new(
        Arc::clone(&host) as Arc<dyn LifecycleHost>,
        &KnownClasses::from_options(&options),
    );
    integration.register(Arc::new(hub) as Arc<dyn Hub>);

    // 5. Background CPU load while the UI path runs
    let load_token = CancellationToken::new();
    let load = tokio::spawn(cpu_load(load_token.clone()));

    let script = gesture_script();
    let baseline = replay(window.as_ref(), &script);

    host.resume(&activity);
    let instrumented_is_active = window.callback().map(|cb| cb.is_instrumented()).unwrap_or(false);
    let instrumented = replay(window.as_ref(), &script);
    if let Some(callback) = window.callback() {
        callback.dispatch_key_event(&KeyEvent::new(KeyAction::Down, "KEYCODE_BACK"));
        callback.on_window_focus_changed(false);
    }
    host.pause(&activity);

    load_token.cancel();
    let load_iterations = load.await.context("cpu load task")?;

    // 6. Teardown
    integration.close();
    consumer_token.cancel();
    let breadcrumbs = consumer.await.context("breadcrumb consumer")?;

    let report = serde_json::json!({
        "instrumented": instrumented_is_active,
        "restored_original": window.callback().map(|cb| !cb.is_instrumented()).unwrap_or(false),
        "events_per_pass": script.len(),
        "application_touches": list.touches.load(Ordering::Relaxed),
        "baseline_us": baseline.as_micros() as u64,
        "instrumented_us": instrumented.as_micros() as u64,
        "load_iterations": load_iterations,
        "snapshot": compute_snapshot(&breadcrumbs),
        "breadcrumbs": breadcrumbs,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}

fn replay(window: &dyn Window, script: &[MotionEvent]) -> Duration {
    let Some(callback) = window.callback() else {
        return Duration::ZERO;
    };
    let started = Instant::now();
    for event in script {
        callback.dispatch_touch_event(event);
    }
    started.elapsed()
}

/// Taps on the button, a flood of slow scrolls over the list, then a swipe.
fn gesture_script() -> Vec<MotionEvent> {
    let mut events = Vec::new();
    let mut t = 0u64;

    for _ in 0..3 {
        events.push(MotionEvent::new(MotionAction::Down, 100.0, 100.0, t));
        events.push(MotionEvent::new(MotionAction::Up, 101.0, 100.0, t + 60));
        t += 300;
    }

    for _ in 0..SCROLL_FLOOD {
        events.push(MotionEvent::new(MotionAction::Down, 500.0, 1500.0, t));
        let mut y = 1500.0;
        for _ in 0..20 {
            t += 16;
            y -= 30.0;
            events.push(MotionEvent::new(MotionAction::Move, 500.0, y, t));
        }
        // Finger rests before lifting
        t += 200;
        events.push(MotionEvent::new(MotionAction::Up, 500.0, y, t));
        t += 100;
    }

    events.push(MotionEvent::new(MotionAction::Down, 900.0, 1000.0, t));
    events.push(MotionEvent::new(MotionAction::Move, 700.0, 1000.0, t + 16));
    events.push(MotionEvent::new(MotionAction::Up, 500.0, 1000.0, t + 32));

    events
}

async fn cpu_load(token: CancellationToken) -> u64 {
    let mut iterations = 0u64;
    let mut acc = 0u64;
    while !token.is_cancelled() {
        for i in 0..10_000u64 {
            acc = acc.wrapping_mul(31).wrapping_add(i);
        }
        iterations += 1;
        tokio::task::yield_now().await;
    }
    tracing::debug!(acc, "cpu load stopped");
    iterations
}
