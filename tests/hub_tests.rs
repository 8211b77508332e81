use std::sync::Arc;

use crumbtrail::hub::{
    compute_snapshot, Breadcrumb, ChannelHub, Hub, Options, RecordingHub, CATEGORY_CLICK,
    CATEGORY_KEY, CATEGORY_SCROLL, CATEGORY_SWIPE,
};
use crumbtrail::{ConfigError, HubError};

fn click(target: &str) -> Breadcrumb {
    Breadcrumb::user_interaction(CATEGORY_CLICK, target, format!("ui.click on {target}"))
}

#[test]
fn test_recording_hub_evicts_oldest() {
    let options = Arc::new(Options {
        max_breadcrumbs: 2,
        ..Options::default()
    });
    let hub = RecordingHub::new(options);

    for target in ["a", "b", "c"] {
        hub.add_breadcrumb(click(target)).unwrap();
    }

    let targets: Vec<_> = hub
        .breadcrumbs()
        .iter()
        .map(|c| c.target().unwrap().to_string())
        .collect();
    assert_eq!(targets, vec!["b", "c"]);
    assert!(hub.breadcrumbs().iter().all(|c| c.timestamp.is_some()));

    hub.clear();
    assert!(hub.is_empty());
}

#[test]
fn test_channel_hub_full_and_closed() {
    let (hub, receiver) = ChannelHub::new(Arc::new(Options::default()), 1);

    assert_eq!(hub.add_breadcrumb(click("a")), Ok(()));
    assert_eq!(hub.add_breadcrumb(click("b")), Err(HubError::QueueFull));

    drop(receiver);
    assert_eq!(hub.add_breadcrumb(click("c")), Err(HubError::Closed));
}

#[tokio::test]
async fn test_channel_hub_delivers_from_many_threads() {
    let (hub, mut receiver) = ChannelHub::new(Arc::new(Options::default()), 64);
    let hub: Arc<dyn Hub> = Arc::new(hub);

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let hub = Arc::clone(&hub);
            std::thread::spawn(move || {
                for j in 0..5 {
                    hub.add_breadcrumb(click(&format!("view_{i}_{j}"))).unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    drop(hub);

    let mut received = 0;
    while let Some(crumb) = receiver.recv().await {
        assert!(crumb.timestamp.is_some());
        received += 1;
    }
    assert_eq!(received, 20);
}

#[test]
fn test_snapshot_counts_by_category() {
    let crumbs = vec![
        click("ok"),
        click("ok"),
        click("cancel"),
        Breadcrumb::user_interaction(CATEGORY_SCROLL, "feed", "scroll")
            .with_data("direction", "up"),
        Breadcrumb::user_interaction(CATEGORY_SWIPE, "feed", "swipe")
            .with_data("direction", "up"),
        Breadcrumb::user_interaction(CATEGORY_KEY, "KEYCODE_BACK", "key"),
        Breadcrumb::user_interaction("navigation", "home", "nav"),
    ];

    let snap = compute_snapshot(&crumbs);

    assert_eq!(snap.total, 7);
    assert_eq!(snap.clicks, 3);
    assert_eq!(snap.scrolls, 1);
    assert_eq!(snap.swipes, 1);
    assert_eq!(snap.keys, 1);
    assert_eq!(snap.other, 1);
    assert_eq!(snap.directions["up"], 2);
    assert_eq!(snap.click_targets["ok"], 2);
}

#[test]
fn test_breadcrumb_serializes_type_field() {
    let json = serde_json::to_value(click("ok")).unwrap();

    assert_eq!(json["type"], "user");
    assert_eq!(json["category"], "ui.click");
    assert_eq!(json["level"], "info");
    assert!(json.get("timestamp").is_none());
}

#[test]
fn test_options_defaults_and_partial_json() {
    let options = Options::from_json_str(r#"{ "touch_slop_dp": 12.5 }"#).unwrap();

    assert!(options.enable_user_interaction_breadcrumbs);
    assert_eq!(options.touch_slop_dp, 12.5);
    assert_eq!(options.max_breadcrumbs, 100);
    assert_eq!(options.tap_timeout_ms, 500);
}

#[test]
fn test_options_rejects_invalid_values() {
    let zero = Options::from_json_str(r#"{ "max_breadcrumbs": 0 }"#);
    assert!(matches!(zero, Err(ConfigError::Invalid(_))));

    let negative = Options::from_json_str(r#"{ "min_fling_velocity_dp": -1.0 }"#);
    assert!(matches!(negative, Err(ConfigError::Invalid(_))));

    let garbage = Options::from_json_str("not json");
    assert!(matches!(garbage, Err(ConfigError::Parse(_))));
}

#[test]
fn test_options_load_from_file() {
    let path = std::env::temp_dir()
        .join(format!("crumbtrail-options-{}.json", uuid::Uuid::new_v4()));
    let json = r#"{
        "enable_user_interaction_breadcrumbs": false,
        "dsn": "https://key@example.com/1"
    }"#;
    std::fs::write(&path, json).unwrap();

    let options = Options::load(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    assert!(!options.enable_user_interaction_breadcrumbs);
    assert_eq!(options.dsn.as_deref(), Some("https://key@example.com/1"));

    assert!(matches!(Options::load(&path), Err(ConfigError::Io(_))));
}
