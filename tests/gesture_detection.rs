use crumbtrail::gestures::{Direction, Gesture, GestureDetector, MotionAction, MotionEvent};
use crumbtrail::hub::Options;

fn feed(detector: &mut GestureDetector, events: &[MotionEvent]) -> Vec<Gesture> {
    events.iter().filter_map(|e| detector.on_touch_event(e)).collect()
}

fn down(x: f32, y: f32, t: u64) -> MotionEvent {
    MotionEvent::new(MotionAction::Down, x, y, t)
}

fn mv(x: f32, y: f32, t: u64) -> MotionEvent {
    MotionEvent::new(MotionAction::Move, x, y, t)
}

fn up(x: f32, y: f32, t: u64) -> MotionEvent {
    MotionEvent::new(MotionAction::Up, x, y, t)
}

#[test]
fn test_tap_within_slop() {
    let mut detector = GestureDetector::new(&Options::default(), 1.0);

    let gestures = feed(
        &mut detector,
        &[down(10.0, 10.0, 0), mv(14.0, 12.0, 20), up(15.0, 12.0, 80)],
    );

    assert_eq!(gestures, vec![Gesture::Tap { x: 15.0, y: 12.0 }]);
    assert!(!detector.is_tracking());
}

#[test]
fn test_slop_scales_with_density() {
    let options = Options::default();

    // 20px of travel: beyond 8px at density 1, within 24px at density 3
    let stream = [down(0.0, 0.0, 0), mv(20.0, 0.0, 30), up(20.0, 0.0, 300)];

    let mut low = GestureDetector::new(&options, 1.0);
    assert_eq!(low.touch_slop_px(), 8.0);
    assert!(matches!(feed(&mut low, &stream).as_slice(), [Gesture::Scroll { .. }]));

    let mut high = GestureDetector::new(&options, 3.0);
    assert_eq!(high.touch_slop_px(), 24.0);
    assert!(matches!(feed(&mut high, &stream).as_slice(), [Gesture::Tap { .. }]));
}

#[test]
fn test_long_press_is_not_a_tap() {
    let options = Options {
        tap_timeout_ms: 300,
        ..Options::default()
    };
    let mut detector = GestureDetector::new(&options, 1.0);

    let gestures = feed(&mut detector, &[down(10.0, 10.0, 0), up(10.0, 10.0, 301)]);

    assert!(gestures.is_empty());
}

#[test]
fn test_resting_finger_scrolls_moving_finger_swipes() {
    let mut detector = GestureDetector::new(&Options::default(), 1.0);

    let scroll = feed(
        &mut detector,
        &[down(100.0, 500.0, 0), mv(100.0, 300.0, 100), up(100.0, 300.0, 400)],
    );
    assert_eq!(
        scroll,
        vec![Gesture::Scroll { start_x: 100.0, start_y: 500.0, direction: Direction::Up }]
    );

    let swipe = feed(
        &mut detector,
        &[down(100.0, 100.0, 1000), mv(150.0, 100.0, 1016), up(200.0, 110.0, 1032)],
    );
    assert_eq!(
        swipe,
        vec![Gesture::Swipe { start_x: 100.0, start_y: 100.0, direction: Direction::Right }]
    );
}

#[test]
fn test_fling_threshold_is_configurable() {
    let options = Options {
        min_fling_velocity_dp: 100_000.0,
        ..Options::default()
    };
    let mut detector = GestureDetector::new(&options, 1.0);

    let gestures = feed(
        &mut detector,
        &[down(100.0, 100.0, 0), mv(150.0, 100.0, 16), up(200.0, 100.0, 32)],
    );

    assert!(matches!(gestures.as_slice(), [Gesture::Scroll { direction: Direction::Right, .. }]));
}

#[test]
fn test_release_far_from_down_without_moves_swipes() {
    let mut detector = GestureDetector::new(&Options::default(), 1.0);

    let gestures = feed(&mut detector, &[down(0.0, 0.0, 0), up(0.0, 200.0, 400)]);

    assert!(matches!(gestures.as_slice(), [Gesture::Swipe { direction: Direction::Down, .. }]));
}

#[test]
fn test_cancel_and_orphan_release_are_ignored() {
    let mut detector = GestureDetector::new(&Options::default(), 1.0);

    let cancel = MotionEvent::new(MotionAction::Cancel, 0.0, 0.0, 10);
    let cancelled = feed(&mut detector, &[down(0.0, 0.0, 0), cancel, up(0.0, 0.0, 20)]);
    assert!(cancelled.is_empty());

    let orphan = feed(&mut detector, &[mv(5.0, 5.0, 30), up(5.0, 5.0, 40)]);
    assert!(orphan.is_empty());
}

#[test]
fn test_direction_uses_dominant_axis() {
    assert_eq!(Direction::from_delta(10.0, 3.0), Direction::Right);
    assert_eq!(Direction::from_delta(-10.0, 3.0), Direction::Left);
    assert_eq!(Direction::from_delta(2.0, 30.0), Direction::Down);
    assert_eq!(Direction::from_delta(2.0, -30.0), Direction::Up);
    // Ties fall to the vertical axis
    assert_eq!(Direction::from_delta(5.0, 5.0), Direction::Down);
}
