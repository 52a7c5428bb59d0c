use std::time::Duration;

use tiledmap::timing::FrameTimer;

// ── Budget ────────────────────────────────────────────────────────────────

#[test]
fn budget_is_whole_milliseconds() {
    assert_eq!(FrameTimer::from_fps(60).frame_budget(), Duration::from_millis(16));
    assert_eq!(FrameTimer::from_fps(30).frame_budget(), Duration::from_millis(33));
    assert_eq!(FrameTimer::from_fps(1000).frame_budget(), Duration::from_millis(1));
}

#[test]
fn zero_fps_clamps_to_one_second() {
    assert_eq!(FrameTimer::from_fps(0), FrameTimer::from_fps(1));
    assert_eq!(FrameTimer::from_fps(0).frame_budget(), Duration::from_secs(1));
}

#[test]
fn custom_budget() {
    let t = FrameTimer::from_budget(Duration::from_micros(8_333));
    assert_eq!(t.remaining(Duration::from_micros(333)), Some(Duration::from_millis(8)));
}

// ── Remaining time ────────────────────────────────────────────────────────

#[test]
fn early_frame_sleeps_the_remainder() {
    let t = FrameTimer::from_fps(60);
    assert_eq!(t.remaining(Duration::from_millis(4)), Some(Duration::from_millis(12)));
    assert_eq!(t.remaining(Duration::ZERO), Some(Duration::from_millis(16)));
}

#[test]
fn overrun_frame_is_not_compensated() {
    let t = FrameTimer::from_fps(60);
    assert_eq!(t.remaining(Duration::from_millis(40)), None);
}
