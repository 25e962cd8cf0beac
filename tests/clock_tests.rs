//! Sample clock tests

mod common;

use common::{events, Event, FakeDelay};
use rust_voice_recorder::SampleClock;

#[test]
fn test_period_truncates() {
    let ev = events();

    assert_eq!(SampleClock::new(FakeDelay::new(&ev), 16_000).period_us(), 62);
    assert_eq!(SampleClock::new(FakeDelay::new(&ev), 22_050).period_us(), 45);
    assert_eq!(SampleClock::new(FakeDelay::new(&ev), 8_000).period_us(), 125);
    assert_eq!(SampleClock::new(FakeDelay::new(&ev), 3).period_us(), 333_333);
}

#[test]
fn test_tick_issues_one_delay_of_one_period() {
    let ev = events();
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);

    clock.tick();
    clock.tick();
    clock.tick();

    assert_eq!(*ev.borrow(), vec![Event::Delay(62); 3]);
    assert_eq!(clock.ticks(), 3);
}

#[test]
fn test_elapsed_is_nominal_without_drift_correction() {
    let ev = events();
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);

    for _ in 0..16_000 {
        clock.tick();
    }

    // 62 us * 16000 = 992 ms, the truncation error is kept
    assert_eq!(clock.elapsed_us(), 992_000);
}

#[test]
fn test_zero_rate_does_not_divide_by_zero() {
    let ev = events();
    let clock = SampleClock::new(FakeDelay::new(&ev), 0);
    assert_eq!(clock.period_us(), 1_000_000);
}
