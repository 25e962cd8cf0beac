//! Capture pipeline tests

mod common;

use common::{count, events, Event, FakeDelay, FakeMic};
use rust_voice_recorder::audio::LowPassFilter;
use rust_voice_recorder::capture::capture;
use rust_voice_recorder::{FaultCode, FaultRegistry, SampleClock};

#[test]
fn test_one_read_per_tick_in_order() {
    let ev = events();
    let mut mic = FakeMic::new(&ev, vec![100]);
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);
    let faults = FaultRegistry::new();
    let mut samples = [0u16; 4];

    capture(&mut mic, LowPassFilter::new(0.1, 1023), &mut samples, &mut clock, &faults);

    let expected: Vec<Event> = (0..4).flat_map(|_| [Event::AdcRead, Event::Delay(62)]).collect();
    assert_eq!(*ev.borrow(), expected);
    assert_eq!(clock.ticks(), 4);
}

#[test]
fn test_capture_filters_into_buffer() {
    let ev = events();
    let mut mic = FakeMic::new(&ev, vec![100, 100, 100]);
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 3);
    let faults = FaultRegistry::new();
    let mut samples = [0u16; 3];

    let failed = capture(&mut mic, LowPassFilter::new(0.1, 1023), &mut samples, &mut clock, &faults);

    assert_eq!(failed, 0);
    assert_eq!(samples, [10, 19, 27]);
}

#[test]
fn test_capture_overwrites_whole_buffer() {
    let ev = events();
    let mut mic = FakeMic::new(&ev, vec![0]);
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);
    let faults = FaultRegistry::new();
    let mut samples = [777u16; 32];

    capture(&mut mic, LowPassFilter::new(0.1, 1023), &mut samples, &mut clock, &faults);

    assert!(samples.iter().all(|&s| s == 0));
}

#[test]
fn test_capture_wide_adc_stays_in_range() {
    let ev = events();
    // Pseudo-random 12-bit readings
    let readings: Vec<u16> = (0..997u32).map(|i| (i.wrapping_mul(2_654_435_761) >> 20) as u16 & 0x0FFF).collect();
    let mut mic = FakeMic::new(&ev, readings);
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);
    let faults = FaultRegistry::new();
    let mut samples = [0u16; 4000];

    capture(&mut mic, LowPassFilter::new(0.1, 1023), &mut samples, &mut clock, &faults);

    assert!(samples.iter().all(|&s| s <= 1023));
    assert_eq!(count(&ev, |e| *e == Event::AdcRead), 4000);
}

#[test]
fn test_failed_read_counts_and_continues() {
    let ev = events();
    let mut mic = FakeMic::new(&ev, vec![1000]).failing_at(&[1, 2]);
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);
    let faults = FaultRegistry::new();
    let mut samples = [0u16; 5];

    let failed = capture(&mut mic, LowPassFilter::new(1.0, 1023), &mut samples, &mut clock, &faults);

    assert_eq!(failed, 2);
    assert_eq!(faults.count(FaultCode::AdcRead), 2);
    assert_eq!(faults.last(), FaultCode::AdcRead);
    // With alpha = 1 a failed read stores silence, cadence is kept
    assert_eq!(samples, [1000, 0, 0, 1000, 1000]);
    assert_eq!(clock.ticks(), 5);
}

#[test]
fn test_failed_read_feeds_zero_into_filter() {
    let ev = events();
    let mut mic = FakeMic::new(&ev, vec![1000]).failing_at(&[1]);
    let mut clock = SampleClock::new(FakeDelay::new(&ev), 16_000);
    let faults = FaultRegistry::new();
    let mut samples = [0u16; 3];

    let failed = capture(&mut mic, LowPassFilter::new(0.5, 1023), &mut samples, &mut clock, &faults);

    assert_eq!(failed, 1);
    // The missed reading decays the history instead of zeroing the slot
    assert_eq!(samples, [500, 250, 625]);
}
