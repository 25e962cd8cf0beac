//! Low-pass filter tests

use rust_voice_recorder::audio::LowPassFilter;

#[test]
fn test_filter_starts_from_zero() {
    let filter = LowPassFilter::new(0.1, 1023);
    assert_eq!(filter.previous(), 0);
}

#[test]
fn test_filter_step_response_truncates() {
    let mut filter = LowPassFilter::new(0.1, 1023);

    // 10.0, 19.0, 27.1 -> truncated
    assert_eq!(filter.apply(100), 10);
    assert_eq!(filter.apply(100), 19);
    assert_eq!(filter.apply(100), 27);
    assert_eq!(filter.previous(), 27);
}

#[test]
fn test_filter_alpha_one_passes_through() {
    let mut filter = LowPassFilter::new(1.0, 1023);

    for raw in [0u16, 512, 1023, 7, 300] {
        assert_eq!(filter.apply(raw), raw);
    }
}

#[test]
fn test_filter_clamps_wide_readings() {
    let mut filter = LowPassFilter::new(1.0, 1023);
    assert_eq!(filter.apply(4095), 1023);

    let mut filter = LowPassFilter::new(0.5, 1023);
    for _ in 0..50 {
        assert!(filter.apply(4095) <= 1023);
    }
    assert_eq!(filter.previous(), 1023);
}

#[test]
fn test_filter_converges_on_constant_input() {
    const INPUT: u16 = 800;

    for alpha in [0.05f32, 0.1, 0.25, 0.5, 0.9, 1.0] {
        let mut filter = LowPassFilter::new(alpha, 1023);
        let mut out = 0;
        for _ in 0..2000 {
            out = filter.apply(INPUT);
        }

        // Truncation stalls once alpha * gap < 1
        let tolerance = (1.0 / alpha).ceil() as u16;
        assert!(out <= INPUT, "alpha {}: overshoot to {}", alpha, out);
        assert!(
            INPUT - out <= tolerance,
            "alpha {}: settled at {}, expected within {} of {}",
            alpha,
            out,
            tolerance,
            INPUT
        );
    }
}

#[test]
fn test_filter_rises_monotonically() {
    let mut filter = LowPassFilter::new(0.1, 1023);
    let mut last = 0;

    for _ in 0..100 {
        let out = filter.apply(1000);
        assert!(out >= last);
        last = out;
    }
}

#[test]
fn test_filter_decays_toward_silence() {
    let mut filter = LowPassFilter::new(0.5, 1023);
    filter.apply(1000);

    let mut last = filter.previous();
    for _ in 0..20 {
        let out = filter.apply(0);
        assert!(out <= last);
        last = out;
    }
    assert_eq!(last, 0);
}
