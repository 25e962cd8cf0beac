//! Host-side fakes for the recorder peripherals.
//!
//! Every fake appends to one shared event log so tests can check ordering
//! across peripherals (read, then tick, then the next read...).

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, OutputPin};
use embedded_hal::pwm::{self, SetDutyCycle};
use rust_voice_recorder::hal::AnalogInput;
use rust_voice_recorder::{RecorderConfig, RecorderPeripherals};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Led {
    Capture,
    Playback,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    AdcRead,
    Delay(u32),
    Duty(Channel, u16),
    Led(Led, bool),
}

pub type Events = Rc<RefCell<Vec<Event>>>;

pub fn events() -> Events {
    Rc::new(RefCell::new(Vec::new()))
}

/// Error returned by failing fakes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeError;

impl pwm::Error for FakeError {
    fn kind(&self) -> pwm::ErrorKind {
        pwm::ErrorKind::Other
    }
}

impl digital::Error for FakeError {
    fn kind(&self) -> digital::ErrorKind {
        digital::ErrorKind::Other
    }
}

/// Microphone replaying a fixed list of readings, cycling when exhausted.
pub struct FakeMic {
    events: Events,
    readings: Vec<u16>,
    fail_at: Vec<usize>,
    reads: usize,
}

impl FakeMic {
    pub fn new(events: &Events, readings: Vec<u16>) -> Self {
        Self {
            events: Rc::clone(events),
            readings,
            fail_at: Vec::new(),
            reads: 0,
        }
    }

    /// Make the read with this index (0-based, across runs) fail
    pub fn failing_at(mut self, indices: &[usize]) -> Self {
        self.fail_at.extend_from_slice(indices);
        self
    }
}

impl AnalogInput for FakeMic {
    type Error = FakeError;

    fn read_raw(&mut self) -> Result<u16, FakeError> {
        self.events.borrow_mut().push(Event::AdcRead);
        let index = self.reads;
        self.reads += 1;

        if self.fail_at.contains(&index) {
            return Err(FakeError);
        }
        Ok(self.readings[index % self.readings.len()])
    }
}

/// PWM channel recording every duty write
pub struct FakePwm {
    events: Events,
    channel: Channel,
    fail: bool,
}

impl FakePwm {
    pub fn new(events: &Events, channel: Channel) -> Self {
        Self {
            events: Rc::clone(events),
            channel,
            fail: false,
        }
    }

    pub fn failing(mut self) -> Self {
        self.fail = true;
        self
    }
}

impl pwm::ErrorType for FakePwm {
    type Error = FakeError;
}

impl SetDutyCycle for FakePwm {
    fn max_duty_cycle(&self) -> u16 {
        1023
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), FakeError> {
        if self.fail {
            return Err(FakeError);
        }
        self.events.borrow_mut().push(Event::Duty(self.channel, duty));
        Ok(())
    }
}

/// LED pin recording level changes
pub struct FakePin {
    events: Events,
    led: Led,
}

impl FakePin {
    pub fn new(events: &Events, led: Led) -> Self {
        Self {
            events: Rc::clone(events),
            led,
        }
    }
}

impl digital::ErrorType for FakePin {
    type Error = FakeError;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), FakeError> {
        self.events.borrow_mut().push(Event::Led(self.led, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), FakeError> {
        self.events.borrow_mut().push(Event::Led(self.led, true));
        Ok(())
    }
}

/// Delay that returns immediately and logs the requested microseconds
pub struct FakeDelay {
    events: Events,
}

impl FakeDelay {
    pub fn new(events: &Events) -> Self {
        Self {
            events: Rc::clone(events),
        }
    }
}

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.events.borrow_mut().push(Event::Delay(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        self.events.borrow_mut().push(Event::Delay(us));
    }
}

pub type FakePeripherals = RecorderPeripherals<FakeMic, FakePwm, FakePin, FakeDelay>;

/// Full set of fakes around one microphone
pub fn peripherals(events: &Events, mic: FakeMic) -> FakePeripherals {
    RecorderPeripherals {
        mic,
        left: FakePwm::new(events, Channel::Left),
        right: FakePwm::new(events, Channel::Right),
        capture_led: FakePin::new(events, Led::Capture),
        playback_led: FakePin::new(events, Led::Playback),
        delay: FakeDelay::new(events),
    }
}

/// Three-sample recording: 3 Hz for one second
pub fn three_sample_config() -> RecorderConfig {
    RecorderConfig {
        sample_rate: 3,
        duration_seconds: 1,
        alpha: 0.1,
        output_resolution: 1023,
    }
}

pub fn count(events: &Events, pred: impl Fn(&Event) -> bool) -> usize {
    events.borrow().iter().filter(|e| pred(e)).count()
}
