//! Hardware Abstraction Layer for RustVoiceRecorder.
//!
//! The core talks to `embedded-hal` traits only. Peripheral setup lives in
//! the firmware binary; business logic stays in core modules, HAL is just
//! I/O.

use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::fault::{FaultCode, FaultRegistry};
use crate::sample::{Sample, SILENCE};

#[cfg(target_os = "espidf")]
pub mod esp;

/// Analog microphone input.
///
/// `embedded-hal` 1.0 has no ADC trait, so the recorder defines its own.
/// Implementations return values already in the output range `[0, R]`
/// or wider; the capture pipeline clamps.
pub trait AnalogInput {
    /// Driver error type
    type Error: core::fmt::Debug;

    /// Take one conversion
    fn read_raw(&mut self) -> Result<u16, Self::Error>;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    type Error = T::Error;

    #[inline]
    fn read_raw(&mut self) -> Result<u16, Self::Error> {
        (**self).read_raw()
    }
}

/// Left and right transducers.
///
/// There is no stereo separation; both always receive the same level.
pub struct Speakers<O> {
    pub left: O,
    pub right: O,
}

impl<O: SetDutyCycle> Speakers<O> {
    pub fn new(left: O, right: O) -> Self {
        Self { left, right }
    }

    /// Drive both channels to `level`, left first.
    ///
    /// A failed write is counted and the other channel is still written.
    #[inline]
    pub fn write(&mut self, level: Sample, faults: &FaultRegistry) {
        if self.left.set_duty_cycle(level).is_err() {
            faults.record(FaultCode::PwmWrite);
        }
        if self.right.set_duty_cycle(level).is_err() {
            faults.record(FaultCode::PwmWrite);
        }
    }

    /// Drive both channels to the minimum level.
    ///
    /// PWM holds its last duty cycle forever, so skipping this leaves a tone.
    #[inline]
    pub fn silence(&mut self, faults: &FaultRegistry) {
        self.write(SILENCE, faults);
    }
}

/// The two status LEDs.
pub struct Indicators<I> {
    /// Lit while capturing
    pub capturing: I,
    /// Lit while playing
    pub playing: I,
}

impl<I: OutputPin> Indicators<I> {
    pub fn new(capturing: I, playing: I) -> Self {
        Self { capturing, playing }
    }

    pub fn set_capturing(&mut self, on: bool, faults: &FaultRegistry) {
        set_pin(&mut self.capturing, on, faults);
    }

    pub fn set_playing(&mut self, on: bool, faults: &FaultRegistry) {
        set_pin(&mut self.playing, on, faults);
    }
}

fn set_pin<I: OutputPin>(pin: &mut I, on: bool, faults: &FaultRegistry) {
    let result = if on { pin.set_high() } else { pin.set_low() };
    if result.is_err() {
        faults.record(FaultCode::Indicator);
    }
}
