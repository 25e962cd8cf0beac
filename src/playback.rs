//! Playback pipeline.
//!
//! Same level to both channels once per tick, front to back, then one
//! silence write per channel. No seeking, looping or early exit.

use embedded_hal::delay::DelayNs;
use embedded_hal::pwm::SetDutyCycle;

use crate::clock::SampleClock;
use crate::fault::{FaultCode, FaultRegistry};
use crate::hal::Speakers;
use crate::sample::Sample;

/// Play `samples` on both speakers at the clock rate.
///
/// Returns the number of failed PWM writes during this run, silence writes
/// included.
pub fn playback<O, D>(
    samples: &[Sample],
    speakers: &mut Speakers<O>,
    clock: &mut SampleClock<D>,
    faults: &FaultRegistry,
) -> u32
where
    O: SetDutyCycle,
    D: DelayNs,
{
    let before = faults.count(FaultCode::PwmWrite);

    for &level in samples {
        speakers.write(level, faults);
        clock.tick();
    }

    speakers.silence(faults);

    faults.count(FaultCode::PwmWrite).wrapping_sub(before)
}
