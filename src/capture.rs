//! Capture pipeline.
//!
//! One ADC read per clock tick, low-pass filtered, stored in order. The loop
//! always runs to the end of the buffer; there is no partial capture.
//!
//! # Rules
//!
//! - Exactly one `read_raw()` per tick, exactly `len` ticks
//! - No allocation, no logging inside the loop
//! - A failed read is counted and fed to the filter as a silent reading,
//!   the loop goes on

use embedded_hal::delay::DelayNs;

use crate::audio::filter::LowPassFilter;
use crate::clock::SampleClock;
use crate::fault::{FaultCode, FaultRegistry};
use crate::hal::AnalogInput;
use crate::sample::{Sample, SILENCE};

/// Fill `samples` from `mic`, one filtered reading per tick.
///
/// `filter` should be fresh (zero history); its state does not outlive the
/// call. Returns the number of failed reads during this run.
pub fn capture<A, D>(
    mic: &mut A,
    mut filter: LowPassFilter,
    samples: &mut [Sample],
    clock: &mut SampleClock<D>,
    faults: &FaultRegistry,
) -> u32
where
    A: AnalogInput,
    D: DelayNs,
{
    let mut failed_reads = 0u32;

    for slot in samples.iter_mut() {
        let raw = match mic.read_raw() {
            Ok(raw) => raw,
            Err(_) => {
                faults.record(FaultCode::AdcRead);
                failed_reads = failed_reads.wrapping_add(1);
                SILENCE
            }
        };

        *slot = filter.apply(raw);
        clock.tick();
    }

    failed_reads
}
