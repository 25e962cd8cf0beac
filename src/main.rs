//! RustVoiceRecorder - Main entry point
//!
//! Button A records a clip, button B plays it back. Everything else is
//! peripheral setup:
//! 1. Take peripherals, start the UART log drain
//! 2. ADC for the microphone, two LEDC channels at 10 bits, two LEDs
//! 3. Poll both buttons, debounce, run the matching pipeline
//!
//! A run busy-waits on `Ets` for the whole clip, so the idle task is starved
//! for `config::DURATION_SECONDS`. `sdkconfig.defaults` raises
//! `CONFIG_ESP_TASK_WDT_TIMEOUT_S` above that; keep it there if the clip
//! length grows.

/// Version string (set by build.rs, includes git hash)
const VERSION: &str = env!("VERSION_STRING");

#[cfg(target_os = "espidf")]
mod firmware {
    use core::cell::UnsafeCell;

    use esp_idf_svc::hal::adc::attenuation::DB_11;
    use esp_idf_svc::hal::adc::oneshot::config::AdcChannelConfig;
    use esp_idf_svc::hal::adc::oneshot::{AdcChannelDriver, AdcDriver};
    use esp_idf_svc::hal::delay::{Ets, FreeRtos};
    use esp_idf_svc::hal::gpio::{OutputPin, PinDriver, Pull};
    use esp_idf_svc::hal::ledc::config::TimerConfig;
    use esp_idf_svc::hal::ledc::{LedcDriver, LedcTimerDriver, Resolution};
    use esp_idf_svc::hal::peripherals::Peripherals;
    use esp_idf_svc::hal::prelude::*;

    use rust_voice_recorder::config::MAX_SAMPLES;
    use rust_voice_recorder::hal::esp::MicInput;
    use rust_voice_recorder::uart_logger::{init_uart_logger, uart_logger_task, UartLoggerConfig};
    use rust_voice_recorder::{
        rt_info, rt_warn, AudioBuffer, FaultRegistry, Recorder, RecorderConfig,
        RecorderPeripherals, SharedState, Transport, LOG_STREAM,
    };

    /// Wait after a press before starting, lets the contacts settle.
    const DEBOUNCE_MS: u32 = 200;

    /// Button poll interval, keeps the idle task fed.
    const POLL_MS: u32 = 10;

    // Wrapper to make UnsafeCell Sync for the static recording buffer.
    // SAFETY: the buffer is handed out exactly once, to the recorder.
    #[repr(transparent)]
    struct SyncCell<T>(UnsafeCell<T>);
    unsafe impl<T> Sync for SyncCell<T> {}

    impl<T> SyncCell<T> {
        const fn new(value: T) -> Self {
            Self(UnsafeCell::new(value))
        }
    }

    // 5 s @ 16 kHz = 160 KB, too big for any task stack.
    static AUDIO_BUFFER: SyncCell<AudioBuffer<MAX_SAMPLES>> = SyncCell::new(AudioBuffer::new());
    static TRANSPORT: Transport = Transport::new();
    static FAULTS: FaultRegistry = FaultRegistry::new();

    /// Take the recording buffer (call once at startup)
    fn take_audio_buffer() -> &'static mut AudioBuffer<MAX_SAMPLES> {
        // SAFETY: only run() calls this, once, before the dispatch loop.
        unsafe { &mut *AUDIO_BUFFER.0.get() }
    }

    pub fn run() -> Result<(), Box<dyn std::error::Error>> {
        esp_idf_svc::sys::link_patches();

        let peripherals = Peripherals::take()?;
        let pins = peripherals.pins;

        // Log drain first so startup messages reach the UART
        let mut uart = init_uart_logger(peripherals.uart1, pins.gpio6, &UartLoggerConfig::default())?;
        std::thread::Builder::new()
            .name("uart-log".into())
            .stack_size(4096)
            .spawn(move || uart_logger_task(&mut uart))?;

        // Microphone: ADC1 on GPIO4, full 0-3.1 V span
        let adc = AdcDriver::new(peripherals.adc1)?;
        let adc_config = AdcChannelConfig {
            attenuation: DB_11,
            ..Default::default()
        };
        let mic = MicInput::new(AdcChannelDriver::new(&adc, pins.gpio4, &adc_config)?);

        // Speakers: one 10-bit timer, two channels
        let timer = LedcTimerDriver::new(
            peripherals.ledc.timer0,
            &TimerConfig::default()
                .frequency(20.kHz().into())
                .resolution(Resolution::Bits10),
        )?;
        let left = LedcDriver::new(peripherals.ledc.channel0, &timer, pins.gpio10)?;
        let right = LedcDriver::new(peripherals.ledc.channel1, &timer, pins.gpio21)?;

        let capture_led = PinDriver::output(pins.gpio13.downgrade_output())?;
        let playback_led = PinDriver::output(pins.gpio11.downgrade_output())?;

        let mut btn_record = PinDriver::input(pins.gpio5)?;
        btn_record.set_pull(Pull::Up)?;
        let mut btn_play = PinDriver::input(pins.gpio7)?;
        btn_play.set_pull(Pull::Up)?;

        let shared = SharedState {
            transport: &TRANSPORT,
            faults: &FAULTS,
            log: &LOG_STREAM,
        };
        let mut recorder = Recorder::new(
            RecorderConfig::default(),
            take_audio_buffer(),
            RecorderPeripherals {
                mic,
                left,
                right,
                capture_led,
                playback_led,
                delay: Ets,
            },
            shared,
        )?;

        rt_info!(LOG_STREAM, 0, "{}", super::VERSION);

        loop {
            // Buttons are active low
            if btn_record.is_low() {
                FreeRtos::delay_ms(DEBOUNCE_MS);
                if let Err(e) = recorder.record() {
                    rt_warn!(LOG_STREAM, 0, "record rejected: {}", e);
                }
            }

            if btn_play.is_low() {
                FreeRtos::delay_ms(DEBOUNCE_MS);
                if let Err(e) = recorder.play() {
                    rt_warn!(LOG_STREAM, 0, "play rejected: {}", e);
                }
            }

            FreeRtos::delay_ms(POLL_MS);
        }
    }
}

#[cfg(target_os = "espidf")]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    firmware::run()
}

#[cfg(not(target_os = "espidf"))]
fn main() {
    eprintln!("{}: firmware image, build for an ESP-IDF target (xtensa-esp32s3-espidf)", VERSION);
}
