//! UART log output.
//!
//! Drains [`crate::LOG_STREAM`] to a TX-only UART. Requires an external
//! USB-UART adapter (CH340, CP2102, etc).
//!
//! # Hardware Setup
//!
//! ```text
//! ESP32-S3 GPIO6 (TX) ──────▶ USB-UART RX
//!                              └─▶ PC Serial Monitor
//! ```

use crate::logging::{format_to_buffer, LogEntry};

#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::gpio;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::peripheral::Peripheral;
#[cfg(target_os = "espidf")]
use esp_idf_svc::hal::uart::{self, UartTxDriver};

/// UART configuration for logging.
pub struct UartLoggerConfig {
    pub baud_rate: u32,
    pub tx_pin: u8,
}

impl Default for UartLoggerConfig {
    fn default() -> Self {
        Self {
            baud_rate: 115200,
            tx_pin: 6,
        }
    }
}

/// Format log entry as `[timestamp_us] LEVEL: message\n`.
///
/// Returns the number of bytes written into `buf`.
pub fn format_log_entry(entry: &LogEntry, buf: &mut [u8]) -> usize {
    format_to_buffer(
        buf,
        format_args!(
            "[{:10}] {}: {}\n",
            entry.timestamp_us,
            entry.level.as_str(),
            entry.message()
        ),
    )
}

/// Initialize UART1 TX-only for logging output.
#[cfg(target_os = "espidf")]
pub fn init_uart_logger<'d>(
    uart: impl Peripheral<P = uart::UART1> + 'd,
    tx_pin: impl Peripheral<P = impl gpio::OutputPin> + 'd,
    config: &UartLoggerConfig,
) -> Result<UartTxDriver<'d>, esp_idf_svc::sys::EspError> {
    let uart_config = uart::config::Config::default()
        .baudrate(esp_idf_svc::hal::units::Hertz(config.baud_rate));

    UartTxDriver::new(
        uart,
        tx_pin,
        Option::<gpio::AnyIOPin>::None, // CTS
        Option::<gpio::AnyIOPin>::None, // RTS
        &uart_config,
    )
}

/// UART log drain loop.
///
/// Writes pending entries, reports drops every 10 seconds, sleeps when idle.
#[cfg(target_os = "espidf")]
pub fn uart_logger_task(uart: &mut UartTxDriver<'_>) -> ! {
    use crate::LOG_STREAM;

    let mut format_buf = [0u8; 256];
    let mut last_dropped_report = 0i64;

    loop {
        let mut work_done = false;

        while let Some(entry) = LOG_STREAM.drain() {
            let len = format_log_entry(&entry, &mut format_buf);
            let _ = uart.write(&format_buf[..len]);
            work_done = true;
        }

        let now = unsafe { esp_idf_svc::sys::esp_timer_get_time() };
        if now - last_dropped_report > 10_000_000 {
            let dropped = LOG_STREAM.dropped();
            if dropped > 0 {
                let len = format_to_buffer(
                    &mut format_buf,
                    format_args!("[WARN] Dropped log entries: {}\n", dropped),
                );
                let _ = uart.write(&format_buf[..len]);
                LOG_STREAM.reset_dropped();
            }
            last_dropped_report = now;
        }

        if !work_done {
            unsafe {
                esp_idf_svc::sys::vTaskDelay(10);
            }
        }
    }
}
