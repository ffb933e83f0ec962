//! Serial link to the WiFi bridge module.
//!
//! The bridge is an AT-command modem flipped into transparent mode at
//! boot, after which the wire carries protocol frames only. Bring-up is
//! the single blocking phase of the firmware and is bounded by an
//! explicit timeout; on failure the controller keeps regulating locally
//! and only the network-error LED tells the difference.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: raw UART driver calls, RX bytes forwarded to the event
//! queue by `poll()`.
//! On host/test: `NullLink` discards writes and never receives.

use crate::app::ports::LinkPort;

/// Host-side stand-in. Bring-up succeeds so simulations exercise the
/// normal boot path.
pub struct NullLink;

impl NullLink {
    /// Nothing to forward on the host.
    pub fn poll(&mut self) {}
}

impl LinkPort for NullLink {
    fn bring_up(&mut self, _timeout_ms: u32) -> bool {
        log::info!("link(sim): bring-up skipped");
        true
    }

    fn write_byte(&mut self, _byte: u8) {}

    fn read_byte(&mut self, _timeout_ms: u32) -> Option<u8> {
        None
    }
}

#[cfg(target_os = "espidf")]
pub use espidf::EspSerialLink;

#[cfg(target_os = "espidf")]
mod espidf {
    use esp_idf_svc::sys::*;
    use log::{info, warn};

    use crate::app::ports::LinkPort;
    use crate::config::SERIAL_BAUD_RATE;
    use crate::error::{LinkError, Result};
    use crate::events;
    use crate::pins;

    /// FreeRTOS tick is 10 ms with the default configuration.
    const fn ms_to_ticks(ms: u32) -> u32 {
        ms / 10
    }

    const RX_DRIVER_BUFFER: i32 = 256;

    pub struct EspSerialLink {
        port: u8,
    }

    impl EspSerialLink {
        /// Install and configure the UART driver.
        pub fn new() -> Result<Self> {
            let port = pins::LINK_UART_PORT as u8;
            let cfg = uart_config_t {
                baud_rate: SERIAL_BAUD_RATE as i32,
                data_bits: uart_word_length_t_UART_DATA_8_BITS,
                parity: uart_parity_t_UART_PARITY_DISABLE,
                stop_bits: uart_stop_bits_t_UART_STOP_BITS_1,
                flow_ctrl: uart_hw_flowcontrol_t_UART_HW_FLOWCTRL_DISABLE,
                ..Default::default()
            };
            // SAFETY: called once from main() before the control loop.
            let rc = unsafe {
                let rc = uart_driver_install(port as i32, RX_DRIVER_BUFFER, 0, 0, core::ptr::null_mut(), 0);
                if rc != ESP_OK as i32 {
                    rc
                } else {
                    let rc = uart_param_config(port as i32, &cfg);
                    if rc != ESP_OK as i32 {
                        rc
                    } else {
                        uart_set_pin(
                            port as i32,
                            pins::LINK_UART_TX_GPIO,
                            pins::LINK_UART_RX_GPIO,
                            UART_PIN_NO_CHANGE,
                            UART_PIN_NO_CHANGE,
                        )
                    }
                }
            };
            if rc != ESP_OK as i32 {
                return Err(LinkError::DriverInstall(rc).into());
            }
            info!("link: UART{} ready at {} bit/s", port, SERIAL_BAUD_RATE);
            Ok(Self { port })
        }

        /// Forward every pending RX byte to the event queue. Called from
        /// the main loop between control cycles.
        pub fn poll(&mut self) {
            while let Some(byte) = self.read_byte(0) {
                if !events::push_rx_byte(byte) {
                    warn!("link: RX queue full, byte dropped");
                }
            }
        }

        fn write_all(&mut self, data: &[u8]) {
            // SAFETY: driver installed in new(); uart_write_bytes copies
            // the buffer before returning.
            unsafe {
                uart_write_bytes(
                    self.port as i32,
                    data.as_ptr() as *const core::ffi::c_void,
                    data.len(),
                );
            }
        }

        /// Scan the RX stream for `needle` until `deadline_us`. The
        /// matcher restarts on mismatch, like the incremental scan the
        /// bridge answers were designed for.
        fn expect(&mut self, needle: &[u8], deadline_us: i64) -> bool {
            let mut matched = 0;
            // SAFETY: esp_timer_get_time is a monotonic counter read.
            while (unsafe { esp_timer_get_time() }) < deadline_us {
                let Some(byte) = self.read_byte(10) else {
                    continue;
                };
                if byte == needle[matched] {
                    matched += 1;
                    if matched == needle.len() {
                        return true;
                    }
                } else {
                    matched = 0;
                }
            }
            false
        }
    }

    impl LinkPort for EspSerialLink {
        /// Flip the bridge into transparent mode: exit any previous
        /// session, reset, then open the pass-through. The module joins
        /// its stored network on its own during the reset.
        fn bring_up(&mut self, timeout_ms: u32) -> bool {
            // SAFETY: monotonic counter read.
            let deadline_us =
                unsafe { esp_timer_get_time() } + i64::from(timeout_ms) * 1_000;

            self.write_all(b"+++");
            // The escape sequence needs a guard time before the next command.
            unsafe { vTaskDelay(ms_to_ticks(1_100)) };

            self.write_all(b"AT+RST\r\n");
            if !self.expect(b"ready", deadline_us) {
                return false;
            }

            self.write_all(b"AT+CIPMODE=1\r\n");
            if !self.expect(b"OK", deadline_us) {
                return false;
            }

            self.write_all(b"AT+CIPSEND\r\n");
            self.expect(b">", deadline_us)
        }

        fn write_byte(&mut self, byte: u8) {
            self.write_all(&[byte]);
        }

        fn read_byte(&mut self, timeout_ms: u32) -> Option<u8> {
            let mut byte = 0u8;
            // SAFETY: driver installed in new(); single reader.
            let read = unsafe {
                uart_read_bytes(
                    self.port as i32,
                    &mut byte as *mut u8 as *mut core::ffi::c_void,
                    1,
                    ms_to_ticks(timeout_ms),
                )
            };
            if read == 1 {
                Some(byte)
            } else {
                None
            }
        }
    }
}
