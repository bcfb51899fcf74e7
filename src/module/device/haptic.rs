//! Vibration Motor Handler.

use rppal::gpio::{Gpio, OutputPin};
use std::{thread, time};

use crate::module::util::conf::Haptic;

/// Vibration motor behind a single GPIO pin.
///
/// The motor is optional hardware: disabled in the config, or a failed GPIO
/// init, leaves the pulses as no-ops so the rest of the device keeps working.
pub struct HapticMotor {
    pin: Option<OutputPin>,
    pub feedback_ms: u64,
    pub focus_ms: u64,
}

impl HapticMotor {
    /// Creates a new HapticMotor instance.
    ///
    /// # Arguments
    ///
    /// * `conf` - Haptic section of the configuration.
    ///
    pub fn new(conf: &Haptic) -> Self {
        let pin = if conf.enabled {
            match Gpio::new().and_then(|gpio| gpio.get(conf.motor_pin)) {
                Ok(pin) => Some(pin.into_output()),
                Err(e) => {
                    log::warn!("Haptic motor unavailable: {}", e);
                    None
                }
            }
        } else {
            None
        };
        Self {
            pin,
            feedback_ms: conf.feedback_ms,
            focus_ms: conf.focus_ms,
        }
    }

    /// Drive the motor for the given duration. Blocks for the pulse length.
    ///
    /// # Arguments
    ///
    /// * `ms` - Pulse length in milliseconds.
    ///
    pub fn pulse(&mut self, ms: u64) {
        if let Some(pin) = self.pin.as_mut() {
            pin.set_high();
            thread::sleep(time::Duration::from_millis(ms));
            pin.set_low();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_motor_is_noop_test() {
        let mut motor = HapticMotor::new(&Haptic {
            enabled: false,
            motor_pin: 12,
            feedback_ms: 100,
            focus_ms: 50,
        });
        // Must not block or panic without hardware
        motor.pulse(100);
        motor.pulse(50);
        assert_eq!(motor.feedback_ms, 100);
        assert_eq!(motor.focus_ms, 50);
    }
}
