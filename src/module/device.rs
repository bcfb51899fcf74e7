//! Provide Device Control.
//!
pub mod haptic;
pub mod speaker;

use crate::module::util::conf::Config;

/// Device aggregator
///
pub struct Device {
    pub narrator: speaker::Narrator,
    pub haptic: haptic::HapticMotor,
}

/// Device's methods
///
impl Device {
    /// Device constructor
    ///
    pub fn new(conf: &Config) -> Self {
        Self {
            narrator: speaker::Narrator::new(&conf.speech),
            haptic: haptic::HapticMotor::new(&conf.haptic),
        }
    }

    /// Narrate a phrase, replacing any active utterance.
    ///
    pub fn speak(&mut self, text: &str) {
        self.narrator.speak(text);
    }

    /// Strong pulse acknowledging an action.
    ///
    pub fn buzz(&mut self) {
        let ms = self.haptic.feedback_ms;
        self.haptic.pulse(ms);
    }

    /// Soft pulse marking a focus move.
    ///
    pub fn tick(&mut self) {
        let ms = self.haptic.focus_ms;
        self.haptic.pulse(ms);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn silent_device_test() {
        fs::create_dir_all("/tmp/natellytest/device/").unwrap();
        let mut conf = crate::module::util::conf::toml::load("/tmp/natellytest/device/");
        conf.speech.enabled = false;
        conf.haptic.enabled = false;

        let mut device = Device::new(&conf);
        device.buzz();
        device.tick();
        device.speak("Menú principal");
        assert_eq!(device.narrator.last(), Some("Menú principal"));
    }
}
