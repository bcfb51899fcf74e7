//! Config Handler.

use serde::{Deserialize, Serialize};

/// Provides TOML config file handling.
pub mod toml {

    use super::DEFAULT_CONFIG;
    use crate::module::define;
    use std::fs::File;
    use std::io::prelude::*;
    use std::path::Path;

    /// Loads a configuration file from the given directory.
    /// If not found, generates a default config file.
    ///
    /// # Arguments
    ///
    /// * `dir` - The directory where the configuration file is located or should be created.
    ///
    pub fn load(dir: &str) -> super::Config {
        // Check if the config file exists
        let path = Path::new(dir).join(define::path::CONF_FILE);
        let exist: bool = path.is_file();

        if !exist {
            // Create the default config if it doesn't exist
            let config: super::Config = toml::from_str(DEFAULT_CONFIG).unwrap();
            let toml_str = toml::to_string(&config).unwrap();
            let mut file = File::create(&path).unwrap();
            file.write_all(toml_str.as_bytes()).unwrap();
        }

        // Load the config
        let conf_str: String = std::fs::read_to_string(&path).unwrap();
        let setting: Result<super::Config, toml::de::Error> = toml::from_str(&conf_str);

        match setting {
            Ok(conf) => conf,
            Err(e) => panic!("Failed to parse TOML: {}", e),
        }
    }
}

/// Represents the configuration data structure.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    pub system: System,
    pub server: Server,
    pub camera: Camera,
    pub speech: Speech,
    pub haptic: Haptic,
    pub pin: Pin,
}

/// Represents system-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct System {
    pub start_screen: String,
    pub lang: String,
}

/// Represents the classification service endpoint.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Server {
    pub base_url: String,
}

/// Represents camera-related configuration parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Camera {
    pub video_idx: i8,
    pub grab_times: u8,
    pub width: u16,
    pub height: u16,
}

/// Represents speech synthesis parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Speech {
    pub enabled: bool,
    pub voice: String,
    pub rate: u16,
    pub pitch: u8,
}

/// Represents the vibration motor parameters.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Haptic {
    pub enabled: bool,
    pub motor_pin: u8,
    pub feedback_ms: u64,
    pub focus_ms: u64,
}

/// Represents button pin assignments.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Pin {
    pub prev_pin: u8,
    pub next_pin: u8,
    pub select_pin: u8,
    pub back_pin: u8,
}

// Default configuration data in TOML format
const DEFAULT_CONFIG: &str = r#"
[system]
  start_screen = 'welcome' # First screen after boot ('welcome', 'menu')
  lang = 'es' # Narration language ('es' for Spanish)

[server]
  base_url = 'http://172.200.240.238:8080' # Classification service endpoint

[camera]
  video_idx = -1 # Video index (-1 for default)
  grab_times = 3 # Number of throwaway grabs before the real capture
  width = 1280 # Image width
  height = 720 # Image height

[speech]
  enabled = true # Disable to run silent (development machines)
  voice = 'es' # espeak-ng voice
  rate = 160 # Words per minute
  pitch = 50 # Pitch (0-99)

[haptic]
  enabled = true # Disable when no motor is wired
  motor_pin = 12 # Vibration motor control pin
  feedback_ms = 100 # Pulse length for actions
  focus_ms = 50 # Pulse length for focus moves

[pin]
  prev_pin = 5 # Previous / cycle-back button
  next_pin = 6 # Next / cycle-forward button
  select_pin = 13 # Select / capture button
  back_pin = 19 # Back button
"#;
