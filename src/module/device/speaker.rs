//! Speech Narration Handler.
//!
//! All narration goes through a single slot: speaking a new phrase stops the
//! active utterance first, so the user never hears two overlapping voices and
//! stale guidance is cut short instead of queued.

use std::process::{Child, Command, Stdio};

use crate::module::util::conf::Speech;

/// Single-slot speech synthesizer frontend.
///
/// Phrases are voiced by an `espeak-ng` child process. When the synthesizer
/// is disabled in the config, or the binary is missing on the machine, the
/// narrator goes mute but keeps recording the last utterance.
pub struct Narrator {
    conf: Speech,
    enabled: bool,
    current: Option<Child>,
    last: Option<String>,
}

impl Narrator {
    /// Creates a new Narrator instance.
    ///
    /// # Arguments
    ///
    /// * `conf` - Speech section of the configuration.
    ///
    pub fn new(conf: &Speech) -> Self {
        let enabled = conf.enabled && probe();
        Self {
            conf: conf.clone(),
            enabled,
            current: None,
            last: None,
        }
    }

    /// Speak a phrase, replacing any active utterance.
    pub fn speak(&mut self, text: &str) {
        self.stop();
        self.last = Some(text.to_string());
        if !self.enabled {
            return;
        }
        let spawned = Command::new("espeak-ng")
            .arg("-v")
            .arg(&self.conf.voice)
            .arg("-s")
            .arg(self.conf.rate.to_string())
            .arg("-p")
            .arg(self.conf.pitch.to_string())
            .arg(text)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        match spawned {
            Ok(child) => self.current = Some(child),
            Err(e) => log::warn!("Can't spawn espeak-ng: {}", e),
        }
    }

    /// Stop the active utterance, if any.
    pub fn stop(&mut self) {
        if let Some(mut child) = self.current.take() {
            // A child that already finished reports an error here; harmless.
            let _ = child.kill();
            let _ = child.wait();
        }
    }

    /// Last phrase handed to the synthesizer.
    pub fn last(&self) -> Option<&str> {
        self.last.as_deref()
    }
}

/// Check the synthesizer binary once at construction.
fn probe() -> bool {
    match Command::new("espeak-ng")
        .arg("--version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
    {
        Ok(status) => status.success(),
        Err(e) => {
            log::warn!("Speech synthesis unavailable: {}", e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn muted() -> Narrator {
        Narrator::new(&Speech {
            enabled: false,
            voice: String::from("es"),
            rate: 160,
            pitch: 50,
        })
    }

    #[test]
    fn last_utterance_test() {
        let mut narrator = muted();
        assert_eq!(narrator.last(), None);

        narrator.speak("Abriendo cámara");
        assert_eq!(narrator.last(), Some("Abriendo cámara"));

        // A new phrase replaces, never queues
        narrator.speak("Capturando foto");
        assert_eq!(narrator.last(), Some("Capturando foto"));
    }

    #[test]
    fn stop_without_utterance_test() {
        let mut narrator = muted();
        narrator.stop();
        assert_eq!(narrator.last(), None);
    }
}
