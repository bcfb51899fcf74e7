//! Button Input Module
//!
//! This module turns the four physical push buttons into UI events. The
//! buttons are wired active-low with pull-ups, polled from a dedicated
//! thread, and every accepted press lands on the app channel as a tap.

use rppal::gpio::Gpio;
use std::sync::mpsc::Sender;
use std::thread;
use std::thread::JoinHandle;
use std::time;

use crate::module::classify::{Detection, TransportError};
use crate::module::util::conf::Pin;

// Poll period and post-tap settle time.
const POLL_MS: u64 = 20;
const DEBOUNCE_MS: u64 = 200;

/// The four physical buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Button {
    Prev,
    Next,
    Select,
    Back,
}

/// Everything the app loop reacts to.
pub enum UiEvent {
    /// A button press.
    Tap(Button),
    /// Outcome of an upload worker, stamped with the epoch it belongs to.
    Prediction {
        epoch: u64,
        outcome: Result<Vec<Detection>, TransportError>,
    },
}

/// Listens to the buttons and sends taps via a channel.
///
/// When GPIO is unavailable (development machine) the thread logs a warning
/// and exits; the rest of the app stays alive for bench use.
pub fn listen(conf: &Pin, tx: Sender<UiEvent>) -> JoinHandle<()> {
    let pins = [
        (Button::Prev, conf.prev_pin),
        (Button::Next, conf.next_pin),
        (Button::Select, conf.select_pin),
        (Button::Back, conf.back_pin),
    ];
    thread::spawn(move || {
        log::debug!("Input Thread Started");
        let gpio = match Gpio::new() {
            Ok(gpio) => gpio,
            Err(e) => {
                log::warn!("Button input unavailable: {}", e);
                return;
            }
        };

        let mut inputs = Vec::new();
        for (button, pin) in pins {
            match gpio.get(pin) {
                Ok(pin) => inputs.push((button, pin.into_input_pullup())),
                Err(e) => log::warn!("Can't claim pin for {:?}: {}", button, e),
            }
        }

        loop {
            for (button, pin) in inputs.iter() {
                if pin.is_low() {
                    log::debug!("Tap: {:?}", button);
                    if tx.send(UiEvent::Tap(*button)).is_err() {
                        log::debug!("Input Thread Exit Loop");
                        return;
                    }
                    // Settle, then wait for release so one press is one tap
                    thread::sleep(time::Duration::from_millis(DEBOUNCE_MS));
                    while pin.is_low() {
                        thread::sleep(time::Duration::from_millis(POLL_MS));
                    }
                }
            }
            thread::sleep(time::Duration::from_millis(POLL_MS));
        }
    })
}
