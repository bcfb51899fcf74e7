//! Welcome Carousel Screen
//!

use crate::module::device::Device;
use crate::module::input::{Button, UiEvent};
use crate::module::screen::{base, AppState, ScreenHandler, Screens, Services};

// Spoken captions of the carousel, in order.
const SLIDES: [&str; 2] = [
    "Bienvenido a Natelly, tu asistente de ayuda visual. Pulsa el botón siguiente para continuar.",
    "Identifica objetos fácilmente con un solo clic. Pulsa el botón central para empezar.",
];

// Head start for the send-off phrase before the menu takes over.
const START_DELAY_MS: u64 = 800;

/// Welcome carousel state.
pub struct Welcome {
    slide: usize,
}

impl Welcome {
    pub fn new() -> Self {
        Self { slide: 0 }
    }
}

impl Default for Welcome {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHandler for Welcome {
    fn enter(&mut self, _state: &mut AppState, device: &mut Device, _services: &Services) {
        self.slide = 0;
        device.speak(SLIDES[self.slide]);
    }

    fn handle(
        &mut self,
        event: &UiEvent,
        state: &mut AppState,
        device: &mut Device,
        _services: &Services,
    ) {
        match event {
            UiEvent::Tap(Button::Next) => {
                // Clamped, like the source carousel: no wrap-around
                if self.slide + 1 < SLIDES.len() {
                    self.slide += 1;
                }
                device.tick();
                device.speak(SLIDES[self.slide]);
            }
            UiEvent::Tap(Button::Prev) => {
                self.slide = self.slide.saturating_sub(1);
                device.tick();
                device.speak(SLIDES[self.slide]);
            }
            UiEvent::Tap(Button::Select) => {
                if self.slide + 1 == SLIDES.len() {
                    base::announce_nav(device, "Empezar", START_DELAY_MS);
                    state.navigate(Screens::Menu);
                } else {
                    device.speak(SLIDES[self.slide]);
                }
            }
            UiEvent::Tap(Button::Back) => (),
            UiEvent::Prediction { .. } => (),
        }
    }
}
