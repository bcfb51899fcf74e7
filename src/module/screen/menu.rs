//! Main Menu Screen
//!

use crate::module::device::Device;
use crate::module::input::{Button, UiEvent};
use crate::module::screen::{base, AppState, ScreenHandler, Screens, Services};

/// One menu entry: what is narrated on focus, what is narrated when opening,
/// and where it leads.
struct MenuOption {
    title: &'static str,
    opening: &'static str,
    target: Screens,
}

const OPTIONS: [MenuOption; 3] = [
    MenuOption {
        title: "Tomemos una foto",
        opening: "Abriendo cámara",
        target: Screens::Camera,
    },
    MenuOption {
        title: "Carguemos una foto",
        opening: "Abriendo galería",
        target: Screens::Gallery,
    },
    MenuOption {
        title: "Cómo usar la app",
        opening: "Abriendo información",
        target: Screens::About,
    },
];

const PROMPT: &str = "Menú principal. ¿Cómo quieres subir la foto? Usa los botones para recorrer las opciones y el botón central para elegir.";

// Head start for the opening phrase before the next screen takes over.
const OPEN_DELAY_MS: u64 = 1000;

/// Main menu state.
pub struct Menu {
    focus: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self { focus: 0 }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHandler for Menu {
    fn enter(&mut self, _state: &mut AppState, device: &mut Device, _services: &Services) {
        self.focus = 0;
        device.speak(PROMPT);
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
                self.focus = (self.focus + 1) % OPTIONS.len();
                device.tick();
                device.speak(OPTIONS[self.focus].title);
            }
            UiEvent::Tap(Button::Prev) => {
                self.focus = (self.focus + OPTIONS.len() - 1) % OPTIONS.len();
                device.tick();
                device.speak(OPTIONS[self.focus].title);
            }
            UiEvent::Tap(Button::Select) => {
                let option = &OPTIONS[self.focus];
                base::announce_nav(device, option.opening, OPEN_DELAY_MS);
                state.navigate(option.target);
            }
            UiEvent::Tap(Button::Back) => {
                // Top level; repeat the prompt instead of leaving
                device.speak(PROMPT);
            }
            UiEvent::Prediction { .. } => (),
        }
    }
}
