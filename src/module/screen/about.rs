//! About / Tutorial Screen
//!

use crate::module::device::Device;
use crate::module::input::{Button, UiEvent};
use crate::module::screen::{base, AppState, ScreenHandler, Screens, Services};

/// One tutorial step: the short title narrated while cycling, and the full
/// walkthrough narrated on confirmation.
struct Step {
    title: &'static str,
    full_text: &'static str,
}

const STEPS: [Step; 4] = [
    Step {
        title: "Pantalla Principal",
        full_text: "Pantalla Principal. Recorre las opciones para identificar objetos: tomar foto, elegir de la galería o escuchar estas instrucciones. Consejos útiles: Usa los botones anterior y siguiente para moverte, Confirma con el botón central, Regresa al menú con el botón de volver",
    },
    Step {
        title: "Tomar Fotos de Objetos",
        full_text: "Tomar Fotos de Objetos. Captura objetos con la cámara para que el modelo de inteligencia artificial los identifique. Consejos útiles: Posiciona el objeto frente a la cámara, Pulsa el botón central para capturar, El modelo identificará automáticamente el objeto, Confirma sobre el resultado para conocer más",
    },
    Step {
        title: "Cargar Fotos de Objetos",
        full_text: "Cargar Fotos de Objetos. Selecciona imágenes guardadas en la galería del dispositivo para que sean analizadas por el modelo. Consejos útiles: Recorre las fotos con los botones anterior y siguiente, Confirma con el botón central para enviar la foto, El modelo procesará la imagen automáticamente, Recibe la identificación del objeto detectado",
    },
    Step {
        title: "Modelo de Inteligencia Artificial",
        full_text: "Modelo de Inteligencia Artificial. Utiliza un modelo entrenado para identificar y clasificar objetos en las imágenes. Consejos útiles: El modelo fue entrenado con miles de imágenes, Puede identificar múltiples tipos de objetos, Proporciona información detallada sobre cada objeto, La precisión mejora con imágenes claras y bien iluminadas",
    },
];

const BACK_DELAY_MS: u64 = 500;

/// Tutorial browser state.
pub struct About {
    step: usize,
}

impl About {
    pub fn new() -> Self {
        Self { step: 0 }
    }
}

impl Default for About {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHandler for About {
    fn enter(&mut self, _state: &mut AppState, device: &mut Device, _services: &Services) {
        self.step = 0;
        device.speak("Instrucciones de uso");
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
                self.step = (self.step + 1) % STEPS.len();
                device.tick();
                device.speak(STEPS[self.step].title);
            }
            UiEvent::Tap(Button::Prev) => {
                self.step = (self.step + STEPS.len() - 1) % STEPS.len();
                device.tick();
                device.speak(STEPS[self.step].title);
            }
            UiEvent::Tap(Button::Select) => {
                device.buzz();
                device.speak(STEPS[self.step].full_text);
            }
            UiEvent::Tap(Button::Back) => {
                base::announce_nav(device, "Regresando al menú principal", BACK_DELAY_MS);
                state.navigate(Screens::Menu);
            }
            UiEvent::Prediction { .. } => (),
        }
    }
}
