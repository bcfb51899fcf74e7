//! Gallery Picker Screen
//!

use std::path::PathBuf;

use crate::module::classify::UploadRequest;
use crate::module::device::Device;
use crate::module::input::{Button, UiEvent};
use crate::module::screen::base::{self, Flow, IdentifyState};
use crate::module::screen::{AppState, ScreenHandler, Screens, Services};
use crate::module::vision::gallery;

const INSTRUCTION: &str = "Selecciona una foto con el objeto para identificar";
const PERMISSION: &str = "Necesitamos acceso a la galería para seleccionar fotos";
const EMPTY: &str = "La galería está vacía. Toma una foto primero.";
const NONE_MSG: &str = "No se detectó ningún objeto en la imagen.";
const FAIL_MSG: &str = "Error al contactar al servidor desde galería.";
const DETAILS_MISSING: &str = "No se detectó información del objeto.";
const BACK_DELAY_MS: u64 = 500;

/// Gallery picker screen state.
///
/// The listing is refreshed on entry; the device's own captures populate it.
pub struct GalleryScreen {
    shots: Vec<PathBuf>,
    index: usize,
    id: IdentifyState,
}

impl GalleryScreen {
    pub fn new() -> Self {
        Self {
            shots: Vec::new(),
            index: 0,
            id: IdentifyState::new(),
        }
    }

    /// Reload the gallery listing, announcing problems.
    fn refresh(&mut self, device: &mut Device, services: &Services) {
        self.index = 0;
        match gallery::scan(&services.property.path.dir.img) {
            Ok(shots) => {
                self.shots = shots;
                if self.shots.is_empty() {
                    device.speak(EMPTY);
                }
            }
            Err(e) => {
                log::error!("Gallery Scan Failed: {}", e);
                self.shots = Vec::new();
                device.speak(PERMISSION);
            }
        }
    }

    /// Spoken position of the focused photo.
    fn position_phrase(&self) -> String {
        format!("Foto {} de {}", self.index + 1, self.shots.len())
    }

    /// Move the focus through the listing, wrapping at the ends.
    fn browse(&mut self, forward: bool, device: &mut Device) {
        if self.shots.is_empty() {
            device.speak(EMPTY);
            return;
        }
        let len = self.shots.len();
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
        device.tick();
        device.speak(&self.position_phrase());
    }

    /// Send the focused photo to the upload worker.
    fn pick(&mut self, state: &mut AppState, device: &mut Device, services: &Services) {
        if self.shots.is_empty() {
            // Retry affordance: the user may have captured photos meanwhile
            self.refresh(device, services);
            return;
        }
        device.buzz();
        self.id.reset();
        self.id.flow = Flow::Acquiring;

        let src = self.shots[self.index].clone();
        match gallery::prepare_jpeg(&src, &services.property.path.img.upload) {
            Ok(path) => {
                let epoch = state.next_epoch();
                self.id.pending = Some(epoch);
                self.id.flow = Flow::AwaitingResult;
                log::info!("Analizando...");
                base::spawn_upload(UploadRequest::gallery(path), epoch, services);
            }
            Err(e) => {
                log::error!("Pick Failed: {}", e);
                device.speak("No se pudo leer la imagen. Inténtalo de nuevo.");
                self.id.reset();
            }
        }
    }
}

impl Default for GalleryScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHandler for GalleryScreen {
    fn enter(&mut self, _state: &mut AppState, device: &mut Device, services: &Services) {
        self.id.reset();
        device.speak(INSTRUCTION);
        self.refresh(device, services);
    }

    fn handle(
        &mut self,
        event: &UiEvent,
        state: &mut AppState,
        device: &mut Device,
        services: &Services,
    ) {
        match event {
            UiEvent::Tap(Button::Select) => {
                if self.id.details_open {
                    base::close_details(&mut self.id, device);
                } else if self.id.flow == Flow::ResultReady {
                    base::open_details(&mut self.id, device, &services.catalog, DETAILS_MISSING);
                } else if self.id.flow == Flow::AwaitingResult {
                    // One outstanding request per screen; wait it out
                } else {
                    self.pick(state, device, services);
                }
            }
            UiEvent::Tap(Button::Next) => {
                if self.id.flow == Flow::ResultReady || self.id.flow == Flow::Error {
                    // Choose another, discarding the previous result
                    device.buzz();
                    device.speak("Elegir otra");
                    state.next_epoch();
                    self.id.reset();
                } else {
                    self.browse(true, device);
                }
            }
            UiEvent::Tap(Button::Prev) => {
                if self.id.flow == Flow::Idle {
                    self.browse(false, device);
                }
            }
            UiEvent::Tap(Button::Back) => {
                if self.id.details_open {
                    base::close_details(&mut self.id, device);
                } else {
                    base::announce_nav(device, "Regresando al menú principal", BACK_DELAY_MS);
                    state.navigate(Screens::Menu);
                }
            }
            UiEvent::Prediction { epoch, outcome } => {
                if base::is_stale(&self.id, state, *epoch) {
                    log::debug!("Stale Prediction Dropped. epoch: {}", epoch);
                    return;
                }
                base::apply_prediction(&mut self.id, outcome, device, NONE_MSG, FAIL_MSG);
            }
        }
    }
}
