//! Camera Capture Screen
//!

use crate::module::classify::UploadRequest;
use crate::module::device::Device;
use crate::module::input::{Button, UiEvent};
use crate::module::screen::base::{self, Flow, IdentifyState};
use crate::module::screen::{AppState, ScreenHandler, Screens, Services};
use crate::module::vision::camera::V4l2Camera;
use crate::module::vision::gallery;

const INSTRUCTION: &str =
    "Posiciona el objeto frente a la cámara y pulsa el botón central para capturar";
const PERMISSION: &str = "Necesitamos acceso a la cámara para tomar fotos";
const NONE_MSG: &str = "No se detectó ningún objeto.";
const FAIL_MSG: &str = "Error al contactar al servidor.";
const DETAILS_MISSING: &str = "No hay información del objeto detectado.";
const BACK_DELAY_MS: u64 = 500;

/// Camera capture screen state.
///
/// The capture device is opened lazily on entry; a failed open is announced
/// and the next confirmation retries, mirroring a denied-then-granted camera
/// permission.
pub struct CameraScreen {
    cam: Option<V4l2Camera>,
    id: IdentifyState,
}

impl CameraScreen {
    pub fn new() -> Self {
        Self {
            cam: None,
            id: IdentifyState::new(),
        }
    }

    /// Open the capture device, announcing the outcome.
    fn open_camera(&mut self, device: &mut Device, services: &Services) {
        match V4l2Camera::new(services.property.clone()) {
            Ok(cam) => {
                self.cam = Some(cam);
                device.speak(INSTRUCTION);
            }
            Err(e) => {
                log::error!("Camera Open Failed: {}", e);
                device.speak(PERMISSION);
            }
        }
    }

    /// Capture a frame and hand it to the upload worker.
    fn capture(&mut self, state: &mut AppState, device: &mut Device, services: &Services) {
        device.buzz();
        device.speak("Capturando foto");
        self.id.reset();
        self.id.flow = Flow::Acquiring;

        let captured = match self.cam.as_ref() {
            Some(cam) => cam.capture(),
            None => return,
        };
        match captured {
            Ok(path) => {
                // Keep a copy so the gallery has it
                match gallery::store(&path, &services.property.path.dir.img) {
                    Ok(stored) => log::debug!("Capture Stored: {:?}", stored),
                    Err(e) => log::warn!("Can't store capture: {}", e),
                }
                let epoch = state.next_epoch();
                self.id.pending = Some(epoch);
                self.id.flow = Flow::AwaitingResult;
                log::info!("Analizando...");
                base::spawn_upload(UploadRequest::photo(path), epoch, services);
            }
            Err(e) => {
                log::error!("Capture Failed: {}", e);
                device.speak("No se pudo tomar la foto. Inténtalo de nuevo.");
                self.id.reset();
            }
        }
    }
}

impl Default for CameraScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenHandler for CameraScreen {
    fn enter(&mut self, _state: &mut AppState, device: &mut Device, services: &Services) {
        self.id.reset();
        if self.cam.is_none() {
            self.open_camera(device, services);
        } else {
            device.speak(INSTRUCTION);
        }
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
                } else if self.cam.is_none() {
                    device.buzz();
                    self.open_camera(device, services);
                } else {
                    self.capture(state, device, services);
                }
            }
            UiEvent::Tap(Button::Next) => {
                // Retake, discarding the previous result and any in-flight upload
                device.buzz();
                device.speak("Toma otra foto");
                state.next_epoch();
                self.id.reset();
            }
            UiEvent::Tap(Button::Prev) => (),
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
