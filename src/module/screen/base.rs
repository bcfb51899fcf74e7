//! Common Screen Functions
//!

use std::thread;
use std::time;

use crate::module::catalog::Catalog;
use crate::module::classify::{Detection, TransportError, UploadRequest};
use crate::module::device::Device;
use crate::module::input::UiEvent;
use crate::module::screen::{AppState, Services};

/// States of the identify flow shared by the camera and gallery screens.
#[derive(Debug, Clone, PartialEq)]
pub enum Flow {
    Idle,
    Acquiring,
    AwaitingResult,
    ResultReady,
    Error,
}

/// Identify-flow state owned by a capture/pick screen.
///
/// At most one upload outcome is tracked at a time: a new acquisition or a
/// reset discards whatever came before.
#[derive(Debug, Clone)]
pub struct IdentifyState {
    pub flow: Flow,
    pub result: Option<Detection>,
    pub description: Option<String>,
    pub details_open: bool,
    pub pending: Option<u64>, // Epoch of the in-flight upload, if any
}

impl Default for IdentifyState {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentifyState {
    pub fn new() -> Self {
        Self {
            flow: Flow::Idle,
            result: None,
            description: None,
            details_open: false,
            pending: None,
        }
    }

    /// Back to Idle, dropping the previous result and any in-flight upload.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

/// Caption line for a presented result.
pub fn result_caption(detection: &Detection) -> String {
    format!("Objeto: {}", detection.name)
}

/// Caption line for a presented confidence.
pub fn confidence_caption(detection: &Detection) -> String {
    format!("Confianza: {:.2}%", detection.confidence * 100.0)
}

/// Narrated phrase for a fresh detection.
pub fn detection_phrase(detection: &Detection) -> String {
    format!(
        "Se detectó {} con una confianza de {:.2} por ciento.",
        detection.name,
        detection.confidence * 100.0
    )
}

/// True when an upload outcome no longer belongs to the current interaction.
///
/// Navigation away, a reset and a new acquisition all bump the epoch, so a
/// late response is detected here and dropped instead of mutating a screen
/// the user has already left.
pub fn is_stale(id: &IdentifyState, state: &AppState, epoch: u64) -> bool {
    id.pending != Some(epoch) || state.epoch != epoch
}

/// Launch the upload worker for an acquired image.
///
/// The worker posts its outcome back on the app channel stamped with the
/// epoch it was launched under.
pub fn spawn_upload(request: UploadRequest, epoch: u64, services: &Services) {
    let classifier = services.classifier.clone();
    let tx = services.tx.clone();
    thread::spawn(move || {
        let outcome = classifier.submit(&request);
        // The receiver is gone only during shutdown
        let _ = tx.send(UiEvent::Prediction { epoch, outcome });
    });
}

/// Fold an upload outcome into the identify flow.
///
/// `none_msg` and `fail_msg` carry the screen-specific phrasing. Exactly one
/// narration comes out of every outcome.
pub fn apply_prediction(
    id: &mut IdentifyState,
    outcome: &Result<Vec<Detection>, TransportError>,
    device: &mut Device,
    none_msg: &str,
    fail_msg: &str,
) {
    id.pending = None;
    match outcome {
        Ok(detections) => match detections.first() {
            Some(first) => {
                id.flow = Flow::ResultReady;
                id.result = Some(first.clone());
                log::info!("{}", result_caption(first));
                log::info!("{}", confidence_caption(first));
                device.speak(&detection_phrase(first));
            }
            None => {
                id.flow = Flow::ResultReady;
                id.result = None;
                log::info!("No Detections");
                device.speak(none_msg);
            }
        },
        Err(e) => {
            id.flow = Flow::Error;
            id.result = None;
            log::error!("Prediction Failed: {}", e);
            device.speak(fail_msg);
        }
    }
}

/// Open the details view, re-resolving and narrating the description.
pub fn open_details(
    id: &mut IdentifyState,
    device: &mut Device,
    catalog: &Catalog,
    missing_msg: &str,
) {
    device.buzz();
    id.details_open = true;
    match &id.result {
        Some(detection) => {
            let description = catalog.describe(&detection.name).to_string();
            device.speak(&format!(
                "Información del objeto. {}. {}",
                detection.name, description
            ));
            id.description = Some(description);
        }
        None => device.speak(missing_msg),
    }
}

/// Close the details view, keeping the stored result.
pub fn close_details(id: &mut IdentifyState, device: &mut Device) {
    id.details_open = false;
    device.speak("Información cerrada");
}

/// Narrate a transition and give the utterance a head start before the
/// screen switch.
pub fn announce_nav(device: &mut Device, text: &str, delay_ms: u64) {
    device.buzz();
    device.speak(text);
    thread::sleep(time::Duration::from_millis(delay_ms));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::module::screen::Screens;
    use std::fs;

    fn silent_device(root: &str) -> Device {
        fs::create_dir_all(root).unwrap();
        let mut conf = crate::module::util::conf::toml::load(root);
        conf.speech.enabled = false;
        conf.haptic.enabled = false;
        Device::new(&conf)
    }

    fn mouse() -> Detection {
        Detection {
            name: String::from("Mouse"),
            confidence: 0.97,
        }
    }

    #[test]
    fn caption_test() {
        assert_eq!(result_caption(&mouse()), "Objeto: Mouse");
        assert_eq!(confidence_caption(&mouse()), "Confianza: 97.00%");
        assert_eq!(
            detection_phrase(&mouse()),
            "Se detectó Mouse con una confianza de 97.00 por ciento."
        );
    }

    #[test]
    fn apply_prediction_result_test() {
        let mut device = silent_device("/tmp/natellytest/base_result/");
        let mut id = IdentifyState::new();
        id.flow = Flow::AwaitingResult;
        id.pending = Some(1);

        apply_prediction(
            &mut id,
            &Ok(vec![mouse()]),
            &mut device,
            "No se detectó ningún objeto.",
            "Error al contactar al servidor.",
        );

        assert_eq!(id.flow, Flow::ResultReady);
        assert_eq!(id.result, Some(mouse()));
        assert_eq!(id.pending, None);
        assert_eq!(
            device.narrator.last(),
            Some("Se detectó Mouse con una confianza de 97.00 por ciento.")
        );
    }

    #[test]
    fn apply_prediction_empty_test() {
        let mut device = silent_device("/tmp/natellytest/base_empty/");
        let mut id = IdentifyState::new();
        id.flow = Flow::AwaitingResult;
        id.pending = Some(1);

        apply_prediction(
            &mut id,
            &Ok(vec![]),
            &mut device,
            "No se detectó ningún objeto.",
            "Error al contactar al servidor.",
        );

        assert_eq!(id.flow, Flow::ResultReady);
        assert_eq!(id.result, None);
        assert_eq!(device.narrator.last(), Some("No se detectó ningún objeto."));
    }

    #[test]
    fn apply_prediction_error_test() {
        let mut device = silent_device("/tmp/natellytest/base_error/");
        let mut id = IdentifyState::new();
        id.flow = Flow::AwaitingResult;
        id.result = Some(mouse());
        id.pending = Some(1);

        let outcome = Err(TransportError::Image(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        )));
        apply_prediction(
            &mut id,
            &outcome,
            &mut device,
            "No se detectó ningún objeto.",
            "Error al contactar al servidor.",
        );

        assert_eq!(id.flow, Flow::Error);
        assert_eq!(id.result, None);
        assert_eq!(
            device.narrator.last(),
            Some("Error al contactar al servidor.")
        );
    }

    #[test]
    fn details_round_trip_test() {
        let mut device = silent_device("/tmp/natellytest/base_details/");
        let catalog = Catalog::new();
        let mut id = IdentifyState::new();
        id.flow = Flow::ResultReady;
        id.result = Some(mouse());

        open_details(&mut id, &mut device, &catalog, "No hay información.");
        assert!(id.details_open);
        assert_eq!(
            id.description.as_deref(),
            Some("Dispositivo para interactuar con la computadora.")
        );
        assert_eq!(
            device.narrator.last(),
            Some("Información del objeto. Mouse. Dispositivo para interactuar con la computadora.")
        );

        close_details(&mut id, &mut device);
        assert!(!id.details_open);
        // Closing keeps the stored result
        assert_eq!(id.flow, Flow::ResultReady);
        assert_eq!(id.result, Some(mouse()));
        assert_eq!(device.narrator.last(), Some("Información cerrada"));
    }

    #[test]
    fn details_without_result_test() {
        let mut device = silent_device("/tmp/natellytest/base_nodetails/");
        let catalog = Catalog::new();
        let mut id = IdentifyState::new();

        open_details(&mut id, &mut device, &catalog, "No hay información.");
        assert!(id.details_open);
        assert_eq!(id.description, None);
        assert_eq!(device.narrator.last(), Some("No hay información."));
    }

    #[test]
    fn reset_clears_everything_test() {
        let mut id = IdentifyState::new();
        id.flow = Flow::ResultReady;
        id.result = Some(mouse());
        id.description = Some(String::from("desc"));
        id.details_open = true;
        id.pending = Some(7);

        id.reset();
        assert_eq!(id.flow, Flow::Idle);
        assert_eq!(id.result, None);
        assert_eq!(id.description, None);
        assert!(!id.details_open);
        assert_eq!(id.pending, None);
    }

    #[test]
    fn is_stale_test() {
        fs::create_dir_all("/tmp/natellytest/base_stale/").unwrap();
        let conf = crate::module::util::conf::toml::load("/tmp/natellytest/base_stale/");
        let mut state = AppState::new(&conf);
        let mut id = IdentifyState::new();

        let epoch = state.next_epoch();
        id.pending = Some(epoch);
        assert!(!is_stale(&id, &state, epoch));

        // Navigation away invalidates the outcome
        state.navigate(Screens::Menu);
        assert!(is_stale(&id, &state, epoch));

        // So does a reset of the screen itself
        let mut state = AppState::new(&conf);
        let epoch = state.next_epoch();
        id.pending = Some(epoch);
        id.reset();
        assert!(is_stale(&id, &state, epoch));
    }
}
