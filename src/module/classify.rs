//! Remote Classification Client
//!
//! The device does no local inference: each captured or picked photo is sent
//! as a multipart upload to the classification service, which answers with a
//! JSON list of detections. Exactly one attempt is made per user action; any
//! transport-level failure surfaces as a single [`TransportError`] and the
//! user retries by capturing or picking again.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

// Prediction endpoint, relative to the configured base URL.
const PREDICT_PATH: &str = "/predict/";

/// One detection as reported by the service.
///
/// The response carries more fields (`class_id`, `descripcion`, `bbox`);
/// only the display name and the confidence are consumed on the device.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Detection {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(default)]
    pub confidence: f32,
}

/// Decoded body of a prediction response.
#[derive(Debug, Deserialize)]
struct PredictResponse {
    // A missing list means the same as an empty one: nothing recognized.
    #[serde(default)]
    detections: Vec<Detection>,
}

/// One upload, built per capture or pick and discarded after the response.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub path: PathBuf,
    pub file_name: String,
    pub mime: String,
}

impl UploadRequest {
    /// Request for a fresh camera capture.
    pub fn photo(path: PathBuf) -> Self {
        Self {
            path,
            file_name: String::from("photo.jpg"),
            mime: String::from("image/jpeg"),
        }
    }

    /// Request for a gallery pick.
    pub fn gallery(path: PathBuf) -> Self {
        Self {
            path,
            file_name: String::from("gallery_photo.jpg"),
            mime: String::from("image/jpeg"),
        }
    }
}

/// Anything that keeps a prediction from coming back.
///
/// Callers do not branch on the variant: a timeout, a refused connection, a
/// non-2xx status and a garbled body all end in the same spoken message. The
/// variants exist so the log tells them apart.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("image unreadable: {0}")]
    Image(#[from] std::io::Error),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Blocking client for the classification service.
#[derive(Debug, Clone)]
pub struct Classifier {
    client: reqwest::blocking::Client,
    url: String,
}

impl Classifier {
    /// Build a client for the given service base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            url: format!("{}{}", base_url.trim_end_matches('/'), PREDICT_PATH),
        }
    }

    /// Submit one image and return the reported detections.
    ///
    /// The detections come back in the service's ranking order; an empty list
    /// means the service answered but recognized nothing. Callers consume
    /// only the first element.
    pub fn submit(&self, request: &UploadRequest) -> Result<Vec<Detection>, TransportError> {
        let bytes = std::fs::read(&request.path)?;
        let part = reqwest::blocking::multipart::Part::bytes(bytes)
            .file_name(request.file_name.clone())
            .mime_str(&request.mime)?;
        let form = reqwest::blocking::multipart::Form::new().part("file", part);

        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        log::debug!("Server Response: {}", body);
        let decoded: PredictResponse = serde_json::from_str(&body)?;
        Ok(decoded.detections)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    // Realistic body: the service also reports fields the device ignores.
    const MOUSE_BODY: &str = r#"{
        "detections": [
            {
                "class_id": 10,
                "nombre": "Mouse",
                "descripcion": "Dispositivo para interactuar con la computadora.",
                "confidence": 0.97,
                "bbox": [10.0, 20.0, 110.0, 220.0]
            },
            {
                "class_id": 15,
                "nombre": "Router",
                "descripcion": "Distribuye internet a múltiples dispositivos.",
                "confidence": 0.41,
                "bbox": [0.0, 0.0, 50.0, 50.0]
            }
        ]
    }"#;

    #[test]
    fn decode_detections_test() {
        let decoded: PredictResponse = serde_json::from_str(MOUSE_BODY).unwrap();
        assert_eq!(decoded.detections.len(), 2);
        assert_eq!(decoded.detections[0].name, "Mouse");
        assert!((decoded.detections[0].confidence - 0.97).abs() < f32::EPSILON);
    }

    #[test]
    fn decode_empty_and_absent_test() {
        let decoded: PredictResponse = serde_json::from_str(r#"{"detections": []}"#).unwrap();
        assert!(decoded.detections.is_empty());

        // An absent list decodes as empty rather than failing
        let decoded: PredictResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(decoded.detections.is_empty());
    }

    #[test]
    fn decode_missing_confidence_test() {
        let decoded: PredictResponse =
            serde_json::from_str(r#"{"detections": [{"nombre": "Puerta"}]}"#).unwrap();
        assert_eq!(decoded.detections[0].confidence, 0.0);
    }

    fn temp_image() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10]).unwrap();
        file
    }

    fn mock_server(template: ResponseTemplate) -> (tokio::runtime::Runtime, MockServer) {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(PREDICT_PATH))
                .respond_with(template)
                .mount(&server)
                .await;
            server
        });
        (rt, server)
    }

    #[test]
    fn submit_returns_detections_test() {
        let body: serde_json::Value = serde_json::from_str(MOUSE_BODY).unwrap();
        let (_rt, server) = mock_server(ResponseTemplate::new(200).set_body_json(body));

        let image = temp_image();
        let classifier = Classifier::new(&server.uri());
        let detections = classifier
            .submit(&UploadRequest::photo(image.path().to_path_buf()))
            .unwrap();

        assert_eq!(detections[0].name, "Mouse");
        assert!((detections[0].confidence - 0.97).abs() < f32::EPSILON);
    }

    #[test]
    fn submit_server_error_test() {
        let (_rt, server) = mock_server(ResponseTemplate::new(500));

        let image = temp_image();
        let classifier = Classifier::new(&server.uri());
        let outcome = classifier.submit(&UploadRequest::photo(image.path().to_path_buf()));

        assert!(matches!(outcome, Err(TransportError::Http(_))));
    }

    #[test]
    fn submit_malformed_body_test() {
        let (_rt, server) = mock_server(ResponseTemplate::new(200).set_body_string("not json"));

        let image = temp_image();
        let classifier = Classifier::new(&server.uri());
        let outcome = classifier.submit(&UploadRequest::gallery(image.path().to_path_buf()));

        assert!(matches!(outcome, Err(TransportError::Malformed(_))));
    }

    #[test]
    fn submit_unreadable_image_test() {
        let classifier = Classifier::new("http://127.0.0.1:9");
        let outcome = classifier.submit(&UploadRequest::photo(PathBuf::from(
            "/tmp/natellytest/no_such_image.jpg",
        )));

        assert!(matches!(outcome, Err(TransportError::Image(_))));
    }
}
