//! Camera Functions
//!

use rscam::{Camera, Config};
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use thiserror::Error;

use crate::module::util::init::NatellyProperty;

/// Errors opening or driving the capture device.
///
/// An `Open` failure is the device-side equivalent of a denied camera
/// permission: the screen announces it and offers a retry.
#[derive(Debug, Error)]
pub enum CameraError {
    #[error("camera unavailable: {0}")]
    Open(#[from] std::io::Error),
    #[error("camera rejected configuration: {0:?}")]
    Start(rscam::Error),
}

/// Represents a V4L2 camera configuration and capture functionality.
///
pub struct V4l2Camera {
    cap: Camera,               // The camera instance for capturing frames.
    property: NatellyProperty, // Configuration properties for the camera.
}

impl V4l2Camera {
    /// Creates a new V4L2 camera instance with the specified properties.
    ///
    /// # Arguments
    ///
    /// * `property` - The camera configuration properties.
    ///
    /// # Returns
    ///
    /// A `V4l2Camera` instance, or a `CameraError` when the device can't be
    /// opened or started.
    ///
    pub fn new(property: NatellyProperty) -> Result<Self, CameraError> {
        let device = if property.conf.camera.video_idx < 0 {
            String::from("/dev/video0")
        } else {
            format!("/dev/video{}", property.conf.camera.video_idx)
        };
        let mut cap = Camera::new(&device)?;

        // Configure and start the camera with specified settings.
        cap.start(&Config {
            interval: (1, 30), // 30 fps.
            resolution: (
                property.conf.camera.width as u32,
                property.conf.camera.height as u32,
            ),
            format: b"MJPG",
            nbuffers: 1,
            ..Default::default()
        })
        .map_err(CameraError::Start)?;

        Ok(Self { cap, property })
    }

    /// Captures a frame from the camera and saves it to a file.
    ///
    /// Grabs a few throwaway frames first so the driver does not hand back a
    /// stale buffer, then writes the capture to the tmp path and returns it.
    pub fn capture(&self) -> Result<PathBuf, CameraError> {
        for _ in 0..self.property.conf.camera.grab_times {
            let _ = self.cap.capture(); // Grab a frame to reduce delay.
        }
        let frame = self.cap.capture()?;

        let path = PathBuf::from(&self.property.path.img.capture);
        let mut file = fs::File::create(&path)?;
        file.write_all(&frame[..])?;
        Ok(path)
    }
}
