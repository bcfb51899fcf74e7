//! Gallery Functions
//!
//! The gallery is the device's photo store: every camera capture is copied
//! here under a timestamped name, and the gallery screen cycles through it.

use image::ImageFormat;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use thiserror::Error;

/// Errors reading or preparing gallery images.
///
/// An `Io` failure on scan is the device-side equivalent of a denied gallery
/// permission.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("gallery unreadable: {0}")]
    Io(#[from] std::io::Error),
    #[error("image undecodable: {0}")]
    Image(#[from] image::ImageError),
}

/// List the gallery images, newest first.
pub fn scan(dir: &str) -> Result<Vec<PathBuf>, GalleryError> {
    let mut shots: Vec<(SystemTime, PathBuf)> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if !is_image(&path) {
            continue;
        }
        let modified = entry
            .metadata()?
            .modified()
            .unwrap_or(SystemTime::UNIX_EPOCH);
        shots.push((modified, path));
    }
    shots.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(shots.into_iter().map(|(_, path)| path).collect())
}

/// Store a capture into the gallery under a timestamped name.
pub fn store(src: &Path, dir: &str) -> Result<PathBuf, GalleryError> {
    let name = format!("{}.jpg", chrono::Local::now().format("%Y%m%d_%H%M%S_%3f"));
    let dest = Path::new(dir).join(name);
    fs::copy(src, &dest)?;
    Ok(dest)
}

/// Ensure an upload candidate is a JPEG.
///
/// The service expects a JPEG body. Camera captures already are; a gallery
/// pick may be a PNG, which gets re-encoded into the tmp upload path.
pub fn prepare_jpeg(src: &Path, tmp_upload: &str) -> Result<PathBuf, GalleryError> {
    if is_jpeg(src) {
        return Ok(src.to_path_buf());
    }
    let img = image::open(src)?;
    let dest = PathBuf::from(tmp_upload);
    img.save_with_format(&dest, ImageFormat::Jpeg)?;
    Ok(dest)
}

fn is_image(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg" | "png"),
        None => false,
    }
}

fn is_jpeg(path: &Path) -> bool {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => matches!(ext.to_ascii_lowercase().as_str(), "jpg" | "jpeg"),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::{thread, time};

    #[test]
    fn scan_newest_first_test() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();

        fs::File::create(dir.path().join("older.jpg"))
            .unwrap()
            .write_all(b"a")
            .unwrap();
        thread::sleep(time::Duration::from_millis(50));
        fs::File::create(dir.path().join("newer.png"))
            .unwrap()
            .write_all(b"b")
            .unwrap();
        // Non-images are skipped
        fs::File::create(dir.path().join("notes.txt"))
            .unwrap()
            .write_all(b"c")
            .unwrap();

        let shots = scan(dir_str).unwrap();
        assert_eq!(shots.len(), 2);
        assert_eq!(shots[0].file_name().unwrap(), "newer.png");
        assert_eq!(shots[1].file_name().unwrap(), "older.jpg");
    }

    #[test]
    fn scan_missing_dir_test() {
        assert!(scan("/tmp/natellytest/no_such_gallery/").is_err());
    }

    #[test]
    fn store_names_capture_test() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("capture.jpg");
        fs::File::create(&src).unwrap().write_all(b"jpeg").unwrap();

        let stored = store(&src, dir.path().to_str().unwrap()).unwrap();
        assert!(stored.is_file());
        assert_eq!(stored.extension().unwrap(), "jpg");

        let shots = scan(dir.path().to_str().unwrap()).unwrap();
        assert_eq!(shots.len(), 2); // the source and the stored copy
    }

    #[test]
    fn prepare_jpeg_passthrough_test() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("shot.jpg");
        fs::File::create(&src).unwrap().write_all(b"jpeg").unwrap();

        let prepared = prepare_jpeg(&src, "/tmp/natellytest/unused_upload.jpg").unwrap();
        assert_eq!(prepared, src);
    }

    #[test]
    fn prepare_jpeg_reencodes_png_test() {
        let dir = tempfile::tempdir().unwrap();
        let src = dir.path().join("pick.png");
        image::RgbImage::from_pixel(4, 4, image::Rgb([200, 10, 10]))
            .save(&src)
            .unwrap();

        let upload = dir.path().join("upload.jpg");
        let prepared = prepare_jpeg(&src, upload.to_str().unwrap()).unwrap();
        assert_eq!(prepared, upload);
        // The re-encoded file must decode as an image again
        assert!(image::open(&prepared).is_ok());
    }
}
