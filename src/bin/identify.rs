//! One-shot identification of an image file.
//!
//! Bench utility: sends a single photo to the classification service and
//! prints what the device would narrate, skipping the button UI.

use std::env;
use std::path::PathBuf;
use std::process::exit;

use natelly::module::catalog::Catalog;
use natelly::module::classify::{Classifier, UploadRequest};

// Default service endpoint, same as the generated configuration.
const DEFAULT_BASE_URL: &str = "http://172.200.240.238:8080";

fn main() {
    let mut args = env::args().skip(1);
    let image = match args.next() {
        Some(path) => PathBuf::from(path),
        None => {
            eprintln!("usage: identify <image> [base-url]");
            exit(2);
        }
    };
    let base_url = args.next().unwrap_or_else(|| String::from(DEFAULT_BASE_URL));

    let classifier = Classifier::new(&base_url);
    let catalog = Catalog::new();
    match classifier.submit(&UploadRequest::photo(image)) {
        Ok(detections) => match detections.first() {
            Some(first) => {
                println!("Objeto: {}", first.name);
                println!("Confianza: {:.2}%", first.confidence * 100.0);
                println!("{}", catalog.describe(&first.name));
            }
            None => println!("No se detectó ningún objeto."),
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            exit(1);
        }
    }
}
