//! This module provides the interaction screens.
//!
//! Each screen is a small state machine driven by button taps and upload
//! outcomes. Screens never talk to hardware or the network directly: they
//! narrate and buzz through the [`Device`](crate::module::device::Device)
//! and reach the classifier, the catalog and the event channel through
//! [`Services`].

// Import the submodules for the interaction screens
pub mod about; // About / tutorial screen
pub mod base; // Shared identify-flow helpers
pub mod camera; // Camera capture screen
pub mod gallery; // Gallery picker screen
pub mod menu; // Main menu screen
pub mod welcome; // Welcome carousel screen

use std::sync::mpsc::Sender;

use super::{
    catalog::Catalog, classify::Classifier, device::Device, input::UiEvent,
    util::conf::Config, util::init::NatellyProperty,
};

/// Interaction screens.
#[derive(Debug, Clone, PartialEq, Copy)]
pub enum Screens {
    Welcome,
    Menu,
    Camera,
    Gallery,
    About,
}

impl Screens {
    /// Convert a string to a screen.
    pub fn from_string(s: &str) -> Screens {
        match s {
            "welcome" => Screens::Welcome,
            "menu" => Screens::Menu,
            "camera" => Screens::Camera,
            "gallery" => Screens::Gallery,
            "about" => Screens::About,
            _ => Screens::Welcome,
        }
    }
}

/// Shared capabilities handed to every screen.
///
/// One classifier, one catalog, one channel for the whole process; screens
/// borrow these instead of owning copies.
pub struct Services {
    pub classifier: Classifier,
    pub catalog: Catalog,
    pub tx: Sender<UiEvent>,
    pub property: NatellyProperty,
}

/// This struct represents the app-wide interaction state.
#[derive(Debug, Clone)]
pub struct AppState {
    pub screen: Screens, // Active screen
    pub epoch: u64,      // Guards in-flight uploads against staleness
}

impl AppState {
    /// Create a new AppState honoring the configured start screen.
    pub fn new(conf: &Config) -> Self {
        Self {
            screen: Screens::from_string(&conf.system.start_screen),
            epoch: 0,
        }
    }

    /// Move to another screen, invalidating any in-flight upload.
    pub fn navigate(&mut self, to: Screens) {
        self.epoch += 1;
        log::debug!("Navigate: {:?} -> {:?}", self.screen, to);
        self.screen = to;
    }

    /// Claim a fresh epoch for a new upload, invalidating older ones.
    pub fn next_epoch(&mut self) -> u64 {
        self.epoch += 1;
        self.epoch
    }
}

#[allow(unused_variables)]
/// Basement for screen handlers
pub trait ScreenHandler {
    /// Called once when the screen becomes active.
    fn enter(&mut self, state: &mut AppState, device: &mut Device, services: &Services) {}

    /// Called for every event while the screen is active.
    fn handle(
        &mut self,
        event: &UiEvent,
        state: &mut AppState,
        device: &mut Device,
        services: &Services,
    ) {
    }
}
