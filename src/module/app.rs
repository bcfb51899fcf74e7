//! Provide Loop for the User Interface.
//!

use std::sync::mpsc;
use std::thread;
use std::thread::JoinHandle;

use crate::module::catalog::Catalog;
use crate::module::classify::Classifier;
use crate::module::device::Device;
use crate::module::input;
use crate::module::input::UiEvent;
use crate::module::screen::{
    about::About, camera::CameraScreen, gallery::GalleryScreen, menu::Menu, welcome::Welcome,
    AppState, ScreenHandler, Screens, Services,
};
use crate::module::util::init::NatellyProperty;

/// The five screen handlers, routed by the active screen.
pub struct ScreenSet {
    pub welcome: Welcome,
    pub menu: Menu,
    pub camera: CameraScreen,
    pub gallery: GalleryScreen,
    pub about: About,
}

impl Default for ScreenSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ScreenSet {
    pub fn new() -> Self {
        Self {
            welcome: Welcome::new(),
            menu: Menu::new(),
            camera: CameraScreen::new(),
            gallery: GalleryScreen::new(),
            about: About::new(),
        }
    }

    /// Announce the active screen.
    pub fn enter(&mut self, state: &mut AppState, device: &mut Device, services: &Services) {
        match state.screen {
            Screens::Welcome => self.welcome.enter(state, device, services),
            Screens::Menu => self.menu.enter(state, device, services),
            Screens::Camera => self.camera.enter(state, device, services),
            Screens::Gallery => self.gallery.enter(state, device, services),
            Screens::About => self.about.enter(state, device, services),
        }
    }

    /// Route one event to the active screen, announcing any screen change.
    pub fn handle(
        &mut self,
        event: &UiEvent,
        state: &mut AppState,
        device: &mut Device,
        services: &Services,
    ) {
        let before = state.screen;
        match state.screen {
            Screens::Welcome => self.welcome.handle(event, state, device, services),
            Screens::Menu => self.menu.handle(event, state, device, services),
            Screens::Camera => self.camera.handle(event, state, device, services),
            Screens::Gallery => self.gallery.handle(event, state, device, services),
            Screens::About => self.about.handle(event, state, device, services),
        }
        if state.screen != before {
            self.enter(state, device, services);
        }
    }
}

/// Start the interaction thread.
///
/// One thread owns every screen's state; button taps and upload outcomes
/// arrive serialized on the channel, so no screen ever sees two events at
/// once.
pub fn run(property: NatellyProperty) -> JoinHandle<()> {
    thread::spawn(move || {
        // Event channel: button taps and upload outcomes
        let (tx, rx) = mpsc::channel();
        let _input_handler = input::listen(&property.conf.pin, tx.clone());

        // Process-wide capabilities, built once and borrowed by every screen
        let mut device = Device::new(&property.conf);
        let services = Services {
            classifier: Classifier::new(&property.conf.server.base_url),
            catalog: Catalog::new(),
            tx,
            property: property.clone(),
        };

        let mut screens = ScreenSet::new();
        let mut state = AppState::new(&property.conf);

        log::debug!("Interaction Thread Started");
        screens.enter(&mut state, &mut device, &services);
        for event in rx.iter() {
            screens.handle(&event, &mut state, &mut device, &services);
        }
        log::debug!("Interaction Thread Exit Loop");
    })
}
