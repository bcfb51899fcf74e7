//! This module contains all the sub-modules of the project.

pub mod app; // App module: Runs the interaction event loop.
pub mod catalog; // Catalog module: Static table of the known object classes.
pub mod classify; // Classify module: Upload client for the classification service.
pub mod define; // Definition module: Contains definitions and constants used throughout the project.
pub mod device; // Device module: Manages hardware devices and interactions.
pub mod input; // Input module: Turns button presses into UI events.
pub mod screen; // Screen module: Interaction screens and their state machines.
pub mod util; // Utility module: Provides various utility functions and helpers.
pub mod vision; // Vision module: Camera capture and gallery handling.
