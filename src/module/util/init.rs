//! This module is responsible for preparing the resources needed by the application, such as directories, configurations, logs, etc.
//!

pub mod resource {
    use super::NatellyProperty; // Import the NatellyProperty type from the parent module

    /// Initialize the application resources and return a NatellyProperty instance containing paths and configurations.
    ///
    pub fn init() -> NatellyProperty {
        // Prepare the app data directory by calling the create_app_sub_dir function from the dir submodule
        let paths = crate::module::util::path::dir::create_app_sub_dir();

        // Load the app configuration file by calling the load function from the toml submodule
        let conf = crate::module::util::conf::toml::load(&paths.dir.data);

        // Return a NatellyProperty instance that contains the paths and configurations
        NatellyProperty { path: paths, conf }
    }
}

/// This struct represents the properties of the app, such as paths and configurations.
///
#[derive(Debug, Clone)]
pub struct NatellyProperty {
    pub path: crate::module::util::path::NatellyPath, // The paths of the app resources
    pub conf: crate::module::util::conf::Config,      // The configurations of the app
}
