//! Configuration for flux-manager

pub mod settings;

pub use settings::Settings;
