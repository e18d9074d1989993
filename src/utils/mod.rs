//! Utility modules for flux-manager

pub mod errors;
pub mod logger;
pub mod prereqs;
pub mod progress;
pub mod prompt;

// Re-export commonly used items
pub use prereqs::{CommonPrereqs, Prerequisite};
pub use prompt::confirm;
