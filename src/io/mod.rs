//! Input/output operations, configuration and error handling

/// Command-line interface and session replay
pub mod cli;
/// Editor constants and defaults
pub mod configuration;
/// Error types shared by every module
pub mod error;
/// Board rendering and PNG export
pub mod image;
/// Session script parsing
pub mod script;
