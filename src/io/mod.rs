//! Input/output, configuration and errors

/// Command-line interface
pub mod cli;
/// Scene constants and configuration
pub mod configuration;
/// Error types
pub mod error;
/// Pointer event scripts
pub mod events;
/// PNG preview export
pub mod image;
/// Replay progress display
pub mod progress;
/// Render snapshot export
pub mod snapshot;
