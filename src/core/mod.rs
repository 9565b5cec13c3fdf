//! Core library components.
//!
//! Secret resolution, app settings, configuration and the sample functions.

pub mod config;
pub mod constants;
pub mod diagnostics;
pub mod functions;
pub mod secrets;
pub mod settings;
