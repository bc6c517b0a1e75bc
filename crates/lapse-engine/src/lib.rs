//! Lapse engine crate.
//!
//! Frame timing (pausable timer, frame clock, FPS counter) and the winit
//! runtime loop that feeds it to an application.

pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod scene;
