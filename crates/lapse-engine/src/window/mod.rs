//! Window + runtime loop.
//!
//! Owns the `winit` EventLoop and Window, paces redraws and hands each frame
//! its timing.

mod runtime;

pub use runtime::{FramePacing, Runtime, RuntimeConfig, RuntimeCtx};
