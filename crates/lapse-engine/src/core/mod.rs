//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop)
//! and the application driving it, plus the per-frame context handed over
//! on every redraw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
