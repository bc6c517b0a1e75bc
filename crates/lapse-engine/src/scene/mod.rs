//! Scene animation.
//!
//! Pure, frame-time-driven state for the demo scene. Nothing here touches
//! the platform or a graphics API.

mod orbit;

pub use orbit::LightOrbit;
