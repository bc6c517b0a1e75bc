//! Coordinate types shared by scene code.
//!
//! World space is right-handed with +Y up.

mod vec3;

pub use vec3::Vec3;
