use crate::coords::Vec3;

/// Circular orbit of a light around a moving center.
///
/// The orbit is driven purely by frame time: `advance(dt)` steps the angle,
/// `position(center)` places the light relative to whatever it circles.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LightOrbit {
    /// Horizontal distance from the center.
    pub radius: f32,

    /// Height above the center.
    pub height: f32,

    /// Angular speed in radians per second. Positive values orbit clockwise
    /// when viewed from above.
    pub speed: f32,

    /// Current angle in radians.
    pub angle: f32,
}

impl LightOrbit {
    pub const fn new(radius: f32, height: f32, speed: f32) -> Self {
        Self {
            radius,
            height,
            speed,
            angle: 0.0,
        }
    }

    /// Steps the orbit by `dt` seconds.
    #[inline]
    pub fn advance(&mut self, dt: f32) {
        self.angle -= self.speed * dt;
    }

    /// Light position for the current angle around `center`.
    pub fn position(&self, center: Vec3) -> Vec3 {
        let (sin, cos) = self.angle.sin_cos();
        center + Vec3::new(cos * self.radius, self.height, sin * self.radius)
    }
}

impl Default for LightOrbit {
    fn default() -> Self {
        Self::new(20.0, 10.0, 0.7)
    }
}
