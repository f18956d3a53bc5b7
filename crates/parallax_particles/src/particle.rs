//! A single decaying point.

/// A transient particle spawned by pointer movement.
///
/// Velocity is fixed at creation. Size shrinks every tick until it
/// reaches zero, at which point the field drops the particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// Viewport X.
    pub x: f32,
    /// Viewport Y.
    pub y: f32,
    /// X velocity (units per tick).
    pub vx: f32,
    /// Y velocity (units per tick).
    pub vy: f32,
    /// Disc radius.
    pub size: f32,
}

impl Particle {
    /// Creates a particle at a position with a fixed velocity.
    #[must_use]
    pub const fn new(x: f32, y: f32, vx: f32, vy: f32, size: f32) -> Self {
        Self { x, y, vx, vy, size }
    }

    /// Advances one tick: Euler step, then decay.
    ///
    /// Returns `true` while the particle is still alive.
    #[inline]
    pub fn advance(&mut self, decay_rate: f32) -> bool {
        self.x += self.vx;
        self.y += self.vy;
        self.size -= decay_rate;
        self.is_alive()
    }

    /// Is the radius still positive?
    #[inline]
    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.size > 0.0
    }

    /// Euclidean distance to a point.
    #[inline]
    #[must_use]
    pub fn distance_to(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}
