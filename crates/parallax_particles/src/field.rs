//! Pointer-reactive particle field.
//!
//! ```text
//! pointer move ──► record pointer ──► spawn 1 particle
//!
//! tick:  clear ──► advance + decay + cull (one pass) ──► draw discs + links
//! ```
//!
//! Every tick is a full clear-and-redraw. Culling compacts the live set in
//! place with `retain_mut`, so every particle is visited exactly once and
//! removal never skips a neighbor.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::config::FieldConfig;
use crate::error::{FieldError, FieldResult};
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::stats::{FieldStats, TickStats};
use crate::surface::Surface;

/// Seed used when OS entropy is unavailable.
const FALLBACK_SEED: u64 = 0x5EED_CAFE_F00D_D00D;

/// The particle simulation and its drawing surface.
pub struct ParticleField<S: Surface> {
    /// Exclusively owned drawing surface.
    surface: S,
    /// Live particles, oldest first.
    particles: Vec<Particle>,
    /// Latest pointer position.
    pointer: PointerState,
    /// Spawn randomness.
    rng: ChaCha8Rng,
    /// Tuning.
    config: FieldConfig,
    /// Running totals.
    stats: FieldStats,
    /// Set while the population cap is evicting, so the warning logs once.
    over_cap: bool,
}

impl<S: Surface> ParticleField<S> {
    /// Creates a field drawing onto `surface`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidConfig`] when `config` fails validation.
    pub fn new(surface: S, config: FieldConfig) -> FieldResult<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(entropy_seed);
        tracing::debug!(
            width = surface.width(),
            height = surface.height(),
            seed,
            "particle field mounted"
        );

        Ok(Self {
            surface,
            particles: Vec::with_capacity(1024),
            pointer: PointerState::new(),
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            stats: FieldStats::default(),
            over_cap: false,
        })
    }

    /// Creates a field if the host produced a surface.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::SurfaceUnavailable`] for `None`, otherwise
    /// whatever [`ParticleField::new`] returns.
    pub fn mount(surface: Option<S>, config: FieldConfig) -> FieldResult<Self> {
        let surface = surface.ok_or(FieldError::SurfaceUnavailable)?;
        Self::new(surface, config)
    }

    /// Records the pointer and spawns exactly one particle under it.
    pub fn on_pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.set_position(x, y);
        self.spawn(x, y);
    }

    /// Resizes the surface to the viewport. Contents are cleared.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        tracing::debug!(width, height, "particle surface resized");
        self.surface.resize(width, height);
    }

    /// Runs one frame: clear, advance and cull, then draw.
    pub fn tick(&mut self) -> TickStats {
        self.surface.clear();

        let decay_rate = self.config.decay_rate;
        let before = self.particles.len();
        self.particles.retain_mut(|p| p.advance(decay_rate));
        let expired = before - self.particles.len();

        let mut tick = TickStats {
            alive: self.particles.len() as u32,
            expired: expired as u32,
            ..TickStats::default()
        };

        for particle in &self.particles {
            let linked = draw_particle(&mut self.surface, particle, &self.pointer, &self.config);
            tick.discs_drawn += 1;
            tick.links_drawn += u32::from(linked);
        }

        if let Some(max) = self.config.max_particles {
            if self.particles.len() < max {
                self.over_cap = false;
            }
        }

        self.stats.record_tick(tick);
        tracing::trace!(
            alive = tick.alive,
            expired = tick.expired,
            links = tick.links_drawn,
            "particle tick"
        );
        tick
    }

    /// Live particles, oldest first.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Latest pointer state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    /// The drawing surface.
    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Running statistics.
    #[must_use]
    pub fn stats(&self) -> FieldStats {
        self.stats
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// Drops every live particle without drawing.
    pub fn clear_particles(&mut self) {
        self.particles.clear();
        self.over_cap = false;
    }

    /// Consumes the field, returning its surface.
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn spawn(&mut self, x: f32, y: f32) {
        let size = self.rng.gen_range(self.config.size_min..self.config.size_max);
        let speed = self.config.speed;
        let (vx, vy) = if speed > 0.0 {
            (self.rng.gen_range(-speed..speed), self.rng.gen_range(-speed..speed))
        } else {
            (0.0, 0.0)
        };

        self.particles.push(Particle::new(x, y, vx, vy, size));
        self.stats.spawned += 1;
        self.enforce_cap();
    }

    fn enforce_cap(&mut self) {
        let Some(max) = self.config.max_particles else {
            return;
        };
        if self.particles.len() <= max {
            return;
        }

        let excess = self.particles.len() - max;
        self.particles.drain(..excess);
        self.stats.evicted += excess as u64;

        if !self.over_cap {
            self.over_cap = true;
            tracing::warn!(max, "particle cap reached, evicting oldest particles");
        }
    }
}

/// Draws one particle and, when close enough, its link to the pointer.
///
/// Returns `true` if a link was stroked.
fn draw_particle<S: Surface>(
    surface: &mut S,
    particle: &Particle,
    pointer: &PointerState,
    config: &FieldConfig,
) -> bool {
    surface.fill_circle(particle.x, particle.y, particle.size, config.fill);

    let (px, py) = pointer.position();
    if particle.distance_to(px, py) < config.link_distance {
        surface.stroke_line((particle.x, particle.y), (px, py), config.stroke);
        true
    } else {
        false
    }
}

fn entropy_seed() -> u64 {
    getrandom::u64().unwrap_or_else(|err| {
        tracing::warn!(%err, "OS entropy unavailable, using fixed particle seed");
        FALLBACK_SEED
    })
}
