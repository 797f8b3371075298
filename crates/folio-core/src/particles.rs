//! Ambient particle field.
//!
//! Ordinary particles live on a torus the size of the canvas: whatever leaves
//! one edge re-enters at the opposite one. Burst particles carry a lifetime and
//! are not wrapped; they are removed by id when their timer fires.

use crate::color::Color;
use crate::config::FieldParams;
use crate::constants::*;
use crate::pointer::PointerState;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;

/// Stable identity of a particle. Never reused, not even across resets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub id: ParticleId,
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Color,
    /// Remaining frames for burst particles; `None` for ambient ones.
    pub life: Option<u32>,
}

impl Particle {
    #[inline]
    pub fn is_transient(&self) -> bool {
        self.life.is_some()
    }
}

/// Number of ambient particles for a viewport `width` px wide.
#[inline]
pub fn particle_count_for_width(width: f64, params: &FieldParams) -> usize {
    if width.is_nan() || width <= 0.0 {
        return 0;
    }
    ((width / params.pixels_per_particle).floor() as usize).min(params.max_particles)
}

pub struct ParticleField {
    pub particles: Vec<Particle>,
    pub params: FieldParams,
    width: f32,
    height: f32,
    next_id: u64,
}

impl ParticleField {
    pub fn new(width: f32, height: f32, params: FieldParams, rng: &mut impl Rng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            params,
            width,
            height,
            next_id: 0,
        };
        field.populate(rng);
        field
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Replace every particle, transient ones included, with a fresh ambient set.
    pub fn resize(&mut self, width: f32, height: f32, rng: &mut impl Rng) {
        self.width = width;
        self.height = height;
        self.populate(rng);
        log::debug!(
            "[field] reset to {}x{} with {} particles",
            width,
            height,
            self.particles.len()
        );
    }

    fn populate(&mut self, rng: &mut impl Rng) {
        let count = particle_count_for_width(self.width as f64, &self.params);
        self.particles.clear();
        self.particles.reserve(count);
        for _ in 0..count {
            let id = self.alloc_id();
            let p = ambient_particle(id, self.width, self.height, rng);
            self.particles.push(p);
        }
    }

    fn alloc_id(&mut self) -> ParticleId {
        let id = ParticleId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add a burst particle at a random position. Returns its id for removal.
    pub fn spawn_burst(&mut self, rng: &mut impl Rng) -> ParticleId {
        let p = burst_particle(self.width, self.height, rng);
        self.push_transient(p)
    }

    /// Add a particle under a fresh id, replacing whatever id it carried.
    pub fn push_transient(&mut self, mut particle: Particle) -> ParticleId {
        particle.id = self.alloc_id();
        let id = particle.id;
        self.particles.push(particle);
        id
    }

    /// Remove by identity; `false` when the particle is already gone.
    pub fn remove(&mut self, id: ParticleId) -> bool {
        match self.particles.iter().position(|p| p.id == id) {
            Some(index) => {
                self.particles.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn transient_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_transient()).count()
    }

    /// Advance every particle by one frame.
    pub fn step(&mut self, pointer: &PointerState) {
        let (w, h) = (self.width, self.height);
        let radius = self.params.pointer_radius;
        let strength = self.params.pointer_strength;
        for p in &mut self.particles {
            p.pos += p.vel;
            p.pos += pointer.nudge(p.pos, radius, strength);
            match p.life.as_mut() {
                Some(life) => *life = life.saturating_sub(1),
                None => p.pos = wrap(p.pos, w, h),
            }
        }
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.pos, p.size, p.color);
        }
    }
}

#[inline]
fn wrap(mut pos: Vec2, width: f32, height: f32) -> Vec2 {
    if pos.x < 0.0 {
        pos.x = width;
    } else if pos.x > width {
        pos.x = 0.0;
    }
    if pos.y < 0.0 {
        pos.y = height;
    } else if pos.y > height {
        pos.y = 0.0;
    }
    pos
}

fn random_pos(width: f32, height: f32, rng: &mut impl Rng) -> Vec2 {
    Vec2::new(
        rng.gen::<f32>() * width.max(0.0),
        rng.gen::<f32>() * height.max(0.0),
    )
}

fn ambient_particle(id: ParticleId, width: f32, height: f32, rng: &mut impl Rng) -> Particle {
    let span = 255 - PARTICLE_CHANNEL_MIN;
    let color = Color::rgba(
        PARTICLE_CHANNEL_MIN + rng.gen_range(0..span),
        PARTICLE_CHANNEL_MIN + rng.gen_range(0..span),
        255,
        rng.gen_range(PARTICLE_ALPHA_MIN..PARTICLE_ALPHA_MAX),
    );
    Particle {
        id,
        pos: random_pos(width, height, rng),
        vel: Vec2::new(
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
            rng.gen_range(-PARTICLE_MAX_SPEED..=PARTICLE_MAX_SPEED),
        ),
        size: rng.gen_range(PARTICLE_RADIUS_MIN..=PARTICLE_RADIUS_MAX),
        color,
        life: None,
    }
}

// id is assigned by `push_transient`
fn burst_particle(width: f32, height: f32, rng: &mut impl Rng) -> Particle {
    Particle {
        id: ParticleId(0),
        pos: random_pos(width, height, rng),
        vel: Vec2::new(
            rng.gen_range(-BURST_MAX_SPEED..=BURST_MAX_SPEED),
            rng.gen_range(-BURST_MAX_SPEED..=BURST_MAX_SPEED),
        ),
        size: rng.gen_range(BURST_RADIUS_MIN..BURST_RADIUS_MAX),
        color: Color::hsl(
            rng.gen_range(0.0..360.0f32).floor(),
            BURST_SATURATION,
            BURST_LIGHTNESS,
        ),
        life: Some(BURST_LIFE_FRAMES),
    }
}
