//! Shooting stars: short-lived streaks that cross the field diagonally.

use crate::color::Color;
use crate::constants::*;
use crate::surface::Surface;
use glam::Vec2;
use rand::Rng;
use smallvec::SmallVec;

#[derive(Clone, Debug)]
pub struct ShootingStar {
    pub pos: Vec2,
    pub speed: f32,
    pub trail: SmallVec<[Vec2; 32]>,
}

impl ShootingStar {
    pub fn new(x: f32, speed: f32) -> Self {
        Self {
            pos: Vec2::new(x, 0.0),
            speed,
            trail: SmallVec::new(),
        }
    }

    pub fn random(width: f32, rng: &mut impl Rng) -> Self {
        let x = rng.gen::<f32>() * width.max(0.0);
        let speed = rng.gen_range(SHOOTING_STAR_SPEED_MIN..SHOOTING_STAR_SPEED_MAX);
        Self::new(x, speed)
    }

    /// Move one frame, draw the new segment and the fading trail.
    pub fn advance(&mut self, surface: &mut impl Surface) {
        let from = self.pos;
        self.pos += Vec2::splat(self.speed);
        surface.stroke_line(
            from,
            self.pos,
            SHOOTING_STAR_LINE_WIDTH,
            Color::WHITE.with_alpha(SHOOTING_STAR_ALPHA),
        );
        self.trail.push(self.pos);

        let len = self.trail.len() as f32;
        for (i, point) in self.trail.iter().enumerate() {
            let fade = i as f32 / len;
            surface.fill_circle(
                *point,
                SHOOTING_STAR_TRAIL_RADIUS - fade * SHOOTING_STAR_TRAIL_RADIUS,
                Color::WHITE.with_alpha(SHOOTING_STAR_ALPHA - fade * SHOOTING_STAR_ALPHA),
            );
        }
    }

    #[inline]
    pub fn is_inside(&self, width: f32, height: f32) -> bool {
        self.pos.x < width && self.pos.y < height
    }
}

#[derive(Clone, Debug, Default)]
pub struct ShootingStars {
    pub stars: Vec<ShootingStar>,
}

impl ShootingStars {
    /// Roll for a new star this frame.
    pub fn maybe_spawn(&mut self, chance: f64, width: f32, rng: &mut impl Rng) -> bool {
        if rng.gen_bool(chance.clamp(0.0, 1.0)) {
            self.stars.push(ShootingStar::random(width, rng));
            return true;
        }
        false
    }

    /// Advance and draw every star, dropping those that left the canvas.
    pub fn step(&mut self, surface: &mut impl Surface) {
        let (w, h) = surface.size();
        self.stars.retain_mut(|star| {
            star.advance(surface);
            star.is_inside(w, h)
        });
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}
