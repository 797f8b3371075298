use crate::constants::{CARD_PERSPECTIVE_PX, CARD_TILT_RANGE_DEG};
use glam::Vec2;
use std::fmt;

/// Last known cursor position. Influence stays off until the first move so the
/// field does not snap towards the origin at start-up.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub pos: Vec2,
    pub moved: bool,
}

impl PointerState {
    pub fn record(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.moved = true;
    }

    /// Positional nudge for a particle at `at`: directed from the pointer to
    /// the particle, scaled by `(radius - distance) / radius * strength`.
    #[inline]
    pub fn nudge(&self, at: Vec2, radius: f32, strength: f32) -> Vec2 {
        if !self.moved {
            return Vec2::ZERO;
        }
        let d = at - self.pos;
        let distance = d.length();
        if distance >= radius {
            return Vec2::ZERO;
        }
        let angle = d.y.atan2(d.x);
        let force = (radius - distance) / radius;
        Vec2::new(angle.cos(), angle.sin()) * force * strength
    }
}

/// CSS transform applied to the 3D card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CardTransform {
    Rest,
    Tilt { x_deg: f32, y_deg: f32 },
    Flipped,
}

impl CardTransform {
    /// Tilt for a pointer at `(x, y)` inside a `width × height` viewport.
    pub fn tilt_for(x: f32, y: f32, width: f32, height: f32) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return CardTransform::Rest;
        }
        CardTransform::Tilt {
            x_deg: (y / height - 0.5) * CARD_TILT_RANGE_DEG,
            y_deg: (x / width - 0.5) * CARD_TILT_RANGE_DEG,
        }
    }
}

impl fmt::Display for CardTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = CARD_PERSPECTIVE_PX;
        match self {
            CardTransform::Rest => write!(f, "perspective({}px) rotateX(0) rotateY(0)", p),
            CardTransform::Tilt { x_deg, y_deg } => write!(
                f,
                "perspective({}px) rotateX({}deg) rotateY({}deg)",
                p, x_deg, y_deg
            ),
            CardTransform::Flipped => write!(f, "perspective({}px) rotateY(180deg)", p),
        }
    }
}
