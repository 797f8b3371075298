use std::fmt;

/// Tagged CSS color. Rendered to a canvas/CSS string on demand via `Display`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgb { r: u8, g: u8, b: u8 },
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsl { h: f32, s: f32, l: f32 },
}

impl Color {
    pub const WHITE: Color = Color::Rgb {
        r: 255,
        g: 255,
        b: 255,
    };

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb { r, g, b }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsl(h: f32, s: f32, l: f32) -> Self {
        Color::Hsl { h, s, l }
    }

    /// Alpha channel; opaque variants report 1.0.
    pub fn alpha(&self) -> f32 {
        match self {
            Color::Rgba { a, .. } => *a,
            _ => 1.0,
        }
    }

    /// Same color with the given alpha. HSL colors are returned unchanged.
    pub fn with_alpha(self, a: f32) -> Self {
        match self {
            Color::Rgb { r, g, b } | Color::Rgba { r, g, b, .. } => Color::Rgba {
                r,
                g,
                b,
                a: a.clamp(0.0, 1.0),
            },
            hsl @ Color::Hsl { .. } => hsl,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Rgb { r, g, b } => write!(f, "rgb({}, {}, {})", r, g, b),
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, a),
            Color::Hsl { h, s, l } => write!(f, "hsl({}, {}%, {}%)", h, s, l),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn css_strings() {
        assert_eq!(Color::rgb(0, 243, 255).to_string(), "rgb(0, 243, 255)");
        assert_eq!(
            Color::rgba(255, 255, 255, 0.5).to_string(),
            "rgba(255, 255, 255, 0.5)"
        );
        assert_eq!(Color::hsl(120.0, 100.0, 70.0).to_string(), "hsl(120, 100%, 70%)");
    }

    #[test]
    fn with_alpha_clamps() {
        assert_eq!(Color::WHITE.with_alpha(1.7).alpha(), 1.0);
        assert_eq!(Color::WHITE.with_alpha(-0.2).alpha(), 0.0);
    }
}
