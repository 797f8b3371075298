use crate::constants::*;
use crate::error::FolioError;

/// Particle field and effect tuning.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub max_particles: usize,
    pub pixels_per_particle: f64,
    pub pointer_radius: f32,
    pub pointer_strength: f32,
    pub shooting_star_chance: f64,
    pub burst_count: usize,
    pub burst_stagger_ms: f64,
    pub burst_lifetime_ms: f64,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            max_particles: MAX_PARTICLES,
            pixels_per_particle: PIXELS_PER_PARTICLE,
            pointer_radius: POINTER_RADIUS,
            pointer_strength: POINTER_STRENGTH,
            shooting_star_chance: SHOOTING_STAR_CHANCE,
            burst_count: BURST_COUNT,
            burst_stagger_ms: BURST_STAGGER_MS,
            burst_lifetime_ms: BURST_LIFETIME_MS,
        }
    }
}

/// Delays of the one-shot page effects, in milliseconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Timings {
    pub notification_ms: f64,
    pub skill_delay_ms: f64,
    pub skill_fill_ms: f64,
    pub bot_reply_ms: f64,
    pub typing_pause_ms: f64,
    pub typing_restart_ms: f64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            notification_ms: NOTIFICATION_MS,
            skill_delay_ms: SKILL_ANIMATION_DELAY_MS,
            skill_fill_ms: SKILL_FILL_MS,
            bot_reply_ms: BOT_REPLY_DELAY_MS,
            typing_pause_ms: TYPING_PAUSE_AFTER_MS,
            typing_restart_ms: TYPING_RESTART_AFTER_MS,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PortfolioConfig {
    pub field: FieldParams,
    pub timings: Timings,
    /// Target widths (percent) of the skill bars, in page order.
    pub skill_targets: Vec<f32>,
}

impl PortfolioConfig {
    pub fn with_skill_targets(mut self, targets: Vec<f32>) -> Self {
        self.skill_targets = targets;
        self
    }

    pub fn validate(&self) -> Result<(), FolioError> {
        if self.field.pixels_per_particle <= 0.0 {
            return Err(FolioError::InvalidConfig("pixels_per_particle must be > 0"));
        }
        if self.field.pointer_radius <= 0.0 {
            return Err(FolioError::InvalidConfig("pointer_radius must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.field.shooting_star_chance) {
            return Err(FolioError::InvalidConfig(
                "shooting_star_chance must be within 0..=1",
            ));
        }
        let t = &self.timings;
        let delays = [
            t.notification_ms,
            t.skill_delay_ms,
            t.skill_fill_ms,
            t.bot_reply_ms,
            t.typing_pause_ms,
            t.typing_restart_ms,
            self.field.burst_stagger_ms,
            self.field.burst_lifetime_ms,
        ];
        if delays.iter().any(|d| !d.is_finite() || *d < 0.0) {
            return Err(FolioError::InvalidConfig("delays must be finite and >= 0"));
        }
        Ok(())
    }
}

/// Parse a `data-width` attribute value such as `"85"` or `"85%"`.
pub fn parse_skill_width(raw: &str) -> Result<f32, FolioError> {
    let trimmed = raw.trim().trim_end_matches('%').trim();
    let value: f32 = trimmed
        .parse()
        .map_err(|_| FolioError::InvalidSkillWidth {
            value: raw.to_string(),
            reason: "not a number",
        })?;
    if !(0.0..=100.0).contains(&value) {
        return Err(FolioError::InvalidSkillWidth {
            value: raw.to_string(),
            reason: "outside 0..=100",
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(PortfolioConfig::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_star_chance() {
        let mut cfg = PortfolioConfig::default();
        cfg.field.shooting_star_chance = 1.5;
        assert!(matches!(cfg.validate(), Err(FolioError::InvalidConfig(_))));
    }

    #[test]
    fn skill_width_parsing() {
        assert_eq!(parse_skill_width("85"), Ok(85.0));
        assert_eq!(parse_skill_width(" 92% "), Ok(92.0));
        assert!(parse_skill_width("lots").is_err());
        assert!(parse_skill_width("140").is_err());
    }
}
