/// Skill bar fill animation: every bar grows from 0% to its target width over
/// a fixed duration once the animation is started.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SkillMeter {
    pub targets: Vec<f32>,
    started_at_ms: Option<f64>,
    duration_ms: f64,
}

impl SkillMeter {
    pub fn new(targets: Vec<f32>, duration_ms: f64) -> Self {
        Self {
            targets,
            started_at_ms: None,
            duration_ms: duration_ms.max(0.0),
        }
    }

    /// Restart the fill from 0%.
    pub fn start(&mut self, now_ms: f64) {
        self.started_at_ms = Some(now_ms);
    }

    pub fn progress(&self, now_ms: f64) -> f32 {
        match self.started_at_ms {
            None => 0.0,
            Some(_) if self.duration_ms == 0.0 => 1.0,
            Some(t0) => ((now_ms - t0) / self.duration_ms).clamp(0.0, 1.0) as f32,
        }
    }

    /// True while bars are still growing.
    pub fn is_animating(&self, now_ms: f64) -> bool {
        self.started_at_ms.is_some() && self.progress(now_ms) < 1.0
    }

    /// Current width (percent) of each bar.
    pub fn widths(&self, now_ms: f64) -> Vec<f32> {
        let t = self.progress(now_ms);
        self.targets.iter().map(|target| target * t).collect()
    }
}
