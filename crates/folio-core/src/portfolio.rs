//! Page state owned by the particle render loop.
//!
//! UI handlers feed [`UiEvent`]s into [`Portfolio::handle`]; they only mutate
//! state and schedule [`Task`]s. The render loop calls [`Portfolio::frame`]
//! once per animation frame, which runs due tasks and then steps and draws the
//! field. The DOM layer mirrors the state whenever [`Portfolio::take_dirty`]
//! reports a change.

use crate::chat::{reply_for, ChatLog};
use crate::config::{PortfolioConfig, Timings};
use crate::effects::ShootingStars;
use crate::error::FolioError;
use crate::particles::{ParticleField, ParticleId};
use crate::pointer::PointerState;
use crate::skills::SkillMeter;
use crate::surface::Surface;
use crate::timer::{TimerId, TimerWheel};
use crate::view::{KeyCommand, Orientation, Section, ViewState};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const TYPING_ANIMATION: &str = "typing 3.5s steps(40, end), blink 1s step-end infinite";

#[derive(Clone, Debug, PartialEq)]
pub enum UiEvent {
    FlipCard,
    SelectSection(Section),
    Key(KeyCommand),
    PointerMoved { x: f32, y: f32 },
    PointerLeft,
    Resized { width: f32, height: f32 },
    ToggleTheme,
    ToggleChat,
    SubmitChat(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum Task {
    SpawnBurst,
    RemoveParticle(ParticleId),
    HideNotification,
    StartSkillFill,
    BotReply(&'static str),
    PauseTyping,
    RestartTyping,
}

/// State of the hero caption's CSS typing animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingPhase {
    Initial,
    Paused,
    Restarted,
}

impl TypingPhase {
    /// Inline `animation` value to apply, if the stylesheet default is overridden.
    pub fn animation_css(self) -> Option<&'static str> {
        match self {
            TypingPhase::Initial => None,
            TypingPhase::Paused => Some("none"),
            TypingPhase::Restarted => Some(TYPING_ANIMATION),
        }
    }
}

pub struct Portfolio {
    pub field: ParticleField,
    pub pointer: PointerState,
    pub stars: ShootingStars,
    pub view: ViewState,
    pub skills: SkillMeter,
    pub chat: ChatLog,
    pub notification_visible: bool,
    pub typing: TypingPhase,
    timers: TimerWheel<Task>,
    timings: Timings,
    rng: StdRng,
    dirty: bool,
}

impl Portfolio {
    pub fn new(
        config: PortfolioConfig,
        width: f32,
        height: f32,
        seed: u64,
        now_ms: f64,
    ) -> Result<Self, FolioError> {
        config.validate()?;
        let PortfolioConfig {
            field,
            timings,
            skill_targets,
        } = config;
        let mut rng = StdRng::seed_from_u64(seed);
        let field = ParticleField::new(width, height, field, &mut rng);
        log::info!(
            "[portfolio] {}x{} field with {} particles, {} skill bars",
            width,
            height,
            field.particles.len(),
            skill_targets.len()
        );
        let mut timers = TimerWheel::default();
        timers.schedule(now_ms, timings.typing_pause_ms, Task::PauseTyping);
        Ok(Self {
            field,
            pointer: PointerState::default(),
            stars: ShootingStars::default(),
            view: ViewState::default(),
            skills: SkillMeter::new(skill_targets, timings.skill_fill_ms),
            chat: ChatLog::default(),
            notification_visible: false,
            typing: TypingPhase::Initial,
            timers,
            timings,
            rng,
            dirty: true,
        })
    }

    /// Whether the DOM needs re-syncing since the last call.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn pending_tasks(&self) -> usize {
        self.timers.len()
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.cancel(id)
    }

    /// Drop every pending effect, e.g. when the page is torn down.
    pub fn cancel_all(&mut self) {
        self.timers.clear();
    }

    pub fn handle(&mut self, event: UiEvent, now_ms: f64) {
        match event {
            UiEvent::FlipCard => {
                self.view.flip();
                self.dirty = true;
            }
            UiEvent::SelectSection(section) => self.show_section(section, now_ms),
            UiEvent::Key(KeyCommand::UniverseMode) => self.activate_universe_mode(now_ms),
            UiEvent::Key(key) => {
                let was = self.view.orientation;
                if let Some(section) = self.view.apply_key(key) {
                    self.show_section(section, now_ms);
                }
                if self.view.orientation != was {
                    self.dirty = true;
                }
            }
            UiEvent::PointerMoved { x, y } => {
                self.pointer.record(x, y);
                if self.view.orientation == Orientation::Front {
                    let (w, h) = (self.field.width(), self.field.height());
                    self.view.tilt(x, y, w, h);
                    self.dirty = true;
                }
            }
            UiEvent::PointerLeft => {
                if self.view.orientation == Orientation::Front {
                    self.view.reset_tilt();
                    self.dirty = true;
                }
            }
            UiEvent::Resized { width, height } => {
                self.field.resize(width, height, &mut self.rng);
            }
            UiEvent::ToggleTheme => {
                let on = self.view.toggle_theme();
                log::info!("[theme] universe mode {}", if on { "on" } else { "off" });
                self.dirty = true;
            }
            UiEvent::ToggleChat => {
                self.view.toggle_chat();
                self.dirty = true;
            }
            UiEvent::SubmitChat(raw) => {
                if let Some(text) = self.chat.submit(&raw) {
                    let reply = reply_for(&text);
                    self.timers
                        .schedule(now_ms, self.timings.bot_reply_ms, Task::BotReply(reply));
                    self.dirty = true;
                }
            }
        }
    }

    fn show_section(&mut self, section: Section, now_ms: f64) {
        if !self.view.select_section(section) {
            return;
        }
        if section == Section::Skills {
            self.timers
                .schedule(now_ms, self.timings.skill_delay_ms, Task::StartSkillFill);
        }
        self.dirty = true;
    }

    fn activate_universe_mode(&mut self, now_ms: f64) {
        self.view.universe_mode = true;
        self.notification_visible = true;
        self.timers
            .schedule(now_ms, self.timings.notification_ms, Task::HideNotification);
        let params = &self.field.params;
        for i in 0..params.burst_count {
            self.timers
                .schedule(now_ms, i as f64 * params.burst_stagger_ms, Task::SpawnBurst);
        }
        log::info!("[universe] activated, {} burst particles queued", params.burst_count);
        self.dirty = true;
    }

    /// Run every task due at `now_ms`. Returns how many ran.
    pub fn run_timers(&mut self, now_ms: f64) -> usize {
        let fired = self.timers.advance(now_ms);
        let count = fired.len();
        for f in fired {
            self.run_task(f.task, now_ms);
        }
        count
    }

    fn run_task(&mut self, task: Task, now_ms: f64) {
        match task {
            Task::SpawnBurst => {
                let id = self.field.spawn_burst(&mut self.rng);
                self.timers.schedule(
                    now_ms,
                    self.field.params.burst_lifetime_ms,
                    Task::RemoveParticle(id),
                );
            }
            Task::RemoveParticle(id) => {
                if !self.field.remove(id) {
                    log::debug!("[burst] particle {:?} already gone", id);
                }
            }
            Task::HideNotification => {
                self.notification_visible = false;
                self.dirty = true;
            }
            Task::StartSkillFill => self.skills.start(now_ms),
            Task::BotReply(reply) => {
                self.chat.push_bot(reply);
                self.dirty = true;
            }
            Task::PauseTyping => {
                self.typing = TypingPhase::Paused;
                self.timers
                    .schedule(now_ms, self.timings.typing_restart_ms, Task::RestartTyping);
                self.dirty = true;
            }
            Task::RestartTyping => {
                self.typing = TypingPhase::Restarted;
                self.dirty = true;
            }
        }
    }

    /// One animation frame of the particle canvas.
    pub fn frame(&mut self, now_ms: f64, surface: &mut impl Surface) {
        self.run_timers(now_ms);
        self.field.step(&self.pointer);
        self.field.render(surface);
        let chance = self.field.params.shooting_star_chance;
        let width = self.field.width();
        self.stars.maybe_spawn(chance, width, &mut self.rng);
        self.stars.step(surface);
    }
}
