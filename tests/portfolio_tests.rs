// Host-side tests for Portfolio: timed effects driven through the timer wheel.

use folio_core::*;

const W: f32 = 1000.0;
const H: f32 = 600.0;

fn portfolio() -> Portfolio {
    let config = PortfolioConfig::default().with_skill_targets(vec![90.0, 75.0]);
    Portfolio::new(config, W, H, 42, 0.0).unwrap()
}

#[test]
fn rejects_invalid_config() {
    let mut config = PortfolioConfig::default();
    config.field.pixels_per_particle = 0.0;
    assert!(Portfolio::new(config, W, H, 1, 0.0).is_err());
}

#[test]
fn burst_particle_lives_exactly_its_lifetime() {
    let mut config = PortfolioConfig::default();
    config.field.burst_count = 1;
    let mut p = Portfolio::new(config, W, H, 3, 0.0).unwrap();
    p.handle(UiEvent::Key(KeyCommand::UniverseMode), 0.0);
    p.run_timers(0.0);
    assert_eq!(p.field.transient_count(), 1);
    p.run_timers(1999.0);
    assert_eq!(p.field.transient_count(), 1);
    p.run_timers(2000.0);
    assert_eq!(p.field.transient_count(), 0);
}

#[test]
fn burst_of_fifty_is_gone_after_lifetime_despite_resets() {
    let mut p = portfolio();
    let mut surface = RecordingSurface::new(W, H);
    p.handle(UiEvent::Key(KeyCommand::UniverseMode), 0.0);
    assert!(p.view.universe_mode);

    let mut peak = 0;
    let mut t = 0.0;
    while t <= 5000.0 {
        if (1000.0..1016.0).contains(&t) {
            p.handle(UiEvent::Resized { width: 800.0, height: 500.0 }, t);
        }
        if (2200.0..2216.0).contains(&t) {
            p.handle(UiEvent::Resized { width: W, height: H }, t);
        }
        p.frame(t, &mut surface);
        peak = peak.max(p.field.transient_count());
        t += 16.0;
    }
    assert!(peak >= 20, "peak transient count {peak}");
    assert_eq!(p.field.transient_count(), 0);
    assert_eq!(p.field.particles.len(), 100);
}

#[test]
fn universe_mode_is_idempotent_and_reruns_effects() {
    let mut p = portfolio();
    p.handle(UiEvent::Key(KeyCommand::UniverseMode), 0.0);
    p.run_timers(3000.0);
    assert!(!p.notification_visible);

    p.handle(UiEvent::Key(KeyCommand::UniverseMode), 3000.0);
    assert!(p.view.universe_mode);
    assert!(p.notification_visible);
    p.run_timers(5999.0);
    assert!(p.notification_visible);
    assert!(p.field.transient_count() > 0);
    p.run_timers(6000.0);
    assert!(!p.notification_visible);
}

#[test]
fn notification_hides_after_three_seconds() {
    let mut p = portfolio();
    p.handle(UiEvent::Key(KeyCommand::UniverseMode), 500.0);
    assert!(p.notification_visible);
    p.run_timers(3499.0);
    assert!(p.notification_visible);
    p.run_timers(3500.0);
    assert!(!p.notification_visible);
}

#[test]
fn skills_fill_starts_after_delay() {
    let mut p = portfolio();
    p.handle(UiEvent::FlipCard, 0.0);
    p.handle(UiEvent::SelectSection(Section::Skills), 1000.0);
    assert_eq!(p.view.visible_section(), Some(Section::Skills));

    p.run_timers(1299.0);
    assert_eq!(p.skills.widths(1299.0), vec![0.0, 0.0]);
    p.run_timers(1300.0);
    assert_eq!(p.skills.widths(1800.0), vec![45.0, 37.5]);
    assert_eq!(p.skills.widths(10_000.0), vec![90.0, 75.0]);
}

#[test]
fn arrow_navigation_into_skills_also_fills_bars() {
    let mut p = portfolio();
    p.handle(UiEvent::FlipCard, 0.0);
    p.handle(UiEvent::Key(KeyCommand::NextSection), 0.0);
    assert_eq!(p.view.active_section, Section::Skills);
    p.run_timers(300.0);
    assert!(p.skills.is_animating(300.0));
}

#[test]
fn selecting_on_front_schedules_nothing() {
    let mut p = portfolio();
    let pending = p.pending_tasks();
    p.handle(UiEvent::SelectSection(Section::Skills), 0.0);
    assert_eq!(p.pending_tasks(), pending);
    assert_eq!(p.view.visible_section(), None);
}

#[test]
fn chat_reply_arrives_after_delay() {
    let mut p = portfolio();
    p.handle(UiEvent::SubmitChat("  Tell me about your SKILLS  ".into()), 100.0);
    assert_eq!(p.chat.len(), 1);
    assert_eq!(p.chat.messages[0].text, "Tell me about your SKILLS");
    assert_eq!(p.chat.messages[0].sender, Sender::User);

    p.run_timers(1099.0);
    assert_eq!(p.chat.len(), 1);
    p.run_timers(1100.0);
    assert_eq!(p.chat.len(), 2);
    let reply = &p.chat.messages[1];
    assert_eq!(reply.sender, Sender::Bot);
    assert_eq!(reply.text, CHAT_RULES[1].reply);
}

#[test]
fn blank_chat_input_is_ignored() {
    let mut p = portfolio();
    let pending = p.pending_tasks();
    p.handle(UiEvent::SubmitChat("   ".into()), 0.0);
    assert!(p.chat.is_empty());
    assert_eq!(p.pending_tasks(), pending);
}

#[test]
fn typing_caption_pauses_then_restarts() {
    let mut p = portfolio();
    assert_eq!(p.typing, TypingPhase::Initial);
    p.run_timers(3500.0);
    assert_eq!(p.typing, TypingPhase::Paused);
    assert_eq!(p.typing.animation_css(), Some("none"));
    p.run_timers(3599.0);
    assert_eq!(p.typing, TypingPhase::Paused);
    p.run_timers(3600.0);
    assert_eq!(p.typing.animation_css(), Some(TYPING_ANIMATION));
}

#[test]
fn pointer_moves_tilt_card_and_mark_dirty() {
    let mut p = portfolio();
    assert!(p.take_dirty());
    assert!(!p.take_dirty());
    p.handle(UiEvent::PointerMoved { x: W, y: H }, 0.0);
    assert!(p.pointer.moved);
    assert!(p.take_dirty());
    assert_eq!(
        p.view.card_transform,
        CardTransform::Tilt {
            x_deg: 10.0,
            y_deg: 10.0
        }
    );
    p.handle(UiEvent::PointerLeft, 0.0);
    assert_eq!(p.view.card_transform, CardTransform::Rest);
}

#[test]
fn escape_key_flips_back_only_when_back() {
    let mut p = portfolio();
    p.handle(UiEvent::Key(KeyCommand::Escape), 0.0);
    assert_eq!(p.view.orientation, Orientation::Front);
    p.handle(UiEvent::FlipCard, 0.0);
    p.handle(UiEvent::Key(KeyCommand::Escape), 0.0);
    assert_eq!(p.view.orientation, Orientation::Front);
}

#[test]
fn theme_and_chat_toggles() {
    let mut p = portfolio();
    p.handle(UiEvent::ToggleTheme, 0.0);
    assert!(p.view.universe_mode);
    p.handle(UiEvent::ToggleTheme, 0.0);
    assert!(!p.view.universe_mode);
    p.handle(UiEvent::ToggleChat, 0.0);
    assert!(p.view.chat_open);
    p.handle(UiEvent::ToggleChat, 0.0);
    assert!(!p.view.chat_open);
}

#[test]
fn cancel_all_drops_pending_effects() {
    let mut p = portfolio();
    p.handle(UiEvent::Key(KeyCommand::UniverseMode), 0.0);
    p.cancel_all();
    assert_eq!(p.pending_tasks(), 0);
    p.run_timers(10_000.0);
    assert_eq!(p.field.transient_count(), 0);
    assert!(p.notification_visible);
}
