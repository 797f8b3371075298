// Host-side tests for the particle field and pointer influence.
// The web crate is wasm-only, so these exercise folio-core directly.

use folio_core::*;
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn field(width: f32, height: f32, seed: u64) -> (ParticleField, StdRng) {
    let mut rng = StdRng::seed_from_u64(seed);
    let f = ParticleField::new(width, height, FieldParams::default(), &mut rng);
    (f, rng)
}

fn assert_in_bounds(f: &ParticleField) {
    for p in f.particles.iter().filter(|p| !p.is_transient()) {
        assert!(
            (0.0..=f.width()).contains(&p.pos.x) && (0.0..=f.height()).contains(&p.pos.y),
            "particle {:?} escaped to {:?}",
            p.id,
            p.pos
        );
    }
}

#[test]
fn particle_count_follows_viewport_width() {
    let params = FieldParams::default();
    for (width, expected) in [
        (0.0, 0),
        (5.0, 0),
        (10.0, 1),
        (99.0, 9),
        (375.0, 37),
        (1499.0, 149),
        (1500.0, 150),
        (1510.0, 150),
        (4000.0, 150),
    ] {
        assert_eq!(particle_count_for_width(width, &params), expected, "width {width}");
        let (f, _) = field(width as f32, 800.0, 7);
        assert_eq!(f.particles.len(), expected, "width {width}");
    }
}

#[test]
fn negative_or_nan_width_yields_no_particles() {
    let params = FieldParams::default();
    assert_eq!(particle_count_for_width(-20.0, &params), 0);
    assert_eq!(particle_count_for_width(f64::NAN, &params), 0);
}

#[test]
fn initial_particles_respect_ranges() {
    let (f, _) = field(1200.0, 700.0, 3);
    for p in &f.particles {
        assert!(p.vel.x.abs() <= 0.25 && p.vel.y.abs() <= 0.25);
        assert!((0.5..=2.5).contains(&p.size));
        assert!(p.life.is_none());
        match p.color {
            Color::Rgba { r, g, b, a } => {
                assert!(r >= 155 && g >= 155);
                assert_eq!(b, 255);
                assert!((0.2..0.7).contains(&a));
            }
            other => panic!("unexpected ambient color {other:?}"),
        }
    }
    assert_in_bounds(&f);
}

#[test]
fn ordinary_particles_stay_wrapped_without_pointer() {
    let (mut f, _) = field(300.0, 200.0, 11);
    let pointer = PointerState::default();
    for _ in 0..5000 {
        f.step(&pointer);
        assert_in_bounds(&f);
    }
}

#[test]
fn ordinary_particles_stay_wrapped_with_pointer_sweeping() {
    let (mut f, _) = field(400.0, 300.0, 12);
    let mut pointer = PointerState::default();
    for frame in 0..3000 {
        let t = frame as f32 * 0.01;
        pointer.record(200.0 + 190.0 * t.cos(), 150.0 + 140.0 * t.sin());
        f.step(&pointer);
        assert_in_bounds(&f);
    }
}

#[test]
fn pointer_nudge_pushes_away_with_linear_falloff() {
    let mut pointer = PointerState::default();
    pointer.record(0.0, 0.0);
    let n = pointer.nudge(Vec2::new(30.0, 40.0), 100.0, 2.0);
    assert!((n.x - 0.6).abs() < 1e-5 && (n.y - 0.8).abs() < 1e-5, "{n:?}");

    let near = pointer.nudge(Vec2::new(1.0, 0.0), 100.0, 2.0);
    assert!((near.x - 1.98).abs() < 1e-5);

    assert_eq!(pointer.nudge(Vec2::new(100.0, 0.0), 100.0, 2.0), Vec2::ZERO);
    assert_eq!(pointer.nudge(Vec2::new(80.0, 80.0), 100.0, 2.0), Vec2::ZERO);
}

#[test]
fn pointer_is_ignored_until_first_move() {
    let (mut a, _) = field(500.0, 500.0, 5);
    let (mut b, _) = field(500.0, 500.0, 5);
    let idle = PointerState::default();
    // a position without a recorded move must not count
    let parked = PointerState {
        pos: Vec2::new(250.0, 250.0),
        moved: false,
    };
    for _ in 0..10 {
        a.step(&idle);
        b.step(&parked);
    }
    assert_eq!(a.particles, b.particles);
}

#[test]
fn nudge_is_positional_not_persistent() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut f = ParticleField::new(0.0, 0.0, FieldParams::default(), &mut rng);
    f.resize(1000.0, 1000.0, &mut rng);
    f.particles.truncate(1);
    f.particles[0].pos = Vec2::new(510.0, 500.0);
    f.particles[0].vel = Vec2::ZERO;

    let mut pointer = PointerState::default();
    pointer.record(500.0, 500.0);
    f.step(&pointer);
    let pushed = f.particles[0].pos;
    assert!(pushed.x > 510.0);

    pointer.record(0.0, 0.0);
    f.step(&pointer);
    assert_eq!(f.particles[0].pos, pushed);
}

#[test]
fn render_clears_then_draws_one_circle_per_particle() {
    let (f, _) = field(640.0, 480.0, 9);
    let mut surface = RecordingSurface::new(640.0, 480.0);
    f.render(&mut surface);
    assert_eq!(surface.ops.first(), Some(&DrawOp::Clear));
    assert_eq!(surface.circles(), f.particles.len());
}

#[test]
fn removal_is_by_identity_and_idempotent() {
    let (mut f, mut rng) = field(800.0, 600.0, 21);
    let a = f.spawn_burst(&mut rng);
    let b = f.spawn_burst(&mut rng);
    assert_eq!(f.transient_count(), 2);

    // reorder the collection; identity lookup must not care
    f.particles.reverse();
    assert!(f.remove(a));
    assert!(!f.remove(a));
    assert!(f.particles.iter().any(|p| p.id == b));

    f.resize(800.0, 600.0, &mut rng);
    assert!(!f.remove(b));
    assert_eq!(f.transient_count(), 0);
}

#[test]
fn burst_particles_are_not_wrapped_and_count_down() {
    let (mut f, mut rng) = field(100.0, 100.0, 2);
    let id = f.spawn_burst(&mut rng);
    let idx = f.particles.iter().position(|p| p.id == id).unwrap();
    f.particles[idx].pos = Vec2::new(99.5, 50.0);
    f.particles[idx].vel = Vec2::new(1.0, 0.0);
    f.step(&PointerState::default());
    let p = &f.particles[idx];
    assert!(p.pos.x > 100.0);
    assert_eq!(p.life, Some(99));
    assert!(matches!(p.color, Color::Hsl { s, l, .. } if s == 100.0 && l == 70.0));
}

#[test]
fn pushed_transients_get_fresh_ids() {
    let (mut f, _) = field(200.0, 100.0, 11);
    let template = Particle {
        id: ParticleId(0),
        pos: Vec2::new(10.0, 10.0),
        vel: Vec2::ZERO,
        size: 1.0,
        color: Color::hsl(10.0, 100.0, 70.0),
        life: Some(5),
    };
    let a = f.push_transient(template.clone());
    let b = f.push_transient(template);
    assert_ne!(a, b);
    assert_ne!(a, ParticleId(0));
    assert_eq!(f.transient_count(), 2);
    assert!(f.remove(a));
    assert_eq!(f.transient_count(), 1);
}
