// Host-side tests for visualizer bar layout and shooting stars.

use folio_core::*;
use glam::Vec2;

#[test]
fn bars_follow_bin_values() {
    let frame = VisualizerFrame {
        bins: vec![255, 128, 0, 64],
    };
    let bars: Vec<Bar> = frame.bars(160.0, 60.0).collect();
    assert_eq!(frame.bar_width(160.0), 100.0);
    let xs: Vec<f32> = bars.iter().map(|b| b.x).collect();
    assert_eq!(xs, vec![0.0, 101.0, 202.0, 303.0]);
    let heights: Vec<f32> = bars.iter().map(|b| b.height).collect();
    assert_eq!(heights, vec![127.5, 64.0, 0.0, 32.0]);
    for b in &bars {
        assert_eq!(b.y + b.height, 60.0);
    }
}

#[test]
fn default_frame_has_analyser_bin_count() {
    let frame = VisualizerFrame::default();
    assert_eq!(frame.bins.len(), 128);
    assert!((frame.bar_width(1280.0) - 25.0).abs() < 1e-4);
    assert_eq!(VisualizerFrame::with_bins(0).bar_width(100.0), 0.0);
}

#[test]
fn render_uses_two_stop_gradient_over_canvas_height() {
    let frame = VisualizerFrame {
        bins: vec![10, 20, 30],
    };
    let mut surface = RecordingSurface::new(300.0, 60.0);
    frame.render(&mut surface);
    assert_eq!(surface.ops[0], DrawOp::Clear);
    assert_eq!(surface.rects().count(), 3);
    for op in surface.rects() {
        let DrawOp::Rect { fill, .. } = op else {
            unreachable!()
        };
        assert_eq!(
            *fill,
            Fill::VerticalGradient {
                top: Color::rgb(0x00, 0xf3, 0xff),
                bottom: Color::rgb(0x9d, 0x4e, 0xdd),
                height: 60.0,
            }
        );
    }
}

#[test]
fn shooting_star_leaves_once_off_canvas() {
    let mut stars = ShootingStars::default();
    stars.stars.push(ShootingStar::new(0.0, 10.0));
    let mut surface = RecordingSurface::new(100.0, 200.0);
    for _ in 0..9 {
        stars.step(&mut surface);
    }
    assert_eq!(stars.len(), 1);
    assert_eq!(stars.stars[0].pos, Vec2::new(90.0, 90.0));
    stars.step(&mut surface);
    assert!(stars.is_empty());
}

#[test]
fn shooting_star_trail_fades_along_its_length() {
    let mut star = ShootingStar::new(0.0, 5.0);
    let mut surface = RecordingSurface::new(500.0, 500.0);
    star.advance(&mut surface);
    star.advance(&mut surface);
    surface.ops.clear();
    star.advance(&mut surface);

    assert!(matches!(
        surface.ops[0],
        DrawOp::Line { from, to, width, .. }
            if from == Vec2::new(10.0, 10.0) && to == Vec2::new(15.0, 15.0) && width == 2.0
    ));
    let circles: Vec<(f32, f32)> = surface
        .ops
        .iter()
        .filter_map(|op| match op {
            DrawOp::Circle { radius, color, .. } => Some((*radius, color.alpha())),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 3);
    assert!((circles[0].0 - 2.0).abs() < 1e-6 && (circles[0].1 - 0.7).abs() < 1e-6);
    assert!(circles.windows(2).all(|w| w[1].0 < w[0].0 && w[1].1 < w[0].1));
}

#[test]
fn star_spawn_chance_bounds() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    let mut rng = StdRng::seed_from_u64(8);
    let mut stars = ShootingStars::default();
    for _ in 0..1000 {
        assert!(!stars.maybe_spawn(0.0, 800.0, &mut rng));
    }
    assert!(stars.maybe_spawn(1.0, 800.0, &mut rng));
    let s = &stars.stars[0];
    assert!((5.0..15.0).contains(&s.speed));
    assert!((0.0..=800.0).contains(&s.pos.x) && s.pos.y == 0.0);
}
