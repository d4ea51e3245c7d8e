use std::f32::consts::PI;
use ggez::glam::Vec2;
use parabola::config::ParabolaStyle;
use parabola::marker::{layout_markers, Marker, MarkerStamp, MarkerSurface};
use parabola::{Facing, FitMode, Parabola};

struct Recorder(Vec<MarkerStamp>);

impl MarkerSurface for Recorder {
    fn stamp(&mut self, stamp: MarkerStamp) {
        self.0.push(stamp);
    }
}

#[test]
fn default_scene_runs_from_caller_start_to_destination() {
    let from = Vec2::new(325.0, 250.0);
    let to = Vec2::new(28.0, 64.0);
    let parabola = Parabola::new(from, to).unwrap();
    let points = parabola.points();

    assert_eq!(points.first(), Some(&from));
    assert_eq!(points.last(), Some(&to));
    for p in points {
        assert!(p.x >= 28.0 && p.x <= 325.0, "{}", p);
        assert!(p.y >= 64.0 && p.y <= 250.0, "{}", p);
    }
    assert!(points.len() <= 298);
}

#[test]
fn default_scene_arcs_with_its_vertex_on_the_start() {
    let parabola = Parabola::new(Vec2::new(325.0, 250.0), Vec2::new(28.0, 64.0)).unwrap();
    let points = parabola.points();

    assert_eq!(parabola.facing(), Facing::Downwards);
    assert_eq!(points.len(), 298);
    // y = 250 - 186 * ((x - 325) / 297)^2, which is ~203.2 at the horizontal middle.
    let middle = points.iter().find(|p| p.x == 176.0).unwrap();
    assert_eq!(middle.y, 203.0);
    // Flat where it leaves, steep where it lands.
    assert_eq!(points[1], Vec2::new(324.0, 250.0));
    assert_eq!(points[points.len() - 2], Vec2::new(29.0, 65.0));
}

#[test]
fn default_scene_with_midpoint_fit_stays_in_bounds() {
    let parabola = Parabola::with_fit(Vec2::new(325.0, 250.0), Vec2::new(28.0, 64.0), FitMode::VertexMidpoint).unwrap();

    // The midpoint construction only applies to upwards trajectories.
    assert_eq!(parabola.facing(), Facing::Downwards);
    let exact = Parabola::new(Vec2::new(325.0, 250.0), Vec2::new(28.0, 64.0)).unwrap();
    assert_eq!(parabola.points(), exact.points());
    assert_eq!(parabola.points().last(), Some(&Vec2::new(28.0, 64.0)));
    assert!(parabola
        .points()
        .iter()
        .all(|p| p.x >= 28.0 && p.x <= 325.0 && p.y >= 64.0 && p.y <= 250.0));
}

#[test]
fn horizontal_pair_gives_a_defined_line() {
    let parabola = Parabola::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0)).unwrap();

    let expected: Vec<Vec2> = (0..=10).map(|x| Vec2::new(x as f32, 0.0)).collect();
    assert_eq!(parabola.points(), &expected[..]);
    assert!(parabola.points().iter().all(|p| !p.x.is_nan() && !p.y.is_nan()));
}

#[test]
fn coincident_endpoints_draw_no_arrow() {
    let p = Vec2::new(100.0, 100.0);
    let parabola = Parabola::new(p, p).unwrap();
    let mut recorder = Recorder(Vec::new());
    layout_markers(&parabola, &ParabolaStyle::default(), &mut recorder);

    assert!(parabola.points().len() <= 1);
    assert_eq!(parabola.heading(), None);
    assert!(recorder.0.iter().all(|s| s.kind == Marker::Circle));
}

#[test]
fn heading_survives_uniform_scaling() {
    // The curve lands with a slope of 4 px/px at every scale, so the last
    // whole-pixel step is the same and the headings agree to float precision.
    const TOLERANCE: f32 = 1e-6;
    let (from, to) = (Vec2::new(10.0, 10.0), Vec2::new(40.0, 70.0));
    let base = Parabola::new(from, to).unwrap().heading().unwrap();
    assert!(base > -PI && base <= PI);
    assert!((base - f32::atan2(4.0, 1.0)).abs() < TOLERANCE);

    for factor in [2.0, 4.0] {
        let scaled = Parabola::new(from * factor, to * factor).unwrap().heading().unwrap();
        assert!((base - scaled).abs() < TOLERANCE, "scale {}: {} vs {}", factor, base, scaled);
    }
}

#[test]
fn flipped_upwards_trajectory_runs_from_its_vertex() {
    let from = Vec2::new(90.0, 20.0);
    let to = Vec2::new(10.0, 80.0);
    let parabola = Parabola::new(from, to).unwrap();
    let points = parabola.points();

    assert_eq!(parabola.facing(), Facing::Upwards);
    assert_eq!(points.first(), Some(&from));
    assert_eq!(points.last(), Some(&to));
    // y = 20 + 60 * ((90 - x) / 80)^2
    assert_eq!(points[1], Vec2::new(89.0, 20.0));
    assert_eq!(points[points.len() - 2], Vec2::new(11.0, 79.0));
    assert!(points.iter().all(|p| p.x >= 10.0 && p.x <= 90.0 && p.y >= 20.0 && p.y <= 80.0));
    assert!(points.windows(2).all(|w| w[1].x == w[0].x - 1.0 && w[1].y >= w[0].y));
}

#[test]
fn arrow_points_along_the_last_step() {
    let parabola = Parabola::new(Vec2::new(0.0, 200.0), Vec2::new(100.0, 20.0)).unwrap();
    let mut recorder = Recorder(Vec::new());
    layout_markers(&parabola, &ParabolaStyle::default(), &mut recorder);

    let arrow = recorder.0.last().unwrap();
    assert_eq!(arrow.kind, Marker::Arrow);
    assert_eq!(arrow.dest, Vec2::new(100.0, 20.0));
    // Flattening out at the top of the arc, heading right.
    assert!(arrow.rotation.abs() < PI / 4.0);
}
