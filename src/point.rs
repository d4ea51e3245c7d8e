use std::f32::consts::PI;
use ggez::glam::Vec2;

/// Snaps a sample to the pixel grid.
pub fn rounded(x: f32, y: f32) -> Vec2 {
    Vec2::new(x.round(), y.round())
}

pub fn is_finite(p: Vec2) -> bool {
    p.x.is_finite() && p.y.is_finite()
}

/// Signed direction from `prev` to `last`, in (-PI, PI].
pub fn heading(prev: Vec2, last: Vec2) -> f32 {
    let angle = f32::atan2(last.y - prev.y, last.x - prev.x);
    if angle <= -PI {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Heading of the last segment of a sequence, if it has one.
pub fn tail_heading(points: &[Vec2]) -> Option<f32> {
    match points {
        [.., prev, last] => Some(heading(*prev, *last)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    const EPSILON: f32 = 1e-6;

    #[test]
    fn heading_covers_all_quadrants() {
        let origin = Vec2::ZERO;
        assert!((heading(origin, Vec2::new(1.0, 0.0))).abs() < EPSILON);
        assert!((heading(origin, Vec2::new(0.0, 1.0)) - FRAC_PI_2).abs() < EPSILON);
        assert!((heading(origin, Vec2::new(0.0, -1.0)) + FRAC_PI_2).abs() < EPSILON);
        assert!((heading(origin, Vec2::new(-1.0, -1.0)) + 3.0 * PI / 4.0).abs() < EPSILON);
    }

    #[test]
    fn heading_pointing_left_is_pi() {
        let angle = heading(Vec2::new(5.0, 3.0), Vec2::new(2.0, 3.0));
        assert!((angle - PI).abs() < EPSILON);
        let angle = heading(Vec2::ZERO, Vec2::new(-1.0, -0.0));
        assert!(angle > 0.0);
    }

    #[test]
    fn heading_is_scale_invariant() {
        let (a, b) = (Vec2::new(3.0, 7.0), Vec2::new(4.0, 9.0));
        let angle = heading(a, b);
        let scaled = heading(a * 3.5, b * 3.5);
        assert!((angle - scaled).abs() < EPSILON);
    }

    #[test]
    fn tail_heading_needs_two_points() {
        assert_eq!(tail_heading(&[]), None);
        assert_eq!(tail_heading(&[Vec2::ONE]), None);
        assert!(tail_heading(&[Vec2::ZERO, Vec2::ONE]).is_some());
    }

    #[test]
    fn rounded_snaps_to_nearest_pixel() {
        assert_eq!(rounded(2.4, 2.6), Vec2::new(2.0, 3.0));
        assert_eq!(rounded(-1.6, 0.4), Vec2::new(-2.0, 0.0));
    }
}
