use std::fmt::{Display, Formatter};
use std::str::FromStr;
use ggez::glam::Vec2;
use log::debug;
use serde::{Deserialize, Serialize};
use crate::error::{ConfigError, ParabolaError};
use crate::point;
use crate::quadratic::Quadratic;

/// Longest span, in pixels, a trajectory may be sampled over.
pub const MAX_SPAN: usize = 1 << 16;
// Slack on the vertical bounds so that an endpoint evaluated back from its own
// fit is not dropped over a rounding error.
const Y_TOLERANCE: f64 = 1e-6;

/// How the upwards facing branch bends through its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FitMode {
    /// Quadratic through both endpoints, vertex on the higher one.
    #[default]
    Exact,
    /// Midpoint construction which moves the destination height onto the curve.
    VertexMidpoint,
}

impl FitMode {
    pub fn toggled(self) -> Self {
        match self {
            FitMode::Exact => FitMode::VertexMidpoint,
            FitMode::VertexMidpoint => FitMode::Exact,
        }
    }
}

impl Display for FitMode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            FitMode::Exact => write!(f, "exact"),
            FitMode::VertexMidpoint => write!(f, "vertex-midpoint"),
        }
    }
}

impl FromStr for FitMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(FitMode::Exact),
            "vertex-midpoint" | "midpoint" => Ok(FitMode::VertexMidpoint),
            _ => Err(ConfigError::Validation(format!(
                "Unknown fit mode: {}. Valid modes are: exact, vertex-midpoint",
                s
            ))),
        }
    }
}

/// Which formula produced the samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    /// The destination is lower on screen (greater y) than the source.
    /// The curve leaves `from` at its vertex.
    Upwards,
    /// The destination is at the same height or higher on screen.
    /// The vertex sits on the right hand endpoint.
    Downwards,
    /// Both endpoints share the same x: no parabola exists, a vertical line is sampled.
    Straight,
}

/// A trajectory between two screen points, sampled once at construction.
///
/// Points are ordered from `from` to `to` and snapped to whole pixels, one
/// per horizontal pixel of span.
#[derive(Debug, Clone, PartialEq)]
pub struct Parabola {
    from: Vec2,
    to: Vec2,
    fit: FitMode,
    facing: Facing,
    points: Vec<Vec2>,
    heading: Option<f32>,
}

impl Parabola {
    pub fn new(from: Vec2, to: Vec2) -> Result<Self, ParabolaError> {
        Self::with_fit(from, to, FitMode::default())
    }

    pub fn with_fit(from: Vec2, to: Vec2, fit: FitMode) -> Result<Self, ParabolaError> {
        for p in [from, to] {
            if !point::is_finite(p) {
                return Err(ParabolaError::NonFiniteEndpoint { x: p.x, y: p.y });
            }
        }

        let span = (if from.x == to.x { to.y - from.y } else { to.x - from.x }).abs();
        if span > MAX_SPAN as f32 {
            return Err(ParabolaError::SpanTooLarge { span, limit: MAX_SPAN });
        }

        let (facing, points) = if from.x == to.x {
            (Facing::Straight, Parabola::vertical_points(from, to))
        } else if from.y < to.y {
            (Facing::Upwards, Parabola::upwards_facing_points(from, to, fit))
        } else {
            // Sample left to right, then restore the caller's direction.
            let flip = from.x > to.x;
            let (start, end) = if flip { (to, from) } else { (from, to) };
            let mut points = Parabola::downwards_facing_points(start, end);
            if flip {
                points.reverse();
            }
            (Facing::Downwards, points)
        };

        let heading = point::tail_heading(&points);
        debug!(
            "Sampled {:?} trajectory ({}) from {} to {}: {} points, heading {:?}",
            facing, fit, from, to, points.len(), heading
        );

        Ok(Self { from, to, fit, facing, points, heading })
    }

    pub fn from(&self) -> Vec2 {
        self.from
    }

    pub fn to(&self) -> Vec2 {
        self.to
    }

    pub fn fit(&self) -> FitMode {
        self.fit
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Direction of the last segment, absent when fewer than two points were sampled.
    pub fn heading(&self) -> Option<f32> {
        self.heading
    }

    /// Requires `to.y > from.y` and `from.x != to.x`.
    fn upwards_facing_points(from: Vec2, to: Vec2, fit: FitMode) -> Vec<Vec2> {
        if from.x > to.x {
            // Mirror horizontally so the vertex stays on `from`.
            let mirror = |p: Vec2| Vec2::new(-p.x, p.y);
            return Parabola::upwards_facing_points(mirror(from), mirror(to), fit)
                .into_iter()
                .map(mirror)
                .collect();
        }

        let (curve, end_y) = match fit {
            FitMode::Exact => (Quadratic::through_vertex(from, to), to.y as f64),
            FitMode::VertexMidpoint => Quadratic::vertex_midpoint(from, to),
        };

        Parabola::sample(&curve, from.x, to.x, from.y as f64, end_y)
    }

    /// Requires `start.x != end.x`.
    fn downwards_facing_points(start: Vec2, end: Vec2) -> Vec<Vec2> {
        let curve = Quadratic::through_vertex(end, start);

        Parabola::sample(
            &curve,
            start.x.min(end.x),
            start.x.max(end.x),
            start.y.min(end.y) as f64,
            start.y.max(end.y) as f64,
        )
    }

    /// Requires `x_max - x_min <= MAX_SPAN`.
    fn sample(curve: &Quadratic, x_min: f32, x_max: f32, y_min: f64, y_max: f64) -> Vec<Vec2> {
        let x_min = x_min as f64;
        let steps = (x_max as f64 - x_min).floor() as usize;

        (0..=steps)
            .filter_map(|i| {
                let x = x_min + i as f64;
                let y = curve.eval(x);
                if y >= y_min - Y_TOLERANCE && y <= y_max + Y_TOLERANCE {
                    let y = y.max(y_min).min(y_max);
                    Some(point::rounded(x as f32, y as f32))
                } else {
                    None
                }
            })
            .collect()
    }

    /// One sample per pixel of height, the last one landing on `to`.
    fn vertical_points(from: Vec2, to: Vec2) -> Vec<Vec2> {
        let span = to.y - from.y;
        let steps = span.abs().round() as usize;
        if steps == 0 {
            return vec![point::rounded(from.x, from.y)];
        }

        (0..=steps)
            .map(|i| point::rounded(from.x, from.y + span * (i as f32 / steps as f32)))
            .collect()
    }
}

impl Display for Parabola {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "PARABOLA from ({}, {}) (LMB) to ({}, {}) (RMB)   fit: {} (F)   points: {}",
            self.from.x, self.from.y, self.to.x, self.to.y, self.fit, self.points.len(),
        )
    }
}
