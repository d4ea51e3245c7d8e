use ggez::glam::Vec2;
use crate::config::ParabolaStyle;
use crate::parabola_curve::Parabola;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Circle,
    Arrow,
}

/// One sprite placement, centred on `dest`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerStamp {
    pub kind: Marker,
    pub dest: Vec2,
    pub rotation: f32,
    pub scale: f32,
}

/// Anything the trajectory can be stamped onto.
pub trait MarkerSurface {
    fn stamp(&mut self, stamp: MarkerStamp);
}

/// Scales of `count` successive circles: growing from `base_scale` by
/// `size_growth` each, never past `max_scale`.
pub fn marker_scales(count: usize, style: &ParabolaStyle) -> impl Iterator<Item = f32> + '_ {
    (0..count).map(move |i| grown_scale(i, style))
}

fn grown_scale(steps: usize, style: &ParabolaStyle) -> f32 {
    (style.base_scale + style.size_growth * steps as f32).min(style.max_scale)
}

/// Stamps one circle per sampled point, then the arrow head on the last one.
///
/// The arrow carries the scale the next circle would have had. It is left out
/// when the trajectory has no heading.
pub fn layout_markers(parabola: &Parabola, style: &ParabolaStyle, surface: &mut impl MarkerSurface) {
    let points = parabola.points();

    for (dest, scale) in points.iter().zip(marker_scales(points.len(), style)) {
        surface.stamp(MarkerStamp { kind: Marker::Circle, dest: *dest, rotation: 0.0, scale });
    }

    if let (Some(rotation), Some(dest)) = (parabola.heading(), points.last()) {
        surface.stamp(MarkerStamp {
            kind: Marker::Arrow,
            dest: *dest,
            rotation,
            scale: grown_scale(points.len(), style),
        });
    }
}
