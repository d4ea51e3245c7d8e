use ggez::{Context, GameResult};
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Color, DrawMode, DrawParam, Image, InstanceArray, Mesh};
use log::{info, warn};
use crate::config::ParabolaStyle;
use crate::marker::{layout_markers, Marker, MarkerStamp, MarkerSurface};
use crate::parabola_curve::Parabola;

// Fallback geometry, in pixels at scale 1.0.
const CIRCLE_RADIUS: f32 = 16.0;
const CIRCLE_TOLERANCE: f32 = 0.1;
const CIRCLE_COLOR: Color = Color::new(0.25, 0.45, 0.95, 0.6);
const ARROW_SIZE: f32 = 24.0;
const ARROW_COLOR: Color = Color::new(0.2, 0.35, 0.9, 1.0);

/// One sprite batch: a texture, or a mesh instanced at every stamp.
struct MarkerBatch {
    instances: InstanceArray,
    mesh: Option<Mesh>,
    offset: Vec2,
}

impl MarkerBatch {
    fn textured(ctx: &mut Context, image: Image) -> Self {
        MarkerBatch {
            instances: InstanceArray::new(ctx, image),
            mesh: None,
            // Images are anchored on their top left corner otherwise
            offset: Vec2::new(0.5, 0.5),
        }
    }

    fn procedural(ctx: &mut Context, mesh: Mesh) -> Self {
        MarkerBatch {
            instances: InstanceArray::new(ctx, None::<Image>),
            mesh: Some(mesh),
            offset: Vec2::ZERO,
        }
    }

    fn load(ctx: &mut Context, texture: &str, fallback: fn(&mut Context) -> GameResult<Mesh>) -> GameResult<Self> {
        let path = format!("/{}.png", texture);
        match Image::from_path(ctx, &path) {
            Ok(image) => {
                info!("Loaded marker texture {}", path);
                Ok(MarkerBatch::textured(ctx, image))
            }
            Err(e) => {
                warn!("Could not load marker texture {} ({}), drawing a mesh instead", path, e);
                let mesh = fallback(ctx)?;
                Ok(MarkerBatch::procedural(ctx, mesh))
            }
        }
    }

    fn push(&mut self, stamp: &MarkerStamp) {
        self.instances.push(
            DrawParam::new()
                .dest(stamp.dest)
                .offset(self.offset)
                .rotation(stamp.rotation)
                .scale(Vec2::splat(stamp.scale)),
        );
    }

    fn draw(&self, canvas: &mut Canvas) {
        match &self.mesh {
            Some(mesh) => canvas.draw_instanced_mesh(mesh.clone(), &self.instances, DrawParam::default()),
            None => canvas.draw(&self.instances, DrawParam::default()),
        }
    }
}

fn circle_mesh(ctx: &mut Context) -> GameResult<Mesh> {
    Mesh::new_circle(ctx, DrawMode::fill(), Vec2::ZERO, CIRCLE_RADIUS, CIRCLE_TOLERANCE, CIRCLE_COLOR)
}

/// Arrow head pointing along +x, its tip on the origin.
fn arrow_mesh(ctx: &mut Context) -> GameResult<Mesh> {
    let points = [
        Vec2::new(0.0, 0.0),
        Vec2::new(-ARROW_SIZE, -ARROW_SIZE / 2.0),
        Vec2::new(-ARROW_SIZE, ARROW_SIZE / 2.0),
    ];
    Mesh::new_polygon(ctx, DrawMode::fill(), &points, ARROW_COLOR)
}

/// Sprite batches of a trajectory. Filled once per trajectory, drawn every frame.
pub struct SpriteMarkers {
    circles: MarkerBatch,
    arrows: MarkerBatch,
}

impl SpriteMarkers {
    pub fn load(ctx: &mut Context, style: &ParabolaStyle) -> GameResult<SpriteMarkers> {
        Ok(SpriteMarkers {
            circles: MarkerBatch::load(ctx, &style.circle_texture, circle_mesh)?,
            arrows: MarkerBatch::load(ctx, &style.arrow_texture, arrow_mesh)?,
        })
    }

    pub fn rebuild(&mut self, parabola: &Parabola, style: &ParabolaStyle) {
        self.circles.instances.clear();
        self.arrows.instances.clear();
        layout_markers(parabola, style, self);
    }

    pub fn draw(&self, canvas: &mut Canvas) {
        self.circles.draw(canvas);
        self.arrows.draw(canvas);
    }
}

impl MarkerSurface for SpriteMarkers {
    fn stamp(&mut self, stamp: MarkerStamp) {
        match stamp.kind {
            Marker::Circle => self.circles.push(&stamp),
            Marker::Arrow => self.arrows.push(&stamp),
        }
    }
}
