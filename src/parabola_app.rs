use ggez::{Context, GameResult};
use ggez::event::{self, Button, GamepadId, MouseButton};
use ggez::glam::Vec2;
use ggez::graphics::{Canvas, Color};
use ggez::input::keyboard::{KeyCode, KeyInput};
use log::{info, warn};
use crate::config::{ParabolaConfig, ParabolaStyle};
use crate::parabola_curve::{FitMode, Parabola};
use crate::sprites::SpriteMarkers;

pub struct ParabolaApp {
    parabola: Parabola,
    style: ParabolaStyle,
    background: Color,
    sprites: SpriteMarkers,
}

impl ParabolaApp {
    pub fn new(ctx: &mut Context, config: &ParabolaConfig) -> GameResult<ParabolaApp> {
        let style = config.style.clone();
        let parabola = Parabola::with_fit(config.from_point(), config.to_point(), style.fit)
            .map_err(|e| ggez::GameError::CustomError(e.to_string()))?;
        let mut sprites = SpriteMarkers::load(ctx, &style)?;
        sprites.rebuild(&parabola, &style);

        Ok(ParabolaApp {
            parabola,
            style,
            background: config.window.background_color(),
            sprites,
        })
    }

    /// Replaces the trajectory, keeping the current one if the endpoints do not fit.
    fn retarget(&mut self, from: Vec2, to: Vec2, fit: FitMode) {
        match Parabola::with_fit(from, to, fit) {
            Ok(parabola) => {
                info!("Trajectory from {} to {} ({}), {} points", from, to, fit, parabola.points().len());
                self.sprites.rebuild(&parabola, &self.style);
                self.parabola = parabola;
            }
            Err(e) => warn!("Keeping previous trajectory: {}", e),
        }
    }
}

impl event::EventHandler<ggez::GameError> for ParabolaApp {
    fn update(&mut self, ctx: &mut Context) -> GameResult {
        Ok(ctx.gfx.window().set_title(&format!("{}", self.parabola)))
    }

    fn draw(&mut self, ctx: &mut Context) -> GameResult {
        let mut canvas = Canvas::from_frame(ctx, self.background);
        self.sprites.draw(&mut canvas);
        canvas.finish(ctx)
    }

    fn mouse_button_up_event(
        &mut self,
        _ctx: &mut Context,
        button: MouseButton,
        x: f32,
        y: f32,
    ) -> GameResult {
        let (from, to, fit) = (self.parabola.from(), self.parabola.to(), self.parabola.fit());
        Ok(
            match button {
                MouseButton::Left => self.retarget(Vec2::new(x, y), to, fit),
                MouseButton::Right => self.retarget(from, Vec2::new(x, y), fit),
                _ => ()
            }
        )
    }

    fn key_down_event(&mut self, ctx: &mut Context, input: KeyInput, _repeat: bool) -> GameResult {
        let (from, to, fit) = (self.parabola.from(), self.parabola.to(), self.parabola.fit());
        Ok(
            match input.keycode {
                Some(KeyCode::Escape) => ctx.request_quit(),
                Some(KeyCode::F) => self.retarget(from, to, fit.toggled()),
                _ => ()
            }
        )
    }

    fn gamepad_button_down_event(
        &mut self,
        ctx: &mut Context,
        btn: Button,
        _id: GamepadId,
    ) -> GameResult {
        Ok(
            match btn {
                Button::Select => ctx.request_quit(),
                _ => ()
            }
        )
    }
}
