//! Canvas2D presentation
//!
//! Reads the data model and draws it; never mutates game state. Every image
//! lookup can miss (a resource absent from the manifest, or a key typo) and
//! falls back to a solid shape of the same bounding rect so gameplay never
//! blocks on visuals.

mod hud;
mod scene;

use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::assets::ImageRegistry;
use crate::sim::{GameState, Phase};

pub struct Renderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    images: ImageRegistry,
}

impl Renderer {
    pub fn new(
        canvas: HtmlCanvasElement,
        ctx: CanvasRenderingContext2d,
        images: ImageRegistry,
    ) -> Self {
        Self {
            canvas,
            ctx,
            images,
        }
    }

    /// Draw one frame. The driver has already installed the logical-to-
    /// device transform on the context; everything here works in logical
    /// coordinates except the letterbox clear.
    pub fn draw(&self, state: &GameState) {
        self.clear_backdrop();

        match state.phase {
            Phase::Splash => {
                scene::draw_background(&self.ctx, &self.images, "splash_bg", "#1a1a3e");
                hud::draw_splash(&self.ctx, state.splash_armed());
            }
            Phase::Explore => {
                scene::draw_background(&self.ctx, &self.images, "plaza_bg", "#2e4a2e");
                scene::draw_gate(&self.ctx, state);
                scene::draw_player(&self.ctx, &self.images, state);
                hud::draw_explore_hint(&self.ctx, state);
            }
            Phase::MiniGame => {
                scene::draw_background(&self.ctx, &self.images, "booth_bg", "#3a2a4a");
                scene::draw_toys(&self.ctx, &self.images, state);
                scene::draw_player(&self.ctx, &self.images, state);
                hud::draw_minigame_hud(&self.ctx, state);
            }
            Phase::Result => {
                scene::draw_background(&self.ctx, &self.images, "booth_bg", "#3a2a4a");
                scene::draw_player(&self.ctx, &self.images, state);
                hud::draw_result_panel(&self.ctx, state);
            }
        }
    }

    /// Fill the whole backing store (letterbox bars included) before the
    /// logical-space draw.
    fn clear_backdrop(&self) {
        self.ctx.save();
        let _ = self.ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0);
        self.ctx.set_fill_style_str("#000000");
        self.ctx.fill_rect(
            0.0,
            0.0,
            self.canvas.width() as f64,
            self.canvas.height() as f64,
        );
        self.ctx.restore();
    }
}
