//! Backgrounds and entity sprites

use std::f64::consts::TAU;

use web_sys::CanvasRenderingContext2d;

use crate::assets::ImageRegistry;
use crate::consts::*;
use crate::sim::{GameState, Phase};

/// Full-canvas background image, or a solid color when the image is missing.
pub fn draw_background(
    ctx: &CanvasRenderingContext2d,
    images: &ImageRegistry,
    key: &str,
    fallback: &str,
) {
    match images.get(key) {
        Some(img) => {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                img,
                0.0,
                0.0,
                LOGICAL_W as f64,
                LOGICAL_H as f64,
            );
        }
        None => {
            ctx.set_fill_style_str(fallback);
            ctx.fill_rect(0.0, 0.0, LOGICAL_W as f64, LOGICAL_H as f64);
        }
    }
}

/// The glowing gate zone on the plaza.
pub fn draw_gate(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let g = &state.gate;
    ctx.save();
    ctx.set_shadow_color("rgba(255,200,80,0.9)");
    ctx.set_shadow_blur(30.0);
    ctx.set_fill_style_str("rgba(255,230,120,0.12)");
    ctx.fill_rect(g.x as f64, g.y as f64, g.w as f64, g.h as f64);
    ctx.set_stroke_style_str("rgba(255,230,120,0.9)");
    ctx.set_line_width(4.0);
    ctx.stroke_rect(g.x as f64, g.y as f64, g.w as f64, g.h as f64);
    ctx.restore();
}

/// Player sprite for the current facing, scaled up during the mini-game.
pub fn draw_player(ctx: &CanvasRenderingContext2d, images: &ImageRegistry, state: &GameState) {
    let scale = match state.phase {
        Phase::MiniGame | Phase::Result => MINIGAME_PLAYER_SCALE,
        _ => 1.0,
    };
    let w = (PLAYER_W * scale) as f64;
    let h = (PLAYER_H * scale) as f64;
    let x = state.player.pos.x as f64;
    let y = state.player.pos.y as f64;

    match images.get(state.player.facing.sprite_key()) {
        Some(img) => {
            let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h);
        }
        None => {
            ctx.set_fill_style_str("#e08030");
            ctx.fill_rect(x, y, w, h);
        }
    }
}

/// The falling toy batch.
pub fn draw_toys(ctx: &CanvasRenderingContext2d, images: &ImageRegistry, state: &GameState) {
    for toy in &state.toys {
        let x = toy.pos.x as f64;
        let y = toy.pos.y as f64;
        match images.get(toy.kind.sprite_key()) {
            Some(img) => {
                let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(
                    img,
                    x,
                    y,
                    TOY_SIZE as f64,
                    TOY_SIZE as f64,
                );
            }
            None => {
                // Placeholder: filled circle in the toy's bounding box
                ctx.begin_path();
                let half = (TOY_SIZE / 2.0) as f64;
                let _ = ctx.arc(x + half, y + half, half, 0.0, TAU);
                ctx.set_fill_style_str("#ffdd33");
                ctx.fill();
                ctx.set_stroke_style_str("#aa8800");
                ctx.stroke();
            }
        }
    }
}
