//! Phase overlays: splash prompt, explore hint, score/timer, result panel

use web_sys::CanvasRenderingContext2d;

use crate::consts::*;
use crate::sim::{GameState, Phase, near_gate};

/// Splash message over the title background.
pub fn draw_splash(ctx: &CanvasRenderingContext2d, armed: bool) {
    ctx.save();
    ctx.set_text_align("center");

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("120px sans-serif");
    let _ = ctx.fill_text("Toy Festival", (LOGICAL_W / 2.0) as f64, 420.0);

    ctx.set_font("48px sans-serif");
    ctx.set_fill_style_str("rgba(255,255,255,0.85)");
    let message = if armed {
        "Welcome! The game will start shortly..."
    } else {
        "Click to start"
    };
    let _ = ctx.fill_text(message, (LOGICAL_W / 2.0) as f64, 620.0);
    ctx.restore();
}

/// Gate hint while exploring; brightens when the player is close.
pub fn draw_explore_hint(ctx: &CanvasRenderingContext2d, state: &GameState) {
    let close = near_gate(&state.player.hitbox(Phase::Explore), &state.gate);
    ctx.save();
    ctx.set_text_align("center");
    ctx.set_font("36px sans-serif");
    ctx.set_fill_style_str(if close {
        "rgba(255,230,120,1.0)"
    } else {
        "rgba(255,255,255,0.6)"
    });
    let _ = ctx.fill_text(
        "Walk into the glowing gate to play",
        (state.gate.x + state.gate.w / 2.0) as f64,
        (state.gate.y - 30.0) as f64,
    );
    ctx.restore();
}

/// Score (top-left) and countdown (top-right) panels.
pub fn draw_minigame_hud(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.save();

    ctx.set_fill_style_str("rgba(0,0,0,0.4)");
    ctx.fill_rect(14.0, 14.0, 300.0, 64.0);
    ctx.fill_rect((LOGICAL_W - 314.0) as f64, 14.0, 300.0, 64.0);

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("40px sans-serif");
    ctx.set_text_align("left");
    let _ = ctx.fill_text(&format!("Score: {}", state.score), 28.0, 60.0);
    ctx.set_text_align("right");
    let _ = ctx.fill_text(
        &format!("Time: {}", state.time_left),
        (LOGICAL_W - 28.0) as f64,
        60.0,
    );

    ctx.restore();
}

/// Semi-transparent result panel with the two buttons.
pub fn draw_result_panel(ctx: &CanvasRenderingContext2d, state: &GameState) {
    ctx.save();

    // Dim the scene behind the panel
    ctx.set_fill_style_str("rgba(0,0,0,0.55)");
    ctx.fill_rect(0.0, 0.0, LOGICAL_W as f64, LOGICAL_H as f64);

    let p = RESULT_PANEL;
    ctx.set_fill_style_str("rgba(30,30,50,0.92)");
    ctx.fill_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);
    ctx.set_stroke_style_str("rgba(255,230,120,0.9)");
    ctx.set_line_width(4.0);
    ctx.stroke_rect(p.x as f64, p.y as f64, p.w as f64, p.h as f64);

    ctx.set_text_align("center");
    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("72px sans-serif");
    let _ = ctx.fill_text("Time's up!", (LOGICAL_W / 2.0) as f64, (p.y + 130.0) as f64);
    ctx.set_font("56px sans-serif");
    let _ = ctx.fill_text(
        &format!("You caught {} toys", state.score),
        (LOGICAL_W / 2.0) as f64,
        (p.y + 240.0) as f64,
    );

    draw_button(ctx, &RESULT_BACK_BUTTON, "Go back");
    draw_button(ctx, &RESULT_AGAIN_BUTTON, "Play again");

    ctx.restore();
}

fn draw_button(ctx: &CanvasRenderingContext2d, rect: &crate::sim::Rect, label: &str) {
    ctx.set_fill_style_str("rgba(255,230,120,0.15)");
    ctx.fill_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);
    ctx.set_stroke_style_str("rgba(255,230,120,0.9)");
    ctx.set_line_width(3.0);
    ctx.stroke_rect(rect.x as f64, rect.y as f64, rect.w as f64, rect.h as f64);

    ctx.set_fill_style_str("#ffffff");
    ctx.set_font("36px sans-serif");
    ctx.set_text_align("center");
    let _ = ctx.fill_text(
        label,
        (rect.x + rect.w / 2.0) as f64,
        (rect.y + rect.h / 2.0 + 12.0) as f64,
    );
}
