//! Viewport scaling
//!
//! The game simulates in a fixed 1920x1080 logical space; this module maps
//! that space onto whatever window is available, preserving aspect ratio
//! with centered letterboxing. Recomputed on every resize; only the last
//! transform is kept, by the platform driver.

use glam::Vec2;

use crate::consts::{LOGICAL_H, LOGICAL_W, VIEW_MARGIN};

/// Uniform scale plus letterbox offsets, logical space -> CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub scale: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl ViewTransform {
    /// Fit the logical canvas into `avail_w` x `avail_h` CSS pixels,
    /// keeping a small margin. Degenerate windows floor the scale at 0.
    pub fn fit(avail_w: f32, avail_h: f32) -> Self {
        let scale = ((avail_w - VIEW_MARGIN) / LOGICAL_W)
            .min((avail_h - VIEW_MARGIN) / LOGICAL_H)
            .max(0.0);
        Self {
            scale,
            offset_x: (avail_w - LOGICAL_W * scale) / 2.0,
            offset_y: (avail_h - LOGICAL_H * scale) / 2.0,
        }
    }

    /// Map a CSS-pixel point (e.g. a click) back into logical coordinates.
    /// Returns `None` when the scale is degenerate.
    pub fn to_logical(&self, css_x: f32, css_y: f32) -> Option<Vec2> {
        if self.scale <= f32::EPSILON {
            return None;
        }
        Some(Vec2::new(
            (css_x - self.offset_x) / self.scale,
            (css_y - self.offset_y) / self.scale,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fit_wide_window_letterboxes_horizontally() {
        // Height is the limiting axis here
        let view = ViewTransform::fit(4000.0, 1100.0);
        let expected_scale = (1100.0 - VIEW_MARGIN) / LOGICAL_H;
        assert!((view.scale - expected_scale).abs() < 1e-5);
        assert!(view.offset_x > 0.0);
        assert!((view.offset_y - VIEW_MARGIN / 2.0).abs() < 1e-3);
    }

    #[test]
    fn test_fit_tall_window_letterboxes_vertically() {
        let view = ViewTransform::fit(980.0, 4000.0);
        let expected_scale = (980.0 - VIEW_MARGIN) / LOGICAL_W;
        assert!((view.scale - expected_scale).abs() < 1e-5);
        assert!((view.offset_x - VIEW_MARGIN / 2.0).abs() < 1e-3);
        assert!(view.offset_y > 0.0);
    }

    #[test]
    fn test_exact_fit_has_margin_offsets_only() {
        let view = ViewTransform::fit(LOGICAL_W + VIEW_MARGIN, LOGICAL_H + VIEW_MARGIN);
        assert!((view.scale - 1.0).abs() < 1e-5);
        assert!((view.offset_x - VIEW_MARGIN / 2.0).abs() < 1e-2);
        assert!((view.offset_y - VIEW_MARGIN / 2.0).abs() < 1e-2);
    }

    #[test]
    fn test_to_logical_inverts_fit() {
        let view = ViewTransform::fit(1300.0, 800.0);
        let logical = Vec2::new(960.0, 540.0);
        let css_x = logical.x * view.scale + view.offset_x;
        let css_y = logical.y * view.scale + view.offset_y;

        let back = view.to_logical(css_x, css_y).unwrap();
        assert!((back - logical).length() < 1e-2);
    }

    #[test]
    fn test_degenerate_window_yields_no_mapping() {
        let view = ViewTransform::fit(10.0, 10.0);
        assert_eq!(view.scale, 0.0);
        assert!(view.to_logical(5.0, 5.0).is_none());
    }
}
