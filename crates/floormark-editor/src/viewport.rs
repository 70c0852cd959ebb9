//! Zoom state and screen-to-image coordinate mapping.

use floormark_core::Point;

/// Smallest zoom factor the viewport will clamp to.
pub const MIN_SCALE: f64 = 0.3;
/// Largest zoom factor the viewport will clamp to.
pub const MAX_SCALE: f64 = 3.0;
/// Multiplicative step applied per zoom command.
pub const SCALE_STEP: f64 = 1.25;

/// View transform between on-screen pixels and image pixels.
///
/// The plan image is drawn scaled by `scale`; annotation points are stored
/// in image pixel coordinates, so pointer positions must be mapped through
/// [`Viewport::screen_to_image`] before they enter the document.
#[derive(Debug, Clone)]
pub struct Viewport {
    scale: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Current zoom as a whole percentage, for status displays.
    pub fn zoom_percent(&self) -> i32 {
        (self.scale * 100.0).round() as i32
    }

    /// Zooms in one step, clamped to [`MAX_SCALE`].
    pub fn zoom_in(&mut self) {
        self.scale = (self.scale * SCALE_STEP).min(MAX_SCALE);
    }

    /// Zooms out one step, clamped to [`MIN_SCALE`].
    pub fn zoom_out(&mut self) {
        self.scale = (self.scale / SCALE_STEP).max(MIN_SCALE);
    }

    /// Returns to the 1:1 view.
    pub fn reset(&mut self) {
        self.scale = 1.0;
    }

    /// Maps an on-screen position to image pixel coordinates.
    pub fn screen_to_image(&self, x: f64, y: f64) -> Point {
        Point::new(x / self.scale, y / self.scale)
    }
}

impl std::fmt::Display for Viewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Zoom: {}%", self.zoom_percent())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_in_clamps_at_max() {
        let mut viewport = Viewport::new();
        for _ in 0..20 {
            viewport.zoom_in();
        }
        assert_eq!(viewport.scale(), MAX_SCALE);
    }

    #[test]
    fn test_zoom_out_clamps_at_min() {
        let mut viewport = Viewport::new();
        for _ in 0..20 {
            viewport.zoom_out();
        }
        assert_eq!(viewport.scale(), MIN_SCALE);
    }

    #[test]
    fn test_zoom_round_trip_restores_scale() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        viewport.zoom_out();
        assert!((viewport.scale() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_screen_to_image_divides_by_scale() {
        let mut viewport = Viewport::new();
        viewport.zoom_in();
        let mapped = viewport.screen_to_image(125.0, 250.0);
        assert!((mapped.x - 100.0).abs() < 1e-9);
        assert!((mapped.y - 200.0).abs() < 1e-9);
    }

    #[test]
    fn test_display_reports_percent() {
        let mut viewport = Viewport::new();
        assert_eq!(viewport.to_string(), "Zoom: 100%");
        viewport.zoom_in();
        assert_eq!(viewport.to_string(), "Zoom: 125%");
    }
}
