//! Rectangle math shared by the snap, drag, and resize code.

use serde::{Deserialize, Serialize};
use simdesk_common::{CompositorError, Length, Rect};

/// A rectangle expressed as fractions (0..1) of some reference area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractionalRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl FractionalRect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn resolve(&self, area: Rect) -> Rect {
        Rect::new(
            area.x + self.x * area.width,
            area.y + self.y * area.height,
            self.width * area.width,
            self.height * area.height,
        )
    }
}

/// Grow `rect` to at least `min_width` x `min_height`, keeping its origin.
pub fn clamp_size(rect: Rect, min_width: f64, min_height: f64) -> Rect {
    Rect {
        width: rect.width.max(min_width),
        height: rect.height.max(min_height),
        ..rect
    }
}

/// Reject rectangles that cannot be displayed: non-finite coordinates or a
/// non-positive side.
pub fn check_degenerate(rect: Rect) -> Result<(), CompositorError> {
    let finite = [rect.x, rect.y, rect.width, rect.height]
        .iter()
        .all(|v| v.is_finite());
    if finite && rect.width > 0.0 && rect.height > 0.0 {
        Ok(())
    } else {
        Err(CompositorError::DegenerateGeometry {
            width: rect.width,
            height: rect.height,
        })
    }
}

/// Replace a degenerate rectangle with one of the minimum size.
///
/// Non-finite coordinates fall back to the workspace origin.
pub fn sanitize(rect: Rect, min_width: f64, min_height: f64) -> Rect {
    let or_zero = |v: f64| if v.is_finite() { v } else { 0.0 };
    let positive = |v: f64, min: f64| if v.is_finite() && v > 0.0 { v } else { min };
    Rect::new(
        or_zero(rect.x),
        or_zero(rect.y),
        positive(rect.width, min_width),
        positive(rect.height, min_height),
    )
}

/// Resolve a width/height pair against `area`.
pub fn resolve_size(width: Length, height: Length, area: Rect) -> (f64, f64) {
    (width.resolve(area.width), height.resolve(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    const AREA: Rect = Rect::new(0.0, 0.0, 1920.0, 1030.0);

    #[test]
    fn fractional_half_resolves() {
        let left = FractionalRect::new(0.0, 0.0, 0.5, 1.0).resolve(AREA);
        assert_eq!(left, Rect::new(0.0, 0.0, 960.0, 1030.0));

        let bottom_right = FractionalRect::new(0.5, 0.5, 0.5, 0.5).resolve(AREA);
        assert_eq!(bottom_right, Rect::new(960.0, 515.0, 960.0, 515.0));
    }

    #[test]
    fn fractional_respects_area_offset() {
        let area = Rect::new(100.0, 50.0, 800.0, 600.0);
        let r = FractionalRect::new(0.5, 0.0, 0.5, 1.0).resolve(area);
        assert_eq!(r, Rect::new(500.0, 50.0, 400.0, 600.0));
    }

    #[test]
    fn clamp_size_keeps_origin() {
        let r = clamp_size(Rect::new(10.0, 20.0, 100.0, 500.0), 300.0, 200.0);
        assert_eq!(r, Rect::new(10.0, 20.0, 300.0, 500.0));
    }

    #[test]
    fn degenerate_detection() {
        assert!(check_degenerate(Rect::new(0.0, 0.0, 10.0, 10.0)).is_ok());
        assert_eq!(
            check_degenerate(Rect::new(0.0, 0.0, 0.0, 10.0)),
            Err(CompositorError::DegenerateGeometry {
                width: 0.0,
                height: 10.0
            })
        );
        assert!(check_degenerate(Rect::new(f64::NAN, 0.0, 10.0, 10.0)).is_err());
    }

    #[test]
    fn sanitize_replaces_bad_sides() {
        let r = sanitize(Rect::new(5.0, f64::INFINITY, -4.0, 80.0), 300.0, 200.0);
        assert_eq!(r, Rect::new(5.0, 0.0, 300.0, 80.0));
    }

    #[test]
    fn resolve_mixed_lengths() {
        let (w, h) = resolve_size(Length::Percent(60.0), Length::Px(400.0), AREA);
        assert!((w - 1152.0).abs() < 1e-9);
        assert_eq!(h, 400.0);
    }
}
