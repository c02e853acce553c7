//! Pointer position normalisation and the parallax tilt derived from it.

/// Visible size of the browser window in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

/// Pointer position relative to the viewport centre, in `[-1, 1]` on both
/// axes. `(-1, -1)` is the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerOffset {
    pub x: f64,
    pub y: f64,
}

impl PointerOffset {
    pub const CENTER: PointerOffset = PointerOffset { x: 0.0, y: 0.0 };

    pub fn from_client(client_x: f64, client_y: f64, viewport: Viewport) -> Self {
        Self {
            x: normalize_axis(client_x, viewport.width),
            y: normalize_axis(client_y, viewport.height),
        }
    }
}

fn normalize_axis(position: f64, extent: f64) -> f64 {
    // Also rejects NaN extents.
    if !(extent > 0.0) || position.is_nan() {
        return 0.0;
    }
    (position / extent * 2.0 - 1.0).clamp(-1.0, 1.0)
}

/// 3-D rotation of the hero panel, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    /// Largest rotation on either axis, reached at the viewport edges.
    pub const MAX_DEGREES: f64 = 2.0;
    pub const PERSPECTIVE_PX: u32 = 1000;

    /// Vertical pointer travel tips the panel around X, horizontal around Y.
    pub fn from_offset(offset: PointerOffset) -> Self {
        Self {
            rotate_x: offset.y * Self::MAX_DEGREES,
            rotate_y: offset.x * Self::MAX_DEGREES,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "perspective({}px) rotateX({:.3}deg) rotateY({:.3}deg)",
            Self::PERSPECTIVE_PX,
            self.rotate_x,
            self.rotate_y
        )
    }
}
