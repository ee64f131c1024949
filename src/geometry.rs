use crate::config::Orientation;
use crate::dial::FULL_CIRCLE;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn inset(&self, d: f64) -> Self {
        Self::new(self.left + d, self.top + d, self.right - d, self.bottom - d)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }
}

/// Square bounding boxes for the dial's concentric rings, centered in the
/// host container.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialBounds {
    pub outer: Rect,
    pub inner_fill: Rect,
    pub inner_stroke: Rect,
}

impl DialBounds {
    /// Lays the rings out inside a `width` x `height` container.
    ///
    /// The bounds are squared off so the rings draw as circles rather than
    /// ovals: the shorter container axis sets the diameter and the padding
    /// goes on the longer axis, top/bottom in [`Orientation::Normal`] and
    /// left/right in [`Orientation::Rotated`].
    pub fn compute(
        width: f64,
        height: f64,
        orientation: Orientation,
        outer_offset: f64,
        inner_diff: f64,
    ) -> Self {
        let max = width.max(height);
        let min = width.min(height);

        let frame = match orientation {
            Orientation::Normal => {
                let top = (max - min) / 2.0;
                Rect::new(0.0, top, max, max - top)
            }
            Orientation::Rotated => {
                let left = (max - min) / 2.0;
                Rect::new(left, 0.0, max - left, max)
            }
        };

        let inner = frame.inset(outer_offset + inner_diff);

        Self {
            outer: frame.inset(outer_offset),
            inner_fill: inner,
            // Same bounds as inner_fill today; kept separate so the stroke
            // ring can move independently.
            inner_stroke: inner,
        }
    }

    pub fn center(&self) -> Point {
        self.outer.center()
    }

    pub fn radius(&self) -> f64 {
        self.outer.center().x - self.outer.left
    }

    /// Anchor for the numeric readout, the middle of the inner circle.
    pub fn text_anchor(&self) -> Point {
        self.inner_stroke.center()
    }
}

/// Point on the ring of `radius` around `center` at `angle_deg`.
///
/// Screen convention throughout: y grows downward, angles increase clockwise,
/// 90 degrees points straight down. A zero radius collapses every angle onto
/// `center`.
pub fn handle_position(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg.to_radians();
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Raw pointer angle around `center`, degrees in (-180, 180].
pub fn pointer_angle(center: Point, pointer: Point) -> f64 {
    (pointer.y - center.y)
        .atan2(pointer.x - center.x)
        .to_degrees()
}

/// Normalizes a raw atan2 angle into `[start_angle, start_angle + 360)`.
///
/// With the default start angle of 90 the sweep always lands in [90, 450).
/// This wraps at most once per revolution; callers must not apply it twice.
/// Assumes `start_angle` in [0, 360); dial construction rejects anything
/// else before it can get here.
pub fn normalize_sweep(raw_deg: f64, start_angle: f64) -> f64 {
    let mut deg = raw_deg;
    if deg < 0.0 {
        deg += FULL_CIRCLE;
    }
    if deg < start_angle {
        deg += FULL_CIRCLE;
    }
    deg
}

/// Maps a normalized sweep angle onto the configured value range.
pub fn value_for_angle(angle_deg: f64, start_angle: f64, range: f64) -> f64 {
    (angle_deg - start_angle) * range / FULL_CIRCLE
}
