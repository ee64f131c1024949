use crate::config::Orientation;
use crate::geometry::Point;

/// Input the excluded host shell delivers to the dial.
#[derive(Debug, Clone)]
pub enum DialEvent {
    /// Container was (re)measured or the screen turned.
    BoundsChanged {
        width: f64,
        height: f64,
        orientation: Orientation,
    },
    /// Reserved; the dial reacts to moves only.
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    PointerCancel,
}
