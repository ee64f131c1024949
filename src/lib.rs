//! Host-agnostic model for a circular dial control.
//!
//! A ring with a draggable handle: the host delivers bounds and pointer
//! events, the model answers with the sweep angle, the value it maps to, and
//! the rectangles needed to draw the rings and the handle. Rendering, widget
//! layout, and event dispatch stay on the host side.

pub mod config;
pub mod dial;
pub mod events;
pub mod geometry;
pub mod theme;

pub use config::{DialConfig, Orientation};
pub use dial::{Dial, DialAction, DialValue};
pub use events::DialEvent;
pub use geometry::{DialBounds, Point, Rect};
pub use theme::DialPalette;
