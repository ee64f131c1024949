pub mod model;

pub use model::{Dial, DialAction, DialValue};

pub const FULL_CIRCLE: f64 = 360.0;

pub const DEFAULT_START_ANGLE: f64 = 90.0; // straight down
pub const DEFAULT_RANGE: f64 = 100.0;
pub const DEFAULT_HANDLE_SIZE: f64 = 120.0; // drag handle width/height
pub const DEFAULT_OUTER_OFFSET: f64 = 12.0; // container edge to outer ring
pub const DEFAULT_INNER_DIFF: f64 = 100.0; // outer ring to inner circle
