use palette::Srgba;

/// Colors the host's render layer draws the dial with.
///
/// The original widget resolved these from its resource theme at
/// construction; keeping them as a plain value the host passes in removes
/// that hidden dependency.
#[derive(Debug, Clone, PartialEq)]
pub struct DialPalette {
    /// Outer ring outline and the filled value arc.
    pub accent: Srgba<f64>,
    /// Disc masking the arc inside the inner circle.
    pub inner_fill: Srgba<f64>,
    /// Inner circle outline.
    pub inner_stroke: Srgba<f64>,
    /// Numeric readout in the dial's center.
    pub text: Srgba<f64>,
}

impl Default for DialPalette {
    fn default() -> Self {
        // Orange accent, gray inner ring, white hub, black text.
        Self {
            accent: Srgba::new(0.96, 0.49, 0.08, 1.0),
            inner_fill: Srgba::new(1.0, 1.0, 1.0, 1.0),
            inner_stroke: Srgba::new(0.45, 0.45, 0.45, 1.0),
            text: Srgba::new(0.0, 0.0, 0.0, 1.0),
        }
    }
}
