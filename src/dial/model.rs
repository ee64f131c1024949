use derive_more::{Display, From, Into};

use crate::config::{ConfigError, DialConfig, Orientation};
use crate::dial::FULL_CIRCLE;
use crate::events::DialEvent;
use crate::geometry::{self, DialBounds, Point, Rect};

/// Scalar the current sweep maps to, for the host's numeric readout.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Display, From, Into)]
pub struct DialValue(f64);

/// What the host should do after an event.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialAction {
    pub should_redraw: bool,
    pub value: Option<DialValue>,
}

impl DialAction {
    pub fn new(should_redraw: bool, value: Option<DialValue>) -> Self {
        Self {
            should_redraw,
            value,
        }
    }
}

/// The dial control: one writer (pointer events), one reader (the host's
/// render step), both driven sequentially by the host loop.
#[derive(Debug, Clone)]
pub struct Dial {
    config: DialConfig,
    pending_config: Option<DialConfig>,
    bounds: Option<DialBounds>,
    sweep_angle: f64,
}

impl Dial {
    /// Rejects configs that break the sweep window invariant; every config
    /// a `Dial` ever holds has passed [`DialConfig::validated`].
    pub fn new(config: DialConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let sweep_angle = config.start_angle;
        Ok(Self {
            config,
            pending_config: None,
            bounds: None,
            sweep_angle,
        })
    }

    /// Deferred reconfiguration: the new parameters land on the next bounds
    /// recomputation, so a frame never mixes old geometry with new angles.
    /// A rejected config leaves the current one in place.
    pub fn set_config(&mut self, config: DialConfig) -> Result<(), ConfigError> {
        self.pending_config = Some(config.validated()?);
        Ok(())
    }

    pub fn handle_event(&mut self, event: DialEvent) -> DialAction {
        match event {
            DialEvent::BoundsChanged {
                width,
                height,
                orientation,
            } => self.on_bounds_changed(width, height, orientation),
            DialEvent::PointerMove(pointer) => self.on_pointer_move(pointer),
            // Down is reserved; up and cancel just end the drag where it is.
            DialEvent::PointerDown(_) | DialEvent::PointerUp | DialEvent::PointerCancel => {
                DialAction::default()
            }
        }
    }

    fn on_bounds_changed(
        &mut self,
        width: f64,
        height: f64,
        orientation: Orientation,
    ) -> DialAction {
        let reconfigured = self.pending_config.is_some();
        if let Some(config) = self.pending_config.take() {
            // Re-anchor the current sweep inside the new start angle's
            // window so the handle does not jump.
            let base = self.sweep_angle.rem_euclid(FULL_CIRCLE);
            self.sweep_angle = if base < config.start_angle {
                base + FULL_CIRCLE
            } else {
                base
            };
            self.config = config;
        }

        log::debug!("dial bounds changed: {width}x{height} ({orientation})");
        self.bounds = Some(DialBounds::compute(
            width,
            height,
            orientation,
            self.config.outer_offset,
            self.config.inner_diff,
        ));

        // A new config remaps the readout, so hand the host the fresh value.
        DialAction::new(true, reconfigured.then(|| self.value()))
    }

    fn on_pointer_move(&mut self, pointer: Point) -> DialAction {
        let Some(bounds) = self.bounds else {
            // No layout yet, not interactable.
            return DialAction::default();
        };
        if bounds.radius() <= 0.0 {
            return DialAction::default();
        }

        let raw = geometry::pointer_angle(bounds.center(), pointer);
        let sweep = geometry::normalize_sweep(raw, self.config.start_angle);
        let changed = sweep != self.sweep_angle;
        self.sweep_angle = sweep;

        DialAction::new(changed, Some(self.value()))
    }

    pub fn config(&self) -> &DialConfig {
        &self.config
    }

    pub fn bounds(&self) -> Option<&DialBounds> {
        self.bounds.as_ref()
    }

    pub fn sweep_angle(&self) -> f64 {
        self.sweep_angle
    }

    /// Angular extent of the filled value arc, from the start angle to the
    /// handle.
    pub fn arc_sweep(&self) -> f64 {
        self.sweep_angle - self.config.start_angle
    }

    pub fn value(&self) -> DialValue {
        DialValue(geometry::value_for_angle(
            self.sweep_angle,
            self.config.start_angle,
            self.config.range,
        ))
    }

    /// Point on the outer ring under the handle, None before the first
    /// bounds event.
    pub fn handle_position(&self) -> Option<Point> {
        let bounds = self.bounds?;
        Some(geometry::handle_position(
            bounds.center(),
            bounds.radius(),
            self.sweep_angle,
        ))
    }

    /// Handle square centered on [`Self::handle_position`], ready for the
    /// host to lay the handle out with.
    pub fn handle_rect(&self) -> Option<Rect> {
        let pos = self.handle_position()?;
        let half = self.config.handle_size / 2.0;
        Some(Rect::new(
            pos.x - half,
            pos.y - half,
            pos.x + half,
            pos.y + half,
        ))
    }
}
