use crate::foundation::core::{Constraint, Rect, Size};
use crate::foundation::error::{FlowError, FlowResult};
use crate::layout::config::{LayoutConfig, LayoutOptions};
use crate::layout::engine::{Arrange, FlowLayout};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// Inputs of one layout pass.
///
/// Requests are plain data so they can be built programmatically or loaded from JSON:
///
/// ```json
/// { "items": [{"width": 50, "height": 20}], "width": 200, "height": null,
///   "options": {"equal_width": true}, "config": {"horizontal_spacing": 10} }
/// ```
pub struct LayoutRequest {
    /// Natural sizes of the items, in order.
    pub items: Vec<Size>,
    /// Available width; `null` for unbounded.
    #[serde(default)]
    pub width: Constraint,
    /// Available height; `null` for unbounded.
    #[serde(default)]
    pub height: Constraint,
    /// Per-pass switches.
    #[serde(default)]
    pub options: LayoutOptions,
    /// Margins and spacing.
    #[serde(default)]
    pub config: LayoutConfig,
}

impl LayoutRequest {
    /// Request with default config and options.
    pub fn new(items: Vec<Size>, width: Constraint, height: Constraint) -> Self {
        Self {
            items,
            width,
            height,
            options: LayoutOptions::default(),
            config: LayoutConfig::default(),
        }
    }

    /// Check config and constraints.
    pub fn validate(&self) -> FlowResult<()> {
        self.config.validate()?;
        for (axis, c) in [("width", self.width), ("height", self.height)] {
            if let Some(v) = c.bound().filter(|v| *v < 0) {
                return Err(FlowError::validation(format!(
                    "{axis} constraint must be >= 0, got {v}"
                )));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
/// Output of [`run_request`].
pub struct LayoutResult {
    /// Measured size of the content including margins.
    pub size: Size,
    /// Container the boxes were arranged in.
    pub bounds: Rect,
    /// Final item boxes, in request order.
    pub boxes: Vec<Rect>,
}

impl LayoutResult {
    /// Verify that no two boxes overlap and every box stays inside the margins.
    ///
    /// The container extent is the larger of the arrange bounds and the measured size, since a
    /// single item may be wider than a bounded width.
    pub fn check_invariants(&self, config: &LayoutConfig) -> FlowResult<()> {
        let (ox, oy) = config.origin();
        let extent_w = self.bounds.width.max(self.size.width);
        let extent_h = self.bounds.height.max(self.size.height);
        let min_x = self.bounds.x.saturating_add(ox);
        let min_y = self.bounds.y.saturating_add(oy);
        let max_x = self
            .bounds
            .x
            .saturating_add(extent_w)
            .saturating_sub(config.margin_right)
            .saturating_sub(config.margin_width);
        let max_y = self
            .bounds
            .y
            .saturating_add(extent_h)
            .saturating_sub(config.margin_bottom)
            .saturating_sub(config.margin_height);

        for (i, b) in self.boxes.iter().enumerate() {
            if b.x < min_x || b.y < min_y || b.right() > max_x || b.bottom() > max_y {
                return Err(FlowError::contract(format!(
                    "box #{i} {b:?} escapes content area [{min_x}, {max_x}] x [{min_y}, {max_y}]"
                )));
            }
            for (j, other) in self.boxes.iter().enumerate().skip(i + 1) {
                if b.intersects(*other) {
                    return Err(FlowError::contract(format!(
                        "box #{i} {b:?} overlaps box #{j} {other:?}"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Measure and arrange a request in one go.
///
/// Bounded constraints become the arrange bounds; unbounded axes use the measured size.
#[tracing::instrument(skip(req), fields(items = req.items.len()))]
pub fn run_request(req: &LayoutRequest) -> FlowResult<LayoutResult> {
    req.validate()?;
    let mut engine = FlowLayout::new(req.config)?;
    let size = engine.measure(&req.items, req.width, req.height, req.options);
    let bounds = Rect::new(
        0,
        0,
        req.width.bound().unwrap_or(size.width),
        req.height.bound().unwrap_or(size.height),
    );
    let boxes = engine.arrange(&req.items, bounds, req.options);
    Ok(LayoutResult {
        size,
        bounds,
        boxes,
    })
}

#[cfg(test)]
#[path = "../tests/unit/model.rs"]
mod tests;
