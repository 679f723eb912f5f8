use crate::foundation::core::Alignment;
use crate::foundation::error::{FlowError, FlowResult};
use crate::serial::object::{ObjectDeserializer, ObjectSerializer};

/// Margins and spacing of a flow layout, in pixels.
///
/// `margin_width`/`margin_height` apply on both sides of their axis; the directional margins
/// are added once on their own side. All fields must be non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal margin applied on both the left and the right.
    pub margin_width: i32,
    /// Vertical margin applied on both the top and the bottom.
    pub margin_height: i32,
    /// Extra margin on the left.
    pub margin_left: i32,
    /// Extra margin on the top.
    pub margin_top: i32,
    /// Extra margin on the right.
    pub margin_right: i32,
    /// Extra margin on the bottom.
    pub margin_bottom: i32,
    /// Gap between neighbouring items in a row.
    pub horizontal_spacing: i32,
    /// Gap between rows.
    pub vertical_spacing: i32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin_width: 5,
            margin_height: 5,
            margin_left: 0,
            margin_top: 0,
            margin_right: 0,
            margin_bottom: 0,
            horizontal_spacing: 10,
            vertical_spacing: 5,
        }
    }
}

impl LayoutConfig {
    /// Config with every margin and spacing set to zero.
    pub const fn zero() -> Self {
        Self {
            margin_width: 0,
            margin_height: 0,
            margin_left: 0,
            margin_top: 0,
            margin_right: 0,
            margin_bottom: 0,
            horizontal_spacing: 0,
            vertical_spacing: 0,
        }
    }

    /// Same config with both spacings replaced.
    pub fn with_spacing(mut self, horizontal: i32, vertical: i32) -> Self {
        self.horizontal_spacing = horizontal;
        self.vertical_spacing = vertical;
        self
    }

    /// Same config with `margin_width`/`margin_height` replaced.
    pub fn with_margins(mut self, width: i32, height: i32) -> Self {
        self.margin_width = width;
        self.margin_height = height;
        self
    }

    fn fields(&self) -> [(&'static str, i32); 8] {
        [
            ("margin_width", self.margin_width),
            ("margin_height", self.margin_height),
            ("margin_left", self.margin_left),
            ("margin_top", self.margin_top),
            ("margin_right", self.margin_right),
            ("margin_bottom", self.margin_bottom),
            ("horizontal_spacing", self.horizontal_spacing),
            ("vertical_spacing", self.vertical_spacing),
        ]
    }

    /// Reject negative margins or spacing.
    pub fn validate(&self) -> FlowResult<()> {
        for (name, v) in self.fields() {
            if v < 0 {
                return Err(FlowError::config(format!("{name} must be >= 0, got {v}")));
            }
        }
        Ok(())
    }

    /// Total horizontal margin: `margin_left + 2 * margin_width + margin_right`.
    pub fn inset_x(&self) -> i32 {
        self.margin_left
            .saturating_add(self.margin_width.saturating_mul(2))
            .saturating_add(self.margin_right)
    }

    /// Total vertical margin: `margin_top + 2 * margin_height + margin_bottom`.
    pub fn inset_y(&self) -> i32 {
        self.margin_top
            .saturating_add(self.margin_height.saturating_mul(2))
            .saturating_add(self.margin_bottom)
    }

    /// Top-left corner of the first row.
    pub fn origin(&self) -> (i32, i32) {
        (
            self.margin_left.saturating_add(self.margin_width),
            self.margin_top.saturating_add(self.margin_height),
        )
    }

    /// Encode as a preference string, fields in declaration order.
    pub fn to_pref_string(&self) -> String {
        let mut o = ObjectSerializer::new();
        for (_, v) in self.fields() {
            o.value(v);
        }
        o.finish()
    }

    /// Decode a string written by [`LayoutConfig::to_pref_string`] and validate it.
    pub fn from_pref_string(s: &str) -> FlowResult<Self> {
        let mut d = ObjectDeserializer::new(s)?;
        let cfg = Self {
            margin_width: d.next_i32()?,
            margin_height: d.next_i32()?,
            margin_left: d.next_i32()?,
            margin_top: d.next_i32()?,
            margin_right: d.next_i32()?,
            margin_bottom: d.next_i32()?,
            horizontal_spacing: d.next_i32()?,
            vertical_spacing: d.next_i32()?,
        };
        d.finish()?;
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Per-pass layout switches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LayoutOptions {
    /// Give every item the widest natural width.
    pub equal_width: bool,
    /// Give every item the tallest natural height.
    pub equal_height: bool,
    /// Placement of leftover horizontal space.
    pub alignment: Alignment,
}

impl LayoutOptions {
    /// Options with both equal-size switches set.
    pub fn uniform() -> Self {
        Self {
            equal_width: true,
            equal_height: true,
            alignment: Alignment::Leading,
        }
    }

    /// Same options with a different alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/config.rs"]
mod tests;
