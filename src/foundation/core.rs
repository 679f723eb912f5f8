/// Width/height pair in integer pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Same size with negative components replaced by zero.
    pub fn non_negative(self) -> Self {
        Self {
            width: self.width.max(0),
            height: self.height.max(0),
        }
    }
}

/// Axis-aligned rectangle in integer pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at the origin with the given size.
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    pub const fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    pub fn right(self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    pub fn bottom(self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Copy moved by `(dx, dy)`.
    pub fn translate(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..self
        }
    }

    /// True when the two rectangles share an area larger than zero.
    ///
    /// Touching edges do not count as an intersection.
    pub fn intersects(self, other: Rect) -> bool {
        let overlap = kurbo::Rect::from(self).intersect(kurbo::Rect::from(other));
        overlap.area() > 0.0
    }
}

impl From<Rect> for kurbo::Rect {
    fn from(r: Rect) -> Self {
        kurbo::Rect::new(
            f64::from(r.x),
            f64::from(r.y),
            f64::from(r.right()),
            f64::from(r.bottom()),
        )
    }
}

/// Available space along one axis.
///
/// Serialized as a JSON integer (`Bounded`) or `null` (`Unbounded`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(from = "Option<i32>", into = "Option<i32>")]
pub enum Constraint {
    /// A finite pixel bound.
    Bounded(i32),
    /// No bound; the content decides.
    #[default]
    Unbounded,
}

impl Constraint {
    /// The bound, if any.
    pub fn bound(self) -> Option<i32> {
        match self {
            Self::Bounded(v) => Some(v),
            Self::Unbounded => None,
        }
    }

    pub fn is_unbounded(self) -> bool {
        matches!(self, Self::Unbounded)
    }

    /// True when a cached result computed under `cached` may answer a request under `self`.
    ///
    /// An unbounded request matches any cached constraint.
    pub fn accepts(self, cached: Constraint) -> bool {
        self.is_unbounded() || self == cached
    }
}

impl From<Option<i32>> for Constraint {
    fn from(value: Option<i32>) -> Self {
        value.map_or(Self::Unbounded, Self::Bounded)
    }
}

impl From<Constraint> for Option<i32> {
    fn from(value: Constraint) -> Self {
        value.bound()
    }
}

/// Where leftover horizontal space goes when arranging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// Content hugs the left edge; extra space stays after it.
    #[default]
    Leading,
    /// Content hugs the right edge; extra space goes before it.
    Trailing,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
