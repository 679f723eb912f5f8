use crate::foundation::core::{Constraint, Rect, Size};
use crate::foundation::error::{FlowError, FlowResult};
use crate::layout::config::{LayoutConfig, LayoutOptions};
use crate::layout::engine::{Arrange, FlowLayout};
use crate::serial::array::{ArrayDeserializer, ArraySerializer};
use crate::serial::object::ObjectSerializer;

/// One entry of a [`ButtonBar`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BarItem {
    /// Caller-chosen identifier, unique within the bar.
    pub id: String,
    /// Preferred size of the item.
    pub natural: Size,
}

impl BarItem {
    /// Create an item.
    pub fn new(id: impl Into<String>, natural: Size) -> Self {
        Self {
            id: id.into(),
            natural,
        }
    }
}

/// Ordered set of items laid out by a [`FlowLayout`].
///
/// Every mutation of the item set flushes the layout cache.
#[derive(Clone, Debug)]
pub struct ButtonBar {
    items: Vec<BarItem>,
    layout: FlowLayout,
    options: LayoutOptions,
}

impl ButtonBar {
    /// Empty bar; fails on an invalid config.
    pub fn new(config: LayoutConfig, options: LayoutOptions) -> FlowResult<Self> {
        Ok(Self {
            items: Vec::new(),
            layout: FlowLayout::new(config)?,
            options,
        })
    }

    /// Items in display order.
    pub fn items(&self) -> &[BarItem] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the bar holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Layout options in use.
    pub fn options(&self) -> LayoutOptions {
        self.options
    }

    /// Replace the layout options.
    pub fn set_options(&mut self, options: LayoutOptions) {
        self.options = options;
        self.layout.invalidate();
    }

    /// Underlying layout engine.
    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|i| i.id == id)
    }

    fn index_of(&self, id: &str) -> FlowResult<usize> {
        self.position(id)
            .ok_or_else(|| FlowError::validation(format!("unknown item '{id}'")))
    }

    fn ensure_unique(&self, id: &str) -> FlowResult<()> {
        if self.position(id).is_some() {
            return Err(FlowError::validation(format!("duplicate item '{id}'")));
        }
        Ok(())
    }

    /// Append an item.
    pub fn push(&mut self, item: BarItem) -> FlowResult<()> {
        self.ensure_unique(&item.id)?;
        self.items.push(item);
        self.layout.invalidate();
        Ok(())
    }

    /// Insert an item at `index` (clamped to the end).
    pub fn insert(&mut self, index: usize, item: BarItem) -> FlowResult<()> {
        self.ensure_unique(&item.id)?;
        let index = index.min(self.items.len());
        self.items.insert(index, item);
        self.layout.invalidate();
        Ok(())
    }

    /// Remove an item by id and return it.
    pub fn remove(&mut self, id: &str) -> FlowResult<BarItem> {
        let idx = self.index_of(id)?;
        let item = self.items.remove(idx);
        self.layout.invalidate();
        Ok(item)
    }

    /// Change an item's natural size.
    pub fn set_natural_size(&mut self, id: &str, natural: Size) -> FlowResult<()> {
        let idx = self.index_of(id)?;
        if self.items[idx].natural != natural {
            self.items[idx].natural = natural;
            self.layout.invalidate();
        }
        Ok(())
    }

    /// Remove every item.
    pub fn clear(&mut self) {
        self.items.clear();
        self.layout.invalidate();
    }

    fn naturals(&self) -> Vec<Size> {
        self.items.iter().map(|i| i.natural).collect()
    }

    /// Size the bar needs under the given constraints.
    pub fn measure(&mut self, width: Constraint, height: Constraint) -> Size {
        let naturals = self.naturals();
        self.layout.measure(&naturals, width, height, self.options)
    }

    /// Place every item inside `bounds`.
    pub fn arrange(&mut self, bounds: Rect) -> Vec<(&str, Rect)> {
        let naturals = self.naturals();
        let boxes = self.layout.arrange(&naturals, bounds, self.options);
        self.items
            .iter()
            .map(|i| i.id.as_str())
            .zip(boxes)
            .collect()
    }

    /// Encode the items as `[{id,width,height},...]`.
    pub fn to_pref_string(&self) -> String {
        let mut arr = ArraySerializer::new();
        for item in &self.items {
            let mut o = ObjectSerializer::new();
            o.field(&item.id)
                .value(item.natural.width)
                .value(item.natural.height);
            arr.push(o);
        }
        arr.finish()
    }

    /// Rebuild a bar from [`ButtonBar::to_pref_string`] output.
    pub fn from_pref_string(
        s: &str,
        config: LayoutConfig,
        options: LayoutOptions,
    ) -> FlowResult<Self> {
        let mut bar = Self::new(config, options)?;
        for mut o in ArrayDeserializer::new(s)? {
            let id = o.next_field()?;
            let width = o.next_i32()?;
            let height = o.next_i32()?;
            o.finish()?;
            bar.push(BarItem::new(id, Size::new(width, height)))?;
        }
        Ok(bar)
    }
}

#[cfg(test)]
#[path = "../tests/unit/bar.rs"]
mod tests;
