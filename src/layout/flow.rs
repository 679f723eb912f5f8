use crate::foundation::core::{Constraint, Rect, Size};
use crate::layout::config::{LayoutConfig, LayoutOptions};

/// Leading-aligned result of one solve, relative to a container at `(0, 0)`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    /// Total size including margins.
    pub size: Size,
    /// One box per input item, in input order.
    pub boxes: Vec<Rect>,
    /// Number of rows produced (zero when there are no items).
    pub rows: usize,
}

/// Row-wrap `items` under a width constraint.
///
/// Items flow left to right and wrap when the next one would overflow the inner width
/// (`width - inset_x`). A row always takes at least one item, even one wider than the limit.
pub fn solve(
    items: &[Size],
    width: Constraint,
    config: &LayoutConfig,
    options: LayoutOptions,
) -> Grid {
    let inset_x = config.inset_x();
    let inset_y = config.inset_y();
    if items.is_empty() {
        return Grid {
            size: Size::new(inset_x, inset_y),
            boxes: Vec::new(),
            rows: 0,
        };
    }

    let sizes = normalized_sizes(items, options);
    let limit = width.bound().map(|w| w.saturating_sub(inset_x));
    let h_gap = config.horizontal_spacing;
    let v_gap = config.vertical_spacing;
    let (x0, y0) = config.origin();

    let mut boxes = Vec::with_capacity(sizes.len());
    let (mut x, mut y) = (x0, y0);
    let mut line_width = 0i32;
    let mut line_height = 0i32;
    let mut line_items = 0usize;
    let mut full_width = 0i32;
    let mut rows = 1usize;

    for s in sizes {
        let overflows = match limit {
            Some(limit) => {
                line_items > 0
                    && line_width.saturating_add(h_gap).saturating_add(s.width) > limit
            }
            None => false,
        };
        if overflows {
            y = y.saturating_add(line_height).saturating_add(v_gap);
            x = x0;
            line_width = 0;
            line_height = 0;
            line_items = 0;
            rows += 1;
        }

        boxes.push(Rect::new(x, y, s.width, s.height));
        line_width = if line_items == 0 {
            s.width
        } else {
            line_width.saturating_add(h_gap).saturating_add(s.width)
        };
        x = x.saturating_add(s.width).saturating_add(h_gap);
        line_height = line_height.max(s.height);
        full_width = full_width.max(line_width);
        line_items += 1;
    }

    let content_height = (y - y0).saturating_add(line_height);
    Grid {
        size: Size::new(
            full_width.saturating_add(inset_x),
            content_height.saturating_add(inset_y),
        ),
        boxes,
        rows,
    }
}

fn normalized_sizes(items: &[Size], options: LayoutOptions) -> Vec<Size> {
    let mut sizes: Vec<Size> = items.iter().map(|s| s.non_negative()).collect();
    if sizes.len() < 2 {
        return sizes;
    }
    if options.equal_width {
        let w = sizes.iter().map(|s| s.width).max().unwrap_or(0);
        sizes.iter_mut().for_each(|s| s.width = w);
    }
    if options.equal_height {
        let h = sizes.iter().map(|s| s.height).max().unwrap_or(0);
        sizes.iter_mut().for_each(|s| s.height = h);
    }
    sizes
}

#[cfg(test)]
#[path = "../../tests/unit/layout/flow.rs"]
mod tests;
