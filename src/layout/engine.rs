use crate::foundation::core::{Alignment, Constraint, Rect, Size};
use crate::foundation::error::FlowResult;
use crate::layout::cache::{ItemsFingerprint, LayoutCache};
use crate::layout::config::{LayoutConfig, LayoutOptions};
use crate::layout::flow::{Grid, solve};

/// Two-phase layout strategy: size the content, then place it.
pub trait Arrange {
    /// Total size the items need under the given constraints.
    fn measure(
        &mut self,
        items: &[Size],
        width: Constraint,
        height: Constraint,
        options: LayoutOptions,
    ) -> Size;

    /// Final boxes for the items inside `bounds`, in input order.
    fn arrange(&mut self, items: &[Size], bounds: Rect, options: LayoutOptions) -> Vec<Rect>;

    /// Forget any memoized result.
    fn invalidate(&mut self);
}

/// Cache hit/miss counters of a [`FlowLayout`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Requests answered from the cache.
    pub hits: u64,
    /// Requests that ran the solver.
    pub misses: u64,
}

/// Row-wrapping flow layout with a single-entry result cache.
#[derive(Clone, Debug)]
pub struct FlowLayout {
    config: LayoutConfig,
    cache: LayoutCache,
    stats: CacheStats,
}

impl FlowLayout {
    /// Create a layout; fails on negative margins or spacing.
    pub fn new(config: LayoutConfig) -> FlowResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            cache: LayoutCache::default(),
            stats: CacheStats::default(),
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Swap the configuration. The cache is flushed on success.
    pub fn set_config(&mut self, config: LayoutConfig) -> FlowResult<()> {
        config.validate()?;
        self.config = config;
        self.cache.invalidate();
        Ok(())
    }

    /// Hit/miss counters since construction.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }

    /// True while a memoized result is held.
    pub fn is_cached(&self) -> bool {
        self.cache.is_valid()
    }

    /// Same as [`Arrange::arrange`].
    pub fn layout(&mut self, items: &[Size], bounds: Rect, options: LayoutOptions) -> Vec<Rect> {
        self.arrange(items, bounds, options)
    }

    fn cached_grid(
        &mut self,
        items: &[Size],
        width: Constraint,
        height: Constraint,
        options: LayoutOptions,
    ) -> Grid {
        let fingerprint = ItemsFingerprint::compute(items, &self.config, options);
        if let Some(grid) = self.cache.lookup(fingerprint, width, height) {
            self.stats.hits += 1;
            tracing::debug!(?width, ?height, "flow layout cache hit");
            return grid.clone();
        }

        self.stats.misses += 1;
        let grid = solve(items, width, &self.config, options);
        tracing::debug!(
            ?width,
            ?height,
            rows = grid.rows,
            w = grid.size.width,
            h = grid.size.height,
            "flow layout solved"
        );
        self.cache.store(fingerprint, width, height, grid).clone()
    }
}

impl Arrange for FlowLayout {
    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    fn measure(
        &mut self,
        items: &[Size],
        width: Constraint,
        height: Constraint,
        options: LayoutOptions,
    ) -> Size {
        self.cached_grid(items, width, height, options).size
    }

    #[tracing::instrument(skip(self, items), fields(items = items.len()))]
    fn arrange(&mut self, items: &[Size], bounds: Rect, options: LayoutOptions) -> Vec<Rect> {
        // Height never changes the flow; leave it open so measure results can be reused.
        let grid = self.cached_grid(
            items,
            Constraint::Bounded(bounds.width),
            Constraint::Unbounded,
            options,
        );
        debug_assert_eq!(grid.boxes.len(), items.len());

        let shift = match options.alignment {
            Alignment::Trailing if bounds.width > grid.size.width => {
                bounds.width - grid.size.width
            }
            _ => 0,
        };
        grid.boxes
            .into_iter()
            .map(|b| b.translate(bounds.x.saturating_add(shift), bounds.y))
            .collect()
    }

    fn invalidate(&mut self) {
        self.cache.invalidate();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
