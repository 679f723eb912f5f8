use xxhash_rust::xxh3::Xxh3;

use crate::foundation::core::{Constraint, Size};
use crate::layout::config::{LayoutConfig, LayoutOptions};
use crate::layout::flow::Grid;

const XXH3_SEED: u64 = 0x5f1a_b0c4_93d2_e781;

/// Content hash of everything a solve depends on besides the constraints.
///
/// Alignment is left out: the trailing shift is applied after the cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ItemsFingerprint {
    hi: u64,
    lo: u64,
}

impl ItemsFingerprint {
    /// Hash the item count, each natural size, the config and the sizing options.
    pub fn compute(items: &[Size], config: &LayoutConfig, options: LayoutOptions) -> Self {
        let mut h = StableHasher::new();
        h.write_u64(items.len() as u64);
        for s in items {
            h.write_i32(s.width);
            h.write_i32(s.height);
        }
        h.write_i32(config.margin_width);
        h.write_i32(config.margin_height);
        h.write_i32(config.margin_left);
        h.write_i32(config.margin_top);
        h.write_i32(config.margin_right);
        h.write_i32(config.margin_bottom);
        h.write_i32(config.horizontal_spacing);
        h.write_i32(config.vertical_spacing);
        h.write_bool(options.equal_width);
        h.write_bool(options.equal_height);
        h.finish()
    }
}

struct StableHasher {
    inner: Xxh3,
}

impl StableHasher {
    fn new() -> Self {
        Self {
            inner: Xxh3::with_seed(XXH3_SEED),
        }
    }

    fn write_bytes(&mut self, b: &[u8]) {
        self.inner.update(b);
    }

    fn write_u8(&mut self, v: u8) {
        self.write_bytes(&[v]);
    }

    fn write_bool(&mut self, v: bool) {
        self.write_u8(u8::from(v));
    }

    fn write_i32(&mut self, v: i32) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    fn finish(self) -> ItemsFingerprint {
        let v = self.inner.digest128();
        ItemsFingerprint {
            hi: (v >> 64) as u64,
            lo: v as u64,
        }
    }
}

#[derive(Clone, Debug)]
struct Entry {
    fingerprint: ItemsFingerprint,
    width: Constraint,
    height: Constraint,
    grid: Grid,
}

/// Memo of the last solve.
///
/// An entry answers a request only when the fingerprint matches and each requested constraint
/// is unbounded or equal to the one the entry was computed under.
#[derive(Clone, Debug, Default)]
pub struct LayoutCache {
    entry: Option<Entry>,
}

impl LayoutCache {
    /// Cached grid for the request, if the entry still applies.
    pub fn lookup(
        &self,
        fingerprint: ItemsFingerprint,
        width: Constraint,
        height: Constraint,
    ) -> Option<&Grid> {
        let e = self.entry.as_ref()?;
        if e.fingerprint != fingerprint {
            return None;
        }
        if !width.accepts(e.width) || !height.accepts(e.height) {
            return None;
        }
        Some(&e.grid)
    }

    /// Replace the entry and return a reference to the stored grid.
    pub fn store(
        &mut self,
        fingerprint: ItemsFingerprint,
        width: Constraint,
        height: Constraint,
        grid: Grid,
    ) -> &Grid {
        let e = self.entry.insert(Entry {
            fingerprint,
            width,
            height,
            grid,
        });
        &e.grid
    }

    /// Drop the entry.
    pub fn invalidate(&mut self) {
        self.entry = None;
    }

    /// True while an entry is held.
    pub fn is_valid(&self) -> bool {
        self.entry.is_some()
    }

    /// Constraints of the held entry.
    pub fn constraints(&self) -> Option<(Constraint, Constraint)> {
        self.entry.as_ref().map(|e| (e.width, e.height))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/cache.rs"]
mod tests;
