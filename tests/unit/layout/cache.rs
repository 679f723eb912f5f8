use super::*;
use crate::foundation::core::Alignment;

fn fp(items: &[Size]) -> ItemsFingerprint {
    ItemsFingerprint::compute(items, &LayoutConfig::default(), LayoutOptions::default())
}

fn grid(w: i32) -> Grid {
    Grid {
        size: Size::new(w, 10),
        boxes: Vec::new(),
        rows: 1,
    }
}

#[test]
fn fingerprint_tracks_sizes_count_and_sizing_options() {
    let a = [Size::new(10, 10), Size::new(20, 10)];
    assert_eq!(fp(&a), fp(&a));
    assert_ne!(fp(&a), fp(&[Size::new(10, 10), Size::new(21, 10)]));
    assert_ne!(fp(&a), fp(&a[..1]));
    let uniform =
        ItemsFingerprint::compute(&a, &LayoutConfig::default(), LayoutOptions::uniform());
    assert_ne!(fp(&a), uniform);
    let trailing = ItemsFingerprint::compute(
        &a,
        &LayoutConfig::default(),
        LayoutOptions::default().aligned(Alignment::Trailing),
    );
    assert_eq!(fp(&a), trailing);
    let spaced = ItemsFingerprint::compute(
        &a,
        &LayoutConfig::default().with_spacing(1, 1),
        LayoutOptions::default(),
    );
    assert_ne!(fp(&a), spaced);
}

#[test]
fn exact_constraints_hit() {
    let key = fp(&[Size::new(1, 1)]);
    let mut c = LayoutCache::default();
    c.store(key, Constraint::Bounded(200), Constraint::Bounded(150), grid(7));
    let hit = c.lookup(key, Constraint::Bounded(200), Constraint::Bounded(150));
    assert_eq!(hit.map(|g| g.size.width), Some(7));
}

#[test]
fn unbounded_request_reuses_bounded_entry() {
    let key = fp(&[Size::new(1, 1)]);
    let mut c = LayoutCache::default();
    c.store(key, Constraint::Bounded(200), Constraint::Bounded(150), grid(7));
    assert!(
        c.lookup(key, Constraint::Unbounded, Constraint::Bounded(150))
            .is_some()
    );
    assert!(
        c.lookup(key, Constraint::Unbounded, Constraint::Unbounded)
            .is_some()
    );
}

#[test]
fn different_constraint_or_items_miss() {
    let key = fp(&[Size::new(1, 1)]);
    let mut c = LayoutCache::default();
    c.store(key, Constraint::Unbounded, Constraint::Unbounded, grid(7));
    assert!(
        c.lookup(key, Constraint::Bounded(100), Constraint::Unbounded)
            .is_none()
    );
    let other = fp(&[Size::new(2, 1)]);
    assert!(
        c.lookup(other, Constraint::Unbounded, Constraint::Unbounded)
            .is_none()
    );
}

#[test]
fn invalidate_clears_entry() {
    let key = fp(&[]);
    let mut c = LayoutCache::default();
    assert!(!c.is_valid());
    c.store(key, Constraint::Bounded(5), Constraint::Unbounded, grid(1));
    assert!(c.is_valid());
    assert_eq!(
        c.constraints(),
        Some((Constraint::Bounded(5), Constraint::Unbounded))
    );
    c.invalidate();
    assert!(!c.is_valid());
    assert!(
        c.lookup(key, Constraint::Unbounded, Constraint::Unbounded)
            .is_none()
    );
}
