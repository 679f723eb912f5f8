use super::*;

fn bare() -> LayoutConfig {
    LayoutConfig::zero().with_spacing(10, 5)
}

fn three() -> Vec<Size> {
    vec![Size::new(50, 20), Size::new(60, 20), Size::new(40, 20)]
}

#[test]
fn single_row_when_everything_fits() {
    let g = solve(
        &three(),
        Constraint::Bounded(200),
        &bare(),
        LayoutOptions::default(),
    );
    assert_eq!(g.rows, 1);
    let origins: Vec<(i32, i32)> = g.boxes.iter().map(|b| (b.x, b.y)).collect();
    assert_eq!(origins, vec![(0, 0), (60, 0), (130, 0)]);
    assert_eq!(g.size, Size::new(170, 20));
}

#[test]
fn third_item_wraps_under_tight_width() {
    let g = solve(
        &three(),
        Constraint::Bounded(120),
        &bare(),
        LayoutOptions::default(),
    );
    assert_eq!(g.rows, 2);
    assert_eq!(g.boxes[2], Rect::new(0, 25, 40, 20));
    assert_eq!(g.size, Size::new(120, 45));
}

#[test]
fn exact_fit_does_not_wrap() {
    let g = solve(
        &three(),
        Constraint::Bounded(170),
        &bare(),
        LayoutOptions::default(),
    );
    assert_eq!(g.rows, 1);
}

#[test]
fn unbounded_never_wraps() {
    let items = vec![Size::new(500, 10); 8];
    let g = solve(&items, Constraint::Unbounded, &bare(), LayoutOptions::default());
    assert_eq!(g.rows, 1);
    assert_eq!(g.size.width, 8 * 500 + 7 * 10);
}

#[test]
fn oversized_item_still_gets_a_row() {
    let items = vec![Size::new(300, 10), Size::new(300, 12)];
    let g = solve(
        &items,
        Constraint::Bounded(100),
        &bare(),
        LayoutOptions::default(),
    );
    assert_eq!(g.rows, 2);
    assert_eq!(g.boxes[0], Rect::new(0, 0, 300, 10));
    assert_eq!(g.boxes[1], Rect::new(0, 15, 300, 12));
    assert_eq!(g.size, Size::new(300, 27));
}

#[test]
fn empty_uses_margin_box() {
    let g = solve(
        &[],
        Constraint::Bounded(50),
        &LayoutConfig::default(),
        LayoutOptions::default(),
    );
    assert_eq!(g.size, Size::new(10, 10));
    assert!(g.boxes.is_empty());
    assert_eq!(g.rows, 0);
}

#[test]
fn margins_offset_origin_and_shrink_inner_width() {
    let cfg = LayoutConfig {
        margin_left: 2,
        margin_top: 3,
        ..LayoutConfig::default()
    };
    // inner width = 102 - (2 + 10) = 90: 40 + 10 + 40 fits, a third does not.
    let items = vec![Size::new(40, 10); 3];
    let g = solve(&items, Constraint::Bounded(102), &cfg, LayoutOptions::default());
    assert_eq!(g.boxes[0], Rect::new(7, 8, 40, 10));
    assert_eq!(g.boxes[1], Rect::new(57, 8, 40, 10));
    assert_eq!(g.boxes[2], Rect::new(7, 23, 40, 10));
    assert_eq!(g.size, Size::new(90 + 12, 25 + 13));
}

#[test]
fn equal_width_uses_widest_item() {
    let items = vec![Size::new(30, 10), Size::new(50, 12), Size::new(40, 8)];
    let opts = LayoutOptions {
        equal_width: true,
        ..LayoutOptions::default()
    };
    let g = solve(&items, Constraint::Unbounded, &bare(), opts);
    assert!(g.boxes.iter().all(|b| b.width == 50));
    let heights: Vec<i32> = g.boxes.iter().map(|b| b.height).collect();
    assert_eq!(heights, vec![10, 12, 8]);
}

#[test]
fn equal_height_is_independent() {
    let items = vec![Size::new(30, 10), Size::new(50, 12)];
    let opts = LayoutOptions {
        equal_height: true,
        ..LayoutOptions::default()
    };
    let g = solve(&items, Constraint::Unbounded, &bare(), opts);
    assert_eq!(g.boxes[0].size(), Size::new(30, 12));
    assert_eq!(g.boxes[1].size(), Size::new(50, 12));
}

#[test]
fn single_item_is_not_normalized() {
    let g = solve(
        &[Size::new(-4, 9)],
        Constraint::Unbounded,
        &bare(),
        LayoutOptions::uniform(),
    );
    assert_eq!(g.boxes[0].size(), Size::new(0, 9));
}

#[test]
fn row_height_is_tallest_item_in_row() {
    let items = vec![Size::new(40, 10), Size::new(40, 30), Size::new(40, 5)];
    let g = solve(
        &items,
        Constraint::Bounded(90),
        &bare(),
        LayoutOptions::default(),
    );
    assert_eq!(g.boxes[2].y, 30 + 5);
    assert_eq!(g.size.height, 35 + 5);
}
