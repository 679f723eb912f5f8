use super::*;

#[test]
fn defaults_match_documented_values() {
    let c = LayoutConfig::default();
    assert_eq!((c.margin_width, c.margin_height), (5, 5));
    assert_eq!(
        (c.margin_left, c.margin_top, c.margin_right, c.margin_bottom),
        (0, 0, 0, 0)
    );
    assert_eq!((c.horizontal_spacing, c.vertical_spacing), (10, 5));
    c.validate().unwrap();
}

#[test]
fn insets_count_symmetric_margins_twice() {
    let c = LayoutConfig {
        margin_left: 1,
        margin_right: 2,
        margin_top: 3,
        margin_bottom: 4,
        ..LayoutConfig::default()
    };
    assert_eq!(c.inset_x(), 1 + 10 + 2);
    assert_eq!(c.inset_y(), 3 + 10 + 4);
    assert_eq!(c.origin(), (6, 8));
}

#[test]
fn negative_fields_are_rejected_by_name() {
    let c = LayoutConfig {
        vertical_spacing: -1,
        ..LayoutConfig::default()
    };
    let err = c.validate().unwrap_err();
    assert!(matches!(err, FlowError::Config(_)));
    assert!(err.to_string().contains("vertical_spacing"));
}

#[test]
fn pref_string_lists_fields_in_order() {
    assert_eq!(
        LayoutConfig::default().to_pref_string(),
        "{5,5,0,0,0,0,10,5}"
    );
    let c = LayoutConfig::from_pref_string("{1,2,3,4,5,6,7,8}").unwrap();
    assert_eq!(c.margin_width, 1);
    assert_eq!(c.vertical_spacing, 8);
}

#[test]
fn pref_string_rejects_wrong_arity_and_negatives() {
    assert!(LayoutConfig::from_pref_string("{1,2,3}").is_err());
    assert!(LayoutConfig::from_pref_string("{1,2,3,4,5,6,7,8,9}").is_err());
    let err = LayoutConfig::from_pref_string("{-1,2,3,4,5,6,7,8}").unwrap_err();
    assert!(matches!(err, FlowError::Config(_)));
}

#[test]
fn json_fields_default_individually() {
    let c: LayoutConfig = serde_json::from_str(r#"{"horizontal_spacing": 3}"#).unwrap();
    assert_eq!(c.horizontal_spacing, 3);
    assert_eq!(c.margin_width, 5);
    assert_eq!(c.vertical_spacing, 5);
}

#[test]
fn options_default_to_leading_natural_sizes() {
    let o = LayoutOptions::default();
    assert!(!o.equal_width && !o.equal_height);
    assert_eq!(o.alignment, Alignment::Leading);
    let u = LayoutOptions::uniform().aligned(Alignment::Trailing);
    assert!(u.equal_width && u.equal_height);
    assert_eq!(u.alignment, Alignment::Trailing);
}
