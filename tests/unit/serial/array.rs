use super::*;

fn obj(fields: &[&str]) -> ObjectSerializer {
    let mut o = ObjectSerializer::new();
    for f in fields {
        o.field(f);
    }
    o
}

#[test]
fn writes_objects_separated_by_commas() {
    let mut a = ArraySerializer::new();
    a.push(obj(&["ok", "80"])).push(obj(&["cancel", "90"]));
    assert_eq!(a.len(), 2);
    assert_eq!(a.finish(), "[{ok,80},{cancel,90}]");
}

#[test]
fn empty_array_is_brackets() {
    assert_eq!(ArraySerializer::new().finish(), "[]");
    let d = ArrayDeserializer::new("[]").unwrap();
    assert_eq!(d.remaining(), 0);
}

#[test]
fn reads_back_escaped_fields() {
    let mut a = ArraySerializer::new();
    a.push(obj(&["a]b", "{x}"])).push(obj(&[]));
    let text = a.finish();

    let objects: Vec<Vec<String>> = ArrayDeserializer::new(&text)
        .unwrap()
        .map(|o| o.collect())
        .collect();
    assert_eq!(
        objects,
        vec![vec!["a]b".to_string(), "{x}".to_string()], Vec::new()]
    );
}

#[test]
fn malformed_arrays_are_rejected() {
    for bad in ["", "{a}", "[{a}", "[{a}x]", "[{a}]z", "[a]", "[{a},]"] {
        assert!(ArrayDeserializer::new(bad).is_err(), "accepted {bad:?}");
    }
}
