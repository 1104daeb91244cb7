use super::{FieldPath, get, get_field, join};
use crate::decode::Value;

fn sample() -> Value {
	Value::from(serde_json::json!({
		"a": {"b": [1, 2, {"c": "v"}]},
		"dotted.key": {"x": null},
		"n": 5,
	}))
}

#[test]
fn dotted_and_segment_forms_agree() {
	let tree = sample();
	let dotted = get(&tree, "a.b.2.c");
	let segments = get_field(&tree, &["a", "b", "2", "c"]);
	assert_eq!(dotted, Some(&Value::from("v")));
	assert_eq!(dotted, segments);

	for (path, parts) in [("a.b.5", vec!["a", "b", "5"]), ("a.x", vec!["a", "x"]), ("n.0", vec!["n", "0"])] {
		assert_eq!(get(&tree, path), None, "{path} should be absent");
		assert_eq!(get_field(&tree, &parts), None, "{path} should be absent");
	}
}

#[test]
fn empty_path_is_root() {
	let tree = sample();
	assert_eq!(get(&tree, ""), Some(&tree));
	assert_eq!(get_field::<&str>(&tree, &[]), Some(&tree));
	assert_eq!(FieldPath::parse("").resolve(&tree), Some(&tree));
}

#[test]
fn index_segments_must_be_plain_digits() {
	let tree = sample();
	assert!(get(&tree, "a.b.+1").is_none());
	assert!(get(&tree, "a.b.-1").is_none());
	assert!(get(&tree, "a.b.").is_none());
	assert_eq!(get(&tree, "a.b.01"), Some(&Value::from(2_i64)));
}

#[test]
fn dotted_keys_need_segment_form() {
	let tree = sample();
	assert!(get(&tree, "dotted.key.x").is_none());
	assert_eq!(get_field(&tree, &["dotted.key", "x"]), Some(&Value::Null));
	assert_eq!(FieldPath::from_segments(["dotted.key", "x"]).resolve(&tree), Some(&Value::Null));
}

#[test]
fn null_yields_absent_for_deeper_segments() {
	let tree = sample();
	assert!(get_field(&tree, &["dotted.key", "x", "y"]).is_none());
}

#[test]
fn parse_round_trips_to_dotted_text() {
	let path = FieldPath::parse("a.b.2.c");
	assert_eq!(path.segments(), ["a", "b", "2", "c"]);
	assert_eq!(path.to_string(), "a.b.2.c");
	assert!(!path.is_empty());
}

#[test]
fn join_skips_separator_for_root() {
	assert_eq!(join("", "id"), "id");
	assert_eq!(join("user", "id"), "user.id");
}
