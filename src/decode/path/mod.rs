use std::fmt;

use crate::decode::Value;

/// Ordered object-key / array-index segments addressing a node.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldPath {
	segments: Vec<String>,
}

impl FieldPath {
	/// Split dotted syntax on every `.`; the empty string is the empty path.
	pub fn parse(dotted: &str) -> Self {
		if dotted.is_empty() {
			return Self::default();
		}
		Self {
			segments: dotted.split('.').map(str::to_owned).collect(),
		}
	}

	/// Build from explicit segments; segments may contain dots.
	pub fn from_segments<I, S>(segments: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			segments: segments.into_iter().map(Into::into).collect(),
		}
	}

	/// Parsed segments in lookup order.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Whether the path addresses the root.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Resolve against `tree`; never errors.
	pub fn resolve<'a>(&self, tree: &'a Value) -> Option<&'a Value> {
		resolve_segments(tree, &self.segments)
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}

/// Resolve dotted syntax such as `a.b.2.c`.
pub fn get<'a>(tree: &'a Value, dotted: &str) -> Option<&'a Value> {
	if dotted.is_empty() {
		return Some(tree);
	}
	let mut current = tree;
	for segment in dotted.split('.') {
		current = step(current, segment)?;
	}
	Some(current)
}

/// Resolve explicit segments; `["a", "0"]` reads `tree["a"][0]`.
pub fn get_field<'a, S: AsRef<str>>(tree: &'a Value, segments: &[S]) -> Option<&'a Value> {
	resolve_segments(tree, segments)
}

fn resolve_segments<'a, S: AsRef<str>>(tree: &'a Value, segments: &[S]) -> Option<&'a Value> {
	segments.iter().try_fold(tree, |current, segment| step(current, segment.as_ref()))
}

fn step<'a>(node: &'a Value, segment: &str) -> Option<&'a Value> {
	match node {
		Value::Object(map) => map.get(segment),
		Value::Array(items) => items.get(parse_index(segment)?),
		_ => None,
	}
}

/// Unsigned base-10 index; signs and empty segments are rejected.
fn parse_index(segment: &str) -> Option<usize> {
	if segment.is_empty() || !segment.bytes().all(|byte| byte.is_ascii_digit()) {
		return None;
	}
	segment.parse().ok()
}

/// Extend a dotted error path by one segment.
pub(crate) fn join(prefix: &str, segment: &str) -> String {
	if prefix.is_empty() {
		segment.to_owned()
	} else {
		format!("{prefix}.{segment}")
	}
}

impl Value {
	/// Dotted-path lookup, see [`get`].
	pub fn get(&self, dotted: &str) -> Option<&Value> {
		get(self, dotted)
	}

	/// Segment lookup, see [`get_field`].
	pub fn get_field<S: AsRef<str>>(&self, segments: &[S]) -> Option<&Value> {
		get_field(self, segments)
	}
}

#[cfg(test)]
mod tests;
