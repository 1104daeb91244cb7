use crate::decode::path::{self, join};
use crate::decode::{DecodeError, MapTarget, OptionalTarget, Result, SeqTarget, Shape, StructTarget, Target, Value};

/// Runtime limits for structural decoding.
#[derive(Debug, Clone, Default)]
pub struct DecodeOptions {
	/// Maximum nesting depth below the entry slot; `None` follows the input.
	pub max_depth: Option<u32>,
}

impl DecodeOptions {
	/// Preset for trees built from untrusted input.
	pub fn for_untrusted() -> Self {
		Self { max_depth: Some(64) }
	}
}

/// Decode a whole object into a structure target.
///
/// Members absent from `tree` keep their current values unless required.
pub fn decode<T: Target + ?Sized>(tree: &Value, target: &mut T) -> Result<()> {
	decode_with(tree, target, &DecodeOptions::default())
}

/// [`decode`] with explicit options.
pub fn decode_with<T: Target + ?Sized>(tree: &Value, target: &mut T, opt: &DecodeOptions) -> Result<()> {
	match target.shape() {
		Shape::Struct(item) => Decoder { opt }.decode_struct(tree, item, "", 0),
		Shape::NotSettable => Err(DecodeError::NotSettable { path: String::new() }),
		other => Err(DecodeError::UnsupportedTargetShape {
			path: String::new(),
			shape: format!("output value must be a struct, got {}", other.describe()),
		}),
	}
}

/// Decode a fresh default-initialised structure.
pub fn decode_new<T: Target + Default>(tree: &Value) -> Result<T> {
	let mut out = T::default();
	decode(tree, &mut out)?;
	Ok(out)
}

/// Resolve a dotted `field` and decode it into a target of any shape.
pub fn decode_field<T: Target + ?Sized>(tree: &Value, field: &str, target: &mut T) -> Result<()> {
	let value = path::get(tree, field).ok_or_else(|| DecodeError::FieldNotFound { path: field.to_owned() })?;
	decode_value(value, target, field, &DecodeOptions::default())
}

/// Decode one value into a target of any shape, reporting errors under `path`.
pub fn decode_value<T: Target + ?Sized>(value: &Value, target: &mut T, path: &str, opt: &DecodeOptions) -> Result<()> {
	Decoder { opt }.decode_shape(value, target.shape(), path, 0)
}

/// Recursive matcher; carries options through one call.
pub(crate) struct Decoder<'o> {
	pub(crate) opt: &'o DecodeOptions,
}

impl Decoder<'_> {
	pub(crate) fn decode_shape(&self, value: &Value, shape: Shape<'_>, path: &str, depth: u32) -> Result<()> {
		if let Some(max_depth) = self.opt.max_depth.filter(|max| depth > *max) {
			return Err(DecodeError::DepthExceeded {
				path: path.to_owned(),
				max_depth,
			});
		}

		match shape {
			Shape::SelfDecoding(hook) => hook.decode_text(&value.to_string()).map_err(|source| DecodeError::SelfDecode {
				path: path.to_owned(),
				source,
			}),
			Shape::Scalar(slot) => slot.assign(value, path),
			Shape::Untyped(slot) => {
				slot.clone_from(value);
				Ok(())
			}
			Shape::Struct(item) => self.decode_struct(value, item, path, depth),
			Shape::Seq(seq) => self.decode_seq(value, seq, path, depth),
			Shape::Map(map) => self.decode_map(value, map, path, depth),
			Shape::Optional(slot) => self.decode_optional(value, slot, path, depth),
			Shape::NotSettable => Err(DecodeError::NotSettable { path: path.to_owned() }),
			Shape::Unsupported(kind) => Err(DecodeError::UnsupportedTargetShape {
				path: path.to_owned(),
				shape: kind.to_owned(),
			}),
		}
	}

	pub(crate) fn decode_struct(&self, value: &Value, item: &mut dyn StructTarget, path: &str, depth: u32) -> Result<()> {
		let Value::Object(object) = value else {
			return Err(mismatch(path, "a json object", value));
		};
		let descriptor = item.descriptor();

		item.visit_members(&mut |index, slot| {
			let Some(member) = descriptor.members().get(index) else {
				return Err(DecodeError::NotSettable {
					path: join(path, &index.to_string()),
				});
			};

			let member_path = join(path, member.key());
			match object.get(member.key()) {
				Some(field) => self.decode_shape(field, slot.shape(), &member_path, depth + 1),
				None if member.required() => Err(DecodeError::MissingRequiredField { path: member_path }),
				None => Ok(()),
			}
		})
	}

	fn decode_seq(&self, value: &Value, seq: &mut dyn SeqTarget, path: &str, depth: u32) -> Result<()> {
		let Value::Array(items) = value else {
			return Err(mismatch(path, "a json array", value));
		};

		if let Some(capacity) = seq.capacity().filter(|capacity| items.len() > *capacity) {
			return Err(DecodeError::ArrayLengthExceeded {
				path: path.to_owned(),
				capacity,
				actual: items.len(),
			});
		}

		seq.reset(items.len());
		for (index, item) in items.iter().enumerate() {
			let item_path = join(path, &index.to_string());
			let Some(slot) = seq.element(index) else {
				return Err(DecodeError::NotSettable { path: item_path });
			};
			self.decode_shape(item, slot.shape(), &item_path, depth + 1)?;
		}
		Ok(())
	}

	fn decode_map(&self, value: &Value, map: &mut dyn MapTarget, path: &str, depth: u32) -> Result<()> {
		if !map.string_keyed() {
			return Err(DecodeError::UnsupportedTargetShape {
				path: path.to_owned(),
				shape: format!("map with non-string key type {}", map.key_kind()),
			});
		}

		let Value::Object(object) = value else {
			return Err(mismatch(path, "a json object", value));
		};

		// untyped elements: the target becomes a copy of the object
		if map.element_untyped() {
			map.clear();
		}

		for (key, item) in object {
			let item_path = join(path, key);
			let Some(slot) = map.entry(key) else {
				return Err(DecodeError::NotSettable { path: item_path });
			};
			self.decode_shape(item, slot.shape(), &item_path, depth + 1)?;
		}
		Ok(())
	}

	fn decode_optional(&self, value: &Value, slot: &mut dyn OptionalTarget, path: &str, depth: u32) -> Result<()> {
		if value.is_null() {
			slot.clear();
			return Ok(());
		}
		let inner = slot.get_or_insert_default();
		self.decode_shape(value, inner.shape(), path, depth)
	}
}

fn mismatch(path: &str, expected: &'static str, value: &Value) -> DecodeError {
	DecodeError::TypeMismatch {
		path: path.to_owned(),
		expected,
		got: value.kind_name(),
	}
}
