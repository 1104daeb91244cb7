use std::any::TypeId;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use crate::decode::coerce::{IntWidth, ScalarKind, coerce_bool, coerce_float, coerce_int, coerce_string, coerce_uint};
use crate::decode::{HookError, Result, StructTarget, Value};

/// Storage that the structural decoder can populate.
pub trait Target {
	/// Borrow this storage as one of the decodable shapes.
	fn shape(&mut self) -> Shape<'_>;
}

/// Closed set of target shapes the decoder dispatches over.
pub enum Shape<'a> {
	/// Scalar slot filled through coercion.
	Scalar(ScalarSlot<'a>),
	/// Untyped slot receiving a verbatim copy of the subtree.
	Untyped(&'a mut Value),
	/// Structure with member descriptors.
	Struct(&'a mut dyn StructTarget),
	/// Growable or fixed-length sequence.
	Seq(&'a mut dyn SeqTarget),
	/// Keyed mapping.
	Map(&'a mut dyn MapTarget),
	/// Optional wrapper with lazily allocated storage.
	Optional(&'a mut dyn OptionalTarget),
	/// Type parsing its own canonical text.
	SelfDecoding(&'a mut dyn DecodeText),
	/// Storage exists but cannot be written.
	NotSettable,
	/// Kind the decoder has no rule for.
	Unsupported(&'static str),
}

impl Shape<'_> {
	/// Short description used in error messages.
	pub fn describe(&self) -> String {
		match self {
			Self::Scalar(slot) => slot.kind().name().to_owned(),
			Self::Untyped(_) => "value".to_owned(),
			Self::Struct(item) => format!("struct {}", item.descriptor().name()),
			Self::Seq(_) => "sequence".to_owned(),
			Self::Map(_) => "mapping".to_owned(),
			Self::Optional(_) => "optional".to_owned(),
			Self::SelfDecoding(_) => "self-decoding".to_owned(),
			Self::NotSettable => "not settable".to_owned(),
			Self::Unsupported(kind) => (*kind).to_owned(),
		}
	}
}

/// Mutable borrow of one scalar member.
pub enum ScalarSlot<'a> {
	/// `bool` slot.
	Bool(&'a mut bool),
	/// `i8` slot.
	I8(&'a mut i8),
	/// `i16` slot.
	I16(&'a mut i16),
	/// `i32` slot.
	I32(&'a mut i32),
	/// `i64` slot.
	I64(&'a mut i64),
	/// `isize` slot.
	Isize(&'a mut isize),
	/// `u8` slot.
	U8(&'a mut u8),
	/// `u16` slot.
	U16(&'a mut u16),
	/// `u32` slot.
	U32(&'a mut u32),
	/// `u64` slot.
	U64(&'a mut u64),
	/// `usize` slot.
	Usize(&'a mut usize),
	/// `f32` slot.
	F32(&'a mut f32),
	/// `f64` slot.
	F64(&'a mut f64),
	/// `String` slot.
	String(&'a mut String),
}

impl ScalarSlot<'_> {
	/// Scalar kind this slot accepts.
	pub fn kind(&self) -> ScalarKind {
		match self {
			Self::Bool(_) => ScalarKind::Bool,
			Self::I8(_) => ScalarKind::Int(IntWidth::W8),
			Self::I16(_) => ScalarKind::Int(IntWidth::W16),
			Self::I32(_) => ScalarKind::Int(IntWidth::W32),
			Self::I64(_) => ScalarKind::Int(IntWidth::W64),
			Self::Isize(_) => ScalarKind::Int(IntWidth::Platform),
			Self::U8(_) => ScalarKind::Uint(IntWidth::W8),
			Self::U16(_) => ScalarKind::Uint(IntWidth::W16),
			Self::U32(_) => ScalarKind::Uint(IntWidth::W32),
			Self::U64(_) => ScalarKind::Uint(IntWidth::W64),
			Self::Usize(_) => ScalarKind::Uint(IntWidth::Platform),
			Self::F32(_) => ScalarKind::F32,
			Self::F64(_) => ScalarKind::F64,
			Self::String(_) => ScalarKind::String,
		}
	}

	/// Coerce `source` and store it. The slot is untouched on error.
	///
	/// Narrowing casts are lossless: coercion already range-checked the value.
	pub fn assign(self, source: &Value, path: &str) -> Result<()> {
		match self {
			Self::Bool(slot) => *slot = coerce_bool(source, path)?,
			Self::I8(slot) => *slot = coerce_int(source, IntWidth::W8, path)? as i8,
			Self::I16(slot) => *slot = coerce_int(source, IntWidth::W16, path)? as i16,
			Self::I32(slot) => *slot = coerce_int(source, IntWidth::W32, path)? as i32,
			Self::I64(slot) => *slot = coerce_int(source, IntWidth::W64, path)?,
			Self::Isize(slot) => *slot = coerce_int(source, IntWidth::Platform, path)? as isize,
			Self::U8(slot) => *slot = coerce_uint(source, IntWidth::W8, path)? as u8,
			Self::U16(slot) => *slot = coerce_uint(source, IntWidth::W16, path)? as u16,
			Self::U32(slot) => *slot = coerce_uint(source, IntWidth::W32, path)? as u32,
			Self::U64(slot) => *slot = coerce_uint(source, IntWidth::W64, path)?,
			Self::Usize(slot) => *slot = coerce_uint(source, IntWidth::Platform, path)? as usize,
			Self::F32(slot) => *slot = coerce_float(source, path)? as f32,
			Self::F64(slot) => *slot = coerce_float(source, path)?,
			Self::String(slot) => *slot = coerce_string(source, path)?,
		}
		Ok(())
	}
}

/// Sequence storage.
pub trait SeqTarget {
	/// Fixed capacity, `None` for growable sequences.
	fn capacity(&self) -> Option<usize>;
	/// Prepare `len` fresh slots; fixed sequences keep slots past `len`.
	fn reset(&mut self, len: usize);
	/// Borrow one element slot.
	fn element(&mut self, index: usize) -> Option<&mut dyn Target>;
}

/// Keyed mapping storage.
pub trait MapTarget {
	/// Name of the key type, for error messages.
	fn key_kind(&self) -> &'static str;
	/// Whether keys are string-like.
	fn string_keyed(&self) -> bool;
	/// Whether elements are untyped [`Value`]s.
	fn element_untyped(&self) -> bool;
	/// Remove every entry.
	fn clear(&mut self);
	/// Insert a fresh element under `key` and borrow it.
	fn entry(&mut self, key: &str) -> Option<&mut dyn Target>;
}

/// Optional storage.
pub trait OptionalTarget {
	/// Drop any allocation.
	fn clear(&mut self);
	/// Allocate a default value if empty and borrow it.
	fn get_or_insert_default(&mut self) -> &mut dyn Target;
}

/// Capability of types that parse their own canonical text.
///
/// ```
/// use jsondec::decode::{DecodeText, HookError, Shape, Target};
///
/// #[derive(Default)]
/// struct Upper(String);
///
/// impl DecodeText for Upper {
/// 	fn decode_text(&mut self, text: &str) -> Result<(), HookError> {
/// 		self.0 = text.trim_matches('"').to_uppercase();
/// 		Ok(())
/// 	}
/// }
///
/// impl Target for Upper {
/// 	fn shape(&mut self) -> Shape<'_> {
/// 		Shape::SelfDecoding(self)
/// 	}
/// }
/// ```
pub trait DecodeText {
	/// Parse the compact JSON text of the source subtree.
	fn decode_text(&mut self, text: &str) -> std::result::Result<(), HookError>;
}

/// Key types of mapping targets.
pub trait MapKey: Sized {
	/// Whether the key is string-like.
	const STRING_KEYED: bool;
	/// Key type name, for error messages.
	const KIND: &'static str;
	/// Build a key from source object text.
	fn from_key(key: &str) -> Option<Self>;
}

macro_rules! impl_scalar_target {
	($($ty:ty => $variant:ident),* $(,)?) => {
		$(
			impl Target for $ty {
				fn shape(&mut self) -> Shape<'_> {
					Shape::Scalar(ScalarSlot::$variant(self))
				}
			}
		)*
	};
}

impl_scalar_target! {
	bool => Bool,
	i8 => I8,
	i16 => I16,
	i32 => I32,
	i64 => I64,
	isize => Isize,
	u8 => U8,
	u16 => U16,
	u32 => U32,
	u64 => U64,
	usize => Usize,
	f32 => F32,
	f64 => F64,
	String => String,
}

macro_rules! impl_unsupported_target {
	($($ty:ty => $kind:literal),* $(,)?) => {
		$(
			impl Target for $ty {
				fn shape(&mut self) -> Shape<'_> {
					Shape::Unsupported($kind)
				}
			}
		)*
	};
}

impl_unsupported_target! {
	char => "char",
	i128 => "int128",
	u128 => "uint128",
	() => "unit",
}

impl Target for Value {
	fn shape(&mut self) -> Shape<'_> {
		Shape::Untyped(self)
	}
}

impl<T: Target + ?Sized> Target for Box<T> {
	fn shape(&mut self) -> Shape<'_> {
		(**self).shape()
	}
}

impl<T: Target> Target for Rc<T> {
	fn shape(&mut self) -> Shape<'_> {
		match Rc::get_mut(self) {
			Some(inner) => inner.shape(),
			None => Shape::NotSettable,
		}
	}
}

impl<T: Target> Target for Arc<T> {
	fn shape(&mut self) -> Shape<'_> {
		match Arc::get_mut(self) {
			Some(inner) => inner.shape(),
			None => Shape::NotSettable,
		}
	}
}

impl<T: Target + Default> OptionalTarget for Option<T> {
	fn clear(&mut self) {
		*self = None;
	}

	fn get_or_insert_default(&mut self) -> &mut dyn Target {
		self.get_or_insert_with(T::default)
	}
}

impl<T: Target + Default> Target for Option<T> {
	fn shape(&mut self) -> Shape<'_> {
		Shape::Optional(self)
	}
}

impl<T: Target + Default> SeqTarget for Vec<T> {
	fn capacity(&self) -> Option<usize> {
		None
	}

	fn reset(&mut self, len: usize) {
		self.clear();
		self.resize_with(len, T::default);
	}

	fn element(&mut self, index: usize) -> Option<&mut dyn Target> {
		self.get_mut(index).map(|item| item as &mut dyn Target)
	}
}

impl<T: Target + Default> Target for Vec<T> {
	fn shape(&mut self) -> Shape<'_> {
		Shape::Seq(self)
	}
}

impl<T: Target + Default, const N: usize> SeqTarget for [T; N] {
	fn capacity(&self) -> Option<usize> {
		Some(N)
	}

	fn reset(&mut self, len: usize) {
		for item in self.iter_mut().take(len) {
			*item = T::default();
		}
	}

	fn element(&mut self, index: usize) -> Option<&mut dyn Target> {
		self.get_mut(index).map(|item| item as &mut dyn Target)
	}
}

impl<T: Target + Default, const N: usize> Target for [T; N] {
	fn shape(&mut self) -> Shape<'_> {
		Shape::Seq(self)
	}
}

impl<K, V, S> MapTarget for HashMap<K, V, S>
where
	K: MapKey + Eq + Hash,
	V: Target + Default + 'static,
	S: BuildHasher,
{
	fn key_kind(&self) -> &'static str {
		K::KIND
	}

	fn string_keyed(&self) -> bool {
		K::STRING_KEYED
	}

	fn element_untyped(&self) -> bool {
		TypeId::of::<V>() == TypeId::of::<Value>()
	}

	fn clear(&mut self) {
		HashMap::clear(self);
	}

	fn entry(&mut self, key: &str) -> Option<&mut dyn Target> {
		let slot = HashMap::entry(self, K::from_key(key)?).or_default();
		*slot = V::default();
		Some(slot)
	}
}

impl<K, V, S> Target for HashMap<K, V, S>
where
	K: MapKey + Eq + Hash,
	V: Target + Default + 'static,
	S: BuildHasher,
{
	fn shape(&mut self) -> Shape<'_> {
		Shape::Map(self)
	}
}

impl<K, V> MapTarget for BTreeMap<K, V>
where
	K: MapKey + Ord,
	V: Target + Default + 'static,
{
	fn key_kind(&self) -> &'static str {
		K::KIND
	}

	fn string_keyed(&self) -> bool {
		K::STRING_KEYED
	}

	fn element_untyped(&self) -> bool {
		TypeId::of::<V>() == TypeId::of::<Value>()
	}

	fn clear(&mut self) {
		BTreeMap::clear(self);
	}

	fn entry(&mut self, key: &str) -> Option<&mut dyn Target> {
		let slot = BTreeMap::entry(self, K::from_key(key)?).or_default();
		*slot = V::default();
		Some(slot)
	}
}

impl<K, V> Target for BTreeMap<K, V>
where
	K: MapKey + Ord,
	V: Target + Default + 'static,
{
	fn shape(&mut self) -> Shape<'_> {
		Shape::Map(self)
	}
}

macro_rules! impl_string_key {
	($($ty:ty),* $(,)?) => {
		$(
			impl MapKey for $ty {
				const STRING_KEYED: bool = true;
				const KIND: &'static str = "string";

				fn from_key(key: &str) -> Option<Self> {
					Some(key.into())
				}
			}
		)*
	};
}

impl_string_key!(String, Box<str>, Rc<str>, Arc<str>);

macro_rules! impl_rejected_key {
	($($ty:ty => $kind:literal),* $(,)?) => {
		$(
			impl MapKey for $ty {
				const STRING_KEYED: bool = false;
				const KIND: &'static str = $kind;

				fn from_key(_key: &str) -> Option<Self> {
					None
				}
			}
		)*
	};
}

impl_rejected_key! {
	bool => "bool",
	i32 => "int32",
	i64 => "int64",
	u32 => "uint32",
	u64 => "uint64",
	usize => "uint",
}
