use crate::decode::name::{MemberTag, derive_key};
use crate::decode::{Result, Target};

/// One structure member: identifier, resolved source key, requiredness.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberDescriptor {
	ident: &'static str,
	key: String,
	required: bool,
	overridden: bool,
}

impl MemberDescriptor {
	/// Resolve `ident` against optional tag text.
	pub fn new(ident: &'static str, tag: Option<&str>) -> Self {
		let tag = tag.map(MemberTag::parse).unwrap_or_default();
		Self {
			ident,
			key: tag.key.map_or_else(|| derive_key(ident), str::to_owned),
			required: tag.required,
			overridden: tag.key.is_some(),
		}
	}

	/// Member identifier as declared.
	pub fn ident(&self) -> &'static str {
		self.ident
	}

	/// Source object key.
	pub fn key(&self) -> &str {
		&self.key
	}

	/// Whether absence is an error.
	pub fn required(&self) -> bool {
		self.required
	}

	/// Whether the key came from an explicit override.
	pub fn overridden(&self) -> bool {
		self.overridden
	}
}

/// Member layout of one target structure, built once per type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructDescriptor {
	name: &'static str,
	members: Vec<MemberDescriptor>,
}

impl StructDescriptor {
	/// Start an empty descriptor for structure `name`.
	pub fn new(name: &'static str) -> Self {
		Self { name, members: Vec::new() }
	}

	/// Append a member in declaration order.
	pub fn member(mut self, ident: &'static str, tag: Option<&str>) -> Self {
		self.members.push(MemberDescriptor::new(ident, tag));
		self
	}

	/// Structure name.
	pub fn name(&self) -> &'static str {
		self.name
	}

	/// Members in declaration order.
	pub fn members(&self) -> &[MemberDescriptor] {
		&self.members
	}

	/// Look up a member by identifier.
	pub fn find(&self, ident: &str) -> Option<&MemberDescriptor> {
		self.members.iter().find(|member| member.ident() == ident)
	}
}

/// Structure storage with a member descriptor.
///
/// Implemented by [`decode_struct!`](crate::decode_struct).
pub trait StructTarget {
	/// Memoized descriptor for this type.
	fn descriptor(&self) -> &'static StructDescriptor;

	/// Visit member slots in descriptor order.
	fn visit_members(&mut self, visit: &mut dyn FnMut(usize, &mut dyn Target) -> Result<()>) -> Result<()>;
}

/// Register a named struct as a decode target.
///
/// Each member may carry tag text: `"key"`, `"key,required"` or
/// `",required"`. Untagged members use the derived key and are optional.
///
/// ```
/// use jsondec::decode::{Value, decode};
///
/// #[derive(Default)]
/// struct User {
/// 	id: i64,
/// 	display_name: String,
/// 	tags: Vec<String>,
/// }
///
/// jsondec::decode_struct!(User {
/// 	id => ",required",
/// 	display_name => "name",
/// 	tags,
/// });
///
/// let tree = Value::from(serde_json::json!({"id": 7, "name": "Ada", "tags": ["x"]}));
/// let mut user = User::default();
/// decode(&tree, &mut user).unwrap();
/// assert_eq!(user.display_name, "Ada");
/// ```
#[macro_export]
macro_rules! decode_struct {
	($name:ident { $( $field:ident $( => $tag:literal )? ),* $(,)? }) => {
		impl $crate::decode::StructTarget for $name {
			fn descriptor(&self) -> &'static $crate::decode::StructDescriptor {
				static DESCRIPTOR: ::std::sync::OnceLock<$crate::decode::StructDescriptor> = ::std::sync::OnceLock::new();
				DESCRIPTOR.get_or_init(|| {
					$crate::decode::StructDescriptor::new(stringify!($name))
						$( .member(stringify!($field), $crate::__member_tag!($($tag)?)) )*
				})
			}

			#[allow(unused_mut, unused_variables, unused_assignments)]
			fn visit_members(
				&mut self,
				visit: &mut dyn FnMut(usize, &mut dyn $crate::decode::Target) -> $crate::decode::Result<()>,
			) -> $crate::decode::Result<()> {
				let mut index = 0_usize;
				$(
					visit(index, &mut self.$field)?;
					index += 1;
				)*
				Ok(())
			}
		}

		impl $crate::decode::Target for $name {
			fn shape(&mut self) -> $crate::decode::Shape<'_> {
				$crate::decode::Shape::Struct(self)
			}
		}
	};
}

#[doc(hidden)]
#[macro_export]
macro_rules! __member_tag {
	() => {
		None
	};
	($tag:literal) => {
		Some($tag)
	};
}

#[cfg(test)]
mod tests {
	use super::{MemberDescriptor, StructDescriptor};

	#[test]
	fn keys_derive_unless_overridden() {
		let descriptor = StructDescriptor::new("Server")
			.member("HTTPServer", None)
			.member("the_name", Some("name"))
			.member("id", Some(",required"));

		let keys: Vec<&str> = descriptor.members().iter().map(MemberDescriptor::key).collect();
		assert_eq!(keys, ["http_server", "name", "id"]);
		assert!(descriptor.find("id").is_some_and(MemberDescriptor::required));
		assert!(descriptor.find("the_name").is_some_and(|member| member.overridden() && !member.required()));
		assert!(descriptor.find("missing").is_none());

		let idents: Vec<&str> = descriptor.members().iter().map(MemberDescriptor::ident).collect();
		assert_eq!(idents, ["HTTPServer", "the_name", "id"]);
	}
}
