mod canonical;
mod coerce;
mod descriptor;
mod engine;
mod error;
mod name;
mod path;
mod record;
mod target;
mod value;

/// Scalar coercion kinds and entry point.
pub use coerce::{IntWidth, Scalar, ScalarKind, coerce};
/// Structure member descriptors and the structure capability.
pub use descriptor::{MemberDescriptor, StructDescriptor, StructTarget};
/// Structural decoding entry points and options.
pub use engine::{DecodeOptions, decode, decode_field, decode_new, decode_value, decode_with};
/// Error and result aliases.
pub use error::{DecodeError, HookError, Result};
/// Member key derivation and tag parsing.
pub use name::{MemberTag, derive_key};
/// Dotted and segment path resolution.
pub use path::{FieldPath, get, get_field};
/// Lenient flat-record filling.
pub use record::{FillReport, decode_records, fill_record, record_value};
/// Target shapes and container capabilities.
pub use target::{DecodeText, MapKey, MapTarget, OptionalTarget, ScalarSlot, SeqTarget, Shape, Target};
/// Value tree node types.
pub use value::{Number, NumberMode, Object, Value};
