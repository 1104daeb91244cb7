//! Decode schema-free value trees into typed Rust structures.
//!
//! A [`decode::Value`] tree is matched onto caller-owned targets by member
//! name, with scalar coercion and dotted error paths.

/// Value trees, path lookup and structural decoding.
pub mod decode;
