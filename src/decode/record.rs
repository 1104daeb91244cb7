use crate::decode::engine::Decoder;
use crate::decode::{DecodeError, DecodeOptions, Number, Object, Result, Shape, Target, Value};

/// Outcome of a lenient record fill.
#[derive(Debug, Default)]
pub struct FillReport {
	/// Keys that were decoded into their member.
	pub filled: Vec<String>,
	/// Members whose value could not be converted; storage left as decoded so far.
	pub skipped: Vec<DecodeError>,
}

impl FillReport {
	/// Whether every present key was decoded.
	pub fn is_complete(&self) -> bool {
		self.skipped.is_empty()
	}
}

/// Object node for a flat text record; numeric text becomes [`Value::Lexeme`].
pub fn record_value<I, K, V>(record: I) -> Value
where
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: AsRef<str>,
{
	let object: Object = record
		.into_iter()
		.map(|(key, text)| {
			let text = text.as_ref();
			let value = match Number::parse(text) {
				Some(number) => Value::Lexeme(number),
				None => Value::from(text),
			};
			(key.into(), value)
		})
		.collect();
	Value::Object(object)
}

impl Value {
	/// Object node for a flat text record. See [`record_value`].
	pub fn from_record<I, K, V>(record: I) -> Self
	where
		I: IntoIterator<Item = (K, V)>,
		K: Into<String>,
		V: AsRef<str>,
	{
		record_value(record)
	}
}

/// Fill a structure from a flat text record, e.g. a database row.
///
/// Members are decoded independently: a member that fails is recorded in the
/// report and the rest continue. Missing keys are never an error here.
pub fn fill_record<T, I, K, V>(record: I, target: &mut T) -> Result<FillReport>
where
	T: Target + ?Sized,
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: AsRef<str>,
{
	let value = record_value(record);
	if value.as_object().is_some_and(Object::is_empty) {
		return Err(DecodeError::EmptyRecord);
	}
	fill_members(&value, target)
}

/// Build one `T` per record with [`fill_record`] semantics; empty rows give `T::default()`.
pub fn decode_records<T, R, I, K, V>(rows: R) -> Result<Vec<T>>
where
	T: Target + Default,
	R: IntoIterator<Item = I>,
	I: IntoIterator<Item = (K, V)>,
	K: Into<String>,
	V: AsRef<str>,
{
	rows.into_iter()
		.map(|row| {
			let mut item = T::default();
			fill_members(&record_value(row), &mut item)?;
			Ok(item)
		})
		.collect()
}

fn fill_members<T: Target + ?Sized>(value: &Value, target: &mut T) -> Result<FillReport> {
	let Shape::Struct(item) = target.shape() else {
		return Err(DecodeError::UnsupportedTargetShape {
			path: String::new(),
			shape: "record target must be a struct".to_owned(),
		});
	};
	let Some(object) = value.as_object() else {
		return Ok(FillReport::default());
	};

	let opt = DecodeOptions::default();
	let decoder = Decoder { opt: &opt };
	let descriptor = item.descriptor();
	let mut report = FillReport::default();

	item.visit_members(&mut |index, slot| {
		let Some(member) = descriptor.members().get(index) else {
			return Ok(());
		};
		let Some(field) = object.get(member.key()) else {
			return Ok(());
		};
		match decoder.decode_shape(field, slot.shape(), member.key(), 1) {
			Ok(()) => report.filled.push(member.key().to_owned()),
			Err(err) => report.skipped.push(err),
		}
		Ok(())
	})?;

	Ok(report)
}
