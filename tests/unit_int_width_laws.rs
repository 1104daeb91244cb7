#![allow(missing_docs)]

use jsondec::decode::{DecodeError, DecodeOptions, Number, Result, Target, Value, decode_value};

fn decode_into<T: Target + Default>(value: Value) -> Result<T> {
	let mut out = T::default();
	decode_value(&value, &mut out, "n", &DecodeOptions::default())?;
	Ok(out)
}

fn num(text: &str) -> Value {
	Value::Number(Number::parse(text).expect("valid lexeme"))
}

fn width_of(err: DecodeError) -> &'static str {
	match err {
		DecodeError::RangeExceeded { width, .. } => width,
		other => panic!("expected range error, got {other}"),
	}
}

macro_rules! assert_bounds {
	($ty:ty, $name:literal, $below:literal, $above:literal) => {
		assert_eq!(decode_into::<$ty>(Value::from(<$ty>::MIN as i64)).expect("min fits"), <$ty>::MIN);
		assert_eq!(decode_into::<$ty>(num(&<$ty>::MAX.to_string())).expect("max fits"), <$ty>::MAX);
		assert_eq!(width_of(decode_into::<$ty>(num($below)).expect_err("below min")), $name);
		assert_eq!(width_of(decode_into::<$ty>(num($above)).expect_err("above max")), $name);
	};
}

#[test]
fn signed_widths_accept_exact_bounds() {
	assert_bounds!(i8, "int8", "-129", "128");
	assert_bounds!(i16, "int16", "-32769", "32768");
	assert_bounds!(i32, "int32", "-2147483649", "2147483648");
	assert_bounds!(i64, "int64", "-9223372036854775809", "9223372036854775808");
}

#[test]
fn unsigned_widths_accept_exact_bounds() {
	assert_bounds!(u8, "uint8", "-1", "256");
	assert_bounds!(u16, "uint16", "-1", "65536");
	assert_bounds!(u32, "uint32", "-1", "4294967296");
	assert_bounds!(u64, "uint64", "-1", "18446744073709551616");
}

fn parsed(text: &str) -> Value {
	Value::from(serde_json::from_str::<serde_json::Value>(text).expect("valid json"))
}

#[test]
fn parsed_documents_reject_integers_past_64_bits() {
	assert_eq!(width_of(decode_into::<u64>(parsed("18446744073709551616")).expect_err("u64 max + 1")), "uint64");
	assert_eq!(width_of(decode_into::<i64>(parsed("-9223372036854775809")).expect_err("i64 min - 1")), "int64");
	assert_eq!(width_of(decode_into::<i64>(parsed("9223372036854775808")).expect_err("i64 max + 1")), "int64");
	assert_eq!(decode_into::<u64>(parsed("18446744073709551615")).expect("u64 max"), u64::MAX);
	assert_eq!(decode_into::<i64>(parsed("-9223372036854775808")).expect("i64 min"), i64::MIN);
}

#[test]
fn fractional_sources_past_64_bits_are_rejected() {
	assert_eq!(width_of(decode_into::<i64>(parsed("9223372036854775807.5")).expect_err("above i64 max")), "int64");
	assert_eq!(width_of(decode_into::<u64>(parsed("1.8446744073709551616e19")).expect_err("2^64")), "uint64");
	assert_eq!(decode_into::<u64>(parsed("1.844674407370955e19")).expect("below 2^64"), 18_446_744_073_709_549_568);
}

#[test]
fn platform_widths_follow_pointer_size() {
	assert_eq!(decode_into::<usize>(num(&usize::MAX.to_string())).expect("usize max"), usize::MAX);
	assert_eq!(decode_into::<isize>(num(&isize::MIN.to_string())).expect("isize min"), isize::MIN);
	let above = (usize::MAX as u128 + 1).to_string();
	assert_eq!(width_of(decode_into::<usize>(num(&above)).expect_err("above usize")), "uint");
}

#[test]
fn fractional_sources_are_checked_before_truncation() {
	assert_eq!(decode_into::<i8>(num("126.9")).expect("truncates"), 126);
	assert_eq!(decode_into::<i8>(num("-128.0")).expect("integral float"), -128);
	assert_eq!(decode_into::<u16>(num("1e3")).expect("exponent"), 1000);
	assert_eq!(width_of(decode_into::<i8>(num("127.5")).expect_err("past max before truncation")), "int8");
	assert_eq!(width_of(decode_into::<u8>(num("-0.5")).expect_err("negative fraction")), "uint8");
}

#[test]
fn floats_take_the_nearest_value() {
	assert_eq!(decode_into::<f64>(num("0.1")).expect("f64"), 0.1);
	assert_eq!(decode_into::<f32>(num("0.1")).expect("f32"), 0.1_f32);
	assert!(decode_into::<f32>(num("1e300")).expect("f32 overflow is not an error").is_infinite());
}
