#![allow(missing_docs)]

use std::collections::HashMap;

use jsondec::decode::{DecodeError, decode_records, fill_record};

#[derive(Debug, Default)]
struct Customer {
	id: u32,
	full_name: String,
	credit: f32,
	vip: bool,
}

jsondec::decode_struct!(Customer {
	id,
	full_name => "name",
	credit,
	vip,
});

#[test]
fn database_rows_fill_numeric_members_from_text() {
	let row = HashMap::from([("id", "17"), ("name", "Lin"), ("credit", "99.5")]);
	let mut customer = Customer::default();
	let report = fill_record(row, &mut customer).expect("non-empty record");

	assert!(report.is_complete());
	assert_eq!(customer.id, 17);
	assert_eq!(customer.full_name, "Lin");
	assert_eq!(customer.credit, 99.5);
	assert!(!customer.vip);
}

#[test]
fn unconvertible_members_are_reported_not_fatal() {
	let row = [("id", "-3"), ("name", "Kim"), ("vip", "yes")];
	let mut customer = Customer::default();
	let report = fill_record(row, &mut customer).expect("non-empty record");

	assert_eq!(customer.full_name, "Kim");
	assert_eq!(report.filled, ["name"]);
	let paths: Vec<_> = report.skipped.iter().filter_map(DecodeError::path).collect();
	assert_eq!(paths, ["id", "vip"]);
}

#[test]
fn non_struct_targets_fail_the_batch() {
	let rows = vec![vec![("id", "1")]];
	let err = decode_records::<u32, _, _, _, _>(rows).expect_err("u32 is not a record");
	assert!(matches!(err, DecodeError::UnsupportedTargetShape { .. }));
}

#[test]
fn batches_build_one_item_per_row() {
	let rows = vec![vec![("id", "1"), ("name", "a")], vec![("id", "2"), ("credit", "oops")]];
	let customers: Vec<Customer> = decode_records(rows).expect("struct target");
	assert_eq!(customers.iter().map(|item| item.id).collect::<Vec<_>>(), [1, 2]);
	assert_eq!(customers[1].credit, 0.0);
}
