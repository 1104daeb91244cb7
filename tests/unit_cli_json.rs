#![allow(missing_docs)]

use std::io::Write;
use std::process::{Command, Output, Stdio};

use jsondec_testkit::fixture_path;
use serde_json::Value;

#[test]
fn get_json_output_reports_the_resolved_node() {
	let output = run(&["get", &fixture("nested.json"), "a.b.1", "--json"]);
	assert!(output.status.success(), "command should succeed");

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["path"], "a.b.1");
	assert_eq!(json["found"], true);
	assert_eq!(json["kind"], "object");
	assert_eq!(json["value"]["c"], "second");
}

#[test]
fn get_prints_canonical_text_for_segments() {
	let output = run(&["get", &fixture("account.json"), "--segment", "app.version"]);
	assert!(output.status.success(), "command should succeed");
	assert_eq!(stdout(&output), "\"2.4.1\"");

	let output = run(&["get", &fixture("account.json"), "limits"]);
	assert_eq!(stdout(&output), r#"{"daily":500,"monthly":12000}"#);
}

#[test]
fn get_exits_nonzero_for_absent_paths() {
	let output = run(&["get", &fixture("nested.json"), "a.b.7", "--json"]);
	assert_eq!(output.status.code(), Some(1));

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["found"], false);
	assert!(String::from_utf8_lossy(&output.stderr).contains("path 'a.b.7' not found"));
}

#[test]
fn get_reads_stdin_and_keeps_lexemes() {
	let mut child = Command::new(env!("CARGO_BIN_EXE_jsondec"))
		.args(["get", "-", "n", "--lexeme-numbers", "--json"])
		.stdin(Stdio::piped())
		.stdout(Stdio::piped())
		.stderr(Stdio::piped())
		.spawn()
		.expect("command spawns");
	child
		.stdin
		.take()
		.expect("stdin piped")
		.write_all(br#"{"n": 12.50}"#)
		.expect("stdin accepts input");
	let output = child.wait_with_output().expect("command finishes");

	assert!(output.status.success(), "command should succeed");
	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["kind"], "string");
}

#[test]
fn key_prints_one_derived_key_per_identifier() {
	let output = run(&["key", "UserID", "HTTPServer", "display_name"]);
	assert!(output.status.success(), "command should succeed");
	assert_eq!(stdout(&output), "user_id\nhttp_server\ndisplay_name");
}

#[test]
fn coerce_json_output_carries_kind_and_value() {
	let output = run(&["coerce", &fixture("orders.json"), "orders.1.price", "--kind", "uint8", "--json"]);
	assert!(output.status.success(), "command should succeed");

	let json: Value = serde_json::from_slice(&output.stdout).expect("stdout should be valid json");
	assert_eq!(json["path"], "orders.1.price");
	assert_eq!(json["kind"], "uint8");
	assert_eq!(json["value"], 120);
}

#[test]
fn coerce_reports_range_errors() {
	let output = run(&["coerce", &fixture("orders.json"), "orders.2.qty", "--kind", "int8"]);
	assert_eq!(output.status.code(), Some(1));
	assert!(String::from_utf8_lossy(&output.stderr).contains("field 'orders.2.qty' value exceeds the range of int8"));
}

#[test]
fn coerce_rejects_unknown_kinds() {
	let output = run(&["coerce", &fixture("orders.json"), "orders.0.qty", "--kind", "i32"]);
	assert!(!output.status.success(), "unknown kind should fail argument parsing");
}

fn run(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_jsondec")).args(args).output().expect("command executes")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).trim_end().to_owned()
}

fn fixture(name: &str) -> String {
	fixture_path(name).display().to_string()
}
