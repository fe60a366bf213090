// SPDX-License-Identifier: Apache-2.0

use std::thread;
use all_asserts::assert_lt;
use assert_is::{AssertOptions, Asserter, Capture, Error, Value};

#[macro_use]
mod common;

/// Asserts the first frame left in the trace is the calling test function.
fn assert_starts_at(error: &Error, caller: &str) {
	let first = error.trace().frames().first().expect("trace should be captured");
	assert!(first.symbol().contains(caller), "expected {caller} first in trace:\n{}", error.trace());
}

#[test]
fn every_check_starts_at_caller() {
	let caller = "every_check_starts_at_caller";
	assert_starts_at(&common::failure(assert_is::exists(Value::Null, "token", Some("login"))), caller);
	assert_starts_at(&common::failure(assert_is::present((), "token", None)), caller);
	assert_starts_at(&common::failure(assert_is::object(1i32, None)), caller);
	assert_starts_at(&common::failure(assert_is::string(1i32, None)), caller);
	assert_starts_at(&common::failure(assert_is::promise(1i32, None)), caller);
}

#[inline(never)]
fn check_user_id(id: i32) -> assert_is::Result<i32> {
	assert_is::string(id, Some("userId"))?;
	Ok(id)
}

#[test]
fn nested_caller_is_first() {
	let error = common::failure(check_user_id(7));
	assert_eq!(error.message(), "Expected string, not number for userId");
	assert_starts_at(&error, "check_user_id");
	let callers: Vec<_> = error.trace().frames().iter().map(|frame| frame.symbol()).collect();
	assert!(callers.iter().any(|symbol| symbol.contains("nested_caller_is_first")), "{callers:#?}");
}

#[test]
fn lean_asserter_skips_capture() {
	let asserter = Asserter::new(AssertOptions::lean());
	let error = common::failure(asserter.object(Value::Null, None));
	assert!(error.trace().is_empty());
	assert_eq!(error.to_string(), "Expected object, not object");
}

#[test]
fn extra_patterns_remove_more_frames() {
	let default = common::failure(assert_is::string(1i32, None));
	assert_starts_at(&default, "extra_patterns_remove_more_frames");

	let asserter = Asserter::new(
		AssertOptions::new()
			.with_capture(Capture::Always)
			.with_internal("extra_patterns_remove_more_frames")
	);
	let filtered = common::failure(asserter.string(1i32, None));
	assert_lt!(filtered.trace().len(), default.trace().len());
	let first = filtered.trace().frames().first().expect("trace should be captured");
	assert!(!first.symbol().contains("extra_patterns_remove_more_frames"), "{}", filtered.trace());
}

#[test]
fn default_asserter_is_shared_across_threads() {
	let handles: Vec<_> = (0..4).map(|i| thread::spawn(move || {
		let error = common::failure(assert_is::exists(0i32, "count", Some(format!("worker {i}").as_str())));
		error.message().to_owned()
	})).collect();

	for (i, handle) in handles.into_iter().enumerate() {
		assert_eq!(handle.join().unwrap(), format!("Missing count for worker {i}"));
	}
}
