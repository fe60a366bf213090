// SPDX-License-Identifier: Apache-2.0

use once_cell::sync::Lazy;
use crate::{AssertOptions, Error, Result, Subject, Trace};
use crate::error::{ErrorKind, Expected};

/// Runs checks, building failures according to its [`AssertOptions`].
///
/// Each check either returns its input unchanged or fails with an [`Error`];
/// nothing is retained between calls.
#[derive(Clone, Debug, Default)]
pub struct Asserter {
	options: AssertOptions,
}

static ASSERTER: Lazy<Asserter> = Lazy::new(Asserter::default);

/// Returns the default asserter, used by the crate-level check functions.
#[inline]
pub fn asserter() -> &'static Asserter { &ASSERTER }

impl From<AssertOptions> for Asserter {
	fn from(options: AssertOptions) -> Self { Self::new(options) }
}

impl Asserter {
	/// Creates an asserter with `options`.
	pub const fn new(options: AssertOptions) -> Self {
		Self { options }
	}

	/// Returns the asserter's options.
	pub fn options(&self) -> &AssertOptions { &self.options }

	/// Checks that `value` is truthy, failing with a [`MissingValue`] error if it
	/// isn't.
	///
	/// This is a truthiness check: zero, empty strings, and `false` fail just as
	/// `None` and null do. Use [`present`](Self::present) to only reject absent
	/// values.
	///
	/// [`MissingValue`]: ErrorKind::MissingValue
	pub fn exists<T: Subject>(&self, value: T, descriptor: &str, reference: Option<&str>) -> Result<T> {
		if value.is_truthy() {
			Ok(value)
		} else {
			Err(self.fail(ErrorKind::MissingValue(descriptor.into()), reference))
		}
	}

	/// Checks that `value` is not absent (undefined, null, or `None`), failing
	/// with a [`MissingValue`] error if it is. Falsy values such as zero pass.
	///
	/// [`MissingValue`]: ErrorKind::MissingValue
	pub fn present<T: Subject>(&self, value: T, descriptor: &str, reference: Option<&str>) -> Result<T> {
		if value.is_nullish() {
			Err(self.fail(ErrorKind::MissingValue(descriptor.into()), reference))
		} else {
			Ok(value)
		}
	}

	/// Checks that `value` is object-like: an object, array, collection, or
	/// function. Null is not object-like.
	pub fn object<T: Subject>(&self, value: T, reference: Option<&str>) -> Result<T> {
		self.expect(value, T::is_object_like, Expected::Object, reference)
	}

	/// Checks that `value` is a string.
	pub fn string<T: Subject>(&self, value: T, reference: Option<&str>) -> Result<T> {
		self.expect(value, T::is_string, Expected::String, reference)
	}

	/// Checks that `value` is promise-like: object-like, with a callable `then`.
	pub fn promise<T: Subject>(&self, value: T, reference: Option<&str>) -> Result<T> {
		self.expect(
			value,
			|value| value.is_object_like() && value.is_thenable(),
			Expected::Promise,
			reference
		)
	}

	fn expect<T: Subject>(
		&self,
		value: T,
		predicate: impl FnOnce(&T) -> bool,
		expected: Expected,
		reference: Option<&str>
	) -> Result<T> {
		if predicate(&value) {
			Ok(value)
		} else {
			Err(self.fail(ErrorKind::TypeMismatch(expected, value.type_of()), reference))
		}
	}

	fn fail(&self, kind: ErrorKind, reference: Option<&str>) -> Error {
		let AssertOptions { capture, internal, .. } = &self.options;
		let trace = Trace::capture(*capture).filter(&internal[..]);
		let error = Error::new(kind, reference, trace);
		#[cfg(feature = "log")]
		log::debug!(target: "assert_is", "check failed: {error}");
		error
	}
}
