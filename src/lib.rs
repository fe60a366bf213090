// Copyright 2023 Strixpyrr
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Fail-fast checks for function boundaries.
//!
//! ## How it works
//!
//! Each check takes a value and either returns it unchanged or fails with an
//! [`Error`] describing what was wrong, ready to be propagated with `?`:
//!
//! ```
//! # fn main() -> assert_is::Result {
//! let name = assert_is::exists("orio", "name", None)?;
//! let name = assert_is::string(name, Some("login"))?;
//!
//! let error = assert_is::string(42, Some("age")).unwrap_err();
//! assert_eq!(error.to_string(), "Expected string, not number for age");
//! # Ok(())
//! # }
//! ```
//!
//! Checks look at *shape*, not declared type. Anything implementing [`Subject`]
//! can be checked: std primitives, strings, collections, pointers to these,
//! futures, and the dynamically-typed [`Value`]. A value is:
//!
//! - *truthy* unless it is zero, `NaN`, an empty string, `false`, `None`, null,
//!   or undefined;
//! - *object-like* if it is an object, array, collection, or function, but not
//!   null;
//! - *promise-like* if it is object-like and has a callable `then`. Futures
//!   always are.
//!
//! ### Missing versus absent
//!
//! [`exists`] is a truthiness check, so `0`, `""` and `false` are reported as
//! missing just like `None`. That is rarely what a caller holding a legitimate
//! zero wants; [`present`] only rejects absent values.
//!
//! ### Traces
//!
//! Every failure captures the call stack and strips frames belonging to this
//! crate and its dependencies, so the first frame is the caller's. The stripping
//! matches frame text against [`AssertOptions::internal`] patterns and is best
//! effort: optimized or stripped builds may leave some internal frames in, or
//! produce no trace at all. Use an [`Asserter`] with custom [`AssertOptions`] to
//! change capture behavior.
//!
//! ## Features
//!
//! - `json`: checks on `serde_json::Value`, and conversion into [`Value`].
//! - `log`: emits a `debug` record for each failure.

mod asserter;
mod error;
mod future;
mod options;
mod subject;
pub mod trace;
pub mod value;

pub use asserter::{asserter, Asserter};
pub use error::{Error, ErrorKind, Expected, Result};
pub use options::{AssertOptions, Capture};
pub use subject::{Subject, TypeOf};
pub use trace::{Frame, Trace};
pub use value::{Function, Symbol, Value};

/// Checks that `value` is truthy, returning it unchanged. Fails with a
/// [`MissingValue`](ErrorKind::MissingValue) error, `Missing <descriptor>`, if
/// not. See [`Asserter::exists`].
#[inline]
pub fn exists<T: Subject>(value: T, descriptor: &str, reference: Option<&str>) -> Result<T> {
	asserter().exists(value, descriptor, reference)
}

/// Checks that `value` is not absent, returning it unchanged. See
/// [`Asserter::present`].
#[inline]
pub fn present<T: Subject>(value: T, descriptor: &str, reference: Option<&str>) -> Result<T> {
	asserter().present(value, descriptor, reference)
}

/// Checks that `value` is object-like, returning it unchanged.
#[inline]
pub fn object<T: Subject>(value: T, reference: Option<&str>) -> Result<T> {
	asserter().object(value, reference)
}

/// Checks that `value` is a string, returning it unchanged.
#[inline]
pub fn string<T: Subject>(value: T, reference: Option<&str>) -> Result<T> {
	asserter().string(value, reference)
}

/// Checks that `value` is promise-like, returning it unchanged.
#[inline]
pub fn promise<T: Subject>(value: T, reference: Option<&str>) -> Result<T> {
	asserter().promise(value, reference)
}
