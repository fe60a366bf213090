// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use crate::trace::DEFAULT_INTERNAL;

/// Options for tuning how [`Asserter`](crate::Asserter) builds its failures.
///
/// # Capture
///
/// Whether a stack trace is captured when a check fails. Defaults to always
/// capturing, regardless of `RUST_BACKTRACE`. Capturing is slow relative to the
/// check itself, so hot paths that never inspect the trace may want to disable
/// it.
///
/// # Internal patterns
///
/// Frames with any line containing one of these patterns are removed from the
/// trace, so it starts at the caller. Defaults to [`DEFAULT_INTERNAL`]: this
/// crate, its dependencies, and the std backtrace machinery. Matching is by
/// substring only, and misses frames whose symbols were stripped or inlined
/// away.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct AssertOptions {
	pub capture: Capture,
	pub internal: Cow<'static, [Cow<'static, str>]>,
}

/// The stack trace capture mode.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Capture {
	/// Always capture.
	#[default]
	Always,
	/// Capture if enabled by the `RUST_BACKTRACE` or `RUST_LIB_BACKTRACE`
	/// environment variables.
	Env,
	/// Never capture, leaving the trace empty.
	Never,
}

impl Capture {
	/// Returns `true` if the mode is [`Always`](Self::Always).
	pub fn is_always(&self) -> bool {
		matches!(self, Self::Always)
	}

	/// Returns `true` if the mode is [`Env`](Self::Env).
	pub fn is_env(&self) -> bool {
		matches!(self, Self::Env)
	}

	/// Returns `true` if the mode is [`Never`](Self::Never).
	pub fn is_never(&self) -> bool {
		matches!(self, Self::Never)
	}
}

impl Default for AssertOptions {
	fn default() -> Self { Self::new() }
}

impl AssertOptions {
	/// Creates a new set of options.
	pub const fn new() -> Self {
		Self {
			capture: Capture::Always,
			internal: Cow::Borrowed(DEFAULT_INTERNAL),
		}
	}

	/// Presets the options to skip trace capture entirely. Failures carry only
	/// their message.
	#[inline]
	pub const fn lean() -> Self {
		Self {
			capture: Capture::Never,
			internal: Cow::Borrowed(DEFAULT_INTERNAL),
		}
	}

	/// Returns the capture mode.
	#[inline]
	pub const fn capture(&self) -> Capture { self.capture }

	/// Returns the internal frame patterns.
	#[inline]
	pub fn internal(&self) -> &[Cow<'static, str>] { &self.internal }

	/// Sets the capture mode.
	#[inline]
	pub fn set_capture(&mut self, value: Capture) {
		self.capture = value;
	}

	/// Adds an internal frame pattern.
	#[inline]
	pub fn add_internal(&mut self, pattern: impl Into<Cow<'static, str>>) {
		self.internal.to_mut().push(pattern.into());
	}

	/// Replaces the internal frame patterns.
	pub fn set_internal<P: Into<Cow<'static, str>>>(&mut self, patterns: impl IntoIterator<Item = P>) {
		self.internal = Cow::Owned(patterns.into_iter().map(Into::into).collect());
	}

	/// Sets the capture mode, returning the options.
	#[inline]
	pub fn with_capture(mut self, value: Capture) -> Self {
		self.set_capture(value);
		self
	}

	/// Adds an internal frame pattern, returning the options. Useful for hiding
	/// frames of wrapper functions built on top of the checks.
	#[inline]
	pub fn with_internal(mut self, pattern: impl Into<Cow<'static, str>>) -> Self {
		self.add_internal(pattern);
		self
	}

	/// Replaces the internal frame patterns, returning the options.
	pub fn with_internal_only<P: Into<Cow<'static, str>>>(mut self, patterns: impl IntoIterator<Item = P>) -> Self {
		self.set_internal(patterns);
		self
	}
}

#[cfg(test)]
mod test {
	use super::{AssertOptions, Capture};
	use crate::trace::DEFAULT_INTERNAL;

	const LEAN: AssertOptions = AssertOptions::lean();

	#[test]
	fn defaults() {
		let options = AssertOptions::default();
		assert!(options.capture().is_always());
		assert_eq!(options.internal().len(), DEFAULT_INTERNAL.len());
		assert!(options.internal().iter().any(|pattern| pattern == "assert_is::"));
	}

	#[test]
	fn lean_keeps_patterns() {
		assert!(LEAN.capture().is_never());
		assert_eq!(LEAN.internal(), AssertOptions::new().internal());
		assert_eq!(LEAN.internal(), DEFAULT_INTERNAL);
	}

	#[test]
	fn builders() {
		let options = AssertOptions::new()
			.with_capture(Capture::Env)
			.with_internal(String::from("my_guards"));
		assert!(options.capture().is_env());
		assert_eq!(options.internal().last().unwrap(), "my_guards");
		assert_eq!(options.internal().len(), DEFAULT_INTERNAL.len() + 1);
		assert_eq!(AssertOptions::new().internal(), DEFAULT_INTERNAL);

		let options = options.with_internal_only(["only"]);
		assert_eq!(options.internal(), ["only"]);
	}
}
