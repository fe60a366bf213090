// SPDX-License-Identifier: Apache-2.0

use std::backtrace::{Backtrace, BacktraceStatus};
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use itertools::Itertools;
use crate::options::Capture;

/// Frame patterns belonging to this crate, its dependencies, and the backtrace
/// machinery itself. Patterns are path-qualified so caller code merely named
/// after one of these crates is kept. `assert-is-` matches the versioned source
/// directory of registry builds, not a checkout named `assert-is`.
pub const DEFAULT_INTERNAL: &[Cow<'static, str>] = &[
	Cow::Borrowed("assert_is::"),
	Cow::Borrowed("assert-is-"),
	Cow::Borrowed("itertools::"),
	Cow::Borrowed("futures_util::"),
	Cow::Borrowed("futures_core::"),
	Cow::Borrowed("std::backtrace"),
	Cow::Borrowed("backtrace_rs"),
];

/// A captured call stack, with internal frames removed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Trace {
	frames: Vec<Frame>,
}

/// A single stack frame: the symbol line followed by zero or more source
/// location lines.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
	lines: Vec<String>,
}

impl Trace {
	/// Captures the current call stack according to the capture mode. The trace
	/// is empty if capture is disabled or unsupported.
	pub fn capture(mode: Capture) -> Self {
		let backtrace = match mode {
			Capture::Always => Backtrace::force_capture(),
			Capture::Env    => Backtrace::capture(),
			Capture::Never  => return Self::default(),
		};

		if let BacktraceStatus::Captured = backtrace.status() {
			Self::parse(&backtrace.to_string())
		} else {
			Self::default()
		}
	}

	/// Parses a rendered backtrace into frames. A frame starts at each indexed
	/// line (`12: symbol`); following lines are attached to it. Lines before the
	/// first indexed line form a frame of their own.
	pub fn parse(text: &str) -> Self {
		let frames = text.lines()
			.filter(|line| !line.trim().is_empty())
			.peekable()
			.batching(|lines| {
				let mut frame = Frame::new(lines.next()?);
				while let Some(line) = lines.next_if(|line| !is_frame_start(line)) {
					frame.lines.push(line.to_owned());
				}
				Some(frame)
			})
			.collect();
		Self { frames }
	}

	/// Removes every frame with a line containing any of `patterns`.
	pub fn filter<S: AsRef<str>>(mut self, patterns: &[S]) -> Self {
		self.frames.retain(|frame| !frame.matches_any(patterns));
		self
	}

	/// Returns the frames.
	pub fn frames(&self) -> &[Frame] { &self.frames }

	/// Returns an iterator over all lines of all frames, in order.
	pub fn lines(&self) -> impl Iterator<Item = &str> {
		self.frames.iter().flat_map(Frame::lines)
	}

	/// Returns the number of frames.
	pub fn len(&self) -> usize { self.frames.len() }

	/// Returns `true` if the trace has no frames.
	pub fn is_empty(&self) -> bool { self.frames.is_empty() }
}

impl Frame {
	fn new(line: &str) -> Self {
		Self { lines: vec![line.to_owned()] }
	}

	/// Returns the symbol line, with the frame index stripped.
	pub fn symbol(&self) -> &str {
		let line = self.lines[0].trim_start();
		match line.split_once(':') {
			Some((index, symbol)) if is_index(index) => symbol.trim(),
			_ => line
		}
	}

	/// Returns the frame's lines.
	pub fn lines(&self) -> impl Iterator<Item = &str> {
		self.lines.iter().map(String::as_str)
	}

	/// Returns `true` if any line contains `pattern`.
	pub fn contains(&self, pattern: &str) -> bool {
		self.lines.iter().any(|line| line.contains(pattern))
	}

	fn matches_any<S: AsRef<str>>(&self, patterns: &[S]) -> bool {
		patterns.iter().any(|pattern| self.contains(pattern.as_ref()))
	}
}

impl Display for Trace {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.lines().join("\n"))
	}
}

impl Display for Frame {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.lines.iter().join("\n"))
	}
}

fn is_index(str: &str) -> bool {
	!str.is_empty() && str.bytes().all(|b| b.is_ascii_digit())
}

fn is_frame_start(line: &str) -> bool {
	line.trim_start()
		.split_once(':')
		.is_some_and(|(index, _)| is_index(index))
}
