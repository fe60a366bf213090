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

use std::result;
use amplify_derive::Display;
use thiserror::Error;
use crate::{Trace, TypeOf};

pub type Result<T = ()> = result::Result<T, Error>;

/// A failed check. Displays as its message, for example `Missing token for
/// login` or `Expected string, not number`.
#[derive(Clone, Debug, Error)]
#[error("{message}")]
pub struct Error {
	kind: ErrorKind,
	reference: Option<String>,
	message: String,
	trace: Trace,
}

#[derive(Clone, Debug, Eq, PartialEq, Display)]
pub enum ErrorKind {
	/// A required value was falsy or absent. Holds the value's descriptor.
	#[display("Missing {0}")]
	MissingValue(String),
	/// A value had the wrong shape.
	#[display("Expected {0}, not {1}")]
	TypeMismatch(Expected, TypeOf),
}

/// The shape a check expected.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Display)]
pub enum Expected {
	#[display("object")]
	Object,
	#[display("string")]
	String,
	#[display("promise")]
	Promise,
}

impl Error {
	/// Creates a new error, composing its message from the kind and reference.
	pub fn new(kind: ErrorKind, reference: Option<&str>, trace: Trace) -> Self {
		let message = if let Some(reference) = reference {
			format!("{kind} for {reference}")
		} else {
			kind.to_string()
		};

		Self {
			kind,
			reference: reference.map(Into::into),
			message,
			trace,
		}
	}

	/// Creates a "missing value" error.
	pub fn missing(descriptor: &str, reference: Option<&str>, trace: Trace) -> Self {
		Self::new(ErrorKind::MissingValue(descriptor.into()), reference, trace)
	}

	/// Creates a "type mismatch" error.
	pub fn mismatch(expected: Expected, found: TypeOf, reference: Option<&str>, trace: Trace) -> Self {
		Self::new(ErrorKind::TypeMismatch(expected, found), reference, trace)
	}

	/// Returns the error kind.
	pub fn kind(&self) -> &ErrorKind { &self.kind }

	/// Returns the full message, including the reference suffix.
	pub fn message(&self) -> &str { &self.message }

	/// Returns the reference label, if any.
	pub fn reference(&self) -> Option<&str> { self.reference.as_deref() }

	/// Returns the call stack captured when the check failed.
	pub fn trace(&self) -> &Trace { &self.trace }

	/// Returns `true` if the error is a [`MissingValue`](ErrorKind::MissingValue).
	pub fn is_missing(&self) -> bool { self.kind.is_missing() }

	/// Returns `true` if the error is a [`TypeMismatch`](ErrorKind::TypeMismatch).
	pub fn is_type_mismatch(&self) -> bool { self.kind.is_type_mismatch() }
}

impl ErrorKind {
	pub fn is_missing(&self) -> bool {
		matches!(self, Self::MissingValue(_))
	}

	pub fn is_type_mismatch(&self) -> bool {
		matches!(self, Self::TypeMismatch(..))
	}
}
