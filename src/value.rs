// SPDX-License-Identifier: Apache-2.0

#[cfg(feature = "json")]
mod json;

use std::collections::BTreeMap;
use std::fmt::{Debug, Formatter};
use std::{fmt, ptr};
use std::sync::Arc;
use crate::{Subject, TypeOf};

/// The members of an object value, keyed by name.
pub type Object = BTreeMap<String, Value>;

/// A dynamically-typed value, for checking data whose shape is only known at
/// runtime.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
	#[default]
	Undefined,
	Null,
	Bool(bool),
	Number(f64),
	BigInt(i128),
	String(String),
	Symbol(Symbol),
	Array(Vec<Value>),
	Object(Object),
	Function(Function),
}

/// A unique symbol. Two symbols are equal only if one is a clone of the other,
/// even when their descriptions match.
#[derive(Clone)]
pub struct Symbol {
	description: Arc<str>,
}

impl Symbol {
	/// Creates a new symbol, distinct from every other.
	pub fn new(description: impl Into<Arc<str>>) -> Self {
		Self { description: description.into() }
	}

	/// Returns the symbol's description.
	pub fn description(&self) -> &str { &self.description }
}

impl Debug for Symbol {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "Symbol({})", self.description)
	}
}

impl PartialEq for Symbol {
	fn eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.description, &other.description)
	}
}

/// A callable value. Two functions are equal only if they share the same
/// underlying closure.
#[derive(Clone)]
pub struct Function {
	name: Arc<str>,
	call: Arc<dyn Fn(&[Value]) -> Value + Send + Sync>,
}

impl Function {
	/// Creates a named function from a closure.
	pub fn new(
		name: impl Into<Arc<str>>,
		call: impl Fn(&[Value]) -> Value + Send + Sync + 'static
	) -> Self {
		Self { name: name.into(), call: Arc::new(call) }
	}

	/// Creates a function that ignores its arguments and returns undefined.
	pub fn noop(name: impl Into<Arc<str>>) -> Self {
		Self::new(name, |_| Value::Undefined)
	}

	/// Returns the function's name.
	pub fn name(&self) -> &str { &self.name }

	/// Calls the function.
	pub fn call(&self, args: &[Value]) -> Value {
		(self.call)(args)
	}
}

impl Debug for Function {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "[Function: {}]", self.name)
	}
}

impl PartialEq for Function {
	fn eq(&self, other: &Self) -> bool {
		ptr::addr_eq(Arc::as_ptr(&self.call), Arc::as_ptr(&other.call))
	}
}

impl Value {
	/// Creates an empty object.
	pub fn object() -> Self { Self::Object(Object::new()) }

	/// Creates an object with a `then` method, the minimal promise-like shape.
	pub fn thenable(then: Function) -> Self {
		Self::from_iter([("then", then)])
	}

	/// Creates a new unique symbol with a description.
	pub fn symbol(description: impl Into<Arc<str>>) -> Self {
		Self::Symbol(Symbol::new(description))
	}

	/// Returns the member named `key`, or `None` if the value is not an object
	/// or has no such member.
	pub fn get(&self, key: &str) -> Option<&Value> {
		if let Self::Object(members) = self {
			members.get(key)
		} else {
			None
		}
	}

	/// Sets a member on an object value, returning the value. Non-objects are
	/// returned unchanged.
	pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
		if let Self::Object(ref mut members) = self {
			members.insert(key.into(), value.into());
		}
		self
	}

	/// Returns `true` if the value is undefined.
	pub fn is_undefined(&self) -> bool { matches!(self, Self::Undefined) }

	/// Returns `true` if the value is null.
	pub fn is_null(&self) -> bool { matches!(self, Self::Null) }

	/// Returns `true` if the value is a function.
	pub fn is_function(&self) -> bool { matches!(self, Self::Function(_)) }

	/// Returns the value as a string slice if it is a string.
	pub fn as_str(&self) -> Option<&str> {
		if let Self::String(str) = self {
			Some(str)
		} else {
			None
		}
	}
}

impl Subject for Value {
	fn type_of(&self) -> TypeOf {
		match self {
			Self::Undefined        => TypeOf::Undefined,
			Self::Null             => TypeOf::Object,
			Self::Bool(_)          => TypeOf::Boolean,
			Self::Number(_)        => TypeOf::Number,
			Self::BigInt(_)        => TypeOf::BigInt,
			Self::String(_)        => TypeOf::String,
			Self::Symbol(_)        => TypeOf::Symbol,
			Self::Array(_) |
			Self::Object(_)        => TypeOf::Object,
			Self::Function(_)      => TypeOf::Function,
		}
	}

	fn is_truthy(&self) -> bool {
		match self {
			Self::Undefined | Self::Null => false,
			Self::Bool(value) => *value,
			Self::Number(value) => value.is_truthy(),
			Self::BigInt(value) => *value != 0,
			Self::String(value) => !value.is_empty(),
			Self::Symbol(_) |
			Self::Array(_) |
			Self::Object(_) |
			Self::Function(_) => true,
		}
	}

	fn is_nullish(&self) -> bool {
		matches!(self, Self::Undefined | Self::Null)
	}

	fn is_thenable(&self) -> bool {
		self.get("then").is_some_and(Value::is_function)
	}
}

impl From<bool> for Value {
	fn from(value: bool) -> Self { Self::Bool(value) }
}

macro_rules! from_number {
	($($ty:ty),+) => {
		$(
		impl From<$ty> for Value {
			fn from(value: $ty) -> Self { Self::Number(value.into()) }
		}
		)+
	};
}

from_number!(i8, i16, i32, u8, u16, u32, f32, f64);

impl From<i128> for Value {
	fn from(value: i128) -> Self { Self::BigInt(value) }
}

impl From<&str> for Value {
	fn from(value: &str) -> Self { Self::String(value.into()) }
}

impl From<String> for Value {
	fn from(value: String) -> Self { Self::String(value) }
}

impl From<Vec<Value>> for Value {
	fn from(value: Vec<Value>) -> Self { Self::Array(value) }
}

impl From<Object> for Value {
	fn from(value: Object) -> Self { Self::Object(value) }
}

impl From<Symbol> for Value {
	fn from(value: Symbol) -> Self { Self::Symbol(value) }
}

impl From<Function> for Value {
	fn from(value: Function) -> Self { Self::Function(value) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Value {
	fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
		Self::Object(
			iter.into_iter()
				.map(|(key, value)| (key.into(), value.into()))
				.collect()
		)
	}
}
