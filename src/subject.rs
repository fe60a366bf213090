// SPDX-License-Identifier: Apache-2.0

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::ops::Deref;
use std::pin::Pin;
use std::rc::Rc;
use std::sync::Arc;
use amplify_derive::Display;

/// The runtime type of a checked value, named the way failure messages report
/// it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display)]
pub enum TypeOf {
	#[display("undefined")]
	Undefined,
	/// Objects, arrays, collections, and null.
	#[display("object")]
	Object,
	#[display("boolean")]
	Boolean,
	#[display("number")]
	Number,
	#[display("bigint")]
	BigInt,
	#[display("string")]
	String,
	#[display("symbol")]
	Symbol,
	#[display("function")]
	Function,
}

impl TypeOf {
	/// Returns `true` if values of this type are objects or functions. Null also
	/// reports [`Object`](Self::Object), so [`Subject::is_object_like`] checks
	/// for it separately.
	pub fn is_object_like(&self) -> bool {
		matches!(self, Self::Object | Self::Function)
	}

	/// Returns `true` if the type is a primitive.
	pub fn is_primitive(&self) -> bool {
		!self.is_object_like()
	}
}

/// A value that can be checked. Implementors report their runtime type and the
/// handful of capabilities the checks look at; everything else is derived from
/// [`type_of`](Self::type_of).
///
/// # Truthiness
///
/// [`is_truthy`](Self::is_truthy) follows loose truthiness, not presence: zero,
/// `NaN`, empty strings, `false`, `None`, null, and undefined are all falsy.
/// [`is_nullish`](Self::is_nullish) is the strict variant, `true` only for
/// absent values.
pub trait Subject {
	/// Returns the runtime type of the value.
	fn type_of(&self) -> TypeOf;

	/// Returns `false` if the value is falsy.
	fn is_truthy(&self) -> bool { !self.is_nullish() }

	/// Returns `true` if the value is absent: undefined or null.
	fn is_nullish(&self) -> bool {
		matches!(self.type_of(), TypeOf::Undefined)
	}

	/// Returns `true` if the value is an object, array, collection, or function.
	fn is_object_like(&self) -> bool {
		self.type_of().is_object_like() && !self.is_nullish()
	}

	/// Returns `true` if the value is textual.
	fn is_string(&self) -> bool {
		matches!(self.type_of(), TypeOf::String)
	}

	/// Returns `true` if the value exposes a callable `then`, making it
	/// promise-like.
	fn is_thenable(&self) -> bool { false }
}

macro_rules! delegate {
	($ty:ty) => {
		fn type_of(&self) -> TypeOf { <$ty>::type_of(self) }
		fn is_truthy(&self) -> bool { <$ty>::is_truthy(self) }
		fn is_nullish(&self) -> bool { <$ty>::is_nullish(self) }
		fn is_object_like(&self) -> bool { <$ty>::is_object_like(self) }
		fn is_string(&self) -> bool { <$ty>::is_string(self) }
		fn is_thenable(&self) -> bool { <$ty>::is_thenable(self) }
	};
}

impl<T: Subject + ?Sized> Subject for &T {
	delegate!(T);
}

impl<T: Subject + ?Sized> Subject for &mut T {
	delegate!(T);
}

impl<T: Subject + ?Sized> Subject for Box<T> {
	delegate!(T);
}

impl<T: Subject + ?Sized> Subject for Rc<T> {
	delegate!(T);
}

impl<T: Subject + ?Sized> Subject for Arc<T> {
	delegate!(T);
}

impl<P> Subject for Pin<P> where P: Deref, P::Target: Subject {
	delegate!(P::Target);
}

impl Subject for () {
	fn type_of(&self) -> TypeOf { TypeOf::Undefined }
}

impl<T: Subject> Subject for Option<T> {
	fn type_of(&self) -> TypeOf {
		self.as_ref().map_or(TypeOf::Undefined, T::type_of)
	}

	fn is_truthy(&self) -> bool {
		self.as_ref().is_some_and(T::is_truthy)
	}

	fn is_nullish(&self) -> bool {
		self.as_ref().map_or(true, T::is_nullish)
	}

	fn is_object_like(&self) -> bool {
		self.as_ref().is_some_and(T::is_object_like)
	}

	fn is_string(&self) -> bool {
		self.as_ref().is_some_and(T::is_string)
	}

	fn is_thenable(&self) -> bool {
		self.as_ref().is_some_and(T::is_thenable)
	}
}

impl Subject for bool {
	fn type_of(&self) -> TypeOf { TypeOf::Boolean }

	fn is_truthy(&self) -> bool { *self }
}

macro_rules! integer {
	($kind:ident $($ty:ty),+) => {
		$(
		impl Subject for $ty {
			fn type_of(&self) -> TypeOf { TypeOf::$kind }

			fn is_truthy(&self) -> bool { *self != 0 }
		}
		)+
	};
}

integer!(Number i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
integer!(BigInt i128, u128);

macro_rules! float {
	($($ty:ty),+) => {
		$(
		impl Subject for $ty {
			fn type_of(&self) -> TypeOf { TypeOf::Number }

			// NaN compares unequal to zero, so it needs its own check.
			fn is_truthy(&self) -> bool { *self != 0.0 && !self.is_nan() }
		}
		)+
	};
}

float!(f32, f64);

impl Subject for str {
	fn type_of(&self) -> TypeOf { TypeOf::String }

	fn is_truthy(&self) -> bool { !self.is_empty() }
}

impl Subject for String {
	delegate!(str);
}

impl Subject for Cow<'_, str> {
	delegate!(str);
}

impl Subject for char {
	fn type_of(&self) -> TypeOf { TypeOf::String }
}

macro_rules! collection {
	($($ty:ty where $($param:ident),+);+) => {
		$(
		impl<$($param),+> Subject for $ty {
			fn type_of(&self) -> TypeOf { TypeOf::Object }
		}
		)+
	};
}

collection! {
	[T] where T;
	Vec<T> where T;
	VecDeque<T> where T;
	BTreeSet<T> where T;
	HashSet<T, S> where T, S;
	BTreeMap<K, V> where K, V;
	HashMap<K, V, S> where K, V, S
}

impl<T, const N: usize> Subject for [T; N] {
	fn type_of(&self) -> TypeOf { TypeOf::Object }
}
