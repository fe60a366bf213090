// SPDX-License-Identifier: Apache-2.0

//! Promise-like futures. A future has a continuation, its equivalent of a
//! callable `then`, so every future type here is object-like and thenable.
//! Boxed and pinned futures are covered through the pointer impls on the trait
//! objects.

use std::future::Future;
use futures::future::Shared;
use crate::{Subject, TypeOf};

macro_rules! thenable {
	($($ty:ty where [$($gen:tt)*]),+) => {
		$(
		impl<$($gen)*> Subject for $ty {
			fn type_of(&self) -> TypeOf { TypeOf::Object }

			fn is_thenable(&self) -> bool { true }
		}
		)+
	};
}

thenable! {
	dyn Future<Output = T> + 'a where ['a, T],
	dyn Future<Output = T> + Send + 'a where ['a, T],
	futures::future::Ready<T> where [T],
	std::future::Ready<T> where [T]
}

impl<F: Future> Subject for Shared<F> where F::Output: Clone {
	fn type_of(&self) -> TypeOf { TypeOf::Object }

	fn is_thenable(&self) -> bool { true }
}
