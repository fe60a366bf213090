// SPDX-License-Identifier: Apache-2.0

use serde_json::Value as Json;
use crate::{Subject, TypeOf, Value};

impl Subject for Json {
	fn type_of(&self) -> TypeOf {
		match self {
			Json::Null      => TypeOf::Object,
			Json::Bool(_)   => TypeOf::Boolean,
			Json::Number(_) => TypeOf::Number,
			Json::String(_) => TypeOf::String,
			Json::Array(_) |
			Json::Object(_) => TypeOf::Object,
		}
	}

	fn is_truthy(&self) -> bool {
		match self {
			Json::Null => false,
			Json::Bool(value) => *value,
			Json::Number(value) => value.as_f64().is_some_and(|n| n.is_truthy()),
			Json::String(value) => !value.is_empty(),
			Json::Array(_) | Json::Object(_) => true,
		}
	}

	fn is_nullish(&self) -> bool { self.is_null() }
}

impl From<Json> for Value {
	fn from(value: Json) -> Self {
		match value {
			Json::Null => Self::Null,
			Json::Bool(value) => Self::Bool(value),
			Json::Number(value) => value.as_f64().map_or(Self::Undefined, Self::Number),
			Json::String(value) => Self::String(value),
			Json::Array(values) => Self::Array(values.into_iter().map(Into::into).collect()),
			Json::Object(members) => members.into_iter().collect(),
		}
	}
}
