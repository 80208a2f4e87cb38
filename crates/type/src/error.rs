// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{DataType, Repr};

pub type Result<T> = std::result::Result<T, TypeError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TypeError {
	#[error("unknown data type code {0}")]
	UnknownTypeCode(u8),

	#[error("unknown data type name {0}")]
	UnknownTypeName(String),

	#[error("data type {0} has no container representation")]
	UnsupportedType(DataType),

	#[error("cannot store {actual:?} data in a vector of type {data_type}, expected {expected:?}")]
	ReprMismatch {
		data_type: DataType,
		expected: Repr,
		actual: Repr,
	},

	#[error("can't convert type from {from} to {to}")]
	Cast {
		from: DataType,
		to: DataType,
	},
}
