// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ddb_type::{Category, DataType, TypeError};

use crate::scheme::PartitionType;

pub type Result<T> = std::result::Result<T, PartitionError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PartitionError {
	#[error("unsupported partition type {0}")]
	UnsupportedPartitionType(PartitionType),

	#[error("data category incompatible")]
	DataCategoryMismatch {
		expected: Category,
		actual: Category,
	},

	#[error("can't convert type from {from} to {to}")]
	TypeCast {
		from: DataType,
		to: DataType,
		#[source]
		source: TypeError,
	},

	#[error("{0}")]
	InvalidSchemaShape(String),

	#[error("the partitioning column cannot be of long type")]
	UnsupportedColumnType(DataType),

	#[error("can't find specified partition column name {0}")]
	PartitionColumnNotFound(String),

	#[error("the input table doesn't match the schema of the target table")]
	ColumnCountMismatch {
		expected: usize,
		actual: usize,
	},

	#[error("column {index}, expect category {expected}, got category {actual}")]
	ColumnCategoryMismatch {
		index: usize,
		expected: Category,
		actual: Category,
	},

	#[error("column {index}, temporal column must have exactly the same type, expect {expected}, got {actual}")]
	TemporalColumnMismatch {
		index: usize,
		expected: DataType,
		actual: DataType,
	},

	#[error("worker count must be at least 1, got {0}")]
	InvalidWorkerCount(usize),

	#[error(transparent)]
	Type(#[from] TypeError),
}

impl PartitionError {
	pub(crate) fn shape(message: impl Into<String>) -> Self {
		PartitionError::InvalidSchemaShape(message.into())
	}
}
