// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ddb_type::{Category, DataForm, DataType, Vector};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::{
	PartitionConfig, PartitionError, PartitionType, Result,
	domain::{Domain, create_domain_with_config},
};

/// A schema entry holding either one value for a single-level partitioned
/// table or one value per level for a composite one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Levels<T> {
	Single(T),
	Composite(Vec<T>),
}

impl<T> Levels<T> {
	fn get(&self, level: Option<usize>) -> Option<&T> {
		match (self, level) {
			(Levels::Single(value), None) => Some(value),
			(Levels::Composite(values), Some(level)) => values.get(level),
			_ => None,
		}
	}
}

/// The partition section of a table's schema as reported by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartitionSchema {
	pub partition_column_name: Levels<String>,
	pub partition_column_index: Levels<i32>,
	pub partition_type: Levels<i32>,
	pub partition_column_type: Levels<i32>,
	pub partition_schema: Levels<DataForm>,
}

/// One partitioning level of a table.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionLevel {
	pub column_index: usize,
	pub partition_type: PartitionType,
	pub column_type: DataType,
	pub schema: DataForm,
}

impl PartitionSchema {
	/// Selects the level partitioned by `column`. A single-level table must
	/// name the column exactly; composite tables match case-insensitively.
	#[instrument(name = "partition::schema::level", level = "debug", skip(self))]
	pub fn level(&self, column: &str) -> Result<PartitionLevel> {
		let level = match &self.partition_column_name {
			Levels::Single(name) if name == column => None,
			Levels::Composite(names) => {
				let level = names.iter().position(|name| name.eq_ignore_ascii_case(column));
				Some(level.ok_or_else(|| PartitionError::PartitionColumnNotFound(column.to_string()))?)
			}
			Levels::Single(_) => return Err(PartitionError::PartitionColumnNotFound(column.to_string())),
		};

		let missing = |field: &str| PartitionError::shape(format!("the partition schema has no {field} for {column}"));

		let column_index = self.partition_column_index.get(level).ok_or_else(|| missing("partitionColumnIndex"))?;
		let column_index = usize::try_from(*column_index).map_err(|_| missing("partitionColumnIndex"))?;

		let partition_type = self.partition_type.get(level).ok_or_else(|| missing("partitionType"))?;

		let column_type = self.partition_column_type.get(level).ok_or_else(|| missing("partitionColumnType"))?;
		let column_type = u8::try_from(*column_type).map_err(|_| missing("partitionColumnType"))?;

		let schema = self.partition_schema.get(level).ok_or_else(|| missing("partitionSchema"))?;

		let result = PartitionLevel {
			column_index,
			partition_type: PartitionType::from_code(*partition_type),
			column_type: DataType::from_code(column_type)?,
			schema: schema.clone(),
		};
		debug!(column_index, scheme = %result.partition_type, column_type = %result.column_type, "resolved partition level");
		Ok(result)
	}
}

impl PartitionLevel {
	pub fn domain(&self, config: PartitionConfig) -> Result<Domain> {
		create_domain_with_config(self.partition_type, self.column_type, &self.schema, config)
	}
}

/// Validates an appended batch against the target table's column types.
/// Categories must agree; temporal columns must match exactly.
pub fn check_columns(expected: &[DataType], batch: &[Vector]) -> Result<()> {
	if expected.len() != batch.len() {
		return Err(PartitionError::ColumnCountMismatch {
			expected: expected.len(),
			actual: batch.len(),
		});
	}

	for (index, (expected, column)) in expected.iter().zip(batch).enumerate() {
		let actual = column.data_type();
		if actual.category() != expected.category() {
			return Err(PartitionError::ColumnCategoryMismatch {
				index,
				expected: expected.category(),
				actual: actual.category(),
			});
		}
		if actual.category() == Category::Temporal && actual != *expected {
			return Err(PartitionError::TemporalColumnMismatch {
				index,
				expected: *expected,
				actual,
			});
		}
	}

	Ok(())
}
