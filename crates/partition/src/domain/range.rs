// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ddb_type::{DataForm, DataType, Vector};
use tracing::instrument;

use crate::{
	PartitionConfig, PartitionError, Result,
	resolve::{collect_keys, conform},
};

/// Partition `k` holds values in `[boundaries[k], boundaries[k + 1])`.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeDomain {
	boundaries: Vector,
	config: PartitionConfig,
}

impl RangeDomain {
	/// Requires at least two boundaries in ascending order.
	pub fn new(boundaries: Vector) -> Result<Self> {
		if boundaries.len() < 2 {
			return Err(PartitionError::shape("a range domain needs at least two boundaries"));
		}

		if !boundaries.is_ascending() {
			return Err(PartitionError::shape("the boundaries of a range domain must be ascending"));
		}

		Ok(Self {
			boundaries,
			config: PartitionConfig::default(),
		})
	}

	pub fn from_schema(schema: &DataForm) -> Result<Self> {
		let boundaries = schema
			.as_vector()
			.ok_or_else(|| PartitionError::shape("the schema of a range domain must be a vector"))?;
		Self::new(boundaries.clone())
	}

	pub fn with_config(mut self, config: PartitionConfig) -> Self {
		self.config = config;
		self
	}

	pub fn data_type(&self) -> DataType {
		self.boundaries.data_type()
	}

	pub fn partitions(&self) -> usize {
		self.boundaries.len() - 1
	}

	/// Casts compare the domain type against the column's declared type, so a
	/// tuple column is always cast into a temporal domain.
	#[instrument(name = "partition::range::keys", level = "trace", skip(self, column), fields(rows = column.len()))]
	pub fn partition_keys(&self, column: &Vector) -> Result<Vec<i32>> {
		let data_type = self.data_type();
		let column = conform(column, data_type, column.data_type())?;
		let partitions = self.partitions();

		Ok(collect_keys(column.len(), &self.config, |i| {
			column
				.get(i)
				.and_then(|value| self.boundaries.as_of(&value))
				.filter(|ind| *ind < partitions)
				.map_or(-1, |ind| ind as i32)
		}))
	}
}
