// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ddb_type::{DataForm, DataType, Vector};
use tracing::instrument;

use crate::{
	PartitionConfig, PartitionError, Result,
	resolve::{collect_keys, conform, effective_type},
};

/// Bucket space shared with the server for value partitions.
pub const VALUE_BUCKETS: u32 = 1 << 20;

/// Every distinct value is its own partition, keyed by its hash in a fixed
/// bucket space.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueDomain {
	data_type: DataType,
	config: PartitionConfig,
}

impl ValueDomain {
	pub fn new(data_type: DataType) -> Self {
		Self {
			data_type,
			config: PartitionConfig::default(),
		}
	}

	/// The schema entry of a value level is the vector of partition values; its
	/// type declares the domain.
	pub fn from_schema(schema: &DataForm) -> Result<Self> {
		let values = schema
			.as_vector()
			.ok_or_else(|| PartitionError::shape("the schema of a value domain must be a vector"))?;
		Ok(Self::new(values.data_type()))
	}

	pub fn with_config(mut self, config: PartitionConfig) -> Self {
		self.config = config;
		self
	}

	pub fn data_type(&self) -> DataType {
		self.data_type
	}

	#[instrument(name = "partition::value::keys", level = "trace", skip(self, column), fields(rows = column.len()))]
	pub fn partition_keys(&self, column: &Vector) -> Result<Vec<i32>> {
		let column = conform(column, self.data_type, effective_type(column))?;
		if self.data_type == DataType::Long {
			return Err(PartitionError::UnsupportedColumnType(self.data_type));
		}

		Ok(collect_keys(column.len(), &self.config, |i| column.hash_bucket(i, VALUE_BUCKETS)))
	}
}
