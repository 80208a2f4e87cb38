// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use ddb_type::{Category, DataForm, DataType, Vector};
use tracing::instrument;

use crate::{
	PartitionConfig, PartitionError, Result,
	resolve::{collect_keys, conform, effective_type},
};

/// Rows land in `hash(value) % buckets`.
#[derive(Debug, Clone, PartialEq)]
pub struct HashDomain {
	buckets: u32,
	data_type: DataType,
	config: PartitionConfig,
}

impl HashDomain {
	pub fn new(buckets: u32, data_type: DataType) -> Result<Self> {
		if buckets == 0 {
			return Err(PartitionError::shape("the bucket count of a hash domain must be positive"));
		}

		Ok(Self {
			buckets,
			data_type,
			config: PartitionConfig::default(),
		})
	}

	/// The schema entry of a hash level is an integral scalar holding the
	/// bucket count.
	pub fn from_schema(data_type: DataType, schema: &DataForm) -> Result<Self> {
		let scalar = schema
			.as_scalar()
			.filter(|scalar| scalar.data_type().category() == Category::Integral)
			.ok_or_else(|| PartitionError::shape("the schema of a hash domain must be an integral scalar"))?;

		let buckets = scalar
			.value()
			.as_i64()
			.filter(|_| !scalar.is_null())
			.and_then(|buckets| u32::try_from(buckets).ok())
			.ok_or_else(|| PartitionError::shape("the bucket count of a hash domain must be positive"))?;

		Self::new(buckets, data_type)
	}

	pub fn with_config(mut self, config: PartitionConfig) -> Self {
		self.config = config;
		self
	}

	pub fn buckets(&self) -> u32 {
		self.buckets
	}

	pub fn data_type(&self) -> DataType {
		self.data_type
	}

	#[instrument(name = "partition::hash::keys", level = "trace", skip(self, column), fields(rows = column.len()))]
	pub fn partition_keys(&self, column: &Vector) -> Result<Vec<i32>> {
		let column = conform(column, self.data_type, effective_type(column))?;
		let buckets = self.buckets;
		Ok(collect_keys(column.len(), &self.config, |i| column.hash_bucket(i, buckets)))
	}
}
