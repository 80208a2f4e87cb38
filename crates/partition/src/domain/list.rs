// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::collections::HashMap;

use ddb_type::{DataForm, DataType, Vector};
use tracing::instrument;

use crate::{
	PartitionConfig, PartitionError, Result,
	resolve::{collect_keys, conform, effective_type},
};

/// Each partition owns an explicit group of values. Membership is keyed by
/// canonical string, so equal values match regardless of storage width.
#[derive(Debug, Clone, PartialEq)]
pub struct ListDomain {
	data_type: DataType,
	membership: HashMap<String, i32>,
	config: PartitionConfig,
}

impl ListDomain {
	/// `groups` is a tuple whose element `i` is the value, or vector of
	/// values, belonging to partition `i`.
	pub fn new(groups: &Vector, data_type: DataType) -> Result<Self> {
		if groups.data_type() != DataType::Any {
			return Err(PartitionError::shape("the input list must be a tuple"));
		}

		let mut membership = HashMap::new();
		for partition in 0..groups.len() {
			let key = i32::try_from(partition)
				.map_err(|_| PartitionError::shape("a list domain has too many partitions"))?;
			match groups.form(partition) {
				Some(DataForm::Scalar(scalar)) => {
					membership.insert(scalar.to_string(), key);
				}
				Some(DataForm::Vector(values)) => {
					for j in 0..values.len() {
						membership.insert(values.element_string(j), key);
					}
				}
				None => {}
			}
		}

		Ok(Self {
			data_type,
			membership,
			config: PartitionConfig::default(),
		})
	}

	/// The declared type of a tuple schema is the type of its first group.
	pub fn from_schema(schema: &DataForm) -> Result<Self> {
		let groups = schema
			.as_vector()
			.ok_or_else(|| PartitionError::shape("the schema of a list domain must be a vector"))?;
		Self::new(groups, effective_type(groups))
	}

	pub fn with_config(mut self, config: PartitionConfig) -> Self {
		self.config = config;
		self
	}

	pub fn data_type(&self) -> DataType {
		self.data_type
	}

	/// Partition owning `value`, if any.
	pub fn partition_of(&self, value: &str) -> Option<i32> {
		self.membership.get(value).copied()
	}

	#[instrument(name = "partition::list::keys", level = "trace", skip(self, column), fields(rows = column.len()))]
	pub fn partition_keys(&self, column: &Vector) -> Result<Vec<i32>> {
		let column = conform(column, self.data_type, effective_type(column))?;
		Ok(collect_keys(column.len(), &self.config, |i| {
			self.partition_of(&column.element_string(i)).unwrap_or(-1)
		}))
	}
}

#[cfg(test)]
mod tests {
	use ddb_type::Scalar;

	use super::*;

	#[test]
	fn test_rejects_non_tuple() {
		let err = ListDomain::new(&Vector::int(vec![1, 2]), DataType::Int).unwrap_err();
		assert_eq!(err.to_string(), "the input list must be a tuple");

		let err = ListDomain::from_schema(&Vector::int(vec![1, 2]).into()).unwrap_err();
		assert_eq!(err.to_string(), "the input list must be a tuple");
	}

	#[test]
	fn test_groups() {
		let groups = Vector::tuple(vec![Vector::string(["a", "b"]).into(), Scalar::string("c").into()]);
		let domain = ListDomain::from_schema(&groups.into()).unwrap();
		assert_eq!(domain.data_type(), DataType::String);

		let keys = domain.partition_keys(&Vector::symbol(["a", "c", "b", "d"])).unwrap();
		assert_eq!(keys, vec![0, 1, 0, -1]);
	}

	#[test]
	fn test_temporal_membership() {
		let groups = Vector::tuple(vec![Scalar::date(18993).into()]);
		let domain = ListDomain::from_schema(&groups.into()).unwrap();
		let keys = domain.partition_keys(&Vector::datetime(vec![1_640_998_861])).unwrap();
		assert_eq!(keys, vec![0]);
	}

	#[test]
	fn test_integral_widths_share_keys() {
		let groups = Vector::tuple(vec![Scalar::int(7).into(), Scalar::int(8).into()]);
		let domain = ListDomain::from_schema(&groups.into()).unwrap();
		assert_eq!(domain.partition_keys(&Vector::long(vec![8, 7, 9])).unwrap(), vec![1, 0, -1]);
	}

	#[test]
	fn test_category_mismatch() {
		let groups = Vector::tuple(vec![Scalar::int(7).into()]);
		let domain = ListDomain::from_schema(&groups.into()).unwrap();
		let err = domain.partition_keys(&Vector::string(["7"])).unwrap_err();
		assert_eq!(err.to_string(), "data category incompatible");
	}
}
