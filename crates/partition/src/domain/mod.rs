// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Partition domains. A domain is built once per table from the table's
//! partition scheme and maps every value of an appended column to the index
//! of the partition that owns it, or `-1` when no partition does.

use ddb_type::{DataForm, DataType, Vector};
use tracing::{debug, instrument};

use crate::{PartitionConfig, PartitionError, PartitionType, Result};

mod hash;
mod list;
mod range;
mod value;

pub use hash::HashDomain;
pub use list::ListDomain;
pub use range::RangeDomain;
pub use value::{VALUE_BUCKETS, ValueDomain};

#[derive(Debug, Clone, PartialEq)]
pub enum Domain {
	Hash(HashDomain),
	Value(ValueDomain),
	Range(RangeDomain),
	List(ListDomain),
}

impl Domain {
	/// One key per row of `column`. A failure rejects the whole column.
	pub fn partition_keys(&self, column: &Vector) -> Result<Vec<i32>> {
		let result = match self {
			Domain::Hash(domain) => domain.partition_keys(column),
			Domain::Value(domain) => domain.partition_keys(column),
			Domain::Range(domain) => domain.partition_keys(column),
			Domain::List(domain) => domain.partition_keys(column),
		};

		if let Err(err) = &result {
			debug!(scheme = %self.partition_type(), column = %column.data_type(), "{err}");
		}
		result
	}

	pub fn partition_type(&self) -> PartitionType {
		match self {
			Domain::Hash(_) => PartitionType::Hash,
			Domain::Value(_) => PartitionType::Value,
			Domain::Range(_) => PartitionType::Range,
			Domain::List(_) => PartitionType::List,
		}
	}

	/// The type the domain partitions on.
	pub fn data_type(&self) -> DataType {
		match self {
			Domain::Hash(domain) => domain.data_type(),
			Domain::Value(domain) => domain.data_type(),
			Domain::Range(domain) => domain.data_type(),
			Domain::List(domain) => domain.data_type(),
		}
	}
}

impl From<HashDomain> for Domain {
	fn from(domain: HashDomain) -> Self {
		Domain::Hash(domain)
	}
}

impl From<ValueDomain> for Domain {
	fn from(domain: ValueDomain) -> Self {
		Domain::Value(domain)
	}
}

impl From<RangeDomain> for Domain {
	fn from(domain: RangeDomain) -> Self {
		Domain::Range(domain)
	}
}

impl From<ListDomain> for Domain {
	fn from(domain: ListDomain) -> Self {
		Domain::List(domain)
	}
}

/// Builds the domain for a partition scheme.
///
/// `data_type` is the declared partition column type, used only by hash
/// domains. The other schemes take their type from `schema`.
pub fn create_domain(partition_type: PartitionType, data_type: DataType, schema: &DataForm) -> Result<Domain> {
	create_domain_with_config(partition_type, data_type, schema, PartitionConfig::default())
}

#[instrument(name = "partition::domain::create", level = "debug", skip(schema, config))]
pub fn create_domain_with_config(
	partition_type: PartitionType,
	data_type: DataType,
	schema: &DataForm,
	config: PartitionConfig,
) -> Result<Domain> {
	let domain: Domain = match partition_type {
		PartitionType::Hash => HashDomain::from_schema(data_type, schema)?.with_config(config).into(),
		PartitionType::Value => ValueDomain::from_schema(schema)?.with_config(config).into(),
		PartitionType::Range => RangeDomain::from_schema(schema)?.with_config(config).into(),
		PartitionType::List => ListDomain::from_schema(schema)?.with_config(config).into(),
		PartitionType::Seq | PartitionType::Compo => {
			debug!(%partition_type, "rejecting partition scheme");
			return Err(PartitionError::UnsupportedPartitionType(partition_type));
		}
	};

	debug!(scheme = %partition_type, data_type = %domain.data_type(), "created partition domain");
	Ok(domain)
}

#[cfg(test)]
mod tests {
	use ddb_type::Scalar;

	use super::*;

	#[test]
	fn test_unsupported_schemes() {
		let schema: DataForm = Scalar::int(10).into();
		for code in [0, 4, 6, -1] {
			let err = create_domain(PartitionType::from_code(code), DataType::Int, &schema).unwrap_err();
			let tag = PartitionType::from_code(code);
			assert_eq!(err, PartitionError::UnsupportedPartitionType(tag));
			assert_eq!(err.to_string(), format!("unsupported partition type {tag}"));
		}
	}

	#[test]
	fn test_dispatch() {
		let hash = create_domain(PartitionType::Hash, DataType::Date, &Scalar::int(10).into()).unwrap();
		assert_eq!(hash.partition_type(), PartitionType::Hash);
		assert_eq!(hash.data_type(), DataType::Date);

		let value = create_domain(PartitionType::Value, DataType::Void, &Vector::date(vec![1]).into()).unwrap();
		assert_eq!(value.partition_type(), PartitionType::Value);
		assert_eq!(value.data_type(), DataType::Date);

		let range = create_domain(PartitionType::Range, DataType::Void, &Vector::int(vec![0, 10]).into()).unwrap();
		assert_eq!(range.partition_type(), PartitionType::Range);
		assert_eq!(range.data_type(), DataType::Int);

		let groups = Vector::tuple(vec![Scalar::symbol("a").into()]);
		let list = create_domain(PartitionType::List, DataType::Void, &groups.into()).unwrap();
		assert_eq!(list.partition_type(), PartitionType::List);
		assert_eq!(list.data_type(), DataType::Symbol);
	}

	#[test]
	fn test_wrong_shape() {
		let err = create_domain(PartitionType::Value, DataType::Int, &Scalar::int(1).into()).unwrap_err();
		assert!(matches!(err, PartitionError::InvalidSchemaShape(_)));

		let err = create_domain(PartitionType::Hash, DataType::Int, &Vector::int(vec![1]).into()).unwrap_err();
		assert!(matches!(err, PartitionError::InvalidSchemaShape(_)));
	}

	#[test]
	fn test_domain_is_shareable() {
		fn assert_send_sync<T: Send + Sync>() {}
		assert_send_sync::<Domain>();
	}
}
