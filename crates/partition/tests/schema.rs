// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Resolving table schemas into domains and routing batches through them.

use ddb_partition::{
	PartitionConfig, PartitionError, PartitionSchema, PartitionType, Result, Router, check_columns,
};
use ddb_type::{DataType, Scalar, Vector};

fn load(name: &str) -> PartitionSchema {
	let path = format!("{}/tests/fixtures/{name}", env!("CARGO_MANIFEST_DIR"));
	let text = std::fs::read_to_string(&path).unwrap();
	serde_json::from_str(&text).unwrap()
}

#[test]
fn test_single_level_range_schema() -> Result<()> {
	let schema = load("range_schema.json");
	let level = schema.level("sym")?;
	assert_eq!(level.column_index, 1);
	assert_eq!(level.partition_type, PartitionType::Range);
	assert_eq!(level.column_type, DataType::String);

	let domain = level.domain(PartitionConfig::default())?;
	assert_eq!(domain.partition_keys(&Vector::string(["domain", "sample", "zero"]))?, vec![0, 1, -1]);

	assert!(matches!(schema.level("Sym"), Err(PartitionError::PartitionColumnNotFound(_))));
	Ok(())
}

#[test]
fn test_composite_schema() -> Result<()> {
	let schema = load("composite_schema.json");

	let date = schema.level("tradedate")?;
	assert_eq!(date.column_index, 0);
	assert_eq!(date.partition_type, PartitionType::Value);
	assert_eq!(date.column_type, DataType::Date);

	let sym = schema.level("SYM")?;
	assert_eq!(sym.column_index, 1);
	assert_eq!(sym.partition_type, PartitionType::Hash);
	assert_eq!(sym.column_type, DataType::Symbol);

	let err = schema.level("price").unwrap_err();
	assert_eq!(err.to_string(), "can't find specified partition column name price");
	Ok(())
}

#[test]
fn test_append_pipeline() -> Result<()> {
	let schema = load("composite_schema.json");
	let level = schema.level("TradeDate")?;
	let domain = level.domain(PartitionConfig::default().with_parallel_threshold(2))?;
	let router = Router::partitioned(domain, level.column_index, 2)?;

	let batch = [
		Vector::date(vec![18993, 18994, 18995, i32::MIN]),
		Vector::symbol(["a", "b", "c", "d"]),
		Vector::double(vec![1.0, 2.0, 3.0, 4.0]),
	];
	check_columns(&[DataType::Date, DataType::Symbol, DataType::Double], &batch)?;

	// value keys are the day numbers, the null row has no partition
	let chunks = router.route_batch(&batch)?;
	assert_eq!(chunks, vec![vec![1], vec![0, 2]]);

	assert_eq!(router.route_row(&Scalar::date(18994))?, Some(0));
	assert_eq!(router.route_row(&Scalar::date(i32::MIN))?, None);
	Ok(())
}

#[test]
fn test_batch_rejected_before_routing() {
	let batch = [Vector::datetime(vec![1]), Vector::symbol(["a"])];
	let err = check_columns(&[DataType::Date, DataType::Symbol], &batch).unwrap_err();
	assert_eq!(
		err,
		PartitionError::TemporalColumnMismatch {
			index: 0,
			expected: DataType::Date,
			actual: DataType::DateTime,
		}
	);
}

#[test]
fn test_non_partitioned_routing() -> Result<()> {
	let router = Router::hashed(0, 3)?;
	let chunks = router.route_batch(&[Vector::int(vec![0, 1, 2, 3, -1])])?;
	// -1 wraps to 4294967295, which is 0 modulo 3
	assert_eq!(chunks, vec![vec![0, 3, 4], vec![1], vec![2]]);
	Ok(())
}

#[test]
fn test_deserialized_storage_must_match_type() -> Result<()> {
	let schema: PartitionSchema = serde_json::from_str(
		r#"{
			"partitionColumnName": "TradeDate",
			"partitionColumnIndex": 0,
			"partitionType": 5,
			"partitionColumnType": 6,
			"partitionSchema": { "Scalar": { "data_type": "Int", "value": { "I32": 10 } } }
		}"#,
	)
	.unwrap();
	let domain = schema.level("TradeDate")?.domain(PartitionConfig::default())?;

	let column: Vector = serde_json::from_str(r#"{"data_type":"Date","data":{"I32":[18993,18994]}}"#).unwrap();
	assert_eq!(domain.partition_keys(&column)?, vec![3, 4]);

	let err = serde_json::from_str::<Vector>(r#"{"data_type":"Date","data":{"I64":[18993,18994]}}"#).unwrap_err();
	assert!(err.to_string().contains("expected I32"), "{err}");

	let mismatched = r#"{
		"partitionColumnName": "TradeDate",
		"partitionColumnIndex": 0,
		"partitionType": 1,
		"partitionColumnType": 6,
		"partitionSchema": { "Vector": { "data_type": "Date", "data": { "I64": [18993, 18994] } } }
	}"#;
	assert!(serde_json::from_str::<PartitionSchema>(mismatched).is_err());
	Ok(())
}
