// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Spreads appended rows over a fixed set of writer workers so that every
//! partition is always written by the same worker.

use ddb_type::{Scalar, Vector};
use tracing::{instrument, trace};

use crate::{PartitionError, Result, domain::Domain};

#[derive(Debug, Clone, PartialEq)]
enum Strategy {
	Partitioned(Domain),
	Hashed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Router {
	strategy: Strategy,
	column: usize,
	workers: usize,
}

impl Router {
	/// Routes by the partition key of `column` under `domain`.
	pub fn partitioned(domain: Domain, column: usize, workers: usize) -> Result<Self> {
		Self::new(Strategy::Partitioned(domain), column, workers)
	}

	/// Routes rows of a table without partitions by the hash of `column`.
	pub fn hashed(column: usize, workers: usize) -> Result<Self> {
		Self::new(Strategy::Hashed, column, workers)
	}

	fn new(strategy: Strategy, column: usize, workers: usize) -> Result<Self> {
		if workers == 0 {
			return Err(PartitionError::InvalidWorkerCount(workers));
		}

		Ok(Self {
			strategy,
			column,
			workers,
		})
	}

	pub fn column(&self) -> usize {
		self.column
	}

	pub fn workers(&self) -> usize {
		self.workers
	}

	/// Row indices of `batch` grouped by worker, in row order. Rows whose
	/// value belongs to no partition are left out.
	#[instrument(name = "partition::router::route_batch", level = "trace", skip(self, batch), fields(columns = batch.len()))]
	pub fn route_batch(&self, batch: &[Vector]) -> Result<Vec<Vec<usize>>> {
		let column = batch.get(self.column).ok_or(PartitionError::ColumnCountMismatch {
			expected: self.column + 1,
			actual: batch.len(),
		})?;

		let keys = self.keys(column)?;
		let mut chunks = vec![Vec::new(); self.workers];
		let mut dropped = 0usize;
		for (row, key) in keys.into_iter().enumerate() {
			match usize::try_from(key) {
				Ok(key) => chunks[key % self.workers].push(row),
				Err(_) => dropped += 1,
			}
		}

		trace!(rows = column.len(), dropped, "routed batch");
		Ok(chunks)
	}

	/// Worker for a single value of the routing column, `None` when the
	/// value belongs to no partition.
	pub fn route_row(&self, value: &Scalar) -> Result<Option<usize>> {
		let keys = self.keys(&Vector::from_scalar(value))?;
		Ok(keys.first().and_then(|key| usize::try_from(*key).ok()).map(|key| key % self.workers))
	}

	fn keys(&self, column: &Vector) -> Result<Vec<i32>> {
		match &self.strategy {
			Strategy::Partitioned(domain) => domain.partition_keys(column),
			Strategy::Hashed => {
				let buckets = u32::try_from(self.workers).unwrap_or(u32::MAX);
				Ok((0..column.len()).map(|i| column.hash_bucket(i, buckets).max(0)).collect())
			}
		}
	}
}
