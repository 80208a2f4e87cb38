// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::Deserialize;

/// Tuning for partition key computation.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PartitionConfig {
	/// Columns with at least this many rows compute their keys on the rayon
	/// pool. Smaller columns run on the calling thread.
	pub parallel_threshold: usize,
}

impl Default for PartitionConfig {
	fn default() -> Self {
		Self {
			parallel_threshold: 65_536,
		}
	}
}

impl PartitionConfig {
	pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
		self.parallel_threshold = parallel_threshold;
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default() {
		assert_eq!(PartitionConfig::default().parallel_threshold, 65_536);
	}

	#[test]
	fn test_deserialize_fills_defaults() {
		let config: PartitionConfig = serde_json::from_str("{}").unwrap();
		assert_eq!(config, PartitionConfig::default());

		let config: PartitionConfig = serde_json::from_str(r#"{"parallel_threshold": 8}"#).unwrap();
		assert_eq!(config.parallel_threshold, 8);
	}
}
