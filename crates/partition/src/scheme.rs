// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Partition scheme of a table, numbered by the server's scheme code.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartitionType {
	Seq,
	Value,
	Range,
	List,
	Compo,
	Hash,
}

impl PartitionType {
	/// Maps a scheme code. Unknown codes fall back to `Seq`, which no domain
	/// supports, so they surface as an unsupported scheme on construction.
	pub fn from_code(code: i32) -> Self {
		match code {
			1 => PartitionType::Value,
			2 => PartitionType::Range,
			3 => PartitionType::List,
			4 => PartitionType::Compo,
			5 => PartitionType::Hash,
			_ => PartitionType::Seq,
		}
	}

	pub fn code(&self) -> i32 {
		match self {
			PartitionType::Seq => 0,
			PartitionType::Value => 1,
			PartitionType::Range => 2,
			PartitionType::List => 3,
			PartitionType::Compo => 4,
			PartitionType::Hash => 5,
		}
	}
}

impl From<i32> for PartitionType {
	fn from(code: i32) -> Self {
		PartitionType::from_code(code)
	}
}

impl Display for PartitionType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PartitionType::Seq => f.write_str("SEQ"),
			PartitionType::Value => f.write_str("VALUE"),
			PartitionType::Range => f.write_str("RANGE"),
			PartitionType::List => f.write_str("LIST"),
			PartitionType::Compo => f.write_str("COMPO"),
			PartitionType::Hash => f.write_str("HASH"),
		}
	}
}
