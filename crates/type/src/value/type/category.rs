// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Coarse classification of a data type. Two types are partition compatible
/// only when they share a category.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
	Nothing,
	Logical,
	Integral,
	Floating,
	Temporal,
	Literal,
	System,
	Mixed,
	Binary,
	Denary,
}

impl Display for Category {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Category::Nothing => f.write_str("NOTHING"),
			Category::Logical => f.write_str("LOGICAL"),
			Category::Integral => f.write_str("INTEGRAL"),
			Category::Floating => f.write_str("FLOATING"),
			Category::Temporal => f.write_str("TEMPORAL"),
			Category::Literal => f.write_str("LITERAL"),
			Category::System => f.write_str("SYSTEM"),
			Category::Mixed => f.write_str("MIXED"),
			Category::Binary => f.write_str("BINARY"),
			Category::Denary => f.write_str("DENARY"),
		}
	}
}
