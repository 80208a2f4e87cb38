// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::borrow::Cow;

use ddb_type::{DataForm, DataType, Vector, cast_temporal};
use rayon::prelude::*;
use tracing::trace;

use crate::{PartitionConfig, PartitionError, Result};

/// The type a column's values actually carry. A tuple takes the type of its
/// first element; an empty tuple stays `Any`.
pub fn effective_type(column: &Vector) -> DataType {
	match column.data_type() {
		DataType::Any => column.form(0).map_or(DataType::Any, DataForm::data_type),
		data_type => data_type,
	}
}

/// Brings `column` in line with a domain declared as `declared`.
///
/// The resolved column type must share the declared category. A temporal
/// domain casts the column to its own unit whenever `compared` differs from
/// the declared type.
pub(crate) fn conform<'a>(column: &'a Vector, declared: DataType, compared: DataType) -> Result<Cow<'a, Vector>> {
	let resolved = effective_type(column);
	let expected = declared.category();
	let actual = resolved.category();
	if expected != actual {
		return Err(PartitionError::DataCategoryMismatch {
			expected,
			actual,
		});
	}

	if declared.is_temporal() && compared != declared {
		trace!(from = %resolved, to = %declared, "casting partition column");
		let cast = cast_temporal(column, declared).map_err(|source| PartitionError::TypeCast {
			from: resolved,
			to: declared,
			source,
		})?;
		return Ok(Cow::Owned(cast));
	}

	Ok(Cow::Borrowed(column))
}

/// Computes one key per row, on the rayon pool for large columns.
pub(crate) fn collect_keys<F>(rows: usize, config: &PartitionConfig, key: F) -> Vec<i32>
where
	F: Fn(usize) -> i32 + Sync + Send,
{
	if rows >= config.parallel_threshold {
		(0..rows).into_par_iter().map(key).collect()
	} else {
		(0..rows).map(key).collect()
	}
}
