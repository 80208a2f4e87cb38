// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Write};

use serde::{Deserialize, Serialize};

use crate::{
	error::{Result, TypeError},
	hash,
	value::{Category, DataForm, DataType, Repr, Scalar, Value, scalar::render},
};

/// Column storage, one variant per physical representation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum VectorData {
	Void(usize),
	I8(Vec<i8>),
	I16(Vec<i16>),
	I32(Vec<i32>),
	I64(Vec<i64>),
	F32(Vec<f32>),
	F64(Vec<f64>),
	Text(Vec<String>),
	I128(Vec<u128>),
	Any(Vec<DataForm>),
}

impl VectorData {
	pub fn repr(&self) -> Repr {
		match self {
			VectorData::Void(_) => Repr::Void,
			VectorData::I8(_) => Repr::I8,
			VectorData::I16(_) => Repr::I16,
			VectorData::I32(_) => Repr::I32,
			VectorData::I64(_) => Repr::I64,
			VectorData::F32(_) => Repr::F32,
			VectorData::F64(_) => Repr::F64,
			VectorData::Text(_) => Repr::Text,
			VectorData::I128(_) => Repr::I128,
			VectorData::Any(_) => Repr::Any,
		}
	}

	pub fn len(&self) -> usize {
		match self {
			VectorData::Void(len) => *len,
			VectorData::I8(v) => v.len(),
			VectorData::I16(v) => v.len(),
			VectorData::I32(v) => v.len(),
			VectorData::I64(v) => v.len(),
			VectorData::F32(v) => v.len(),
			VectorData::F64(v) => v.len(),
			VectorData::Text(v) => v.len(),
			VectorData::I128(v) => v.len(),
			VectorData::Any(v) => v.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn value(&self, index: usize) -> Option<Value> {
		let value = match self {
			VectorData::Void(len) if index < *len => Value::Void,
			VectorData::I8(v) => Value::I8(*v.get(index)?),
			VectorData::I16(v) => Value::I16(*v.get(index)?),
			VectorData::I32(v) => Value::I32(*v.get(index)?),
			VectorData::I64(v) => Value::I64(*v.get(index)?),
			VectorData::F32(v) => Value::F32(*v.get(index)?),
			VectorData::F64(v) => Value::F64(*v.get(index)?),
			VectorData::Text(v) => Value::Text(v.get(index)?.clone()),
			VectorData::I128(v) => Value::I128(*v.get(index)?),
			_ => return None,
		};
		Some(value)
	}
}

/// A typed column. A vector of type `Any` is a tuple whose elements are
/// scalars or nested vectors of their own types.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawVector")]
pub struct Vector {
	data_type: DataType,
	data: VectorData,
}

#[derive(Deserialize)]
struct RawVector {
	data_type: DataType,
	data: VectorData,
}

impl TryFrom<RawVector> for Vector {
	type Error = TypeError;

	fn try_from(raw: RawVector) -> Result<Self> {
		Vector::new(raw.data_type, raw.data)
	}
}

impl Vector {
	/// Fails when `data` is not stored the way `data_type` requires.
	pub fn new(data_type: DataType, data: VectorData) -> Result<Self> {
		let expected = data_type.repr().ok_or(TypeError::UnsupportedType(data_type))?;
		let actual = data.repr();
		if expected != actual {
			return Err(TypeError::ReprMismatch {
				data_type,
				expected,
				actual,
			});
		}

		Ok(Self {
			data_type,
			data,
		})
	}

	/// Builds a vector from scalars that all share the representation of
	/// `data_type`. A vector of type `Any` accepts any scalar.
	pub fn from_scalars(data_type: DataType, scalars: &[Scalar]) -> Result<Self> {
		let expected = data_type.repr().ok_or(TypeError::UnsupportedType(data_type))?;
		let mismatch = |value: &Value| TypeError::ReprMismatch {
			data_type,
			expected,
			actual: value.repr(),
		};

		macro_rules! collect {
			($variant:ident, $ty:ty) => {
				VectorData::$variant(
					scalars
						.iter()
						.map(|s| match s.value() {
							Value::$variant(v) => Ok(v.clone()),
							other => Err(mismatch(other)),
						})
						.collect::<Result<Vec<$ty>>>()?,
				)
			};
		}

		let data = match expected {
			Repr::Void => VectorData::Void(scalars.len()),
			Repr::I8 => collect!(I8, i8),
			Repr::I16 => collect!(I16, i16),
			Repr::I32 => collect!(I32, i32),
			Repr::I64 => collect!(I64, i64),
			Repr::F32 => collect!(F32, f32),
			Repr::F64 => collect!(F64, f64),
			Repr::Text => collect!(Text, String),
			Repr::I128 => collect!(I128, u128),
			Repr::Any => VectorData::Any(scalars.iter().cloned().map(DataForm::Scalar).collect()),
		};

		Ok(Self {
			data_type,
			data,
		})
	}

	/// A one-row vector holding `scalar`.
	pub fn from_scalar(scalar: &Scalar) -> Self {
		let data = match scalar.value() {
			Value::Void => VectorData::Void(1),
			Value::I8(v) => VectorData::I8(vec![*v]),
			Value::I16(v) => VectorData::I16(vec![*v]),
			Value::I32(v) => VectorData::I32(vec![*v]),
			Value::I64(v) => VectorData::I64(vec![*v]),
			Value::F32(v) => VectorData::F32(vec![*v]),
			Value::F64(v) => VectorData::F64(vec![*v]),
			Value::Text(v) => VectorData::Text(vec![v.clone()]),
			Value::I128(v) => VectorData::I128(vec![*v]),
		};

		Self {
			data_type: scalar.data_type(),
			data,
		}
	}

	pub fn bool(values: Vec<bool>) -> Self {
		Self {
			data_type: DataType::Bool,
			data: VectorData::I8(values.into_iter().map(|v| v as i8).collect()),
		}
	}

	pub fn int(values: Vec<i32>) -> Self {
		Self {
			data_type: DataType::Int,
			data: VectorData::I32(values),
		}
	}

	pub fn long(values: Vec<i64>) -> Self {
		Self {
			data_type: DataType::Long,
			data: VectorData::I64(values),
		}
	}

	pub fn double(values: Vec<f64>) -> Self {
		Self {
			data_type: DataType::Double,
			data: VectorData::F64(values),
		}
	}

	pub fn string<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		Self {
			data_type: DataType::String,
			data: VectorData::Text(values.into_iter().map(Into::into).collect()),
		}
	}

	pub fn symbol<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Self {
		Self {
			data_type: DataType::Symbol,
			data: VectorData::Text(values.into_iter().map(Into::into).collect()),
		}
	}

	pub fn date(days: Vec<i32>) -> Self {
		Self {
			data_type: DataType::Date,
			data: VectorData::I32(days),
		}
	}

	pub fn datetime(seconds: Vec<i32>) -> Self {
		Self {
			data_type: DataType::DateTime,
			data: VectorData::I32(seconds),
		}
	}

	pub fn timestamp(millis: Vec<i64>) -> Self {
		Self {
			data_type: DataType::Timestamp,
			data: VectorData::I64(millis),
		}
	}

	pub fn tuple(elements: Vec<DataForm>) -> Self {
		Self {
			data_type: DataType::Any,
			data: VectorData::Any(elements),
		}
	}

	pub fn data_type(&self) -> DataType {
		self.data_type
	}

	pub fn data(&self) -> &VectorData {
		&self.data
	}

	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	/// Element `index` of a tuple.
	pub fn form(&self, index: usize) -> Option<&DataForm> {
		match &self.data {
			VectorData::Any(forms) => forms.get(index),
			_ => None,
		}
	}

	/// Row `index` as a scalar. Tuple elements are unwrapped and carry their
	/// own type; nested vectors yield `None`.
	pub fn get(&self, index: usize) -> Option<Scalar> {
		match &self.data {
			VectorData::Any(forms) => forms.get(index)?.as_scalar().cloned(),
			data => Some(Scalar::new_unchecked(self.data_type, data.value(index)?)),
		}
	}

	pub fn is_null(&self, index: usize) -> bool {
		match &self.data {
			VectorData::Any(forms) => match forms.get(index) {
				Some(DataForm::Scalar(scalar)) => scalar.is_null(),
				_ => false,
			},
			data => data.value(index).is_none_or(|v| v.is_null()),
		}
	}

	/// Canonical text of row `index`, empty when out of range.
	pub fn element_string(&self, index: usize) -> String {
		match &self.data {
			VectorData::Text(values) => values.get(index).cloned().unwrap_or_default(),
			VectorData::Any(forms) => match forms.get(index) {
				Some(DataForm::Scalar(scalar)) => scalar.to_string(),
				Some(DataForm::Vector(vector)) => vector.to_string(),
				None => String::new(),
			},
			data => data.value(index).map(|value| display(self.data_type, &value)).unwrap_or_default(),
		}
	}

	/// Bucket of row `index` in `buckets` hash buckets.
	pub fn hash_bucket(&self, index: usize, buckets: u32) -> i32 {
		match &self.data {
			VectorData::Text(values) if matches!(self.data_type, DataType::String | DataType::Symbol) => {
				match values.get(index) {
					Some(value) if buckets > 0 => hash::bucket_text(value, buckets),
					_ => -1,
				}
			}
			VectorData::Any(forms) => match forms.get(index) {
				Some(DataForm::Scalar(scalar)) => scalar.hash_bucket(buckets),
				_ => 0,
			},
			data => match data.value(index) {
				Some(value) => hash::bucket(self.data_type, &value, buckets),
				None => -1,
			},
		}
	}

	/// Whether the elements are in non-descending order. Vectors that cannot
	/// be searched with [`Vector::as_of`] never are.
	pub fn is_ascending(&self) -> bool {
		if !self.is_searchable() {
			return false;
		}

		match &self.data {
			VectorData::I8(v) => v.is_sorted(),
			VectorData::I16(v) => v.is_sorted(),
			VectorData::I32(v) => v.is_sorted(),
			VectorData::I64(v) => v.is_sorted(),
			VectorData::F32(v) => v.is_sorted_by(|a, b| a <= b),
			VectorData::F64(v) => v.is_sorted_by(|a, b| a <= b),
			VectorData::Text(v) => v.is_sorted(),
			_ => false,
		}
	}

	fn is_searchable(&self) -> bool {
		!matches!(
			self.data_type.category(),
			Category::Mixed | Category::Nothing | Category::Logical | Category::System | Category::Binary
		)
	}

	/// Index of the last element less than or equal to `probe` in this
	/// ascending vector. `None` when `probe` sorts before every element or
	/// when the two are not comparable.
	pub fn as_of(&self, probe: &Scalar) -> Option<usize> {
		let category = self.data_type.category();
		if !self.is_searchable() || probe.data_type().category() != category {
			return None;
		}
		if category == Category::Temporal && probe.data_type() != self.data_type {
			return None;
		}

		let count = match &self.data {
			VectorData::I8(v) => probe.value().as_i64().map(|p| v.partition_point(|e| (*e as i64) <= p)),
			VectorData::I16(v) => probe.value().as_i64().map(|p| v.partition_point(|e| (*e as i64) <= p)),
			VectorData::I32(v) => probe.value().as_i64().map(|p| v.partition_point(|e| (*e as i64) <= p)),
			VectorData::I64(v) => probe.value().as_i64().map(|p| v.partition_point(|e| *e <= p)),
			VectorData::F32(v) => probe.value().as_f64().map(|p| v.partition_point(|e| (*e as f64) <= p)),
			VectorData::F64(v) => probe.value().as_f64().map(|p| v.partition_point(|e| *e <= p)),
			VectorData::Text(v) => probe.value().as_str().map(|p| v.partition_point(|e| e.as_str() <= p)),
			_ => None,
		}?;

		count.checked_sub(1)
	}
}

fn display(data_type: DataType, value: &Value) -> String {
	struct Cell<'a>(DataType, &'a Value);

	impl fmt::Display for Cell<'_> {
		fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
			render(self.0, self.1, f)
		}
	}

	Cell(data_type, value).to_string()
}

impl fmt::Display for Vector {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let open = if self.data_type == DataType::Any {
			'('
		} else {
			'['
		};
		f.write_char(open)?;
		for i in 0..self.len() {
			if i > 0 {
				f.write_char(',')?;
			}
			f.write_str(&self.element_string(i))?;
		}
		f.write_char(if open == '(' {
			')'
		} else {
			']'
		})
	}
}
