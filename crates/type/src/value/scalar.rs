// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::{
	error::{Result, TypeError},
	hash,
	value::{DataType, Repr, temporal::format},
};

/// One cell in its physical representation. Nulls use the server's sentinels:
/// the minimum value for integers, `-MAX` for floats, empty text and zero for
/// 128-bit values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Value {
	Void,
	I8(i8),
	I16(i16),
	I32(i32),
	I64(i64),
	F32(f32),
	F64(f64),
	Text(String),
	I128(u128),
}

impl Value {
	pub fn repr(&self) -> Repr {
		match self {
			Value::Void => Repr::Void,
			Value::I8(_) => Repr::I8,
			Value::I16(_) => Repr::I16,
			Value::I32(_) => Repr::I32,
			Value::I64(_) => Repr::I64,
			Value::F32(_) => Repr::F32,
			Value::F64(_) => Repr::F64,
			Value::Text(_) => Repr::Text,
			Value::I128(_) => Repr::I128,
		}
	}

	pub fn is_null(&self) -> bool {
		match self {
			Value::Void => true,
			Value::I8(v) => *v == i8::MIN,
			Value::I16(v) => *v == i16::MIN,
			Value::I32(v) => *v == i32::MIN,
			Value::I64(v) => *v == i64::MIN,
			Value::F32(v) => *v == -f32::MAX,
			Value::F64(v) => *v == -f64::MAX,
			Value::Text(v) => v.is_empty(),
			Value::I128(v) => *v == 0,
		}
	}

	/// Integer payload widened to `i64`.
	pub fn as_i64(&self) -> Option<i64> {
		match self {
			Value::I8(v) => Some(*v as i64),
			Value::I16(v) => Some(*v as i64),
			Value::I32(v) => Some(*v as i64),
			Value::I64(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_f64(&self) -> Option<f64> {
		match self {
			Value::F32(v) => Some(*v as f64),
			Value::F64(v) => Some(*v),
			_ => None,
		}
	}

	pub fn as_str(&self) -> Option<&str> {
		match self {
			Value::Text(v) => Some(v.as_str()),
			_ => None,
		}
	}

	fn null_of(repr: Repr) -> Option<Value> {
		let value = match repr {
			Repr::Void => Value::Void,
			Repr::I8 => Value::I8(i8::MIN),
			Repr::I16 => Value::I16(i16::MIN),
			Repr::I32 => Value::I32(i32::MIN),
			Repr::I64 => Value::I64(i64::MIN),
			Repr::F32 => Value::F32(-f32::MAX),
			Repr::F64 => Value::F64(-f64::MAX),
			Repr::Text => Value::Text(String::new()),
			Repr::I128 => Value::I128(0),
			Repr::Any => return None,
		};
		Some(value)
	}
}

/// A single typed value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawScalar")]
pub struct Scalar {
	data_type: DataType,
	value: Value,
}

#[derive(Deserialize)]
struct RawScalar {
	data_type: DataType,
	value: Value,
}

impl TryFrom<RawScalar> for Scalar {
	type Error = TypeError;

	fn try_from(raw: RawScalar) -> Result<Self> {
		Scalar::new(raw.data_type, raw.value)
	}
}

impl Scalar {
	/// Fails when `value` is not stored the way `data_type` requires.
	pub fn new(data_type: DataType, value: Value) -> Result<Self> {
		let expected = match data_type.repr() {
			Some(Repr::Any) | None => return Err(TypeError::UnsupportedType(data_type)),
			Some(repr) => repr,
		};

		let actual = value.repr();
		if actual != expected {
			return Err(TypeError::ReprMismatch {
				data_type,
				expected,
				actual,
			});
		}

		Ok(Self {
			data_type,
			value,
		})
	}

	pub fn null(data_type: DataType) -> Result<Self> {
		let value = data_type
			.repr()
			.and_then(Value::null_of)
			.ok_or(TypeError::UnsupportedType(data_type))?;

		Ok(Self {
			data_type,
			value,
		})
	}

	pub(crate) fn new_unchecked(data_type: DataType, value: Value) -> Self {
		Self {
			data_type,
			value,
		}
	}

	pub fn bool(value: bool) -> Self {
		Self::new_unchecked(DataType::Bool, Value::I8(value as i8))
	}

	pub fn char(value: i8) -> Self {
		Self::new_unchecked(DataType::Char, Value::I8(value))
	}

	pub fn short(value: i16) -> Self {
		Self::new_unchecked(DataType::Short, Value::I16(value))
	}

	pub fn int(value: i32) -> Self {
		Self::new_unchecked(DataType::Int, Value::I32(value))
	}

	pub fn long(value: i64) -> Self {
		Self::new_unchecked(DataType::Long, Value::I64(value))
	}

	pub fn float(value: f32) -> Self {
		Self::new_unchecked(DataType::Float, Value::F32(value))
	}

	pub fn double(value: f64) -> Self {
		Self::new_unchecked(DataType::Double, Value::F64(value))
	}

	pub fn string(value: impl Into<String>) -> Self {
		Self::new_unchecked(DataType::String, Value::Text(value.into()))
	}

	pub fn symbol(value: impl Into<String>) -> Self {
		Self::new_unchecked(DataType::Symbol, Value::Text(value.into()))
	}

	/// Days since 1970-01-01.
	pub fn date(days: i32) -> Self {
		Self::new_unchecked(DataType::Date, Value::I32(days))
	}

	/// Months since year 0.
	pub fn month(months: i32) -> Self {
		Self::new_unchecked(DataType::Month, Value::I32(months))
	}

	/// Milliseconds since midnight.
	pub fn time(millis: i32) -> Self {
		Self::new_unchecked(DataType::Time, Value::I32(millis))
	}

	pub fn minute(minutes: i32) -> Self {
		Self::new_unchecked(DataType::Minute, Value::I32(minutes))
	}

	pub fn second(seconds: i32) -> Self {
		Self::new_unchecked(DataType::Second, Value::I32(seconds))
	}

	/// Seconds since the Unix epoch.
	pub fn datetime(seconds: i32) -> Self {
		Self::new_unchecked(DataType::DateTime, Value::I32(seconds))
	}

	/// Milliseconds since the Unix epoch.
	pub fn timestamp(millis: i64) -> Self {
		Self::new_unchecked(DataType::Timestamp, Value::I64(millis))
	}

	pub fn nanotime(nanos: i64) -> Self {
		Self::new_unchecked(DataType::NanoTime, Value::I64(nanos))
	}

	pub fn nanotimestamp(nanos: i64) -> Self {
		Self::new_unchecked(DataType::NanoTimestamp, Value::I64(nanos))
	}

	pub fn datehour(hours: i32) -> Self {
		Self::new_unchecked(DataType::DateHour, Value::I32(hours))
	}

	pub fn dateminute(minutes: i32) -> Self {
		Self::new_unchecked(DataType::DateMinute, Value::I32(minutes))
	}

	pub fn uuid(value: u128) -> Self {
		Self::new_unchecked(DataType::Uuid, Value::I128(value))
	}

	pub fn int128(value: u128) -> Self {
		Self::new_unchecked(DataType::Int128, Value::I128(value))
	}

	pub fn ip(value: u128) -> Self {
		Self::new_unchecked(DataType::Ip, Value::I128(value))
	}

	pub fn data_type(&self) -> DataType {
		self.data_type
	}

	pub fn value(&self) -> &Value {
		&self.value
	}

	pub fn is_null(&self) -> bool {
		self.value.is_null()
	}

	/// Bucket of this value in `buckets` hash buckets, `-1` for nulls and for
	/// types the server refuses to hash.
	pub fn hash_bucket(&self, buckets: u32) -> i32 {
		hash::bucket(self.data_type, &self.value, buckets)
	}
}

impl Display for Scalar {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		render(self.data_type, &self.value, f)
	}
}

/// Canonical server text form. Nulls render empty except for 128-bit types,
/// which always render their digits.
pub(crate) fn render(data_type: DataType, value: &Value, f: &mut Formatter<'_>) -> std::fmt::Result {
	match value {
		Value::I128(v) => return render_i128(data_type, *v, f),
		Value::Text(v) => return f.write_str(v),
		_ if value.is_null() => return Ok(()),
		_ => {}
	}

	if data_type == DataType::Bool {
		return match value {
			Value::I8(0) => f.write_str("false"),
			_ => f.write_str("true"),
		};
	}

	if data_type.is_temporal() {
		if let Some(raw) = value.as_i64() {
			return f.write_str(&format::render(data_type, raw));
		}
	}

	match value {
		Value::I8(v) => write!(f, "{v}"),
		Value::I16(v) => write!(f, "{v}"),
		Value::I32(v) => write!(f, "{v}"),
		Value::I64(v) => write!(f, "{v}"),
		Value::F32(v) => write!(f, "{v}"),
		Value::F64(v) => write!(f, "{v}"),
		_ => Ok(()),
	}
}

fn render_i128(data_type: DataType, value: u128, f: &mut Formatter<'_>) -> std::fmt::Result {
	match data_type {
		DataType::Uuid => {
			let hex = format!("{value:032x}");
			write!(f, "{}-{}-{}-{}-{}", &hex[0..8], &hex[8..12], &hex[12..16], &hex[16..20], &hex[20..32])
		}
		DataType::Ip => {
			let high = (value >> 64) as u64;
			if high == 0 {
				let low = value as u32;
				write!(f, "{}.{}.{}.{}", low >> 24, (low >> 16) & 0xff, (low >> 8) & 0xff, low & 0xff)
			} else {
				let groups: Vec<String> =
					(0..8).rev().map(|i| format!("{:x}", (value >> (i * 16)) as u16)).collect();
				f.write_str(&groups.join(":"))
			}
		}
		_ => write!(f, "{value:032x}"),
	}
}
