// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::TypeError;

mod category;

pub use category::Category;

/// Server data types, numbered by their wire code.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum DataType {
	Void = 0,
	Bool = 1,
	/// A 1-byte signed integer
	Char = 2,
	/// A 2-byte signed integer
	Short = 3,
	/// A 4-byte signed integer
	Int = 4,
	/// An 8-byte signed integer
	Long = 5,
	/// Days since 1970-01-01
	Date = 6,
	/// Months since year 0 (`year * 12 + month - 1`)
	Month = 7,
	/// Milliseconds since midnight
	Time = 8,
	/// Minutes since midnight
	Minute = 9,
	/// Seconds since midnight
	Second = 10,
	/// Seconds since the Unix epoch
	DateTime = 11,
	/// Milliseconds since the Unix epoch
	Timestamp = 12,
	/// Nanoseconds since midnight
	NanoTime = 13,
	/// Nanoseconds since the Unix epoch
	NanoTimestamp = 14,
	Float = 15,
	Double = 16,
	Symbol = 17,
	String = 18,
	Uuid = 19,
	Function = 20,
	Handle = 21,
	Code = 22,
	Datasource = 23,
	Resource = 24,
	/// Heterogeneous tuple of nested data forms
	Any = 25,
	Compress = 26,
	Dictionary = 27,
	/// Hours since the Unix epoch
	DateHour = 28,
	/// Minutes since the Unix epoch
	DateMinute = 29,
	Ip = 30,
	Int128 = 31,
	Blob = 32,
	Complex = 34,
	Point = 35,
	Duration = 36,
	Decimal32 = 37,
	Decimal64 = 38,
	Decimal128 = 39,
	Object = 40,
}

/// Physical storage of one cell.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Repr {
	Void,
	I8,
	I16,
	I32,
	I64,
	F32,
	F64,
	Text,
	I128,
	Any,
}

const ARRAY_OFFSET: u8 = 64;
const SYMBOL_EXTEND_OFFSET: u8 = 128;

impl DataType {
	/// Decodes a wire type code. Array vector and symbol-extended codes are
	/// reduced to their element type.
	pub fn from_code(code: u8) -> Result<Self, TypeError> {
		let base = if code > SYMBOL_EXTEND_OFFSET {
			code - SYMBOL_EXTEND_OFFSET
		} else if code > ARRAY_OFFSET {
			code - ARRAY_OFFSET
		} else {
			code
		};

		let result = match base {
			0 => DataType::Void,
			1 => DataType::Bool,
			2 => DataType::Char,
			3 => DataType::Short,
			4 => DataType::Int,
			5 => DataType::Long,
			6 => DataType::Date,
			7 => DataType::Month,
			8 => DataType::Time,
			9 => DataType::Minute,
			10 => DataType::Second,
			11 => DataType::DateTime,
			12 => DataType::Timestamp,
			13 => DataType::NanoTime,
			14 => DataType::NanoTimestamp,
			15 => DataType::Float,
			16 => DataType::Double,
			17 => DataType::Symbol,
			18 => DataType::String,
			19 => DataType::Uuid,
			20 => DataType::Function,
			21 => DataType::Handle,
			22 => DataType::Code,
			23 => DataType::Datasource,
			24 => DataType::Resource,
			25 => DataType::Any,
			26 => DataType::Compress,
			27 => DataType::Dictionary,
			28 => DataType::DateHour,
			29 => DataType::DateMinute,
			30 => DataType::Ip,
			31 => DataType::Int128,
			32 => DataType::Blob,
			34 => DataType::Complex,
			35 => DataType::Point,
			36 => DataType::Duration,
			37 => DataType::Decimal32,
			38 => DataType::Decimal64,
			39 => DataType::Decimal128,
			40 => DataType::Object,
			_ => return Err(TypeError::UnknownTypeCode(code)),
		};

		Ok(result)
	}

	pub fn code(&self) -> u8 {
		*self as u8
	}

	pub fn category(&self) -> Category {
		match self {
			DataType::Time
			| DataType::Second
			| DataType::Minute
			| DataType::Date
			| DataType::DateTime
			| DataType::Month
			| DataType::Timestamp
			| DataType::NanoTime
			| DataType::NanoTimestamp
			| DataType::DateHour
			| DataType::DateMinute => Category::Temporal,
			DataType::Int | DataType::Long | DataType::Short | DataType::Char => Category::Integral,
			DataType::Bool => Category::Logical,
			DataType::Float | DataType::Double => Category::Floating,
			DataType::String | DataType::Symbol => Category::Literal,
			DataType::Int128 | DataType::Uuid | DataType::Ip => Category::Binary,
			DataType::Decimal32 | DataType::Decimal64 | DataType::Decimal128 => Category::Denary,
			DataType::Any => Category::Mixed,
			DataType::Void => Category::Nothing,
			_ => Category::System,
		}
	}

	/// Storage representation, `None` for types without a container form.
	pub fn repr(&self) -> Option<Repr> {
		let repr = match self {
			DataType::Void => Repr::Void,
			DataType::Bool | DataType::Char => Repr::I8,
			DataType::Short => Repr::I16,
			DataType::Int
			| DataType::Date
			| DataType::Month
			| DataType::Time
			| DataType::Minute
			| DataType::Second
			| DataType::DateTime
			| DataType::DateHour
			| DataType::DateMinute => Repr::I32,
			DataType::Long | DataType::Timestamp | DataType::NanoTime | DataType::NanoTimestamp => Repr::I64,
			DataType::Float => Repr::F32,
			DataType::Double => Repr::F64,
			DataType::String | DataType::Symbol | DataType::Code | DataType::Function | DataType::Handle => {
				Repr::Text
			}
			DataType::Uuid | DataType::Int128 | DataType::Ip => Repr::I128,
			DataType::Any => Repr::Any,
			_ => return None,
		};
		Some(repr)
	}

	pub fn is_temporal(&self) -> bool {
		self.category() == Category::Temporal
	}

	/// Temporal types that carry only a time of day.
	pub fn is_time_of_day(&self) -> bool {
		matches!(self, DataType::Time | DataType::Minute | DataType::Second | DataType::NanoTime)
	}

	pub fn name(&self) -> &'static str {
		match self {
			DataType::Void => "void",
			DataType::Bool => "bool",
			DataType::Char => "char",
			DataType::Short => "short",
			DataType::Int => "int",
			DataType::Long => "long",
			DataType::Date => "date",
			DataType::Month => "month",
			DataType::Time => "time",
			DataType::Minute => "minute",
			DataType::Second => "second",
			DataType::DateTime => "datetime",
			DataType::Timestamp => "timestamp",
			DataType::NanoTime => "nanotime",
			DataType::NanoTimestamp => "nanotimestamp",
			DataType::Float => "float",
			DataType::Double => "double",
			DataType::Symbol => "symbol",
			DataType::String => "string",
			DataType::Uuid => "uuid",
			DataType::Function => "function",
			DataType::Handle => "handle",
			DataType::Code => "code",
			DataType::Datasource => "datasource",
			DataType::Resource => "resource",
			DataType::Any => "any",
			DataType::Compress => "compress",
			DataType::Dictionary => "dictionary",
			DataType::DateHour => "datehour",
			DataType::DateMinute => "dateminute",
			DataType::Ip => "ipaddr",
			DataType::Int128 => "int128",
			DataType::Blob => "blob",
			DataType::Complex => "complex",
			DataType::Point => "point",
			DataType::Duration => "duration",
			DataType::Decimal32 => "decimal32",
			DataType::Decimal64 => "decimal64",
			DataType::Decimal128 => "decimal128",
			DataType::Object => "object",
		}
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for DataType {
	type Err = TypeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let lower = s.to_lowercase();
		(0..=40u8)
			.filter_map(|code| DataType::from_code(code).ok())
			.find(|ty| ty.name() == lower)
			.ok_or_else(|| TypeError::UnknownTypeName(s.to_string()))
	}
}

impl TryFrom<u8> for DataType {
	type Error = TypeError;

	fn try_from(code: u8) -> Result<Self, Self::Error> {
		DataType::from_code(code)
	}
}
