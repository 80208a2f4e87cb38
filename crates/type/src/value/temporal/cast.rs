// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::{
	error::{Result, TypeError},
	value::{
		DataType, Repr, Scalar, Vector, VectorData,
		temporal::calendar::{
			NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MILLI, NANOS_PER_MINUTE, NANOS_PER_SECOND, days_to_ymd,
			ymd_to_days,
		},
	},
};

/// Converts every element of a temporal column to `target`.
///
/// Date-carrying sources reach every temporal target: coarser targets
/// truncate toward negative infinity and time-of-day targets keep the time
/// within the day. Time-of-day sources reach only time-of-day targets. Month
/// sources start at the first day of the month. Tuple elements convert from
/// their own type, nulls stay null, and a value that overflows the target
/// fails the whole cast.
pub fn cast_temporal(column: &Vector, target: DataType) -> Result<Vector> {
	let cast_error = |from: DataType| TypeError::Cast {
		from,
		to: target,
	};

	if !target.is_temporal() {
		return Err(cast_error(column.data_type()));
	}

	let mut converted = Vec::with_capacity(column.len());
	for i in 0..column.len() {
		let scalar = column.get(i).ok_or_else(|| cast_error(column.data_type()))?;
		converted.push(cast_scalar(&scalar, target)?);
	}

	let narrowed = |narrow: fn(i128) -> bool| {
		converted.iter().all(|raw| raw.is_none_or(narrow))
	};
	let data = match target.repr() {
		Some(Repr::I32) if narrowed(|raw| narrow_i32(raw).is_some()) => {
			VectorData::I32(converted.iter().map(|raw| raw.map_or(i32::MIN, |raw| raw as i32)).collect())
		}
		Some(Repr::I64) if narrowed(|raw| narrow_i64(raw).is_some()) => {
			VectorData::I64(converted.iter().map(|raw| raw.map_or(i64::MIN, |raw| raw as i64)).collect())
		}
		_ => return Err(cast_error(column.data_type())),
	};

	Vector::new(target, data)
}

/// Raw target value of one scalar, `None` for null.
fn cast_scalar(scalar: &Scalar, target: DataType) -> Result<Option<i128>> {
	let from = scalar.data_type();
	let raw = match scalar.value().as_i64() {
		Some(raw) if from.is_temporal() => raw as i128,
		_ => {
			return Err(TypeError::Cast {
				from,
				to: target,
			});
		}
	};

	if scalar.is_null() {
		return Ok(None);
	}
	if from == target {
		return Ok(Some(raw));
	}

	let converted = if let Some(nanos) = epoch_nanos(from, raw) {
		from_epoch_nanos(target, nanos)
	} else if target.is_time_of_day() {
		day_nanos(from, raw).and_then(|nanos| from_day_nanos(target, nanos))
	} else {
		None
	};

	converted.map(Some).ok_or(TypeError::Cast {
		from,
		to: target,
	})
}

/// Nanoseconds since the Unix epoch of a date-carrying value.
fn epoch_nanos(from: DataType, raw: i128) -> Option<i128> {
	let nanos = match from {
		DataType::Date => raw * NANOS_PER_DAY,
		DataType::DateHour => raw * NANOS_PER_HOUR,
		DataType::DateMinute => raw * NANOS_PER_MINUTE,
		DataType::DateTime => raw * NANOS_PER_SECOND,
		DataType::Timestamp => raw * NANOS_PER_MILLI,
		DataType::NanoTimestamp => raw,
		DataType::Month => {
			let year = raw.div_euclid(12) as i64;
			let month = raw.rem_euclid(12) as u32 + 1;
			ymd_to_days(year, month, 1)? as i128 * NANOS_PER_DAY
		}
		_ => return None,
	};
	Some(nanos)
}

fn from_epoch_nanos(target: DataType, nanos: i128) -> Option<i128> {
	let raw = match target {
		DataType::Date => nanos.div_euclid(NANOS_PER_DAY),
		DataType::DateHour => nanos.div_euclid(NANOS_PER_HOUR),
		DataType::DateMinute => nanos.div_euclid(NANOS_PER_MINUTE),
		DataType::DateTime => nanos.div_euclid(NANOS_PER_SECOND),
		DataType::Timestamp => nanos.div_euclid(NANOS_PER_MILLI),
		DataType::NanoTimestamp => nanos,
		DataType::Month => {
			let days = i64::try_from(nanos.div_euclid(NANOS_PER_DAY)).ok()?;
			let (year, month, _) = days_to_ymd(days);
			year as i128 * 12 + month as i128 - 1
		}
		_ => return from_day_nanos(target, nanos.rem_euclid(NANOS_PER_DAY)),
	};
	Some(raw)
}

/// Nanoseconds since midnight of a time-of-day value.
fn day_nanos(from: DataType, raw: i128) -> Option<i128> {
	let nanos = match from {
		DataType::Time => raw * NANOS_PER_MILLI,
		DataType::Minute => raw * NANOS_PER_MINUTE,
		DataType::Second => raw * NANOS_PER_SECOND,
		DataType::NanoTime => raw,
		_ => return None,
	};
	Some(nanos)
}

fn from_day_nanos(target: DataType, nanos: i128) -> Option<i128> {
	let raw = match target {
		DataType::Time => nanos.div_euclid(NANOS_PER_MILLI),
		DataType::Minute => nanos.div_euclid(NANOS_PER_MINUTE),
		DataType::Second => nanos.div_euclid(NANOS_PER_SECOND),
		DataType::NanoTime => nanos,
		_ => return None,
	};
	Some(raw)
}

// The minimum of each width is the null sentinel, so it is out of range too.
fn narrow_i32(raw: i128) -> Option<i32> {
	i32::try_from(raw).ok().filter(|v| *v != i32::MIN)
}

fn narrow_i64(raw: i128) -> Option<i64> {
	i64::try_from(raw).ok().filter(|v| *v != i64::MIN)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::value::DataForm;

	const DAY_2022_01_01: i32 = 18993;
	const DATETIME_2022_01_01_010101: i32 = 1_640_998_861;

	#[test]
	fn test_datetime_to_date() {
		let column = Vector::datetime(vec![DATETIME_2022_01_01_010101]);
		let date = cast_temporal(&column, DataType::Date).unwrap();
		assert_eq!(date, Vector::date(vec![DAY_2022_01_01]));
	}

	#[test]
	fn test_timestamp_to_month_and_time() {
		let millis = DATETIME_2022_01_01_010101 as i64 * 1000 + 7;
		let column = Vector::timestamp(vec![millis]);

		let month = cast_temporal(&column, DataType::Month).unwrap();
		assert_eq!(month.get(0), Some(Scalar::month(2022 * 12)));

		let time = cast_temporal(&column, DataType::Time).unwrap();
		assert_eq!(time.get(0), Some(Scalar::time(3_661_007)));
	}

	#[test]
	fn test_before_epoch_floors() {
		let column = Vector::datetime(vec![-1]);
		let date = cast_temporal(&column, DataType::Date).unwrap();
		assert_eq!(date, Vector::date(vec![-1]));
	}

	#[test]
	fn test_date_to_finer() {
		let column = Vector::date(vec![DAY_2022_01_01]);
		let datetime = cast_temporal(&column, DataType::DateTime).unwrap();
		assert_eq!(datetime, Vector::datetime(vec![DAY_2022_01_01 * 86_400]));

		let nanos = cast_temporal(&column, DataType::NanoTimestamp).unwrap();
		assert_eq!(nanos.get(0), Some(Scalar::nanotimestamp(DAY_2022_01_01 as i64 * 86_400_000_000_000)));
	}

	#[test]
	fn test_month_to_date() {
		let column = Vector::new(DataType::Month, VectorData::I32(vec![2022 * 12 + 1])).unwrap();
		let date = cast_temporal(&column, DataType::Date).unwrap();
		assert_eq!(date, Vector::date(vec![DAY_2022_01_01 + 31]));
	}

	#[test]
	fn test_time_of_day_cannot_reach_dates() {
		let column = Vector::new(DataType::Second, VectorData::I32(vec![10])).unwrap();
		assert_eq!(
			cast_temporal(&column, DataType::Date),
			Err(TypeError::Cast {
				from: DataType::Second,
				to: DataType::Date,
			})
		);

		let minute = cast_temporal(&column, DataType::Minute).unwrap();
		assert_eq!(minute.get(0), Some(Scalar::minute(0)));
	}

	#[test]
	fn test_null_stays_null() {
		let column = Vector::datetime(vec![i32::MIN, DATETIME_2022_01_01_010101]);
		let date = cast_temporal(&column, DataType::Date).unwrap();
		assert_eq!(date, Vector::date(vec![i32::MIN, DAY_2022_01_01]));
	}

	#[test]
	fn test_tuple_elements_use_their_type() {
		let column = Vector::tuple(vec![
			DataForm::Scalar(Scalar::datetime(DATETIME_2022_01_01_010101)),
			DataForm::Scalar(Scalar::date(DAY_2022_01_01)),
		]);
		let date = cast_temporal(&column, DataType::Date).unwrap();
		assert_eq!(date, Vector::date(vec![DAY_2022_01_01, DAY_2022_01_01]));
	}

	#[test]
	fn test_non_temporal_fails() {
		let column = Vector::int(vec![1]);
		assert_eq!(
			cast_temporal(&column, DataType::Date),
			Err(TypeError::Cast {
				from: DataType::Int,
				to: DataType::Date,
			})
		);
		let column = Vector::date(vec![1]);
		assert!(cast_temporal(&column, DataType::Int).is_err());
	}

	#[test]
	fn test_overflow_fails() {
		let column = Vector::timestamp(vec![i64::MAX]);
		assert!(cast_temporal(&column, DataType::NanoTimestamp).is_err());
	}
}
