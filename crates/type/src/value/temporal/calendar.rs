// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Proleptic Gregorian calendar arithmetic on days since 1970-01-01.

pub(crate) const NANOS_PER_MILLI: i128 = 1_000_000;
pub(crate) const NANOS_PER_SECOND: i128 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i128 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i128 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i128 = 24 * NANOS_PER_HOUR;

#[inline]
fn is_leap_year(year: i64) -> bool {
	(year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[inline]
fn days_in_month(year: i64, month: u32) -> u32 {
	match month {
		1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
		4 | 6 | 9 | 11 => 30,
		2 => {
			if is_leap_year(year) {
				29
			} else {
				28
			}
		}
		_ => 0,
	}
}

/// Days since 1970-01-01 for a calendar date, `None` if the date does not exist.
pub(crate) fn ymd_to_days(year: i64, month: u32, day: u32) -> Option<i64> {
	if !(1..=12).contains(&month) || day < 1 || day > days_in_month(year, month) {
		return None;
	}

	// March-based year so the leap day falls at the end
	let (y, m) = if month <= 2 {
		(year - 1, month as i64 + 9)
	} else {
		(year, month as i64 - 3)
	};

	let era = y.div_euclid(400);
	let yoe = y - era * 400; // [0, 399]
	let doy = (153 * m + 2) / 5 + day as i64 - 1; // [0, 365]
	let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy; // [0, 146096]

	Some(era * 146097 + doe - 719468)
}

/// Calendar date of a day count since 1970-01-01.
pub(crate) fn days_to_ymd(days: i64) -> (i64, u32, u32) {
	let days_since_ce = days + 719468;

	let era = days_since_ce.div_euclid(146097);
	let doe = days_since_ce - era * 146097; // [0, 146096]
	let yoe = (doe - doe / 1460 + doe / 36524 - doe / 146096) / 365; // [0, 399]
	let y = yoe + era * 400;
	let doy = doe - (365 * yoe + yoe / 4 - yoe / 100); // [0, 365]
	let mp = (5 * doy + 2) / 153; // [0, 11]
	let d = doy - (153 * mp + 2) / 5 + 1; // [1, 31]
	let m = if mp < 10 {
		mp + 3
	} else {
		mp - 9
	}; // [1, 12]
	let year = if m <= 2 {
		y + 1
	} else {
		y
	};

	(year, m as u32, d as u32)
}
