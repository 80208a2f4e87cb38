// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::value::{
	DataType,
	temporal::calendar::{NANOS_PER_DAY, NANOS_PER_HOUR, NANOS_PER_MILLI, NANOS_PER_MINUTE, NANOS_PER_SECOND, days_to_ymd},
};

/// Server text form of a non-null temporal raw value.
pub(crate) fn render(data_type: DataType, raw: i64) -> String {
	let raw = raw as i128;
	match data_type {
		DataType::Date => date(raw),
		DataType::Month => format!("{:04}.{:02}M", raw.div_euclid(12), raw.rem_euclid(12) + 1),
		DataType::Time => {
			let (h, m, s, ns) = clock(raw * NANOS_PER_MILLI);
			format!("{h:02}:{m:02}:{s:02}.{:03}", ns / NANOS_PER_MILLI)
		}
		DataType::Minute => {
			let (h, m, _, _) = clock(raw * NANOS_PER_MINUTE);
			format!("{h:02}:{m:02}m")
		}
		DataType::Second => {
			let (h, m, s, _) = clock(raw * NANOS_PER_SECOND);
			format!("{h:02}:{m:02}:{s:02}")
		}
		DataType::NanoTime => {
			let (h, m, s, ns) = clock(raw);
			format!("{h:02}:{m:02}:{s:02}.{ns:09}")
		}
		DataType::DateHour => {
			let nanos = raw * NANOS_PER_HOUR;
			let (h, _, _, _) = clock(nanos);
			format!("{}T{h:02}", date(nanos.div_euclid(NANOS_PER_DAY)))
		}
		DataType::DateMinute => {
			let nanos = raw * NANOS_PER_MINUTE;
			let (h, m, _, _) = clock(nanos);
			format!("{}T{h:02}:{m:02}", date(nanos.div_euclid(NANOS_PER_DAY)))
		}
		DataType::DateTime => {
			let nanos = raw * NANOS_PER_SECOND;
			let (h, m, s, _) = clock(nanos);
			format!("{}T{h:02}:{m:02}:{s:02}", date(nanos.div_euclid(NANOS_PER_DAY)))
		}
		DataType::Timestamp => {
			let nanos = raw * NANOS_PER_MILLI;
			let (h, m, s, ns) = clock(nanos);
			format!("{}T{h:02}:{m:02}:{s:02}.{:03}", date(nanos.div_euclid(NANOS_PER_DAY)), ns / NANOS_PER_MILLI)
		}
		DataType::NanoTimestamp => {
			let (h, m, s, ns) = clock(raw);
			format!("{}T{h:02}:{m:02}:{s:02}.{ns:09}", date(raw.div_euclid(NANOS_PER_DAY)))
		}
		_ => raw.to_string(),
	}
}

fn date(days: i128) -> String {
	let (y, m, d) = days_to_ymd(days as i64);
	format!("{y:04}.{m:02}.{d:02}")
}

/// Hour, minute, second and sub-second nanos of the time of day.
fn clock(nanos: i128) -> (i128, i128, i128, i128) {
	let of_day = nanos.rem_euclid(NANOS_PER_DAY);
	(
		of_day / NANOS_PER_HOUR,
		of_day % NANOS_PER_HOUR / NANOS_PER_MINUTE,
		of_day % NANOS_PER_MINUTE / NANOS_PER_SECOND,
		of_day % NANOS_PER_SECOND,
	)
}
