// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Bucket hashing compatible with the server's partitioning hash.
//!
//! Integral values bucket by remainder, text and 128-bit values by
//! MurmurHash2. Null sentinels land in bucket `-1`.

use crate::value::{DataType, Value};

const M: u32 = 0x5bd1e995;
const R: u32 = 24;
const INT128_SEED: u32 = 16;
const TWO_POW_32: i64 = 4_294_967_296;

pub(crate) fn bucket(data_type: DataType, value: &Value, buckets: u32) -> i32 {
	if buckets == 0 {
		return -1;
	}

	match data_type {
		DataType::Float | DataType::Complex | DataType::Point => -1,
		DataType::Int
		| DataType::Date
		| DataType::Time
		| DataType::Month
		| DataType::Minute
		| DataType::Second
		| DataType::DateHour
		| DataType::DateMinute
		| DataType::DateTime => match value {
			Value::I32(v) => bucket_i32(*v, buckets),
			_ => 0,
		},
		DataType::Char => match value {
			Value::I8(v) => bucket_narrow(*v as i64, *v == i8::MIN, buckets),
			_ => 0,
		},
		DataType::Short => match value {
			Value::I16(v) => bucket_narrow(*v as i64, *v == i16::MIN, buckets),
			_ => 0,
		},
		DataType::Long | DataType::Timestamp | DataType::NanoTime | DataType::NanoTimestamp => match value {
			Value::I64(v) => bucket_i64(*v, buckets),
			_ => 0,
		},
		DataType::String | DataType::Symbol => match value {
			Value::Text(v) => bucket_text(v, buckets),
			_ => 0,
		},
		DataType::Int128 | DataType::Ip | DataType::Uuid => match value {
			Value::I128(v) => bucket_i128(*v, buckets),
			_ => 0,
		},
		_ => 0,
	}
}

pub(crate) fn bucket_i32(value: i32, buckets: u32) -> i32 {
	bucket_narrow(value as i64, value == i32::MIN, buckets)
}

fn bucket_narrow(value: i64, null: bool, buckets: u32) -> i32 {
	let buckets = buckets as i64;
	if value >= 0 {
		(value % buckets) as i32
	} else if null {
		-1
	} else {
		((value + TWO_POW_32) % buckets) as i32
	}
}

pub(crate) fn bucket_i64(value: i64, buckets: u32) -> i32 {
	let buckets = buckets as i64;
	if value >= 0 {
		(value % buckets) as i32
	} else if value == i64::MIN {
		-1
	} else {
		(((i64::MAX % buckets) + 2 + ((i64::MAX + value) % buckets)) % buckets) as i32
	}
}

pub(crate) fn bucket_text(value: &str, buckets: u32) -> i32 {
	(murmur_text(value) % buckets) as i32
}

pub(crate) fn bucket_i128(value: u128, buckets: u32) -> i32 {
	let low = value as u64;
	let high = (value >> 64) as u64;

	let mut h = INT128_SEED;
	for word in [low as u32, (low >> 32) as u32, high as u32, (high >> 32) as u32] {
		h = mix(word, h);
	}

	(finalize(h) % buckets) as i32
}

fn murmur_text(value: &str) -> u32 {
	let bytes = modified_utf8(value);
	let mut h = bytes.len() as u32;

	let mut chunks = bytes.chunks_exact(4);
	for chunk in &mut chunks {
		let k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
		h = mix(k, h);
	}

	let tail = chunks.remainder();
	if !tail.is_empty() {
		let k = tail.iter().enumerate().fold(0u32, |k, (i, b)| k | (*b as u32) << (8 * i));
		h ^= k;
		h = h.wrapping_mul(M);
	}

	finalize(h)
}

// NUL takes two bytes and every char is at most three bytes wide, matching
// the encoding the server hashes.
fn modified_utf8(value: &str) -> Vec<u8> {
	let mut bytes = Vec::with_capacity(value.len());
	for c in value.chars() {
		let c = c as u32;
		match c {
			0x01..=0x7f => bytes.push(c as u8),
			0x00 | 0x80..=0x7ff => {
				bytes.push((0xc0 | (0x1f & (c >> 6))) as u8);
				bytes.push((0x80 | (0x3f & c)) as u8);
			}
			_ => {
				bytes.push((0xe0 | (0x0f & (c >> 12))) as u8);
				bytes.push((0x80 | (0x3f & (c >> 6))) as u8);
				bytes.push((0x80 | (0x3f & c)) as u8);
			}
		}
	}
	bytes
}

#[inline]
fn mix(k: u32, h: u32) -> u32 {
	let mut k = k.wrapping_mul(M);
	k ^= k >> R;
	k = k.wrapping_mul(M);
	h.wrapping_mul(M) ^ k
}

#[inline]
fn finalize(mut h: u32) -> u32 {
	h ^= h >> 13;
	h = h.wrapping_mul(M);
	h ^= h >> 15;
	h
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_int_bucket() {
		assert_eq!(bucket_i32(18993, 10), 3);
		assert_eq!(bucket_i32(18993, 1 << 20), 18993);
		assert_eq!(bucket_i32(i32::MIN, 10), -1);
		// -1 + 2^32 = 4294967295
		assert_eq!(bucket_i32(-1, 10), 5);
	}

	#[test]
	fn test_long_bucket() {
		assert_eq!(bucket_i64(25, 7), 4);
		assert_eq!(bucket_i64(i64::MIN, 7), -1);
		// (MAX % 7) + 2 + ((MAX - 1) % 7) = 0 + 2 + 6
		assert_eq!(bucket_i64(-1, 7), 1);
	}

	#[test]
	fn test_narrow_bucket() {
		assert_eq!(bucket(DataType::Short, &Value::I16(i16::MIN), 10), -1);
		assert_eq!(bucket(DataType::Char, &Value::I8(97), 10), 7);
		assert_eq!(bucket(DataType::Char, &Value::I8(-2), 10), 4);
	}

	#[test]
	fn test_untyped_buckets() {
		assert_eq!(bucket(DataType::Float, &Value::F32(1.5), 10), -1);
		assert_eq!(bucket(DataType::Double, &Value::F64(1.5), 10), 0);
		assert_eq!(bucket(DataType::Bool, &Value::I8(1), 10), 0);
		assert_eq!(bucket(DataType::Int, &Value::I32(5), 0), -1);
	}

	#[test]
	fn test_modified_utf8() {
		assert_eq!(modified_utf8("ab"), vec![b'a', b'b']);
		assert_eq!(modified_utf8("\0"), vec![0xc0, 0x80]);
		assert_eq!(modified_utf8("é"), "é".as_bytes().to_vec());
		assert_eq!(modified_utf8("中"), "中".as_bytes().to_vec());
	}

	#[test]
	fn test_text_bucket_range() {
		for s in ["", "a", "domain", "sample", "zero", "héllo wörld", "\0x"] {
			let b = bucket_text(s, 13);
			assert!((0..13).contains(&b), "{s} -> {b}");
		}
	}

	const SERVER_BUCKETS: [u32; 5] = [13, 43, 71, 97, 4097];

	// expected holds one row per bucket count, one column per value
	fn assert_server_buckets(data_type: DataType, values: &[Value], expected: &[i32]) {
		assert_eq!(expected.len(), values.len() * SERVER_BUCKETS.len());
		for (row, buckets) in SERVER_BUCKETS.into_iter().enumerate() {
			for (column, value) in values.iter().enumerate() {
				assert_eq!(
					bucket(data_type, value, buckets),
					expected[row * values.len() + column],
					"{data_type} {value:?} in {buckets} buckets"
				);
			}
		}
	}

	#[test]
	fn test_server_char_buckets() {
		let values = [127, -127, 12, 0, i8::MIN].map(Value::I8);
		let expected = [
			10, 12, 12, 0, -1,
			41, 18, 12, 0, -1,
			56, 24, 12, 0, -1,
			30, 5, 12, 0, -1,
			127, 129, 12, 0, -1,
		];
		assert_server_buckets(DataType::Char, &values, &expected);
	}

	#[test]
	fn test_server_short_buckets() {
		let values = [32767, -32767, 12, 0, -12].map(Value::I16);
		let expected = [
			7, 2, 12, 0, 10,
			1, 15, 12, 0, 4,
			36, 44, 12, 0, 68,
			78, 54, 12, 0, 23,
			4088, 265, 12, 0, 244,
		];
		assert_server_buckets(DataType::Short, &values, &expected);
	}

	#[test]
	fn test_server_int_buckets() {
		let values = [i32::MAX, -i32::MAX, 99, 0, -12].map(Value::I32);
		let expected = [
			10, 12, 8, 0, 10,
			7, 9, 13, 0, 4,
			39, 41, 28, 0, 68,
			65, 67, 2, 0, 23,
			127, 129, 99, 0, 244,
		];
		assert_server_buckets(DataType::Int, &values, &expected);
	}

	#[test]
	fn test_server_long_buckets() {
		let values = [i64::MAX, -i64::MAX, 12, 0, -12].map(Value::I64);
		let expected = [
			7, 9, 12, 0, 4,
			41, 0, 12, 0, 29,
			4, 6, 12, 0, 69,
			78, 80, 12, 0, 49,
			4088, 4090, 12, 0, 4069,
		];
		assert_server_buckets(DataType::Long, &values, &expected);
	}

	#[test]
	fn test_server_string_buckets() {
		let values = [
			"!@#$%^&*()",
			"我是中文测试内容",
			"我是!@#$%^中文&*()",
			"e1281ls.zxl.d.,cxnv./';'sla",
			"abckdlskdful",
			"",
		]
		.map(|s| Value::Text(s.to_string()));
		let expected = [
			8, 11, 9, 12, 1, 0,
			25, 3, 40, 28, 18, 0,
			31, 14, 49, 8, 48, 0,
			52, 92, 54, 4, 47, 0,
			3892, 1574, 148, 3118, 1732, 0,
		];
		assert_server_buckets(DataType::String, &values, &expected);
		assert_server_buckets(DataType::Symbol, &values, &expected);
	}

	#[test]
	fn test_server_int128_buckets() {
		let values = [
			"4b7545dc735379254fbf804dec34977f",
			"6f29ffbf80722c9fd386c6e48ca96340",
			"dd92685907f08a99ec5f8235c15a1588",
			"4f5387611b41d1385e272e6e866f862d",
			"130d6d5a0536c99ac7f9a01363b107c0",
		]
		.map(|hex| Value::I128(u128::from_str_radix(hex, 16).unwrap()));
		let expected = [
			11, 6, 2, 3, 6,
			42, 6, 30, 10, 32,
			7, 47, 48, 31, 44,
			15, 45, 75, 49, 44,
			1116, 3479, 4032, 2053, 3150,
		];
		assert_server_buckets(DataType::Int128, &values, &expected);
		assert_server_buckets(DataType::Uuid, &values, &expected);
	}

	#[test]
	fn test_dateminute_buckets_like_int() {
		// 2022.01.01T01:01 as minutes since the epoch
		let minutes = 18993 * 1440 + 61;
		assert_eq!(bucket(DataType::DateMinute, &Value::I32(minutes), 10), 1);
		assert_eq!(bucket(DataType::DateMinute, &Value::I32(-1), 10), 5);
		assert_eq!(bucket(DataType::DateMinute, &Value::I32(i32::MIN), 10), -1);
		for value in [0, 7, 59, minutes, -1, -12] {
			assert_eq!(bucket(DataType::DateMinute, &Value::I32(value), 43), bucket_i32(value, 43));
		}
	}
}
