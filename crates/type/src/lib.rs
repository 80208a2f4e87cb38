// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Value containers for the partition routing layer.
//!
//! This crate holds the slice of the server's type system that routing needs:
//! - [`DataType`] codes and their [`Category`]
//! - [`Scalar`] and [`Vector`] containers storing values in the server's native
//!   width, null sentinels included
//! - server-compatible hash bucketing, as-of search and canonical strings
//! - temporal unit casts via [`cast_temporal`]

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
mod hash;
pub mod value;

pub use error::{Result, TypeError};
pub use value::{
	Category, DataForm, DataType, Repr, Scalar, Value, Vector, VectorData, temporal::cast::cast_temporal,
};
