// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod form;
mod scalar;
pub mod temporal;
mod r#type;
mod vector;

pub use form::DataForm;
pub use r#type::{Category, DataType, Repr};
pub use scalar::{Scalar, Value};
pub use vector::{Vector, VectorData};
