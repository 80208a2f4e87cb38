// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::value::{DataType, Scalar, Vector};

/// A value in one of the forms a tuple element or schema entry may take.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DataForm {
	Scalar(Scalar),
	Vector(Vector),
}

impl DataForm {
	pub fn data_type(&self) -> DataType {
		match self {
			DataForm::Scalar(scalar) => scalar.data_type(),
			DataForm::Vector(vector) => vector.data_type(),
		}
	}

	pub fn as_scalar(&self) -> Option<&Scalar> {
		match self {
			DataForm::Scalar(scalar) => Some(scalar),
			DataForm::Vector(_) => None,
		}
	}

	pub fn as_vector(&self) -> Option<&Vector> {
		match self {
			DataForm::Scalar(_) => None,
			DataForm::Vector(vector) => Some(vector),
		}
	}
}

impl From<Scalar> for DataForm {
	fn from(scalar: Scalar) -> Self {
		DataForm::Scalar(scalar)
	}
}

impl From<Vector> for DataForm {
	fn from(vector: Vector) -> Self {
		DataForm::Vector(vector)
	}
}
