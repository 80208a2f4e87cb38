// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub(crate) mod calendar;
pub mod cast;
pub(crate) mod format;
