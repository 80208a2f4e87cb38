// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Partition routing for appends to partitioned tables.
//!
//! A table's partition scheme is resolved from its schema into a [`Domain`],
//! which maps every value of the partitioning column to the index of the
//! partition that owns it with the server's own semantics. A [`Router`] then
//! spreads the rows of a batch over writer workers by those indices.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
pub mod domain;
mod error;
mod resolve;
mod router;
mod scheme;
pub mod schema;

pub use config::PartitionConfig;
pub use domain::{Domain, HashDomain, ListDomain, RangeDomain, ValueDomain, create_domain, create_domain_with_config};
pub use error::{PartitionError, Result};
pub use resolve::effective_type;
pub use router::Router;
pub use schema::{Levels, PartitionLevel, PartitionSchema, check_columns};
pub use scheme::PartitionType;
