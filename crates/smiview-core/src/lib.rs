//! smiview-core: resolved type views over loaded SMI schema records.
//!
//! This crate consumes a schema record graph owned by an external loader and
//! produces self-contained type values:
//!
//! ```text
//! loader records → SchemaStore → TypeResolver → Type
//! ```
//!
//! The loader boundary is the read-only [`store::SchemaStore`] trait; the
//! crate itself is `no_std` compatible and IO-free.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod model;
pub mod resolver;
pub mod store;
