//! Field catalog and value primitives for cohort targeting criteria
//!
//! This crate defines the schema side of the criteria engine:
//! - Declared field types and the descriptors that carry them
//! - The caller-supplied, ordered [`FieldCatalog`]
//! - The [`Value`] / [`Scalar`] types criteria compare against
//!
//! The catalog is supplied by the caller (e.g. sourced from a schema
//! description) and is never mutated by the engine.

mod catalog;
mod field;
mod value;

pub use catalog::*;
pub use field::*;
pub use value::*;
