//! Configuration types.

pub mod schema;

pub use schema::*;
