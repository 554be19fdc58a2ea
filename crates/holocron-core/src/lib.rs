//! Domain layer for holocron: planet operations and their error taxonomy,
//! orchestrating the storage crate.

pub mod planet;
