//! Taxonomy adapters. Implement TaxonomySource.

pub mod json_source;

pub use json_source::{JsonTaxonomySource, default_taxonomy, parse_taxonomy};
