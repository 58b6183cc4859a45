//! High-level entry point: [`PhotoConverter`].

mod builder;

pub use builder::PhotoConverter;
