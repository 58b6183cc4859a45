//! Inkframe - photos for 7-color e-ink picture frames
//!
//! Command line front end for the `eink-photo` pipeline: configuration,
//! file I/O and logging. This library exposes modules for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
