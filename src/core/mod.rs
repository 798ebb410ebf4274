//! Core building blocks: normalization parameters, RGBA conversion, exact
//! resize, and the single-sheet pipeline. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
