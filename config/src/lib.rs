//! # Config Crate
//!
//! Centralized configuration constants for the relief mesh pipeline.
//! All magic numbers and tunable parameters are defined here to ensure
//! consistency across crates and easy configuration management.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{LUMA_WEIGHT_RED, LUMA_WEIGHT_GREEN, LUMA_WEIGHT_BLUE};
//!
//! // The three luma weights sum to one, so a gray channel value maps to itself.
//! let sum = LUMA_WEIGHT_RED + LUMA_WEIGHT_GREEN + LUMA_WEIGHT_BLUE;
//! assert!((sum - 1.0).abs() < 1e-9);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Reproducible**: Luminosity weights are fixed so palette ordering is
//!   deterministic across builds and platforms
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
