//! Range and prefix arithmetic.
//!
//! This module contains the conversion logic built on the unified 128-bit
//! space:
//! - [`convert`] - prefix to range conversion and the exact inverse
//! - [`covering`] - minimal CIDR decomposition of arbitrary ranges
//! - [`common`] - longest common prefix of two prefixes

mod common;
mod convert;
mod covering;

// Re-export public functions
pub use common::common_prefix;
pub use convert::prefix;
pub use convert::range;
pub use covering::{covering_prefixes, covering_prefixes_vec, CoveringPrefixes};
