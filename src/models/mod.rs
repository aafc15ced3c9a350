//! Value types for the range calculations.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Uint128`] - 128-bit unsigned integer as two 64-bit halves
//! - [`UnifiedAddr`] - an IP address embedded in the unified 128-bit space
//! - [`Prefix`] - IP prefix in CIDR notation for IPv4 and IPv6

mod addr;
mod prefix;
mod uint128;

// Re-export public types
pub use addr::UnifiedAddr;
pub use prefix::{max_length, Prefix, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use uint128::{Uint128, MAX_BITS};
