//! Conversions between CIDR prefixes and inclusive IP address ranges.
//!
//! IPv4 and IPv6 are handled uniformly: every calculation runs in a single
//! 128-bit address space with IPv4 embedded in the low 32 bits (prefix
//! lengths shifted by 96), and results come back out in the family they
//! went in with. On top of that sit four operations:
//!
//! - [`range`] - the inclusive `[first, last]` range of a prefix
//! - [`prefix`] - the exact prefix for a range, if the range is one block
//! - [`covering_prefixes`] - minimal CIDR decomposition of any range
//! - [`common_prefix`] - longest prefix contained in two prefixes
//!
//! Invalid input (mixed address families, reversed ranges) produces empty
//! results rather than errors; only [`Prefix`] construction is fallible.
//!
//! # Examples
//! ```
//! use cidr_ranges::{covering_prefixes, prefix, range, Prefix};
//! use std::net::IpAddr;
//!
//! let p = Prefix::new("10.0.0.0/8")?;
//! let (first, last) = range(&p);
//! assert_eq!(prefix(first, last), Some(p));
//!
//! let last: IpAddr = "11.10.255.255".parse()?;
//! let covering: Vec<String> = covering_prefixes(first, last)
//!     .map(|p| p.to_string())
//!     .collect();
//! assert_eq!(
//!     covering,
//!     ["10.0.0.0/8", "11.0.0.0/13", "11.8.0.0/15", "11.10.0.0/16"]
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod models;
pub mod processing;

pub use models::{max_length, Prefix, Uint128, UnifiedAddr, MAX_LENGTH_V4, MAX_LENGTH_V6};
pub use processing::{
    common_prefix, covering_prefixes, covering_prefixes_vec, prefix, range, CoveringPrefixes,
};
