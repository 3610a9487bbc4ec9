#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
//! Lock-free generation of unique, time-ordered 64-bit timestamps.
//!
//! Every value packs whole milliseconds since the Unix epoch into the upper
//! 44 bits and a per-millisecond counter into the lower 20 bits:
//!
//! ```text
//!  Bit Index:  63                                  20 19              0
//!              +--------------------------------------+----------------+
//!  Field:      |        milliseconds since epoch (44) |   count (20)   |
//!              +--------------------------------------+----------------+
//! ```
//!
//! A [`TimestampGenerator`] owns a single atomic cursor and hands out values
//! with a compare-and-swap retry loop, so any number of threads may share one
//! instance without a lock.
//!
//! ```
//! use tickstamp::{TimestampGenerator, component_count, component_time};
//!
//! let generator = TimestampGenerator::new();
//! let a = generator.generate();
//! let b = generator.generate();
//!
//! assert!(b > a);
//! assert!(component_count(a) < (1 << 20));
//! assert!(component_time(b) >= component_time(a));
//! ```

mod error;
mod generator;
mod time;
mod timestamp;

pub use crate::error::*;
pub use crate::generator::*;
pub use crate::time::*;
pub use crate::timestamp::*;
