// File:    lib.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: The main library crate for bitkit-core, exposing random byte generation and bit-level file comparison.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! # Bitkit Core Library
//!
//! This library provides the two operations behind the bitkit command-line
//! tools: writing files of random bytes drawn from the operating system, and
//! counting how many bits differ between two equal-length files.

/// Bit-level comparison of byte buffers and files.
pub mod comparator;
/// Error types returned by the comparator.
pub mod error;
/// Random byte file generation.
pub mod generator;

pub use comparator::{BitDifference, compare_bytes, compare_files};
pub use error::{CompareError, Result};
pub use generator::generate_random_bytes;
