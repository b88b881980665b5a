// File:    comparator.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Computes the bit-level Hamming distance between two equal-length byte buffers or files.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

//! This module contains the bit comparison operations.

use crate::error::{CompareError, Result};
use log::debug;
use std::fmt;
use std::fs;
use std::path::Path;

/// The outcome of comparing two inputs bit by bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitDifference {
    differing_bits: u64,
    total_bits: u64,
}

impl BitDifference {
    /// Number of bit positions at which the inputs differ.
    #[must_use]
    pub const fn differing_bits(&self) -> u64 {
        self.differing_bits
    }

    /// Total number of bits compared, eight per input byte.
    #[must_use]
    pub const fn total_bits(&self) -> u64 {
        self.total_bits
    }

    /// Whether the inputs are bit-for-bit equal.
    #[must_use]
    pub const fn is_identical(&self) -> bool {
        self.differing_bits == 0
    }
}

impl fmt::Display for BitDifference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Files differ in {} out of {} bits",
            self.differing_bits, self.total_bits
        )
    }
}

/// Performs a byte-wise XOR between two slices.
///
/// # Errors
///
/// Returns [`CompareError::LengthMismatch`] if the slices are not of equal length.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>> {
    if a.len() != b.len() {
        return Err(CompareError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// Counts the set bits across a byte slice.
#[must_use]
pub fn count_set_bits(bytes: &[u8]) -> u64 {
    bytes.iter().map(|b| u64::from(b.count_ones())).sum()
}

/// Compares two in-memory buffers bit by bit.
///
/// # Errors
///
/// Returns [`CompareError::LengthMismatch`] if the buffers differ in length.
pub fn compare_bytes(a: &[u8], b: &[u8]) -> Result<BitDifference> {
    let diff = xor(a, b)?;
    let result = BitDifference {
        differing_bits: count_set_bits(&diff),
        total_bits: diff.len() as u64 * 8,
    };
    debug!(
        "Compared {} bytes: {} differing bits",
        diff.len(),
        result.differing_bits
    );
    Ok(result)
}

/// Reads two files fully into memory and compares them bit by bit.
///
/// # Arguments
///
/// * `file1` - Path to the first file.
/// * `file2` - Path to the second file.
///
/// # Errors
///
/// Returns [`CompareError::Io`] if either file cannot be read, and
/// [`CompareError::LengthMismatch`] if the files differ in length.
pub fn compare_files(file1: impl AsRef<Path>, file2: impl AsRef<Path>) -> Result<BitDifference> {
    let a = fs::read(file1.as_ref())?;
    let b = fs::read(file2.as_ref())?;
    compare_bytes(&a, &b)
}
