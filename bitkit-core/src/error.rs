// File:    error.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Error types for bit-level file comparison.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use thiserror::Error;

/// Errors that can occur while comparing two inputs.
#[derive(Error, Debug)]
pub enum CompareError {
    /// One of the input files could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The inputs do not have the same length, so they cannot be XORed.
    #[error(
        "length mismatch: first input is {left} bytes, second input is {right} bytes"
    )]
    LengthMismatch {
        /// Length of the first input in bytes.
        left: usize,
        /// Length of the second input in bytes.
        right: usize,
    },
}

/// Result type for comparison operations.
pub type Result<T> = std::result::Result<T, CompareError>;
