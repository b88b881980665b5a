// File:    generator.rs
// Author:  apezoo
// Date:    2026-10-18
//
// Description: Writes files filled with random bytes drawn from the operating system.
//
// License:
// This project is licensed under the terms of the GNU AGPLv3 license.
// See the LICENSE.md file in the project root for full license information.

use log::debug;
use rand::{TryRngCore, rngs::OsRng};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Draws `num_bytes` random bytes from the operating system.
///
/// # Errors
///
/// Returns an error if the operating system random source is unavailable.
pub fn random_bytes(num_bytes: usize) -> std::io::Result<Vec<u8>> {
    let mut rng = OsRng;
    let mut buffer = vec![0u8; num_bytes];
    rng.try_fill_bytes(&mut buffer)
        .map_err(std::io::Error::other)?;
    Ok(buffer)
}

/// Writes a file containing exactly `num_bytes` random bytes.
///
/// Any existing file at `path` is truncated and overwritten. A count of zero
/// leaves an empty file behind.
///
/// # Arguments
///
/// * `path` - The path where the file will be created.
/// * `num_bytes` - The number of random bytes to write.
///
/// # Errors
///
/// This function will return an error if the random source fails or if the
/// file cannot be created or written to. I/O errors are returned unchanged.
pub fn generate_random_bytes(path: impl AsRef<Path>, num_bytes: usize) -> std::io::Result<()> {
    let path = path.as_ref();
    let buffer = random_bytes(num_bytes)?;

    let mut file = File::create(path)?;
    file.write_all(&buffer)?;
    debug!("Wrote {num_bytes} random bytes to '{}'", path.display());

    Ok(())
}
