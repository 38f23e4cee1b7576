#![forbid(unsafe_code)]
//! `chunkforge`: a parser and rewriter for a length-prefixed, CRC-chunked
//! raster container, plus a textbook RSA transform over its pixel payload.
//!
//! The crate is organized the way the container itself is read: byte-level
//! plumbing ([`endian`], [`ascii`], [`crc32`]) at the bottom, the chunk codec
//! ([`chunk`]) and [`container`] above it, the pixel pipeline ([`pixel`]) and
//! RSA cipher ([`crypto`]) as independent layers on top. [`ChunkForgeError`]
//! is the single error type threaded through all of them.

pub mod ascii;
pub mod chunk;
pub mod container;
pub mod crc32;
pub mod crypto;
pub mod endian;
pub mod error;
pub mod pixel;

use std::path::Path;

pub use container::{Container, WritePolicy};
pub use error::{ChunkForgeError, ChunkForgeResult};

/// Reads and parses a container from a file path.
pub fn open_container(path: impl AsRef<Path>) -> ChunkForgeResult<Container> {
  let bytes = std::fs::read(path)?;
  Container::open(&bytes)
}

/// Serializes `container` under `policy` and writes it to `path` in one
/// shot: the whole output is built in memory first, so a failure partway
/// through never leaves a truncated file behind.
pub fn write_container(container: &Container, path: impl AsRef<Path>, policy: &WritePolicy) -> ChunkForgeResult<()> {
  let bytes = container.write(policy);
  std::fs::write(path, bytes)?;
  Ok(())
}

/// Runs the pixel pipeline (concatenate, decompress, validate, defilter)
/// over a parsed container.
pub fn defilter(container: &Container) -> ChunkForgeResult<Vec<u8>> {
  pixel::defilter(container)
}

/// Builds a fresh container from a flat pixel buffer and writes it to
/// `path`. `trailing` is appended verbatim after the terminator segment.
pub fn encode_raster(
  width: u32,
  height: u32,
  color_type: u8,
  bit_depth: u8,
  pixels: &[u8],
  path: impl AsRef<Path>,
  trailing: Option<&[u8]>,
) -> ChunkForgeResult<()> {
  let bytes = pixel::encode_raster_bytes(width, height, color_type, bit_depth, pixels, trailing.unwrap_or(&[]))?;
  std::fs::write(path, bytes)?;
  Ok(())
}

/// Generates a fresh RSA key pair of bit length `k` using the system RNG.
#[must_use]
pub fn rsa_keypair(k: u64) -> crypto::KeyPair {
  crypto::KeyPair::generate(k, &mut rand::thread_rng())
}

pub use crypto::{decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb};
