//! CBC mode layered on the same RSA primitive and overflow-byte bookkeeping
//! as ECB, chained through a running "previous ciphertext" register seeded
//! from a random IV.

use num_bigint::BigUint;
use rand::Rng;

use crate::crypto::bigint::{sample_prime_with_msb, to_fixed_be};
use crate::crypto::keys::KeyPair;

fn xor_bytes(a: &[u8], b: &[u8]) -> Vec<u8> {
  a.iter().zip(b).map(|(x, y)| x ^ y).collect()
}

/// Encrypts `plaintext` under `key` in CBC mode, drawing a fresh IV from
/// `rng`. Returns `(ciphertext, overflow)`; `overflow`'s first `B+1` bytes
/// are the serialized IV, followed by the per-block overflow bytes in the
/// same shape as [`super::ecb::encrypt_ecb`].
#[must_use]
pub fn encrypt_cbc<R: Rng + ?Sized>(key: &KeyPair, plaintext: &[u8], rng: &mut R) -> (Vec<u8>, Vec<u8>) {
  let b = key.block_size();
  let iv = sample_prime_with_msb(key.k / 2, rng);
  let iv_bytes = to_fixed_be(&iv, b + 1);

  let mut ciphertext = Vec::with_capacity(plaintext.len());
  let mut overflow = iv_bytes.clone();
  let mut previous = iv_bytes[1..].to_vec();

  for block in plaintext.chunks(b) {
    let xored = xor_bytes(block, &previous[..block.len()]);
    let x = BigUint::from_bytes_be(&xored);
    let y = key.encrypt(&x);
    let y_bytes = to_fixed_be(&y, b + 1);

    let split = b + 1 - block.len();
    overflow.extend_from_slice(&y_bytes[..split]);
    ciphertext.extend_from_slice(&y_bytes[split..]);
    previous = y_bytes[1..].to_vec();
  }
  (ciphertext, overflow)
}

/// The inverse of [`encrypt_cbc`].
#[must_use]
pub fn decrypt_cbc(key: &KeyPair, ciphertext: &[u8], overflow: &[u8]) -> Vec<u8> {
  let b = key.block_size();
  let iv_bytes = &overflow[..b + 1];
  let mut previous = iv_bytes[1..].to_vec();
  let mut overflow_pos = b + 1;

  let mut plaintext = Vec::with_capacity(ciphertext.len());
  for block in ciphertext.chunks(b) {
    let split = b + 1 - block.len();
    let mut y_bytes = Vec::with_capacity(b + 1);
    y_bytes.extend_from_slice(&overflow[overflow_pos..overflow_pos + split]);
    y_bytes.extend_from_slice(block);
    overflow_pos += split;

    let y = BigUint::from_bytes_be(&y_bytes);
    let x = key.decrypt(&y);
    let x_bytes = to_fixed_be(&x, block.len());
    plaintext.extend_from_slice(&xor_bytes(&x_bytes, &previous[..block.len()]));
    previous = y_bytes[1..].to_vec();
  }
  plaintext
}
