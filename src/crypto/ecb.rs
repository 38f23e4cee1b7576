//! ECB mode: each plaintext block is enciphered independently, with one
//! overflow byte (or more, for the final short block) parked in a side
//! buffer since the RSA primitive's output is one byte wider than its input.

use num_bigint::BigUint;

use crate::crypto::bigint::to_fixed_be;
use crate::crypto::keys::KeyPair;

/// Encrypts `plaintext` under `key`, returning `(ciphertext, overflow)`.
/// `ciphertext.len() == plaintext.len()` always; the bytes that don't fit
/// are returned separately in `overflow`.
#[must_use]
pub fn encrypt_ecb(key: &KeyPair, plaintext: &[u8]) -> (Vec<u8>, Vec<u8>) {
  let b = key.block_size();
  let mut ciphertext = Vec::with_capacity(plaintext.len());
  let mut overflow = Vec::new();
  for block in plaintext.chunks(b) {
    let x = BigUint::from_bytes_be(block);
    let y = key.encrypt(&x);
    let y_bytes = to_fixed_be(&y, b + 1);
    let split = b + 1 - block.len();
    overflow.extend_from_slice(&y_bytes[..split]);
    ciphertext.extend_from_slice(&y_bytes[split..]);
  }
  (ciphertext, overflow)
}

/// The inverse of [`encrypt_ecb`]: walks `ciphertext` in the same `B`-byte
/// strides, reassembling each block's overflow byte(s) from `overflow`.
#[must_use]
pub fn decrypt_ecb(key: &KeyPair, ciphertext: &[u8], overflow: &[u8]) -> Vec<u8> {
  let b = key.block_size();
  let mut plaintext = Vec::with_capacity(ciphertext.len());
  let mut overflow_pos = 0;
  for block in ciphertext.chunks(b) {
    let split = b + 1 - block.len();
    let mut y_bytes = Vec::with_capacity(b + 1);
    y_bytes.extend_from_slice(&overflow[overflow_pos..overflow_pos + split]);
    y_bytes.extend_from_slice(block);
    overflow_pos += split;

    let y = BigUint::from_bytes_be(&y_bytes);
    let x = key.decrypt(&y);
    plaintext.extend_from_slice(&to_fixed_be(&x, block.len()));
  }
  plaintext
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  fn keypair(seed: u64, bits: u64) -> KeyPair {
    let mut rng = StdRng::seed_from_u64(seed);
    KeyPair::generate(bits, &mut rng)
  }

  #[test]
  fn ciphertext_length_matches_plaintext_length() {
    let key = keypair(1, 128);
    let plaintext = b"a sixty-five byte buffer, padded out with filler to hit that length!!";
    let (ciphertext, _) = encrypt_ecb(&key, plaintext);
    assert_eq!(ciphertext.len(), plaintext.len());
  }

  #[test]
  fn round_trips_a_sixty_five_byte_buffer_at_256_bits() {
    let key = keypair(2, 256);
    let mut plaintext = vec![0x78, 0x9C, 0x63, 0xE8];
    plaintext.extend((0..61).map(|i| i as u8));
    assert_eq!(plaintext.len(), 65);
    let (ciphertext, overflow) = encrypt_ecb(&key, &plaintext);
    assert_eq!(decrypt_ecb(&key, &ciphertext, &overflow), plaintext);
  }

  #[test]
  fn round_trips_across_several_key_sizes() {
    for bits in [64u64, 128, 256] {
      let key = keypair(bits, bits);
      let plaintext: Vec<u8> = (0..200u32).map(|i| (i * 7) as u8).collect();
      let (ciphertext, overflow) = encrypt_ecb(&key, &plaintext);
      assert_eq!(decrypt_ecb(&key, &ciphertext, &overflow), plaintext);
    }
  }

  #[test]
  fn empty_plaintext_round_trips_to_empty() {
    let key = keypair(9, 64);
    let (ciphertext, overflow) = encrypt_ecb(&key, &[]);
    assert!(ciphertext.is_empty());
    assert!(overflow.is_empty());
    assert_eq!(decrypt_ecb(&key, &ciphertext, &overflow), Vec::<u8>::new());
  }
}
