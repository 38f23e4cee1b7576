//! Cipher-inverse and shape properties for the RSA block-cipher modes,
//! independent of the container/pixel layers.

use chunkforge::crypto::{decrypt_cbc, decrypt_ecb, encrypt_cbc, encrypt_ecb, KeyPair};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn key(seed: u64, bits: u64) -> KeyPair {
  let mut rng = StdRng::seed_from_u64(seed);
  KeyPair::generate(bits, &mut rng)
}

#[test]
fn ecb_round_trips_at_every_tested_key_size() {
  for (seed, bits) in [(100u64, 64u64), (101, 128), (102, 256)] {
    let k = key(seed, bits);
    let plaintext: Vec<u8> = (0..90u32).map(|i| (i * 13 + 1) as u8).collect();
    let (ciphertext, overflow) = encrypt_ecb(&k, &plaintext);
    assert_eq!(ciphertext.len(), plaintext.len(), "ciphertext must match plaintext length at {bits} bits");
    assert_eq!(decrypt_ecb(&k, &ciphertext, &overflow), plaintext);
  }
}

#[test]
fn cbc_round_trips_at_every_tested_key_size() {
  for (seed, bits) in [(200u64, 64u64), (201, 128), (202, 256)] {
    let k = key(seed, bits);
    let plaintext: Vec<u8> = (0..90u32).map(|i| (i * 17 + 3) as u8).collect();
    let mut rng = StdRng::seed_from_u64(seed + 1000);
    let (ciphertext, overflow) = encrypt_cbc(&k, &plaintext, &mut rng);
    assert_eq!(decrypt_cbc(&k, &ciphertext, &overflow), plaintext);
  }
}

#[test]
fn sixty_five_byte_buffer_round_trips_under_a_256_bit_key() {
  let k = key(256, 256);
  let mut plaintext = vec![0x78u8, 0x9C, 0x63, 0xE8];
  plaintext.extend((0..61u32).map(|i| i as u8));
  assert_eq!(plaintext.len(), 65);
  let (ciphertext, overflow) = encrypt_ecb(&k, &plaintext);
  assert_eq!(decrypt_ecb(&k, &ciphertext, &overflow), plaintext);
}

#[test]
fn cbc_double_encryption_yields_distinct_ciphertexts_that_both_decrypt_correctly() {
  let k = key(303, 128);
  let plaintext = b"two independent IVs should never collide in practice".to_vec();
  let mut rng_a = StdRng::seed_from_u64(1);
  let mut rng_b = StdRng::seed_from_u64(2);
  let (ct_a, of_a) = encrypt_cbc(&k, &plaintext, &mut rng_a);
  let (ct_b, of_b) = encrypt_cbc(&k, &plaintext, &mut rng_b);
  assert_ne!(ct_a, ct_b);
  assert_ne!(of_a, of_b);
  assert_eq!(decrypt_cbc(&k, &ct_a, &of_a), plaintext);
  assert_eq!(decrypt_cbc(&k, &ct_b, &of_b), plaintext);
}

#[test]
fn ciphertext_length_always_equals_plaintext_length() {
  let k = key(404, 128);
  for len in [0usize, 1, 15, 16, 17, 64, 200] {
    let plaintext: Vec<u8> = (0..len as u32).map(|i| i as u8).collect();
    let (ciphertext, _) = encrypt_ecb(&k, &plaintext);
    assert_eq!(ciphertext.len(), len);
  }
}
