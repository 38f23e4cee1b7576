//! Textbook RSA key generation and the raw encrypt/decrypt primitive.

use num_bigint::{BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::One;
use rand::Rng;

use crate::crypto::bigint::{is_probably_prime, mod_inverse, sample_prime_with_msb};

/// An RSA key pair over a modulus built from two primes each drawn from
/// `[2^(k/2), 2^(k/2+1) - 1]` for the requested key size `k`.
///
/// This range is one bit wider than the textbook `[2^(k/2-1), 2^(k/2)]`
/// choice: the resulting modulus can run one or two bits past `k`, which is
/// why ciphertext blocks need an extra byte (see [`crate::crypto::ecb`]).
#[derive(Debug, Clone)]
pub struct KeyPair {
  pub n: BigUint,
  pub e: BigUint,
  pub d: BigUint,
  pub k: u64,
}

impl KeyPair {
  /// Generates a fresh key pair for bit length `k` (must be even).
  pub fn generate<R: Rng + ?Sized>(k: u64, rng: &mut R) -> Self {
    let half = k / 2;
    let p = sample_prime_with_msb(half, rng);
    let mut q = sample_prime_with_msb(half, rng);
    while q == p {
      q = sample_prime_with_msb(half, rng);
    }
    let n = &p * &q;
    let one = BigUint::one();
    let phi = (&p - &one) * (&q - &one);

    // Drawn from the full `[2^(k/2), phi)` range, not the same fixed-width
    // band p and q come from: p and q are deliberately eccentric (see the
    // struct doc), but e has no such requirement, and confining it to their
    // narrow band would leave almost the whole legal range of e unreachable.
    let low = BigUint::one() << half;
    let e = loop {
      let candidate = rng.gen_biguint_range(&low, &phi);
      if is_probably_prime(&candidate, rng) && candidate.gcd(&phi) == one {
        break candidate;
      }
    };
    let d = mod_inverse(&e, &phi).expect("e was drawn coprime to phi by construction");

    Self { n, e, d, k }
  }

  /// Plaintext block size in bytes: `k / 8`.
  #[inline]
  #[must_use]
  pub fn block_size(&self) -> usize {
    (self.k / 8) as usize
  }

  #[must_use]
  pub fn encrypt(&self, x: &BigUint) -> BigUint {
    x.modpow(&self.e, &self.n)
  }

  #[must_use]
  pub fn decrypt(&self, y: &BigUint) -> BigUint {
    y.modpow(&self.d, &self.n)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  #[test]
  fn encrypt_then_decrypt_is_the_identity() {
    let mut rng = StdRng::seed_from_u64(42);
    let kp = KeyPair::generate(64, &mut rng);
    let x = BigUint::from(12345u32);
    assert_eq!(kp.decrypt(&kp.encrypt(&x)), x);
  }

  #[test]
  fn block_size_is_k_over_eight() {
    let mut rng = StdRng::seed_from_u64(7);
    let kp = KeyPair::generate(256, &mut rng);
    assert_eq!(kp.block_size(), 32);
  }
}
