//! Arbitrary-precision helpers the RSA primitive is built from: Miller-Rabin
//! primality, prime sampling in a fixed bit-width range, and modular
//! inverse via the extended Euclidean algorithm.

use num_bigint::{BigInt, BigUint, RandBigInt};
use num_integer::Integer;
use num_traits::{One, Zero};
use rand::Rng;

/// Rounds of Miller-Rabin witness testing. Not cryptographic-grade; chosen
/// to make false positives vanishingly unlikely for the bit sizes this
/// crate's test suite and CLI actually draw (64 to a few hundred bits).
const MILLER_RABIN_ROUNDS: u32 = 24;

/// Probabilistic primality test via Miller-Rabin with randomly chosen bases.
#[must_use]
pub fn is_probably_prime<R: Rng + ?Sized>(candidate: &BigUint, rng: &mut R) -> bool {
  let one = BigUint::one();
  let two = &one + &one;
  if *candidate < two {
    return false;
  }
  if *candidate == two {
    return true;
  }
  if candidate.is_even() {
    return false;
  }

  let n_minus_one = candidate - &one;
  let mut d = n_minus_one.clone();
  let mut r = 0u32;
  while d.is_even() {
    d >>= 1u32;
    r += 1;
  }

  'witness: for _ in 0..MILLER_RABIN_ROUNDS {
    let a = rng.gen_biguint_range(&two, &n_minus_one);
    let mut x = a.modpow(&d, candidate);
    if x == one || x == n_minus_one {
      continue;
    }
    for _ in 0..r.saturating_sub(1) {
      x = x.modpow(&two, candidate);
      if x == n_minus_one {
        continue 'witness;
      }
    }
    return false;
  }
  true
}

/// Draws a random prime with exactly `msb_bit + 1` bits: uniformly from
/// `[2^msb_bit, 2^(msb_bit+1) - 1]`.
#[must_use]
pub fn sample_prime_with_msb<R: Rng + ?Sized>(msb_bit: u64, rng: &mut R) -> BigUint {
  let low = BigUint::one() << msb_bit;
  let high = (BigUint::one() << (msb_bit + 1)) - BigUint::one();
  loop {
    let candidate = rng.gen_biguint_range(&low, &(&high + BigUint::one())) | BigUint::one();
    if is_probably_prime(&candidate, rng) {
      return candidate;
    }
  }
}

/// `e⁻¹ mod phi`, or `None` if `e` and `phi` aren't coprime.
#[must_use]
pub fn mod_inverse(e: &BigUint, phi: &BigUint) -> Option<BigUint> {
  let e_signed = BigInt::from(e.clone());
  let phi_signed = BigInt::from(phi.clone());
  let egcd = e_signed.extended_gcd(&phi_signed);
  if egcd.gcd != BigInt::one() {
    return None;
  }
  let mut inv = egcd.x % &phi_signed;
  if inv < BigInt::zero() {
    inv += &phi_signed;
  }
  inv.to_biguint()
}

/// Renders `value` as exactly `len` big-endian bytes: left-padded with zeros
/// if shorter, or truncated to its least-significant `len` bytes if longer.
#[must_use]
pub fn to_fixed_be(value: &BigUint, len: usize) -> Vec<u8> {
  let bytes = value.to_bytes_be();
  if bytes.len() >= len {
    bytes[bytes.len() - len..].to_vec()
  } else {
    let mut out = vec![0u8; len - bytes.len()];
    out.extend_from_slice(&bytes);
    out
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use rand::SeedableRng;
  use rand::rngs::StdRng;

  #[test]
  fn small_known_primes_pass() {
    let mut rng = StdRng::seed_from_u64(1);
    for p in [2u32, 3, 5, 7, 11, 104_729] {
      assert!(is_probably_prime(&BigUint::from(p), &mut rng), "{p} should be prime");
    }
  }

  #[test]
  fn small_known_composites_fail() {
    let mut rng = StdRng::seed_from_u64(2);
    for n in [1u32, 4, 6, 9, 15, 100] {
      assert!(!is_probably_prime(&BigUint::from(n), &mut rng), "{n} should be composite");
    }
  }

  #[test]
  fn sampled_primes_land_in_the_requested_bit_range() {
    let mut rng = StdRng::seed_from_u64(3);
    let p = sample_prime_with_msb(31, &mut rng);
    assert!(p >= BigUint::one() << 31u32);
    assert!(p <= (BigUint::one() << 32u32) - BigUint::one());
  }

  #[test]
  fn mod_inverse_round_trips() {
    let e = BigUint::from(17u32);
    let phi = BigUint::from(3120u32);
    let d = mod_inverse(&e, &phi).unwrap();
    assert_eq!((&e * &d) % &phi, BigUint::one());
  }

  #[test]
  fn fixed_width_encoding_pads_and_truncates() {
    assert_eq!(to_fixed_be(&BigUint::from(5u32), 3), vec![0, 0, 5]);
    assert_eq!(to_fixed_be(&BigUint::from(0x1_0005u32), 2), vec![0, 5]);
  }
}
