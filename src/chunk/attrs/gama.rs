use crate::endian::ByteCursor;

/// Decoded gamma segment: the stored integer divided by 100000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamma(pub f64);

impl Gamma {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    let raw = ByteCursor::new(payload).take_u32_be()?;
    Some(Self(f64::from(raw) / 100_000.0))
  }
}
