use crate::endian::ByteCursor;

/// Decoded chromaticities segment: white point plus the three primaries,
/// each as an (x, y) pair already divided by 100000.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Chromaticities {
  pub white: (f64, f64),
  pub red: (f64, f64),
  pub green: (f64, f64),
  pub blue: (f64, f64),
}

impl Chromaticities {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    let mut c = ByteCursor::new(payload);
    let mut next = || -> Option<f64> { Some(f64::from(c.take_u32_be()?) / 100_000.0) };
    let white = (next()?, next()?);
    let red = (next()?, next()?);
    let green = (next()?, next()?);
    let blue = (next()?, next()?);
    Some(Self { white, red, green, blue })
  }
}
