use crate::endian::{ByteCursor, U16BE};

/// Decoded last-modification-time segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timestamp {
  pub year: U16BE,
  pub month: u8,
  pub day: u8,
  pub hour: u8,
  pub minute: u8,
  pub second: u8,
}

impl Timestamp {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    let mut c = ByteCursor::new(payload);
    let year = U16BE::from_u16(c.take_u16_be()?);
    let month = c.take_u8()?;
    let day = c.take_u8()?;
    let hour = c.take_u8()?;
    let minute = c.take_u8()?;
    let second = c.take_u8()?;
    Some(Self { year, month, day, hour, minute, second })
  }
}
