use crate::endian::ByteCursor;

/// Decoded background-color segment; the shape of the payload depends on the
/// image's color type, so the caller must supply it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Background {
  Gray(u16),
  Rgb { r: u16, g: u16, b: u16 },
  PaletteIndex(u8),
}

impl Background {
  pub fn parse(payload: &[u8], color_type: u8) -> Option<Self> {
    let mut c = ByteCursor::new(payload);
    match color_type {
      0 | 4 => Some(Self::Gray(c.take_u16_be()?)),
      2 | 6 => {
        let r = c.take_u16_be()?;
        let g = c.take_u16_be()?;
        let b = c.take_u16_be()?;
        Some(Self::Rgb { r, g, b })
      }
      3 => Some(Self::PaletteIndex(c.take_u8()?)),
      _ => None,
    }
  }
}
