use crate::endian::{ByteCursor, U32BE};

/// Decoded header segment: the image's geometry and encoding parameters.
///
/// `width`/`height` are kept as [`U32BE`] rather than plain `u32`: this is
/// the field layout the wire actually has, and callers that need the native
/// integer go through [`U32BE::to_u32`] at the point of use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderInfo {
  pub width: U32BE,
  pub height: U32BE,
  pub bit_depth: u8,
  pub color_type: u8,
  pub compression_method: u8,
  pub filter_method: u8,
  pub interlace_method: u8,
}

impl HeaderInfo {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    let mut c = ByteCursor::new(payload);
    let width = U32BE::from_u32(c.take_u32_be()?);
    let height = U32BE::from_u32(c.take_u32_be()?);
    let bit_depth = c.take_u8()?;
    let color_type = c.take_u8()?;
    let compression_method = c.take_u8()?;
    let filter_method = c.take_u8()?;
    let interlace_method = c.take_u8()?;
    Some(Self { width, height, bit_depth, color_type, compression_method, filter_method, interlace_method })
  }

  /// Channel count implied by `color_type`: 1, 3, 1, 2, or 4, per the
  /// simplified model this crate uses (no sub-byte channel packing).
  #[must_use]
  pub fn channels(&self) -> Option<u32> {
    match self.color_type {
      0 => Some(1),
      2 => Some(3),
      3 => Some(1),
      4 => Some(2),
      6 => Some(4),
      _ => None,
    }
  }

  /// Bytes occupied by a single pixel: `channels * (bit_depth == 16 ? 2 : 1)`.
  #[must_use]
  pub fn bytes_per_pixel(&self) -> Option<u32> {
    let channels = self.channels()?;
    Some(if self.bit_depth == 16 { channels * 2 } else { channels })
  }

  #[must_use]
  pub fn row_stride(&self) -> Option<u32> {
    Some(self.width.to_u32().checked_mul(self.bytes_per_pixel()?)?)
  }

  #[must_use]
  pub fn raster_len(&self) -> Option<usize> {
    let stride = self.row_stride()? as usize;
    (stride + 1).checked_mul(self.height.to_u32() as usize)
  }

  #[must_use]
  pub fn pixel_buffer_len(&self) -> Option<usize> {
    (self.row_stride()? as usize).checked_mul(self.height.to_u32() as usize)
  }
}
