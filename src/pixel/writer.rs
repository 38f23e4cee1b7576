//! Re-encodes a flat pixel buffer back into a container: build the header,
//! filter-prefix and compress the rows, wrap in segments, append trailing
//! bytes.

use crate::chunk::attrs::HeaderInfo;
use crate::chunk::{Segment, SegmentTag};
use crate::container::MAGIC;
use crate::endian::U32BE;
use crate::error::{ChunkForgeError, ChunkForgeResult};

/// Builds a complete container's bytes from a flat, unfiltered pixel buffer.
///
/// Every row is written with filter selector 0 (None); this crate never
/// bothers picking a better predictor on write, matching the simplicity the
/// source's own writer path settles for. Palette-color output (`color_type
/// == 3`) is refused with [`ChunkForgeError::Unsupported`] since there is no
/// palette to derive from a flat RGB-less buffer; 16-bit depth is accepted
/// on a best-effort basis.
pub fn encode_raster_bytes(
  width: u32,
  height: u32,
  color_type: u8,
  bit_depth: u8,
  pixels: &[u8],
  trailing: &[u8],
) -> ChunkForgeResult<Vec<u8>> {
  if color_type == 3 {
    return Err(ChunkForgeError::Unsupported);
  }
  let header = HeaderInfo {
    width: U32BE::from_u32(width),
    height: U32BE::from_u32(height),
    bit_depth,
    color_type,
    compression_method: 0,
    filter_method: 0,
    interlace_method: 0,
  };
  let bpp = header.bytes_per_pixel().ok_or(ChunkForgeError::Unsupported)? as usize;
  let stride = header.row_stride().ok_or(ChunkForgeError::Corrupted)? as usize;
  let expected_len = stride.checked_mul(height as usize).ok_or(ChunkForgeError::Corrupted)?;
  if pixels.len() != expected_len {
    return Err(ChunkForgeError::Corrupted);
  }

  let mut rows = Vec::with_capacity(height as usize * (1 + stride));
  for row_index in 0..height as usize {
    rows.push(0u8);
    rows.extend_from_slice(&pixels[row_index * stride..(row_index + 1) * stride]);
  }

  let compressed = miniz_oxide::deflate::compress_to_vec_zlib(&rows, 6);

  let mut ihdr_payload = Vec::with_capacity(13);
  ihdr_payload.extend_from_slice(&U32BE::from_u32(width).to_bytes());
  ihdr_payload.extend_from_slice(&U32BE::from_u32(height).to_bytes());
  ihdr_payload.extend_from_slice(&[bit_depth, color_type, 0, 0, 0]);

  let mut out = MAGIC.to_vec();
  Segment::new(SegmentTag::IHDR, ihdr_payload).write_to(&mut out);
  Segment::new(SegmentTag::IDAT, compressed).write_to(&mut out);
  Segment::new(SegmentTag::IEND, Vec::new()).write_to(&mut out);
  out.extend_from_slice(trailing);
  Ok(out)
}
