//! Concatenate, decompress, validate, and defilter: turns a container's
//! data-bearing segments into a flat raster buffer.

use crate::chunk::SegmentTag;
use crate::chunk::attrs::HeaderInfo;
use crate::container::Container;
use crate::error::{ChunkForgeError, ChunkForgeResult};
use crate::pixel::filter::defilter_rows;

/// Runs the full pixel pipeline over a container's header and data segments.
pub fn defilter(container: &Container) -> ChunkForgeResult<Vec<u8>> {
  let header_segment = container.first(SegmentTag::IHDR).ok_or(ChunkForgeError::BadPayload)?;
  let header = HeaderInfo::parse(header_segment.payload()).ok_or(ChunkForgeError::BadPayload)?;

  let compressed = container.collect_data_payload();
  let mut rows =
    miniz_oxide::inflate::decompress_to_vec_zlib(&compressed).map_err(|_| ChunkForgeError::BadPayload)?;

  let expected_len = header.raster_len().ok_or(ChunkForgeError::Corrupted)?;
  if rows.len() != expected_len {
    return Err(ChunkForgeError::Corrupted);
  }

  let bpp = header.bytes_per_pixel().ok_or(ChunkForgeError::Unsupported)? as usize;
  let stride = header.row_stride().ok_or(ChunkForgeError::Corrupted)? as usize;
  defilter_rows(&mut rows, header.height.to_u32() as usize, stride, bpp).ok_or(ChunkForgeError::Corrupted)?;

  let mut out = Vec::with_capacity(stride * header.height.to_u32() as usize);
  for row in rows.chunks_exact(1 + stride) {
    out.extend_from_slice(&row[1..]);
  }
  Ok(out)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::chunk::Segment;
  use crate::container::MAGIC;

  fn build_container(width: u32, height: u32, color_type: u8, rows: &[u8]) -> Vec<u8> {
    let compressed = miniz_oxide::deflate::compress_to_vec_zlib(rows, 6);
    let mut out = MAGIC.to_vec();
    let mut ihdr = Vec::new();
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[8, color_type, 0, 0, 0]);
    Segment::new(SegmentTag::IHDR, ihdr).write_to(&mut out);
    Segment::new(SegmentTag::IDAT, compressed).write_to(&mut out);
    Segment::new(SegmentTag::IEND, Vec::new()).write_to(&mut out);
    out
  }

  #[test]
  fn three_by_three_grayscale_constant_pattern_defilters_to_flat_0x7f() {
    let rows = [0u8, 0x7F, 0x7F, 0x7F, 2, 0, 0, 0, 2, 0, 0, 0];
    let bytes = build_container(3, 3, 0, &rows);
    let container = Container::open(&bytes).unwrap();
    assert_eq!(defilter(&container).unwrap(), vec![0x7F; 9]);
  }

  #[test]
  fn two_by_two_rgb_with_no_filtering_round_trips() {
    let raw = [10u8, 20, 30, 11, 21, 31, 12, 22, 32, 13, 23, 33];
    let mut rows = Vec::new();
    for chunk in raw.chunks(6) {
      rows.push(0);
      rows.extend_from_slice(chunk);
    }
    let bytes = build_container(2, 2, 2, &rows);
    let container = Container::open(&bytes).unwrap();
    assert_eq!(defilter(&container).unwrap(), raw);
  }

  #[test]
  fn wrong_geometry_is_rejected_as_corrupted() {
    let rows = [0u8, 1, 2, 3];
    let bytes = build_container(10, 10, 0, &rows);
    let container = Container::open(&bytes).unwrap();
    assert_eq!(defilter(&container), Err(ChunkForgeError::Corrupted));
  }
}
