use crate::chunk::kind::SegmentTag;
use crate::chunk::segment::Segment;
use crate::crc32::segment_crc;
use crate::endian::ByteCursor;
use crate::error::{ChunkForgeError, ChunkForgeResult};

/// Reads exactly one segment off the front of `cursor`.
///
/// Fails with [`ChunkForgeError::Truncated`] if the length, type, payload, or
/// CRC can't all be read; with [`ChunkForgeError::BadType`] if the type
/// bytes aren't all ASCII letters; with [`ChunkForgeError::BadCrc`] if the
/// stored CRC doesn't match the recomputed one. A CRC mismatch is logged
/// before the error is returned, matching the non-fatal-by-default warning
/// path used for ancillary payload problems elsewhere in the codec, even
/// though this particular failure is still propagated to the caller.
pub fn read_segment(cursor: &mut ByteCursor<'_>) -> ChunkForgeResult<Segment> {
  let length = cursor.take_u32_be().ok_or(ChunkForgeError::Truncated)?;
  let tag_bytes = cursor.take_array::<4>().ok_or(ChunkForgeError::Truncated)?;
  if !tag_bytes.iter().all(u8::is_ascii_alphabetic) {
    return Err(ChunkForgeError::BadType);
  }
  let payload = cursor.take(length as usize).ok_or(ChunkForgeError::Truncated)?.to_vec();
  let stored_crc = cursor.take_u32_be().ok_or(ChunkForgeError::Truncated)?;

  let tag = SegmentTag::from_bytes(tag_bytes);
  let expected_crc = segment_crc(tag_bytes, &payload);
  if stored_crc != expected_crc {
    log::warn!("segment {tag} crc mismatch: stored {stored_crc:08x}, computed {expected_crc:08x}");
    return Err(ChunkForgeError::BadCrc);
  }

  Ok(Segment::from_wire(tag, payload, stored_crc))
}

/// A pull-style stream of segments over a byte slice, stopping after the
/// terminator segment is yielded. Remaining bytes after that point (if any)
/// are available from [`SegmentStream::trailing`] once the stream is spent.
pub struct SegmentStream<'b> {
  cursor: ByteCursor<'b>,
  done: bool,
}

impl<'b> SegmentStream<'b> {
  #[must_use]
  pub fn new(bytes: &'b [u8]) -> Self {
    Self { cursor: ByteCursor::new(bytes), done: false }
  }

  /// Bytes not yet consumed. Meaningful once iteration has stopped: either
  /// the terminator was reached (these are the out-of-spec trailing bytes)
  /// or an error cut iteration short (these are simply unparsed).
  #[must_use]
  pub fn trailing(&self) -> &'b [u8] {
    self.cursor.remaining()
  }
}

impl<'b> Iterator for SegmentStream<'b> {
  type Item = ChunkForgeResult<Segment>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.done {
      return None;
    }
    match read_segment(&mut self.cursor) {
      Ok(segment) => {
        if segment.tag() == SegmentTag::IEND {
          self.done = true;
        }
        Some(Ok(segment))
      }
      Err(e) => {
        self.done = true;
        Some(Err(e))
      }
    }
  }
}
