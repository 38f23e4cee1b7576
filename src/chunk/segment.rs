use crate::chunk::attrs::Attributes;
use crate::chunk::kind::SegmentTag;
use crate::crc32::segment_crc;

/// One parsed segment: a type tag, its payload, and the CRC that signs them
/// together.
///
/// Segments are immutable once built except through [`Segment::set_payload`],
/// which is the one mutation path the cipher layer uses to swap a data
/// segment's payload for its enciphered form.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
  tag: SegmentTag,
  payload: Vec<u8>,
  crc: u32,
}

impl Segment {
  /// Builds a segment from already-validated parts, recomputing the CRC
  /// rather than trusting a caller-supplied one.
  #[must_use]
  pub fn new(tag: SegmentTag, payload: Vec<u8>) -> Self {
    let crc = segment_crc(tag.as_bytes(), &payload);
    Self { tag, payload, crc }
  }

  /// Builds a segment from parts read off the wire, keeping the CRC that was
  /// actually stored there (the caller is expected to have already checked
  /// it matches via [`Segment::crc_is_valid`]).
  #[must_use]
  pub(crate) fn from_wire(tag: SegmentTag, payload: Vec<u8>, crc: u32) -> Self {
    Self { tag, payload, crc }
  }

  #[inline]
  #[must_use]
  pub fn tag(&self) -> SegmentTag {
    self.tag
  }

  #[inline]
  #[must_use]
  pub fn length(&self) -> u32 {
    self.payload.len() as u32
  }

  #[inline]
  #[must_use]
  pub fn payload(&self) -> &[u8] {
    &self.payload
  }

  #[inline]
  #[must_use]
  pub fn crc(&self) -> u32 {
    self.crc
  }

  #[inline]
  #[must_use]
  pub fn is_critical(&self) -> bool {
    self.tag.is_critical()
  }

  #[must_use]
  pub fn crc_is_valid(&self) -> bool {
    self.crc == segment_crc(self.tag.as_bytes(), &self.payload)
  }

  /// Replaces the payload and recomputes the CRC and length from it.
  ///
  /// This is the only way to mutate a parsed segment; it exists for the
  /// cipher path, which swaps a data segment's plaintext payload for its
  /// enciphered form.
  pub fn set_payload(&mut self, payload: Vec<u8>) {
    self.crc = segment_crc(self.tag.as_bytes(), &payload);
    self.payload = payload;
  }

  /// Decodes this segment's payload into its typed meaning. `color_type` is
  /// only consulted for the background segment, which needs it to know its
  /// own payload shape.
  #[must_use]
  pub fn interpret(&self, color_type: Option<u8>) -> Attributes {
    Attributes::interpret(self.tag, &self.payload, color_type)
  }

  /// Appends this segment's wire encoding (length, type, payload, crc) to
  /// `out`, big-endian where applicable.
  pub fn write_to(&self, out: &mut Vec<u8>) {
    out.extend_from_slice(&self.length().to_be_bytes());
    out.extend_from_slice(&self.tag.as_bytes());
    out.extend_from_slice(&self.payload);
    out.extend_from_slice(&self.crc.to_be_bytes());
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn new_segment_has_a_valid_crc() {
    let seg = Segment::new(SegmentTag::IEND, Vec::new());
    assert!(seg.crc_is_valid());
    assert_eq!(seg.crc(), 0xAE42_6082);
  }

  #[test]
  fn set_payload_refreshes_crc_and_length() {
    let mut seg = Segment::new(SegmentTag::tEXt, b"a\0b".to_vec());
    let before = seg.crc();
    seg.set_payload(b"a\0longer text".to_vec());
    assert_ne!(seg.crc(), before);
    assert!(seg.crc_is_valid());
    assert_eq!(seg.length() as usize, seg.payload().len());
  }
}
