//! The file container: magic check, ordered segments, write-back policies.

use crate::chunk::{Segment, SegmentStream, SegmentTag};
use crate::error::{ChunkForgeError, ChunkForgeResult};

/// The fixed 8-byte prefix every container starts with.
pub const MAGIC: [u8; 8] = [0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

/// A parsed container: the ordered segment sequence plus whatever bytes
/// followed the terminator.
#[derive(Debug, Clone, PartialEq)]
pub struct Container {
  segments: Vec<Segment>,
  trailing: Vec<u8>,
}

/// Chooses which segments [`Container::write`] emits.
///
/// A critical segment is never filtered by either policy; they differ only
/// in which ancillary segments pass through.
#[derive(Debug, Clone)]
pub enum WritePolicy {
  /// Every segment, critical and ancillary alike.
  KeepAll,
  /// Critical segments plus any ancillary segment whose tag is listed here.
  CriticalPlus(Vec<SegmentTag>),
  /// Critical segments only.
  CriticalOnly,
}

impl Container {
  /// Parses `bytes` as a full container: checks the magic, then reads
  /// segments until the terminator. Any parser-level failure (truncation,
  /// bad type bytes, bad CRC) aborts with no segment returned, per the
  /// "no partial segment" policy.
  pub fn open(bytes: &[u8]) -> ChunkForgeResult<Self> {
    if bytes.len() < MAGIC.len() || bytes[..MAGIC.len()] != MAGIC {
      return Err(ChunkForgeError::BadMagic);
    }
    let mut stream = SegmentStream::new(&bytes[MAGIC.len()..]);
    let mut segments = Vec::new();
    for segment in &mut stream {
      segments.push(segment?);
    }
    let trailing = stream.trailing().to_vec();
    Ok(Self { segments, trailing })
  }

  #[must_use]
  pub fn chunks(&self) -> &[Segment] {
    &self.segments
  }

  #[must_use]
  pub fn chunks_mut(&mut self) -> &mut [Segment] {
    &mut self.segments
  }

  /// The first segment of the given type, if any.
  #[must_use]
  pub fn first(&self, tag: SegmentTag) -> Option<&Segment> {
    self.segments.iter().find(|s| s.tag() == tag)
  }

  /// The header segment's color type, used by background-segment decoding.
  #[must_use]
  pub fn color_type(&self) -> Option<u8> {
    let header = self.first(SegmentTag::IHDR)?;
    crate::chunk::attrs::HeaderInfo::parse(header.payload()).map(|h| h.color_type)
  }

  #[must_use]
  pub fn trailing_bytes(&self) -> &[u8] {
    &self.trailing
  }

  pub fn set_trailing_bytes(&mut self, bytes: Vec<u8>) {
    self.trailing = bytes;
  }

  /// Concatenates the payloads of every data-bearing segment, in order.
  #[must_use]
  pub fn collect_data_payload(&self) -> Vec<u8> {
    let mut out = Vec::new();
    for seg in &self.segments {
      if seg.tag() == SegmentTag::IDAT {
        out.extend_from_slice(seg.payload());
      }
    }
    out
  }

  /// Serializes the magic, then every segment passing `policy`, in original
  /// order, then the trailing bytes. Critical segments always pass.
  #[must_use]
  pub fn write(&self, policy: &WritePolicy) -> Vec<u8> {
    let mut out = Vec::with_capacity(MAGIC.len() + self.trailing.len());
    out.extend_from_slice(&MAGIC);
    for seg in &self.segments {
      if seg.is_critical() || Self::ancillary_passes(policy, seg.tag()) {
        seg.write_to(&mut out);
      }
    }
    out.extend_from_slice(&self.trailing);
    out
  }

  fn ancillary_passes(policy: &WritePolicy, tag: SegmentTag) -> bool {
    match policy {
      WritePolicy::KeepAll => true,
      WritePolicy::CriticalOnly => false,
      WritePolicy::CriticalPlus(keep) => keep.contains(&tag),
    }
  }
}
