use crate::ascii::AsciiArray;

/// A segment's four-character type tag.
///
/// This mirrors the source format's critical-bit convention directly in the
/// tag bytes: a segment is critical exactly when the first byte of its tag is
/// an ASCII uppercase letter.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct SegmentTag(pub AsciiArray<4>);

#[allow(non_upper_case_globals)]
impl SegmentTag {
  pub const IHDR: Self = Self::from_bytes(*b"IHDR");
  pub const PLTE: Self = Self::from_bytes(*b"PLTE");
  pub const IDAT: Self = Self::from_bytes(*b"IDAT");
  pub const IEND: Self = Self::from_bytes(*b"IEND");
  pub const gAMA: Self = Self::from_bytes(*b"gAMA");
  pub const cHRM: Self = Self::from_bytes(*b"cHRM");
  pub const sRGB: Self = Self::from_bytes(*b"sRGB");
  pub const bKGD: Self = Self::from_bytes(*b"bKGD");
  pub const pHYs: Self = Self::from_bytes(*b"pHYs");
  pub const oFFs: Self = Self::from_bytes(*b"oFFs");
  pub const hIST: Self = Self::from_bytes(*b"hIST");
  pub const sTER: Self = Self::from_bytes(*b"sTER");
  pub const tIME: Self = Self::from_bytes(*b"tIME");
  pub const tEXt: Self = Self::from_bytes(*b"tEXt");

  #[inline]
  #[must_use]
  pub const fn from_bytes(bytes: [u8; 4]) -> Self {
    Self(AsciiArray::new(bytes))
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> [u8; 4] {
    self.0 .0
  }

  /// First type byte is ASCII uppercase iff the segment is critical.
  #[inline]
  #[must_use]
  pub fn is_critical(&self) -> bool {
    self.as_bytes()[0].is_ascii_uppercase()
  }

  #[inline]
  #[must_use]
  pub fn is_ascii_alphabetic(&self) -> bool {
    self.0.is_ascii_alphabetic()
  }
}

impl core::fmt::Debug for SegmentTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.0.fmt(f)
  }
}
impl core::fmt::Display for SegmentTag {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    self.0.fmt(f)
  }
}
