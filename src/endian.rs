//! Big-endian integer packing and a small byte-slice cursor.
//!
//! Every multi-byte field in this container is big-endian, so the chunk
//! codec, the segment interpreters, and the pixel writer all go through the
//! newtypes here instead of calling `to_be_bytes`/`from_be_bytes` by hand.

use core::fmt;

/// A `u16` stored as big-endian bytes.
///
/// This stores only an array of bytes, so unlike a normal `u16` it has an
/// alignment of 1.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct U16BE([u8; 2]);
impl U16BE {
  #[inline]
  #[must_use]
  pub const fn to_u16(self) -> u16 {
    u16::from_be_bytes(self.0)
  }
  #[inline]
  #[must_use]
  pub const fn from_u16(u: u16) -> Self {
    Self(u.to_be_bytes())
  }
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 2] {
    self.0
  }
}
impl fmt::Debug for U16BE {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("U16BE").field(&self.to_u16()).finish()
  }
}
impl From<u16> for U16BE {
  #[inline]
  fn from(value: u16) -> Self {
    Self::from_u16(value)
  }
}
impl From<U16BE> for u16 {
  #[inline]
  fn from(value: U16BE) -> Self {
    value.to_u16()
  }
}

/// A `u32` stored as big-endian bytes.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct U32BE([u8; 4]);
impl U32BE {
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }
  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }
  #[inline]
  #[must_use]
  pub const fn to_bytes(self) -> [u8; 4] {
    self.0
  }
}
impl fmt::Debug for U32BE {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("U32BE").field(&self.to_u32()).finish()
  }
}
impl From<u32> for U32BE {
  #[inline]
  fn from(value: u32) -> Self {
    Self::from_u32(value)
  }
}
impl From<U32BE> for u32 {
  #[inline]
  fn from(value: U32BE) -> Self {
    value.to_u32()
  }
}

/// An `i32` stored as big-endian bytes, used by the image-offset segment.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct S32BE([u8; 4]);
impl S32BE {
  #[inline]
  #[must_use]
  pub const fn to_i32(self) -> i32 {
    i32::from_be_bytes(self.0)
  }
  #[inline]
  #[must_use]
  pub const fn from_i32(i: i32) -> Self {
    Self(i.to_be_bytes())
  }
}
impl fmt::Debug for S32BE {
  #[inline]
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("S32BE").field(&self.to_i32()).finish()
  }
}

/// A read-only cursor over a byte slice that only ever moves forward.
///
/// This is the shared plumbing behind the raw chunk iterator and the
/// per-type interpreters: both just want "give me N bytes, or tell me there
/// weren't enough."
#[derive(Clone, Copy)]
pub struct ByteCursor<'b> {
  rest: &'b [u8],
}
impl<'b> ByteCursor<'b> {
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { rest: bytes }
  }

  #[inline]
  #[must_use]
  pub const fn remaining(&self) -> &'b [u8] {
    self.rest
  }

  #[inline]
  #[must_use]
  pub const fn len(&self) -> usize {
    self.rest.len()
  }

  #[inline]
  #[must_use]
  pub const fn is_empty(&self) -> bool {
    self.rest.is_empty()
  }

  /// Pulls `n` bytes off the front, or returns `None` if there aren't enough.
  #[inline]
  pub fn take(&mut self, n: usize) -> Option<&'b [u8]> {
    if self.rest.len() < n {
      return None;
    }
    let (head, tail) = self.rest.split_at(n);
    self.rest = tail;
    Some(head)
  }

  #[inline]
  pub fn take_array<const N: usize>(&mut self) -> Option<[u8; N]> {
    self.take(N)?.try_into().ok()
  }

  #[inline]
  pub fn take_u8(&mut self) -> Option<u8> {
    self.take_array::<1>().map(|[b]| b)
  }

  #[inline]
  pub fn take_u16_be(&mut self) -> Option<u16> {
    self.take_array::<2>().map(|bytes| U16BE(bytes).to_u16())
  }

  #[inline]
  pub fn take_u32_be(&mut self) -> Option<u32> {
    self.take_array::<4>().map(|bytes| U32BE(bytes).to_u32())
  }

  #[inline]
  pub fn take_i32_be(&mut self) -> Option<i32> {
    self.take_array::<4>().map(|bytes| S32BE(bytes).to_i32())
  }
}
