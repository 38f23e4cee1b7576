use core::fmt;

/// An error from the `chunkforge` crate.
///
/// Many of these are fatal for the call that produced them, but most ancillary
/// segment problems never reach the caller as an `Err` at all: the container
/// logs a warning and keeps the segment's raw bytes around unparsed instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ChunkForgeError {
  /// The byte source didn't start with the expected 8-byte magic.
  BadMagic,
  /// The byte source ran out before a segment (or the magic) was fully read.
  Truncated,
  /// A segment's stored CRC didn't match the CRC recomputed over its bytes.
  BadCrc,
  /// A segment's type tag contained a non-ASCII-letter byte.
  BadType,
  /// A recognized segment's payload couldn't be interpreted at all (for
  /// example, a data stream that isn't valid zlib/DEFLATE).
  BadPayload,
  /// The decompressed raster didn't match the size implied by the header.
  Corrupted,
  /// This implementation declines to handle the requested shape (16-bit
  /// depth or indexed-color reconstruction on the writer path).
  Unsupported,
  /// Underlying file I/O failed. Carries no payload since [`std::io::Error`]
  /// isn't `Copy`/`PartialEq`; see the `Display` impl for a generic message.
  Io,
}

impl fmt::Display for ChunkForgeError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(match self {
      Self::BadMagic => "byte source does not start with the container's magic signature",
      Self::Truncated => "byte source ended before a full segment could be read",
      Self::BadCrc => "segment CRC does not match its type and payload",
      Self::BadType => "segment type tag contains non-ASCII-letter bytes",
      Self::BadPayload => "segment payload could not be interpreted",
      Self::Corrupted => "decompressed raster length does not match the header geometry",
      Self::Unsupported => "this shape of image is not supported by this implementation",
      Self::Io => "I/O error while opening or writing a container",
    })
  }
}

impl std::error::Error for ChunkForgeError {}

impl From<std::io::Error> for ChunkForgeError {
  #[inline]
  fn from(_: std::io::Error) -> Self {
    Self::Io
  }
}

pub type ChunkForgeResult<T> = Result<T, ChunkForgeError>;
