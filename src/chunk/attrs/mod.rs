//! Per-type segment interpreters.
//!
//! Each submodule turns one recognized segment's payload into a small typed
//! value. [`Attributes::interpret`] is the dispatch table described by the
//! source's type-code-to-interpreter mapping: a tagged variant over the
//! known types plus an opaque case that retains nothing beyond "this segment
//! exists and carries these bytes" (the bytes themselves stay on the
//! [`Segment`](crate::chunk::Segment), not here).

pub mod bkgd;
pub mod chrm;
pub mod gama;
pub mod hist;
pub mod ihdr;
pub mod offs;
pub mod phys;
pub mod plte;
pub mod srgb;
pub mod ster;
pub mod text;
pub mod time;

use crate::chunk::kind::SegmentTag;

pub use bkgd::Background;
pub use chrm::Chromaticities;
pub use gama::Gamma;
pub use hist::Histogram;
pub use ihdr::HeaderInfo;
pub use offs::ImageOffset;
pub use phys::Physical;
pub use plte::Palette;
pub use srgb::RenderingIntent;
pub use ster::StereoLayout;
pub use text::TextEntry;
pub use time::Timestamp;

/// The decoded meaning of a segment's payload, or [`Attributes::Opaque`] for
/// anything this crate doesn't have a dedicated interpreter for.
///
/// Background decoding needs the image's color type, which the segment
/// itself doesn't carry, so [`interpret`](Attributes::interpret) takes it as
/// a side input gathered from the container's header segment.
#[derive(Debug, Clone, PartialEq)]
pub enum Attributes {
  Header(HeaderInfo),
  Palette(Palette),
  Data,
  Terminator,
  Gamma(Gamma),
  Chromaticities(Chromaticities),
  RenderingIntent(RenderingIntent),
  Background(Background),
  Physical(Physical),
  ImageOffset(ImageOffset),
  Histogram(Histogram),
  Stereo(StereoLayout),
  Time(Timestamp),
  Text(TextEntry),
  /// Either an unrecognized type, or a recognized type whose payload didn't
  /// parse; in both cases the raw bytes are preserved on the segment.
  Opaque,
}

impl Attributes {
  /// Dispatches on `tag`. Never fails: a recognized type whose payload is
  /// malformed falls back to [`Attributes::Opaque`] rather than propagating
  /// an error, per the "tolerate but don't crash" contract on interpreters.
  #[must_use]
  pub fn interpret(tag: SegmentTag, payload: &[u8], color_type: Option<u8>) -> Self {
    match tag {
      SegmentTag::IHDR => HeaderInfo::parse(payload).map_or(Self::Opaque, Self::Header),
      SegmentTag::PLTE => Palette::parse(payload).map_or(Self::Opaque, Self::Palette),
      SegmentTag::IDAT => Self::Data,
      SegmentTag::IEND => Self::Terminator,
      SegmentTag::gAMA => Gamma::parse(payload).map_or(Self::Opaque, Self::Gamma),
      SegmentTag::cHRM => Chromaticities::parse(payload).map_or(Self::Opaque, Self::Chromaticities),
      SegmentTag::sRGB => RenderingIntent::parse(payload).map_or(Self::Opaque, Self::RenderingIntent),
      SegmentTag::bKGD => {
        let Some(color_type) = color_type else { return Self::Opaque };
        Background::parse(payload, color_type).map_or(Self::Opaque, Self::Background)
      }
      SegmentTag::pHYs => Physical::parse(payload).map_or(Self::Opaque, Self::Physical),
      SegmentTag::oFFs => ImageOffset::parse(payload).map_or(Self::Opaque, Self::ImageOffset),
      SegmentTag::hIST => Histogram::parse(payload).map_or(Self::Opaque, Self::Histogram),
      SegmentTag::sTER => StereoLayout::parse(payload).map_or(Self::Opaque, Self::Stereo),
      SegmentTag::tIME => Timestamp::parse(payload).map_or(Self::Opaque, Self::Time),
      SegmentTag::tEXt => Self::Text(TextEntry::parse(payload)),
      _ => Self::Opaque,
    }
  }
}
