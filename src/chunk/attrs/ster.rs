/// Decoded stereo-layout segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StereoLayout {
  CrossFuse,
  DivergingFuse,
}

impl StereoLayout {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    match *payload.first()? {
      0 => Some(Self::CrossFuse),
      1 => Some(Self::DivergingFuse),
      _ => None,
    }
  }
}
