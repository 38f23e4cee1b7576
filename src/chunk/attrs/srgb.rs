/// Decoded rendering-intent segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderingIntent {
  Perceptual,
  Relative,
  Saturation,
  Absolute,
}

impl RenderingIntent {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    match *payload.first()? {
      0 => Some(Self::Perceptual),
      1 => Some(Self::Relative),
      2 => Some(Self::Saturation),
      3 => Some(Self::Absolute),
      _ => None,
    }
  }
}
