/// Decoded histogram segment: one frequency per palette entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram(pub Vec<u16>);

impl Histogram {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    let pairs: &[[u8; 2]] = bytemuck::try_cast_slice(payload).ok()?;
    Some(Self(pairs.iter().copied().map(u16::from_be_bytes).collect()))
  }
}
