/// Decoded palette segment: a list of RGB triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette(pub Vec<[u8; 3]>);

impl Palette {
  pub fn parse(payload: &[u8]) -> Option<Self> {
    // `[u8; 3]` has the same size and alignment as three loose `u8`s, so the
    // payload can be reinterpreted in place instead of rebuilt element by
    // element; `try_cast_slice` rejects a length that isn't a multiple of 3
    // the same way the teacher's own PLTE parsing does.
    let triples: &[[u8; 3]] = bytemuck::try_cast_slice(payload).ok()?;
    Some(Self(triples.to_vec()))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_two_entries() {
    let p = Palette::parse(&[1, 2, 3, 4, 5, 6]).unwrap();
    assert_eq!(p.0, vec![[1, 2, 3], [4, 5, 6]]);
  }

  #[test]
  fn rejects_length_not_divisible_by_three() {
    assert!(Palette::parse(&[1, 2, 3, 4]).is_none());
  }
}
