//! The five row-filter predictors and their reversal.

/// A row's leading filter-selector byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterType {
  None,
  Sub,
  Up,
  Average,
  Paeth,
}

impl FilterType {
  #[must_use]
  pub fn from_byte(b: u8) -> Option<Self> {
    match b {
      0 => Some(Self::None),
      1 => Some(Self::Sub),
      2 => Some(Self::Up),
      3 => Some(Self::Average),
      4 => Some(Self::Paeth),
      _ => None,
    }
  }
}

/// Picks whichever of `a`, `b`, `c` is closest to `a + b - c`, ties broken in
/// the order `a, b, c`.
#[must_use]
pub fn paeth_predictor(a: u8, b: u8, c: u8) -> u8 {
  let (a, b, c) = (i32::from(a), i32::from(b), i32::from(c));
  let p = a + b - c;
  let pa = (p - a).abs();
  let pb = (p - b).abs();
  let pc = (p - c).abs();
  if pa <= pb && pa <= pc {
    a as u8
  } else if pb <= pc {
    b as u8
  } else {
    c as u8
  }
}

/// Reverses row filtering in place. `rows` is `height` slices of
/// `1 + stride` bytes each: a filter-selector byte followed by `stride`
/// filtered bytes. On return, the filter byte of every row is zeroed and the
/// data bytes hold the original (unfiltered) pixel bytes.
pub fn defilter_rows(rows: &mut [u8], height: usize, stride: usize, bpp: usize) -> Option<()> {
  if stride.checked_mul(height).and_then(|n| n.checked_add(height))? != rows.len() {
    return None;
  }
  let row_len = 1 + stride;
  for row_index in 0..height {
    let row_start = row_index * row_len;
    let filter = FilterType::from_byte(rows[row_start])?;
    for i in 0..stride {
      let pos = row_start + 1 + i;
      let left = if i >= bpp { rows[pos - bpp] } else { 0 };
      let above = if row_index > 0 { rows[pos - row_len] } else { 0 };
      let upper_left = if row_index > 0 && i >= bpp { rows[pos - row_len - bpp] } else { 0 };
      let raw = match filter {
        FilterType::None => rows[pos],
        FilterType::Sub => rows[pos].wrapping_add(left),
        FilterType::Up => rows[pos].wrapping_add(above),
        FilterType::Average => {
          let avg = ((u16::from(left) + u16::from(above)) / 2) as u8;
          rows[pos].wrapping_add(avg)
        }
        FilterType::Paeth => rows[pos].wrapping_add(paeth_predictor(left, above, upper_left)),
      };
      rows[pos] = raw;
    }
  }
  Some(())
}
