/// Decoded text segment: a keyword and its associated text, separated by a
/// single null byte in the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextEntry {
  pub keyword: String,
  pub text: String,
}

impl TextEntry {
  /// Splits on the first null byte. A payload with no null byte is treated
  /// as a keyword with empty text rather than rejected outright, matching
  /// this segment's "best effort, never crash" contract.
  pub fn parse(payload: &[u8]) -> Self {
    match payload.iter().position(|&b| b == 0) {
      Some(i) => Self {
        keyword: String::from_utf8_lossy(&payload[..i]).into_owned(),
        text: String::from_utf8_lossy(&payload[i + 1..]).into_owned(),
      },
      None => Self { keyword: String::from_utf8_lossy(payload).into_owned(), text: String::new() },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn splits_on_null_byte() {
    let mut payload = b"Author".to_vec();
    payload.push(0);
    payload.extend_from_slice(b"Jane");
    let t = TextEntry::parse(&payload);
    assert_eq!(t.keyword, "Author");
    assert_eq!(t.text, "Jane");
  }

  #[test]
  fn missing_separator_becomes_empty_text() {
    let t = TextEntry::parse(b"OnlyKeyword");
    assert_eq!(t.keyword, "OnlyKeyword");
    assert_eq!(t.text, "");
  }
}
