//! Small utility helpers used across modules.

/// Lower-case and trim surrounding whitespace.
pub fn normalize(s: &str) -> String {
  s.trim().to_lowercase()
}

/// Lower-case with every whitespace character removed.
/// Used for answers that come with alternatives, where spacing is free.
pub fn normalize_compact(s: &str) -> String {
  s.chars().filter(|c| !c.is_whitespace()).collect::<String>().to_lowercase()
}

/// Log-safe truncation for large strings.
/// Avoids spamming logs with whole user submissions.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  if s.len() <= max {
    return s.to_string();
  }
  let mut cut = max;
  while !s.is_char_boundary(cut) {
    cut -= 1;
  }
  format!("{}… ({} bytes total)", &s[..cut], s.len())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn normalization() {
    assert_eq!(normalize("  Memory Leak \n"), "memory leak");
    assert_eq!(normalize_compact(" x << 3 +\tx<<1 "), "x<<3+x<<1");
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    assert_eq!(trunc_for_log("log₂log₂", 4), "log… (12 bytes total)");
  }
}
