//! Simulated C struct layout under the natural alignment model.
//!
//! Fixed primitive sizes, every member aligned to its own size, the whole
//! struct padded to the largest size in the table (8). No bitfields, arrays or
//! nested structs, and no attempt to match a real ABI beyond that rule.

use crate::domain::StructMember;
use crate::error::QuizError;

/// Types the struct-size templates draw members from.
pub const PRIMITIVE_TYPES: [&str; 5] = ["int", "char", "short", "long", "double"];

/// Largest entry of the size table; the struct's trailing alignment.
pub const MAX_PRIMITIVE_SIZE: usize = 8;

/// Size (and alignment) of a primitive. Unknown names count as `int`.
pub fn primitive_size(ty: &str) -> usize {
  match ty {
    "int" => 4,
    "char" => 1,
    "short" => 2,
    "long" => 8,
    "double" => 8,
    _ => 4,
  }
}

/// Where one member landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberSlot {
  pub name: String,
  pub ty: String,
  pub size: usize,
  /// Padding inserted right before this member.
  pub padding: usize,
  pub offset: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructLayout {
  pub slots: Vec<MemberSlot>,
  /// Offset one past the last member, before tail padding.
  pub end: usize,
  pub tail_padding: usize,
  pub size: usize,
}

/// Lay members out in declaration order.
pub fn compute_layout(members: &[StructMember]) -> Result<StructLayout, QuizError> {
  if members.is_empty() {
    return Err(QuizError::InvalidMember);
  }

  let mut offset = 0usize;
  let mut slots = Vec::with_capacity(members.len());
  for m in members {
    let size = primitive_size(&m.ty);
    let padding = (size - offset % size) % size;
    offset += padding;
    slots.push(MemberSlot {
      name: m.name.clone(),
      ty: m.ty.clone(),
      size,
      padding,
      offset,
    });
    offset += size;
  }

  let tail_padding = (MAX_PRIMITIVE_SIZE - offset % MAX_PRIMITIVE_SIZE) % MAX_PRIMITIVE_SIZE;
  Ok(StructLayout {
    slots,
    end: offset,
    tail_padding,
    size: offset + tail_padding,
  })
}

/// `sizeof(struct ...)` for the given members.
pub fn struct_size(members: &[StructMember]) -> Result<usize, QuizError> {
  compute_layout(members).map(|l| l.size)
}

/// Round `size` up to the next multiple of `alignment` (a power of two, >= 1).
pub fn aligned_size(size: usize, alignment: usize) -> usize {
  if alignment <= 1 {
    return size;
  }
  size.div_ceil(alignment) * alignment
}

/// Render `struct <name> { ... };` with one member per line.
pub fn render_struct(name: &str, members: &[StructMember]) -> String {
  let body: Vec<String> = members.iter().map(|m| format!("    {} {};", m.ty, m.name)).collect();
  format!("struct {} {{\n{}\n}};", name, body.join("\n"))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn members(types: &[&str]) -> Vec<StructMember> {
    types
      .iter()
      .enumerate()
      .map(|(i, t)| StructMember::new(*t, ((b'a' + i as u8) as char).to_string()))
      .collect()
  }

  #[test]
  fn empty_struct_is_rejected() {
    assert_eq!(struct_size(&[]), Err(QuizError::InvalidMember));
  }

  #[test]
  fn order_changes_padding_not_always_size() {
    let ci = compute_layout(&members(&["char", "int"])).unwrap();
    assert_eq!(ci.slots[1].padding, 3);
    assert_eq!(ci.slots[1].offset, 4);
    assert_eq!(ci.size, 8);

    let ic = compute_layout(&members(&["int", "char"])).unwrap();
    assert_eq!(ic.end, 5);
    assert_eq!(ic.tail_padding, 3);
    assert_eq!(ic.size, 8);
  }

  #[test]
  fn long_char_int_short_is_24() {
    let l = compute_layout(&members(&["long", "char", "int", "short"])).unwrap();
    let offsets: Vec<usize> = l.slots.iter().map(|s| s.offset).collect();
    assert_eq!(offsets, vec![0, 8, 12, 16]);
    assert_eq!(l.end, 18);
    assert_eq!(l.size, 24);
  }

  #[test]
  fn order_sensitive_sizes() {
    assert_eq!(struct_size(&members(&["char", "double", "char"])), Ok(24));
    assert_eq!(struct_size(&members(&["double", "char", "char"])), Ok(16));
    assert_eq!(struct_size(&members(&["char", "short", "char", "int"])), Ok(16));
    assert_eq!(struct_size(&members(&["short", "char", "char", "int"])), Ok(8));
  }

  #[test]
  fn small_structs_pad_to_eight() {
    assert_eq!(struct_size(&members(&["char"])), Ok(8));
    assert_eq!(struct_size(&members(&["char", "char", "char"])), Ok(8));
  }

  #[test]
  fn unknown_type_counts_as_int() {
    assert_eq!(primitive_size("float"), 4);
    assert_eq!(struct_size(&members(&["char", "float"])), Ok(8));
  }

  #[test]
  fn aligned_size_rounds_up() {
    assert_eq!(aligned_size(5, 1), 5);
    assert_eq!(aligned_size(5, 4), 8);
    assert_eq!(aligned_size(8, 8), 8);
    assert_eq!(aligned_size(9, 8), 16);
  }

  #[test]
  fn renders_one_member_per_line() {
    let code = render_struct("s1", &members(&["int", "char"]));
    assert_eq!(code, "struct s1 {\n    int a;\n    char b;\n};");
  }
}
