//! Blending factors.
//!
//! Given two pixels *src* and *dst* – source and destination, each pixel is multiplied by a
//! blending factor before both are summed. *src* is the pixel being computed, *dst* is the pixel
//! already stored in the frame buffer. Color and alpha channels get their own factors, see
//! [`Context::set_blend_func`](crate::context::Context::set_blend_func).

/// Blending factors.
///
/// The declaration order is part of the interface: backends may map factors through a table
/// indexed by [`Factor::index`].
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub enum Factor {
  /// `0 * color`
  Zero,
  /// `1 * color`
  One,
  /// `src * color`
  SrcColor,
  /// `(1 - src) * color`
  OneMinusSrcColor,
  /// `dst * color`
  DstColor,
  /// `(1 - dst) * color`
  OneMinusDstColor,
  /// `srcA * color`
  SrcAlpha,
  /// `(1 - srcA) * color`
  OneMinusSrcAlpha,
  /// `dstA * color`
  DstAlpha,
  /// `(1 - dstA) * color`
  OneMinusDstAlpha,
  /// `constant * color`
  ConstantColor,
  /// `(1 - constant) * color`
  OneMinusConstantColor,
  /// `constantA * color`
  ConstantAlpha,
  /// `(1 - constantA) * color`
  OneMinusConstantAlpha,
  /// `min(srcA, 1 - dstA) * color`
  SrcAlphaSaturate,
}

impl Factor {
  /// Number of blending factors.
  pub const COUNT: usize = 15;

  /// All the factors, in declaration order.
  pub const ALL: [Factor; Factor::COUNT] = [
    Factor::Zero,
    Factor::One,
    Factor::SrcColor,
    Factor::OneMinusSrcColor,
    Factor::DstColor,
    Factor::OneMinusDstColor,
    Factor::SrcAlpha,
    Factor::OneMinusSrcAlpha,
    Factor::DstAlpha,
    Factor::OneMinusDstAlpha,
    Factor::ConstantColor,
    Factor::OneMinusConstantColor,
    Factor::ConstantAlpha,
    Factor::OneMinusConstantAlpha,
    Factor::SrcAlphaSaturate,
  ];

  /// Position of the factor in the declaration order.
  pub fn index(self) -> usize {
    self as usize
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_follows_declaration_order() {
    for (i, factor) in Factor::ALL.iter().enumerate() {
      assert_eq!(factor.index(), i);
    }
  }

  #[test]
  fn first_and_last() {
    assert_eq!(Factor::Zero.index(), 0);
    assert_eq!(Factor::SrcAlphaSaturate.index(), Factor::COUNT - 1);
  }
}
