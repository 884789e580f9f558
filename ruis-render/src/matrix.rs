//! 4×4 transformation matrices.
//!
//! Matrices are stored row-major (`rows[row][column]`) and transform column vectors: `M · v`.
//! Chained transformations are right-multiplied, so the last one applied in code is the first one
//! applied to a vertex.

use std::ops::Mul;

/// A 4×4 `f32` matrix, row-major.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Mat4 {
  /// Matrix rows.
  pub rows: [[f32; 4]; 4],
}

impl Mat4 {
  /// The identity matrix.
  pub const IDENTITY: Mat4 = Mat4 {
    rows: [
      [1., 0., 0., 0.],
      [0., 1., 0., 0.],
      [0., 0., 1., 0.],
      [0., 0., 0., 1.],
    ],
  };

  /// Build a matrix from its rows.
  pub fn from_rows(rows: [[f32; 4]; 4]) -> Self {
    Mat4 { rows }
  }

  /// Right-multiply by a scaling matrix.
  pub fn scale(self, x: f32, y: f32, z: f32) -> Self {
    let mut s = Mat4::IDENTITY;
    s.rows[0][0] = x;
    s.rows[1][1] = y;
    s.rows[2][2] = z;
    self * s
  }

  /// Right-multiply by a translation matrix.
  pub fn translate(self, x: f32, y: f32, z: f32) -> Self {
    let mut t = Mat4::IDENTITY;
    t.rows[0][3] = x;
    t.rows[1][3] = y;
    t.rows[2][3] = z;
    self * t
  }

  /// Transform a vector.
  pub fn transform(&self, v: [f32; 4]) -> [f32; 4] {
    let mut out = [0.; 4];

    for (o, row) in out.iter_mut().zip(&self.rows) {
      *o = row.iter().zip(&v).map(|(a, b)| a * b).sum();
    }

    out
  }

  /// Matrix data as a flat, row-major array.
  pub fn to_flat(&self) -> [f32; 16] {
    let mut flat = [0.; 16];

    for (chunk, row) in flat.chunks_exact_mut(4).zip(&self.rows) {
      chunk.copy_from_slice(row);
    }

    flat
  }
}

impl Default for Mat4 {
  fn default() -> Self {
    Mat4::IDENTITY
  }
}

impl Mul for Mat4 {
  type Output = Mat4;

  fn mul(self, rhs: Mat4) -> Self::Output {
    let mut rows = [[0.; 4]; 4];

    for (r, row) in rows.iter_mut().enumerate() {
      for (c, cell) in row.iter_mut().enumerate() {
        *cell = (0..4).map(|k| self.rows[r][k] * rhs.rows[k][c]).sum();
      }
    }

    Mat4 { rows }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn identity_is_neutral() {
    let m = Mat4::IDENTITY.translate(3., 4., 5.).scale(2., 2., 2.);

    assert_eq!(m * Mat4::IDENTITY, m);
    assert_eq!(Mat4::IDENTITY * m, m);
  }

  #[test]
  fn translate_then_scale_applies_scale_first() {
    let m = Mat4::IDENTITY.translate(1., 0., 0.).scale(2., 3., 1.);

    assert_eq!(m.transform([1., 1., 0., 1.]), [3., 3., 0., 1.]);
  }

  #[test]
  fn flat_is_row_major() {
    let m = Mat4::IDENTITY.translate(7., 8., 9.);
    let flat = m.to_flat();

    assert_eq!(flat[3], 7.);
    assert_eq!(flat[7], 8.);
    assert_eq!(flat[11], 9.);
    assert_eq!(flat[15], 1.);
  }
}
