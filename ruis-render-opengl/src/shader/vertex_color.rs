//! Per-vertex color shader.

use super::ShaderBase;
use crate::context::Context;
use crate::vertex_array::VertexArray;
use ruis_render::matrix::Mat4;
use ruis_render::shader::{ProgramError, VertexColorShader};

const VS: &str = include_str!("glsl/pos-clr-vs.glsl");
const FS: &str = include_str!("glsl/clr-fs.glsl");

/// Colors every vertex with its own RGBA color, interpolated across primitives.
///
/// Reads positions from attribute `a0` and colors from attribute `a1`.
#[derive(Debug)]
pub struct PosClrShader {
  base: ShaderBase,
}

impl PosClrShader {
  pub(crate) fn new() -> Result<Self, ProgramError> {
    ShaderBase::new(VS, FS).map(|base| PosClrShader { base })
  }
}

impl VertexColorShader<Context> for PosClrShader {
  fn render(&self, matrix: &Mat4, va: &VertexArray) {
    self.base.bind();
    self.base.render(matrix, va);
  }
}
