//! Single color shader.

use gl::types::*;

use super::ShaderBase;
use crate::context::Context;
use crate::vertex_array::VertexArray;
use ruis_render::matrix::Mat4;
use ruis_render::shader::{Color, ColoringShader, ProgramError};

const VS: &str = include_str!("glsl/pos-vs.glsl");
const FS: &str = include_str!("glsl/color-fs.glsl");

/// Fills geometry with a uniform color.
///
/// Reads positions from attribute `a0`.
#[derive(Debug)]
pub struct ColorPosShader {
  base: ShaderBase,
  color_uniform: GLint,
}

impl ColorPosShader {
  pub(crate) fn new() -> Result<Self, ProgramError> {
    let base = ShaderBase::new(VS, FS)?;
    let color_uniform = base.uniform("uniform_color")?;

    Ok(ColorPosShader {
      base,
      color_uniform,
    })
  }
}

impl ColoringShader<Context> for ColorPosShader {
  fn render(&self, matrix: &Mat4, va: &VertexArray, color: Color) {
    self.base.bind();
    self.base.set_uniform_color(self.color_uniform, color);
    self.base.render(matrix, va);
  }
}
