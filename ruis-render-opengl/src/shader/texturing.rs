//! Texturing shaders.
//!
//! The texture is always sampled from texture unit 0, with the texture coordinates of attribute
//! `a1`.

use gl::types::*;

use super::ShaderBase;
use crate::context::Context;
use crate::texture::Texture2d;
use crate::vertex_array::VertexArray;
use ruis_render::matrix::Mat4;
use ruis_render::shader::{Color, ColoringTexturingShader, ProgramError, TexturingShader};

const TEXTURE_UNIT: u32 = 0;

const VS: &str = include_str!("glsl/pos-tex-vs.glsl");
const TEX_FS: &str = include_str!("glsl/tex-fs.glsl");
const COLOR_TEX_FS: &str = include_str!("glsl/color-tex-fs.glsl");
const COLOR_TEX_ALPHA_FS: &str = include_str!("glsl/color-tex-alpha-fs.glsl");
const COLOR_LUM_FS: &str = include_str!("glsl/color-lum-fs.glsl");

/// Maps a texture onto geometry.
#[derive(Debug)]
pub struct PosTexShader {
  base: ShaderBase,
  texture_uniform: GLint,
}

impl PosTexShader {
  pub(crate) fn new() -> Result<Self, ProgramError> {
    let base = ShaderBase::new(VS, TEX_FS)?;
    let texture_uniform = base.uniform("texture0")?;

    Ok(PosTexShader {
      base,
      texture_uniform,
    })
  }
}

impl TexturingShader<Context> for PosTexShader {
  fn render(&self, matrix: &Mat4, va: &VertexArray, tex: &Texture2d) {
    tex.bind(TEXTURE_UNIT);
    self.base.bind();
    self
      .base
      .set_uniform_texture_unit(self.texture_uniform, TEXTURE_UNIT);
    self.base.render(matrix, va);
  }
}

/// Maps a texture onto geometry and combines it with a color.
///
/// How both are combined depends on the fragment shader the value was built with.
#[derive(Debug)]
pub struct ColorPosTexShader {
  base: ShaderBase,
  texture_uniform: GLint,
  color_uniform: GLint,
}

impl ColorPosTexShader {
  fn with_fragment_shader(fs: &str) -> Result<Self, ProgramError> {
    let base = ShaderBase::new(VS, fs)?;
    let texture_uniform = base.uniform("texture0")?;
    let color_uniform = base.uniform("uniform_color")?;

    Ok(ColorPosTexShader {
      base,
      texture_uniform,
      color_uniform,
    })
  }

  /// Texture tinted by the color: both are multiplied.
  pub(crate) fn new() -> Result<Self, ProgramError> {
    Self::with_fragment_shader(COLOR_TEX_FS)
  }

  /// Color whose alpha is multiplied by the red channel of the texture.
  pub(crate) fn new_alpha() -> Result<Self, ProgramError> {
    Self::with_fragment_shader(COLOR_TEX_ALPHA_FS)
  }

  /// Color whose alpha is multiplied by the luminance of the texture.
  pub(crate) fn new_luminance() -> Result<Self, ProgramError> {
    Self::with_fragment_shader(COLOR_LUM_FS)
  }
}

impl ColoringTexturingShader<Context> for ColorPosTexShader {
  fn render(&self, matrix: &Mat4, va: &VertexArray, color: Color, tex: &Texture2d) {
    tex.bind(TEXTURE_UNIT);
    self.base.bind();
    self
      .base
      .set_uniform_texture_unit(self.texture_uniform, TEXTURE_UNIT);
    self.base.set_uniform_color(self.color_uniform, color);
    self.base.render(matrix, va);
  }
}
