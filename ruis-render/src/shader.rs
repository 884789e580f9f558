//! Shader API.
//!
//! The toolkit does not write shaders: the backend ships a fixed set of shader variants, gathered
//! in [`Shaders`]. Every variant draws a [`VertexArray`] transformed by a matrix; they differ in the
//! vertex attributes they read and the extra inputs (color, texture) they take.
//!
//! | variant | attributes | extra inputs |
//! |---|---|---|
//! | `pos_tex` | position, texture coordinates | texture |
//! | `color_pos` | position | color |
//! | `pos_clr` | position, per-vertex color | – |
//! | `color_pos_tex` | position, texture coordinates | color, texture |
//! | `color_pos_tex_alpha` | position, texture coordinates | color, alpha-only texture |
//! | `color_pos_lum` | position, texture coordinates | color, luminance texture |
//!
//! [`VertexArray`]: crate::vertex_array::VertexArray

use std::error;
use std::fmt;

use crate::context::Context;
use crate::matrix::Mat4;

/// RGBA color, each component in *[0;1]*.
pub type Color = [f32; 4];

/// A shader stage type.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum StageType {
  /// Vertex shader.
  VertexShader,
  /// Fragment shader.
  FragmentShader,
}

impl fmt::Display for StageType {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageType::VertexShader => f.write_str("vertex shader"),
      StageType::FragmentShader => f.write_str("fragment shader"),
    }
  }
}

/// Errors that shader stages can emit.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum StageError {
  /// The driver refused to create the stage.
  CreationFailed(StageType),
  /// The stage failed to compile. The `String` is the compilation log.
  CompilationFailed(StageType, String),
}

impl StageError {
  /// Type of the failing stage.
  pub fn stage_type(&self) -> StageType {
    match *self {
      StageError::CreationFailed(ty) | StageError::CompilationFailed(ty, _) => ty,
    }
  }
}

impl fmt::Display for StageError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      StageError::CreationFailed(ref ty) => write!(f, "cannot create {}", ty),

      StageError::CompilationFailed(ref ty, ref log) => {
        write!(f, "{} compilation error: {}", ty, log)
      }
    }
  }
}

impl error::Error for StageError {}

/// Errors that a shader program can generate.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ProgramError {
  /// A shader stage failed to compile.
  StageError(StageError),
  /// Program link failed. The `String` is the link log.
  LinkFailed(String),
  /// A uniform the variant relies on is not declared (or not used) by the shader sources.
  UniformNotFound(String),
}

impl fmt::Display for ProgramError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ProgramError::StageError(ref e) => write!(f, "shader program has stage error: {}", e),

      ProgramError::LinkFailed(ref log) => write!(f, "shader program failed to link: {}", log),

      ProgramError::UniformNotFound(ref name) => {
        write!(f, "no uniform found in the shader program: {}", name)
      }
    }
  }
}

impl error::Error for ProgramError {
  fn source(&self) -> Option<&(dyn error::Error + 'static)> {
    match self {
      ProgramError::StageError(e) => Some(e),
      _ => None,
    }
  }
}

impl From<StageError> for ProgramError {
  fn from(e: StageError) -> Self {
    ProgramError::StageError(e)
  }
}

/// Shader drawing vertices with their own per-vertex colors.
pub trait VertexColorShader<C>
where
  C: Context,
{
  /// Draw `va` transformed by `matrix`.
  fn render(&self, matrix: &Mat4, va: &C::VertexArray);
}

/// Shader filling geometry with a single color.
pub trait ColoringShader<C>
where
  C: Context,
{
  /// Draw `va` transformed by `matrix`, filled with `color`.
  fn render(&self, matrix: &Mat4, va: &C::VertexArray, color: Color);
}

/// Shader mapping a texture onto geometry.
pub trait TexturingShader<C>
where
  C: Context,
{
  /// Draw `va` transformed by `matrix`, textured with `tex`.
  fn render(&self, matrix: &Mat4, va: &C::VertexArray, tex: &C::Texture2d);
}

/// Shader mapping a texture onto geometry and combining it with a color.
pub trait ColoringTexturingShader<C>
where
  C: Context,
{
  /// Draw `va` transformed by `matrix`, textured with `tex` and tinted with `color`.
  fn render(&self, matrix: &Mat4, va: &C::VertexArray, color: Color, tex: &C::Texture2d);
}

/// The shader variants a backend provides.
pub struct Shaders<C>
where
  C: Context,
{
  /// Textured geometry.
  pub pos_tex: Box<dyn TexturingShader<C>>,
  /// Geometry filled with a uniform color.
  pub color_pos: Box<dyn ColoringShader<C>>,
  /// Geometry with per-vertex colors.
  pub pos_clr: Box<dyn VertexColorShader<C>>,
  /// Textured geometry tinted with a color.
  pub color_pos_tex: Box<dyn ColoringTexturingShader<C>>,
  /// Geometry filled with a color whose alpha is modulated by a single-channel texture.
  pub color_pos_tex_alpha: Box<dyn ColoringTexturingShader<C>>,
  /// Geometry filled with a color whose alpha is modulated by a luminance texture.
  pub color_pos_lum: Box<dyn ColoringTexturingShader<C>>,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn stage_error_converts_into_program_error() {
    let e = StageError::CompilationFailed(StageType::FragmentShader, "oops".to_owned());
    let program_error: ProgramError = e.clone().into();

    assert_eq!(program_error, ProgramError::StageError(e));
    assert_eq!(
      program_error.to_string(),
      "shader program has stage error: fragment shader compilation error: oops"
    );
  }

  #[test]
  fn missing_uniform_message_names_it() {
    let e = ProgramError::UniformNotFound("matrix".to_owned());
    assert!(e.to_string().ends_with("matrix"));
  }
}
