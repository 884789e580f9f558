//! OpenGL shader programs.
//!
//! Every shader variant is a [`ShaderBase`]: a vertex and a fragment stage linked into a program,
//! the `matrix` uniform, and the draw call. Vertex attribute `i` is always named `a<i>` in GLSL,
//! which is how vertex buffers of a [`VertexArray`] are matched with shader inputs.

use gl::types::*;
use log::{debug, error};
use std::ffi::CString;
use std::ptr;

use crate::buffer::opengl_index_type;
use crate::error::assert_no_error;
use crate::state::get_ctx_current_program;
use crate::vertex_array::{opengl_mode, VertexArray};
use ruis_render::buffer::IndexBuffer as _;
use ruis_render::matrix::Mat4;
use ruis_render::shader::{Color, ProgramError, StageError, StageType};
use ruis_render::vertex_array::VertexArray as _;

mod coloring;
mod texturing;
mod vertex_color;

pub use self::coloring::ColorPosShader;
pub use self::texturing::{ColorPosTexShader, PosTexShader};
pub use self::vertex_color::PosClrShader;

fn opengl_shader_type(ty: StageType) -> GLenum {
  match ty {
    StageType::VertexShader => gl::VERTEX_SHADER,
    StageType::FragmentShader => gl::FRAGMENT_SHADER,
  }
}

// Read an info log of `len` bytes, including the terminating NUL.
fn read_info_log(len: GLint, read: impl FnOnce(GLsizei, *mut GLchar)) -> String {
  if len <= 1 {
    return String::new();
  }

  let mut log = vec![0u8; len as usize];
  read(len, log.as_mut_ptr() as *mut GLchar);

  let end = log.iter().position(|&c| c == 0).unwrap_or(log.len());
  log.truncate(end);

  String::from_utf8_lossy(&log).into_owned()
}

#[derive(Debug)]
pub(crate) struct Stage {
  handle: GLuint,
  ty: StageType,
}

impl Drop for Stage {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteShader(self.handle);
    }
  }
}

impl Stage {
  pub(crate) fn new(ty: StageType, src: &str) -> Result<Self, StageError> {
    unsafe {
      let handle = gl::CreateShader(opengl_shader_type(ty));

      if handle == 0 {
        return Err(StageError::CreationFailed(ty));
      }

      let stage = Stage { handle, ty };

      let c_src = CString::new(src.as_bytes()).map_err(|_| {
        StageError::CompilationFailed(ty, "shader source contains a NUL byte".to_owned())
      })?;
      gl::ShaderSource(handle, 1, [c_src.as_ptr()].as_ptr(), ptr::null());
      gl::CompileShader(handle);

      let mut compiled: GLint = gl::FALSE.into();
      gl::GetShaderiv(handle, gl::COMPILE_STATUS, &mut compiled);

      if compiled == gl::TRUE.into() {
        Ok(stage)
      } else {
        let mut log_len: GLint = 0;
        gl::GetShaderiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let log = read_info_log(log_len, |len, buf| {
          gl::GetShaderInfoLog(handle, len, ptr::null_mut(), buf)
        });

        error!("{} compile log:\n{}", stage.ty, log);
        error!("while compiling:\n{}", src);

        Err(StageError::CompilationFailed(ty, log))
      }
    }
  }
}

#[derive(Debug)]
pub(crate) struct Program {
  handle: GLuint,
}

impl Drop for Program {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteProgram(self.handle);
    }
  }
}

impl Program {
  /// Compile both stages and link them.
  ///
  /// Attribute `i` is bound to the name `a<i>`, for every attribute slot of the driver.
  pub(crate) fn new(vertex_src: &str, fragment_src: &str) -> Result<Self, ProgramError> {
    let vertex = Stage::new(StageType::VertexShader, vertex_src)?;
    let fragment = Stage::new(StageType::FragmentShader, fragment_src)?;

    unsafe {
      let program = Program {
        handle: gl::CreateProgram(),
      };

      gl::AttachShader(program.handle, vertex.handle);
      gl::AttachShader(program.handle, fragment.handle);

      let mut max_attribs: GLint = 0;
      gl::GetIntegerv(gl::MAX_VERTEX_ATTRIBS, &mut max_attribs);
      assert_no_error();

      for i in 0..max_attribs.max(0) as GLuint {
        // names never hold a NUL byte
        if let Ok(name) = CString::new(format!("a{}", i)) {
          gl::BindAttribLocation(program.handle, i, name.as_ptr() as *const GLchar);
          assert_no_error();
        }
      }

      program.link().map_err(|e| {
        error!("while linking:\n{}\n{}", vertex_src, fragment_src);
        e
      })?;

      Ok(program)
    }
  }

  fn link(&self) -> Result<(), ProgramError> {
    let handle = self.handle;

    unsafe {
      gl::LinkProgram(handle);

      let mut linked: GLint = gl::FALSE.into();
      gl::GetProgramiv(handle, gl::LINK_STATUS, &mut linked);

      if linked == gl::TRUE.into() {
        Ok(())
      } else {
        let mut log_len: GLint = 0;
        gl::GetProgramiv(handle, gl::INFO_LOG_LENGTH, &mut log_len);

        let log = read_info_log(log_len, |len, buf| {
          gl::GetProgramInfoLog(handle, len, ptr::null_mut(), buf)
        });

        error!("link log:\n{}", log);

        Err(ProgramError::LinkFailed(log))
      }
    }
  }
}

/// A linked shader program and its `matrix` uniform.
#[derive(Debug)]
pub struct ShaderBase {
  program: Program,
  matrix_uniform: GLint,
}

impl ShaderBase {
  /// Compile and link a program from GLSL sources.
  ///
  /// Both sources must be legacy GLSL, read vertex attributes from `a0`, `a1`… and declare a
  /// `uniform mat4 matrix` that the vertex stage uses.
  pub fn new(vertex_src: &str, fragment_src: &str) -> Result<Self, ProgramError> {
    let program = Program::new(vertex_src, fragment_src)?;

    let mut base = ShaderBase {
      program,
      matrix_uniform: -1,
    };
    base.matrix_uniform = base.uniform("matrix")?;

    debug!("created shader program {}", base.program.handle);

    Ok(base)
  }

  /// Location of the uniform `name`.
  ///
  /// Uniforms that are declared but unused by the sources are optimized away by drivers, and are
  /// not found either.
  pub fn uniform(&self, name: &str) -> Result<GLint, ProgramError> {
    let not_found = || ProgramError::UniformNotFound(name.to_owned());

    let c_name = CString::new(name.as_bytes()).map_err(|_| not_found())?;
    let location =
      unsafe { gl::GetUniformLocation(self.program.handle, c_name.as_ptr() as *const GLchar) };

    if location < 0 {
      return Err(not_found());
    }

    Ok(location)
  }

  /// Make this program the current one.
  pub fn bind(&self) {
    unsafe {
      gl::UseProgram(self.program.handle);
      assert_no_error();
    }
  }

  /// Whether this program is the current one.
  pub fn is_bound(&self) -> bool {
    unsafe { get_ctx_current_program() == self.program.handle }
  }

  /// OpenGL handle of the program.
  pub fn handle(&self) -> GLuint {
    self.program.handle
  }

  pub(crate) fn set_uniform_color(&self, location: GLint, color: Color) {
    unsafe {
      gl::Uniform4f(location, color[0], color[1], color[2], color[3]);
      assert_no_error();
    }
  }

  pub(crate) fn set_uniform_texture_unit(&self, location: GLint, unit: u32) {
    unsafe {
      gl::Uniform1i(location, unit as GLint);
      assert_no_error();
    }
  }

  /// Draw `va`, transformed by `matrix`.
  ///
  /// The program must be bound.
  pub fn render(&self, matrix: &Mat4, va: &VertexArray) {
    debug_assert!(self.is_bound(), "rendering with an unbound shader program");

    let indices = va.indices();

    unsafe {
      // matrices are row-major
      gl::UniformMatrix4fv(self.matrix_uniform, 1, gl::TRUE, matrix.to_flat().as_ptr());
      assert_no_error();

      va.bind_buffers();

      gl::DrawElements(
        opengl_mode(va.mode()),
        indices.elements_count() as GLsizei,
        opengl_index_type(indices.index_type()),
        ptr::null(),
      );
      assert_no_error();
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn shader_types() {
    assert_eq!(
      opengl_shader_type(StageType::VertexShader),
      gl::VERTEX_SHADER
    );
    assert_eq!(
      opengl_shader_type(StageType::FragmentShader),
      gl::FRAGMENT_SHADER
    );
  }

  #[test]
  fn info_log_stops_at_nul() {
    let log = read_info_log(8, |len, buf| {
      assert_eq!(len, 8);
      let bytes = b"oops\0\0\0\0";
      unsafe { ptr::copy_nonoverlapping(bytes.as_ptr() as *const GLchar, buf, bytes.len()) };
    });

    assert_eq!(log, "oops");
  }

  #[test]
  fn empty_info_log() {
    let log = read_info_log(1, |_, _| panic!("nothing to read"));
    assert!(log.is_empty());
  }
}
