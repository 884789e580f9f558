//! OpenGL vertex arrays.
//!
//! No vertex array object is created: the buffers are bound to attribute slots on every draw.

use gl::types::*;
use std::ptr;
use std::rc::Rc;

use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::context::Context;
use crate::error::assert_no_error;
use ruis_render::buffer::VertexBuffer as _;
use ruis_render::vertex_array::{self as api, Mode};

/// OpenGL primitive of a [`Mode`].
pub(crate) fn opengl_mode(mode: Mode) -> GLenum {
  match mode {
    Mode::Triangles => gl::TRIANGLES,
    Mode::TriangleFan => gl::TRIANGLE_FAN,
    Mode::LineLoop => gl::LINE_LOOP,
    Mode::TriangleStrip => gl::TRIANGLE_STRIP,
  }
}

/// OpenGL vertex array.
#[derive(Debug)]
pub struct VertexArray {
  buffers: Vec<Rc<VertexBuffer>>,
  indices: Rc<IndexBuffer>,
  mode: Mode,
}

impl VertexArray {
  pub(crate) fn new(buffers: Vec<Rc<VertexBuffer>>, indices: Rc<IndexBuffer>, mode: Mode) -> Self {
    VertexArray {
      buffers,
      indices,
      mode,
    }
  }

  /// Bind the i-th vertex buffer to the i-th attribute slot, then bind the index buffer.
  pub fn bind_buffers(&self) {
    unsafe {
      for (i, buffer) in self.buffers.iter().enumerate() {
        let index = i as GLuint;

        gl::BindBuffer(gl::ARRAY_BUFFER, buffer.handle());
        assert_no_error();

        gl::VertexAttribPointer(
          index,
          buffer.components() as GLint,
          gl::FLOAT,
          gl::FALSE,
          0,
          ptr::null(),
        );
        assert_no_error();

        gl::EnableVertexAttribArray(index);
        assert_no_error();
      }

      gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, self.indices.handle());
      assert_no_error();
    }
  }
}

impl api::VertexArray<Context> for VertexArray {
  fn buffers(&self) -> &[Rc<VertexBuffer>] {
    &self.buffers
  }

  fn indices(&self) -> &Rc<IndexBuffer> {
    &self.indices
  }

  fn mode(&self) -> Mode {
    self.mode
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn modes() {
    assert_eq!(opengl_mode(Mode::Triangles), gl::TRIANGLES);
    assert_eq!(opengl_mode(Mode::TriangleFan), gl::TRIANGLE_FAN);
    assert_eq!(opengl_mode(Mode::LineLoop), gl::LINE_LOOP);
    assert_eq!(opengl_mode(Mode::TriangleStrip), gl::TRIANGLE_STRIP);
  }
}
