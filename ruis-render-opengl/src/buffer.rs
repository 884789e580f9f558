//! OpenGL buffer implementation.

use gl::types::*;
use log::debug;
use std::mem;

use crate::error::assert_no_error;
use ruis_render::buffer::{self as api, Index, IndexType, Vertex};

/// Wrapped OpenGL buffer.
///
/// Used to drop the buffer.
#[derive(Debug)]
struct BufferWrapper {
  handle: GLuint,
}

impl BufferWrapper {
  /// Create a buffer bound to `target` and fill it with `data`, once and for all.
  unsafe fn from_slice<T>(target: GLenum, data: &[T]) -> Self {
    let mut handle: GLuint = 0;

    gl::GenBuffers(1, &mut handle);
    assert_no_error();

    gl::BindBuffer(target, handle);
    assert_no_error();

    gl::BufferData(
      target,
      mem::size_of_val(data) as GLsizeiptr,
      data.as_ptr() as _,
      gl::STATIC_DRAW,
    );
    assert_no_error();

    BufferWrapper { handle }
  }
}

impl Drop for BufferWrapper {
  fn drop(&mut self) {
    // deleting a bound buffer unbinds it
    unsafe {
      gl::DeleteBuffers(1, &self.handle);
    }
  }
}

/// OpenGL vertex buffer.
#[derive(Debug)]
pub struct VertexBuffer {
  buf: BufferWrapper,
  components: usize,
  len: usize,
}

impl VertexBuffer {
  pub(crate) fn new<V>(vertices: &[V]) -> Self
  where
    V: Vertex,
  {
    let buf = unsafe { BufferWrapper::from_slice(gl::ARRAY_BUFFER, vertices) };

    debug!(
      "created vertex buffer {} of {} vertices with {} components",
      buf.handle,
      vertices.len(),
      V::COMPONENTS
    );

    VertexBuffer {
      buf,
      components: V::COMPONENTS,
      len: vertices.len(),
    }
  }

  /// OpenGL handle of the buffer.
  pub fn handle(&self) -> GLuint {
    self.buf.handle
  }
}

impl api::VertexBuffer for VertexBuffer {
  fn components(&self) -> usize {
    self.components
  }

  fn elements_count(&self) -> usize {
    self.len
  }
}

/// OpenGL type of an index.
pub(crate) fn opengl_index_type(ty: IndexType) -> GLenum {
  match ty {
    IndexType::U16 => gl::UNSIGNED_SHORT,
    IndexType::U32 => gl::UNSIGNED_INT,
  }
}

/// OpenGL index buffer.
#[derive(Debug)]
pub struct IndexBuffer {
  buf: BufferWrapper,
  index_type: IndexType,
  len: usize,
}

impl IndexBuffer {
  pub(crate) fn new<I>(indices: &[I]) -> Self
  where
    I: Index,
  {
    let buf = unsafe { BufferWrapper::from_slice(gl::ELEMENT_ARRAY_BUFFER, indices) };

    debug!(
      "created index buffer {} of {} {:?} indices",
      buf.handle,
      indices.len(),
      I::TYPE
    );

    IndexBuffer {
      buf,
      index_type: I::TYPE,
      len: indices.len(),
    }
  }

  /// OpenGL handle of the buffer.
  pub fn handle(&self) -> GLuint {
    self.buf.handle
  }
}

impl api::IndexBuffer for IndexBuffer {
  fn index_type(&self) -> IndexType {
    self.index_type
  }

  fn elements_count(&self) -> usize {
    self.len
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn index_types() {
    assert_eq!(opengl_index_type(u16::TYPE), gl::UNSIGNED_SHORT);
    assert_eq!(opengl_index_type(u32::TYPE), gl::UNSIGNED_INT);
  }
}
