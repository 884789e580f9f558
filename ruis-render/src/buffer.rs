//! Vertex and index buffers.
//!
//! Buffers are filled once, at creation, and never written to afterwards.

/// Types that can be stored in a vertex buffer.
///
/// A vertex is made of 1 to 4 `f32` components.
///
/// # Safety
///
/// Implementors must be laid out as exactly [`Vertex::COMPONENTS`] contiguous `f32`s, since their
/// memory is handed to the graphics driver as-is.
pub unsafe trait Vertex: Copy {
  /// Number of `f32` components per vertex.
  const COMPONENTS: usize;
}

unsafe impl Vertex for f32 {
  const COMPONENTS: usize = 1;
}

unsafe impl Vertex for [f32; 2] {
  const COMPONENTS: usize = 2;
}

unsafe impl Vertex for [f32; 3] {
  const COMPONENTS: usize = 3;
}

unsafe impl Vertex for [f32; 4] {
  const COMPONENTS: usize = 4;
}

/// Width of the elements of an index buffer.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum IndexType {
  /// 16-bit unsigned indices.
  U16,
  /// 32-bit unsigned indices.
  U32,
}

impl IndexType {
  /// Size of an index, in bytes.
  pub fn bytes(self) -> usize {
    match self {
      IndexType::U16 => 2,
      IndexType::U32 => 4,
    }
  }
}

/// Types that can be stored in an index buffer.
///
/// # Safety
///
/// Implementors must be the unsigned integer described by [`Index::TYPE`].
pub unsafe trait Index: Copy {
  /// Width of the index.
  const TYPE: IndexType;
}

unsafe impl Index for u16 {
  const TYPE: IndexType = IndexType::U16;
}

unsafe impl Index for u32 {
  const TYPE: IndexType = IndexType::U32;
}

/// A GPU vertex buffer.
pub trait VertexBuffer {
  /// Number of `f32` components per vertex.
  fn components(&self) -> usize;

  /// Number of vertices.
  fn elements_count(&self) -> usize;
}

/// A GPU index buffer.
pub trait IndexBuffer {
  /// Width of the indices.
  fn index_type(&self) -> IndexType;

  /// Number of indices.
  fn elements_count(&self) -> usize;
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::mem;

  fn assert_vertex<V: Vertex>(components: usize) {
    assert_eq!(V::COMPONENTS, components);
    assert_eq!(mem::size_of::<V>(), components * mem::size_of::<f32>());
  }

  #[test]
  fn vertex_components() {
    assert_vertex::<f32>(1);
    assert_vertex::<[f32; 2]>(2);
    assert_vertex::<[f32; 3]>(3);
    assert_vertex::<[f32; 4]>(4);
  }

  #[test]
  fn index_width() {
    assert_eq!(u16::TYPE, IndexType::U16);
    assert_eq!(u32::TYPE, IndexType::U32);
    assert_eq!(u16::TYPE.bytes(), mem::size_of::<u16>());
    assert_eq!(u32::TYPE.bytes(), mem::size_of::<u32>());
  }
}
