//! Vertex arrays.
//!
//! A vertex array is the unit of geometry the shaders draw: a list of vertex buffers, one index
//! buffer and the way indexed vertices are assembled into primitives.
//!
//! The i-th vertex buffer feeds the i-th vertex attribute of the shader, which shaders declare as
//! `a0`, `a1`, etc.

use std::rc::Rc;

use crate::context::Context;

/// Primitive mode.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Mode {
  /// Every three indices form a triangle.
  Triangles,
  /// The first vertex is shared by every triangle; each new vertex forms a triangle with the
  /// previous one and the first one.
  TriangleFan,
  /// Consecutive vertices are connected by lines, and the last one is connected back to the first.
  LineLoop,
  /// Each new vertex forms a triangle with the two previous ones.
  TriangleStrip,
}

/// A set of vertex buffers, an index buffer and a primitive mode.
pub trait VertexArray<C>
where
  C: ?Sized + Context,
{
  /// Vertex buffers, in attribute order.
  fn buffers(&self) -> &[Rc<C::VertexBuffer>];

  /// Index buffer.
  fn indices(&self) -> &Rc<C::IndexBuffer>;

  /// Primitive mode.
  fn mode(&self) -> Mode;
}
