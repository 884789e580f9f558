//! Buffers remember the shape of what they were filled with.

use gl::types::*;
use ruis_render::buffer::{IndexBuffer as _, IndexType, VertexBuffer as _};
use ruis_render::context::Context as _;
use ruis_render_opengl::assert_no_error;

use crate::surface::Surface;

fn bound_array_buffer() -> GLuint {
  let mut handle: GLint = 0;
  unsafe { gl::GetIntegerv(gl::ARRAY_BUFFER_BINDING, &mut handle) };
  handle as GLuint
}

pub fn fixture() {
  let surface = Surface::new("buffer-arity");
  let ctx = &surface.context;

  let vb = ctx.make_vertex_buffer(&[0f32, 1., 2.]);
  assert_eq!((vb.components(), vb.elements_count()), (1, 3));

  let vb = ctx.make_vertex_buffer(&[[0f32, 1.], [2., 3.]]);
  assert_eq!((vb.components(), vb.elements_count()), (2, 2));

  let vb = ctx.make_vertex_buffer(&[[0f32, 1., 2.]]);
  assert_eq!((vb.components(), vb.elements_count()), (3, 1));

  let vb = ctx.make_vertex_buffer(&[[0f32, 1., 2., 3.]; 5]);
  assert_eq!((vb.components(), vb.elements_count()), (4, 5));

  let ib = ctx.make_index_buffer(&[0u16, 1, 2, 0, 2, 3]);
  assert_eq!((ib.index_type(), ib.elements_count()), (IndexType::U16, 6));

  let ib = ctx.make_index_buffer(&[0u32, 1, 2]);
  assert_eq!((ib.index_type(), ib.elements_count()), (IndexType::U32, 3));

  let empty = ctx.make_index_buffer::<u16>(&[]);
  assert_eq!(empty.elements_count(), 0);

  // dropping a buffer leaves other bindings alone
  let bound = ctx.make_vertex_buffer(&[0f32; 4]);
  let other = ctx.make_vertex_buffer(&[1f32; 4]);
  unsafe { gl::BindBuffer(gl::ARRAY_BUFFER, bound.handle()) };

  drop(other);
  drop(ib);
  drop(empty);
  assert_eq!(bound_array_buffer(), bound.handle());

  assert_no_error();
}
