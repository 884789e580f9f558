//! OpenGL rendering context.

use gl::types::*;
use std::rc::Rc;

use crate::buffer::{IndexBuffer, VertexBuffer};
use crate::error::assert_no_error;
use crate::framebuffer::FrameBuffer;
use crate::shader::{ColorPosShader, ColorPosTexShader, PosClrShader, PosTexShader};
use crate::state::{ContextError, Extensions, GlState, Version};
use crate::texture::{Texture2d, TextureCube, TextureDepth, TextureStencil};
use crate::vertex_array::VertexArray;
use ruis_render::blending::Factor;
use ruis_render::buffer::{Index, Vertex};
use ruis_render::context::{self as api, NativeWindow};
use ruis_render::framebuffer::FrameBufferError;
use ruis_render::matrix::Mat4;
use ruis_render::pixel::Format;
use ruis_render::rect::Rect;
use ruis_render::shader::{ProgramError, Shaders};
use ruis_render::texture::{CubeFaces, Dims, TextureError, TextureParams};
use ruis_render::vertex_array::Mode;

// indexed by Factor::index
const BLEND_FACTORS: [GLenum; Factor::COUNT] = [
  gl::ZERO,
  gl::ONE,
  gl::SRC_COLOR,
  gl::ONE_MINUS_SRC_COLOR,
  gl::DST_COLOR,
  gl::ONE_MINUS_DST_COLOR,
  gl::SRC_ALPHA,
  gl::ONE_MINUS_SRC_ALPHA,
  gl::DST_ALPHA,
  gl::ONE_MINUS_DST_ALPHA,
  gl::CONSTANT_COLOR,
  gl::ONE_MINUS_CONSTANT_COLOR,
  gl::CONSTANT_ALPHA,
  gl::ONE_MINUS_CONSTANT_ALPHA,
  gl::SRC_ALPHA_SATURATE,
];

#[inline]
fn from_blending_factor(factor: Factor) -> GLenum {
  BLEND_FACTORS[factor.index()]
}

/// Maps the unit square, origin at the top-left corner, onto OpenGL clip space.
fn initial_matrix() -> Mat4 {
  Mat4::IDENTITY
    .scale(1., -1., -1.)
    .translate(-1., -1., 0.)
    .scale(2., 2., 1.)
}

unsafe fn get_ctx_rect(name: GLenum) -> Rect {
  let mut data: [GLint; 4] = [0; 4];
  gl::GetIntegerv(name, data.as_mut_ptr());
  assert_no_error();

  Rect::new(
    data[0].max(0) as u32,
    data[1].max(0) as u32,
    data[2].max(0) as u32,
    data[3].max(0) as u32,
  )
}

unsafe fn get_ctx_enabled(cap: GLenum) -> bool {
  let enabled = gl::IsEnabled(cap) == gl::TRUE;
  assert_no_error();
  enabled
}

unsafe fn set_ctx_enabled(cap: GLenum, enable: bool) {
  if enable {
    gl::Enable(cap);
  } else {
    gl::Disable(cap);
  }

  assert_no_error();
}

/// The OpenGL rendering context.
///
/// This type implements the whole [`Context`](api::Context) interface.
#[derive(Debug)]
pub struct Context {
  state: Rc<GlState>,
}

impl Context {
  /// Create the rendering context of `window`.
  ///
  /// OpenGL functions must have been loaded with [`gl::load_with`] beforehand.
  pub fn new(window: Rc<dyn NativeWindow>) -> Result<Self, ContextError> {
    GlState::new(window).map(|state| Context {
      state: Rc::new(state),
    })
  }

  /// OpenGL version of the driver.
  pub fn version(&self) -> Version {
    self.state.version()
  }

  /// Optional extensions supported by the driver.
  pub fn extensions(&self) -> Extensions {
    self.state.extensions()
  }

  /// Handle of the window frame buffer.
  pub fn default_framebuffer(&self) -> GLuint {
    self.state.default_framebuffer()
  }

  /// Largest width or height of a texture.
  pub fn max_texture_size(&self) -> u32 {
    let mut size: GLint = 0;

    unsafe {
      gl::GetIntegerv(gl::MAX_TEXTURE_SIZE, &mut size);
      assert_no_error();
    }

    size.max(0) as u32
  }

  /// Make the rendering context current, then run `f`.
  pub fn apply<F, R>(&self, f: F) -> R
  where
    F: FnOnce() -> R,
  {
    self.state.apply();
    f()
  }
}

impl api::Context for Context {
  type Texture2d = Texture2d;
  type TextureDepth = TextureDepth;
  type TextureStencil = TextureStencil;
  type TextureCube = TextureCube;
  type VertexBuffer = VertexBuffer;
  type IndexBuffer = IndexBuffer;
  type VertexArray = VertexArray;
  type FrameBuffer = FrameBuffer;

  fn initial_matrix(&self) -> Mat4 {
    initial_matrix()
  }

  fn make_shaders(&self) -> Result<Shaders<Self>, ProgramError> {
    Ok(Shaders {
      pos_tex: Box::new(PosTexShader::new()?),
      color_pos: Box::new(ColorPosShader::new()?),
      pos_clr: Box::new(PosClrShader::new()?),
      color_pos_tex: Box::new(ColorPosTexShader::new()?),
      color_pos_tex_alpha: Box::new(ColorPosTexShader::new_alpha()?),
      color_pos_lum: Box::new(ColorPosTexShader::new_luminance()?),
    })
  }

  fn make_texture_2d(
    &self,
    format: Format,
    dims: Dims,
    texels: &[u8],
    params: TextureParams,
  ) -> Result<Texture2d, TextureError> {
    Texture2d::new(&self.state, format, dims, texels, params)
  }

  fn make_texture_depth(&self, dims: Dims) -> TextureDepth {
    TextureDepth::new(dims)
  }

  fn make_texture_stencil(&self, dims: Dims) -> TextureStencil {
    TextureStencil::new(dims)
  }

  fn make_texture_cube(&self, faces: CubeFaces) -> Result<TextureCube, TextureError> {
    TextureCube::new(&self.state, faces)
  }

  fn make_vertex_buffer<V>(&self, vertices: &[V]) -> VertexBuffer
  where
    V: Vertex,
  {
    VertexBuffer::new(vertices)
  }

  fn make_index_buffer<I>(&self, indices: &[I]) -> IndexBuffer
  where
    I: Index,
  {
    IndexBuffer::new(indices)
  }

  fn make_vertex_array(
    &self,
    buffers: Vec<Rc<VertexBuffer>>,
    indices: Rc<IndexBuffer>,
    mode: Mode,
  ) -> VertexArray {
    VertexArray::new(buffers, indices, mode)
  }

  fn make_frame_buffer(
    &self,
    color: Option<Rc<Texture2d>>,
    depth: Option<Rc<TextureDepth>>,
    stencil: Option<Rc<TextureStencil>>,
  ) -> Result<FrameBuffer, FrameBufferError> {
    FrameBuffer::new(self.state.clone(), color, depth, stencil)
  }

  fn set_frame_buffer(&self, frame_buffer: Option<&FrameBuffer>) {
    let handle = frame_buffer.map_or(self.state.default_framebuffer(), FrameBuffer::handle);

    unsafe {
      gl::BindFramebuffer(gl::FRAMEBUFFER, handle);
      assert_no_error();
    }
  }

  fn clear_frame_buffer_color(&self) {
    // the clear color is never changed from its default, transparent black
    unsafe {
      gl::Clear(gl::COLOR_BUFFER_BIT);
      assert_no_error();
    }
  }

  fn clear_frame_buffer_depth(&self) {
    // default clear depth is 1
    unsafe {
      gl::Clear(gl::DEPTH_BUFFER_BIT);
      assert_no_error();
    }
  }

  fn clear_frame_buffer_stencil(&self) {
    // default clear stencil is 0
    unsafe {
      gl::Clear(gl::STENCIL_BUFFER_BIT);
      assert_no_error();
    }
  }

  fn is_scissor_enabled(&self) -> bool {
    unsafe { get_ctx_enabled(gl::SCISSOR_TEST) }
  }

  fn enable_scissor(&self, enable: bool) {
    unsafe { set_ctx_enabled(gl::SCISSOR_TEST, enable) }
  }

  fn scissor(&self) -> Rect {
    unsafe { get_ctx_rect(gl::SCISSOR_BOX) }
  }

  fn set_scissor(&self, rect: Rect) {
    unsafe {
      gl::Scissor(
        rect.x as GLint,
        rect.y as GLint,
        rect.width as GLsizei,
        rect.height as GLsizei,
      );
      assert_no_error();
    }
  }

  fn viewport(&self) -> Rect {
    unsafe { get_ctx_rect(gl::VIEWPORT) }
  }

  fn set_viewport(&self, rect: Rect) {
    unsafe {
      gl::Viewport(
        rect.x as GLint,
        rect.y as GLint,
        rect.width as GLsizei,
        rect.height as GLsizei,
      );
      assert_no_error();
    }
  }

  fn enable_blend(&self, enable: bool) {
    unsafe { set_ctx_enabled(gl::BLEND, enable) }
  }

  fn set_blend_func(
    &self,
    src_color: Factor,
    dst_color: Factor,
    src_alpha: Factor,
    dst_alpha: Factor,
  ) {
    unsafe {
      gl::BlendFuncSeparate(
        from_blending_factor(src_color),
        from_blending_factor(dst_color),
        from_blending_factor(src_alpha),
        from_blending_factor(dst_alpha),
      );
      assert_no_error();
    }
  }

  fn is_depth_enabled(&self) -> bool {
    unsafe { get_ctx_enabled(gl::DEPTH_TEST) }
  }

  fn enable_depth(&self, enable: bool) {
    unsafe { set_ctx_enabled(gl::DEPTH_TEST, enable) }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashSet;

  #[test]
  fn blend_factors_are_distinct() {
    let factors: HashSet<GLenum> = Factor::ALL
      .iter()
      .map(|&f| from_blending_factor(f))
      .collect();

    assert_eq!(factors.len(), Factor::COUNT);
  }

  #[test]
  fn blend_factors() {
    assert_eq!(from_blending_factor(Factor::Zero), gl::ZERO);
    assert_eq!(from_blending_factor(Factor::One), gl::ONE);
    assert_eq!(
      from_blending_factor(Factor::OneMinusSrcAlpha),
      gl::ONE_MINUS_SRC_ALPHA
    );
    assert_eq!(
      from_blending_factor(Factor::OneMinusConstantAlpha),
      gl::ONE_MINUS_CONSTANT_ALPHA
    );
    assert_eq!(
      from_blending_factor(Factor::SrcAlphaSaturate),
      gl::SRC_ALPHA_SATURATE
    );
  }

  #[test]
  fn initial_matrix_maps_unit_square_to_clip_space() {
    let m = initial_matrix();

    assert_eq!(m.transform([0., 0., 0., 1.]), [-1., 1., 0., 1.]);
    assert_eq!(m.transform([1., 1., 0., 1.]), [1., -1., 0., 1.]);
    assert_eq!(m.transform([0.5, 0.5, 0., 1.]), [0., 0., 0., 1.]);
  }
}
