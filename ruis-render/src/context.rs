//! Rendering context.
//!
//! A rendering context is the entry point of a backend: it creates every GPU resource and owns the
//! global render state (viewport, scissor, blending, depth test and the bound frame buffer).
//!
//! Resource types are associated types of [`Context`], so a backend’s shaders receive the backend’s
//! own vertex arrays and textures and never have to guess what concrete type they are given.

use std::rc::Rc;

use crate::blending::Factor;
use crate::buffer::{self, Index, Vertex};
use crate::framebuffer::{self, FrameBufferError};
use crate::matrix::Mat4;
use crate::pixel::{Format, Image};
use crate::rect::Rect;
use crate::shader::{ProgramError, Shaders};
use crate::texture::{self, CubeFaces, Dims, TextureError, TextureParams};
use crate::vertex_array::{self, Mode};

/// A native window owning a rendering context.
///
/// The windowing layer implements this trait; a backend uses it to make the window’s rendering
/// context current before touching GPU state, for instance when a resource is released.
pub trait NativeWindow {
  /// Make the window’s rendering context the current one on the calling thread.
  fn bind_rendering_context(&self);
}

/// Class of rendering contexts.
///
/// Such a context must not be `Send` nor `Sync`: it and its resources stay on the thread their
/// rendering context is current on.
pub trait Context: Sized + 'static {
  /// 2D color texture.
  type Texture2d: texture::Texture2d;

  /// Depth texture.
  type TextureDepth: texture::TextureDepth;

  /// Stencil texture.
  type TextureStencil: texture::TextureStencil;

  /// Cube texture.
  type TextureCube: texture::TextureCube;

  /// Vertex buffer.
  type VertexBuffer: buffer::VertexBuffer;

  /// Index buffer.
  type IndexBuffer: buffer::IndexBuffer;

  /// Vertex array.
  type VertexArray: vertex_array::VertexArray<Self>;

  /// Frame buffer.
  type FrameBuffer: framebuffer::FrameBuffer<Self>;

  /// Matrix mapping the toolkit’s unit square, origin at the top-left corner and y pointing down,
  /// onto the backend’s clip space.
  fn initial_matrix(&self) -> Mat4;

  /// Compile every shader variant.
  fn make_shaders(&self) -> Result<Shaders<Self>, ProgramError>;

  /// Create a 2D texture out of raw pixels.
  ///
  /// Empty `texels` allocate the texture without initializing it. Otherwise `texels` must be exactly
  /// `dims[1]` rows of `dims[0]` pixels of format `format`, the first row being the bottom one.
  fn make_texture_2d(
    &self,
    format: Format,
    dims: Dims,
    texels: &[u8],
    params: TextureParams,
  ) -> Result<Self::Texture2d, TextureError>;

  /// Create a 2D texture out of an image.
  ///
  /// Images store their rows top to bottom, so the image is flipped before being uploaded.
  fn make_texture_2d_from_image(
    &self,
    mut image: Image,
    params: TextureParams,
  ) -> Result<Self::Texture2d, TextureError> {
    image.flip_vertical();
    self.make_texture_2d(image.format(), image.dims(), image.pixels(), params)
  }

  /// Create an uninitialized depth texture.
  fn make_texture_depth(&self, dims: Dims) -> Self::TextureDepth;

  /// Create an uninitialized stencil texture.
  fn make_texture_stencil(&self, dims: Dims) -> Self::TextureStencil;

  /// Create a cube texture out of its six faces.
  fn make_texture_cube(&self, faces: CubeFaces) -> Result<Self::TextureCube, TextureError>;

  /// Create a vertex buffer holding `vertices`.
  fn make_vertex_buffer<V>(&self, vertices: &[V]) -> Self::VertexBuffer
  where
    V: Vertex;

  /// Create an index buffer holding `indices`.
  fn make_index_buffer<I>(&self, indices: &[I]) -> Self::IndexBuffer
  where
    I: Index;

  /// Group vertex buffers and an index buffer into a vertex array.
  ///
  /// The i-th buffer of `buffers` feeds the i-th vertex attribute.
  fn make_vertex_array(
    &self,
    buffers: Vec<Rc<Self::VertexBuffer>>,
    indices: Rc<Self::IndexBuffer>,
    mode: Mode,
  ) -> Self::VertexArray;

  /// Create a frame buffer out of optional attachments.
  fn make_frame_buffer(
    &self,
    color: Option<Rc<Self::Texture2d>>,
    depth: Option<Rc<Self::TextureDepth>>,
    stencil: Option<Rc<Self::TextureStencil>>,
  ) -> Result<Self::FrameBuffer, FrameBufferError>;

  /// Render into `frame_buffer`, or into the window if `None`.
  fn set_frame_buffer(&self, frame_buffer: Option<&Self::FrameBuffer>);

  /// Clear the color plane of the bound frame buffer to transparent black.
  fn clear_frame_buffer_color(&self);

  /// Clear the depth plane of the bound frame buffer to `1`.
  fn clear_frame_buffer_depth(&self);

  /// Clear the stencil plane of the bound frame buffer to `0`.
  fn clear_frame_buffer_stencil(&self);

  /// Convert a point in normalized device space into window pixels, relative to the viewport.
  fn to_window_coords(&self, point: [f32; 2]) -> [u32; 2] {
    self.viewport().to_window_coords(point)
  }

  /// Whether the scissor test is enabled.
  fn is_scissor_enabled(&self) -> bool;

  /// Enable or disable the scissor test.
  fn enable_scissor(&self, enable: bool);

  /// Current scissor box.
  fn scissor(&self) -> Rect;

  /// Set the scissor box.
  fn set_scissor(&self, rect: Rect);

  /// Current viewport.
  fn viewport(&self) -> Rect;

  /// Set the viewport.
  fn set_viewport(&self, rect: Rect);

  /// Enable or disable blending.
  fn enable_blend(&self, enable: bool);

  /// Set the blending factors, separately for the color and alpha channels.
  fn set_blend_func(
    &self,
    src_color: Factor,
    dst_color: Factor,
    src_alpha: Factor,
    dst_alpha: Factor,
  );

  /// Whether the depth test is enabled.
  fn is_depth_enabled(&self) -> bool;

  /// Enable or disable the depth test.
  fn enable_depth(&self, enable: bool);
}
