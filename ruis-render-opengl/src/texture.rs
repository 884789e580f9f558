//! OpenGL textures.
//!
//! Textures are 8 bits per channel. Single and dual channel textures are stored as red and red-green
//! textures whose channels are swizzled, so that shaders read them as luminance and
//! luminance-alpha. Drivers unable to swizzle get the legacy luminance formats instead.

use gl::types::*;
use log::{debug, warn};
use std::os::raw::c_void;
use std::ptr;

use crate::error::assert_no_error;
use crate::state::GlState;
use ruis_render::pixel::{Format, Image};
use ruis_render::texture::{
  self as api, check_texels, CubeFaces, Dims, Filter, Mipmap, TextureError, TextureParams,
};

// legacy formats, not exposed by core profile bindings
const LUMINANCE: GLenum = 0x1909;
const LUMINANCE_ALPHA: GLenum = 0x190A;

const GREY_SWIZZLE: &[(GLenum, GLenum)] = &[
  (gl::TEXTURE_SWIZZLE_R, gl::RED),
  (gl::TEXTURE_SWIZZLE_G, gl::RED),
  (gl::TEXTURE_SWIZZLE_B, gl::RED),
];

const GREY_ALPHA_SWIZZLE: &[(GLenum, GLenum)] = &[
  (gl::TEXTURE_SWIZZLE_R, gl::RED),
  (gl::TEXTURE_SWIZZLE_G, gl::RED),
  (gl::TEXTURE_SWIZZLE_B, gl::RED),
  (gl::TEXTURE_SWIZZLE_A, gl::GREEN),
];

/// How pixels of a given [`Format`] are stored by OpenGL.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct OpenGLPixelFormat {
  /// Both the internal format and the format of uploaded pixels.
  pub(crate) format: GLenum,
  /// Texture parameters to set so that shaders read the expected channels.
  pub(crate) swizzle: &'static [(GLenum, GLenum)],
}

pub(crate) fn opengl_pixel_format(format: Format, swizzle: bool) -> OpenGLPixelFormat {
  match (format, swizzle) {
    (Format::Grey, true) => OpenGLPixelFormat {
      format: gl::RED,
      swizzle: GREY_SWIZZLE,
    },

    (Format::Grey, false) => OpenGLPixelFormat {
      format: LUMINANCE,
      swizzle: &[],
    },

    (Format::GreyAlpha, true) => OpenGLPixelFormat {
      format: gl::RG,
      swizzle: GREY_ALPHA_SWIZZLE,
    },

    (Format::GreyAlpha, false) => OpenGLPixelFormat {
      format: LUMINANCE_ALPHA,
      swizzle: &[],
    },

    (Format::Rgb, _) => OpenGLPixelFormat {
      format: gl::RGB,
      swizzle: &[],
    },

    (Format::Rgba, _) => OpenGLPixelFormat {
      format: gl::RGBA,
      swizzle: &[],
    },
  }
}

fn opengl_mag_filter(filter: Filter) -> GLenum {
  match filter {
    Filter::Nearest => gl::NEAREST,
    Filter::Linear => gl::LINEAR,
  }
}

fn opengl_min_filter(filter: Filter, mipmap: Mipmap) -> GLenum {
  match (mipmap, filter) {
    (Mipmap::None, _) => opengl_mag_filter(filter),
    (Mipmap::Nearest, Filter::Nearest) => gl::NEAREST_MIPMAP_NEAREST,
    (Mipmap::Nearest, Filter::Linear) => gl::LINEAR_MIPMAP_NEAREST,
    (Mipmap::Linear, Filter::Nearest) => gl::NEAREST_MIPMAP_LINEAR,
    (Mipmap::Linear, Filter::Linear) => gl::LINEAR_MIPMAP_LINEAR,
  }
}

fn texels_ptr(texels: &[u8]) -> *const c_void {
  if texels.is_empty() {
    ptr::null()
  } else {
    texels.as_ptr() as *const c_void
  }
}

/// Pixel format to use with `state`, warning when falling back to luminance formats.
fn pixel_format_for(state: &GlState, format: Format) -> OpenGLPixelFormat {
  let swizzle = state.has_texture_swizzle();

  if !swizzle && matches!(format, Format::Grey | Format::GreyAlpha) {
    warn!(
      "texture swizzling unavailable with OpenGL {}, storing {:?} pixels as luminance",
      state.version(),
      format
    );
  }

  opengl_pixel_format(format, swizzle)
}

// GPU texture object, deleted on drop.
#[derive(Debug)]
struct TextureObject {
  handle: GLuint,
}

impl TextureObject {
  unsafe fn new(target: GLenum) -> Self {
    let mut handle: GLuint = 0;

    gl::GenTextures(1, &mut handle);
    assert_no_error();

    gl::BindTexture(target, handle);
    assert_no_error();

    TextureObject { handle }
  }

  fn bind(&self, target: GLenum, unit: u32) {
    unsafe {
      // GL_TEXTUREi = GL_TEXTURE0 + i
      gl::ActiveTexture(gl::TEXTURE0 + unit);
      assert_no_error();

      gl::BindTexture(target, self.handle);
      assert_no_error();
    }
  }
}

impl Drop for TextureObject {
  fn drop(&mut self) {
    unsafe {
      gl::DeleteTextures(1, &self.handle);
    }
  }
}

unsafe fn apply_swizzle(target: GLenum, pf: OpenGLPixelFormat) {
  for &(channel, source) in pf.swizzle {
    gl::TexParameteri(target, channel, source as GLint);
    assert_no_error();
  }
}

unsafe fn apply_filters(target: GLenum, min_filter: GLenum, mag_filter: GLenum) {
  // filters must be set on every texture, the default minification filter expects mipmaps
  gl::TexParameteri(target, gl::TEXTURE_MIN_FILTER, min_filter as GLint);
  assert_no_error();
  gl::TexParameteri(target, gl::TEXTURE_MAG_FILTER, mag_filter as GLint);
  assert_no_error();
}

unsafe fn apply_clamp_to_edge(target: GLenum, wraps: &[GLenum]) {
  for &wrap in wraps {
    gl::TexParameteri(target, wrap, gl::CLAMP_TO_EDGE as GLint);
    assert_no_error();
  }
}

unsafe fn upload_8bit(target: GLenum, pf: OpenGLPixelFormat, dims: Dims, texels: &[u8]) {
  // rows are tightly packed
  gl::PixelStorei(gl::UNPACK_ALIGNMENT, 1);
  assert_no_error();

  gl::TexImage2D(
    target,
    0,
    pf.format as GLint,
    dims[0] as GLsizei,
    dims[1] as GLsizei,
    0,
    pf.format,
    gl::UNSIGNED_BYTE,
    texels_ptr(texels),
  );
  assert_no_error();
}

/// OpenGL 2D texture.
#[derive(Debug)]
pub struct Texture2d {
  texture: TextureObject,
  format: Format,
  dims: Dims,
}

impl Texture2d {
  pub(crate) fn new(
    state: &GlState,
    format: Format,
    dims: Dims,
    texels: &[u8],
    params: TextureParams,
  ) -> Result<Self, TextureError> {
    check_texels(format, dims, texels)?;

    let pf = pixel_format_for(state, format);

    unsafe {
      let texture = TextureObject::new(gl::TEXTURE_2D);

      apply_swizzle(gl::TEXTURE_2D, pf);
      upload_8bit(gl::TEXTURE_2D, pf, dims, texels);

      if !texels.is_empty() && params.mipmap != Mipmap::None {
        if gl::GenerateMipmap::is_loaded() {
          gl::GenerateMipmap(gl::TEXTURE_2D);
          assert_no_error();
        } else {
          warn!("glGenerateMipmap() is unavailable, texture has no mipmaps");
        }
      }

      apply_filters(
        gl::TEXTURE_2D,
        opengl_min_filter(params.min_filter, params.mipmap),
        opengl_mag_filter(params.mag_filter),
      );
      apply_clamp_to_edge(gl::TEXTURE_2D, &[gl::TEXTURE_WRAP_S, gl::TEXTURE_WRAP_T]);

      debug!(
        "created {:?} texture {} of {}×{}",
        format, texture.handle, dims[0], dims[1]
      );

      Ok(Texture2d {
        texture,
        format,
        dims,
      })
    }
  }

  /// Bind the texture to texture unit `unit`.
  pub fn bind(&self, unit: u32) {
    self.texture.bind(gl::TEXTURE_2D, unit);
  }

  /// OpenGL handle of the texture.
  pub fn handle(&self) -> GLuint {
    self.texture.handle
  }
}

impl api::Texture2d for Texture2d {
  fn format(&self) -> Format {
    self.format
  }

  fn dims(&self) -> Dims {
    self.dims
  }
}

/// OpenGL depth texture.
#[derive(Debug)]
pub struct TextureDepth {
  texture: TextureObject,
  dims: Dims,
}

impl TextureDepth {
  pub(crate) fn new(dims: Dims) -> Self {
    unsafe {
      let texture = TextureObject::new(gl::TEXTURE_2D);

      gl::TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::DEPTH_COMPONENT as GLint,
        dims[0] as GLsizei,
        dims[1] as GLsizei,
        0,
        gl::DEPTH_COMPONENT,
        gl::FLOAT,
        ptr::null(),
      );
      assert_no_error();

      apply_filters(gl::TEXTURE_2D, gl::NEAREST, gl::NEAREST);
      apply_clamp_to_edge(gl::TEXTURE_2D, &[gl::TEXTURE_WRAP_S, gl::TEXTURE_WRAP_T]);

      debug!(
        "created depth texture {} of {}×{}",
        texture.handle, dims[0], dims[1]
      );

      TextureDepth { texture, dims }
    }
  }

  /// OpenGL handle of the texture.
  pub fn handle(&self) -> GLuint {
    self.texture.handle
  }
}

impl api::TextureDepth for TextureDepth {
  fn dims(&self) -> Dims {
    self.dims
  }
}

/// OpenGL stencil texture.
///
/// Stored as packed 24-bit depth and 8-bit stencil.
#[derive(Debug)]
pub struct TextureStencil {
  texture: TextureObject,
  dims: Dims,
}

impl TextureStencil {
  pub(crate) fn new(dims: Dims) -> Self {
    unsafe {
      let texture = TextureObject::new(gl::TEXTURE_2D);

      gl::TexImage2D(
        gl::TEXTURE_2D,
        0,
        gl::DEPTH24_STENCIL8 as GLint,
        dims[0] as GLsizei,
        dims[1] as GLsizei,
        0,
        gl::DEPTH_STENCIL,
        gl::UNSIGNED_INT_24_8,
        ptr::null(),
      );
      assert_no_error();

      apply_filters(gl::TEXTURE_2D, gl::NEAREST, gl::NEAREST);
      apply_clamp_to_edge(gl::TEXTURE_2D, &[gl::TEXTURE_WRAP_S, gl::TEXTURE_WRAP_T]);

      debug!(
        "created stencil texture {} of {}×{}",
        texture.handle, dims[0], dims[1]
      );

      TextureStencil { texture, dims }
    }
  }

  /// OpenGL handle of the texture.
  pub fn handle(&self) -> GLuint {
    self.texture.handle
  }
}

impl api::TextureStencil for TextureStencil {
  fn dims(&self) -> Dims {
    self.dims
  }
}

/// Faces in OpenGL upload order, starting at `GL_TEXTURE_CUBE_MAP_POSITIVE_X`.
///
/// Texture coordinates y axis goes downwards, so both y faces are swapped; every face is flipped.
fn cube_upload_order(faces: CubeFaces) -> [Image; 6] {
  let mut faces = faces.into_array();
  faces.swap(2, 3);

  for face in &mut faces {
    face.flip_vertical();
  }

  faces
}

/// OpenGL cube texture.
#[derive(Debug)]
pub struct TextureCube {
  texture: TextureObject,
  face_dims: Dims,
}

impl TextureCube {
  pub(crate) fn new(state: &GlState, faces: CubeFaces) -> Result<Self, TextureError> {
    faces.check()?;

    let format = faces.positive_x.format();
    let face_dims = faces.positive_x.dims();
    let pf = pixel_format_for(state, format);

    unsafe {
      let texture = TextureObject::new(gl::TEXTURE_CUBE_MAP);

      apply_swizzle(gl::TEXTURE_CUBE_MAP, pf);

      for (i, face) in cube_upload_order(faces).iter().enumerate() {
        upload_8bit(
          gl::TEXTURE_CUBE_MAP_POSITIVE_X + i as GLenum,
          pf,
          face_dims,
          face.pixels(),
        );
      }

      apply_filters(gl::TEXTURE_CUBE_MAP, gl::LINEAR, gl::LINEAR);
      apply_clamp_to_edge(
        gl::TEXTURE_CUBE_MAP,
        &[gl::TEXTURE_WRAP_S, gl::TEXTURE_WRAP_T, gl::TEXTURE_WRAP_R],
      );

      debug!(
        "created {:?} cube texture {} of {}×{} faces",
        format, texture.handle, face_dims[0], face_dims[1]
      );

      Ok(TextureCube { texture, face_dims })
    }
  }

  /// Bind the texture to texture unit `unit`.
  pub fn bind(&self, unit: u32) {
    self.texture.bind(gl::TEXTURE_CUBE_MAP, unit);
  }

  /// OpenGL handle of the texture.
  pub fn handle(&self) -> GLuint {
    self.texture.handle
  }
}

impl api::TextureCube for TextureCube {
  fn face_dims(&self) -> Dims {
    self.face_dims
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn swizzled_formats() {
    let grey = opengl_pixel_format(Format::Grey, true);
    assert_eq!(grey.format, gl::RED);
    assert_eq!(grey.swizzle, GREY_SWIZZLE);

    let grey_alpha = opengl_pixel_format(Format::GreyAlpha, true);
    assert_eq!(grey_alpha.format, gl::RG);
    assert_eq!(
      grey_alpha.swizzle.last(),
      Some(&(gl::TEXTURE_SWIZZLE_A, gl::GREEN))
    );
  }

  #[test]
  fn luminance_fallback_formats() {
    assert_eq!(
      opengl_pixel_format(Format::Grey, false),
      OpenGLPixelFormat {
        format: LUMINANCE,
        swizzle: &[]
      }
    );
    assert_eq!(
      opengl_pixel_format(Format::GreyAlpha, false),
      OpenGLPixelFormat {
        format: LUMINANCE_ALPHA,
        swizzle: &[]
      }
    );
  }

  #[test]
  fn color_formats_never_swizzle() {
    for &swizzle in &[true, false] {
      assert_eq!(opengl_pixel_format(Format::Rgb, swizzle).format, gl::RGB);
      assert_eq!(opengl_pixel_format(Format::Rgba, swizzle).format, gl::RGBA);
      assert!(opengl_pixel_format(Format::Rgb, swizzle).swizzle.is_empty());
      assert!(opengl_pixel_format(Format::Rgba, swizzle).swizzle.is_empty());
    }
  }

  #[test]
  fn min_filter_without_mipmaps() {
    assert_eq!(opengl_min_filter(Filter::Nearest, Mipmap::None), gl::NEAREST);
    assert_eq!(opengl_min_filter(Filter::Linear, Mipmap::None), gl::LINEAR);
  }

  #[test]
  fn min_filter_with_mipmaps() {
    assert_eq!(
      opengl_min_filter(Filter::Nearest, Mipmap::Nearest),
      gl::NEAREST_MIPMAP_NEAREST
    );
    assert_eq!(
      opengl_min_filter(Filter::Linear, Mipmap::Nearest),
      gl::LINEAR_MIPMAP_NEAREST
    );
    assert_eq!(
      opengl_min_filter(Filter::Nearest, Mipmap::Linear),
      gl::NEAREST_MIPMAP_LINEAR
    );
    assert_eq!(
      opengl_min_filter(Filter::Linear, Mipmap::Linear),
      gl::LINEAR_MIPMAP_LINEAR
    );
  }

  #[test]
  fn empty_texels_upload_null() {
    assert!(texels_ptr(&[]).is_null());
    assert!(!texels_ptr(&[0]).is_null());
  }

  fn marked_face(mark: u8) -> Image {
    // 1×2 grey face: the top row holds the mark, the bottom one is 0
    Image::new(Format::Grey, [1, 2], vec![mark, 0]).unwrap()
  }

  #[test]
  fn cube_faces_upload_order() {
    let faces = CubeFaces {
      positive_x: marked_face(1),
      negative_x: marked_face(2),
      positive_y: marked_face(3),
      negative_y: marked_face(4),
      positive_z: marked_face(5),
      negative_z: marked_face(6),
    };

    let uploaded = cube_upload_order(faces);
    let marks: Vec<u8> = uploaded.iter().map(|face| face.pixels()[1]).collect();

    assert_eq!(marks, vec![1, 2, 4, 3, 5, 6]);
    assert!(uploaded.iter().all(|face| face.pixels()[0] == 0));
  }
}
