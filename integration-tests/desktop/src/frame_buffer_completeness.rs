//! Frame buffer creation never leaves the new frame buffer bound, and can be repeated.

use gl::types::*;
use ruis_render::context::Context as _;
use ruis_render::framebuffer::{FrameBuffer as _, FrameBufferError};
use ruis_render::pixel::Format;
use ruis_render::texture::TextureParams;
use ruis_render_opengl::assert_no_error;
use std::rc::Rc;

use crate::surface::Surface;

fn bound_framebuffer() -> GLuint {
  let mut handle: GLint = 0;
  unsafe { gl::GetIntegerv(gl::FRAMEBUFFER_BINDING, &mut handle) };
  handle as GLuint
}

pub fn fixture() {
  let surface = Surface::new("frame-buffer-completeness");
  let ctx = &surface.context;
  let default_framebuffer = ctx.default_framebuffer();

  let color = Rc::new(
    ctx
      .make_texture_2d(Format::Rgba, [32, 32], &[], TextureParams::default())
      .expect("color texture"),
  );

  let fb = ctx
    .make_frame_buffer(Some(color.clone()), None, None)
    .expect("color-only frame buffer");
  assert!(fb.color().is_some());
  assert!(fb.depth().is_none());
  assert_eq!(bound_framebuffer(), default_framebuffer);

  let depth = Rc::new(ctx.make_texture_depth([32, 32]));
  let fb_depth = ctx
    .make_frame_buffer(Some(color.clone()), Some(depth), None)
    .expect("color and depth frame buffer");
  assert!(fb_depth.depth().is_some());
  assert_eq!(bound_framebuffer(), default_framebuffer);

  let stencil = Rc::new(ctx.make_texture_stencil([32, 32]));
  let e = ctx
    .make_frame_buffer(Some(color.clone()), None, Some(stencil))
    .unwrap_err();
  assert_eq!(e, FrameBufferError::StencilNotImplemented);
  assert_eq!(bound_framebuffer(), default_framebuffer);

  // binding and unbinding
  ctx.set_frame_buffer(Some(&fb));
  assert_eq!(bound_framebuffer(), fb.handle());
  ctx.set_frame_buffer(None);
  assert_eq!(bound_framebuffer(), default_framebuffer);

  drop(fb);
  drop(fb_depth);
  assert_no_error();

  // the color texture outlived its frame buffers and can be attached again
  assert_eq!(Rc::strong_count(&color), 1);
  let fb = ctx
    .make_frame_buffer(Some(color), None, None)
    .expect("frame buffer after drop");
  drop(fb);
  assert_no_error();
}
