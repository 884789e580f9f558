//! OpenGL frame buffers.

use gl::types::*;
use log::debug;
use std::rc::Rc;

use crate::context::Context;
use crate::error::assert_no_error;
use crate::state::{get_ctx_bound_framebuffer, GlState};
use crate::texture::{Texture2d, TextureDepth, TextureStencil};
use ruis_render::framebuffer::{self as api, FrameBufferError};

/// OpenGL frame buffer.
///
/// Frame buffer objects are not shared between OpenGL contexts, so the frame buffer makes its
/// context current before being deleted.
#[derive(Debug)]
pub struct FrameBuffer {
  handle: GLuint,
  color: Option<Rc<Texture2d>>,
  depth: Option<Rc<TextureDepth>>,
  stencil: Option<Rc<TextureStencil>>,
  state: Rc<GlState>,
}

impl FrameBuffer {
  pub(crate) fn new(
    state: Rc<GlState>,
    color: Option<Rc<Texture2d>>,
    depth: Option<Rc<TextureDepth>>,
    stencil: Option<Rc<TextureStencil>>,
  ) -> Result<Self, FrameBufferError> {
    if stencil.is_some() {
      return Err(FrameBufferError::StencilNotImplemented);
    }

    unsafe {
      let mut handle: GLuint = 0;
      gl::GenFramebuffers(1, &mut handle);
      assert_no_error();

      let framebuffer = FrameBuffer {
        handle,
        color,
        depth,
        stencil,
        state,
      };

      let old_handle = get_ctx_bound_framebuffer();

      gl::BindFramebuffer(gl::FRAMEBUFFER, handle);
      assert_no_error();

      let attached = framebuffer.attach();

      gl::BindFramebuffer(gl::FRAMEBUFFER, old_handle);
      assert_no_error();

      attached.map(|_| {
        debug!("created frame buffer {}", handle);
        framebuffer
      })
    }
  }

  // Attach the textures to the bound frame buffer and check it’s complete.
  unsafe fn attach(&self) -> Result<(), FrameBufferError> {
    if let Some(ref color) = self.color {
      gl::FramebufferTexture2D(
        gl::FRAMEBUFFER,
        gl::COLOR_ATTACHMENT0,
        gl::TEXTURE_2D,
        color.handle(),
        0,
      );
      assert_no_error();
    }

    if let Some(ref depth) = self.depth {
      gl::FramebufferTexture2D(
        gl::FRAMEBUFFER,
        gl::DEPTH_ATTACHMENT,
        gl::TEXTURE_2D,
        depth.handle(),
        0,
      );
      assert_no_error();
    }

    let status = gl::CheckFramebufferStatus(gl::FRAMEBUFFER);
    assert_no_error();

    if status == gl::FRAMEBUFFER_COMPLETE {
      Ok(())
    } else {
      Err(FrameBufferError::Incomplete(status))
    }
  }

  /// OpenGL handle of the frame buffer.
  pub fn handle(&self) -> GLuint {
    self.handle
  }
}

impl Drop for FrameBuffer {
  fn drop(&mut self) {
    self.state.apply();

    unsafe {
      gl::DeleteFramebuffers(1, &self.handle);
    }
  }
}

impl api::FrameBuffer<Context> for FrameBuffer {
  fn color(&self) -> Option<&Rc<Texture2d>> {
    self.color.as_ref()
  }

  fn depth(&self) -> Option<&Rc<TextureDepth>> {
    self.depth.as_ref()
  }

  fn stencil(&self) -> Option<&Rc<TextureStencil>> {
    self.stencil.as_ref()
  }
}
