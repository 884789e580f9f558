//! Frame buffers.
//!
//! A frame buffer is an offscreen render target. Its color, depth and stencil planes are textures
//! created beforehand and attached when the frame buffer is created.

use std::error;
use std::fmt;
use std::rc::Rc;

use crate::context::Context;

/// A frame buffer and its attachments.
pub trait FrameBuffer<C>
where
  C: ?Sized + Context,
{
  /// Color attachment, if any.
  fn color(&self) -> Option<&Rc<C::Texture2d>>;

  /// Depth attachment, if any.
  fn depth(&self) -> Option<&Rc<C::TextureDepth>>;

  /// Stencil attachment, if any.
  fn stencil(&self) -> Option<&Rc<C::TextureStencil>>;
}

/// Frame buffer error.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FrameBufferError {
  /// The backend cannot attach stencil textures.
  StencilNotImplemented,
  /// The driver reported the frame buffer as incomplete.
  ///
  /// The value is the raw completeness status returned by the driver.
  Incomplete(u32),
}

impl fmt::Display for FrameBufferError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      FrameBufferError::StencilNotImplemented => {
        f.write_str("stencil texture attachments are not implemented")
      }

      FrameBufferError::Incomplete(status) => {
        write!(f, "incomplete frame buffer: status = {}", status)
      }
    }
  }
}

impl error::Error for FrameBufferError {}
