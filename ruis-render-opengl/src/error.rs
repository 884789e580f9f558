//! OpenGL error checking.
//!
//! OpenGL records errors instead of reporting them; they are only known by polling `glGetError`.
//! Every call that can fail is followed by [`assert_no_error`], which panics on a recorded error in
//! debug builds (or when the `check-errors` feature is enabled) and does nothing otherwise.

use gl::types::*;
use std::error;
use std::fmt;

/// An error recorded by the OpenGL driver.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum GlError {
  /// `GL_INVALID_ENUM`.
  InvalidEnum,
  /// `GL_INVALID_VALUE`.
  InvalidValue,
  /// `GL_INVALID_OPERATION`.
  InvalidOperation,
  /// `GL_INVALID_FRAMEBUFFER_OPERATION`.
  InvalidFramebufferOperation,
  /// `GL_OUT_OF_MEMORY`.
  OutOfMemory,
  /// Any other error code.
  Unknown(GLenum),
}

impl GlError {
  /// Decode an error code as returned by `glGetError`.
  ///
  /// `GL_NO_ERROR` decodes to `None`.
  pub fn from_code(code: GLenum) -> Option<Self> {
    match code {
      gl::NO_ERROR => None,
      gl::INVALID_ENUM => Some(GlError::InvalidEnum),
      gl::INVALID_VALUE => Some(GlError::InvalidValue),
      gl::INVALID_OPERATION => Some(GlError::InvalidOperation),
      gl::INVALID_FRAMEBUFFER_OPERATION => Some(GlError::InvalidFramebufferOperation),
      gl::OUT_OF_MEMORY => Some(GlError::OutOfMemory),
      _ => Some(GlError::Unknown(code)),
    }
  }

  /// Poll the driver for the oldest recorded error, clearing it.
  pub fn poll() -> Option<Self> {
    Self::from_code(unsafe { gl::GetError() })
  }
}

impl fmt::Display for GlError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      GlError::InvalidEnum => f.write_str("OpenGL error: GL_INVALID_ENUM"),
      GlError::InvalidValue => f.write_str("OpenGL error: GL_INVALID_VALUE"),
      GlError::InvalidOperation => f.write_str("OpenGL error: GL_INVALID_OPERATION"),
      GlError::InvalidFramebufferOperation => {
        f.write_str("OpenGL error: GL_INVALID_FRAMEBUFFER_OPERATION")
      }
      GlError::OutOfMemory => f.write_str("OpenGL error: GL_OUT_OF_MEMORY"),
      GlError::Unknown(code) => write!(f, "unknown OpenGL error, code = {}", code),
    }
  }
}

impl error::Error for GlError {}

/// Panic if the driver recorded an error since the last check.
///
/// The panic message points at the caller. This is a no-op in release builds, unless the
/// `check-errors` feature is enabled.
#[track_caller]
#[inline]
pub fn assert_no_error() {
  #[cfg(any(debug_assertions, feature = "check-errors"))]
  {
    if let Some(e) = GlError::poll() {
      panic!("{}", e);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn no_error_decodes_to_none() {
    assert_eq!(GlError::from_code(gl::NO_ERROR), None);
  }

  #[test]
  fn known_codes() {
    assert_eq!(
      GlError::from_code(gl::INVALID_ENUM),
      Some(GlError::InvalidEnum)
    );
    assert_eq!(
      GlError::from_code(gl::INVALID_VALUE),
      Some(GlError::InvalidValue)
    );
    assert_eq!(
      GlError::from_code(gl::INVALID_OPERATION),
      Some(GlError::InvalidOperation)
    );
    assert_eq!(
      GlError::from_code(gl::INVALID_FRAMEBUFFER_OPERATION),
      Some(GlError::InvalidFramebufferOperation)
    );
    assert_eq!(
      GlError::from_code(gl::OUT_OF_MEMORY),
      Some(GlError::OutOfMemory)
    );
  }

  #[test]
  fn unknown_code_keeps_its_value() {
    let e = GlError::from_code(0x0503).unwrap();

    assert_eq!(e, GlError::Unknown(0x0503));
    assert_eq!(e.to_string(), "unknown OpenGL error, code = 1283");
  }

  #[test]
  fn display_names_the_code() {
    assert!(GlError::OutOfMemory.to_string().ends_with("GL_OUT_OF_MEMORY"));
  }
}
