//! Graphics state.
//!
//! What the backend learns about the driver when it starts: the OpenGL version, a handful of
//! optional extensions and the handle of the window’s frame buffer.

use bitflags::bitflags;
use gl::types::*;
use log::debug;
use std::error;
use std::ffi::CStr;
use std::fmt;
use std::os::raw::c_char;
use std::rc::Rc;
use std::str::FromStr;

use crate::error::assert_no_error;
use ruis_render::context::NativeWindow;

/// OpenGL version, as reported by the driver.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Version {
  /// Major version.
  pub major: u16,
  /// Minor version.
  pub minor: u16,
}

impl Version {
  /// Create a version.
  pub const fn new(major: u16, minor: u16) -> Self {
    Version { major, minor }
  }
}

impl fmt::Display for Version {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    write!(f, "{}.{}", self.major, self.minor)
  }
}

impl FromStr for Version {
  type Err = ContextError;

  /// Parse a `GL_VERSION` string.
  ///
  /// The string starts with `major.minor`, optionally followed by a release number and
  /// vendor-specific information, which are ignored. OpenGL ES drivers prefix it with `OpenGL ES `.
  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let parse_error = || ContextError::VersionParse(s.to_owned());

    let version = s.strip_prefix("OpenGL ES ").unwrap_or(s);
    let (major, rest) = split_number(version).ok_or_else(parse_error)?;
    let rest = rest.strip_prefix('.').ok_or_else(parse_error)?;
    let (minor, _) = split_number(rest).ok_or_else(parse_error)?;

    Ok(Version { major, minor })
  }
}

// Split the leading decimal number out of a string.
fn split_number(s: &str) -> Option<(u16, &str)> {
  let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
  let n = s[..end].parse().ok()?;
  Some((n, &s[end..]))
}

bitflags! {
  /// Optional OpenGL extensions the backend makes use of.
  #[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
  pub struct Extensions: u8 {
    /// `GL_EXT_texture_swizzle`.
    const EXT_TEXTURE_SWIZZLE = 1 << 0;
    /// `GL_ARB_texture_swizzle`.
    const ARB_TEXTURE_SWIZZLE = 1 << 1;
    /// `GL_ARB_debug_output`.
    const ARB_DEBUG_OUTPUT = 1 << 2;
    /// `GL_KHR_debug`.
    const KHR_DEBUG = 1 << 3;
  }
}

impl Extensions {
  /// Flag of a single extension, or an empty set if it’s not one the backend cares about.
  pub fn from_name(name: &str) -> Self {
    match name {
      "GL_EXT_texture_swizzle" => Extensions::EXT_TEXTURE_SWIZZLE,
      "GL_ARB_texture_swizzle" => Extensions::ARB_TEXTURE_SWIZZLE,
      "GL_ARB_debug_output" => Extensions::ARB_DEBUG_OUTPUT,
      "GL_KHR_debug" => Extensions::KHR_DEBUG,
      _ => Extensions::empty(),
    }
  }

  /// Collect the flags of a list of extension names.
  pub fn from_names<'a, I>(names: I) -> Self
  where
    I: IntoIterator<Item = &'a str>,
  {
    names
      .into_iter()
      .fold(Extensions::empty(), |exts, name| exts | Extensions::from_name(name))
  }

  /// Parse a space-separated `GL_EXTENSIONS` string.
  pub fn from_list(list: &str) -> Self {
    Self::from_names(list.split_whitespace())
  }
}

/// Whether textures can swizzle their channels with the given driver.
///
/// Swizzled textures are stored as `GL_RED` and `GL_RG`, which need OpenGL 3.0. Swizzle extensions
/// are thus ignored below 3.0.
pub(crate) fn has_texture_swizzle(version: Version, extensions: Extensions) -> bool {
  let swizzle_ext =
    extensions.intersects(Extensions::EXT_TEXTURE_SWIZZLE | Extensions::ARB_TEXTURE_SWIZZLE);

  (swizzle_ext && version >= Version::new(3, 0)) || version >= Version::new(3, 3)
}

/// Errors that might happen when creating a context.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ContextError {
  /// The `GL_VERSION` string could not be parsed.
  VersionParse(String),
  /// The driver is too old to run shaders.
  UnsupportedVersion(Version),
}

impl fmt::Display for ContextError {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    match *self {
      ContextError::VersionParse(ref s) => write!(f, "cannot parse OpenGL version: {:?}", s),

      ContextError::UnsupportedVersion(ref v) => write!(
        f,
        "OpenGL {} is not supported, shaders need at least OpenGL 2.0",
        v
      ),
    }
  }
}

impl error::Error for ContextError {}

/// The graphics state.
///
/// Shared by the context and by the resources that need to make the rendering context current when
/// they are released.
pub struct GlState {
  window: Rc<dyn NativeWindow>,
  version: Version,
  extensions: Extensions,
  default_framebuffer: GLuint,
}

impl fmt::Debug for GlState {
  fn fmt(&self, f: &mut fmt::Formatter) -> Result<(), fmt::Error> {
    f.debug_struct("GlState")
      .field("version", &self.version)
      .field("extensions", &self.extensions)
      .field("default_framebuffer", &self.default_framebuffer)
      .finish()
  }
}

impl GlState {
  /// Query the driver through the rendering context of `window`.
  pub(crate) fn new(window: Rc<dyn NativeWindow>) -> Result<Self, ContextError> {
    window.bind_rendering_context();

    unsafe {
      let version_string = get_ctx_string(gl::VERSION).unwrap_or_default();
      debug!("OpenGL version string: {}", version_string);

      let version = version_string.parse::<Version>()?;
      debug!("parsed OpenGL version: {}", version);

      if version < Version::new(2, 0) {
        return Err(ContextError::UnsupportedVersion(version));
      }

      let extensions = get_ctx_extensions(version);
      debug!("supported OpenGL extensions: {:?}", extensions);

      // the window frame buffer is not 0 on every platform
      let default_framebuffer = get_ctx_bound_framebuffer();
      debug!("default frame buffer: {}", default_framebuffer);

      #[cfg(debug_assertions)]
      {
        if extensions.contains(Extensions::KHR_DEBUG) && gl::DebugMessageCallback::is_loaded() {
          gl::Enable(gl::DEBUG_OUTPUT);
          gl::DebugMessageCallback(Some(debug_message_callback), std::ptr::null());
          assert_no_error();
        }
      }

      gl::Enable(gl::CULL_FACE);
      assert_no_error();

      Ok(GlState {
        window,
        version,
        extensions,
        default_framebuffer,
      })
    }
  }

  /// Make the rendering context current.
  pub(crate) fn apply(&self) {
    self.window.bind_rendering_context();
  }

  /// Driver version.
  pub fn version(&self) -> Version {
    self.version
  }

  /// Supported extensions.
  pub fn extensions(&self) -> Extensions {
    self.extensions
  }

  /// Handle of the window frame buffer.
  pub fn default_framebuffer(&self) -> GLuint {
    self.default_framebuffer
  }

  /// Whether textures can swizzle their channels.
  pub(crate) fn has_texture_swizzle(&self) -> bool {
    has_texture_swizzle(self.version, self.extensions)
  }
}

unsafe fn get_ctx_string(name: GLenum) -> Option<String> {
  let s = gl::GetString(name);

  if s.is_null() {
    None
  } else {
    Some(
      CStr::from_ptr(s as *const c_char)
        .to_string_lossy()
        .into_owned(),
    )
  }
}

unsafe fn get_ctx_extensions(version: Version) -> Extensions {
  // GL_EXTENSIONS is not a valid glGetString name in core profiles
  if version >= Version::new(3, 0) && gl::GetStringi::is_loaded() {
    let mut count: GLint = 0;
    gl::GetIntegerv(gl::NUM_EXTENSIONS, &mut count);
    assert_no_error();

    let names: Vec<String> = (0..count.max(0) as GLuint)
      .filter_map(|i| {
        let s = gl::GetStringi(gl::EXTENSIONS, i);

        if s.is_null() {
          None
        } else {
          Some(
            CStr::from_ptr(s as *const c_char)
              .to_string_lossy()
              .into_owned(),
          )
        }
      })
      .collect();
    assert_no_error();

    Extensions::from_names(names.iter().map(String::as_str))
  } else {
    let list = get_ctx_string(gl::EXTENSIONS).unwrap_or_default();
    assert_no_error();

    Extensions::from_list(&list)
  }
}

pub(crate) unsafe fn get_ctx_bound_framebuffer() -> GLuint {
  let mut bound: GLint = 0;
  gl::GetIntegerv(gl::FRAMEBUFFER_BINDING, &mut bound);
  assert_no_error();
  bound as GLuint
}

pub(crate) unsafe fn get_ctx_current_program() -> GLuint {
  let mut used: GLint = 0;
  gl::GetIntegerv(gl::CURRENT_PROGRAM, &mut used);
  assert_no_error();
  used as GLuint
}

#[cfg(debug_assertions)]
extern "system" fn debug_message_callback(
  _source: GLenum,
  ty: GLenum,
  _id: GLuint,
  _severity: GLenum,
  _length: GLsizei,
  message: *const GLchar,
  _user_param: *mut std::os::raw::c_void,
) {
  if message.is_null() {
    return;
  }

  let message = unsafe { CStr::from_ptr(message) }.to_string_lossy();

  if ty == gl::DEBUG_TYPE_ERROR {
    log::error!("OpenGL: {}", message);
  } else {
    debug!("OpenGL: {}", message);
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_plain_version() {
    assert_eq!("2.1".parse::<Version>(), Ok(Version::new(2, 1)));
  }

  #[test]
  fn parse_version_with_vendor_suffix() {
    assert_eq!(
      "4.6.0 NVIDIA 535.54.03".parse::<Version>(),
      Ok(Version::new(4, 6))
    );
    assert_eq!(
      "3.3 (Core Profile) Mesa 23.1.4".parse::<Version>(),
      Ok(Version::new(3, 3))
    );
  }

  #[test]
  fn parse_es_version() {
    assert_eq!(
      "OpenGL ES 3.2 Mesa 23.1.4".parse::<Version>(),
      Ok(Version::new(3, 2))
    );
  }

  #[test]
  fn parse_malformed_version() {
    for s in &["", "4", "4.", ".6", "four.six", "4-6"] {
      assert_eq!(
        s.parse::<Version>(),
        Err(ContextError::VersionParse((*s).to_owned())),
        "{:?} should not parse",
        s
      );
    }
  }

  #[test]
  fn versions_are_ordered() {
    assert!(Version::new(1, 5) < Version::new(2, 0));
    assert!(Version::new(3, 3) > Version::new(3, 2));
    assert!(Version::new(10, 0) > Version::new(9, 9));
  }

  #[test]
  fn extensions_from_list() {
    let exts = Extensions::from_list("GL_ARB_multitexture GL_KHR_debug  GL_EXT_texture_swizzle\n");
    assert_eq!(exts, Extensions::KHR_DEBUG | Extensions::EXT_TEXTURE_SWIZZLE);
  }

  #[test]
  fn extensions_from_names() {
    let exts = Extensions::from_names(vec!["GL_ARB_texture_swizzle", "GL_ARB_debug_output"]);
    assert_eq!(
      exts,
      Extensions::ARB_TEXTURE_SWIZZLE | Extensions::ARB_DEBUG_OUTPUT
    );
    assert_eq!(Extensions::from_names(Vec::new()), Extensions::empty());
  }

  #[test]
  fn extension_names_are_exact() {
    assert_eq!(Extensions::from_name("GL_KHR_debug"), Extensions::KHR_DEBUG);
    assert_eq!(Extensions::from_name("GL_KHR_debug2"), Extensions::empty());
    assert_eq!(Extensions::from_name("gl_khr_debug"), Extensions::empty());
  }

  #[test]
  fn texture_swizzle_availability() {
    assert!(!has_texture_swizzle(Version::new(2, 1), Extensions::empty()));
    assert!(!has_texture_swizzle(Version::new(3, 2), Extensions::KHR_DEBUG));
    assert!(has_texture_swizzle(Version::new(3, 3), Extensions::empty()));
    assert!(has_texture_swizzle(
      Version::new(3, 1),
      Extensions::EXT_TEXTURE_SWIZZLE
    ));
    assert!(has_texture_swizzle(
      Version::new(3, 0),
      Extensions::ARB_TEXTURE_SWIZZLE
    ));
  }

  #[test]
  fn texture_swizzle_needs_red_green_formats() {
    let all = Extensions::EXT_TEXTURE_SWIZZLE | Extensions::ARB_TEXTURE_SWIZZLE;

    assert!(!has_texture_swizzle(Version::new(2, 1), all));
    assert!(!has_texture_swizzle(Version::new(2, 0), Extensions::EXT_TEXTURE_SWIZZLE));
  }
}
