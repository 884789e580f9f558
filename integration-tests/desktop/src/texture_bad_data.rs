//! Pixel data that doesn’t fit the texture dimensions is rejected, never truncated.

use ruis_render::context::Context as _;
use ruis_render::pixel::Format;
use ruis_render::texture::{TextureError, TextureParams};
use ruis_render_opengl::assert_no_error;

use crate::surface::Surface;

pub fn fixture() {
  let surface = Surface::new("texture-bad-data");
  let ctx = &surface.context;
  let params = TextureParams::default();

  // 4 RGB pixels per row is 12 bytes
  let e = ctx
    .make_texture_2d(Format::Rgb, [4, 2], &[0; 13], params)
    .unwrap_err();
  assert_eq!(
    e,
    TextureError::RowSizeMismatch {
      len: 13,
      row_len: 12
    }
  );

  let e = ctx
    .make_texture_2d(Format::Rgb, [4, 2], &[0; 12], params)
    .unwrap_err();
  assert_eq!(e, TextureError::RowCountMismatch { rows: 1, height: 2 });

  assert!(ctx
    .make_texture_2d(Format::Rgb, [4, 2], &[0; 24], params)
    .is_ok());
  assert_no_error();
}
